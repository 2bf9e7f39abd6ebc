#![allow(clippy::unused_async)]

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tracing::instrument;

use super::AppState;
use super::envelope::{ApiError, ApiResponse};
use super::extract::ApiPath;
use crate::format::{HealthData, LocaleData, LocalesData, TranslationData};

pub async fn health(State(state): State<AppState>) -> Response {
    let data = HealthData {
        status: "healthy",
        service: &state.service_name,
    };
    ApiResponse::ok(data, "Service en bonne santé").into_response()
}

pub async fn locales(State(state): State<AppState>) -> Response {
    let locales = state.catalog.list_locales();
    let count = locales.len();
    ApiResponse::ok(LocalesData { locales }, "Locales disponibles récupérées")
        .with_count(count)
        .into_response()
}

#[instrument(skip(state))]
pub async fn translations_for_locale(
    State(state): State<AppState>,
    ApiPath(locale): ApiPath<String>,
) -> Result<Response, ApiError> {
    let translations = state.catalog.lookup_locale(&locale)?;
    let data = LocaleData {
        locale: &locale,
        translations,
    };
    Ok(ApiResponse::ok(data, "Traductions récupérées")
        .with_count(translations.len())
        .into_response())
}

#[instrument(skip(state))]
pub async fn translation_by_key(
    State(state): State<AppState>,
    ApiPath((locale, key)): ApiPath<(String, String)>,
) -> Result<Response, ApiError> {
    let value = state.catalog.lookup_key(&locale, &key)?;
    let data = TranslationData {
        locale: &locale,
        key: &key,
        value,
    };
    Ok(ApiResponse::ok(data, "Traduction récupérée").into_response())
}

pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
