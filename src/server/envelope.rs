//! Fixed response envelope shared by every endpoint.
//!
//! `{ "success": bool, "data": ..., "message": str, "error": str|null, "meta": ...|null }`

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::UmbraError;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Meta {
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    pub error: Option<&'static str>,
    pub meta: Option<Meta>,
}

/// Successful response: HTTP 200 with `success: true`.
#[derive(Debug)]
pub struct ApiResponse<T> {
    envelope: Envelope<T>,
}

impl<T: Serialize> ApiResponse<T> {
    #[must_use]
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            envelope: Envelope {
                success: true,
                data: Some(data),
                message: message.into(),
                error: None,
                meta: None,
            },
        }
    }

    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.envelope.meta = Some(Meta { count });
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.envelope)).into_response()
    }
}

/// Failed response: `success: false`, `data: null`, stable `error` code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", "Ressource introuvable")
    }

    /// Request parameters that could not be decoded.
    #[must_use]
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "bad_request", "Requête invalide")
    }

    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            "method_not_allowed",
            "Méthode non autorisée",
        )
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "Erreur interne du serveur",
        )
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }
}

impl From<UmbraError> for ApiError {
    fn from(err: UmbraError) -> Self {
        if !err.is_not_found() {
            tracing::error!(error = %err, "Request failed");
            return Self::internal();
        }

        let message = match &err {
            UmbraError::LocaleNotFound { locale } => format!("Locale \"{locale}\" inconnue"),
            UmbraError::KeyNotFound { locale, key } => {
                format!("Clé \"{key}\" introuvable pour la locale {locale}")
            }
            _ => "Ressource introuvable".to_string(),
        };
        Self::new(StatusCode::NOT_FOUND, err.code(), message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope: Envelope<()> = Envelope {
            success: false,
            data: None,
            message: self.message,
            error: Some(self.code),
            meta: None,
        };
        (self.status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_locale_not_found_maps_to_404() {
        let err = ApiError::from(UmbraError::LocaleNotFound {
            locale: "it".into(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "locale_not_found");
        assert_eq!(err.message, "Locale \"it\" inconnue");
    }

    #[test]
    fn test_key_not_found_maps_to_404() {
        let err = ApiError::from(UmbraError::KeyNotFound {
            locale: "fr".into(),
            key: "nope".into(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "key_not_found");
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = ApiError::from(UmbraError::MissingCatalog(PathBuf::from("/secret/path.json")));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "internal_error");
        assert!(!err.message.contains("secret"));
    }

    #[test]
    fn test_envelope_shape() {
        let response: ApiResponse<&str> = ApiResponse::ok("x", "done").with_count(3);
        let json = serde_json::to_value(&response.envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "x");
        assert_eq!(json["error"], serde_json::Value::Null);
        assert_eq!(json["meta"]["count"], 3);
    }
}
