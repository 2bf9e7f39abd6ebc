//! Extractors whose rejections stay inside the response envelope.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::envelope::ApiError;

/// Path parameters; undecodable segments become a `bad_request` envelope.
///
/// ```ignore
/// async fn handler(ApiPath(locale): ApiPath<String>) -> Response { ... }
/// ```
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, uri = %parts.uri, "Rejected path parameters");
                Err(ApiError::bad_request())
            }
        }
    }
}
