use serde::de::DeserializeOwned;

use crate::{client::error::ApiError, model::api::ErrorDto};

/// Turns a raw HTTP response into the expected body or an [`ApiError`].
///
/// A 2xx status decodes `body` as `T`. Any other status yields [`ApiError::Http`] carrying
/// the server's `error` field when the body has a non-empty one, else `fallback`.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str, fallback: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<T>(body).map_err(|e| ApiError::Decode(e.to_string()));
    }

    Err(error_from_body(status, body, fallback))
}

/// Builds the error for a non-success response.
pub fn error_from_body(status: u16, body: &str, fallback: &str) -> ApiError {
    let message = match serde_json::from_str::<ErrorDto>(body) {
        Ok(error_dto) if !error_dto.error.trim().is_empty() => error_dto.error,
        _ => fallback.to_string(),
    };

    ApiError::Http { status, message }
}
