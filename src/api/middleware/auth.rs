//! API key gate extractor

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Extractor that requires a key the store recognises
///
/// Reads the key from either:
/// - Authorization header: `Bearer <api_key>`
/// - X-API-Key header: `<api_key>`
///
/// Holds the presented key on success.
#[derive(Debug, Clone)]
pub struct RequireValidKey(pub String);

impl FromRequestParts<AppState> for RequireValidKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let key = extract_api_key_from_headers(&parts.headers)?;

        debug!(
            key_prefix = %key.chars().take(8).collect::<String>(),
            "Checking API key"
        );

        if !state.api_key_service.validate(&key).await {
            return Err(ApiError::unauthorized("Invalid API key"));
        }

        Ok(RequireValidKey(key))
    }
}

fn extract_api_key_from_headers(headers: &HeaderMap) -> Result<String, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            return Ok(token.trim().to_string());
        }
    }

    if let Some(api_key_header) = headers.get("x-api-key") {
        let key = api_key_header
            .to_str()
            .map_err(|_| ApiError::bad_request("Invalid X-API-Key header encoding"))?;

        return Ok(key.trim().to_string());
    }

    Err(ApiError::unauthorized(
        "API key required. Provide via 'Authorization: Bearer <key>' or 'X-API-Key: <key>' header",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer tvly-abc123".parse().unwrap());

        assert_eq!(extract_api_key_from_headers(&headers).unwrap(), "tvly-abc123");
    }

    #[test]
    fn test_extract_x_api_key() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", " tvly-xyz789 ".parse().unwrap());

        assert_eq!(extract_api_key_from_headers(&headers).unwrap(), "tvly-xyz789");
    }

    #[test]
    fn test_bearer_takes_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer tvly-bearer".parse().unwrap());
        headers.insert("x-api-key", "tvly-header".parse().unwrap());

        assert_eq!(extract_api_key_from_headers(&headers).unwrap(), "tvly-bearer");
    }

    #[test]
    fn test_missing_key_is_unauthorized() {
        let err = extract_api_key_from_headers(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_non_bearer_authorization_falls_through() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());

        let err = extract_api_key_from_headers(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }
}
