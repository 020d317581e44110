//! Key validation endpoint

use axum::{body::Bytes, extract::State, http::StatusCode};
use serde_json::Value;
use tracing::{debug, error};

use super::state::AppState;
use super::types::{Json, ValidateKeyRequest, ValidateKeyResponse};

/// POST /api/validate-key
///
/// Responds 200 `{valid: true}` for an issued key, 400 `{valid: false}`
/// otherwise, and 500 `{valid: false}` when the body is not JSON.
pub async fn validate_key(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<ValidateKeyResponse>) {
    let request = match serde_json::from_slice::<Value>(&body) {
        Ok(value) => ValidateKeyRequest::from_value(&value),
        Err(e) => {
            error!("Error processing validation request: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ValidateKeyResponse { valid: false }),
            );
        }
    };

    let valid = match request.api_key.as_deref() {
        Some(key) => state.api_key_service.validate(key).await,
        None => false,
    };
    debug!(valid, "Validated API key");

    let status = if valid {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(ValidateKeyResponse { valid }))
}
