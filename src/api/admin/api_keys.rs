//! API key management endpoints used by the dashboard

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiKeyResponse, Json, ListApiKeysResponse, UpsertApiKeyRequest};
use crate::domain::ApiKeyId;

fn parse_key_id(raw: &str) -> Result<ApiKeyId, ApiError> {
    raw.parse::<ApiKeyId>()
        .map_err(|e| ApiError::bad_request(e.to_string()))
}

/// GET /api/keys
pub async fn list_api_keys(
    State(state): State<AppState>,
) -> Result<Json<ListApiKeysResponse>, ApiError> {
    debug!("Listing API keys");

    let keys = state.api_key_service.list().await?;
    let api_keys: Vec<ApiKeyResponse> = keys.iter().map(ApiKeyResponse::from).collect();
    let total = api_keys.len();

    Ok(Json(ListApiKeysResponse { api_keys, total }))
}

/// POST /api/keys
pub async fn create_api_key(
    State(state): State<AppState>,
    Json(request): Json<UpsertApiKeyRequest>,
) -> Result<(StatusCode, Json<ApiKeyResponse>), ApiError> {
    debug!(name = %request.name, key_type = %request.key_type, "Creating API key");

    let created = state
        .api_key_service
        .create(&request.name, request.key_type, request.monthly_limit)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiKeyResponse::from(&created))))
}

/// PUT /api/keys/{key_id}
pub async fn update_api_key(
    State(state): State<AppState>,
    Path(key_id): Path<String>,
    Json(request): Json<UpsertApiKeyRequest>,
) -> Result<Json<ApiKeyResponse>, ApiError> {
    debug!(key_id = %key_id, "Updating API key");

    let id = parse_key_id(&key_id)?;
    let updated = state
        .api_key_service
        .update(&id, &request.name, request.key_type, request.monthly_limit)
        .await?;

    Ok(Json(ApiKeyResponse::from(&updated)))
}

/// DELETE /api/keys/{key_id}
pub async fn delete_api_key(
    State(state): State<AppState>,
    Path(key_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    debug!(key_id = %key_id, "Deleting API key");

    let id = parse_key_id(&key_id)?;
    state.api_key_service.delete(&id).await?;

    Ok(Json(serde_json::json!({
        "deleted": true,
        "id": id.to_string()
    })))
}
