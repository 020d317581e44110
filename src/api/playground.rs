//! Demo flow: a resource reachable only with a validated key

use axum::{routing::get, Router};
use serde::{Deserialize, Serialize};

use super::middleware::RequireValidKey;
use super::state::AppState;
use super::types::Json;
use crate::domain::api_key::abbreviate;

/// Payload of the protected page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedResponse {
    pub message: String,
    pub api_key: String,
}

/// GET /playground/protected
pub async fn protected(RequireValidKey(key): RequireValidKey) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "Your API key has been validated. You can now test the API endpoints."
            .to_string(),
        api_key: abbreviate(&key),
    })
}

pub fn create_playground_router() -> Router<AppState> {
    Router::new().route("/protected", get(protected))
}
