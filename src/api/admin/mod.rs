//! Dashboard endpoints for managing API keys

pub mod api_keys;

use axum::{
    routing::{get, put},
    Router,
};

use super::state::AppState;

/// Create the key management router
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/keys",
            get(api_keys::list_api_keys).post(api_keys::create_api_key),
        )
        .route(
            "/keys/{key_id}",
            put(api_keys::update_api_key).delete(api_keys::delete_api_key),
        )
}
