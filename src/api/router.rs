use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::admin;
use super::health;
use super::playground;
use super::state::AppState;
use super::validate;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Dashboard key management and the playground's validation call
        .nest(
            "/api",
            admin::create_admin_router().route("/validate-key", post(validate::validate_key)),
        )
        // Gated demo page
        .nest("/playground", playground::create_playground_router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
