//! Health check endpoints

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::state::AppState;
use super::types::Json;

/// Health response with optional component checks
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Individual component health check
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn static_health() -> HealthResponse {
    HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    }
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(static_health()))
}

/// GET /live
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /ready - probes the key store
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let store_check = match state.api_key_service.count().await {
        Ok(count) => HealthCheck {
            name: "api_key_store".to_string(),
            status: HealthStatus::Healthy,
            message: Some(format!("{} keys", count)),
        },
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            HealthCheck {
                name: "api_key_store".to_string(),
                status: HealthStatus::Degraded,
                message: Some(e.to_string()),
            }
        }
    };

    let (status, code) = match store_check.status {
        HealthStatus::Healthy => (HealthStatus::Healthy, StatusCode::OK),
        HealthStatus::Degraded => (HealthStatus::Degraded, StatusCode::SERVICE_UNAVAILABLE),
    };

    let response = HealthResponse {
        status,
        checks: Some(vec![store_check]),
        latency_ms: Some(start.elapsed().as_millis() as u64),
        ..static_health()
    };

    (code, Json(response))
}
