//! API Key Dashboard
//!
//! Issue, list, edit, revoke and validate API keys backed by a relational table:
//! - Key lifecycle service over a pluggable store (in-memory or PostgreSQL)
//! - Dashboard endpoints for key management
//! - A validation endpoint and a key-gated demo resource

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use config::KeySettings;
use domain::{ApiKeyStore, DomainError};
use infrastructure::api_key::{ApiKeyGenerator, ApiKeyService};
use infrastructure::storage::create_store;

/// Build the application state from configuration
pub async fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let store = create_store(&config.storage).await?;
    app_state_with_store(store, &config.keys)
}

/// Build the application state around an existing store
pub fn app_state_with_store(
    store: Arc<dyn ApiKeyStore>,
    keys: &KeySettings,
) -> Result<AppState, DomainError> {
    let generator = ApiKeyGenerator::from_settings(keys)?;
    let service = ApiKeyService::new(store).with_generator(generator);

    Ok(AppState::new(Arc::new(service)))
}
