//! Store factory for runtime backend selection

use std::sync::Arc;

use tracing::info;

use crate::config::{StorageBackend, StorageSettings};
use crate::domain::{ApiKeyStore, DomainError};

use super::in_memory::InMemoryApiKeyStore;
use super::postgres::{PostgresApiKeyStore, PostgresConfig};

impl StorageSettings {
    /// Builds the PostgreSQL configuration, requiring a URL
    pub fn postgres_config(&self) -> Result<PostgresConfig, DomainError> {
        let url = self
            .url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                DomainError::configuration("storage.url is required for the postgres backend")
            })?;

        Ok(PostgresConfig::new(url)
            .with_max_connections(self.max_connections)
            .with_min_connections(self.min_connections)
            .with_connect_timeout(self.connect_timeout_secs))
    }
}

/// Creates the configured key store
pub async fn create_store(settings: &StorageSettings) -> Result<Arc<dyn ApiKeyStore>, DomainError> {
    match settings.backend {
        StorageBackend::Memory => {
            info!("Using in-memory API key store");
            Ok(Arc::new(InMemoryApiKeyStore::new()))
        }
        StorageBackend::Postgres => {
            let config = settings.postgres_config()?;
            let store = PostgresApiKeyStore::connect(&config).await?;
            store.ensure_table().await?;
            info!("Using PostgreSQL API key store");
            Ok(Arc::new(store))
        }
    }
}
