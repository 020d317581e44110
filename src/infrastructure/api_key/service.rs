//! API key service
//!
//! Provides the key lifecycle operations on top of an [`ApiKeyStore`].

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::api_key::validate_key_name;
use crate::domain::{
    ApiKeyChanges, ApiKeyId, ApiKeyRecord, ApiKeyStore, DomainError, KeyType, NewApiKey,
};

use super::generator::ApiKeyGenerator;

/// API key service for managing key records
pub struct ApiKeyService<S>
where
    S: ApiKeyStore + ?Sized,
{
    store: Arc<S>,
    generator: ApiKeyGenerator,
}

impl<S: ApiKeyStore + ?Sized> ApiKeyService<S> {
    /// Create a new API key service
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            generator: ApiKeyGenerator::default(),
        }
    }

    /// Create with a custom generator
    pub fn with_generator(mut self, generator: ApiKeyGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn generator(&self) -> &ApiKeyGenerator {
        &self.generator
    }

    /// List all keys, newest first
    pub async fn list(&self) -> Result<Vec<ApiKeyRecord>, DomainError> {
        let keys = self.store.list_newest_first().await?;
        debug!(count = keys.len(), "Listed API keys");
        Ok(keys)
    }

    /// Issue a new key
    pub async fn create(
        &self,
        name: &str,
        key_type: KeyType,
        monthly_limit: Option<u32>,
    ) -> Result<ApiKeyRecord, DomainError> {
        validate_key_name(name)?;
        info!("Creating API key: name={}, type={}", name, key_type);

        let key = self.generator.generate();
        let created = self
            .store
            .insert(NewApiKey::new(name, key, key_type, monthly_limit))
            .await?;

        info!("API key created: id={}", created.id());
        Ok(created)
    }

    /// Replace the mutable fields of a key
    pub async fn update(
        &self,
        id: &ApiKeyId,
        name: &str,
        key_type: KeyType,
        monthly_limit: Option<u32>,
    ) -> Result<ApiKeyRecord, DomainError> {
        validate_key_name(name)?;
        info!("Updating API key: id={}", id);

        let changes = ApiKeyChanges {
            name: name.to_string(),
            key_type,
            monthly_limit,
        };

        self.store.update(id, changes).await
    }

    /// Delete a key; deleting an absent key is not an error
    pub async fn delete(&self, id: &ApiKeyId) -> Result<(), DomainError> {
        info!("Deleting API key: id={}", id);

        if !self.store.delete(id).await? {
            debug!("API key {} was already absent", id);
        }

        Ok(())
    }

    /// Check whether a presented key was issued
    ///
    /// Fails closed: any store error yields `false` instead of propagating.
    pub async fn validate(&self, key: &str) -> bool {
        match self.store.find_by_key(key).await {
            Ok(Some(record)) => {
                debug!("API key validated: id={}", record.id());
                true
            }
            Ok(None) => {
                debug!("API key not found");
                false
            }
            Err(e) => {
                warn!("Error validating API key: {}", e);
                false
            }
        }
    }

    /// Probe the store
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.store.count().await
    }
}
