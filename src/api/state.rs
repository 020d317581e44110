//! Application state for shared services

use std::sync::Arc;

use crate::domain::{ApiKeyId, ApiKeyRecord, ApiKeyStore, DomainError, KeyType};
use crate::infrastructure::api_key::ApiKeyService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub api_key_service: Arc<dyn ApiKeyServiceTrait>,
}

impl AppState {
    pub fn new(api_key_service: Arc<dyn ApiKeyServiceTrait>) -> Self {
        Self { api_key_service }
    }
}

/// Trait for API key service operations
#[async_trait::async_trait]
pub trait ApiKeyServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<ApiKeyRecord>, DomainError>;
    async fn create(
        &self,
        name: &str,
        key_type: KeyType,
        monthly_limit: Option<u32>,
    ) -> Result<ApiKeyRecord, DomainError>;
    async fn update(
        &self,
        id: &ApiKeyId,
        name: &str,
        key_type: KeyType,
        monthly_limit: Option<u32>,
    ) -> Result<ApiKeyRecord, DomainError>;
    async fn delete(&self, id: &ApiKeyId) -> Result<(), DomainError>;
    async fn validate(&self, key: &str) -> bool;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<S: ApiKeyStore + ?Sized + 'static> ApiKeyServiceTrait for ApiKeyService<S> {
    async fn list(&self) -> Result<Vec<ApiKeyRecord>, DomainError> {
        ApiKeyService::list(self).await
    }

    async fn create(
        &self,
        name: &str,
        key_type: KeyType,
        monthly_limit: Option<u32>,
    ) -> Result<ApiKeyRecord, DomainError> {
        ApiKeyService::create(self, name, key_type, monthly_limit).await
    }

    async fn update(
        &self,
        id: &ApiKeyId,
        name: &str,
        key_type: KeyType,
        monthly_limit: Option<u32>,
    ) -> Result<ApiKeyRecord, DomainError> {
        ApiKeyService::update(self, id, name, key_type, monthly_limit).await
    }

    async fn delete(&self, id: &ApiKeyId) -> Result<(), DomainError> {
        ApiKeyService::delete(self, id).await
    }

    async fn validate(&self, key: &str) -> bool {
        ApiKeyService::validate(self, key).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        ApiKeyService::count(self).await
    }
}
