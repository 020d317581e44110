//! In-memory API key store

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{ApiKeyChanges, ApiKeyId, ApiKeyRecord, ApiKeyStore, DomainError, NewApiKey};

/// Thread-safe in-memory key store
///
/// Useful for testing and development. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryApiKeyStore {
    records: RwLock<HashMap<ApiKeyId, ApiKeyRecord>>,
}

impl InMemoryApiKeyStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with records
    pub fn with_records(records: Vec<ApiKeyRecord>) -> Self {
        let map = records.into_iter().map(|r| (r.id(), r)).collect();

        Self {
            records: RwLock::new(map),
        }
    }
}

fn lock_error<E: std::fmt::Display>(e: E) -> DomainError {
    DomainError::storage(format!("Failed to acquire lock: {}", e))
}

#[async_trait]
impl ApiKeyStore for InMemoryApiKeyStore {
    async fn list_newest_first(&self) -> Result<Vec<ApiKeyRecord>, DomainError> {
        let records = self.records.read().map_err(lock_error)?;

        let mut result: Vec<ApiKeyRecord> = records.values().cloned().collect();
        result.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(result)
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<ApiKeyRecord>, DomainError> {
        let records = self.records.read().map_err(lock_error)?;

        let mut matches = records.values().filter(|r| r.key() == key);
        let first = matches.next().cloned();

        if matches.next().is_some() {
            return Err(DomainError::storage(
                "Multiple rows returned for a single-row lookup",
            ));
        }

        Ok(first)
    }

    async fn insert(&self, new_key: NewApiKey) -> Result<ApiKeyRecord, DomainError> {
        let mut records = self.records.write().map_err(lock_error)?;

        if records.values().any(|r| r.key() == new_key.key) {
            return Err(DomainError::storage(
                "duplicate key value violates unique constraint on api_keys.key",
            ));
        }

        let record = ApiKeyRecord::from_parts(ApiKeyId::generate(), new_key);
        records.insert(record.id(), record.clone());

        Ok(record)
    }

    async fn update(
        &self,
        id: &ApiKeyId,
        changes: ApiKeyChanges,
    ) -> Result<ApiKeyRecord, DomainError> {
        let mut records = self.records.write().map_err(lock_error)?;

        let record = records
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(format!("API key '{}' not found", id)))?;

        record.apply(changes);
        Ok(record.clone())
    }

    async fn delete(&self, id: &ApiKeyId) -> Result<bool, DomainError> {
        let mut records = self.records.write().map_err(lock_error)?;
        Ok(records.remove(id).is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let records = self.records.read().map_err(lock_error)?;
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::KeyType;
    use chrono::{Duration, Utc};

    fn new_key(name: &str, key: &str) -> NewApiKey {
        NewApiKey::new(name, key, KeyType::Development, None)
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let store = InMemoryApiKeyStore::new();

        let a = store.insert(new_key("a", "tvly-a")).await.unwrap();
        let b = store.insert(new_key("b", "tvly-b")).await.unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_key() {
        let store = InMemoryApiKeyStore::new();
        store.insert(new_key("a", "tvly-same")).await.unwrap();

        let result = store.insert(new_key("b", "tvly-same")).await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_find_by_key() {
        let store = InMemoryApiKeyStore::new();
        let inserted = store.insert(new_key("a", "tvly-a")).await.unwrap();

        let found = store.find_by_key("tvly-a").await.unwrap();
        assert_eq!(found.map(|r| r.id()), Some(inserted.id()));

        assert!(store.find_by_key("tvly-missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_orders_by_created_at_desc() {
        let now = Utc::now();
        let mut older = new_key("older", "tvly-old");
        older.created_at = now - Duration::hours(1);
        let mut newer = new_key("newer", "tvly-new");
        newer.created_at = now;

        let store = InMemoryApiKeyStore::with_records(vec![
            ApiKeyRecord::from_parts(ApiKeyId::generate(), older),
            ApiKeyRecord::from_parts(ApiKeyId::generate(), newer),
        ]);

        let listed = store.list_newest_first().await.unwrap();
        assert_eq!(listed[0].name(), "newer");
        assert_eq!(listed[1].name(), "older");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = InMemoryApiKeyStore::new();
        let changes = ApiKeyChanges {
            name: "x".to_string(),
            key_type: KeyType::Production,
            monthly_limit: None,
        };

        let result = store.update(&ApiKeyId::generate(), changes).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_reports_presence() {
        let store = InMemoryApiKeyStore::new();
        let inserted = store.insert(new_key("a", "tvly-a")).await.unwrap();

        assert!(store.delete(&inserted.id()).await.unwrap());
        assert!(!store.delete(&inserted.id()).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
