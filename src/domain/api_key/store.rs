//! API key store trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{ApiKeyChanges, ApiKeyId, ApiKeyRecord, NewApiKey};
use crate::domain::DomainError;

/// Persistent table of API key records
///
/// Implementations must guarantee primary-key uniqueness, uniqueness of the
/// `key` column, atomic single-row writes and ordering by `created_at`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ApiKeyStore: Send + Sync {
    /// All records, newest first
    async fn list_newest_first(&self) -> Result<Vec<ApiKeyRecord>, DomainError>;

    /// Equality lookup on the key secret
    ///
    /// More than one match is reported as a storage error.
    async fn find_by_key(&self, key: &str) -> Result<Option<ApiKeyRecord>, DomainError>;

    /// Insert a record and return it with its assigned id
    async fn insert(&self, new_key: NewApiKey) -> Result<ApiKeyRecord, DomainError>;

    /// Apply changes to the record with the given id, returning the updated record
    async fn update(
        &self,
        id: &ApiKeyId,
        changes: ApiKeyChanges,
    ) -> Result<ApiKeyRecord, DomainError>;

    /// Delete by id, returns true if a row was removed
    async fn delete(&self, id: &ApiKeyId) -> Result<bool, DomainError>;

    /// Number of stored records
    async fn count(&self) -> Result<usize, DomainError>;
}
