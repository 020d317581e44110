//! Domain layer - core types and contracts

pub mod api_key;
mod error;

pub use api_key::{ApiKeyChanges, ApiKeyId, ApiKeyRecord, ApiKeyStore, KeyType, NewApiKey};
pub use error::DomainError;
