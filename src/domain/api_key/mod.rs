//! API key domain - key records, display helpers and the store contract

mod display;
mod entity;
mod store;
mod validation;

pub use display::{abbreviate, mask, MASK_CHAR};
pub use entity::{ApiKeyChanges, ApiKeyId, ApiKeyRecord, KeyType, NewApiKey};
pub use store::ApiKeyStore;
pub use validation::{validate_key_name, ApiKeyValidationError};

#[cfg(test)]
pub use store::MockApiKeyStore;
