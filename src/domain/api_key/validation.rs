//! API key input validation

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur while validating caller-supplied key fields
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiKeyValidationError {
    #[error("Key name cannot be empty")]
    EmptyName,

    #[error("Key name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Invalid key type '{0}'. Expected 'development' or 'production'")]
    InvalidType(String),

    #[error("Invalid API key id '{0}'")]
    InvalidId(String),
}

impl From<ApiKeyValidationError> for DomainError {
    fn from(err: ApiKeyValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

const MAX_KEY_NAME_LENGTH: usize = 100;

/// Validate a key display name
///
/// Rules:
/// - Cannot be empty or whitespace-only
/// - Maximum 100 characters
pub fn validate_key_name(name: &str) -> Result<(), ApiKeyValidationError> {
    if name.trim().is_empty() {
        return Err(ApiKeyValidationError::EmptyName);
    }

    if name.chars().count() > MAX_KEY_NAME_LENGTH {
        return Err(ApiKeyValidationError::NameTooLong(MAX_KEY_NAME_LENGTH));
    }

    Ok(())
}
