//! Request/response types shared by the HTTP handlers

mod api_key;
mod error;
mod json;

pub use api_key::{
    ApiKeyResponse, ListApiKeysResponse, UpsertApiKeyRequest, ValidateKeyRequest,
    ValidateKeyResponse,
};
pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use json::Json;
