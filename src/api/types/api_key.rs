//! API key request and response bodies

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::api_key::mask;
use crate::domain::{ApiKeyRecord, KeyType};

/// Body for creating or editing a key
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertApiKeyRequest {
    pub name: String,
    #[serde(rename = "type", default)]
    pub key_type: KeyType,
    #[serde(default, alias = "monthlyLimit")]
    pub monthly_limit: Option<u32>,
}

/// A key as shown in the dashboard table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyResponse {
    pub id: String,
    pub name: String,
    pub key: String,
    pub masked_key: String,
    #[serde(rename = "type")]
    pub key_type: KeyType,
    pub monthly_limit: Option<u32>,
    pub usage: u64,
    pub rate_limit_per_minute: u32,
    pub created_at: String,
}

impl From<&ApiKeyRecord> for ApiKeyResponse {
    fn from(record: &ApiKeyRecord) -> Self {
        Self {
            id: record.id().to_string(),
            name: record.name().to_string(),
            key: record.key().to_string(),
            masked_key: mask(record.key()),
            key_type: record.key_type(),
            monthly_limit: record.monthly_limit(),
            usage: record.usage(),
            rate_limit_per_minute: record.key_type().rate_limit_per_minute(),
            created_at: record.created_at().to_rfc3339(),
        }
    }
}

/// List API keys response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListApiKeysResponse {
    pub api_keys: Vec<ApiKeyResponse>,
    pub total: usize,
}

/// Body of the key validation endpoint
///
/// Read leniently from any JSON value: a non-object body or a non-string
/// `apiKey` yields no key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidateKeyRequest {
    pub api_key: Option<String>,
}

impl ValidateKeyRequest {
    pub fn from_value(value: &Value) -> Self {
        Self {
            api_key: value
                .get("apiKey")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Result of the key validation endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateKeyResponse {
    pub valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiKeyId, NewApiKey};

    #[test]
    fn test_upsert_request_defaults() {
        let request: UpsertApiKeyRequest =
            serde_json::from_str(r#"{"name": "default"}"#).unwrap();

        assert_eq!(request.name, "default");
        assert_eq!(request.key_type, KeyType::Development);
        assert_eq!(request.monthly_limit, None);
    }

    #[test]
    fn test_upsert_request_accepts_camel_case_limit() {
        let request: UpsertApiKeyRequest = serde_json::from_str(
            r#"{"name": "prod", "type": "Production", "monthlyLimit": 1000}"#,
        )
        .unwrap();

        assert_eq!(request.key_type, KeyType::Production);
        assert_eq!(request.monthly_limit, Some(1000));
    }

    #[test]
    fn test_upsert_request_rejects_negative_limit() {
        let result = serde_json::from_str::<UpsertApiKeyRequest>(
            r#"{"name": "x", "monthly_limit": -5}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_response_masks_key() {
        let record = ApiKeyRecord::from_parts(
            ApiKeyId::generate(),
            NewApiKey::new("default", "tvly-abcdefg", KeyType::Production, Some(5)),
        );

        let response = ApiKeyResponse::from(&record);
        assert_eq!(response.key, "tvly-abcdefg");
        assert_eq!(response.masked_key, "tvly••••••••");
        assert_eq!(response.rate_limit_per_minute, 1000);
        assert_eq!(response.monthly_limit, Some(5));
    }

    #[test]
    fn test_validate_request_reads_string_key() {
        let request = ValidateKeyRequest::from_value(&serde_json::json!({ "apiKey": "tvly-abc" }));
        assert_eq!(request.api_key.as_deref(), Some("tvly-abc"));
    }

    #[test]
    fn test_validate_request_missing_key() {
        let request = ValidateKeyRequest::from_value(&serde_json::json!({}));
        assert!(request.api_key.is_none());
    }

    #[test]
    fn test_validate_request_ignores_non_string_key() {
        for value in [
            serde_json::json!({ "apiKey": 123 }),
            serde_json::json!({ "apiKey": null }),
            serde_json::json!("tvly-abc"),
            serde_json::json!(["tvly-abc"]),
        ] {
            assert_eq!(ValidateKeyRequest::from_value(&value), ValidateKeyRequest::default());
        }
    }
}
