//! API key record and related types

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::ApiKeyValidationError;

/// API key identifier, assigned by the store when a record is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKeyId(Uuid);

impl ApiKeyId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ApiKeyId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for ApiKeyId {
    type Err = ApiKeyValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ApiKeyValidationError::InvalidId(s.to_string()))
    }
}

impl std::fmt::Display for ApiKeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Environment a key is issued for
///
/// Controls an advisory request-rate ceiling that nothing in this crate enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum KeyType {
    #[default]
    Development,
    Production,
}

impl KeyType {
    /// Advisory requests-per-minute ceiling
    pub fn rate_limit_per_minute(&self) -> u32 {
        match self {
            Self::Development => 100,
            Self::Production => 1000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl FromStr for KeyType {
    type Err = ApiKeyValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            _ => Err(ApiKeyValidationError::InvalidType(s.to_string())),
        }
    }
}

impl TryFrom<String> for KeyType {
    type Error = ApiKeyValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted API key and its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyRecord {
    id: ApiKeyId,
    name: String,
    key: String,
    #[serde(rename = "type")]
    key_type: KeyType,
    monthly_limit: Option<u32>,
    usage: u64,
    created_at: DateTime<Utc>,
}

impl ApiKeyRecord {
    /// Materialize a record from a stored row
    pub fn from_parts(id: ApiKeyId, new_key: NewApiKey) -> Self {
        Self {
            id,
            name: new_key.name,
            key: new_key.key,
            key_type: new_key.key_type,
            monthly_limit: new_key.monthly_limit,
            usage: new_key.usage,
            created_at: new_key.created_at,
        }
    }

    pub fn id(&self) -> ApiKeyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn monthly_limit(&self) -> Option<u32> {
        self.monthly_limit
    }

    pub fn usage(&self) -> u64 {
        self.usage
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Apply the mutable fields; id, key, usage and created_at are untouched
    pub fn apply(&mut self, changes: ApiKeyChanges) {
        self.name = changes.name;
        self.key_type = changes.key_type;
        self.monthly_limit = changes.monthly_limit;
    }
}

/// A record ready to be inserted; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApiKey {
    pub name: String,
    pub key: String,
    pub key_type: KeyType,
    pub monthly_limit: Option<u32>,
    pub usage: u64,
    pub created_at: DateTime<Utc>,
}

impl NewApiKey {
    pub fn new(
        name: impl Into<String>,
        key: impl Into<String>,
        key_type: KeyType,
        monthly_limit: Option<u32>,
    ) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            key_type,
            monthly_limit,
            usage: 0,
            created_at: Utc::now(),
        }
    }
}

/// The fields an update may change, applied together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyChanges {
    pub name: String,
    pub key_type: KeyType,
    pub monthly_limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_type_parse_is_case_insensitive() {
        assert_eq!("development".parse::<KeyType>().unwrap(), KeyType::Development);
        assert_eq!("Production".parse::<KeyType>().unwrap(), KeyType::Production);
        assert_eq!(" PRODUCTION ".parse::<KeyType>().unwrap(), KeyType::Production);
        assert!("staging".parse::<KeyType>().is_err());
    }

    #[test]
    fn test_key_type_serde() {
        let json = serde_json::to_string(&KeyType::Production).unwrap();
        assert_eq!(json, "\"production\"");

        let parsed: KeyType = serde_json::from_str("\"Development\"").unwrap();
        assert_eq!(parsed, KeyType::Development);

        assert!(serde_json::from_str::<KeyType>("\"staging\"").is_err());
    }

    #[test]
    fn test_rate_limit_ceiling() {
        assert_eq!(KeyType::Development.rate_limit_per_minute(), 100);
        assert_eq!(KeyType::Production.rate_limit_per_minute(), 1000);
    }

    #[test]
    fn test_api_key_id_parse() {
        let id = ApiKeyId::generate();
        let parsed: ApiKeyId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        assert_eq!(
            "not-a-uuid".parse::<ApiKeyId>(),
            Err(ApiKeyValidationError::InvalidId("not-a-uuid".to_string()))
        );
    }

    #[test]
    fn test_new_api_key_starts_unused() {
        let new_key = NewApiKey::new("default", "tvly-abc", KeyType::Development, Some(500));
        assert_eq!(new_key.usage, 0);
        assert_eq!(new_key.monthly_limit, Some(500));
    }

    #[test]
    fn test_apply_changes_keeps_immutable_fields() {
        let new_key = NewApiKey::new("default", "tvly-abc", KeyType::Development, None);
        let mut record = ApiKeyRecord::from_parts(ApiKeyId::generate(), new_key);
        let before = record.clone();

        record.apply(ApiKeyChanges {
            name: "renamed".to_string(),
            key_type: KeyType::Production,
            monthly_limit: Some(10),
        });

        assert_eq!(record.name(), "renamed");
        assert_eq!(record.key_type(), KeyType::Production);
        assert_eq!(record.monthly_limit(), Some(10));
        assert_eq!(record.id(), before.id());
        assert_eq!(record.key(), before.key());
        assert_eq!(record.usage(), before.usage());
        assert_eq!(record.created_at(), before.created_at());
    }

    #[test]
    fn test_record_serializes_type_field() {
        let new_key = NewApiKey::new("default", "tvly-abc", KeyType::Production, None);
        let record = ApiKeyRecord::from_parts(ApiKeyId::generate(), new_key);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["type"], "production");
        assert!(value["monthly_limit"].is_null());
        assert_eq!(value["usage"], 0);
    }
}
