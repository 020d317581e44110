//! PostgreSQL API key store with connection pooling

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use uuid::Uuid;

use crate::domain::{
    ApiKeyChanges, ApiKeyId, ApiKeyRecord, ApiKeyStore, DomainError, KeyType, NewApiKey,
};

const COLUMNS: &str = "id, name, key, type, monthly_limit, usage, created_at";

/// PostgreSQL store configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection acquire timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/api_keys".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
        }
    }
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }
}

/// PostgreSQL key store
///
/// Keeps one row per key in the `api_keys` table. Uniqueness of `key` is
/// enforced by a table constraint.
pub struct PostgresApiKeyStore {
    pool: PgPool,
}

impl Debug for PostgresApiKeyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresApiKeyStore").finish_non_exhaustive()
    }
}

impl PostgresApiKeyStore {
    /// Creates a store over an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a new pool
    pub async fn connect(config: &PostgresConfig) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

        Ok(Self::new(pool))
    }

    /// Ensures the `api_keys` table and its index exist
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS api_keys (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                name TEXT NOT NULL,
                key TEXT NOT NULL UNIQUE,
                type TEXT NOT NULL CHECK (type IN ('development', 'production')),
                monthly_limit BIGINT CHECK (monthly_limit >= 0),
                usage BIGINT NOT NULL DEFAULT 0 CHECK (usage >= 0),
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create table: {}", e)))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS api_keys_created_at_idx ON api_keys (created_at DESC)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create index: {}", e)))?;

        Ok(())
    }
}

fn row_to_record(row: &PgRow) -> Result<ApiKeyRecord, DomainError> {
    let decode = |e: sqlx::Error| DomainError::storage(format!("Failed to decode row: {}", e));

    let id: Uuid = row.try_get("id").map_err(decode)?;
    let key_type: String = row.try_get("type").map_err(decode)?;
    let monthly_limit: Option<i64> = row.try_get("monthly_limit").map_err(decode)?;
    let usage: i64 = row.try_get("usage").map_err(decode)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(decode)?;

    let key_type: KeyType = key_type
        .parse()
        .map_err(|e| DomainError::storage(format!("Invalid stored key type: {}", e)))?;
    let monthly_limit = monthly_limit
        .map(u32::try_from)
        .transpose()
        .map_err(|_| DomainError::storage("Stored monthly_limit out of range"))?;
    let usage = u64::try_from(usage)
        .map_err(|_| DomainError::storage("Stored usage out of range"))?;

    let new_key = NewApiKey {
        name: row.try_get("name").map_err(decode)?,
        key: row.try_get("key").map_err(decode)?,
        key_type,
        monthly_limit,
        usage,
        created_at,
    };

    Ok(ApiKeyRecord::from_parts(ApiKeyId::from(id), new_key))
}

fn usage_to_i64(usage: u64) -> Result<i64, DomainError> {
    i64::try_from(usage)
        .map_err(|_| DomainError::storage("usage out of range for BIGINT column"))
}

#[async_trait]
impl ApiKeyStore for PostgresApiKeyStore {
    async fn list_newest_first(&self) -> Result<Vec<ApiKeyRecord>, DomainError> {
        let query = format!("SELECT {} FROM api_keys ORDER BY created_at DESC", COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list API keys: {}", e)))?;

        rows.iter().map(row_to_record).collect()
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<ApiKeyRecord>, DomainError> {
        // LIMIT 2 is enough to tell "one" from "many"
        let query = format!("SELECT {} FROM api_keys WHERE key = $1 LIMIT 2", COLUMNS);

        let rows = sqlx::query(&query)
            .bind(key)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to look up API key: {}", e)))?;

        match rows.as_slice() {
            [] => Ok(None),
            [row] => row_to_record(row).map(Some),
            _ => Err(DomainError::storage(
                "Multiple rows returned for a single-row lookup",
            )),
        }
    }

    async fn insert(&self, new_key: NewApiKey) -> Result<ApiKeyRecord, DomainError> {
        let query = format!(
            r#"
            INSERT INTO api_keys (name, key, type, monthly_limit, usage, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(&new_key.name)
            .bind(&new_key.key)
            .bind(new_key.key_type.as_str())
            .bind(new_key.monthly_limit.map(i64::from))
            .bind(usage_to_i64(new_key.usage)?)
            .bind(new_key.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create API key: {}", e)))?;

        row_to_record(&row)
    }

    async fn update(
        &self,
        id: &ApiKeyId,
        changes: ApiKeyChanges,
    ) -> Result<ApiKeyRecord, DomainError> {
        let query = format!(
            r#"
            UPDATE api_keys
            SET name = $2, type = $3, monthly_limit = $4
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(id.as_uuid())
            .bind(&changes.name)
            .bind(changes.key_type.as_str())
            .bind(changes.monthly_limit.map(i64::from))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to update API key: {}", e)))?
            .ok_or_else(|| DomainError::not_found(format!("API key '{}' not found", id)))?;

        row_to_record(&row)
    }

    async fn delete(&self, id: &ApiKeyId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM api_keys WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete API key: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM api_keys")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count API keys: {}", e)))?;

        Ok(count as usize)
    }
}
