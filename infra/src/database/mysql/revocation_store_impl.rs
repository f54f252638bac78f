//! MySQL implementation of the RevocationStore trait.
//!
//! Persists revocation records in the `jwt_blacklist` table. Rows are
//! keyed by the SHA-256 hex of the raw token, which bounds the key length
//! and keeps token text out of the database; uniqueness of the hash
//! carries the uniqueness invariant of the token string.

use async_trait::async_trait;
use chrono::Utc;
use sha2::{Digest, Sha256};
use sqlx::{MySqlPool, Row};

use tg_core::domain::entities::token::RevokedToken;
use tg_core::errors::DomainError;
use tg_core::repositories::RevocationStore;

/// MySQL implementation of RevocationStore
pub struct MySqlRevocationStore {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRevocationStore {
    /// Create a new MySQL revocation store
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Hash a token value using SHA-256
    ///
    /// # Returns
    /// Hexadecimal string representation of the SHA-256 hash
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl RevocationStore for MySqlRevocationStore {
    async fn insert(&self, record: RevokedToken) -> Result<(), DomainError> {
        // The duplicate-key clause makes concurrent revokes of the same
        // token race-free: the last writer is a no-op, not an error.
        let query = r#"
            INSERT INTO jwt_blacklist (token_hash, expires_at, created_at)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE token_hash = token_hash
        "#;

        sqlx::query(query)
            .bind(Self::hash_token(&record.token))
            .bind(record.expires_at)
            .bind(record.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to insert revocation record: {}", e),
            })?;

        Ok(())
    }

    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        let query = "SELECT EXISTS(SELECT 1 FROM jwt_blacklist WHERE token_hash = ?) AS revoked";

        let row = sqlx::query(query)
            .bind(Self::hash_token(token))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to check revocation record: {}", e),
            })?;

        let revoked: i64 = row.try_get("revoked").map_err(|e| DomainError::Store {
            message: format!("Failed to read revocation flag: {}", e),
        })?;

        Ok(revoked == 1)
    }

    async fn prune_expired(&self) -> Result<usize, DomainError> {
        // Delete-where-expired is safe under concurrent inserts of new,
        // unexpired records; rows within their expiry window are untouched.
        let query = "DELETE FROM jwt_blacklist WHERE expires_at < ?";

        let result = sqlx::query(query)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to prune revocation records: {}", e),
            })?;

        Ok(result.rows_affected() as usize)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let query = "SELECT COUNT(*) AS total FROM jwt_blacklist";

        let row = sqlx::query(query)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to count revocation records: {}", e),
            })?;

        let total: i64 = row.try_get("total").map_err(|e| DomainError::Store {
            message: format!("Failed to read record count: {}", e),
        })?;

        Ok(total as usize)
    }
}
