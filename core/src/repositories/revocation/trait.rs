//! Revocation store trait defining the interface for blacklist persistence.

use async_trait::async_trait;

use crate::domain::entities::token::RevokedToken;
use crate::errors::DomainError;

/// Repository trait for revocation record persistence
///
/// This trait defines the typed key-value contract (token string to expiry
/// timestamp) that validation depends on. The backing store can be swapped
/// (relational table, in-memory map, key-value cache) without touching
/// validation logic.
///
/// Implementations speak raw token strings; whether the store hashes them
/// for its own keying is an implementation detail.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Record a token as revoked
    ///
    /// Must be idempotent: inserting a record for an already-revoked token
    /// succeeds without a duplicate error. Concurrent inserts of the same
    /// token must not conflict; the uniqueness key resolves the race and
    /// the last writer is a no-op.
    ///
    /// # Arguments
    /// * `record` - The revocation record to persist
    ///
    /// # Returns
    /// * `Ok(())` - Record persisted (or was already present)
    /// * `Err(DomainError)` - Store unreachable or write failed
    async fn insert(&self, record: RevokedToken) -> Result<(), DomainError>;

    /// Check whether a token has a matching revocation record
    ///
    /// # Arguments
    /// * `token` - The raw token string to look up
    ///
    /// # Returns
    /// * `Ok(true)` - Token is revoked
    /// * `Ok(false)` - No revocation record for this token
    /// * `Err(DomainError)` - Store unreachable or lookup failed
    async fn contains(&self, token: &str) -> Result<bool, DomainError>;

    /// Delete revocation records whose tokens have expired
    ///
    /// Must only remove records with `expires_at` in the past; records
    /// still within their expiry window survive the prune. Safe to run
    /// concurrently with inserts of new, unexpired records.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired records deleted
    /// * `Err(DomainError)` - Deletion failed
    async fn prune_expired(&self) -> Result<usize, DomainError>;

    /// Count revocation records currently held
    ///
    /// Used by the sweeper for progress logging.
    async fn count(&self) -> Result<usize, DomainError>;
}
