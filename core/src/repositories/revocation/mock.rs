//! In-memory implementation of RevocationStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::RevokedToken;
use crate::errors::DomainError;

use super::r#trait::RevocationStore;

/// In-memory revocation store backed by a `HashMap`
///
/// Keyed by the raw token string, mirroring the uniqueness constraint of
/// the database-backed store.
pub struct MockRevocationStore {
    records: Arc<RwLock<HashMap<String, RevokedToken>>>,
}

impl MockRevocationStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockRevocationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationStore for MockRevocationStore {
    async fn insert(&self, record: RevokedToken) -> Result<(), DomainError> {
        let mut records = self.records.write().await;

        // Duplicate insert means "already revoked", not an error
        records.entry(record.token.clone()).or_insert(record);
        Ok(())
    }

    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        let records = self.records.read().await;
        Ok(records.contains_key(token))
    }

    async fn prune_expired(&self) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| !record.is_expired());
        Ok(before - records.len())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let records = self.records.read().await;
        Ok(records.len())
    }
}
