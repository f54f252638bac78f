//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for the JWT payload
///
/// A token is immutable once issued; revocation is tracked out-of-band
/// through the revocation store, never by mutating the token itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier (user ID)
    pub sub: i64,

    /// Issued at timestamp (unix seconds)
    pub iat: i64,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a token issued now
    ///
    /// # Arguments
    ///
    /// * `subject_id` - The subject (user) identifier the token asserts
    /// * `ttl` - Duration from issuance to expiry
    pub fn new(subject_id: i64, ttl: Duration) -> Self {
        let now = Utc::now();
        let expiry = now + ttl;

        Self {
            sub: subject_id,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Expiry as a UTC timestamp, if representable
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.exp, 0)
    }
}

/// Revocation record stored in the blacklist
///
/// `expires_at` mirrors the token's own expiry so the record can be pruned
/// once the token would have expired anyway, bounding storage growth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokedToken {
    /// The revoked token string (unique)
    pub token: String,

    /// Timestamp when the token itself expires
    pub expires_at: DateTime<Utc>,

    /// Timestamp when the revocation was recorded
    pub created_at: DateTime<Utc>,
}

impl RevokedToken {
    /// Creates a new revocation record
    ///
    /// # Arguments
    ///
    /// * `token` - The token string being revoked
    /// * `expires_at` - The token's own expiry timestamp
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
            created_at: Utc::now(),
        }
    }

    /// Checks if the underlying token has expired
    ///
    /// An expired record is eligible for pruning.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
