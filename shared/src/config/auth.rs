//! JWT signing configuration

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Default token lifetime in hours
const DEFAULT_TTL_HOURS: i64 = 24;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token time-to-live in hours
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            ttl_hours: DEFAULT_TTL_HOURS,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// Reads `JWT_SECRET_KEY` and `JWT_EXPIRATION_HOURS`; an unset or
    /// unparsable expiration falls back to 24 hours.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET_KEY")
            .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string());
        let ttl_hours = std::env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|h| h.parse().ok())
            .unwrap_or(DEFAULT_TTL_HOURS);

        Self { secret, ttl_hours }
    }

    /// Set the token TTL in hours
    pub fn with_ttl_hours(mut self, hours: i64) -> Self {
        self.ttl_hours = hours;
        self
    }

    /// Token lifetime as a duration
    pub fn ttl(&self) -> Duration {
        Duration::hours(self.ttl_hours)
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}

fn default_ttl_hours() -> i64 {
    DEFAULT_TTL_HOURS
}
