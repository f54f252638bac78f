//! Configuration for the token service

use chrono::Duration;
use tg_shared::config::JwtConfig;

/// Configuration for the token service
///
/// Constructed explicitly and passed in at service construction; the
/// service never reads ambient global state.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub secret: String,
    /// Token time-to-live in hours
    pub ttl_hours: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            ttl_hours: 24,
        }
    }
}

impl TokenServiceConfig {
    /// Token lifetime as a duration
    pub fn ttl(&self) -> Duration {
        Duration::hours(self.ttl_hours)
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            ttl_hours: config.ttl_hours,
        }
    }
}
