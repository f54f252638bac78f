//! Environment bootstrap for the TokenGate server
//!
//! Replaces the shell-level environment plumbing: loads `.env` files with
//! `dotenvy`, then assembles the typed configuration from process
//! environment variables.

use tg_shared::config::{AppConfig, Environment};
use tracing::{debug, warn};

/// Load `.env` files and assemble the application configuration
///
/// Loads the base `.env` first, then the environment-specific file
/// (`.env.development`, `.env.production`, ...). Variables already present
/// in the process environment are never overridden.
pub fn load_environment() -> AppConfig {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }

    let environment = Environment::from_env();
    if dotenvy::from_filename(environment.env_file()).is_ok() {
        debug!("Loaded overrides from {}", environment.env_file());
    }

    let config = AppConfig::from_env();

    if environment.is_production() && config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET_KEY is not set; running production with the default secret");
    }

    config
}
