//! Shared configuration types for the TokenGate server
//!
//! This crate provides the configuration surface used across all server
//! modules:
//! - JWT signing configuration (secret, token TTL)
//! - Database connection and pool configuration
//! - Environment detection

pub mod config;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, JwtConfig};
