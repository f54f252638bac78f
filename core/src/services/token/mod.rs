//! Token service module for JWT lifecycle management
//!
//! This module handles all token-related operations:
//! - JWT issuance and validation
//! - Payload extraction
//! - Token revocation through the blacklist
//! - Background pruning of expired revocation records

mod config;
mod service;
mod sweeper;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
pub use sweeper::{RevocationSweeper, SweepResult, SweeperConfig};
