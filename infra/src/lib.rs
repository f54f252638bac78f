//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the TokenGate server.
//! It provides concrete implementations for database access and environment
//! configuration loading.
//!
//! ## Architecture
//!
//! - **Database**: MySQL revocation store using SQLx, plus connection pool
//!   management
//! - **Bootstrap**: `.env` loading and configuration assembly

use thiserror::Error;

// Re-export core error types for convenience
pub use tg_core::errors::*;

/// Environment bootstrap - dotenv loading and configuration assembly
pub mod bootstrap;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Infrastructure-specific errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
