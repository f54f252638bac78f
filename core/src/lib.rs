//! # TokenGate Core
//!
//! Core token lifecycle logic for the TokenGate server.
//! This crate contains the domain entities, the revocation store interface,
//! the token service, and the error types that form the foundation of the
//! authentication layer.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
