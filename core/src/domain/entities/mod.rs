//! Domain entities for JWT-based authentication.

pub mod token;

pub use token::{Claims, RevokedToken};
