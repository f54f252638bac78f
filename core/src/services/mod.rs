//! Business services for token lifecycle management.

pub mod token;

pub use token::{RevocationSweeper, SweepResult, SweeperConfig, TokenService, TokenServiceConfig};
