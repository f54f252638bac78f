//! Revocation store module defining the blacklist persistence contract.

mod mock;
mod r#trait;


pub use mock::MockRevocationStore;
pub use r#trait::RevocationStore;
