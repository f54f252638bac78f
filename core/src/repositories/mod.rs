pub mod revocation;

pub use revocation::{MockRevocationStore, RevocationStore};
