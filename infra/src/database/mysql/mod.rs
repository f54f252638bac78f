//! MySQL repository implementations.

mod revocation_store_impl;

pub use revocation_store_impl::MySqlRevocationStore;
