//! Durable key-value slots and the product store built on top of them.
//!
//! - [`StorageBackend`] - a string-keyed slot store, the moral equivalent of
//!   browser local storage
//! - [`MemoryStorage`] / [`FileStorage`] - the two shipped backends
//! - [`ProductStore`] - owns the serialized product collection under one key

pub mod backend;
pub mod error;
pub mod product_store;

pub use backend::*;
pub use error::*;
pub use product_store::*;
