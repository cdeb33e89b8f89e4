//! The dashboard controller: load, display, mutate, reload.
//!
//! The controller is a single task that owns the [`ProductStore`] and the
//! current product snapshot. Requests arrive over a channel and are handled
//! one at a time, each running to completion before the next is looked at.
//! After every mutation the snapshot is re-read from the store in full.
//!
//! Views talk to it through a [`DashboardClient`](crate::clients::DashboardClient).

mod actor;
pub mod confirm;
pub mod error;
pub mod mock;
pub mod seed;

pub use actor::*;
pub use confirm::*;
pub use error::*;

use crate::clients::DashboardClient;
use crate::model::MarketplacePolicy;
use crate::storage::{ProductStore, StorageBackend};

/// Creates a dashboard controller over `store` and a client for it.
///
/// The controller does nothing until [`DashboardActor::run`] is spawned.
pub fn new<B: StorageBackend>(
    store: ProductStore<B>,
    policy: MarketplacePolicy,
) -> (DashboardActor<B>, DashboardClient) {
    DashboardActor::new(32, store, policy)
}
