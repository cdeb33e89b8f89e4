//! # Inventory Tracker
//!
//! > **A single-user product catalog with stock levels, pricing and dashboard stats.**
//!
//! Products are keyed by marketplace and persisted as one JSON collection in a
//! key-value slot. A dashboard controller loads the collection, serves a
//! snapshot to views, applies their add/edit/delete/purchase/return intents
//! and re-reads the collection after every change.
//!
//! ## 🏗️ Design
//!
//! ### One writer, full rewrites
//! [`ProductStore`](storage::ProductStore) never patches storage in place: every
//! mutation reads the whole collection, changes it and writes it back. Inside
//! one process the dashboard controller is the only writer, so this is safe.
//! Two processes on the same slot will overwrite each other; the last write wins.
//!
//! ### Failing soft
//! - Unreadable or malformed storage reads as an empty catalog.
//! - Updating or deleting an unknown id does nothing and says so in its result.
//! - Oversized images are skipped with a warning, the rest of the upload proceeds.
//! - Deletes are only attempted after a [`ConfirmPrompt`](dashboard::ConfirmPrompt) agrees.
//!
//! ### Run-to-completion
//! The [`dashboard`] controller is one Tokio task handling one request at a
//! time. Storage calls are synchronous and finish inside the request that made them.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: [`Product`](model::Product), patches, marketplaces and list filters.
//! - [`storage`]: slot backends and the [`ProductStore`](storage::ProductStore).
//! - [`stats`]: stock classification and the dashboard summary.
//! - [`dashboard`]: the controller task, its requests and test mocks.
//! - [`clients`]: [`DashboardClient`](clients::DashboardClient), the handle views hold.
//! - [`views`]: form submission and image upload rules.
//! - [`lifecycle`]: config, startup/shutdown and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Demo run against an in-memory store
//! RUST_LOG=info cargo run
//!
//! # Persist to disk
//! echo '{"storage":{"kind":"file","dir":"./data"}}' > inventory.json
//! RUST_LOG=info cargo run -- inventory.json
//! ```

pub mod clients;
pub mod dashboard;
pub mod lifecycle;
pub mod model;
pub mod stats;
pub mod storage;
pub mod views;
