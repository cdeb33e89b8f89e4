//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter whose
//! level is taken from `RUST_LOG`.
//!
//! ```bash
//! # Mutations and lifecycle events
//! RUST_LOG=info cargo run
//!
//! # Every request, with full payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the storage layer
//! RUST_LOG=inventory_tracker::storage=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a purchase followed by a return reads:
//!
//! ```text
//! INFO Dashboard started size=2 key=inventory-products
//! INFO save: Added id="1760600000000" size=3
//! INFO save: Updated id="1760600000000"
//! ```
//!
//! Soft failures that callers never see as errors (a malformed stored
//! collection, an oversized image, a return for an unknown product) are
//! logged at `warn`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
