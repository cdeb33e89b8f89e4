//! Typed handles for talking to the dashboard controller.

pub mod dashboard_client;

pub use dashboard_client::*;
