//! Runtime orchestration: configuration, startup, shutdown and logging.
//!
//! - [`InventoryConfig`] - what storage to use and how to report marketplaces
//! - [`InventorySystem`] - starts the dashboard controller and owns its task
//! - [`setup_tracing`] - initializes the tracing subscriber

pub mod config;
pub mod inventory_system;
pub mod tracing;

pub use config::*;
pub use inventory_system::*;
pub use self::tracing::*;
