//! Error types for the dashboard controller.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced to views by the dashboard controller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DashboardError {
    /// The controller has shut down.
    #[error("Dashboard closed")]
    ActorClosed,

    /// The controller dropped the reply channel without answering.
    #[error("Dashboard dropped response channel")]
    ActorDropped,

    /// The store rejected a write.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StorageError> for DashboardError {
    fn from(e: StorageError) -> Self {
        DashboardError::Storage(e.to_string())
    }
}
