//! Error types for form submission.

use thiserror::Error;

use crate::dashboard::DashboardError;

/// Errors raised when a form is submitted.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    /// A required text field was left blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A numeric field is negative or not a finite number.
    #[error("Invalid {field}: {value}")]
    InvalidAmount { field: &'static str, value: f64 },

    /// The dashboard rejected or could not receive the product.
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
}
