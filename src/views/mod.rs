//! Contracts for the form and upload collaborators.
//!
//! Rendering is not done here. These types hold what a form view edits and
//! turn it into records the dashboard controller understands.

pub mod error;
pub mod form;
pub mod ids;
pub mod images;

pub use error::*;
pub use form::*;
pub use ids::*;
pub use images::*;
