//! Plain data types for the inventory: products, marketplaces and list filters.

pub mod filter;
pub mod marketplace;
pub mod product;

pub use filter::*;
pub use marketplace::*;
pub use product::*;
