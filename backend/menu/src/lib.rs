//! # Menu
//!
//! Catering menu data shared by the server.
//!
//! - [`items`]: the `MenuItem` record and the built-in sample menu
//! - [`catalog`]: the read-only catalog, loaded once at startup
//! - [`filter`]: the constraint-set and the filter over the catalog
pub mod catalog;
pub mod filter;
pub mod items;

pub use catalog::{Catalog, CatalogError};
pub use filter::{Constraints, Filtered, filter};
pub use items::{MenuItem, sample_items};
