//! Type definitions for the sales dashboard

pub mod catalog;
pub mod transaction;

pub use catalog::{Catalog, CategorySpec};
pub use transaction::{RowKey, Transaction};
