//! Error types for dataset synthesis and configuration validation

use thiserror::Error;

/// Errors raised by the dashboard library.
///
/// An empty filter result is not an error; it is reported through
/// [`crate::session::DashboardView::NoData`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DashboardError {
    /// Requested row count was zero
    #[error("row count must be a positive integer, got {0}")]
    InvalidRowCount(usize),

    /// A sampling fraction outside [0, 1] or not finite
    #[error("{name} must be a finite fraction within [0, 1], got {value}")]
    InvalidFraction { name: &'static str, value: f64 },

    /// Catalog or distribution parameters that cannot produce valid rows
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
