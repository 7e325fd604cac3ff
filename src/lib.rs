//! Sales Dashboard Library
//!
//! Synthesizes a fictitious e-commerce transaction table, cleans it and
//! turns region/category selections into metrics and chart series.

pub mod analytics;
pub mod cache;
pub mod cleaner;
pub mod config;
pub mod error;
pub mod filter;
pub mod report;
pub mod session;
pub mod synthesizer;
pub mod types;

pub use cache::SynthesisCache;
pub use cleaner::{CleaningReport, DataCleaner};
pub use config::AppConfig;
pub use error::DashboardError;
pub use filter::FilterSelection;
pub use report::DashboardReport;
pub use session::{DashboardSession, DashboardView};
pub use synthesizer::DataSynthesizer;
pub use types::{catalog::Catalog, transaction::Transaction};
