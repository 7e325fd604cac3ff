//! Configuration management for the sales dashboard

use crate::error::{DashboardError, Result as DashboardResult};
use crate::types::catalog::Catalog;
use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use config::{Config, File};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Output format of the rendered dashboard
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Boxed text summary on stdout
    #[default]
    Text,
    /// JSON document for an external charting layer
    Json,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub synthesis: SynthesisConfig,
    pub catalog: Catalog,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

/// Synthetic dataset parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Rows generated before duplication
    pub rows: usize,
    /// Seed for the random generator
    pub seed: u64,
    /// First day of the sales window
    pub start_date: NaiveDate,
    /// Length of the sales window in days
    pub window_days: u32,
    /// Standard deviation of unit prices around the category base price
    pub price_std_dev: f64,
    /// Price used when the sampled price is negative
    pub fallback_price: f64,
    /// Fraction of rows appended again as duplicates
    pub duplicate_fraction: f64,
    /// Fraction of rows whose region is blanked
    pub missing_region_fraction: f64,
    pub quantity_min: u32,
    pub quantity_max: u32,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            rows: 1000,
            seed: 42,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN),
            window_days: 365,
            price_std_dev: 50.0,
            fallback_price: 20.0,
            duplicate_fraction: 0.02,
            missing_region_fraction: 0.05,
            quantity_min: 1,
            quantity_max: 4,
        }
    }
}

impl SynthesisConfig {
    /// Reject parameters that cannot produce a valid table
    pub fn validate(&self) -> DashboardResult<()> {
        if self.rows == 0 {
            return Err(DashboardError::InvalidRowCount(self.rows));
        }
        check_fraction("duplicate_fraction", self.duplicate_fraction)?;
        check_fraction("missing_region_fraction", self.missing_region_fraction)?;
        if self.window_days == 0 {
            return Err(DashboardError::InvalidCatalog(
                "window_days must be at least 1".to_string(),
            ));
        }
        if self
            .start_date
            .checked_add_signed(Duration::days(i64::from(self.window_days)))
            .is_none()
        {
            return Err(DashboardError::InvalidCatalog(format!(
                "{} days from {} is past the last representable date",
                self.window_days, self.start_date
            )));
        }
        if !(self.price_std_dev.is_finite() && self.price_std_dev >= 0.0) {
            return Err(DashboardError::InvalidCatalog(format!(
                "price_std_dev must be non-negative, got {}",
                self.price_std_dev
            )));
        }
        if !(self.fallback_price.is_finite() && self.fallback_price > 0.0) {
            return Err(DashboardError::InvalidCatalog(format!(
                "fallback_price must be positive, got {}",
                self.fallback_price
            )));
        }
        if self.quantity_min == 0 || self.quantity_min > self.quantity_max {
            return Err(DashboardError::InvalidCatalog(format!(
                "quantity range {}..={} is empty or allows zero units",
                self.quantity_min, self.quantity_max
            )));
        }
        Ok(())
    }
}

fn check_fraction(name: &'static str, value: f64) -> DashboardResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DashboardError::InvalidFraction { name, value })
    }
}

/// Presentation settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Prefix for currency metrics
    pub currency_symbol: String,
    /// Cleaned rows shown in the processing details
    pub preview_rows: usize,
    pub format: ReportFormat,
    /// Initial region selection; all available regions when absent
    pub regions: Option<BTreeSet<String>>,
    /// Initial category selection; all available categories when absent
    pub categories: Option<BTreeSet<String>>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            preview_rows: 5,
            format: ReportFormat::Text,
            regions: None,
            categories: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/config.toml")
    }

    /// Load configuration from a specific path. A missing file yields defaults.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()).required(false))
            .build()
            .context("Failed to build configuration")?;

        let app: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app.validate().context("Invalid configuration")?;
        Ok(app)
    }

    /// Validate the sections that feed the synthesizer
    pub fn validate(&self) -> DashboardResult<()> {
        self.synthesis.validate()?;
        self.catalog.validate()
    }
}
