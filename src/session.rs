//! Dashboard session: memoized synthesis, cleaning, selection and views

use crate::analytics::{DashboardCharts, RevenueAggregator, SalesSummary};
use crate::cache::SynthesisCache;
use crate::cleaner::{CleaningReport, DataCleaner};
use crate::config::AppConfig;
use crate::error::Result;
use crate::filter::{available_categories, available_regions, FilterSelection};
use crate::synthesizer::DataSynthesizer;
use crate::types::transaction::Transaction;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Notice shown when the selection leaves no rows
pub const NO_DATA_NOTICE: &str = "No data available for the selected filters.";

/// Row counts from loading and cleaning, plus a preview of the clean table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingDetails {
    pub raw_rows: usize,
    pub removed_rows: usize,
    pub duplicates_removed: usize,
    pub incomplete_removed: usize,
    pub clean_rows: usize,
    pub preview: Vec<Transaction>,
}

/// What the presentation layer should display for the current selection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardView {
    /// Selection matched nothing; no metrics were computed
    NoData { notice: String },
    Ready {
        summary: SalesSummary,
        charts: DashboardCharts,
        table: Vec<Transaction>,
    },
}

impl DashboardView {
    pub fn is_empty(&self) -> bool {
        matches!(self, DashboardView::NoData { .. })
    }
}

/// One user's dashboard state. Selections never leak between sessions.
pub struct DashboardSession {
    config: AppConfig,
    cache: SynthesisCache,
    cleaner: DataCleaner,
    cleaning: CleaningReport,
    selection: FilterSelection,
}

impl DashboardSession {
    /// Synthesize and clean the configured dataset, selecting everything
    /// (or the configured initial selections).
    pub fn new(config: AppConfig) -> Result<Self> {
        let synthesizer = DataSynthesizer::new(config.synthesis.clone(), config.catalog.clone())?;
        let mut cache = SynthesisCache::new(synthesizer);
        let cleaner = DataCleaner::new();

        let raw = cache.get_or_generate(config.synthesis.rows)?;
        let cleaning = cleaner.clean(&raw);

        let mut session = Self {
            selection: FilterSelection::all(&cleaning.table),
            config,
            cache,
            cleaner,
            cleaning,
        };
        session.apply_configured_selection();
        Ok(session)
    }

    /// Switch to a dataset of `rows` rows, reusing memoized synthesis.
    /// Resets the selection to all available values.
    pub fn reload(&mut self, rows: usize) -> Result<()> {
        let raw = self.cache.get_or_generate(rows)?;
        self.cleaning = self.cleaner.clean(&raw);
        self.selection = FilterSelection::all(&self.cleaning.table);
        info!(
            rows = rows,
            cache_hits = self.cache.hits(),
            cache_misses = self.cache.misses(),
            "Dataset reloaded"
        );
        Ok(())
    }

    fn apply_configured_selection(&mut self) {
        if let Some(regions) = self.config.report.regions.clone() {
            self.select_regions(regions);
        }
        if let Some(categories) = self.config.report.categories.clone() {
            self.select_categories(categories);
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn cache(&self) -> &SynthesisCache {
        &self.cache
    }

    /// The cleaned table
    pub fn clean_table(&self) -> &[Transaction] {
        &self.cleaning.table
    }

    pub fn available_regions(&self) -> BTreeSet<String> {
        available_regions(&self.cleaning.table)
    }

    pub fn available_categories(&self) -> BTreeSet<String> {
        available_categories(&self.cleaning.table)
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Replace the region selection. Unknown values are kept but match nothing.
    pub fn select_regions(&mut self, regions: BTreeSet<String>) {
        warn_unknown("region", &regions, &self.available_regions());
        self.selection.regions = regions;
    }

    /// Replace the category selection. Unknown values are kept but match nothing.
    pub fn select_categories(&mut self, categories: BTreeSet<String>) {
        warn_unknown("category", &categories, &self.available_categories());
        self.selection.categories = categories;
    }

    pub fn processing_details(&self) -> ProcessingDetails {
        ProcessingDetails {
            raw_rows: self.cleaning.rows_before,
            removed_rows: self.cleaning.rows_removed,
            duplicates_removed: self.cleaning.duplicates_removed,
            incomplete_removed: self.cleaning.incomplete_removed,
            clean_rows: self.cleaning.rows_after(),
            preview: self
                .cleaning
                .table
                .iter()
                .take(self.config.report.preview_rows)
                .cloned()
                .collect(),
        }
    }

    /// Filter the cleaned table and compute metrics and chart data
    pub fn view(&self) -> DashboardView {
        let table = self.selection.apply(&self.cleaning.table);

        match RevenueAggregator::summarize(&table) {
            Some(summary) => {
                let charts = DashboardCharts::from_summary(&summary);
                DashboardView::Ready {
                    summary,
                    charts,
                    table,
                }
            }
            None => {
                warn!(
                    regions = self.selection.regions.len(),
                    categories = self.selection.categories.len(),
                    "Selection matched no rows"
                );
                DashboardView::NoData {
                    notice: NO_DATA_NOTICE.to_string(),
                }
            }
        }
    }
}

fn warn_unknown(kind: &str, selected: &BTreeSet<String>, available: &BTreeSet<String>) {
    for value in selected.difference(available) {
        warn!(kind = kind, value = %value, "Selected value not present in data");
    }
}
