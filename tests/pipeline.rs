//! End-to-end: synthesize -> clean -> filter -> summarize

use sales_dashboard::analytics::RevenueAggregator;
use sales_dashboard::config::AppConfig;
use sales_dashboard::{DataCleaner, DataSynthesizer, FilterSelection};
use std::collections::BTreeSet;

fn raw_table() -> Vec<sales_dashboard::Transaction> {
    let config = AppConfig::default();
    DataSynthesizer::new(config.synthesis, config.catalog)
        .unwrap()
        .generate(1000)
        .unwrap()
}

#[test]
fn default_scenario() {
    let raw = raw_table();
    assert!(raw.len() >= 1000 && raw.len() <= 1300);

    let report = DataCleaner::new().clean(&raw);

    assert!(report.rows_after() <= report.rows_before);
    assert_eq!(report.rows_removed, report.rows_before - report.rows_after());
    assert!(report
        .table
        .iter()
        .all(|t| t.region.is_some() && t.category.is_some()));
}

#[test]
fn cleaning_is_stable() {
    let cleaner = DataCleaner::new();
    let once = cleaner.clean(&raw_table());
    let twice = cleaner.clean(&once.table);

    assert_eq!(twice.rows_removed, 0);
    assert_eq!(twice.table, once.table);
}

#[test]
fn filter_laws() {
    let clean = DataCleaner::new().clean(&raw_table()).table;

    let all = FilterSelection::all(&clean);
    assert_eq!(all.apply(&clean), clean);

    let narrow = FilterSelection::new(
        BTreeSet::from(["South".to_string(), "North".to_string()]),
        BTreeSet::from(["Electronics".to_string()]),
    );
    let once = narrow.apply(&clean);
    assert!(!once.is_empty());
    assert_eq!(narrow.apply(&once), once);
}

#[test]
fn summary_is_consistent_with_groups() {
    let clean = DataCleaner::new().clean(&raw_table()).table;
    let summary = RevenueAggregator::summarize(&clean).unwrap();

    let by_category: f64 = summary.revenue_by_category.values().sum();
    let by_region: f64 = summary.revenue_by_region.values().sum();
    let by_month: f64 = summary.revenue_by_month.values().sum();

    for total in [by_category, by_region, by_month] {
        assert!((total - summary.total_revenue).abs() < 1e-6 * summary.total_revenue);
    }
    assert_eq!(summary.revenue_by_month.len(), 12);
    assert!(summary.total_units >= clean.len() as u64);
}

#[test]
fn empty_selection_has_no_summary() {
    let clean = DataCleaner::new().clean(&raw_table()).table;
    let selection = FilterSelection::new(BTreeSet::new(), BTreeSet::new());

    let filtered = selection.apply(&clean);
    assert!(filtered.is_empty());
    assert!(RevenueAggregator::summarize(&filtered).is_none());
}
