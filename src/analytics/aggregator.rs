//! Revenue aggregation for dashboard metrics

use crate::types::transaction::Transaction;
use serde::Serialize;
use std::collections::BTreeMap;

/// Headline metrics and grouped revenue sums for a non-empty selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    /// Rows in the selection
    pub rows: usize,
    /// Sum of revenue
    pub total_revenue: f64,
    /// Sum of quantity
    pub total_units: u64,
    /// Mean revenue per row (average ticket)
    pub average_order_value: f64,
    pub revenue_by_category: BTreeMap<String, f64>,
    pub revenue_by_region: BTreeMap<String, f64>,
    /// Keyed by "YYYY-MM", so iteration order is chronological
    pub revenue_by_month: BTreeMap<String, f64>,
}

/// Groups and sums revenue across transaction rows.
pub struct RevenueAggregator;

impl RevenueAggregator {
    /// Summarize `rows`, or `None` when there is nothing to summarize.
    pub fn summarize(rows: &[Transaction]) -> Option<SalesSummary> {
        if rows.is_empty() {
            return None;
        }

        let total_revenue = Self::total_revenue(rows);

        Some(SalesSummary {
            rows: rows.len(),
            total_revenue,
            total_units: Self::total_units(rows),
            average_order_value: total_revenue / rows.len() as f64,
            revenue_by_category: Self::by_category(rows),
            revenue_by_region: Self::by_region(rows),
            revenue_by_month: Self::by_month(rows),
        })
    }

    pub fn total_revenue(rows: &[Transaction]) -> f64 {
        rows.iter().map(|t| t.revenue).sum()
    }

    pub fn total_units(rows: &[Transaction]) -> u64 {
        rows.iter().map(|t| u64::from(t.quantity)).sum()
    }

    pub fn by_category(rows: &[Transaction]) -> BTreeMap<String, f64> {
        Self::group_by(rows, |t| t.category.clone())
    }

    pub fn by_region(rows: &[Transaction]) -> BTreeMap<String, f64> {
        Self::group_by(rows, |t| t.region.clone())
    }

    pub fn by_month(rows: &[Transaction]) -> BTreeMap<String, f64> {
        Self::group_by(rows, |t| Some(t.month_label()))
    }

    /// Sum revenue per key; rows without a key are skipped
    fn group_by<F>(rows: &[Transaction], key: F) -> BTreeMap<String, f64>
    where
        F: Fn(&Transaction) -> Option<String>,
    {
        let mut groups = BTreeMap::new();
        for row in rows {
            if let Some(k) = key(row) {
                *groups.entry(k).or_insert(0.0) += row.revenue;
            }
        }
        groups
    }
}
