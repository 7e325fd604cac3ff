//! Chart-ready series derived from a sales summary

use super::aggregator::SalesSummary;
use serde::Serialize;
use std::collections::BTreeMap;

/// Kind of chart a series is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Donut,
    Line,
}

/// One labelled value; `share` is the percentage of the series total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Build a series from label-ordered sums
    pub fn from_groups(title: &str, kind: ChartKind, groups: &BTreeMap<String, f64>) -> Self {
        let total: f64 = groups.values().sum();
        let points = groups
            .iter()
            .map(|(label, &value)| ChartPoint {
                label: label.clone(),
                value,
                share: if total > 0.0 { value / total * 100.0 } else { 0.0 },
            })
            .collect();

        Self {
            title: title.to_string(),
            kind,
            points,
        }
    }

    /// Largest value in the series, used to scale text bars
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }
}

/// The three dashboard charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    /// Revenue per category
    pub by_category: ChartSeries,
    /// Revenue share per region
    pub by_region: ChartSeries,
    /// Monthly revenue evolution
    pub by_month: ChartSeries,
}

impl DashboardCharts {
    pub fn from_summary(summary: &SalesSummary) -> Self {
        Self {
            by_category: ChartSeries::from_groups(
                "Revenue by Category",
                ChartKind::Bar,
                &summary.revenue_by_category,
            ),
            by_region: ChartSeries::from_groups(
                "Distribution by Region",
                ChartKind::Donut,
                &summary.revenue_by_region,
            ),
            by_month: ChartSeries::from_groups(
                "Monthly Revenue",
                ChartKind::Line,
                &summary.revenue_by_month,
            ),
        }
    }
}
