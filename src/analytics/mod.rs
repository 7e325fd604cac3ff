//! Metric and chart aggregation over filtered transactions

pub mod aggregator;
pub mod charts;

pub use aggregator::{RevenueAggregator, SalesSummary};
pub use charts::{ChartPoint, ChartSeries, DashboardCharts};
