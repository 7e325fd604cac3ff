//! Text and JSON rendering of the dashboard

use crate::analytics::{ChartSeries, SalesSummary};
use crate::config::ReportConfig;
use crate::filter::FilterSelection;
use crate::session::{DashboardSession, DashboardView, ProcessingDetails};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;
use tracing::debug;

/// Columns between the left and right borders
const INNER_WIDTH: usize = 84;
const BAR_WIDTH: usize = 30;

/// Everything a presentation layer needs for one render
#[derive(Debug, Serialize)]
pub struct DashboardReport {
    pub details: ProcessingDetails,
    pub selection: FilterSelection,
    pub view: DashboardView,
}

impl DashboardReport {
    pub fn from_session(session: &DashboardSession) -> Self {
        Self {
            details: session.processing_details(),
            selection: session.selection().clone(),
            view: session.view(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize dashboard report")
    }

    /// Render the boxed text report as lines
    pub fn render_text(&self, config: &ReportConfig) -> Vec<String> {
        let mut lines = Vec::new();
        let symbol = &config.currency_symbol;

        lines.push(rule('╔', '╗'));
        lines.push(boxed(" E-COMMERCE SALES DASHBOARD"));
        lines.push(rule('╠', '╣'));
        lines.push(boxed(&format!(" Raw rows loaded:              {:>8}", self.details.raw_rows)));
        lines.push(boxed(&format!(
            " Rows removed (dup/missing):   {:>8}  ({} duplicate, {} incomplete)",
            self.details.removed_rows,
            self.details.duplicates_removed,
            self.details.incomplete_removed
        )));
        lines.push(boxed(&format!(" Clean rows for analysis:      {:>8}", self.details.clean_rows)));
        for row in &self.details.preview {
            lines.push(boxed(&format!(
                "   {} {:<13} {:<12} {:>10} x{} {:<12} {:>12}",
                row.date,
                row.product,
                row.category.as_deref().unwrap_or("-"),
                format_currency(row.unit_price, symbol),
                row.quantity,
                row.region.as_deref().unwrap_or("-"),
                format_currency(row.revenue, symbol),
            )));
        }
        lines.push(rule('╠', '╣'));
        lines.push(boxed(&format!(" Regions:    {}", join(&self.selection.regions))));
        lines.push(boxed(&format!(" Categories: {}", join(&self.selection.categories))));
        lines.push(rule('╠', '╣'));

        match &self.view {
            DashboardView::NoData { notice } => {
                lines.push(boxed(&format!(" ! {}", notice)));
            }
            DashboardView::Ready {
                summary, charts, ..
            } => {
                push_metrics(&mut lines, summary, symbol);
                for series in [&charts.by_category, &charts.by_region, &charts.by_month] {
                    lines.push(rule('╠', '╣'));
                    push_series(&mut lines, series, symbol);
                }
            }
        }

        lines.push(rule('╚', '╝'));
        lines
    }

    /// Write the text report to `out`, independent of the log filter
    pub fn write_text<W: Write>(&self, config: &ReportConfig, out: &mut W) -> Result<()> {
        let lines = self.render_text(config);
        for line in &lines {
            writeln!(out, "{}", line).context("Failed to write dashboard report")?;
        }
        out.flush().context("Failed to flush dashboard report")?;
        debug!(lines = lines.len(), "Dashboard report written");
        Ok(())
    }
}

fn rule(left: char, right: char) -> String {
    format!("{}{}{}", left, "═".repeat(INNER_WIDTH), right)
}

/// Frame `text` between side borders, padding to the box width.
/// Text wider than the box is left unpadded.
fn boxed(text: &str) -> String {
    format!("║{:<width$}║", text, width = INNER_WIDTH)
}

fn push_metrics(lines: &mut Vec<String>, summary: &SalesSummary, symbol: &str) {
    lines.push(boxed(&format!(
        " Total Revenue:    {}",
        format_currency(summary.total_revenue, symbol)
    )));
    lines.push(boxed(&format!(" Total Items Sold: {}", summary.total_units)));
    lines.push(boxed(&format!(
        " Average Ticket:   {}",
        format_currency(summary.average_order_value, symbol)
    )));
}

fn push_series(lines: &mut Vec<String>, series: &ChartSeries, symbol: &str) {
    lines.push(boxed(&format!(" {}", series.title)));
    let max = series.max_value();
    for point in &series.points {
        let len = if max > 0.0 {
            ((point.value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        lines.push(boxed(&format!(
            "   {:<12} {:>18} ({:>5.1}%) {}",
            point.label,
            format_currency(point.value, symbol),
            point.share,
            "█".repeat(len)
        )));
    }
}

fn join(values: &BTreeSet<String>) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Format as `"<symbol> 1,234,567.89"`
pub fn format_currency(value: f64, symbol: &str) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{} {}{}.{}", symbol, sign, grouped, frac_part)
}
