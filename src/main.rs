//! Sales Dashboard - Main Entry Point
//!
//! Synthesizes and cleans the sales dataset, applies the configured filters
//! and renders metrics and chart data as a text report or JSON.

use anyhow::Result;
use sales_dashboard::{
    config::{AppConfig, ReportFormat},
    DashboardReport, DashboardSession,
};
use tracing::info;

fn main() -> Result<()> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("sales_dashboard={}", config.logging.level).parse()?),
        )
        .init();

    info!(
        rows = config.synthesis.rows,
        seed = config.synthesis.seed,
        "Starting sales dashboard"
    );

    let session = DashboardSession::new(config)?;
    let report = DashboardReport::from_session(&session);

    match session.config().report.format {
        ReportFormat::Text => {
            report.write_text(&session.config().report, &mut std::io::stdout().lock())?
        }
        ReportFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
