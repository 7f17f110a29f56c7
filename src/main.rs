//! `flight-analyzer [CONFIG.json]`
//!
//! Generates the configured flight, labels anomalous samples, prints the
//! summary and writes the CSV export. Logs go to stderr, filtered by
//! `RUST_LOG` (default `info`).

use anyhow::Context;
use flight_anomaly::{
    ConsoleSink, CsvSink, FlightAnalysis, PipelineConfig, ReportingSink, Stage,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => PipelineConfig::from_path(&path)
            .with_context(|| format!("loading config from {}", path.to_string_lossy()))?,
        None => PipelineConfig::default(),
    };
    config.validate().context("invalid pipeline config")?;

    let report = FlightAnalysis::from_config(&config).run()?;

    if config.output.console {
        ConsoleSink::stdout()
            .consume(&report)
            .map_err(|e| e.at(Stage::Reporting))?;
    }

    if let Some(path) = &config.output.csv_path {
        let mut sink = CsvSink::new(path);
        sink.consume(&report).map_err(|e| e.at(Stage::Reporting))?;
        println!("\nProcessed data saved to {}", sink.path().display());
    }

    info!(run_id = %report.run_id(), "Done");
    Ok(())
}
