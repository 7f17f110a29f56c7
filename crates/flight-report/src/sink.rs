//! Reporting sinks
//!
//! A sink receives a finished [`FlightReport`] and delivers it somewhere.
//! The pipeline never prints or writes files itself; callers pick the sinks
//! they want and hand each of them the report.

use crate::export::export_to_path;
use crate::report::FlightReport;
use flight_core::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Destination for a finished flight report
pub trait ReportingSink {
    /// Deliver the report
    fn consume(&mut self, report: &FlightReport) -> Result<()>;

    /// Check if this sink does anything
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Sink that discards every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ReportingSink for NullSink {
    fn consume(&mut self, _report: &FlightReport) -> Result<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Writes the summary and the anomaly listing as text
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ReportingSink for ConsoleSink<W> {
    fn consume(&mut self, report: &FlightReport) -> Result<()> {
        writeln!(self.writer, "{report}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Exports the labeled samples to a CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportingSink for CsvSink {
    fn consume(&mut self, report: &FlightReport) -> Result<()> {
        export_to_path(&self.path, report.samples())?;
        debug!(run_id = %report.run_id(), "CSV export complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_core::{Label, LabeledSample, Sample};
    use uuid::Uuid;

    fn report(anomalous: bool) -> FlightReport {
        let label = if anomalous { Label::Anomaly } else { Label::Normal };
        let samples = (0..3)
            .map(|t| {
                LabeledSample::new(
                    Sample {
                        time: t,
                        altitude: 300.0 * t as f64,
                        speed: 200.0,
                        climb_rate: 300.0,
                        fuel_used: 2.5 * (t + 1) as f64,
                        heading: 0.5,
                    },
                    if t == 1 { label } else { Label::Normal },
                )
            })
            .collect();
        FlightReport::new(Uuid::new_v4(), samples, vec![0.5; 3]).unwrap()
    }

    #[test]
    fn test_null_sink() {
        let mut sink = NullSink;
        assert!(!sink.is_enabled());
        assert!(sink.consume(&report(true)).is_ok());
    }

    #[test]
    fn test_console_sink_output() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.consume(&report(false)).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        assert!(text.starts_with("--- FLIGHT SUMMARY ---\nDuration: 2 minutes\n"));
        assert!(text.contains("Total fuel used: 7.50 kg"));
        assert!(text.trim_end().ends_with("No anomalies found."));
    }

    #[test]
    fn test_console_sink_lists_anomalies() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.consume(&report(true)).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains("time_min"));
        assert!(!text.contains("No anomalies found."));
    }
}
