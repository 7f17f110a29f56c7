//! Reporting for labeled flight profiles
//!
//! - [`FlightSummary`]: duration, peaks, mean climb rate and fuel burn
//! - [`AnomalyListing`]: console table of the anomalous samples
//! - [`write_csv`] / [`read_csv`]: lossless flat export
//! - [`ReportingSink`]: where a finished [`FlightReport`] goes
//!
//! # Example
//!
//! ```rust
//! use flight_core::{Label, LabeledSample, Sample};
//! use flight_report::{ConsoleSink, FlightReport, ReportingSink};
//! use uuid::Uuid;
//!
//! let samples: Vec<LabeledSample> = (0..2)
//!     .map(|t| {
//!         let sample = Sample {
//!             time: t,
//!             altitude: 300.0 * t as f64,
//!             speed: 200.0,
//!             climb_rate: 300.0,
//!             fuel_used: 2.5 * (t + 1) as f64,
//!             heading: 0.5,
//!         };
//!         LabeledSample::new(sample, Label::Normal)
//!     })
//!     .collect();
//!
//! let report = FlightReport::new(Uuid::new_v4(), samples, vec![0.4, 0.4]).unwrap();
//! let mut sink = ConsoleSink::new(Vec::new());
//! sink.consume(&report).unwrap();
//! ```

pub mod export;
pub mod listing;
pub mod report;
pub mod sink;
pub mod summary;

pub use export::{export_to_path, read_csv, write_csv, FlightRecord};
pub use listing::{AnomalyListing, LISTING_HEADING, NO_ANOMALIES};
pub use report::FlightReport;
pub use sink::{ConsoleSink, CsvSink, NullSink, ReportingSink};
pub use summary::{FlightSummary, SUMMARY_HEADING};
