//! Flight profile anomaly analysis
//!
//! This crate re-exports the workspace crates and wires them into a single
//! run:
//!
//! - [`flight_synth`]: seeded synthetic flight with injected faults
//! - [`flight_features`]: `[altitude, speed, climb_rate]` feature rows
//! - [`flight_isolation`]: isolation-forest labeling
//! - [`flight_report`]: summary, anomaly listing and CSV export
//!
//! # Example
//!
//! ```rust
//! use flight_anomaly::{FlightAnalysis, PipelineConfig};
//!
//! let report = FlightAnalysis::from_config(&PipelineConfig::default())
//!     .run()
//!     .unwrap();
//! assert_eq!(report.samples().len(), 61);
//! assert!(report.anomaly_indices().contains(&25));
//! ```

pub mod config;
pub mod pipeline;

pub use flight_core;
pub use flight_features;
pub use flight_isolation;
pub use flight_report;
pub use flight_synth;

pub use config::{OutputConfig, PipelineConfig, DEFAULT_CSV_PATH};
pub use flight_core::{Error, Label, LabeledSample, Result, Sample, Series, SeriesSource, Stage, StageError};
pub use flight_isolation::{fit_predict, IsolationForestDetector, IsolationForestParameters};
pub use flight_report::{ConsoleSink, CsvSink, FlightReport, NullSink, ReportingSink};
pub use flight_synth::{FlightProfileGenerator, FlightProfileParameters};
pub use pipeline::FlightAnalysis;
