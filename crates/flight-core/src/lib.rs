//! Core types for flight profile anomaly analysis
//!
//! This crate holds what every other crate in the workspace agrees on:
//!
//! - [`Sample`] and [`Series`]: the time-ordered flight profile
//! - [`Label`] and [`LabeledSample`]: per-sample anomaly classification
//! - [`FeatureMatrix`]: validated dense input for outlier models
//! - [`Error`], [`Stage`] and [`StageError`]: the error taxonomy
//! - [`SeriesSource`]: the data-source boundary
//!
//! # Example
//!
//! ```rust
//! use flight_core::{FeatureMatrix, Label, Sample, Series};
//!
//! let samples: Vec<Sample> = (0..3)
//!     .map(|t| Sample {
//!         time: t,
//!         altitude: 300.0 * t as f64,
//!         speed: 200.0 + 25.0 * t as f64,
//!         climb_rate: 300.0,
//!         fuel_used: 2.5 * (t + 1) as f64,
//!         heading: 0.5 * t as f64,
//!     })
//!     .collect();
//! let series = Series::new(samples).unwrap();
//!
//! let labeled = series
//!     .with_labels(&[Label::Normal, Label::Anomaly, Label::Normal])
//!     .unwrap();
//! assert!(labeled[1].is_anomaly());
//!
//! let matrix = FeatureMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! assert_eq!(matrix.n_rows(), 2);
//! ```

pub mod error;
pub mod label;
pub mod matrix;
pub mod series;
pub mod traits;

pub use error::{Error, Result, Stage, StageError};
pub use label::{Label, LabeledSample};
pub use matrix::FeatureMatrix;
pub use series::{Sample, Series};
pub use traits::SeriesSource;
