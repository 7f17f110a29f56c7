//! Isolation-forest outlier detection
//!
//! This crate labels the rows of a [`flight_core::FeatureMatrix`] as normal
//! or anomalous without supervision.
//!
//! # Algorithm
//!
//! 1. Draw one seed per tree from a seeded `ChaCha8Rng`
//! 2. Grow each tree on a subsample of ψ rows, splitting on a random varying
//!    feature at a uniform value in its range, up to depth `ceil(log2 ψ)`
//! 3. Score each row as `2^(-E[h] / c(ψ))` from its mean path length `E[h]`
//! 4. Rank rows by score (ties by index) and label the top
//!    `round(contamination * n)` as anomalies
//!
//! Enable the `parallel` feature to grow trees on a rayon pool; the labels
//! do not change.
//!
//! ## Usage
//!
//! ```rust
//! use flight_isolation::{IsolationForestDetector, OutlierDetector};
//! use flight_core::FeatureMatrix;
//!
//! let mut rows: Vec<[f64; 2]> = (0..20).map(|i| [i as f64, 1.0]).collect();
//! rows[10] = [500.0, 1.0];
//! let matrix = FeatureMatrix::from_rows(&rows).unwrap();
//!
//! let detector = IsolationForestDetector::with_contamination(0.05, 42);
//! let result = detector.fit_predict(&matrix).unwrap();
//! assert_eq!(result.anomaly_indices(), vec![10]);
//! ```

pub mod detector;
pub mod forest;
pub mod params;
pub mod threshold;
pub mod traits;
pub mod tree;
pub mod types;

pub use detector::{fit_predict, fit_predict_rows, IsolationForestDetector, MIN_ROWS};
pub use forest::{FittedForest, IsolationForest};
pub use params::{IsolationForestParameters, MaxSamples, DEFAULT_CONTAMINATION, DEFAULT_SEED};
pub use threshold::{anomaly_count, label_by_contamination};
pub use traits::{ConfigurableDetector, OutlierDetector, OutlierDetectorProperties};
pub use tree::IsolationTree;
pub use types::AnomalyResult;
