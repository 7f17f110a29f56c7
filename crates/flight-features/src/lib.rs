//! Feature extraction for flight anomaly detection
//!
//! [`FeatureBuilder`] maps each sample of a [`flight_core::Series`] to the
//! fixed-order vector `[altitude, speed, climb_rate]`. The [`slope`] module
//! derives climb rate from an altitude trace.
//!
//! ```rust
//! use flight_features::{slope, SlopeMethod};
//!
//! let climb = slope(&[0.0, 300.0, 600.0], SlopeMethod::Backward);
//! assert_eq!(climb, vec![300.0, 300.0, 300.0]);
//! ```

pub mod builder;
pub mod slope;

pub use builder::{Feature, FeatureBuilder, FEATURES};
pub use slope::{slope, SlopeMethod};
