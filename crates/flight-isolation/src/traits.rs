//! Core traits for outlier detection
//!
//! Detectors are stateless between calls: each `fit_predict` fits a fresh
//! model and labels the same rows it was fitted on.

use crate::types::AnomalyResult;
use flight_core::{FeatureMatrix, Result};

/// Properties of a detector that don't depend on the data
pub trait OutlierDetectorProperties {
    /// Get the name of the detection algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Get the minimum number of rows required for detection
    fn minimum_sample_size(&self) -> usize;
}

/// Fused fit-and-label over a feature matrix
pub trait OutlierDetector: OutlierDetectorProperties {
    fn fit_predict(&self, features: &FeatureMatrix) -> Result<AnomalyResult>;
}

/// Detectors whose behaviour is driven by a parameter set
pub trait ConfigurableDetector {
    type Parameters;

    fn with_parameters(params: Self::Parameters) -> Self;
    fn parameters(&self) -> &Self::Parameters;
    fn set_parameters(&mut self, params: Self::Parameters);
}
