use flight_core::{Error, FeatureMatrix, Result, Sample, Series};
use std::fmt;
use tracing::debug;

/// A per-sample input to the outlier model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Altitude,
    Speed,
    ClimbRate,
}

impl Feature {
    /// Read this feature from a sample
    pub fn extract(self, sample: &Sample) -> f64 {
        match self {
            Feature::Altitude => sample.altitude,
            Feature::Speed => sample.speed,
            Feature::ClimbRate => sample.climb_rate,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::Altitude => "altitude",
            Feature::Speed => "speed",
            Feature::ClimbRate => "climb_rate",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Column order of every feature matrix produced by [`FeatureBuilder`]
pub const FEATURES: [Feature; 3] = [Feature::Altitude, Feature::Speed, Feature::ClimbRate];

/// Turns a series into the model's feature matrix
///
/// Row `i` is `[altitude, speed, climb_rate]` of sample `i`. Values are passed
/// through unscaled.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureBuilder;

impl FeatureBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Selected features, in column order
    pub fn features(&self) -> &'static [Feature] {
        &FEATURES
    }

    /// Extract the feature matrix, rejecting non-finite values
    pub fn build(&self, series: &Series) -> Result<FeatureMatrix> {
        let mut data = Vec::with_capacity(series.len() * FEATURES.len());

        for (row, sample) in series.iter().enumerate() {
            for feature in FEATURES {
                let value = feature.extract(sample);
                if !value.is_finite() {
                    return Err(Error::non_finite(row, feature.name()));
                }
                data.push(value);
            }
        }

        debug!(
            "Extracted {} x {} feature matrix",
            series.len(),
            FEATURES.len()
        );
        FeatureMatrix::from_row_major(data, FEATURES.len())
    }
}
