//! Isolation-forest anomaly detector
//!
//! Fits a forest on the whole matrix, scores every row, and labels the top
//! `contamination` fraction as anomalies.

use crate::forest::IsolationForest;
use crate::params::IsolationForestParameters;
use crate::threshold::label_by_contamination;
use crate::traits::{ConfigurableDetector, OutlierDetector, OutlierDetectorProperties};
use crate::types::AnomalyResult;
use flight_core::{Error, FeatureMatrix, Label, Result};
use tracing::{debug, instrument};

/// Fewest rows for which isolation depths are meaningful
///
/// Below 16 rows the height limit is at most 3. A row that is extreme on
/// one feature can then score below a row that is moderately unusual on
/// two others, so a single gross outlier is not guaranteed the only
/// anomaly slot. From 16 rows up it is reliably ranked first.
pub const MIN_ROWS: usize = 8;

/// Unsupervised detector backed by an [`IsolationForest`]
#[derive(Debug, Clone, Default)]
pub struct IsolationForestDetector {
    params: IsolationForestParameters,
}

impl IsolationForestDetector {
    pub fn new(params: IsolationForestParameters) -> Self {
        Self { params }
    }

    /// Detector with default tree count and sampling
    pub fn with_contamination(contamination: f64, seed: u64) -> Self {
        Self::new(IsolationForestParameters::new(contamination, seed))
    }
}

impl OutlierDetectorProperties for IsolationForestDetector {
    fn algorithm_name(&self) -> &'static str {
        "IsolationForest"
    }

    fn minimum_sample_size(&self) -> usize {
        MIN_ROWS
    }
}

impl OutlierDetector for IsolationForestDetector {
    #[instrument(skip(self, features), fields(n_rows = features.n_rows(), contamination = self.params.contamination))]
    fn fit_predict(&self, features: &FeatureMatrix) -> Result<AnomalyResult> {
        self.params.validate()?;

        if features.n_rows() < self.minimum_sample_size() {
            return Err(Error::InsufficientData {
                expected: self.minimum_sample_size(),
                actual: features.n_rows(),
            });
        }

        let forest = IsolationForest::new(self.params.clone()).fit(features)?;
        let scores = forest.score_samples(features);
        let (labels, threshold) = label_by_contamination(&scores, self.params.contamination);

        let result = AnomalyResult::new(
            labels,
            scores,
            threshold,
            self.algorithm_name().to_string(),
        );
        debug!(
            "Labeled {} of {} rows as anomalous",
            result.anomaly_count(),
            result.sample_size()
        );
        Ok(result)
    }
}

impl ConfigurableDetector for IsolationForestDetector {
    type Parameters = IsolationForestParameters;

    fn with_parameters(params: Self::Parameters) -> Self {
        Self::new(params)
    }

    fn parameters(&self) -> &Self::Parameters {
        &self.params
    }

    fn set_parameters(&mut self, params: Self::Parameters) {
        self.params = params;
    }
}

/// Label every row of `features` with default forest settings
pub fn fit_predict(features: &FeatureMatrix, contamination: f64, seed: u64) -> Result<Vec<Label>> {
    IsolationForestDetector::with_contamination(contamination, seed)
        .fit_predict(features)
        .map(AnomalyResult::into_labels)
}

/// Like [`fit_predict`], validating raw rows first
///
/// Rejects an empty row, ragged rows and non-finite values with
/// `InvalidInput`.
pub fn fit_predict_rows<R: AsRef<[f64]>>(
    rows: &[R],
    contamination: f64,
    seed: u64,
) -> Result<Vec<Label>> {
    let features = FeatureMatrix::from_rows(rows)?;
    fit_predict(&features, contamination, seed)
}
