//! Types returned by outlier detectors

use flight_core::Label;
use std::fmt;

/// Result of labeling a feature matrix
#[derive(Debug, Clone)]
pub struct AnomalyResult {
    /// One label per input row, in row order
    labels: Vec<Label>,
    /// Anomaly score per row (higher is more anomalous)
    scores: Vec<f64>,
    /// Score of the least anomalous row still labeled anomalous
    threshold: Option<f64>,
    /// Algorithm used for detection
    algorithm: String,
}

impl AnomalyResult {
    pub fn new(
        labels: Vec<Label>,
        scores: Vec<f64>,
        threshold: Option<f64>,
        algorithm: String,
    ) -> Self {
        debug_assert_eq!(labels.len(), scores.len());
        Self {
            labels,
            scores,
            threshold,
            algorithm,
        }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Consume the result, keeping only the labels
    pub fn into_labels(self) -> Vec<Label> {
        self.labels
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Score of the boundary row, `None` if nothing was labeled anomalous
    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Number of rows analysed
    pub fn sample_size(&self) -> usize {
        self.labels.len()
    }

    /// Indices of anomalous rows, ascending
    pub fn anomaly_indices(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_anomaly())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn anomaly_count(&self) -> usize {
        self.labels.iter().filter(|l| l.is_anomaly()).count()
    }

    pub fn has_anomalies(&self) -> bool {
        self.labels.iter().any(|l| l.is_anomaly())
    }
}

impl fmt::Display for AnomalyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Anomaly Detection Result:")?;
        writeln!(f, "  Algorithm: {}", self.algorithm)?;
        writeln!(f, "  Sample size: {}", self.sample_size())?;
        writeln!(f, "  Anomalies detected: {}", self.anomaly_count())?;

        if let Some(threshold) = self.threshold {
            writeln!(f, "  Score threshold: {threshold:.4}")?;
            writeln!(f, "  Anomalous rows:")?;
            for i in self.anomaly_indices() {
                writeln!(f, "    row {i} (score {:.4})", self.scores[i])?;
            }
        }

        Ok(())
    }
}
