use crate::listing::AnomalyListing;
use crate::summary::FlightSummary;
use flight_core::{Error, LabeledSample, Result};
use std::fmt;
use uuid::Uuid;

/// Everything one analysis run produced
#[derive(Debug, Clone, PartialEq)]
pub struct FlightReport {
    run_id: Uuid,
    summary: FlightSummary,
    samples: Vec<LabeledSample>,
    scores: Vec<f64>,
}

impl FlightReport {
    /// Build a report, computing the summary from the samples
    ///
    /// `scores` must hold one anomaly score per sample.
    pub fn new(run_id: Uuid, samples: Vec<LabeledSample>, scores: Vec<f64>) -> Result<Self> {
        if scores.len() != samples.len() {
            return Err(Error::size_mismatch(
                samples.len(),
                scores.len(),
                "anomaly scores",
            ));
        }
        let summary = FlightSummary::from_samples(samples.iter().map(|s| &s.sample))?;
        Ok(Self {
            run_id,
            summary,
            samples,
            scores,
        })
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn summary(&self) -> &FlightSummary {
        &self.summary
    }

    pub fn samples(&self) -> &[LabeledSample] {
        &self.samples
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn anomaly_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_anomaly()).count()
    }

    /// Indices of anomalous samples, ascending
    pub fn anomaly_indices(&self) -> Vec<usize> {
        self.samples
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_anomaly())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn listing(&self) -> AnomalyListing {
        AnomalyListing::from_labeled(&self.samples)
    }
}

impl fmt::Display for FlightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        write!(f, "{}", self.listing())
    }
}
