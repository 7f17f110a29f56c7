//! End-to-end analysis run
//!
//! Stages run in order and the first failure ends the run:
//!
//! 1. generation: the [`SeriesSource`] produces the flight
//! 2. feature extraction: `[altitude, speed, climb_rate]` per sample
//! 3. fit/predict: isolation-forest labels and scores
//! 4. reporting: labels attached and the summary computed
//!
//! Errors come back as a [`StageError`] naming the stage.

use crate::config::PipelineConfig;
use flight_core::{Result, SeriesSource, Stage, StageError};
use flight_features::FeatureBuilder;
use flight_isolation::{IsolationForestDetector, OutlierDetector};
use flight_report::FlightReport;
use flight_synth::FlightProfileGenerator;
use std::time::Instant;
use tracing::{debug, info, info_span};
use uuid::Uuid;

/// One configured analysis over a series source
#[derive(Debug, Clone)]
pub struct FlightAnalysis<S: SeriesSource> {
    source: S,
    features: FeatureBuilder,
    detector: IsolationForestDetector,
}

impl FlightAnalysis<FlightProfileGenerator> {
    /// Analysis of the synthetic flight described by `config`
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            FlightProfileGenerator::new(config.profile.clone()),
            IsolationForestDetector::new(config.detector.clone()),
        )
    }
}

impl<S: SeriesSource> FlightAnalysis<S> {
    pub fn new(source: S, detector: IsolationForestDetector) -> Self {
        Self {
            source,
            features: FeatureBuilder::new(),
            detector,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn detector(&self) -> &IsolationForestDetector {
        &self.detector
    }

    /// Run every stage under a fresh run id
    pub fn run(&self) -> std::result::Result<FlightReport, StageError> {
        self.run_with_id(Uuid::new_v4())
    }

    pub fn run_with_id(&self, run_id: Uuid) -> std::result::Result<FlightReport, StageError> {
        let span = info_span!("flight_analysis", %run_id, source = self.source.source_name());
        let _enter = span.enter();
        let started = Instant::now();

        let series = timed(Stage::Generation, || self.source.generate())?;
        debug!("Generated {} samples", series.len());

        let matrix = timed(Stage::FeatureExtraction, || self.features.build(&series))?;

        let result = timed(Stage::FitPredict, || self.detector.fit_predict(&matrix))?;

        let report = timed(Stage::Reporting, || {
            let labeled = series.with_labels(result.labels())?;
            FlightReport::new(run_id, labeled, result.scores().to_vec())
        })?;

        info!(
            samples = report.samples().len(),
            anomalies = report.anomaly_count(),
            threshold = ?result.threshold(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Flight analysis complete"
        );
        Ok(report)
    }
}

fn timed<T>(stage: Stage, f: impl FnOnce() -> Result<T>) -> std::result::Result<T, StageError> {
    let started = Instant::now();
    let outcome = f().map_err(|e| e.at(stage));
    debug!(%stage, elapsed_us = started.elapsed().as_micros() as u64, ok = outcome.is_ok(), "Stage finished");
    outcome
}
