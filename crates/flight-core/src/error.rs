//! Error types for flight profile analysis
//!
//! Provides a unified error type for all flight-anomaly crates, plus a
//! stage-qualified wrapper used by the pipeline.

use std::fmt;
use thiserror::Error;

/// Core error type for flight analysis operations
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or non-finite input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Parameter outside its accepted range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// The model could not be fitted to the given data
    #[error("Model fit error: {0}")]
    ModelFit(String),

    /// Tabular export or import failure
    #[error("Export error: {0}")]
    Export(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a non-finite value at a given row and field
    pub fn non_finite(row: usize, field: &str) -> Self {
        Self::InvalidInput(format!(
            "row {row} has a non-finite {field} (NaN or infinite)"
        ))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a contamination rate outside (0, 0.5)
    pub fn invalid_contamination(contamination: f64) -> Self {
        Self::InvalidConfiguration(format!(
            "contamination {contamination} must be in the open interval (0, 0.5)"
        ))
    }

    /// Attach the pipeline stage in which this error occurred
    pub fn at(self, stage: Stage) -> StageError {
        StageError {
            stage,
            source: self,
        }
    }
}

/// Pipeline stage, used to qualify fatal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Synthetic series generation
    Generation,
    /// Feature matrix extraction
    FeatureExtraction,
    /// Model fitting and labeling
    FitPredict,
    /// Summary, listing and export
    Reporting,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Generation => write!(f, "generation"),
            Stage::FeatureExtraction => write!(f, "feature extraction"),
            Stage::FitPredict => write!(f, "fit/predict"),
            Stage::Reporting => write!(f, "reporting"),
        }
    }
}

/// An error tagged with the stage that produced it
#[derive(Error, Debug)]
#[error("{stage} failed: {source}")]
pub struct StageError {
    /// Stage in which the failure occurred
    pub stage: Stage,
    /// Underlying error
    #[source]
    pub source: Error,
}
