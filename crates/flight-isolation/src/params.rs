//! Isolation forest parameters

use flight_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default expected fraction of anomalous rows
pub const DEFAULT_CONTAMINATION: f64 = 0.08;

/// Default seed for the ensemble's random generator
pub const DEFAULT_SEED: u64 = 42;

/// Default number of trees in the ensemble
pub const DEFAULT_N_TREES: usize = 100;

/// Subsample cap used by [`MaxSamples::Auto`]
pub const AUTO_MAX_SAMPLES: usize = 256;

/// Rows drawn (without replacement) to grow each tree
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxSamples {
    /// `min(256, n_rows)`
    Auto,
    /// Fixed count, clamped to `n_rows`
    Count(usize),
    /// Fraction of `n_rows`, in (0, 1]
    Fraction(f64),
}

impl Default for MaxSamples {
    fn default() -> Self {
        Self::Auto
    }
}

impl MaxSamples {
    /// Subsample size for a matrix with `n_rows` rows
    pub fn resolve(&self, n_rows: usize) -> usize {
        let size = match *self {
            MaxSamples::Auto => AUTO_MAX_SAMPLES,
            MaxSamples::Count(k) => k,
            MaxSamples::Fraction(f) => (f * n_rows as f64).ceil() as usize,
        };
        size.clamp(1, n_rows.max(1))
    }

    fn validate(&self) -> Result<()> {
        match *self {
            MaxSamples::Auto => Ok(()),
            MaxSamples::Count(k) if k < 2 => Err(Error::InvalidConfiguration(format!(
                "max_samples count must be at least 2, got {k}"
            ))),
            MaxSamples::Count(_) => Ok(()),
            MaxSamples::Fraction(f) if !(f > 0.0 && f <= 1.0) => {
                Err(Error::InvalidConfiguration(format!(
                    "max_samples fraction must be in (0, 1], got {f}"
                )))
            }
            MaxSamples::Fraction(_) => Ok(()),
        }
    }
}

/// Isolation forest parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsolationForestParameters {
    /// Number of isolation trees in the ensemble
    pub n_trees: usize,
    /// Rows drawn to grow each tree
    pub max_samples: MaxSamples,
    /// Expected fraction of anomalous rows, in (0, 0.5)
    pub contamination: f64,
    /// Seed for every random choice the ensemble makes
    pub seed: u64,
}

impl Default for IsolationForestParameters {
    fn default() -> Self {
        Self {
            n_trees: DEFAULT_N_TREES,
            max_samples: MaxSamples::Auto,
            contamination: DEFAULT_CONTAMINATION,
            seed: DEFAULT_SEED,
        }
    }
}

impl IsolationForestParameters {
    pub fn new(contamination: f64, seed: u64) -> Self {
        Self {
            contamination,
            seed,
            ..Self::default()
        }
    }

    pub fn n_trees(mut self, n_trees: usize) -> Self {
        self.n_trees = n_trees;
        self
    }

    pub fn max_samples(mut self, max_samples: MaxSamples) -> Self {
        self.max_samples = max_samples;
        self
    }

    pub fn contamination(mut self, contamination: f64) -> Self {
        self.contamination = contamination;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every parameter against its accepted range
    pub fn validate(&self) -> Result<()> {
        // Written so that NaN fails too
        if !(self.contamination > 0.0 && self.contamination < 0.5) {
            return Err(Error::invalid_contamination(self.contamination));
        }
        if self.n_trees == 0 {
            return Err(Error::InvalidConfiguration(
                "n_trees must be at least 1".to_string(),
            ));
        }
        self.max_samples.validate()
    }
}
