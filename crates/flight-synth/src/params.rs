//! Flight profile generator parameters

use flight_core::{Error, Result};
use flight_features::SlopeMethod;
use serde::{Deserialize, Serialize};

/// Recorded channel a fault is injected into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectedField {
    Altitude,
    Speed,
}

/// Additive fault at one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Injection {
    /// Sample index (equal to the minute for a profile starting at 0)
    pub index: usize,
    pub field: InjectedField,
    /// Amount added to the recorded value
    pub delta: f64,
}

impl Injection {
    pub fn altitude(index: usize, delta: f64) -> Self {
        Self {
            index,
            field: InjectedField::Altitude,
            delta,
        }
    }

    pub fn speed(index: usize, delta: f64) -> Self {
        Self {
            index,
            field: InjectedField::Speed,
            delta,
        }
    }
}

/// Shape, noise and faults of a synthetic flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightProfileParameters {
    /// Last minute of the flight; the series has `duration_min + 1` samples
    pub duration_min: u32,
    /// First minute of cruise
    pub climb_end_min: u32,
    /// First minute of descent
    pub descent_start_min: u32,
    /// Standard deviation of altitude noise, meters
    pub altitude_noise_std: f64,
    /// Standard deviation of speed noise, km/h
    pub speed_noise_std: f64,
    /// Mean heading change per minute, degrees
    pub heading_drift_mean: f64,
    /// Standard deviation of heading change per minute, degrees
    pub heading_drift_std: f64,
    /// Climb-rate derivation from the recorded altitude
    pub climb_rate_method: SlopeMethod,
    /// Faults added to the recorded series
    pub injections: Vec<Injection>,
    pub seed: u64,
}

impl Default for FlightProfileParameters {
    fn default() -> Self {
        Self {
            duration_min: 60,
            climb_end_min: 10,
            descent_start_min: 40,
            altitude_noise_std: 50.0,
            speed_noise_std: 5.0,
            heading_drift_mean: 0.5,
            heading_drift_std: 0.2,
            climb_rate_method: SlopeMethod::Backward,
            injections: vec![Injection::altitude(25, 1500.0), Injection::speed(45, -200.0)],
            seed: 42,
        }
    }
}

impl FlightProfileParameters {
    /// Number of samples the generator will produce
    pub fn sample_count(&self) -> usize {
        self.duration_min as usize + 1
    }

    /// Profile without faults
    pub fn clean() -> Self {
        Self {
            injections: Vec::new(),
            ..Self::default()
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn injections(mut self, injections: Vec<Injection>) -> Self {
        self.injections = injections;
        self
    }

    pub fn climb_rate_method(mut self, method: SlopeMethod) -> Self {
        self.climb_rate_method = method;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.climb_end_min > self.descent_start_min {
            return Err(Error::InvalidConfiguration(format!(
                "climb must end (minute {}) before descent starts (minute {})",
                self.climb_end_min, self.descent_start_min
            )));
        }

        for (name, std) in [
            ("altitude_noise_std", self.altitude_noise_std),
            ("speed_noise_std", self.speed_noise_std),
            ("heading_drift_std", self.heading_drift_std),
        ] {
            if !(std.is_finite() && std >= 0.0) {
                return Err(Error::InvalidConfiguration(format!(
                    "{name} must be finite and non-negative, got {std}"
                )));
            }
        }
        if !self.heading_drift_mean.is_finite() {
            return Err(Error::InvalidConfiguration(
                "heading_drift_mean must be finite".to_string(),
            ));
        }

        let n = self.sample_count();
        for injection in &self.injections {
            if injection.index >= n {
                return Err(Error::InvalidConfiguration(format!(
                    "injection at index {} is outside a {n}-sample flight",
                    injection.index
                )));
            }
            if !injection.delta.is_finite() {
                return Err(Error::InvalidConfiguration(format!(
                    "injection at index {} has a non-finite delta",
                    injection.index
                )));
            }
        }

        Ok(())
    }
}
