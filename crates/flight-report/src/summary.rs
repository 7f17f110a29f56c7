//! Whole-flight summary statistics

use flight_core::{Error, Result, Sample};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SUMMARY_HEADING: &str = "--- FLIGHT SUMMARY ---";

/// Headline figures for one flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
    /// Minute of the last sample
    pub duration_min: u32,
    pub max_altitude: f64,
    pub max_speed: f64,
    /// Arithmetic mean of the climb rate over all samples
    pub mean_climb_rate: f64,
    /// Cumulative fuel burn at the last sample
    pub total_fuel_used: f64,
}

impl FlightSummary {
    pub fn from_samples<'a, I>(samples: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Sample>,
    {
        let mut iter = samples.into_iter();
        let first = iter.next().ok_or(Error::InsufficientData {
            expected: 1,
            actual: 0,
        })?;

        let mut summary = Self {
            duration_min: first.time,
            max_altitude: first.altitude,
            max_speed: first.speed,
            mean_climb_rate: first.climb_rate,
            total_fuel_used: first.fuel_used,
        };
        let mut climb_sum = first.climb_rate;
        let mut count = 1usize;

        for s in iter {
            summary.duration_min = s.time;
            summary.max_altitude = summary.max_altitude.max(s.altitude);
            summary.max_speed = summary.max_speed.max(s.speed);
            summary.total_fuel_used = s.fuel_used;
            climb_sum += s.climb_rate;
            count += 1;
        }
        summary.mean_climb_rate = climb_sum / count as f64;

        Ok(summary)
    }
}

impl fmt::Display for FlightSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SUMMARY_HEADING}")?;
        writeln!(f, "Duration: {} minutes", self.duration_min)?;
        writeln!(f, "Max altitude: {:.1} m", self.max_altitude)?;
        writeln!(f, "Max speed: {:.1} km/h", self.max_speed)?;
        writeln!(f, "Average climb rate: {:.2} m/min", self.mean_climb_rate)?;
        write!(f, "Total fuel used: {:.2} kg", self.total_fuel_used)
    }
}
