//! Console table of anomalous samples

use flight_core::{LabeledSample, Sample};
use std::fmt;

pub const LISTING_HEADING: &str = "--- ANOMALIES DETECTED ---";
pub const NO_ANOMALIES: &str = "No anomalies found.";

/// The anomalous rows of a labeled flight, in time order
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyListing {
    rows: Vec<Sample>,
}

impl AnomalyListing {
    pub fn from_labeled(samples: &[LabeledSample]) -> Self {
        let rows = samples
            .iter()
            .filter(|s| s.is_anomaly())
            .map(|s| s.sample)
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Sample] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for AnomalyListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{LISTING_HEADING}")?;
        if self.rows.is_empty() {
            return write!(f, "{NO_ANOMALIES}");
        }

        write!(
            f,
            "{:>8}  {:>10}  {:>9}  {:>14}",
            "time_min", "altitude_m", "speed_kmh", "climb_rate_mpm"
        )?;
        for s in &self.rows {
            write!(
                f,
                "\n{:>8}  {:>10.2}  {:>9.2}  {:>14.2}",
                s.time, s.altitude, s.speed, s.climb_rate
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_core::Label;

    fn labeled(time: u32, label: Label) -> LabeledSample {
        LabeledSample::new(
            Sample {
                time,
                altitude: 3000.0 + time as f64,
                speed: 450.0,
                climb_rate: 50.0,
                fuel_used: time as f64,
                heading: 10.0,
            },
            label,
        )
    }

    #[test]
    fn test_no_anomalies_message() {
        let listing = AnomalyListing::from_labeled(&[labeled(0, Label::Normal)]);
        assert!(listing.is_empty());
        assert_eq!(
            listing.to_string(),
            format!("{LISTING_HEADING}\n{NO_ANOMALIES}")
        );
    }

    #[test]
    fn test_lists_only_anomalies() {
        let samples = [
            labeled(0, Label::Normal),
            labeled(1, Label::Anomaly),
            labeled(2, Label::Normal),
            labeled(3, Label::Anomaly),
        ];
        let listing = AnomalyListing::from_labeled(&samples);
        assert_eq!(listing.len(), 2);
        assert_eq!(listing.rows()[1].time, 3);

        let text = listing.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], LISTING_HEADING);
        assert!(lines[1].contains("climb_rate_mpm"));
        assert!(lines[2].trim_start().starts_with("1 "));
        assert!(lines[3].contains("3003.00"));
    }
}
