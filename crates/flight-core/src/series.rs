//! Flight samples and the time-ordered series that holds them

use crate::error::{Error, Result};
use crate::label::{Label, LabeledSample};
use serde::{Deserialize, Serialize};

/// One time step of a flight profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Ordinal minute since departure
    pub time: u32,
    /// Altitude in meters
    pub altitude: f64,
    /// Ground speed in km/h
    pub speed: f64,
    /// Local slope of altitude in m/min
    pub climb_rate: f64,
    /// Cumulative fuel burn in kg
    pub fuel_used: f64,
    /// Heading in degrees, wrapped to [0, 360)
    pub heading: f64,
}

/// Ordered sequence of samples with contiguous minute indices
///
/// The length is fixed at construction and every `time` is exactly one more
/// than its predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Create a series, checking that times are contiguous and increasing
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }

        for (i, pair) in samples.windows(2).enumerate() {
            let (prev, next) = (pair[0].time, pair[1].time);
            if prev.checked_add(1) != Some(next) {
                return Err(Error::InvalidInput(format!(
                    "time must increase by one minute per sample: row {} has time {} after {}",
                    i + 1,
                    next,
                    prev
                )));
            }
        }

        Ok(Self { samples })
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a constructed series
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Borrow the samples in time order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Iterate over the samples in time order
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Look up a sample by its minute index
    pub fn at_time(&self, time: u32) -> Option<&Sample> {
        let start = self.samples[0].time;
        let offset = time.checked_sub(start)? as usize;
        self.samples.get(offset)
    }

    /// Pair every sample with its label
    ///
    /// Labels must be in series order and of the same length.
    pub fn with_labels(&self, labels: &[Label]) -> Result<Vec<LabeledSample>> {
        if labels.len() != self.samples.len() {
            return Err(Error::size_mismatch(
                self.samples.len(),
                labels.len(),
                "label sequence",
            ));
        }

        Ok(self
            .samples
            .iter()
            .zip(labels)
            .map(|(&sample, &label)| LabeledSample::new(sample, label))
            .collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
