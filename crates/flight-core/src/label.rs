//! Binary anomaly labels

use crate::error::Error;
use crate::series::Sample;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of classifying one sample
///
/// Integer conversions follow the outlier-detection convention where an
/// anomaly is `-1` and a normal sample is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Label {
    Normal,
    Anomaly,
}

impl Label {
    /// Signed representation: -1 for anomalies, 1 otherwise
    pub fn as_sign(self) -> i8 {
        match self {
            Label::Normal => 1,
            Label::Anomaly => -1,
        }
    }

    pub fn is_anomaly(self) -> bool {
        matches!(self, Label::Anomaly)
    }
}

impl From<Label> for i8 {
    fn from(label: Label) -> Self {
        label.as_sign()
    }
}

impl TryFrom<i8> for Label {
    type Error = Error;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Label::Normal),
            -1 => Ok(Label::Anomaly),
            other => Err(Error::InvalidInput(format!(
                "anomaly label must be -1 or 1, got {other}"
            ))),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Normal => write!(f, "normal"),
            Label::Anomaly => write!(f, "anomaly"),
        }
    }
}

/// A sample enriched with its anomaly label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledSample {
    pub sample: Sample,
    pub label: Label,
}

impl LabeledSample {
    pub fn new(sample: Sample, label: Label) -> Self {
        Self { sample, label }
    }

    pub fn is_anomaly(&self) -> bool {
        self.label.is_anomaly()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_convention() {
        assert_eq!(Label::Anomaly.as_sign(), -1);
        assert_eq!(Label::Normal.as_sign(), 1);
        assert_eq!(Label::try_from(-1).unwrap(), Label::Anomaly);
        assert_eq!(Label::try_from(1).unwrap(), Label::Normal);
        assert!(Label::try_from(0).is_err());
        assert!(Label::try_from(2).is_err());
    }
}
