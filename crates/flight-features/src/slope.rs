//! Climb-rate derivation from an altitude trace

use serde::{Deserialize, Serialize};

/// How the local slope of altitude is estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlopeMethod {
    /// Change over the preceding minute; the first sample uses the
    /// following minute instead.
    #[default]
    Backward,
    /// Central differences inside the trace, one-sided at the ends.
    Central,
}

impl SlopeMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Backward => "backward",
            Self::Central => "central",
        }
    }
}

/// Per-sample slope of `values` with unit spacing
///
/// A single value has zero slope; an empty input gives an empty output.
pub fn slope(values: &[f64], method: SlopeMethod) -> Vec<f64> {
    let n = values.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![0.0],
        _ => {}
    }

    let mut out = Vec::with_capacity(n);
    match method {
        SlopeMethod::Backward => {
            out.push(values[1] - values[0]);
            out.extend(values.windows(2).map(|w| w[1] - w[0]));
        }
        SlopeMethod::Central => {
            out.push(values[1] - values[0]);
            out.extend(values.windows(3).map(|w| (w[2] - w[0]) / 2.0));
            out.push(values[n - 1] - values[n - 2]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_backward_slope() {
        let alt = [0.0, 300.0, 600.0, 650.0];
        assert_eq!(slope(&alt, SlopeMethod::Backward), vec![300.0, 300.0, 300.0, 50.0]);
    }

    #[test]
    fn test_central_slope_matches_gradient() {
        let alt = [1.0, 2.0, 4.0, 7.0, 11.0];
        let g = slope(&alt, SlopeMethod::Central);
        let expected = [1.0, 1.5, 2.5, 3.5, 4.0];
        for (a, b) in g.iter().zip(expected.iter()) {
            assert_relative_eq!(*a, *b);
        }
    }

    #[test]
    fn test_spike_visibility() {
        // A one-sample spike shows at the spike itself only with backward slopes
        let mut alt = vec![1000.0; 5];
        alt[2] += 1500.0;
        assert_eq!(slope(&alt, SlopeMethod::Backward)[2], 1500.0);
        assert_eq!(slope(&alt, SlopeMethod::Central)[2], 0.0);
    }

    #[test]
    fn test_short_inputs() {
        assert!(slope(&[], SlopeMethod::Central).is_empty());
        assert_eq!(slope(&[5.0], SlopeMethod::Backward), vec![0.0]);
        assert_eq!(slope(&[5.0, 7.0], SlopeMethod::Central), vec![2.0, 2.0]);
    }
}
