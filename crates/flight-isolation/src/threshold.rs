//! Contamination-based labeling
//!
//! Rows are ranked by score, highest first, with ties broken by original
//! index. The first `round(contamination * n)` rows are anomalies, where
//! `round` goes half away from zero (`f64::round`).

use flight_core::Label;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Number of rows labeled anomalous for `n_rows` rows
pub fn anomaly_count(contamination: f64, n_rows: usize) -> usize {
    let k = (contamination * n_rows as f64).round();
    if k <= 0.0 {
        0
    } else {
        (k as usize).min(n_rows)
    }
}

/// Row indices ordered from most to least anomalous
pub fn rank(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by_key(|&i| (Reverse(OrderedFloat(scores[i])), i));
    order
}

/// Labels for every row plus the score of the last row labeled anomalous
pub fn label_by_contamination(scores: &[f64], contamination: f64) -> (Vec<Label>, Option<f64>) {
    let k = anomaly_count(contamination, scores.len());
    let mut labels = vec![Label::Normal; scores.len()];

    let order = rank(scores);
    for &i in &order[..k] {
        labels[i] = Label::Anomaly;
    }

    let threshold = k.checked_sub(1).map(|last| scores[order[last]]);
    (labels, threshold)
}
