//! Isolation forest ensemble
//!
//! The ensemble builder takes its random generator as an argument. It draws
//! one seed per tree up front, so growing trees sequentially or on a rayon
//! pool yields the same forest.

use crate::params::IsolationForestParameters;
use crate::tree::{average_path_length, height_limit, IsolationTree};
use flight_core::{Error, FeatureMatrix, Result};
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Unfitted isolation forest
#[derive(Debug, Clone, Default)]
pub struct IsolationForest {
    params: IsolationForestParameters,
}

impl IsolationForest {
    pub fn new(params: IsolationForestParameters) -> Self {
        Self { params }
    }

    pub fn parameters(&self) -> &IsolationForestParameters {
        &self.params
    }

    /// Fit using a generator seeded from the configured seed
    pub fn fit(&self, features: &FeatureMatrix) -> Result<FittedForest> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.params.seed);
        self.fit_with_rng(features, &mut rng)
    }

    /// Fit using an explicitly supplied generator
    #[instrument(skip(self, features, rng), fields(n_rows = features.n_rows(), n_trees = self.params.n_trees))]
    pub fn fit_with_rng<R: Rng>(&self, features: &FeatureMatrix, rng: &mut R) -> Result<FittedForest> {
        self.params.validate()?;

        let n_rows = features.n_rows();
        if n_rows == 0 {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }
        if !features.has_variation() {
            return Err(Error::ModelFit(
                "all rows are identical; no feature can be partitioned".to_string(),
            ));
        }

        let sample_size = self.params.max_samples.resolve(n_rows);
        let limit = height_limit(sample_size);
        let tree_seeds: Vec<u64> = (0..self.params.n_trees).map(|_| rng.gen()).collect();

        debug!(
            "Growing {} trees on subsamples of {} rows (height limit {})",
            tree_seeds.len(),
            sample_size,
            limit
        );

        let grow = |seed: &u64| {
            let mut tree_rng = ChaCha8Rng::seed_from_u64(*seed);
            let rows = index::sample(&mut tree_rng, n_rows, sample_size).into_vec();
            IsolationTree::grow(features, rows, limit, &mut tree_rng)
        };

        #[cfg(feature = "parallel")]
        let trees: Vec<IsolationTree> = {
            use rayon::prelude::*;
            tree_seeds.par_iter().map(grow).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let trees: Vec<IsolationTree> = tree_seeds.iter().map(grow).collect();

        Ok(FittedForest { trees, sample_size })
    }
}

/// A grown ensemble, ready to score rows
#[derive(Debug, Clone)]
pub struct FittedForest {
    trees: Vec<IsolationTree>,
    sample_size: usize,
}

impl FittedForest {
    pub fn trees(&self) -> &[IsolationTree] {
        &self.trees
    }

    /// Rows used to grow each tree
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Mean isolation path length of `row` across the ensemble
    pub fn mean_path_length(&self, row: &[f64]) -> f64 {
        let total: f64 = self.trees.iter().map(|t| t.path_length(row)).sum();
        total / self.trees.len() as f64
    }

    /// Anomaly score of one row, `2^(-E[h] / c(ψ))`
    ///
    /// Scores lie in (0, 1]; shorter average paths give higher scores.
    pub fn score(&self, row: &[f64]) -> f64 {
        let norm = average_path_length(self.sample_size);
        if norm == 0.0 {
            return 1.0;
        }
        2f64.powf(-self.mean_path_length(row) / norm)
    }

    /// Scores for every row of `features`, in row order
    pub fn score_samples(&self, features: &FeatureMatrix) -> Vec<f64> {
        features.rows().map(|row| self.score(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MaxSamples;

    fn clustered_with_outlier() -> FeatureMatrix {
        let mut rows: Vec<[f64; 2]> = (0..40)
            .map(|i| [10.0 + (i % 7) as f64 * 0.1, 5.0 + (i % 5) as f64 * 0.1])
            .collect();
        rows.push([60.0, -20.0]);
        FeatureMatrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_outlier_gets_highest_score() {
        let matrix = clustered_with_outlier();
        let forest = IsolationForest::default().fit(&matrix).unwrap();
        let scores = forest.score_samples(&matrix);

        let (best, _) = scores
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |acc, (i, &s)| if s > acc.1 { (i, s) } else { acc });
        assert_eq!(best, 40);
        assert!(scores.iter().all(|&s| s > 0.0 && s <= 1.0));
    }

    #[test]
    fn test_same_seed_same_scores() {
        let matrix = clustered_with_outlier();
        let params = IsolationForestParameters::default().seed(7);
        let a = IsolationForest::new(params.clone()).fit(&matrix).unwrap();
        let b = IsolationForest::new(params).fit(&matrix).unwrap();
        assert_eq!(a.score_samples(&matrix), b.score_samples(&matrix));
    }

    #[test]
    fn test_injected_rng_matches_seeded_fit() {
        let matrix = clustered_with_outlier();
        let forest = IsolationForest::new(IsolationForestParameters::default().seed(3));
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let injected = forest.fit_with_rng(&matrix, &mut rng).unwrap();
        let seeded = forest.fit(&matrix).unwrap();
        assert_eq!(injected.score_samples(&matrix), seeded.score_samples(&matrix));
    }

    #[test]
    fn test_sample_size_and_tree_count() {
        let matrix = clustered_with_outlier();
        let params = IsolationForestParameters::default()
            .n_trees(12)
            .max_samples(MaxSamples::Count(16));
        let forest = IsolationForest::new(params).fit(&matrix).unwrap();
        assert_eq!(forest.trees().len(), 12);
        assert_eq!(forest.sample_size(), 16);
        assert!(forest.trees().iter().all(|t| t.height_limit() == 4));
    }

    #[test]
    fn test_identical_rows_fail_to_fit() {
        let matrix = FeatureMatrix::from_rows(&vec![[3.0, 3.0, 3.0]; 12]).unwrap();
        let err = IsolationForest::default().fit(&matrix).unwrap_err();
        assert!(matches!(err, Error::ModelFit(_)));
    }
}
