//! Dense row-major feature matrix

use crate::error::{Error, Result};

/// `n_rows × n_cols` matrix of finite values, stored row-major
///
/// Every constructor checks shape and finiteness, so code that receives a
/// `FeatureMatrix` never has to re-validate it.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    data: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
}

impl FeatureMatrix {
    /// Build from a slice of rows
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let n_cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if n_cols == 0 {
            return Err(Error::InvalidInput(
                "feature matrix must have at least one column".to_string(),
            ));
        }

        let mut data = Vec::with_capacity(rows.len() * n_cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(Error::InvalidInput(format!(
                    "row {i} has {} features, expected {n_cols}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }

        Self::from_row_major(data, n_cols)
    }

    /// Build from a flat row-major buffer
    pub fn from_row_major(data: Vec<f64>, n_cols: usize) -> Result<Self> {
        if n_cols == 0 {
            return Err(Error::InvalidInput(
                "feature matrix must have at least one column".to_string(),
            ));
        }
        if data.len() % n_cols != 0 {
            return Err(Error::InvalidInput(format!(
                "buffer of {} values is not a whole number of {n_cols}-column rows",
                data.len()
            )));
        }
        if let Some(pos) = data.iter().position(|v| !v.is_finite()) {
            return Err(Error::non_finite(
                pos / n_cols,
                &format!("value in column {}", pos % n_cols),
            ));
        }

        Ok(Self {
            n_rows: data.len() / n_cols,
            n_cols,
            data,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Borrow row `i`
    ///
    /// # Panics
    /// Panics if `i >= n_rows`.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.n_cols;
        &self.data[start..start + self.n_cols]
    }

    /// Value at `(row, col)`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n_cols + col]
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.n_cols)
    }

    /// Iterate over one column
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().skip(col).step_by(self.n_cols).copied()
    }

    /// Whether at least one column takes more than one distinct value
    pub fn has_variation(&self) -> bool {
        (0..self.n_cols).any(|col| {
            let mut values = self.column(col);
            match values.next() {
                Some(first) => values.any(|v| v != first),
                None => false,
            }
        })
    }

    /// Raw row-major buffer
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let m = FeatureMatrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.n_rows(), 2);
        assert_eq!(m.n_cols(), 3);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.column(1).collect::<Vec<_>>(), vec![2.0, 5.0]);
        assert_eq!(m.rows().count(), 2);
    }

    #[test]
    fn test_rejects_bad_shapes() {
        let empty: Vec<Vec<f64>> = vec![vec![]];
        assert!(matches!(FeatureMatrix::from_rows(&empty), Err(Error::InvalidInput(_))));

        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(FeatureMatrix::from_rows(&ragged), Err(Error::InvalidInput(_))));

        assert!(FeatureMatrix::from_row_major(vec![1.0, 2.0, 3.0], 2).is_err());
        assert!(FeatureMatrix::from_row_major(vec![1.0], 0).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = FeatureMatrix::from_rows(&[[1.0, 2.0], [f64::NAN, 0.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("row 1"));

        assert!(FeatureMatrix::from_rows(&[[f64::INFINITY]]).is_err());
    }

    #[test]
    fn test_has_variation() {
        let flat = FeatureMatrix::from_rows(&[[1.0, 2.0], [1.0, 2.0]]).unwrap();
        assert!(!flat.has_variation());

        let varied = FeatureMatrix::from_rows(&[[1.0, 2.0], [1.0, 3.0]]).unwrap();
        assert!(varied.has_variation());
    }
}
