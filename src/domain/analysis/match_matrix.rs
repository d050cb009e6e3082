//! Match Matrix - Dense requirement × criterion matching strengths.

use serde::{Deserialize, Serialize};

use super::ShapeError;

/// Clamps a raw matching strength into [0, 1]. NaN carries no signal and
/// becomes 0.
pub fn clamp_strength(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Row-major n×m matrix of matching strengths.
///
/// Rows are requirements, columns are criteria. The dimensions are carried
/// explicitly so a matrix with zero columns still knows its row count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl MatchMatrix {
    /// Builds a matrix from nested rows, requiring exactly
    /// `expected_rows` rows of `expected_cols` entries each.
    ///
    /// Values are copied as given; call [`MatchMatrix::clamped`] to bring
    /// them into range.
    pub fn from_rows(
        rows: &[Vec<f64>],
        expected_rows: usize,
        expected_cols: usize,
    ) -> Result<Self, ShapeError> {
        if rows.len() != expected_rows {
            return Err(ShapeError::MatrixRows {
                expected: expected_rows,
                actual: rows.len(),
            });
        }

        let mut values = Vec::with_capacity(expected_rows * expected_cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != expected_cols {
                return Err(ShapeError::MatrixColumns {
                    row: index,
                    expected: expected_cols,
                    actual: row.len(),
                });
            }
            values.extend_from_slice(row);
        }

        Ok(Self {
            rows: expected_rows,
            cols: expected_cols,
            values,
        })
    }

    /// Number of columns (criteria).
    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// Returns one row as a slice. Out-of-bounds rows are empty.
    pub fn row(&self, row: usize) -> &[f64] {
        if row >= self.rows {
            return &[];
        }
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }

    /// Returns a copy with every entry clamped into [0, 1].
    pub fn clamped(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            values: self.values.iter().copied().map(clamp_strength).collect(),
        }
    }

    /// Matrix-vector product `S · w`: for each row, the sum of its entries
    /// weighted by the per-column weights.
    ///
    /// `column_weights` is expected to have one entry per column; surplus
    /// entries are ignored.
    pub fn weighted_row_sums(&self, column_weights: &[f64]) -> Vec<f64> {
        (0..self.rows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(column_weights)
                    .map(|(strength, weight)| strength * weight)
                    .sum()
            })
            .collect()
    }

    /// Transpose product `Sᵀ · w`: for each column, the sum of its entries
    /// weighted by the per-row weights.
    pub fn weighted_column_sums(&self, row_weights: &[f64]) -> Vec<f64> {
        let mut sums = vec![0.0; self.cols];
        for (i, weight) in row_weights.iter().enumerate().take(self.rows) {
            for (sum, strength) in sums.iter_mut().zip(self.row(i)) {
                *sum += strength * weight;
            }
        }
        sums
    }
}
