//! Benchmark inputs: cost matrices and measure histories.
//!
//! Both containers store values densely and never reinterpret them; the
//! failure convention ([`is_failure`]) is applied by the ratio engine.

use crate::error::{Error, Result};

/// Returns `true` when a recorded value marks a solver failure.
///
/// Negative values, infinities and NaN are equivalent failure markers.
#[inline]
pub fn is_failure(value: f64) -> bool {
    value.is_nan() || value.is_infinite() || value < 0.0
}

/// Cost of each solver on each problem (`problems × solvers`, smaller is better).
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkMatrix {
    problems: usize,
    solvers: usize,
    values: Vec<f64>,
}

impl BenchmarkMatrix {
    /// Create a matrix from row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for a zero dimension and
    /// [`Error::DimensionMismatch`] when `values` has the wrong length.
    pub fn new(problems: usize, solvers: usize, values: Vec<f64>) -> Result<Self> {
        if problems == 0 || solvers == 0 {
            return Err(Error::EmptyData);
        }
        let expected = problems * solvers;
        if values.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            problems,
            solvers,
            values,
        })
    }

    /// Create a matrix from one row per problem.
    ///
    /// # Errors
    ///
    /// Returns an error for empty input or ragged rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let solvers = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * solvers);
        for row in rows {
            if row.len() != solvers {
                return Err(Error::DimensionMismatch {
                    expected: solvers,
                    actual: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Self::new(rows.len(), solvers, values)
    }

    /// Number of problems (rows).
    #[must_use]
    pub fn problems(&self) -> usize {
        self.problems
    }

    /// Number of solvers (columns).
    #[must_use]
    pub fn solvers(&self) -> usize {
        self.solvers
    }

    /// Value for problem `p` and solver `s`.
    #[must_use]
    pub fn get(&self, p: usize, s: usize) -> f64 {
        self.values[p * self.solvers + s]
    }

    /// All solver values for problem `p`.
    #[must_use]
    pub fn row(&self, p: usize) -> &[f64] {
        &self.values[p * self.solvers..(p + 1) * self.solvers]
    }

    /// Values of solver `s` across all problems.
    pub fn column(&self, s: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().skip(s).step_by(self.solvers).copied()
    }

    /// Row-major backing storage.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Successive measures per problem and solver (`operations × problems × solvers`).
///
/// `get(k, p, s)` is the `k`-th recorded measure (e.g. the best objective
/// value after `k + 1` function evaluations).
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkTensor {
    operations: usize,
    problems: usize,
    solvers: usize,
    values: Vec<f64>,
}

impl BenchmarkTensor {
    /// Create a tensor from values laid out with `s` fastest, then `p`, then `k`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for a zero dimension and
    /// [`Error::DimensionMismatch`] when `values` has the wrong length.
    pub fn new(operations: usize, problems: usize, solvers: usize, values: Vec<f64>) -> Result<Self> {
        if operations == 0 || problems == 0 || solvers == 0 {
            return Err(Error::EmptyData);
        }
        let expected = operations * problems * solvers;
        if values.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            operations,
            problems,
            solvers,
            values,
        })
    }

    /// Create a tensor from per-problem, per-solver histories indexed `[p][s][k]`.
    ///
    /// Every history must have the same length.
    ///
    /// # Errors
    ///
    /// Returns an error for empty input or inconsistent lengths.
    pub fn from_series(series: &[Vec<Vec<f64>>]) -> Result<Self> {
        let problems = series.len();
        let solvers = series.first().map_or(0, Vec::len);
        let operations = series
            .first()
            .and_then(|per_solver| per_solver.first())
            .map_or(0, Vec::len);

        for per_solver in series {
            if per_solver.len() != solvers {
                return Err(Error::DimensionMismatch {
                    expected: solvers,
                    actual: per_solver.len(),
                });
            }
            if let Some(history) = per_solver.iter().find(|h| h.len() != operations) {
                return Err(Error::DimensionMismatch {
                    expected: operations,
                    actual: history.len(),
                });
            }
        }

        let mut values = vec![0.0; operations * problems * solvers];
        for (p, per_solver) in series.iter().enumerate() {
            for (s, history) in per_solver.iter().enumerate() {
                for (k, &v) in history.iter().enumerate() {
                    values[(k * problems + p) * solvers + s] = v;
                }
            }
        }
        Self::new(operations, problems, solvers, values)
    }

    /// Number of recorded operations per history.
    #[must_use]
    pub fn operations(&self) -> usize {
        self.operations
    }

    /// Number of problems.
    #[must_use]
    pub fn problems(&self) -> usize {
        self.problems
    }

    /// Number of solvers.
    #[must_use]
    pub fn solvers(&self) -> usize {
        self.solvers
    }

    /// Measure at operation `k` for problem `p` and solver `s`.
    #[must_use]
    pub fn get(&self, k: usize, p: usize, s: usize) -> f64 {
        self.values[(k * self.problems + p) * self.solvers + s]
    }

    /// History of solver `s` on problem `p`, in operation order.
    pub fn history(&self, p: usize, s: usize) -> impl Iterator<Item = f64> + '_ {
        (0..self.operations).map(move |k| self.get(k, p, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_markers() {
        assert!(is_failure(-1.0));
        assert!(is_failure(f64::INFINITY));
        assert!(is_failure(f64::NEG_INFINITY));
        assert!(is_failure(f64::NAN));
        assert!(!is_failure(0.0));
        assert!(!is_failure(3.5));
    }

    #[test]
    fn test_matrix_from_rows() {
        let t = BenchmarkMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(t.problems(), 2);
        assert_eq!(t.solvers(), 2);
        assert_eq!(t.get(1, 0), 3.0);
        assert_eq!(t.row(0), &[1.0, 2.0]);
        assert_eq!(t.column(1).collect::<Vec<_>>(), vec![2.0, 4.0]);
    }

    #[test]
    fn test_matrix_ragged_rows() {
        let result = BenchmarkMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn test_matrix_empty() {
        assert!(matches!(BenchmarkMatrix::from_rows(&[]), Err(Error::EmptyData)));
        assert!(matches!(
            BenchmarkMatrix::new(0, 3, vec![]),
            Err(Error::EmptyData)
        ));
    }

    #[test]
    fn test_matrix_length_mismatch() {
        let result = BenchmarkMatrix::new(2, 2, vec![1.0; 3]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_tensor_from_series_layout() {
        // 2 problems, 2 solvers, 3 operations
        let h = BenchmarkTensor::from_series(&[
            vec![vec![10.0, 5.0, 1.0], vec![10.0, 8.0, 7.0]],
            vec![vec![4.0, 3.0, 2.0], vec![4.0, 1.0, 0.5]],
        ])
        .unwrap();

        assert_eq!(h.operations(), 3);
        assert_eq!(h.problems(), 2);
        assert_eq!(h.solvers(), 2);
        assert_eq!(h.get(0, 0, 0), 10.0);
        assert_eq!(h.get(2, 0, 1), 7.0);
        assert_eq!(h.get(1, 1, 1), 1.0);
        assert_eq!(h.history(1, 0).collect::<Vec<_>>(), vec![4.0, 3.0, 2.0]);
    }

    #[test]
    fn test_tensor_inconsistent_history() {
        let result = BenchmarkTensor::from_series(&[vec![vec![1.0, 2.0], vec![1.0]]]);
        assert!(result.is_err());
    }
}
