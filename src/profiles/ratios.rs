//! Ratio engine: performance ratios and data-profile convergence indices.
//!
//! Both profile types reduce to a `problems × solvers` matrix of finite
//! costs where `+∞` marks a failure. The curve builder only ever sees
//! that matrix.
//!
//! # References
//!
//! - Dolan, E. D., & Moré, J. J. (2002). "Benchmarking optimization software
//!   with performance profiles." Mathematical Programming, 91, 201-213.
//! - Moré, J. J., & Wild, S. M. (2009). "Benchmarking derivative-free
//!   optimization algorithms." SIAM Journal on Optimization, 20(1), 172-191.

use crate::data::{is_failure, BenchmarkMatrix, BenchmarkTensor};
use crate::error::{Error, Result};
use tracing::{debug, warn};

/// Default convergence threshold for data profiles.
pub const DEFAULT_TAU: f64 = 1.0e-3;

/// Per-problem, per-solver costs after failure normalization.
///
/// Failures are stored as `+∞`; every other entry is finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioMatrix {
    problems: usize,
    solvers: usize,
    values: Vec<f64>,
}

impl RatioMatrix {
    fn filled(problems: usize, solvers: usize) -> Self {
        Self {
            problems,
            solvers,
            values: vec![f64::INFINITY; problems * solvers],
        }
    }

    fn set(&mut self, p: usize, s: usize, value: f64) {
        self.values[p * self.solvers + s] = value;
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

    /// Entry for problem `p` and solver `s` (`+∞` on failure).
    #[must_use]
    pub fn get(&self, p: usize, s: usize) -> f64 {
        self.values[p * self.solvers + s]
    }

    /// All entries of problem `p`.
    #[must_use]
    pub fn row(&self, p: usize) -> &[f64] {
        &self.values[p * self.solvers..(p + 1) * self.solvers]
    }

    /// Entries of solver `s` across all problems.
    pub fn column(&self, s: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().skip(s).step_by(self.solvers).copied()
    }

    /// Finite entries of solver `s`, in problem order.
    #[must_use]
    pub fn finite_column(&self, s: usize) -> Vec<f64> {
        self.column(s).filter(|v| v.is_finite()).collect()
    }

    /// Largest finite entry, or `None` when every entry is a failure.
    #[must_use]
    pub fn max_finite(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .reduce(f64::max)
    }

    /// Number of problems solver `s` succeeded on.
    #[must_use]
    pub fn successes(&self, s: usize) -> usize {
        self.column(s).filter(|v| v.is_finite()).count()
    }
}

/// Compute performance ratios `T[p,s] / min_s' T[p,s']`.
///
/// Failures become `+∞`; a problem no solver succeeds on yields a row of
/// `+∞`. When any successful cost is exactly zero every successful cost is
/// shifted by one before dividing, so the best solver of a solved problem
/// always has ratio `1`.
///
/// # Errors
///
/// Infallible for a well-formed [`BenchmarkMatrix`]; the `Result` keeps the
/// signature aligned with [`data_ratios`].
pub fn performance_ratios(t: &BenchmarkMatrix) -> Result<RatioMatrix> {
    let (np, ns) = (t.problems(), t.solvers());

    let shift = if t.as_slice().iter().any(|&v| v == 0.0) {
        warn!("using shift of 1 because of zero entries in the benchmark matrix");
        1.0
    } else {
        0.0
    };

    let mut ratios = RatioMatrix::filled(np, ns);
    for p in 0..np {
        let row = t.row(p);
        let best = row
            .iter()
            .copied()
            .filter(|&v| !is_failure(v))
            .map(|v| v + shift)
            .reduce(f64::min);

        let Some(best) = best else {
            debug!(problem = p, "no solver succeeded; ratio row left at +inf");
            continue;
        };

        for (s, &v) in row.iter().enumerate() {
            if !is_failure(v) {
                ratios.set(p, s, (v + shift) / best);
            }
        }
    }

    Ok(ratios)
}

/// Compute scaled convergence indices for a data profile.
///
/// For problem `p`, `fL` is the best valid measure recorded by any solver
/// and `f0` the initial measure. Solver `s` converges at the first
/// operation `k` with `H[k,p,s] ≤ fL + τ (f0 − fL)`; the stored value is
/// `k / N[p]`, or `+∞` when it never converges.
///
/// # Errors
///
/// Returns an error when `N` does not have one finite, positive entry per
/// problem or when `τ` is negative or not finite.
pub fn data_ratios(h: &BenchmarkTensor, n: &[f64], tau: f64) -> Result<RatioMatrix> {
    let (nk, np, ns) = (h.operations(), h.problems(), h.solvers());

    if n.len() != np {
        return Err(Error::ScaleLengthMismatch {
            scales: n.len(),
            problems: np,
        });
    }
    if let Some((problem, &value)) = n
        .iter()
        .enumerate()
        .find(|(_, &v)| !v.is_finite() || v <= 0.0)
    {
        return Err(Error::InvalidScale { problem, value });
    }
    if !tau.is_finite() || tau < 0.0 {
        return Err(Error::InvalidTolerance {
            name: "tau",
            value: tau,
        });
    }

    let mut indices = RatioMatrix::filled(np, ns);
    for p in 0..np {
        let valid = |k: usize, s: usize| Some(h.get(k, p, s)).filter(|&v| !is_failure(v));

        let f_low = (0..nk)
            .flat_map(|k| (0..ns).filter_map(move |s| valid(k, s)))
            .reduce(f64::min);
        let f_start = (0..ns).find_map(|s| valid(0, s));

        let (Some(f_low), Some(f_start)) = (f_low, f_start) else {
            debug!(problem = p, "no valid measures; convergence row left at +inf");
            continue;
        };

        if f_start <= f_low {
            debug!(problem = p, "initial measure is already the best; converged at 0");
            for s in 0..ns {
                if (0..nk).any(|k| valid(k, s).is_some()) {
                    indices.set(p, s, 0.0);
                }
            }
            continue;
        }

        let cutoff = f_low + tau * (f_start - f_low);
        for s in 0..ns {
            if let Some(k) = (0..nk).find(|&k| valid(k, s).is_some_and(|v| v <= cutoff)) {
                indices.set(p, s, k as f64 / n[p]);
            }
        }
    }

    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[Vec<f64>]) -> BenchmarkMatrix {
        BenchmarkMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_ratios_two_by_two() {
        let r = performance_ratios(&matrix(&[vec![1.0, 2.0], vec![2.0, 1.0]])).unwrap();
        assert_eq!(r.row(0), &[1.0, 2.0]);
        assert_eq!(r.row(1), &[2.0, 1.0]);
    }

    #[test]
    fn test_ratios_failure_is_infinite() {
        let r = performance_ratios(&matrix(&[vec![-1.0, 3.0], vec![4.0, 5.0]])).unwrap();
        assert!(r.get(0, 0).is_infinite());
        assert_eq!(r.get(0, 1), 1.0);
        assert_eq!(r.get(1, 0), 1.0);
        assert_eq!(r.get(1, 1), 1.25);
    }

    #[test]
    fn test_ratios_all_failure_row() {
        let r = performance_ratios(&matrix(&[
            vec![f64::NAN, f64::INFINITY, -2.0],
            vec![1.0, 2.0, 4.0],
        ]))
        .unwrap();
        assert!(r.row(0).iter().all(|v| v.is_infinite()));
        assert_eq!(r.row(1), &[1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_ratios_zero_shift() {
        let r = performance_ratios(&matrix(&[vec![0.0, 1.0], vec![3.0, 1.0]])).unwrap();
        // shifted to [[1, 2], [4, 2]]
        assert_eq!(r.row(0), &[1.0, 2.0]);
        assert_eq!(r.row(1), &[2.0, 1.0]);
    }

    #[test]
    fn test_zero_shift_does_not_revive_failures() {
        let r = performance_ratios(&matrix(&[vec![0.0, -0.5]])).unwrap();
        assert_eq!(r.get(0, 0), 1.0);
        assert!(r.get(0, 1).is_infinite());
    }

    #[test]
    fn test_ratio_matrix_helpers() {
        let r = performance_ratios(&matrix(&[vec![1.0, f64::NAN], vec![2.0, 1.0]])).unwrap();
        assert_eq!(r.successes(0), 2);
        assert_eq!(r.successes(1), 1);
        assert_eq!(r.finite_column(1), vec![1.0]);
        assert_eq!(r.max_finite(), Some(2.0));
    }

    #[test]
    fn test_data_ratios_basic() {
        // one problem, two solvers, f0 = 10, fL = 0
        let h = BenchmarkTensor::from_series(&[vec![
            vec![10.0, 5.0, 0.0, 0.0],
            vec![10.0, 9.0, 8.0, 7.0],
        ]])
        .unwrap();

        let d = data_ratios(&h, &[2.0], 0.1).unwrap();
        // cutoff = 1.0: solver 0 at k = 2, solver 1 never
        assert_eq!(d.get(0, 0), 1.0);
        assert!(d.get(0, 1).is_infinite());
    }

    #[test]
    fn test_data_ratios_degenerate_start() {
        let h = BenchmarkTensor::from_series(&[
            vec![vec![3.0, 3.0], vec![3.0, 4.0]],
            vec![vec![1.0, 1.0], vec![1.0, f64::NAN]],
        ])
        .unwrap();

        let d = data_ratios(&h, &[1.0, 1.0], DEFAULT_TAU).unwrap();
        for p in 0..2 {
            for s in 0..2 {
                assert_eq!(d.get(p, s), 0.0);
            }
        }
    }

    #[test]
    fn test_data_ratios_failures_skipped() {
        let h = BenchmarkTensor::from_series(&[vec![
            vec![8.0, f64::NAN, -1.0, 2.0],
            vec![8.0, 4.0, 2.0, 2.0],
        ]])
        .unwrap();

        let d = data_ratios(&h, &[1.0], 0.0).unwrap();
        assert_eq!(d.get(0, 0), 3.0);
        assert_eq!(d.get(0, 1), 2.0);
    }

    #[test]
    fn test_data_ratios_initial_failure_uses_next_solver() {
        let h = BenchmarkTensor::from_series(&[vec![vec![f64::NAN, 1.0], vec![5.0, 3.0]]]).unwrap();

        // f0 = 5, fL = 1, tau = 0.5 -> cutoff 3
        let d = data_ratios(&h, &[1.0], 0.5).unwrap();
        assert_eq!(d.get(0, 0), 1.0);
        assert_eq!(d.get(0, 1), 1.0);
    }

    #[test]
    fn test_data_ratios_all_failures() {
        let h = BenchmarkTensor::from_series(&[vec![vec![f64::NAN, -1.0], vec![f64::INFINITY; 2]]])
            .unwrap();
        let d = data_ratios(&h, &[1.0], DEFAULT_TAU).unwrap();
        assert!(d.row(0).iter().all(|v| v.is_infinite()));
    }

    #[test]
    fn test_data_ratios_rejects_bad_scales() {
        let h = BenchmarkTensor::from_series(&[vec![vec![2.0, 1.0]]]).unwrap();
        assert!(matches!(
            data_ratios(&h, &[1.0, 2.0], DEFAULT_TAU),
            Err(Error::ScaleLengthMismatch { .. })
        ));
        assert!(matches!(
            data_ratios(&h, &[-3.0], DEFAULT_TAU),
            Err(Error::InvalidScale { problem: 0, .. })
        ));
        assert!(matches!(
            data_ratios(&h, &[0.0], DEFAULT_TAU),
            Err(Error::InvalidScale { .. })
        ));
        assert!(matches!(
            data_ratios(&h, &[1.0], f64::NAN),
            Err(Error::InvalidTolerance { name: "tau", .. })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn cost() -> impl Strategy<Value = f64> {
        prop_oneof![
            8 => 0.0f64..1000.0,
            1 => Just(-1.0),
            1 => Just(f64::NAN),
            1 => Just(f64::INFINITY),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_best_ratio_is_one(
            (np, ns, values) in (1usize..12, 1usize..6)
                .prop_flat_map(|(np, ns)| (Just(np), Just(ns), prop::collection::vec(cost(), np * ns)))
        ) {
            let t = BenchmarkMatrix::new(np, ns, values).unwrap();
            let r = performance_ratios(&t).unwrap();
            for p in 0..np {
                let solved = t.row(p).iter().any(|&v| !is_failure(v));
                let min = r.row(p).iter().copied().fold(f64::INFINITY, f64::min);
                if solved {
                    prop_assert_eq!(min, 1.0);
                } else {
                    prop_assert!(min.is_infinite());
                }
                prop_assert!(r.row(p).iter().all(|&v| v >= 1.0));
            }
        }

        #[test]
        fn prop_zero_shift_matches_positive_matrix(
            values in prop::collection::vec(0.0f64..100.0, 6)
        ) {
            let mut with_zero = values.clone();
            with_zero[0] = 0.0;
            let shifted: Vec<f64> = with_zero.iter().map(|v| v + 1.0).collect();

            let a = performance_ratios(&BenchmarkMatrix::new(3, 2, with_zero).unwrap()).unwrap();
            let b = performance_ratios(&BenchmarkMatrix::new(3, 2, shifted).unwrap()).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_degenerate_problems_converge_at_zero(
            start in 0.0f64..50.0,
            tail in prop::collection::vec(0.0f64..50.0, 4),
            tau in 0.0f64..1.0
        ) {
            // every solver starts at the best value ever recorded
            let history_a: Vec<f64> = std::iter::once(start).chain(tail.iter().map(|v| v + start)).collect();
            let history_b: Vec<f64> = std::iter::once(start).chain(tail.iter().map(|v| v * 2.0 + start)).collect();
            let h = BenchmarkTensor::from_series(&[vec![history_a, history_b]]).unwrap();
            let d = data_ratios(&h, &[3.0], tau).unwrap();
            prop_assert_eq!(d.row(0), &[0.0, 0.0]);
        }
    }
}
