//! Step-function curves for performance and data profiles.
//!
//! A profile curve is the empirical CDF of one solver's finite costs,
//! normalized by the total problem count. Curves are right-continuous: the
//! value at a vertex holds until the next vertex, where it jumps.

use crate::error::{Error, Result};
use tracing::trace;

/// Right-continuous step curve for one solver.
///
/// `x` and `y` are non-decreasing, `y` lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCurve {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl ProfileCurve {
    /// Vertex abscissas.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Vertex ordinates.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if the curve has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` vertices.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Fraction of problems solved at the right end of the curve.
    #[must_use]
    pub fn final_fraction(&self) -> f64 {
        self.y.last().copied().unwrap_or(0.0)
    }

    /// Evaluate the step function at `x`.
    ///
    /// Left of the first vertex the curve is `0`.
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        let idx = self.x.partition_point(|&vx| vx <= x);
        if idx == 0 {
            0.0
        } else {
            self.y[idx - 1]
        }
    }

    /// Vertices as plotting corners of a post-step polyline.
    ///
    /// Each jump is expanded into a horizontal then vertical segment.
    #[must_use]
    pub fn step_points(&self) -> Vec<(f64, f64)> {
        let mut out = Vec::with_capacity(self.len() * 2);
        for (i, (x, y)) in self.points().enumerate() {
            if i > 0 {
                out.push((x, self.y[i - 1]));
            }
            out.push((x, y));
        }
        out
    }
}

/// Per-solver curves plus the shared axis extent.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileData {
    curves: Vec<ProfileCurve>,
    origin: f64,
    max_value: f64,
    problems: usize,
    log2: bool,
}

impl ProfileData {
    pub(crate) fn new(
        curves: Vec<ProfileCurve>,
        origin: f64,
        max_value: f64,
        problems: usize,
        log2: bool,
    ) -> Self {
        Self {
            curves,
            origin,
            max_value,
            problems,
            log2,
        }
    }

    /// One curve per solver, in column order.
    #[must_use]
    pub fn curves(&self) -> &[ProfileCurve] {
        &self.curves
    }

    /// Curve of solver `s`.
    #[must_use]
    pub fn curve(&self, s: usize) -> Option<&ProfileCurve> {
        self.curves.get(s)
    }

    /// Per-solver x sequences.
    pub fn x_sequences(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.curves.iter().map(ProfileCurve::x)
    }

    /// Per-solver y sequences.
    pub fn y_sequences(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.curves.iter().map(ProfileCurve::y)
    }

    /// Left end of the x axis (`1` for linear ratios, `0` otherwise).
    #[must_use]
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Largest finite x value over all solvers (max ratio or max data).
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Number of problems the fractions are taken over.
    #[must_use]
    pub fn problems(&self) -> usize {
        self.problems
    }

    /// Number of solvers.
    #[must_use]
    pub fn solvers(&self) -> usize {
        self.curves.len()
    }

    /// Returns `true` when x values are `log2` ratios.
    #[must_use]
    pub fn is_log2(&self) -> bool {
        self.log2
    }
}

/// Builds [`ProfileCurve`]s from finite per-solver costs.
#[derive(Debug, Clone, Copy)]
pub struct CurveBuilder {
    origin: f64,
    end: f64,
    total: usize,
    drawtol: f64,
    sampletol: f64,
}

impl CurveBuilder {
    /// Create a builder for curves on `[origin, end]` over `total` problems.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] when `total` is zero and
    /// [`Error::ScaleDomain`] when `end < origin` or either is not finite.
    pub fn new(origin: f64, end: f64, total: usize) -> Result<Self> {
        if total == 0 {
            return Err(Error::EmptyData);
        }
        if !origin.is_finite() || !end.is_finite() || end < origin {
            return Err(Error::ScaleDomain(format!(
                "curve extent [{origin}, {end}] is not a finite interval"
            )));
        }
        Ok(Self {
            origin,
            end,
            total,
            drawtol: 0.0,
            sampletol: 0.0,
        })
    }

    /// Merge breakpoints closer than `drawtol` into one vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] for negative or non-finite values.
    pub fn drawtol(mut self, drawtol: f64) -> Result<Self> {
        self.drawtol = check_tolerance("drawtol", drawtol)?;
        Ok(self)
    }

    /// Drop vertices that rise by no more than `sampletol` over the last kept one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] for negative or non-finite values.
    pub fn sampletol(mut self, sampletol: f64) -> Result<Self> {
        self.sampletol = check_tolerance("sampletol", sampletol)?;
        Ok(self)
    }

    /// Build the curve for one solver.
    ///
    /// `values` are the solver's finite costs; failures must already be
    /// removed. Values left of the origin count as solved at the origin.
    #[must_use]
    pub fn build(&self, values: &[f64]) -> ProfileCurve {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        sorted.sort_by(f64::total_cmp);

        let n = self.total as f64;
        let fraction = |count: usize| count as f64 / n;

        let at_origin = sorted.partition_point(|&v| v <= self.origin);
        let mut x = vec![self.origin];
        let mut y = vec![fraction(at_origin)];

        // Exact breakpoints right of the origin, as (value, cumulative count).
        let mut breaks: Vec<(f64, usize)> = Vec::new();
        for (i, &v) in sorted.iter().enumerate().skip(at_origin) {
            match breaks.last_mut() {
                Some(last) if last.0 == v => last.1 = i + 1,
                _ => breaks.push((v, i + 1)),
            }
        }

        // Draws: a group is plotted once, at its last member.
        let mut merged: Vec<(f64, usize)> = Vec::with_capacity(breaks.len());
        let mut group_start = f64::NAN;
        for &(v, count) in &breaks {
            match merged.last_mut() {
                Some(last) if v - group_start <= self.drawtol => *last = (v, count),
                _ => {
                    group_start = v;
                    merged.push((v, count));
                }
            }
        }

        let final_count = sorted.len();
        let mut kept_y = y[0];
        for &(v, count) in &merged {
            let fy = fraction(count);
            if fy - kept_y > self.sampletol || count == final_count {
                x.push(v);
                y.push(fy);
                kept_y = fy;
            }
        }

        if x.last().is_some_and(|&last| last < self.end) {
            x.push(self.end);
            y.push(fraction(final_count));
        }

        trace!(
            breakpoints = breaks.len(),
            vertices = x.len(),
            "built profile curve"
        );
        ProfileCurve { x, y }
    }
}

fn check_tolerance(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidTolerance { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_cdf() {
        let builder = CurveBuilder::new(1.0, 4.0, 4).unwrap();
        let curve = builder.build(&[1.0, 2.0, 2.0, 4.0]);

        assert_eq!(curve.x(), &[1.0, 2.0, 4.0]);
        assert_eq!(curve.y(), &[0.25, 0.75, 1.0]);
    }

    #[test]
    fn test_extends_to_end() {
        let builder = CurveBuilder::new(1.0, 8.0, 3).unwrap();
        let curve = builder.build(&[1.0, 2.0]);

        assert_eq!(curve.x(), &[1.0, 2.0, 8.0]);
        assert_relative_eq!(curve.final_fraction(), 2.0 / 3.0);
    }

    #[test]
    fn test_never_solved_is_flat_zero() {
        let builder = CurveBuilder::new(0.0, 5.0, 2).unwrap();
        let curve = builder.build(&[]);

        assert_eq!(curve.x(), &[0.0, 5.0]);
        assert_eq!(curve.y(), &[0.0, 0.0]);
    }

    #[test]
    fn test_degenerate_extent_single_vertex() {
        let builder = CurveBuilder::new(1.0, 1.0, 2).unwrap();
        let curve = builder.build(&[1.0, 1.0]);

        assert_eq!(curve.x(), &[1.0]);
        assert_eq!(curve.y(), &[1.0]);
    }

    #[test]
    fn test_drawtol_merges_close_breakpoints() {
        let values = [1.0, 1.05, 1.08, 2.0];
        let exact = CurveBuilder::new(1.0, 2.0, 4).unwrap().build(&values);
        let merged = CurveBuilder::new(1.0, 2.0, 4)
            .unwrap()
            .drawtol(0.1)
            .unwrap()
            .build(&values);

        assert_eq!(exact.len(), 4);
        assert_eq!(merged.x(), &[1.0, 1.08, 2.0]);
        assert_eq!(merged.y(), &[0.25, 0.75, 1.0]);
    }

    #[test]
    fn test_sampletol_keeps_large_jumps_and_final() {
        let values: Vec<f64> = (1..=10).map(f64::from).collect();
        let curve = CurveBuilder::new(0.0, 10.0, 10)
            .unwrap()
            .sampletol(0.25)
            .unwrap()
            .build(&values);

        // kept every third breakpoint plus the final one
        assert_eq!(curve.x(), &[0.0, 3.0, 6.0, 9.0, 10.0]);
        assert_eq!(curve.final_fraction(), 1.0);
    }

    #[test]
    fn test_value_at() {
        let curve = CurveBuilder::new(1.0, 3.0, 2).unwrap().build(&[1.0, 3.0]);

        assert_eq!(curve.value_at(0.5), 0.0);
        assert_eq!(curve.value_at(1.0), 0.5);
        assert_eq!(curve.value_at(2.999), 0.5);
        assert_eq!(curve.value_at(3.0), 1.0);
        assert_eq!(curve.value_at(100.0), 1.0);
    }

    #[test]
    fn test_step_points() {
        let curve = CurveBuilder::new(1.0, 2.0, 2).unwrap().build(&[1.0, 2.0]);
        assert_eq!(curve.step_points(), vec![(1.0, 0.5), (2.0, 0.5), (2.0, 1.0)]);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(matches!(CurveBuilder::new(0.0, 1.0, 0), Err(Error::EmptyData)));
        assert!(matches!(
            CurveBuilder::new(2.0, 1.0, 3),
            Err(Error::ScaleDomain(_))
        ));
        let builder = CurveBuilder::new(0.0, 1.0, 1).unwrap();
        assert!(matches!(
            builder.drawtol(-0.1),
            Err(Error::InvalidTolerance { name: "drawtol", .. })
        ));
        assert!(builder.sampletol(f64::NAN).is_err());
    }
}
