//! Performance profile coordinates.

use super::curve::{CurveBuilder, ProfileCurve, ProfileData};
use super::options::ProfileOptions;
use super::ratios::{performance_ratios, RatioMatrix};
use crate::data::BenchmarkMatrix;
use crate::error::Result;
use tracing::debug;

/// Compute per-solver performance profile curves.
///
/// Uses `logscale`, `sampletol` and `drawtol` from `options`. With
/// `logscale` the x values are `log2` ratios starting at `0`, otherwise
/// plain ratios starting at `1`. `max_value` of the result is the largest
/// finite (transformed) ratio over all solvers; a solver that never
/// succeeds gets the constant-zero curve up to it.
///
/// # Errors
///
/// Returns an error for invalid tolerances.
pub fn performance_profile_data(t: &BenchmarkMatrix, options: &ProfileOptions) -> Result<ProfileData> {
    let ratios = performance_ratios(t)?;
    let transform = |r: f64| if options.logscale { r.log2() } else { r };

    let origin = transform(1.0);
    let max_value = ratios.max_finite().map_or(origin, transform);
    debug!(
        problems = ratios.problems(),
        solvers = ratios.solvers(),
        max_value,
        "performance profile extent"
    );

    let builder = CurveBuilder::new(origin, max_value, ratios.problems())?
        .drawtol(options.drawtol)?
        .sampletol(options.sampletol)?;

    let curves = build_curves(&ratios, |s| {
        let values: Vec<f64> = ratios.finite_column(s).into_iter().map(transform).collect();
        builder.build(&values)
    });

    Ok(ProfileData::new(
        curves,
        origin,
        max_value,
        ratios.problems(),
        options.logscale,
    ))
}

/// Build one curve per solver column.
///
/// Columns are independent, so with the `parallel` feature they are
/// built concurrently and gathered in column order.
pub(crate) fn build_curves<F>(matrix: &RatioMatrix, build: F) -> Vec<ProfileCurve>
where
    F: Fn(usize) -> ProfileCurve + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..matrix.solvers()).into_par_iter().map(build).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..matrix.solvers()).map(build).collect()
    }
}
