//! Data profile coordinates.

use super::curve::{CurveBuilder, ProfileData};
use super::options::ProfileOptions;
use super::performance::build_curves;
use super::ratios::data_ratios;
use crate::data::BenchmarkTensor;
use crate::error::Result;
use tracing::debug;

/// Compute per-solver data profile curves.
///
/// Each problem's convergence index (see [`data_ratios`]) plays the role of
/// the cost; curves start at `0` and end at the largest finite scaled
/// index (`max_value`). Uses `tau`, `sampletol` and `drawtol` from
/// `options`; `logscale` does not apply.
///
/// # Errors
///
/// Returns an error for a malformed scale vector or invalid tolerances.
pub fn data_profile_data(
    h: &BenchmarkTensor,
    n: &[f64],
    options: &ProfileOptions,
) -> Result<ProfileData> {
    let indices = data_ratios(h, n, options.tau)?;
    let max_value = indices.max_finite().unwrap_or(0.0);
    debug!(
        problems = indices.problems(),
        solvers = indices.solvers(),
        max_value,
        "data profile extent"
    );

    let builder = CurveBuilder::new(0.0, max_value, indices.problems())?
        .drawtol(options.drawtol)?
        .sampletol(options.sampletol)?;

    let curves = build_curves(&indices, |s| builder.build(&indices.finite_column(s)));

    Ok(ProfileData::new(
        curves,
        0.0,
        max_value,
        indices.problems(),
        false,
    ))
}
