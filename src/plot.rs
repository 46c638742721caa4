//! One-call plotting of performance and data profiles.

use crate::backend::{lookup, Backend, PlotHandle, ProfileKind, ProfilePlot};
use crate::data::{BenchmarkMatrix, BenchmarkTensor};
use crate::error::Result;
use crate::profiles::{
    data_profile_data, performance_profile_data, resolve_labels, ProfileData, ProfileOptions,
    YLABEL,
};
use tracing::debug;

/// Compute and render the performance profile of `t` (problems × solvers).
///
/// An empty `labels` slice yields `column 1`, `column 2`, ...
///
/// # Errors
///
/// Returns [`Error::BackendNotLoaded`](crate::Error::BackendNotLoaded)
/// before any computation when `backend` has no implementation, and
/// otherwise any label, tolerance or rendering error.
pub fn performance_profile<S: AsRef<str>>(
    backend: Backend,
    t: &BenchmarkMatrix,
    labels: &[S],
    options: &ProfileOptions,
) -> Result<PlotHandle> {
    let renderer = lookup(backend)?;
    let labels = resolve_labels(labels, t.solvers())?;
    let data = performance_profile_data(t, options)?;
    let xlabel = options.performance_xlabel();
    debug!(%backend, solvers = labels.len(), "rendering performance profile");
    renderer.render(&plot(ProfileKind::Performance, &data, &xlabel, &labels, options))
}

/// Compute and render the data profile of `h` with per-problem scales `n`.
///
/// # Errors
///
/// Returns [`Error::BackendNotLoaded`](crate::Error::BackendNotLoaded)
/// before any computation when `backend` has no implementation, and
/// otherwise any shape, scale, label, tolerance or rendering error.
pub fn data_profile<S: AsRef<str>>(
    backend: Backend,
    h: &BenchmarkTensor,
    n: &[f64],
    labels: &[S],
    options: &ProfileOptions,
) -> Result<PlotHandle> {
    let renderer = lookup(backend)?;
    let labels = resolve_labels(labels, h.solvers())?;
    let data = data_profile_data(h, n, options)?;
    let xlabel = options.data_xlabel();
    debug!(%backend, solvers = labels.len(), "rendering data profile");
    renderer.render(&plot(ProfileKind::Data, &data, &xlabel, &labels, options))
}

fn plot<'a>(
    kind: ProfileKind,
    data: &'a ProfileData,
    xlabel: &'a str,
    labels: &'a [String],
    options: &'a ProfileOptions,
) -> ProfilePlot<'a> {
    ProfilePlot {
        kind,
        data,
        xlabel,
        ylabel: YLABEL,
        labels,
        title: &options.title,
        options,
    }
}
