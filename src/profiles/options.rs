//! Named options for profile computation and rendering.

use crate::error::{Error, Result};
use crate::profiles::ratios::DEFAULT_TAU;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Line style hint forwarded to backends that support it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LineStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// Long dashes.
    Dash,
    /// Dots.
    Dot,
    /// Alternating dash and dot.
    DashDot,
}

impl LineStyle {
    /// SVG `stroke-dasharray` value, `None` for solid lines.
    #[must_use]
    pub fn dash_array(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dash => Some("8,4"),
            Self::Dot => Some("2,3"),
            Self::DashDot => Some("8,3,2,3"),
        }
    }
}

/// Options shared by performance and data profiles.
///
/// Unknown backend-specific settings go into `extras` and are forwarded
/// untouched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProfileOptions {
    /// Convergence threshold of data profiles.
    pub tau: f64,
    /// Plot title.
    pub title: String,
    /// Plot performance ratios on a `log2` axis.
    pub logscale: bool,
    /// Minimum rise in `y` for a vertex to be kept.
    pub sampletol: f64,
    /// Maximum x distance treated as a draw.
    pub drawtol: f64,
    /// Per-solver line styles, cycled when shorter than the solver count.
    pub linestyles: Vec<LineStyle>,
    /// Name of the counted operation in data-profile x labels.
    pub operations: String,
    /// Backend-specific settings forwarded verbatim.
    pub extras: BTreeMap<String, String>,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            tau: DEFAULT_TAU,
            title: String::new(),
            logscale: true,
            sampletol: 0.0,
            drawtol: 0.0,
            linestyles: Vec::new(),
            operations: "function evaluations".to_string(),
            extras: BTreeMap::new(),
        }
    }
}

impl ProfileOptions {
    /// Create options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data-profile convergence threshold.
    #[must_use]
    pub fn tau(mut self, tau: f64) -> Self {
        self.tau = tau;
        self
    }

    /// Set the plot title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enable or disable the `log2` ratio axis.
    #[must_use]
    pub fn logscale(mut self, logscale: bool) -> Self {
        self.logscale = logscale;
        self
    }

    /// Set the downsampling tolerance.
    #[must_use]
    pub fn sampletol(mut self, sampletol: f64) -> Self {
        self.sampletol = sampletol;
        self
    }

    /// Set the draw tolerance.
    #[must_use]
    pub fn drawtol(mut self, drawtol: f64) -> Self {
        self.drawtol = drawtol;
        self
    }

    /// Set per-solver line styles.
    #[must_use]
    pub fn linestyles(mut self, styles: impl Into<Vec<LineStyle>>) -> Self {
        self.linestyles = styles.into();
        self
    }

    /// Set the counted operation used in data-profile x labels.
    #[must_use]
    pub fn operations(mut self, operations: impl Into<String>) -> Self {
        self.operations = operations.into();
        self
    }

    /// Add a backend-specific setting.
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Line style of solver `s`.
    #[must_use]
    pub fn linestyle(&self, s: usize) -> LineStyle {
        if self.linestyles.is_empty() {
            LineStyle::Solid
        } else {
            self.linestyles[s % self.linestyles.len()]
        }
    }

    /// Performance-profile x axis label.
    #[must_use]
    pub fn performance_xlabel(&self) -> String {
        if self.logscale {
            "Within this factor of the best (log₂ scale)".to_string()
        } else {
            "Within this factor of the best".to_string()
        }
    }

    /// Data-profile x axis label.
    #[must_use]
    pub fn data_xlabel(&self) -> String {
        format!("Number of {}", self.operations)
    }
}

/// Y axis label shared by both profile types.
pub const YLABEL: &str = "Proportion of problems";

/// Validate solver labels, generating `column i` names when none are given.
///
/// # Errors
///
/// Returns [`Error::LabelCountMismatch`] when a non-empty label list does
/// not have one entry per solver.
pub fn resolve_labels<S: AsRef<str>>(labels: &[S], solvers: usize) -> Result<Vec<String>> {
    if labels.is_empty() {
        return Ok((1..=solvers).map(|i| format!("column {i}")).collect());
    }
    if labels.len() != solvers {
        return Err(Error::LabelCountMismatch {
            labels: labels.len(),
            solvers,
        });
    }
    Ok(labels.iter().map(|l| l.as_ref().to_string()).collect())
}
