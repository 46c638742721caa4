//! Rendering backends and the process-wide backend registry.
//!
//! The profile engine only produces [`ProfileData`]; turning it into a plot
//! is the job of a [`ProfileBackend`]. Backends are identified by the fixed
//! [`Backend`] enumeration and looked up in a registry that is populated
//! with the compiled-in implementations on first use. Further
//! implementations can be added with [`register_backend`]; requesting a
//! backend with no implementation fails with [`Error::BackendNotLoaded`].

#[cfg(feature = "svg")]
#[cfg_attr(docsrs, doc(cfg(feature = "svg")))]
pub mod svg;

#[cfg(feature = "terminal")]
#[cfg_attr(docsrs, doc(cfg(feature = "terminal")))]
pub mod terminal;

use crate::error::{Error, Result};
use crate::profiles::{ProfileData, ProfileOptions};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::debug;

/// Supported plotting backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Vector SVG documents (feature `svg`).
    Svg,
    /// Text charts for terminals (feature `terminal`).
    Terminal,
}

impl Backend {
    /// Every backend identifier, in declaration order.
    pub const ALL: [Self; 2] = [Self::Svg, Self::Terminal];

    /// Display name of the backend.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Svg => "SvgBackend",
            Self::Terminal => "TerminalBackend",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which kind of profile a [`ProfilePlot`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    /// Performance profile (ratios, possibly `log2`).
    Performance,
    /// Data profile (scaled operation counts).
    Data,
}

/// Everything a backend needs to draw one profile.
#[derive(Debug, Clone, Copy)]
pub struct ProfilePlot<'a> {
    /// Profile kind.
    pub kind: ProfileKind,
    /// Per-solver curves and axis extent.
    pub data: &'a ProfileData,
    /// Horizontal axis label.
    pub xlabel: &'a str,
    /// Vertical axis label.
    pub ylabel: &'a str,
    /// One label per solver.
    pub labels: &'a [String],
    /// Plot title (may be empty).
    pub title: &'a str,
    /// Options, including line styles and backend extras.
    pub options: &'a ProfileOptions,
}

impl ProfilePlot<'_> {
    /// Backend-specific setting from the options' extras.
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.options.extras.get(key).map(String::as_str)
    }
}

/// Rendered plot returned by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotHandle {
    backend: Backend,
    document: String,
}

impl PlotHandle {
    /// Wrap a rendered document.
    #[must_use]
    pub fn new(backend: Backend, document: String) -> Self {
        Self { backend, document }
    }

    /// Backend that produced the plot.
    #[must_use]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Rendered document (SVG markup, terminal text, ...).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.document
    }

    /// Take ownership of the rendered document.
    #[must_use]
    pub fn into_string(self) -> String {
        self.document
    }

    /// Write the rendered document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.document.as_bytes())?;
        Ok(())
    }
}

/// A rendering implementation for one [`Backend`].
pub trait ProfileBackend: Send + Sync {
    /// Render a profile plot.
    fn render(&self, plot: &ProfilePlot<'_>) -> Result<PlotHandle>;
}

type Registry = RwLock<HashMap<Backend, Arc<dyn ProfileBackend>>>;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        #[allow(unused_mut)]
        let mut backends: HashMap<Backend, Arc<dyn ProfileBackend>> = HashMap::new();
        #[cfg(feature = "svg")]
        backends.insert(Backend::Svg, Arc::new(svg::SvgBackend::new()));
        #[cfg(feature = "terminal")]
        backends.insert(Backend::Terminal, Arc::new(terminal::TerminalBackend::new()));
        debug!(count = backends.len(), "initialized backend registry");
        RwLock::new(backends)
    })
}

/// Register an implementation for `backend`.
///
/// Returns `false` and leaves the registry unchanged when the backend
/// already has an implementation.
pub fn register_backend(backend: Backend, implementation: Arc<dyn ProfileBackend>) -> bool {
    let mut backends = registry().write().unwrap_or_else(PoisonError::into_inner);
    if backends.contains_key(&backend) {
        debug!(%backend, "backend already registered");
        return false;
    }
    backends.insert(backend, implementation);
    debug!(%backend, "registered backend");
    true
}

/// Returns `true` if `backend` has a rendering implementation.
pub fn is_loaded(backend: Backend) -> bool {
    registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .contains_key(&backend)
}

/// Backends with a rendering implementation, in declaration order.
pub fn loaded_backends() -> Vec<Backend> {
    Backend::ALL.into_iter().filter(|&b| is_loaded(b)).collect()
}

/// Fetch the implementation of `backend`.
///
/// # Errors
///
/// Returns [`Error::BackendNotLoaded`] when nothing is registered for it.
pub fn lookup(backend: Backend) -> Result<Arc<dyn ProfileBackend>> {
    registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&backend)
        .cloned()
        .ok_or(Error::BackendNotLoaded(backend))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_names() {
        assert_eq!(Backend::Svg.to_string(), "SvgBackend");
        assert_eq!(Backend::Terminal.name(), "TerminalBackend");
    }

    #[test]
    fn test_plot_handle_accessors() {
        let handle = PlotHandle::new(Backend::Svg, "<svg/>".to_string());
        assert_eq!(handle.backend(), Backend::Svg);
        assert_eq!(handle.as_str(), "<svg/>");
        assert_eq!(handle.into_string(), "<svg/>");
    }

    #[test]
    fn test_plot_handle_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        PlotHandle::new(Backend::Svg, "<svg/>".to_string())
            .write_to_file(&path)
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
    }

    #[cfg(feature = "svg")]
    #[test]
    fn test_svg_is_loaded_by_default() {
        assert!(is_loaded(Backend::Svg));
        assert!(loaded_backends().contains(&Backend::Svg));
        assert!(lookup(Backend::Svg).is_ok());
    }

    #[cfg(feature = "svg")]
    #[test]
    fn test_double_registration_rejected() {
        struct Noop;
        impl ProfileBackend for Noop {
            fn render(&self, _plot: &ProfilePlot<'_>) -> Result<PlotHandle> {
                Ok(PlotHandle::new(Backend::Svg, String::new()))
            }
        }
        assert!(!register_backend(Backend::Svg, Arc::new(Noop)));
    }
}
