//! # Benchmark-Profiles
//!
//! Performance and data profiles for comparing optimization solvers on a
//! benchmark set.
//!
//! A *performance profile* shows, for each solver, the fraction of
//! problems it solves within a factor `τ` of the best solver on that
//! problem. A *data profile* shows the fraction of problems a solver
//! drives within a tolerance of the best known value using a given budget
//! of scaled operations.
//!
//! The numeric engine ([`profiles`]) turns raw benchmark data into ratio
//! matrices and step curves; rendering goes through a pluggable
//! [`backend`] registry and CSV output through [`export`].
//!
//! ## Quick Start
//!
//! ```rust
//! use benchmark_profiles::prelude::*;
//!
//! // 3 problems, 2 solvers; negative entries are failures
//! let t = BenchmarkMatrix::from_rows(&[
//!     vec![1.0, 2.0],
//!     vec![4.0, 2.0],
//!     vec![3.0, -1.0],
//! ])?;
//!
//! let data = performance_profile_data(&t, &ProfileOptions::new())?;
//! assert_eq!(data.curve(1).map(ProfileCurve::final_fraction), Some(2.0 / 3.0));
//! # Ok::<(), benchmark_profiles::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `svg`: SVG document backend (default)
//! - `terminal`: Text chart backend
//! - `parallel`: Build per-solver curves with rayon
//! - `serde`: Serialize/deserialize [`ProfileOptions`](profiles::ProfileOptions)
//! - `config`: Load options from YAML files
//! - `full`: All features enabled
//!
//! ## Academic References
//!
//! - Dolan, E. D., & Moré, J. J. (2002). "Benchmarking optimization software
//!   with performance profiles." *Mathematical Programming*, 91(2), 201-213.
//! - Moré, J. J., & Wild, S. M. (2009). "Benchmarking derivative-free
//!   optimization algorithms." *SIAM J. Optimization*, 20(1), 172-191.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Benchmark matrices and histories.
pub mod data;

/// Ratio engine and profile curve construction.
pub mod profiles;

/// Power-of-two tick labels.
pub mod ticks;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rendering backends and the backend registry.
pub mod backend;

/// Colors for solver curves.
pub mod color;

/// Scale functions for data-to-canvas mappings.
pub mod scale;

mod plot;

pub use plot::{data_profile, performance_profile};

// ============================================================================
// Output Modules
// ============================================================================

/// CSV export of profile coordinates.
pub mod export;

/// YAML configuration files.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for benchmark-profiles operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use benchmark_profiles::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backend::{register_backend, Backend, PlotHandle, ProfileBackend};
    pub use crate::data::{BenchmarkMatrix, BenchmarkTensor};
    pub use crate::error::{Error, Result};
    pub use crate::export::{export_data_profile, export_performance_profile, CsvOptions};
    pub use crate::profiles::{
        data_profile_data, data_ratios, performance_profile_data, performance_ratios, LineStyle,
        ProfileCurve, ProfileData, ProfileOptions,
    };
    pub use crate::ticks::powertick;
    pub use crate::{data_profile, performance_profile};
    pub use batuta_common::display::WithDimensions;
}
