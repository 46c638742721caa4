//! Error types for benchmark-profiles operations.

use crate::backend::Backend;
use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or rendering profiles.
///
/// Numeric edge cases (zero entries, problems nobody solves, problems that
/// start at their best value) are not errors; they are resolved inside the
/// ratio engine. Only malformed shapes and arguments surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// The flat value buffer does not match the declared shape.
    #[error("Dimension mismatch: shape requires {expected} values, got {actual}")]
    DimensionMismatch {
        /// Number of values implied by the shape.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// Number of solver labels differs from the number of solver columns.
    #[error("Label count mismatch: {labels} labels for {solvers} solvers")]
    LabelCountMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Number of solver columns.
        solvers: usize,
    },

    /// Scale vector length differs from the number of problems.
    #[error("Scale length mismatch: {scales} scales for {problems} problems")]
    ScaleLengthMismatch {
        /// Number of scale entries supplied.
        scales: usize,
        /// Number of problems.
        problems: usize,
    },

    /// A per-problem scale is negative, zero or not finite.
    #[error("Invalid scale for problem {problem}: {value} (must be finite and positive)")]
    InvalidScale {
        /// Problem index.
        problem: usize,
        /// Offending value.
        value: f64,
    },

    /// A tolerance or threshold is negative or not finite.
    #[error("Invalid {name}: {value} (must be finite and non-negative)")]
    InvalidTolerance {
        /// Name of the option.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A custom CSV header does not have two columns per solver.
    #[error("Header length mismatch: expected {expected} columns, got {actual}")]
    HeaderLengthMismatch {
        /// Expected column count (2 per solver).
        expected: usize,
        /// Supplied column count.
        actual: usize,
    },

    /// The requested backend has no registered rendering implementation.
    #[error("The backend {0} is not loaded. Enable its cargo feature or register an implementation")]
    BackendNotLoaded(Backend),

    /// Scale domain error (e.g., empty axis range).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// Rendering error reported by a backend.
    #[error("Rendering error: {0}")]
    Rendering(String),

    /// Configuration parsing error with line number.
    #[cfg(feature = "config")]
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },
}
