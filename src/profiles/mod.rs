//! Profile computation: ratio engine, curve builder and options.
//!
//! Turns raw benchmark data into backend-agnostic step curves.

mod curve;
mod data_profile;
mod options;
mod performance;
mod ratios;

pub use curve::{CurveBuilder, ProfileCurve, ProfileData};
pub use data_profile::data_profile_data;
pub use options::{resolve_labels, LineStyle, ProfileOptions, YLABEL};
pub use performance::performance_profile_data;
pub use ratios::{data_ratios, performance_ratios, RatioMatrix, DEFAULT_TAU};
