//! CSV export of profile curves.
//!
//! One row per distinct x breakpoint over all solvers, ascending. Each
//! solver contributes an `x, y` column pair in label order; rows holding a
//! breakpoint the solver does not have are padded with `NaN`.
//!
//! ```csv
//! A_x,A_y,B_x,B_y
//! 1,0.5,1,0.5
//! 2,1,NaN,NaN
//! 3,1,3,1
//! ```

use crate::data::{BenchmarkMatrix, BenchmarkTensor};
use crate::error::{Error, Result};
use crate::profiles::{
    data_profile_data, performance_profile_data, resolve_labels, ProfileData, ProfileOptions,
};
use std::io;
use std::path::Path;
use tracing::debug;

/// CSV writer settings.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter.
    pub delimiter: u8,
    /// Write a header row.
    pub write_header: bool,
    /// Custom header; defaults to `{label}_x, {label}_y` per solver.
    pub header: Option<Vec<String>>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            write_header: true,
            header: None,
        }
    }
}

impl CsvOptions {
    /// Create default options (comma-delimited, generated header).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    #[must_use]
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable or disable the header row.
    #[must_use]
    pub fn write_header(mut self, write_header: bool) -> Self {
        self.write_header = write_header;
        self
    }

    /// Use a custom header (two entries per solver).
    #[must_use]
    pub fn header<S: Into<String>>(mut self, header: impl IntoIterator<Item = S>) -> Self {
        self.header = Some(header.into_iter().map(Into::into).collect());
        self
    }
}

/// Tabulate profile curves as rows of `x, y` pairs per solver.
#[must_use]
pub fn profile_table(data: &ProfileData) -> Vec<Vec<f64>> {
    let mut breakpoints: Vec<f64> = data.x_sequences().flatten().copied().collect();
    breakpoints.sort_by(f64::total_cmp);
    breakpoints.dedup();

    breakpoints
        .iter()
        .map(|&x| {
            let mut row = Vec::with_capacity(2 * data.solvers());
            for curve in data.curves() {
                let idx = curve.x().partition_point(|&v| v < x);
                match curve.x().get(idx) {
                    Some(&v) if v == x => row.extend([x, curve.y()[idx]]),
                    _ => row.extend([f64::NAN, f64::NAN]),
                }
            }
            row
        })
        .collect()
}

/// Write profile curves as CSV.
///
/// # Errors
///
/// Returns [`Error::LabelCountMismatch`] or [`Error::HeaderLengthMismatch`]
/// for malformed labels or header, or a CSV/I/O error from the writer.
pub fn write_profile_csv<W: io::Write>(
    writer: W,
    data: &ProfileData,
    labels: &[String],
    options: &CsvOptions,
) -> Result<()> {
    let solvers = data.solvers();
    if labels.len() != solvers {
        return Err(Error::LabelCountMismatch {
            labels: labels.len(),
            solvers,
        });
    }

    let header = match &options.header {
        Some(custom) if custom.len() != 2 * solvers => {
            return Err(Error::HeaderLengthMismatch {
                expected: 2 * solvers,
                actual: custom.len(),
            });
        }
        Some(custom) => custom.clone(),
        None => labels
            .iter()
            .flat_map(|l| [format!("{l}_x"), format!("{l}_y")])
            .collect(),
    };

    let mut out = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_writer(writer);

    if options.write_header {
        out.write_record(&header)?;
    }

    let table = profile_table(data);
    for row in &table {
        out.write_record(row.iter().map(ToString::to_string))?;
    }
    out.flush()?;

    debug!(rows = table.len(), columns = header.len(), "wrote profile CSV");
    Ok(())
}

/// Compute a performance profile and write it to a CSV file.
///
/// # Errors
///
/// Returns an error for invalid input, labels or header, or if the file
/// cannot be written.
pub fn export_performance_profile<P: AsRef<Path>, S: AsRef<str>>(
    path: P,
    t: &BenchmarkMatrix,
    labels: &[S],
    options: &ProfileOptions,
    csv_options: &CsvOptions,
) -> Result<()> {
    let labels = resolve_labels(labels, t.solvers())?;
    let data = performance_profile_data(t, options)?;
    let file = std::fs::File::create(path)?;
    write_profile_csv(io::BufWriter::new(file), &data, &labels, csv_options)
}

/// Compute a data profile and write it to a CSV file.
///
/// # Errors
///
/// Returns an error for invalid input, labels or header, or if the file
/// cannot be written.
pub fn export_data_profile<P: AsRef<Path>, S: AsRef<str>>(
    path: P,
    h: &BenchmarkTensor,
    n: &[f64],
    labels: &[S],
    options: &ProfileOptions,
    csv_options: &CsvOptions,
) -> Result<()> {
    let labels = resolve_labels(labels, h.solvers())?;
    let data = data_profile_data(h, n, options)?;
    let file = std::fs::File::create(path)?;
    write_profile_csv(io::BufWriter::new(file), &data, &labels, csv_options)
}
