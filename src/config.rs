//! YAML loading of [`ProfileOptions`].
//!
//! Every field is optional; missing fields keep their defaults.
//!
//! ```yaml
//! title: Celebrity Deathmatch
//! logscale: true
//! sampletol: 0.01
//! linestyles: [solid, dash]
//! extras:
//!   background: none
//! ```

use crate::error::{Error, Result};
use crate::profiles::ProfileOptions;
use std::path::Path;

impl ProfileOptions {
    /// Load options from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse options from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] with the failing line on invalid YAML
    /// or unknown enum values.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Serialize options to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigParse {
            line: 0,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::LineStyle;

    #[test]
    fn test_parse_partial() {
        let opts = ProfileOptions::parse("title: Deathmatch\nsampletol: 0.05\n").unwrap();
        assert_eq!(opts.title, "Deathmatch");
        assert_eq!(opts.sampletol, 0.05);
        assert!(opts.logscale);
        assert_eq!(opts.tau, 1.0e-3);
    }

    #[test]
    fn test_parse_linestyles_and_extras() {
        let yaml = "linestyles: [solid, dash_dot]\nextras:\n  background: none\n";
        let opts = ProfileOptions::parse(yaml).unwrap();
        assert_eq!(opts.linestyles, vec![LineStyle::Solid, LineStyle::DashDot]);
        assert_eq!(opts.extras.get("background").map(String::as_str), Some("none"));
    }

    #[test]
    fn test_parse_error_reports_line() {
        let result = ProfileOptions::parse("title: ok\nlogscale: sometimes\n");
        match result {
            Err(Error::ConfigParse { line, .. }) => assert!(line > 0),
            other => panic!("expected ConfigParse, got {other:?}"),
        }
    }

    #[test]
    fn test_yaml_roundtrip() {
        let opts = ProfileOptions::new().title("t").drawtol(0.1).extra("k", "v");
        let back = ProfileOptions::parse(&opts.to_yaml().unwrap()).unwrap();
        assert_eq!(back, opts);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.yaml");
        std::fs::write(&path, "operations: gradient evaluations\n").unwrap();

        let opts = ProfileOptions::load(&path).unwrap();
        assert_eq!(opts.data_xlabel(), "Number of gradient evaluations");
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            ProfileOptions::load("/nonexistent/profile.yaml"),
            Err(Error::Io(_))
        ));
    }
}
