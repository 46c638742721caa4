//! Data-to-canvas mappings used by the built-in backends.

use crate::error::{Error, Result};

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is empty or not finite.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(Error::ScaleDomain("Domain must be finite".to_string()));
        }
        if (domain.0 - domain.1).abs() < f64::EPSILON {
            return Err(Error::ScaleDomain(
                "Domain min and max cannot be equal".to_string(),
            ));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Create a scale over `[min, max]`, widening a degenerate interval by one unit.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is not finite.
    pub fn padded(min: f64, max: f64, range: (f64, f64)) -> Result<Self> {
        let max = if max - min < f64::EPSILON { min + 1.0 } else { max };
        Self::new((min, max), range)
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f64) -> f64 {
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }
}

impl Scale<f64, f64> for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}

/// Evenly spaced "nice" tick positions covering `[min, max]`.
///
/// Step sizes are 1, 2 or 5 times a power of ten; at most about `target`
/// ticks are returned.
#[must_use]
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || target == 0 {
        return vec![min];
    }
    let raw = (max - min) / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw)
        .unwrap_or(10.0 * magnitude);

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 500.0)).unwrap();
        assert!((scale.scale(50.0) - 250.0).abs() < 1e-9);
        assert!((scale.invert(250.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_scale_equal_domain_error() {
        assert!(LinearScale::new((1.0, 1.0), (0.0, 10.0)).is_err());
    }

    #[test]
    fn test_padded_widens_degenerate_domain() {
        let scale = LinearScale::padded(1.0, 1.0, (0.0, 10.0)).unwrap();
        assert_eq!(scale.domain(), (1.0, 2.0));
        assert_eq!(scale.range(), (0.0, 10.0));
    }

    #[test]
    fn test_nice_ticks() {
        let unit = nice_ticks(0.0, 1.0, 5);
        assert_eq!(unit.len(), 6);
        assert!((unit[1] - 0.2).abs() < 1e-12);
        assert!((unit[5] - 1.0).abs() < 1e-12);
        assert_eq!(nice_ticks(1.0, 8.0, 4), vec![2.0, 4.0, 6.0, 8.0]);
        assert_eq!(nice_ticks(3.0, 3.0, 4), vec![3.0]);
    }
}
