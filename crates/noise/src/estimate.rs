//! The noise estimate shared by all downstream stages.

/// Linear noise power per spectral bin.
///
/// `mean` is the average noise level that gets subtracted from the
/// spectrum, `max` the largest bin still classified as noise. Both are in
/// the units of the spectrum (mm⁶/m³ per bin for reflectivity spectra).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseEstimate {
    mean: f64,
    max: f64,
}

impl NoiseEstimate {
    /// Creates a noise estimate from its mean and maximum.
    pub fn new(mean: f64, max: f64) -> Self {
        Self { mean, max }
    }

    /// Returns the mean noise power per bin.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the maximum noise power per bin.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns a copy with both values multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            mean: self.mean * factor,
            max: self.max * factor,
        }
    }

    /// Returns `true` if both values are finite.
    pub fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.max.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accessors() {
        let n = NoiseEstimate::new(1.5, 2.5);
        assert_eq!(n.mean(), 1.5);
        assert_eq!(n.max(), 2.5);
        assert!(n.is_finite());
    }

    #[test]
    fn test_scaled() {
        let n = NoiseEstimate::new(2.0, 3.0).scaled(10.0_f64.powf(0.3));
        assert_relative_eq!(n.mean(), 2.0 * 1.995_262_315, epsilon = 1e-8);
        assert_relative_eq!(n.max(), 3.0 * 1.995_262_315, epsilon = 1e-8);
    }

    #[test]
    fn test_not_finite() {
        assert!(!NoiseEstimate::new(f64::NAN, 1.0).is_finite());
        assert!(!NoiseEstimate::new(1.0, f64::INFINITY).is_finite());
    }
}
