//! Configuration for per-spectrum moment retrieval.

use radmom_moments::VelocityAxis;
use radmom_peaks::SegmentConfig;
use radmom_smooth::SmoothConfig;

use crate::error::ColumnError;

/// Settings for [`compute_moments`](crate::compute_moments).
///
/// # Example
///
/// ```
/// use radmom_column::MomentsConfig;
///
/// let config = MomentsConfig::new()
///     .with_velocity_range(-10.0, 10.0)
///     .with_n_averages(20.0)
///     .with_max_peaks(2)
///     .with_noise_distance_factor(1.5)
///     .with_receiver_miscalibration_db(-1.0);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.segment().max_peaks(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MomentsConfig {
    /// Velocity of the first bin.
    min_velocity: f64,
    /// Velocity one bin past the last, i.e. the Nyquist velocity.
    max_velocity: f64,
    /// Spectral averages per spectrum, drives Hildebrand-Sekhon.
    n_averages: f64,
    /// If positive, the noise maximum is `factor * noise_mean`.
    noise_distance_factor: f64,
    /// Caller-supplied noise mean, skipping the estimate.
    noise_mean: Option<f64>,
    /// Caller-supplied noise maximum.
    noise_max: Option<f64>,
    /// Peak search settings.
    segment: SegmentConfig,
    /// Smoothing applied before peak search, `None` disables it.
    smoothing: Option<SmoothConfig>,
    /// Receiver miscalibration in dB.
    receiver_miscalibration_db: f64,
}

impl MomentsConfig {
    /// Creates a configuration with default settings.
    ///
    /// Defaults: velocity range `[-7.885, 7.885)`, `n_averages = 150`,
    /// three peaks, smoothing with a 5-point quadratic filter, no noise
    /// overrides and no miscalibration.
    pub fn new() -> Self {
        Self {
            min_velocity: -7.885,
            max_velocity: 7.885,
            n_averages: 150.0,
            noise_distance_factor: 0.0,
            noise_mean: None,
            noise_max: None,
            segment: SegmentConfig::default(),
            smoothing: Some(SmoothConfig::default()),
            receiver_miscalibration_db: 0.0,
        }
    }

    /// Sets the velocity range covered by the spectrum.
    pub fn with_velocity_range(mut self, min_velocity: f64, max_velocity: f64) -> Self {
        self.min_velocity = min_velocity;
        self.max_velocity = max_velocity;
        self
    }

    /// Sets the number of spectral averages.
    pub fn with_n_averages(mut self, n_averages: f64) -> Self {
        self.n_averages = n_averages;
        self
    }

    /// Sets the noise distance factor.
    pub fn with_noise_distance_factor(mut self, factor: f64) -> Self {
        self.noise_distance_factor = factor;
        self
    }

    /// Supplies the noise mean instead of estimating it.
    pub fn with_noise_mean(mut self, mean: f64) -> Self {
        self.noise_mean = Some(mean);
        self
    }

    /// Supplies the noise maximum instead of deriving it.
    pub fn with_noise_max(mut self, max: f64) -> Self {
        self.noise_max = Some(max);
        self
    }

    /// Replaces the peak search settings.
    pub fn with_segment(mut self, segment: SegmentConfig) -> Self {
        self.segment = segment;
        self
    }

    /// Sets the maximum number of reported peaks.
    pub fn with_max_peaks(mut self, max_peaks: usize) -> Self {
        self.segment = SegmentConfig::new(max_peaks)
            .with_peak_min_snr(self.segment.peak_min_snr())
            .with_peak_min_bins(self.segment.peak_min_bins())
            .with_wider_peak(self.segment.use_wider_peak());
        self
    }

    /// Sets the peak threshold factor on the noise maximum.
    pub fn with_peak_min_snr(mut self, snr: f64) -> Self {
        self.segment = self.segment.with_peak_min_snr(snr);
        self
    }

    /// Sets the minimum number of bins per peak.
    pub fn with_peak_min_bins(mut self, bins: usize) -> Self {
        self.segment = self.segment.with_peak_min_bins(bins);
        self
    }

    /// Enables or disables peak widening.
    pub fn with_wider_peak(mut self, enabled: bool) -> Self {
        self.segment = self.segment.with_wider_peak(enabled);
        self
    }

    /// Sets the smoothing filter; `None` disables smoothing.
    pub fn with_smoothing(mut self, smoothing: Option<SmoothConfig>) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Sets the receiver miscalibration in dB.
    pub fn with_receiver_miscalibration_db(mut self, db: f64) -> Self {
        self.receiver_miscalibration_db = db;
        self
    }

    /// Returns the velocity of the first bin.
    pub fn min_velocity(&self) -> f64 {
        self.min_velocity
    }

    /// Returns the Nyquist velocity.
    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    /// Returns the number of spectral averages.
    pub fn n_averages(&self) -> f64 {
        self.n_averages
    }

    /// Returns the noise distance factor.
    pub fn noise_distance_factor(&self) -> f64 {
        self.noise_distance_factor
    }

    /// Returns the caller-supplied noise mean.
    pub fn noise_mean(&self) -> Option<f64> {
        self.noise_mean
    }

    /// Returns the caller-supplied noise maximum.
    pub fn noise_max(&self) -> Option<f64> {
        self.noise_max
    }

    /// Returns the peak search settings.
    pub fn segment(&self) -> &SegmentConfig {
        &self.segment
    }

    /// Returns the smoothing filter, if enabled.
    pub fn smoothing(&self) -> Option<&SmoothConfig> {
        self.smoothing.as_ref()
    }

    /// Returns the receiver miscalibration in dB.
    pub fn receiver_miscalibration_db(&self) -> f64 {
        self.receiver_miscalibration_db
    }

    /// Linear power factor of the receiver miscalibration.
    pub(crate) fn miscalibration_factor(&self) -> f64 {
        10f64.powf(0.1 * self.receiver_miscalibration_db)
    }

    /// Validates all settings.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found, including errors from the
    /// nested segmentation and smoothing configurations.
    pub fn validate(&self) -> Result<(), ColumnError> {
        VelocityAxis::new(self.min_velocity, self.max_velocity, 2)?;
        if !self.n_averages.is_finite() || self.n_averages <= 0.0 {
            return Err(ColumnError::InvalidAveraging {
                n_averages: self.n_averages,
            });
        }
        if !self.noise_distance_factor.is_finite() || self.noise_distance_factor < 0.0 {
            return Err(ColumnError::InvalidNoiseDistanceFactor {
                factor: self.noise_distance_factor,
            });
        }
        for (field, value) in [("noise_mean", self.noise_mean), ("noise_max", self.noise_max)] {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(ColumnError::InvalidNoiseOverride { field, value });
                }
            }
        }
        if !self.receiver_miscalibration_db.is_finite() {
            return Err(ColumnError::InvalidMiscalibration {
                db: self.receiver_miscalibration_db,
            });
        }
        self.segment.validate()?;
        if let Some(smoothing) = &self.smoothing {
            smoothing.validate()?;
        }
        Ok(())
    }
}

impl Default for MomentsConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = MomentsConfig::default();
        assert_relative_eq!(config.min_velocity(), -7.885);
        assert_relative_eq!(config.max_velocity(), 7.885);
        assert_relative_eq!(config.n_averages(), 150.0);
        assert_eq!(config.segment().max_peaks(), 3);
        assert_relative_eq!(config.segment().peak_min_snr(), 1.2);
        assert_eq!(config.segment().peak_min_bins(), 2);
        assert!(!config.segment().use_wider_peak());
        assert_eq!(config.smoothing(), Some(&SmoothConfig::default()));
        assert!(config.noise_mean().is_none());
        assert!(config.noise_max().is_none());
        assert_relative_eq!(config.miscalibration_factor(), 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_max_peaks_keeps_other_settings() {
        let config = MomentsConfig::new()
            .with_peak_min_snr(2.0)
            .with_wider_peak(true)
            .with_max_peaks(5);
        assert_eq!(config.segment().max_peaks(), 5);
        assert_relative_eq!(config.segment().peak_min_snr(), 2.0);
        assert!(config.segment().use_wider_peak());
    }

    #[test]
    fn test_miscalibration_factor() {
        let config = MomentsConfig::new().with_receiver_miscalibration_db(10.0);
        assert_relative_eq!(config.miscalibration_factor(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_inverted_velocity_range() {
        let config = MomentsConfig::new().with_velocity_range(5.0, -5.0);
        assert!(matches!(config.validate(), Err(ColumnError::Moment(_))));
    }

    #[test]
    fn test_rejects_zero_averages() {
        let config = MomentsConfig::new().with_n_averages(0.0);
        assert!(matches!(
            config.validate(),
            Err(ColumnError::InvalidAveraging { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_noise_override() {
        let config = MomentsConfig::new().with_noise_max(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ColumnError::InvalidNoiseOverride {
                field: "noise_max",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_negative_distance_factor() {
        let config = MomentsConfig::new().with_noise_distance_factor(-0.5);
        assert!(matches!(
            config.validate(),
            Err(ColumnError::InvalidNoiseDistanceFactor { .. })
        ));
    }

    #[test]
    fn test_rejects_nan_miscalibration() {
        let config = MomentsConfig::new().with_receiver_miscalibration_db(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ColumnError::InvalidMiscalibration { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_max_peaks() {
        let config = MomentsConfig::new().with_max_peaks(0);
        assert!(matches!(config.validate(), Err(ColumnError::Peak(_))));
    }

    #[test]
    fn test_rejects_even_smoothing_window() {
        let config = MomentsConfig::new().with_smoothing(Some(SmoothConfig::new(4, 2)));
        assert!(matches!(config.validate(), Err(ColumnError::Smooth(_))));
    }

    #[test]
    fn test_smoothing_can_be_disabled() {
        let config = MomentsConfig::new().with_smoothing(None);
        assert!(config.smoothing().is_none());
        assert!(config.validate().is_ok());
    }
}
