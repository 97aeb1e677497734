//! Configuration for peak segmentation.

use crate::error::PeakError;

/// Peak search settings.
///
/// # Example
///
/// ```
/// use radmom_peaks::SegmentConfig;
///
/// let config = SegmentConfig::new(2)
///     .with_peak_min_snr(1.5)
///     .with_peak_min_bins(3)
///     .with_wider_peak(true);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentConfig {
    /// Maximum number of peaks reported.
    max_peaks: usize,
    /// Linear factor applied to the noise maximum to form the threshold.
    peak_min_snr: f64,
    /// Minimum number of above-threshold bins per peak.
    peak_min_bins: usize,
    /// Include the decaying skirts next to each peak.
    use_wider_peak: bool,
}

impl SegmentConfig {
    /// Creates a configuration reporting up to `max_peaks` peaks.
    ///
    /// Defaults: `peak_min_snr = 1.2`, `peak_min_bins = 2`,
    /// `use_wider_peak = false`.
    pub fn new(max_peaks: usize) -> Self {
        Self {
            max_peaks,
            peak_min_snr: 1.2,
            peak_min_bins: 2,
            use_wider_peak: false,
        }
    }

    /// Sets the threshold factor on the noise maximum.
    pub fn with_peak_min_snr(mut self, snr: f64) -> Self {
        self.peak_min_snr = snr;
        self
    }

    /// Sets the minimum number of bins per peak.
    pub fn with_peak_min_bins(mut self, bins: usize) -> Self {
        self.peak_min_bins = bins;
        self
    }

    /// Enables or disables peak widening.
    pub fn with_wider_peak(mut self, enabled: bool) -> Self {
        self.use_wider_peak = enabled;
        self
    }

    /// Returns the maximum number of reported peaks.
    pub fn max_peaks(&self) -> usize {
        self.max_peaks
    }

    /// Returns the threshold factor on the noise maximum.
    pub fn peak_min_snr(&self) -> f64 {
        self.peak_min_snr
    }

    /// Returns the minimum number of bins per peak.
    pub fn peak_min_bins(&self) -> usize {
        self.peak_min_bins
    }

    /// Returns whether peak widening is enabled.
    pub fn use_wider_peak(&self) -> bool {
        self.use_wider_peak
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), PeakError> {
        if self.max_peaks < 1 {
            return Err(PeakError::InvalidMaxPeaks {
                max_peaks: self.max_peaks,
            });
        }
        if !self.peak_min_snr.is_finite() || self.peak_min_snr <= 0.0 {
            return Err(PeakError::InvalidMinSnr {
                snr: self.peak_min_snr,
            });
        }
        if self.peak_min_bins < 1 {
            return Err(PeakError::InvalidMinBins {
                bins: self.peak_min_bins,
            });
        }
        Ok(())
    }
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self::new(3)
    }
}
