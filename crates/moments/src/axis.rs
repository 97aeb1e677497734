//! Mapping between spectral bins and Doppler velocity.

use crate::error::MomentError;

/// Doppler velocity axis of a spectrum.
///
/// Bin `i` maps to `min_v + i * (max_v - min_v) / n_bins`; the upper
/// Nyquist bound itself is the first bin of the next folding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityAxis {
    min_v: f64,
    max_v: f64,
    n_bins: usize,
}

impl VelocityAxis {
    /// Creates an axis of `n_bins` bins between the Nyquist bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MomentError`] if the bounds are non-finite or
    /// `max_v <= min_v`, or if `n_bins < 2`.
    pub fn new(min_v: f64, max_v: f64, n_bins: usize) -> Result<Self, MomentError> {
        if !min_v.is_finite() || !max_v.is_finite() || max_v <= min_v {
            return Err(MomentError::InvalidVelocityRange { min_v, max_v });
        }
        if n_bins < 2 {
            return Err(MomentError::TooFewBins { n_bins });
        }
        Ok(Self {
            min_v,
            max_v,
            n_bins,
        })
    }

    /// Returns the lower Nyquist velocity.
    pub fn min_v(&self) -> f64 {
        self.min_v
    }

    /// Returns the upper Nyquist velocity.
    pub fn max_v(&self) -> f64 {
        self.max_v
    }

    /// Returns the number of bins.
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// Returns the full unambiguous velocity interval `max_v - min_v`.
    pub fn span(&self) -> f64 {
        self.max_v - self.min_v
    }

    /// Returns the velocity resolution.
    pub fn bin_width(&self) -> f64 {
        self.span() / self.n_bins as f64
    }

    /// Returns the velocity of bin `i`.
    pub fn velocity(&self, i: usize) -> f64 {
        self.min_v + i as f64 * self.bin_width()
    }
}
