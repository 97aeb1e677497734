//! Error types for the radmom-peaks crate.

/// Error type for all fallible operations in the radmom-peaks crate.
///
/// Only malformed inputs are errors. A spectrum without any peak is a
/// valid outcome and yields an empty [`Segmentation`](crate::Segmentation).
#[derive(Debug, Clone, thiserror::Error)]
pub enum PeakError {
    /// Returned when `max_peaks` is zero.
    #[error("max_peaks must be >= 1, got {max_peaks}")]
    InvalidMaxPeaks {
        /// The invalid peak count.
        max_peaks: usize,
    },

    /// Returned when `peak_min_snr` is non-finite or non-positive.
    #[error("peak_min_snr must be finite and positive, got {snr}")]
    InvalidMinSnr {
        /// The invalid SNR factor.
        snr: f64,
    },

    /// Returned when `peak_min_bins` is zero.
    #[error("peak_min_bins must be >= 1, got {bins}")]
    InvalidMinBins {
        /// The invalid bin count.
        bins: usize,
    },

    /// Returned when the spectrum has fewer than two bins.
    #[error("spectrum must have at least 2 bins, got {n_bins}")]
    TooFewBins {
        /// Number of bins supplied.
        n_bins: usize,
    },

    /// Returned when a spectral bin is NaN or infinite.
    #[error("non-finite spectral power at bin {index}")]
    NonFiniteValue {
        /// Index of the first offending bin.
        index: usize,
    },

    /// Returned when the noise mean or maximum is NaN or infinite.
    #[error("non-finite noise estimate (mean {mean}, max {max})")]
    NonFiniteNoise {
        /// Noise mean.
        mean: f64,
        /// Noise maximum.
        max: f64,
    },
}
