//! Error types for the radmom-column crate.

use radmom_moments::MomentError;
use radmom_noise::NoiseError;
use radmom_peaks::PeakError;
use radmom_smooth::SmoothError;

/// Error type for all fallible operations in the radmom-column crate.
///
/// Covers input validation and noise estimation failures. Spectra
/// without peaks are not errors; see
/// [`QualityFlags::NO_PEAK`](crate::QualityFlags::NO_PEAK).
#[derive(Debug, Clone, thiserror::Error)]
pub enum ColumnError {
    /// Noise estimation error.
    #[error(transparent)]
    Noise(#[from] NoiseError),

    /// Smoothing configuration error.
    #[error(transparent)]
    Smooth(#[from] SmoothError),

    /// Peak segmentation error.
    #[error(transparent)]
    Peak(#[from] PeakError),

    /// Velocity axis or moment integration error.
    #[error(transparent)]
    Moment(#[from] MomentError),

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

    /// Returned when the number of averages is non-finite or non-positive.
    #[error("number of averages must be finite and positive, got {n_averages}")]
    InvalidAveraging {
        /// The invalid averaging count.
        n_averages: f64,
    },

    /// Returned when a caller-supplied noise level is negative or non-finite.
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidNoiseOverride {
        /// Name of the override (`noise_mean` or `noise_max`).
        field: &'static str,
        /// The invalid value.
        value: f64,
    },

    /// Returned when the noise distance factor is negative or non-finite.
    #[error("noise distance factor must be finite and non-negative, got {factor}")]
    InvalidNoiseDistanceFactor {
        /// The invalid factor.
        factor: f64,
    },

    /// Returned when the receiver miscalibration is non-finite.
    #[error("receiver miscalibration must be finite, got {db} dB")]
    InvalidMiscalibration {
        /// The invalid miscalibration in dB.
        db: f64,
    },

    /// Returned when per-column noise estimates do not match the batch.
    #[error("{noise} noise estimates supplied for {spectra} spectra")]
    NoiseShapeMismatch {
        /// Number of spectra in the batch.
        spectra: usize,
        /// Number of noise estimates supplied.
        noise: usize,
    },

    /// Returned when one column of a batch fails.
    #[error("column {index}: {source}")]
    Column {
        /// Position of the failing spectrum in the batch.
        index: usize,
        /// The column's error.
        source: Box<ColumnError>,
    },
}
