//! Error types for the radmom-noise crate.

/// Error type for all fallible operations in the radmom-noise crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NoiseError {
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
}
