//! Error types for the radmom-moments crate.

/// Error type for all fallible operations in the radmom-moments crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MomentError {
    /// Returned when the velocity bounds are non-finite or not increasing.
    #[error("invalid velocity range: min {min_v}, max {max_v}")]
    InvalidVelocityRange {
        /// Lower velocity bound.
        min_v: f64,
        /// Upper velocity bound.
        max_v: f64,
    },

    /// Returned when the axis has fewer than two bins.
    #[error("velocity axis needs at least 2 bins, got {n_bins}")]
    TooFewBins {
        /// Number of bins requested.
        n_bins: usize,
    },

    /// Returned when spectrum, peak range and axis disagree in length.
    #[error("length mismatch: spectrum {spectrum}, axis {axis}, peak range {range}")]
    LengthMismatch {
        /// Spectrum length.
        spectrum: usize,
        /// Axis bin count.
        axis: usize,
        /// Bin count the peak range refers to.
        range: usize,
    },
}
