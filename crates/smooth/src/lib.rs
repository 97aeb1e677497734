//! # radmom-smooth
//!
//! Savitzky-Golay smoothing of Doppler spectra ahead of peak detection.
//!
//! A Savitzky-Golay filter fits a low-order polynomial to every window of
//! the spectrum by least squares and keeps the fitted centre value. For a
//! fixed window that is a symmetric convolution, so the coefficients are
//! computed once and applied to every bin. A filter of order `p` leaves
//! the first `p` moments of a peak untouched while damping bin-to-bin
//! noise.
//!
//! ```
//! use radmom_smooth::{SmoothConfig, smooth_spectrum};
//!
//! let spectrum = [1.0, 1.2, 0.9, 5.0, 9.0, 5.2, 1.1, 0.8, 1.0];
//! let smoothed = smooth_spectrum(&spectrum, &SmoothConfig::default()).unwrap();
//! assert_eq!(smoothed.len(), spectrum.len());
//! ```

mod config;
mod error;
mod savgol;

pub use config::{BoundaryMode, SmoothConfig};
pub use error::SmoothError;
pub use savgol::{SavitzkyGolay, savitzky_golay_coefficients, smooth_spectrum};
