//! # radmom-peaks
//!
//! Multi-peak segmentation of Doppler spectra.
//!
//! Bins above `noise_max * peak_min_snr` are grouped into contiguous
//! candidate ranges. The spectrum is treated as circular, so an echo that
//! is folded across the Nyquist velocity shows up as a single range
//! running from the last bin into the first one ([`PeakRange::wraps`]).
//!
//! ```text
//! segment_peaks()
//!   ├─ threshold test            (noise.max * peak_min_snr)
//!   ├─ circular run grouping     → candidate PeakRanges
//!   ├─ drop runs < peak_min_bins
//!   ├─ optional widening         (use_wider_peak)
//!   ├─ rank by noise-removed power, keep max_peaks
//!   └─ principal-peak isolation test
//! ```
//!
//! ```
//! use radmom_noise::NoiseEstimate;
//! use radmom_peaks::{SegmentConfig, segment_peaks};
//!
//! let mut spectrum = vec![1.0; 32];
//! spectrum[10..14].copy_from_slice(&[4.0, 9.0, 8.0, 3.0]);
//!
//! let noise = NoiseEstimate::new(1.0, 1.0);
//! let seg = segment_peaks(&spectrum, &noise, &SegmentConfig::default()).unwrap();
//! assert_eq!(seg.peaks().len(), 1);
//! assert_eq!(seg.peaks()[0].range().left(), 10);
//! assert_eq!(seg.peaks()[0].range().right(), 13);
//! ```

mod config;
mod error;
mod range;
mod segment;

pub use config::SegmentConfig;
pub use error::PeakError;
pub use range::PeakRange;
pub use segment::{Peak, Segmentation, segment_peaks};
