//! # radmom-column
//!
//! Moment retrieval for one radar Doppler spectrum at a time.
//!
//! ## Processing chain
//!
//! ```mermaid
//! graph LR
//!     A["linear spectrum"] -->|"hildebrand_sekhon()"| B["NoiseEstimate"]
//!     A -->|"miscalibration, smoothing"| C["smoothed spectrum"]
//!     B --> D["segment_peaks()"]
//!     C --> D
//!     D -->|"integrate_peak() per peak"| E["ColumnResult"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use radmom_column::{MomentsConfig, QualityFlags, compute_moments};
//!
//! let mut spectrum = vec![1.0; 128];
//! for (i, bin) in spectrum.iter_mut().enumerate() {
//!     let x = (i as f64 - 64.0) / 4.0;
//!     *bin += 100.0 * (-0.5 * x * x).exp();
//! }
//!
//! let result = compute_moments(&spectrum, &MomentsConfig::default()).unwrap();
//! assert_eq!(result.n_peaks(), 1);
//! assert!(result.quality().contains(QualityFlags::PRINCIPAL_ISOLATED));
//! assert!(result.moments()[0][1].abs() < 0.01);
//! ```
//!
//! Degenerate outcomes (no peak, folded peak, more peaks than slots) are
//! reported through [`QualityFlags`]; only malformed input and noise
//! estimation failures are errors. For many spectra use
//! [`compute_moments_batch`], which processes columns in parallel.

mod batch;
mod config;
mod driver;
mod error;
mod quality;
mod result;

pub use batch::{compute_moments_batch, estimate_noise_batch};
pub use config::MomentsConfig;
pub use driver::{compute_moments, estimate_noise};
pub use error::ColumnError;
pub use quality::QualityFlags;
pub use result::ColumnResult;

pub use radmom_moments::{MomentSet, VelocityAxis};
pub use radmom_noise::NoiseEstimate;
pub use radmom_peaks::SegmentConfig;
pub use radmom_smooth::{BoundaryMode, SmoothConfig};
