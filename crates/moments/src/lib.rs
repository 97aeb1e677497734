//! # radmom-moments
//!
//! Spectral moments, flank slope and edge velocities of a single Doppler
//! peak.
//!
//! | Moment | Definition | Unit |
//! |--------|------------|------|
//! | 0th | `Σ p` | spectrum unit (mm⁶/m³) |
//! | 1st | `Σ p v / m0` | m/s |
//! | 2nd | `sqrt(Σ p (v - m1)² / m0)` | m/s |
//! | 3rd | `Σ p (v - m1)³ / m0 / m2³` | – |
//! | 4th | `Σ p (v - m1)⁴ / m0 / m2⁴` | – |
//!
//! Peaks folded across the Nyquist velocity are unwrapped before
//! integration so the velocities of their bins are continuous.
//!
//! ```
//! use radmom_moments::{VelocityAxis, integrate_peak};
//! use radmom_peaks::PeakRange;
//!
//! let axis = VelocityAxis::new(-8.0, 8.0, 16).unwrap();
//! let mut power = vec![0.0; 16];
//! power[7] = 1.0;
//! power[8] = 2.0;
//! power[9] = 1.0;
//!
//! let set = integrate_peak(&power, &PeakRange::new(7, 3, 16), &axis).unwrap();
//! assert_eq!(set.power(), 4.0);
//! assert_eq!(set.mean_velocity(), 0.0);
//! ```

mod axis;
mod error;
mod integrate;

pub use axis::VelocityAxis;
pub use error::MomentError;
pub use integrate::{MomentSet, SLOPE_WINDOW_BINS, integrate_peak};
