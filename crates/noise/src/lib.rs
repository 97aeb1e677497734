//! # radmom-noise
//!
//! Noise floor estimation for linear radar Doppler spectra following
//! Hildebrand & Sekhon (1974).
//!
//! Noise-only spectral bins averaged over `n` independent spectra have a
//! variance of `mean² / n`. Sorting the bins and growing the set of the
//! smallest values until that relation breaks separates the noise floor
//! from the signal.
//!
//! ```
//! use radmom_noise::hildebrand_sekhon;
//!
//! let mut spectrum = vec![1.0; 64];
//! spectrum[30] = 50.0;
//! spectrum[31] = 80.0;
//!
//! let noise = hildebrand_sekhon(&spectrum, 150.0).unwrap();
//! assert_eq!(noise.mean(), 1.0);
//! assert_eq!(noise.max(), 1.0);
//! ```

mod error;
mod estimate;
mod hildebrand;

pub use error::NoiseError;
pub use estimate::NoiseEstimate;
pub use hildebrand::hildebrand_sekhon;
