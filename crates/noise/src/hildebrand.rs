//! Hildebrand & Sekhon (1974) objective noise level detection.

use tracing::trace;

use crate::error::NoiseError;
use crate::estimate::NoiseEstimate;

/// Estimates the noise floor of a linear Doppler spectrum.
///
/// The bins are sorted ascending and the set of the `k` smallest values is
/// grown from `k = 2`. The set is consistent with white noise while its
/// (population) variance does not exceed `mean² / n_averages`. The
/// estimator stops at the first violation and reports the mean and the
/// largest value of the last consistent set. A spectrum that never violates
/// the criterion yields whole-spectrum statistics.
///
/// `n_averages` is the effective number of independent spectra averaged
/// into each bin.
///
/// # Errors
///
/// Returns [`NoiseError`] if the spectrum has fewer than two bins, contains
/// non-finite values, or `n_averages` is not finite and positive.
pub fn hildebrand_sekhon(spectrum: &[f64], n_averages: f64) -> Result<NoiseEstimate, NoiseError> {
    if spectrum.len() < 2 {
        return Err(NoiseError::TooFewBins {
            n_bins: spectrum.len(),
        });
    }
    if let Some(index) = spectrum.iter().position(|v| !v.is_finite()) {
        return Err(NoiseError::NonFiniteValue { index });
    }
    if !n_averages.is_finite() || n_averages <= 0.0 {
        return Err(NoiseError::InvalidAveraging { n_averages });
    }

    let mut sorted = spectrum.to_vec();
    sorted.sort_by(f64::total_cmp);

    // Welford running mean / sum of squared deviations of the prefix.
    let mut mean = sorted[0];
    let mut m2 = 0.0;
    let mut n_noise = 1usize;

    for (i, &value) in sorted.iter().enumerate().skip(1) {
        let k = (i + 1) as f64;
        let delta = value - mean;
        let next_mean = mean + delta / k;
        let next_m2 = m2 + delta * (value - next_mean);
        let variance = (next_m2 / k).max(0.0);

        if variance > next_mean * next_mean / n_averages {
            break;
        }

        mean = next_mean;
        m2 = next_m2;
        n_noise = i + 1;
    }

    trace!(
        n_noise,
        n_bins = sorted.len(),
        mean,
        "hildebrand-sekhon noise set"
    );

    Ok(NoiseEstimate::new(mean, sorted[n_noise - 1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_spectrum_uses_all_bins() {
        let spectrum = [3.0; 16];
        let noise = hildebrand_sekhon(&spectrum, 150.0).unwrap();
        assert_relative_eq!(noise.mean(), 3.0);
        assert_relative_eq!(noise.max(), 3.0);
    }

    #[test]
    fn test_signal_bins_excluded() {
        let mut spectrum = vec![1.0; 32];
        spectrum[10] = 100.0;
        spectrum[11] = 200.0;
        let noise = hildebrand_sekhon(&spectrum, 150.0).unwrap();
        assert_relative_eq!(noise.mean(), 1.0);
        assert_relative_eq!(noise.max(), 1.0);
    }

    #[test]
    fn test_first_pair_violation() {
        // k = 2 already violates: only the smallest bin is noise.
        let noise = hildebrand_sekhon(&[10.0, 0.0], 150.0).unwrap();
        assert_relative_eq!(noise.mean(), 0.0);
        assert_relative_eq!(noise.max(), 0.0);
    }

    #[test]
    fn test_unsorted_input() {
        let spectrum = [2.0, 1.0, 1.0, 50.0, 1.0, 2.0, 1.0, 2.0];
        // Low averaging count tolerates the 1/2 mix but not the 50.
        let noise = hildebrand_sekhon(&spectrum, 2.0).unwrap();
        assert_relative_eq!(noise.max(), 2.0);
        assert_relative_eq!(noise.mean(), 10.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_more_averages_is_stricter() {
        let spectrum = [1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7];
        let loose = hildebrand_sekhon(&spectrum, 1.0).unwrap();
        let strict = hildebrand_sekhon(&spectrum, 1000.0).unwrap();
        assert!(strict.max() < loose.max());
        assert_relative_eq!(loose.max(), 1.7);
    }

    #[test]
    fn test_max_not_below_mean() {
        let spectrum = [0.5, 0.7, 0.6, 0.9, 0.55, 0.8, 30.0, 0.65];
        let noise = hildebrand_sekhon(&spectrum, 10.0).unwrap();
        assert!(noise.max() >= noise.mean());
    }

    #[test]
    fn test_too_few_bins() {
        assert!(matches!(
            hildebrand_sekhon(&[1.0], 150.0),
            Err(NoiseError::TooFewBins { n_bins: 1 })
        ));
        assert!(matches!(
            hildebrand_sekhon(&[], 150.0),
            Err(NoiseError::TooFewBins { n_bins: 0 })
        ));
    }

    #[test]
    fn test_non_finite() {
        let result = hildebrand_sekhon(&[1.0, 2.0, f64::NAN, 1.0], 150.0);
        assert!(matches!(
            result,
            Err(NoiseError::NonFiniteValue { index: 2 })
        ));
    }

    #[test]
    fn test_invalid_averaging() {
        assert!(matches!(
            hildebrand_sekhon(&[1.0, 2.0], 0.0),
            Err(NoiseError::InvalidAveraging { .. })
        ));
        assert!(matches!(
            hildebrand_sekhon(&[1.0, 2.0], f64::NAN),
            Err(NoiseError::InvalidAveraging { .. })
        ));
    }
}
