//! End-to-end retrieval on synthetic spectra.

use approx::assert_relative_eq;
use radmom_column::{
    ColumnError, MomentsConfig, NoiseEstimate, QualityFlags, VelocityAxis, compute_moments,
    compute_moments_batch, estimate_noise, estimate_noise_batch,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Gamma};

/// Flat floor with Gaussian echoes `(center_bin, sigma_bins, amplitude)`.
fn synthetic(n: usize, floor: f64, echoes: &[(f64, f64, f64)]) -> Vec<f64> {
    (0..n)
        .map(|i| {
            floor
                + echoes
                    .iter()
                    .map(|&(c, s, a)| {
                        let x = (i as f64 - c) / s;
                        a * (-0.5 * x * x).exp()
                    })
                    .sum::<f64>()
        })
        .collect()
}

fn gamma_noise(n: usize, n_averages: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let gamma = Gamma::new(n_averages, 1.0 / n_averages).unwrap();
    (0..n).map(|_| gamma.sample(&mut rng)).collect()
}

#[test]
fn recovers_gaussian_echo_in_noise() {
    let config = MomentsConfig::default();
    let axis = VelocityAxis::new(-7.885, 7.885, 256).unwrap();
    let (v0, sigma, total) = (1.0, 0.5, 10_000.0);

    let sigma_bins = sigma / axis.bin_width();
    let amplitude = total / (sigma_bins * (2.0 * std::f64::consts::PI).sqrt());
    let center = (v0 - axis.min_v()) / axis.bin_width();
    let echo = synthetic(256, 0.0, &[(center, sigma_bins, amplitude)]);
    let spectrum: Vec<f64> = gamma_noise(256, 150.0, 42)
        .iter()
        .zip(&echo)
        .map(|(n, s)| n + s)
        .collect();

    let result = compute_moments(&spectrum, &config).unwrap();
    assert!(result.n_peaks() >= 1);
    assert!(!result.quality().contains(QualityFlags::NO_PEAK));
    assert!(!result.quality().contains(QualityFlags::ALIASED));
    assert_relative_eq!(result.noise().mean(), 1.0, max_relative = 0.02);

    let m = result.moments()[0];
    assert_relative_eq!(m[0], total, max_relative = 0.02);
    assert_relative_eq!(m[1], v0, epsilon = 0.02);
    assert_relative_eq!(m[2], sigma, max_relative = 0.03);
    let [left, right] = result.edges()[0];
    assert!(left < v0 - 2.0 * sigma && right > v0 + 2.0 * sigma);
    assert!(result.slope()[0] > 0.0);
}

#[test]
fn repeated_calls_are_identical() {
    let spectrum: Vec<f64> = gamma_noise(128, 30.0, 7)
        .iter()
        .zip(synthetic(128, 0.0, &[(40.0, 3.0, 20.0), (90.0, 2.0, 8.0)]))
        .map(|(n, s)| n + s)
        .collect();
    let config = MomentsConfig::new().with_n_averages(30.0);

    let first = compute_moments(&spectrum, &config).unwrap();
    let second = compute_moments(&spectrum, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn folded_echo_sets_aliasing_bit() {
    // Echo centred on bin 0, spilling over the Nyquist boundary.
    let n = 64;
    let spectrum: Vec<f64> = (0..n)
        .map(|i| {
            let d = i.min(n - i) as f64;
            1.0 + 50.0 * (-d * d / 8.0).exp()
        })
        .collect();

    let result = compute_moments(&spectrum, &MomentsConfig::default()).unwrap();
    assert_eq!(result.n_peaks(), 1);
    assert!(result.quality().contains(QualityFlags::ALIASED));
    assert!(result.quality().contains(QualityFlags::PRINCIPAL_ISOLATED));

    let m = result.moments()[0];
    assert_relative_eq!(m[1], -7.885, epsilon = 1e-6);
    let [left, right] = result.edges()[0];
    assert!(left < -7.885);
    assert!(right > -7.885);
}

#[test]
fn ranks_two_echoes_by_power() {
    let spectrum = synthetic(128, 1.0, &[(30.0, 2.0, 40.0), (90.0, 2.0, 100.0)]);
    let axis = VelocityAxis::new(-7.885, 7.885, 128).unwrap();

    let result = compute_moments(&spectrum, &MomentsConfig::default()).unwrap();
    assert_eq!(result.n_peaks(), 2);
    assert_eq!(result.n_slots(), 3);
    assert_eq!(result.quality(), QualityFlags::PRINCIPAL_ISOLATED);

    let moments = result.moments();
    assert!(moments[0][0] > moments[1][0]);
    assert_relative_eq!(moments[0][1], axis.velocity(90), epsilon = 1e-6);
    assert_relative_eq!(moments[1][1], axis.velocity(30), epsilon = 1e-6);
    assert_eq!(moments[2], [0.0; 5]);
    assert_eq!(result.slope()[2], 0.0);
    assert_eq!(result.edges()[2], [0.0, 0.0]);
}

#[test]
fn extra_echoes_set_more_peaks_bit() {
    let spectrum = synthetic(128, 1.0, &[(30.0, 2.0, 40.0), (90.0, 2.0, 100.0)]);
    let config = MomentsConfig::new().with_max_peaks(1);

    let result = compute_moments(&spectrum, &config).unwrap();
    assert_eq!(result.n_peaks(), 1);
    assert_eq!(result.n_slots(), 1);
    assert!(result.quality().contains(QualityFlags::MORE_PEAKS));
    assert!(result.moments()[0][0] > 0.0);
}

fn shelf_spectrum(dip: f64) -> Vec<f64> {
    let mut spectrum = vec![1.0; 96];
    spectrum[40..=50].fill(20.0);
    spectrum[51..=55].fill(dip);
    spectrum[56..=60].fill(5.0);
    spectrum
}

fn fixed_noise_config() -> MomentsConfig {
    MomentsConfig::new()
        .with_noise_mean(1.0)
        .with_noise_max(1.0)
        .with_smoothing(None)
}

#[test]
fn echo_sharing_hump_is_not_isolated() {
    // The dip stays above the noise mean but below the threshold.
    let result = compute_moments(&shelf_spectrum(1.1), &fixed_noise_config()).unwrap();
    assert_eq!(result.n_peaks(), 2);
    assert!(!result.quality().contains(QualityFlags::PRINCIPAL_ISOLATED));
}

#[test]
fn echo_separated_by_noise_is_isolated() {
    let result = compute_moments(&shelf_spectrum(1.0), &fixed_noise_config()).unwrap();
    assert_eq!(result.n_peaks(), 2);
    assert!(result.quality().contains(QualityFlags::PRINCIPAL_ISOLATED));

    let cleaned = result.cleaned_spectrum();
    assert_relative_eq!(cleaned[45], 19.0);
    assert_relative_eq!(cleaned[58], 4.0);
    assert_eq!(cleaned[53], 0.0);
    assert_relative_eq!(result.moments()[0][0], 11.0 * 19.0);
    assert_relative_eq!(result.moments()[1][0], 5.0 * 4.0);
}

#[test]
fn sub_threshold_bump_leaves_principal_isolated() {
    let mut spectrum = shelf_spectrum(1.1);
    spectrum[56..=60].fill(1.15);
    let result = compute_moments(&spectrum, &fixed_noise_config()).unwrap();
    assert_eq!(result.n_peaks(), 1);
    assert_eq!(result.quality(), QualityFlags::PRINCIPAL_ISOLATED);
}

#[test]
fn no_echo_reports_empty_arrays() {
    let spectrum = gamma_noise(128, 150.0, 3);
    let result = compute_moments(&spectrum, &MomentsConfig::default().with_max_peaks(2)).unwrap();
    assert_eq!(result.quality(), QualityFlags::NO_PEAK);
    assert_eq!(result.n_peaks(), 0);
    assert_eq!(result.moments(), &[[0.0; 5]; 2]);
    assert!(result.cleaned_spectrum().iter().all(|&v| v == 0.0));
}

#[test]
fn miscalibration_scales_power_only() {
    let spectrum = synthetic(128, 1.0, &[(64.3, 3.0, 100.0)]);
    let plain = compute_moments(&spectrum, &MomentsConfig::default()).unwrap();
    let shifted = compute_moments(
        &spectrum,
        &MomentsConfig::default().with_receiver_miscalibration_db(3.0),
    )
    .unwrap();

    let factor = 10f64.powf(0.3);
    let (a, b) = (plain.moments()[0], shifted.moments()[0]);
    assert_relative_eq!(b[0], a[0] * factor, max_relative = 1e-9);
    for k in 1..5 {
        assert_relative_eq!(b[k], a[k], epsilon = 1e-9);
    }
    assert_eq!(plain.edges(), shifted.edges());
    assert_relative_eq!(
        shifted.noise().mean(),
        plain.noise().mean() * factor,
        max_relative = 1e-12
    );
}

#[test]
fn noise_override_takes_priority() {
    let spectrum = synthetic(64, 1.0, &[(32.0, 2.0, 50.0)]);
    let config = MomentsConfig::new()
        .with_noise_mean(100.0)
        .with_noise_max(100.0);

    let result = compute_moments(&spectrum, &config).unwrap();
    assert_eq!(result.quality(), QualityFlags::NO_PEAK);
    assert_relative_eq!(result.noise().mean(), 100.0);
}

#[test]
fn wider_peak_never_narrows() {
    let spectrum = synthetic(128, 1.0, &[(64.0, 4.0, 30.0)]);
    let narrow = compute_moments(&spectrum, &MomentsConfig::default()).unwrap();
    let wide = compute_moments(&spectrum, &MomentsConfig::default().with_wider_peak(true)).unwrap();

    assert!(wide.moments()[0][0] >= narrow.moments()[0][0]);
    assert!(wide.edges()[0][0] <= narrow.edges()[0][0]);
    assert!(wide.edges()[0][1] >= narrow.edges()[0][1]);
}

#[test]
fn rejects_malformed_input() {
    let config = MomentsConfig::default();
    assert!(matches!(
        compute_moments(&[1.0], &config),
        Err(ColumnError::TooFewBins { n_bins: 1 })
    ));
    assert!(matches!(
        compute_moments(&[1.0, f64::INFINITY, 1.0], &config),
        Err(ColumnError::NonFiniteValue { index: 1 })
    ));
    assert!(matches!(
        compute_moments(&[1.0; 8], &config.clone().with_peak_min_snr(-10.0)),
        Err(ColumnError::Peak(_))
    ));
}

#[test]
fn batch_keeps_input_order() {
    let spectra: Vec<Vec<f64>> = [20.0, 40.0, 60.0, 80.0]
        .iter()
        .map(|&c| synthetic(128, 1.0, &[(c, 2.0, 50.0)]))
        .collect();
    let config = MomentsConfig::default();

    let batch = compute_moments_batch(&spectra, None, &config).unwrap();
    assert_eq!(batch.len(), 4);
    for (spectrum, result) in spectra.iter().zip(&batch) {
        assert_eq!(result, &compute_moments(spectrum, &config).unwrap());
    }
    assert!(batch.windows(2).all(|w| w[0].moments()[0][1] < w[1].moments()[0][1]));
}

#[test]
fn batch_applies_per_column_noise() {
    let spectra = vec![synthetic(64, 1.0, &[(32.0, 2.0, 50.0)]); 2];
    let noise = [NoiseEstimate::new(1.0, 1.0), NoiseEstimate::new(100.0, 100.0)];

    let batch = compute_moments_batch(&spectra, Some(&noise), &MomentsConfig::default()).unwrap();
    assert_eq!(batch[0].n_peaks(), 1);
    assert_eq!(batch[1].quality(), QualityFlags::NO_PEAK);
}

#[test]
fn batch_rejects_noise_shape_mismatch() {
    let spectra = vec![vec![1.0; 16]; 3];
    let noise = [NoiseEstimate::new(1.0, 1.0); 2];
    let err = compute_moments_batch(&spectra, Some(&noise), &MomentsConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ColumnError::NoiseShapeMismatch {
            spectra: 3,
            noise: 2
        }
    ));
}

#[test]
fn batch_reports_failing_column() {
    let mut spectra = vec![vec![1.0; 16]; 4];
    spectra[2][5] = f64::NAN;
    let err = compute_moments_batch(&spectra, None, &MomentsConfig::default()).unwrap_err();
    match err {
        ColumnError::Column { index, source } => {
            assert_eq!(index, 2);
            assert!(matches!(*source, ColumnError::NonFiniteValue { index: 5 }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn noise_batch_matches_single_estimates() {
    let spectra: Vec<Vec<f64>> = (0..5).map(|seed| gamma_noise(128, 60.0, seed)).collect();
    let batch = estimate_noise_batch(&spectra, 60.0).unwrap();
    for (spectrum, noise) in spectra.iter().zip(&batch) {
        assert_eq!(*noise, estimate_noise(spectrum, 60.0).unwrap());
    }
}
