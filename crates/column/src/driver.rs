//! Per-spectrum moment retrieval.

use std::borrow::Cow;

use radmom_moments::{MomentSet, VelocityAxis, integrate_peak};
use radmom_noise::{NoiseError, NoiseEstimate, hildebrand_sekhon};
use radmom_peaks::segment_peaks;
use radmom_smooth::SavitzkyGolay;
use tracing::debug;

use crate::config::MomentsConfig;
use crate::error::ColumnError;
use crate::quality::QualityFlags;
use crate::result::ColumnResult;

/// Estimates the noise floor of one spectrum with Hildebrand-Sekhon.
///
/// # Errors
///
/// Returns [`ColumnError::TooFewBins`] or [`ColumnError::NonFiniteValue`]
/// for malformed spectra and [`ColumnError::InvalidAveraging`] for a
/// non-positive `n_averages`.
pub fn estimate_noise(spectrum: &[f64], n_averages: f64) -> Result<NoiseEstimate, ColumnError> {
    validate_spectrum(spectrum)?;
    if !n_averages.is_finite() || n_averages <= 0.0 {
        return Err(ColumnError::InvalidAveraging { n_averages });
    }
    Ok(hildebrand_sekhon(spectrum, n_averages)?)
}

/// Retrieves noise, peaks and per-peak moments from one linear spectrum.
///
/// The spectrum is sampled on `[min_velocity, max_velocity)` in equal
/// bins. Peaks are searched on the smoothed spectrum; moments are
/// integrated over the unsmoothed power above the noise mean.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the spectrum has
/// fewer than two bins or a non-finite value, or noise estimation fails.
/// Spectra without a peak are not errors: they yield
/// [`QualityFlags::NO_PEAK`] and zero moment arrays.
#[tracing::instrument(skip_all, fields(n_bins = spectrum.len()))]
pub fn compute_moments(
    spectrum: &[f64],
    config: &MomentsConfig,
) -> Result<ColumnResult, ColumnError> {
    config.validate()?;
    validate_spectrum(spectrum)?;
    let axis = VelocityAxis::new(config.min_velocity(), config.max_velocity(), spectrum.len())?;

    let factor = config.miscalibration_factor();
    let noise = resolve_noise(spectrum, config)?.scaled(factor);
    let scaled: Vec<f64> = spectrum.iter().map(|s| s * factor).collect();

    let smoothed = match config.smoothing() {
        Some(smoothing) => Cow::Owned(SavitzkyGolay::new(smoothing)?.apply(&scaled)),
        None => Cow::Borrowed(scaled.as_slice()),
    };
    let segmentation = segment_peaks(&smoothed, &noise, config.segment())?;

    let mut cleaned = vec![0.0; spectrum.len()];
    for peak in segmentation.peaks() {
        for i in peak.range().indices() {
            cleaned[i] = (scaled[i] - noise.mean()).max(0.0);
        }
    }

    let sets = segmentation
        .peaks()
        .iter()
        .map(|peak| integrate_peak(&cleaned, peak.range(), &axis))
        .collect::<Result<Vec<MomentSet>, _>>()?;

    let mut quality = QualityFlags::empty();
    quality.set(QualityFlags::ALIASED, segmentation.aliased());
    quality.set(QualityFlags::MORE_PEAKS, segmentation.truncated());
    quality.set(QualityFlags::NO_PEAK, segmentation.is_empty());
    quality.set(
        QualityFlags::PRINCIPAL_ISOLATED,
        segmentation.principal_isolated(),
    );

    debug!(
        n_peaks = sets.len(),
        n_candidates = segmentation.n_candidates(),
        quality = quality.bits(),
        "spectrum processed"
    );

    Ok(ColumnResult::new(
        cleaned,
        &sets,
        config.segment().max_peaks(),
        quality,
        noise,
    ))
}

/// Resolves the noise level before miscalibration scaling.
///
/// Caller-supplied values win. A missing maximum is `factor * mean` when
/// the distance factor is positive, otherwise the Hildebrand-Sekhon
/// maximum. The estimate runs at most once.
fn resolve_noise(spectrum: &[f64], config: &MomentsConfig) -> Result<NoiseEstimate, ColumnError> {
    let mut measured: Option<NoiseEstimate> = None;
    let mut measure = || -> Result<NoiseEstimate, NoiseError> {
        if let Some(estimate) = measured {
            return Ok(estimate);
        }
        let estimate = hildebrand_sekhon(spectrum, config.n_averages())?;
        measured = Some(estimate);
        Ok(estimate)
    };

    let mean = match config.noise_mean() {
        Some(mean) => mean,
        None => measure()?.mean(),
    };
    let factor = config.noise_distance_factor();
    let max = match config.noise_max() {
        Some(max) => max,
        None if factor > 0.0 => factor * mean,
        None => measure()?.max(),
    };

    debug!(mean, max, "noise resolved");
    Ok(NoiseEstimate::new(mean, max))
}

fn validate_spectrum(spectrum: &[f64]) -> Result<(), ColumnError> {
    if spectrum.len() < 2 {
        return Err(ColumnError::TooFewBins {
            n_bins: spectrum.len(),
        });
    }
    if let Some(index) = spectrum.iter().position(|v| !v.is_finite()) {
        return Err(ColumnError::NonFiniteValue { index });
    }
    Ok(())
}
