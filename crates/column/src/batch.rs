//! Parallel processing of many spectra.

use rayon::prelude::*;
use radmom_noise::NoiseEstimate;
use tracing::info;

use crate::config::MomentsConfig;
use crate::driver::{compute_moments, estimate_noise};
use crate::error::ColumnError;
use crate::result::ColumnResult;

/// Processes every spectrum with [`compute_moments`] in parallel.
///
/// `noise`, if given, supplies the noise level of each spectrum and
/// overrides any noise settings in `config`. Results keep input order.
///
/// # Errors
///
/// Returns [`ColumnError::NoiseShapeMismatch`] if `noise` does not have
/// one entry per spectrum. A failing spectrum aborts the batch with
/// [`ColumnError::Column`] carrying its index.
#[tracing::instrument(skip_all, fields(n_spectra = spectra.len()))]
pub fn compute_moments_batch<S>(
    spectra: &[S],
    noise: Option<&[NoiseEstimate]>,
    config: &MomentsConfig,
) -> Result<Vec<ColumnResult>, ColumnError>
where
    S: AsRef<[f64]> + Sync,
{
    config.validate()?;
    if let Some(noise) = noise {
        if noise.len() != spectra.len() {
            return Err(ColumnError::NoiseShapeMismatch {
                spectra: spectra.len(),
                noise: noise.len(),
            });
        }
    }

    let results = spectra
        .par_iter()
        .enumerate()
        .map(|(index, spectrum)| {
            let outcome = match noise {
                Some(noise) => {
                    let column_config = config
                        .clone()
                        .with_noise_mean(noise[index].mean())
                        .with_noise_max(noise[index].max());
                    compute_moments(spectrum.as_ref(), &column_config)
                }
                None => compute_moments(spectrum.as_ref(), config),
            };
            outcome.map_err(|e| ColumnError::Column {
                index,
                source: Box::new(e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(n_spectra = results.len(), "batch processed");
    Ok(results)
}

/// Estimates the noise floor of every spectrum in parallel.
///
/// # Errors
///
/// A failing spectrum aborts the batch with [`ColumnError::Column`].
pub fn estimate_noise_batch<S>(
    spectra: &[S],
    n_averages: f64,
) -> Result<Vec<NoiseEstimate>, ColumnError>
where
    S: AsRef<[f64]> + Sync,
{
    spectra
        .par_iter()
        .enumerate()
        .map(|(index, spectrum)| {
            estimate_noise(spectrum.as_ref(), n_averages).map_err(|e| ColumnError::Column {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}
