//! Noise command: Hildebrand-Sekhon noise floor of every spectrum.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use radmom_column::estimate_noise_batch;

use crate::cli::NoiseArgs;
use crate::output::{NoiseOutput, NoiseRecord, write_json};
use crate::spectra::read_spectra;

/// Run the noise estimation pipeline.
pub fn run(args: NoiseArgs) -> Result<()> {
    let _cmd = info_span!("noise").entered();

    info!(path = %args.input.display(), "reading spectra");
    let spectra = read_spectra(&args.input)?;
    info!(n_spectra = spectra.len(), "spectra loaded");

    let estimates =
        estimate_noise_batch(&spectra, args.averages).context("noise estimation failed")?;

    let output = NoiseOutput {
        n_averages: args.averages,
        spectra: estimates
            .iter()
            .enumerate()
            .map(|(i, noise)| NoiseRecord::new(i, noise))
            .collect(),
    };
    write_json(&output, args.output.as_deref())?;
    if let Some(path) = &args.output {
        info!(path = %path.display(), "noise estimates written");
    }

    Ok(())
}
