//! Moments command: peaks, moments and quality of every spectrum.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use radmom_column::{QualityFlags, compute_moments_batch};

use crate::cli::MomentsArgs;
use crate::config::RadmomConfig;
use crate::convert;
use crate::output::{ConfigSummary, MomentsOutput, SpectrumRecord, write_json};
use crate::spectra::read_spectra;

/// Run the moment retrieval pipeline.
pub fn run(args: MomentsArgs) -> Result<()> {
    let _cmd = info_span!("moments").entered();

    // 1. Load TOML, falling back to defaults
    let config: RadmomConfig = match &args.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            toml::from_str(&toml_str).context("failed to parse TOML config")?
        }
        None => RadmomConfig::default(),
    };
    let moments_cfg = convert::build_moments_config(&config, args.max_peaks)?;

    // 2. Read spectra
    info!(path = %args.input.display(), "reading spectra");
    let spectra = read_spectra(&args.input)?;
    info!(n_spectra = spectra.len(), "spectra loaded");

    // 3. Retrieve moments
    let results = compute_moments_batch(&spectra, None, &moments_cfg)
        .context("moment retrieval failed")?;

    let n_empty = results
        .iter()
        .filter(|r| r.quality().contains(QualityFlags::NO_PEAK))
        .count();
    if n_empty == results.len() {
        warn!("no peak found in any spectrum");
    }
    info!(n_empty, "moments retrieved");

    // 4. Write JSON
    let output = MomentsOutput {
        config: ConfigSummary::from(&moments_cfg),
        spectra: results
            .into_iter()
            .enumerate()
            .map(|(i, r)| SpectrumRecord::new(i, r))
            .collect(),
    };
    write_json(&output, args.output.as_deref())?;
    if let Some(path) = &args.output {
        info!(path = %path.display(), "moments written");
    }

    Ok(())
}
