//! JSON output structures for the command-line tool.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use radmom_column::{ColumnResult, MomentsConfig, NoiseEstimate};

/// Output of the `noise` subcommand.
#[derive(Debug, Serialize)]
pub struct NoiseOutput {
    pub n_averages: f64,
    pub spectra: Vec<NoiseRecord>,
}

/// Noise floor of one spectrum.
#[derive(Debug, Serialize)]
pub struct NoiseRecord {
    pub index: usize,
    pub noise_mean: f64,
    pub noise_max: f64,
}

impl NoiseRecord {
    pub fn new(index: usize, noise: &NoiseEstimate) -> Self {
        Self {
            index,
            noise_mean: noise.mean(),
            noise_max: noise.max(),
        }
    }
}

/// Output of the `moments` subcommand.
#[derive(Debug, Serialize)]
pub struct MomentsOutput {
    pub config: ConfigSummary,
    pub spectra: Vec<SpectrumRecord>,
}

/// Summary of the configuration used.
#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    pub min_velocity: f64,
    pub max_velocity: f64,
    pub n_averages: f64,
    pub max_peaks: usize,
    pub peak_min_snr: f64,
    pub smoothing: bool,
    pub receiver_miscalibration_db: f64,
}

impl From<&MomentsConfig> for ConfigSummary {
    fn from(config: &MomentsConfig) -> Self {
        Self {
            min_velocity: config.min_velocity(),
            max_velocity: config.max_velocity(),
            n_averages: config.n_averages(),
            max_peaks: config.segment().max_peaks(),
            peak_min_snr: config.segment().peak_min_snr(),
            smoothing: config.smoothing().is_some(),
            receiver_miscalibration_db: config.receiver_miscalibration_db(),
        }
    }
}

/// Retrieval results of one spectrum.
#[derive(Debug, Serialize)]
pub struct SpectrumRecord {
    pub index: usize,
    pub quality: u8,
    pub n_peaks: usize,
    pub noise_mean: f64,
    pub noise_max: f64,
    /// `[m0, m1, m2, m3, m4]` per peak slot.
    pub moments: Vec<[f64; 5]>,
    pub slope: Vec<f64>,
    pub edges: Vec<[f64; 2]>,
    pub cleaned_spectrum: Vec<f64>,
}

impl SpectrumRecord {
    pub fn new(index: usize, result: ColumnResult) -> Self {
        Self {
            index,
            quality: result.quality().bits(),
            n_peaks: result.n_peaks(),
            noise_mean: result.noise().mean(),
            noise_max: result.noise().max(),
            moments: result.moments().to_vec(),
            slope: result.slope().to_vec(),
            edges: result.edges().to_vec(),
            cleaned_spectrum: result.into_cleaned_spectrum(),
        }
    }
}

/// Writes `value` as pretty JSON to `path`, or to stdout if `None`.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    match path {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("failed to write output: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write to stdout")
        }
    }
}
