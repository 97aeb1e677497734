use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Radar Doppler spectrum moment retrieval.
#[derive(Parser)]
#[command(
    name = "radmom",
    version,
    about = "Noise, peaks and moments of radar Doppler spectra"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Estimate the noise floor of each spectrum.
    Noise(NoiseArgs),
    /// Retrieve peaks and moments of each spectrum.
    Moments(MomentsArgs),
}

/// Arguments for the `noise` subcommand.
#[derive(clap::Args)]
pub struct NoiseArgs {
    /// Path to the spectra text file (one spectrum per line).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Number of spectral averages.
    #[arg(short = 'n', long, default_value_t = 150.0)]
    pub averages: f64,

    /// Path for JSON output; stdout if omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `moments` subcommand.
#[derive(clap::Args)]
pub struct MomentsArgs {
    /// Path to the spectra text file (one spectrum per line).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file; built-in defaults if omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the maximum number of peaks from config.
    #[arg(long)]
    pub max_peaks: Option<usize>,

    /// Path for JSON output; stdout if omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
