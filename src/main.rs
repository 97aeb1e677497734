mod cli;
mod config;
mod convert;
mod logging;
mod moments_cmd;
mod noise_cmd;
mod output;
mod spectra;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Noise(args) => noise_cmd::run(args),
        Command::Moments(args) => moments_cmd::run(args),
    }
}
