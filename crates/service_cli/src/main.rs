//! frozen-mc - Command Line Monte Carlo Pricing
//!
//! Prices European and discrete arithmetic average-strike options under
//! Black-Scholes, optionally freezing the term structures to constants.
//!
//! # Commands
//!
//! - `frozen-mc price --config run.toml` - Price the option described by a run file
//! - `frozen-mc check --config run.toml` - Validate a run file without pricing
//!
//! Settings resolve in order: run file, then `FROZEN_MC_*` environment
//! variables, then command-line flags.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use config::RunConfig;

/// Frozen-parameter Monte Carlo pricer
#[derive(Parser)]
#[command(name = "frozen-mc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the option described by a run file
    Price {
        /// Path to the run file
        #[arg(short, long, default_value = "run.toml")]
        config: PathBuf,

        /// Simulate with parameters frozen at maturity
        #[arg(long)]
        frozen: bool,

        /// Fixed number of samples (overrides any tolerance)
        #[arg(short, long)]
        samples: Option<usize>,

        /// Generator seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate a run file without pricing
    Check {
        /// Path to the run file
        #[arg(short, long, default_value = "run.toml")]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Price {
            config,
            frozen,
            samples,
            seed,
        } => {
            let mut run = load_run(&config)?;
            if frozen {
                run.engine.frozen = true;
            }
            if let Some(samples) = samples {
                run.engine.samples = Some(samples);
                run.engine.tolerance = None;
            }
            if seed.is_some() {
                run.engine.seed = seed;
            }
            run.validate()?;
            init_tracing(&run.log_level, cli.verbose);
            debug!(path = %config.display(), "Loaded run file");
            commands::price::run(&run)
        }
        Commands::Check { config } => {
            let run = load_run(&config)?;
            run.validate()?;
            init_tracing(&run.log_level, cli.verbose);
            info!(path = %config.display(), "Checking run file");
            commands::check::run(&run)
        }
    }
}

fn load_run(path: &std::path::Path) -> anyhow::Result<RunConfig> {
    let run = RunConfig::load(path)
        .with_context(|| format!("loading run file {}", path.display()))?
        .with_env_override()?;
    Ok(run)
}

fn init_tracing(level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { level };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(fmt::layer())
        .init();
}
