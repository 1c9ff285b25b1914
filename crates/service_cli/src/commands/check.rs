//! Check command implementation

use anyhow::{Context, Result};
use pricer_models::models::StochasticProcess1D;
use tracing::info;

use super::price::build_process;
use crate::config::{OptionKind, RunConfig};

/// Validates a run and reports what a `price` call would do with it.
pub fn run(config: &RunConfig) -> Result<()> {
    let process = build_process(&config.market).context("building the Black-Scholes process")?;
    let option = &config.option;
    let engine = &config.engine;

    println!("Run configuration is valid");
    println!("  spot:           {}", process.x0());
    match option.kind {
        OptionKind::European => println!(
            "  contract:       European {:?}, strike {}, maturity {}",
            option.option_type, option.strike, option.maturity
        ),
        OptionKind::AverageStrike => println!(
            "  contract:       average-strike {:?}, {} fixings, maturity {}",
            option.option_type,
            option.fixings.len(),
            option.maturity
        ),
    }
    println!("  generator:      {:?}", engine.rng);
    println!(
        "  parameters:     {}",
        if engine.frozen { "frozen" } else { "term structure" }
    );
    match (engine.samples, engine.tolerance) {
        (Some(samples), _) => println!("  stopping rule:  {} samples", samples),
        (None, Some(tolerance)) => println!("  stopping rule:  tolerance {}", tolerance),
        (None, None) => {}
    }

    info!("Check complete");
    Ok(())
}
