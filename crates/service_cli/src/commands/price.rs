//! Price command implementation
//!
//! Builds the market and the contract described by a run file, prices it
//! with the configured Monte Carlo engine and prints the result next to the
//! Black-Scholes reference.

use anyhow::{Context, Result};
use pricer_core::market_data::curves::{CurveEnum, CurveInterpolation, InterpolatedCurve};
use pricer_core::market_data::surfaces::{BlackVarianceCurve, VolSurfaceEnum};
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{
    AverageType, DiscreteAveragingAsianOption, Exercise, Payoff, VanillaOption,
};
use pricer_models::models::{
    extract_constant_parameters, GeneralizedBlackScholesProcess, StochasticProcessEnum,
};
use pricer_pricing::engines::{MakeMcDiscreteArithmeticAsEngine, MakeMcEuropeanEngine};
use pricer_pricing::mc::{McResults, McSimulation};
use pricer_pricing::rng::{LowDiscrepancy, PseudoRandom, RngPolicy};
use tracing::info;

use crate::config::{EngineConfig, MarketConfig, OptionKind, RngKind, RunConfig};

/// Run the price command
pub fn run(config: &RunConfig) -> Result<()> {
    info!(
        kind = ?config.option.kind,
        rng = ?config.engine.rng,
        frozen = config.engine.frozen,
        "Starting pricing"
    );

    let process = build_process(&config.market).context("building the Black-Scholes process")?;
    let results = match (config.option.kind, config.engine.rng) {
        (OptionKind::European, RngKind::PseudoRandom) => {
            price_european::<PseudoRandom>(config, process.clone())
        }
        (OptionKind::European, RngKind::LowDiscrepancy) => {
            price_european::<LowDiscrepancy>(config, process.clone())
        }
        (OptionKind::AverageStrike, RngKind::PseudoRandom) => {
            price_average_strike::<PseudoRandom>(config, process.clone())
        }
        (OptionKind::AverageStrike, RngKind::LowDiscrepancy) => {
            price_average_strike::<LowDiscrepancy>(config, process.clone())
        }
    }?;

    let reference = match config.option.kind {
        OptionKind::European => Some(black_scholes_reference(config, &process)?),
        OptionKind::AverageStrike => None,
    };
    print_table(&results, reference);

    info!("Pricing complete");
    Ok(())
}

/// Term-structure process from the market section.
pub(crate) fn build_process(market: &MarketConfig) -> Result<StochasticProcessEnum> {
    let rates = match &market.rate_pillars {
        Some(pillars) => {
            let (times, values): (Vec<f64>, Vec<f64>) = pillars.iter().copied().unzip();
            CurveEnum::Interpolated(
                InterpolatedCurve::new(&times, &values, CurveInterpolation::Linear, true)
                    .context("invalid rate pillars")?,
            )
        }
        None => CurveEnum::flat(market.rate),
    };
    let vols = match &market.vol_pillars {
        Some(pillars) => {
            let (times, values): (Vec<f64>, Vec<f64>) = pillars.iter().copied().unzip();
            VolSurfaceEnum::TermStructure(
                BlackVarianceCurve::new(&times, &values, true).context("invalid vol pillars")?,
            )
        }
        None => VolSurfaceEnum::flat(market.volatility),
    };

    let process = GeneralizedBlackScholesProcess::new(
        market.spot,
        rates,
        CurveEnum::flat(market.dividend),
        vols,
    )?;
    Ok(process.into())
}

fn price_european<R: RngPolicy>(
    config: &RunConfig,
    process: StochasticProcessEnum,
) -> Result<McResults> {
    let option = &config.option;
    let instrument = VanillaOption::new(
        Payoff::plain_vanilla(option.option_type, option.strike),
        Exercise::european(option.maturity).context("invalid maturity")?,
    );

    let engine = &config.engine;
    let mut builder = MakeMcEuropeanEngine::<R>::new(process)
        .with_antithetic_variate(engine.antithetic)
        .with_constant_parameters(engine.frozen);
    if let Some(steps) = engine.steps {
        builder = builder.with_steps(steps);
    }
    if let Some(steps) = engine.steps_per_year {
        builder = builder.with_steps_per_year(steps);
    }
    if let Some(enabled) = engine.brownian_bridge {
        builder = builder.with_brownian_bridge(enabled);
    }
    if let Some(seed) = engine.seed {
        builder = builder.with_seed(seed);
    }
    if let Some(max) = engine.max_samples {
        builder = builder.with_max_samples(max);
    }
    builder = apply_stopping_rule(engine, builder, |b, n| b.with_samples(n), |b, tol| {
        b.with_absolute_tolerance(tol)
    })?;

    let engine = builder.build().context("building the European engine")?;
    engine
        .calculate(&instrument)
        .context("pricing the European option")
}

fn price_average_strike<R: RngPolicy>(
    config: &RunConfig,
    process: StochasticProcessEnum,
) -> Result<McResults> {
    let option = &config.option;
    let instrument = DiscreteAveragingAsianOption::new(
        AverageType::Arithmetic,
        option.running_sum,
        option.past_fixings,
        option.fixings.clone(),
        Payoff::plain_vanilla(option.option_type, option.strike),
        Exercise::european(option.maturity).context("invalid maturity")?,
    )
    .context("invalid average-strike option")?;

    let engine = &config.engine;
    let mut builder = MakeMcDiscreteArithmeticAsEngine::<R>::new(process)
        .with_antithetic_variate(engine.antithetic)
        .with_constant_parameters(engine.frozen);
    if let Some(enabled) = engine.brownian_bridge {
        builder = builder.with_brownian_bridge(enabled);
    }
    if let Some(seed) = engine.seed {
        builder = builder.with_seed(seed);
    }
    if let Some(max) = engine.max_samples {
        builder = builder.with_max_samples(max);
    }
    builder = apply_stopping_rule(engine, builder, |b, n| b.with_samples(n), |b, tol| {
        b.with_absolute_tolerance(tol)
    })?;

    builder
        .build()
        .calculate(&instrument)
        .context("pricing the average-strike option")
}

/// Sets the sample count or the tolerance on a builder.
fn apply_stopping_rule<B, E>(
    engine: &EngineConfig,
    builder: B,
    with_samples: impl FnOnce(B, usize) -> std::result::Result<B, E>,
    with_tolerance: impl FnOnce(B, f64) -> std::result::Result<B, E>,
) -> Result<B>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let builder = match (engine.samples, engine.tolerance) {
        (Some(samples), _) => with_samples(builder, samples)?,
        (None, Some(tolerance)) => with_tolerance(builder, tolerance)?,
        (None, None) => builder,
    };
    Ok(builder)
}

/// Closed-form price with the parameters a frozen run would use.
fn black_scholes_reference(config: &RunConfig, process: &StochasticProcessEnum) -> Result<f64> {
    let option = &config.option;
    let frozen = extract_constant_parameters(process, option.maturity, option.strike)
        .context("freezing the process for the reference price")?;
    let model = BlackScholes::from_snapshot(frozen.snapshot())?;
    Ok(model.price(option.option_type, option.strike, option.maturity))
}

fn print_table(results: &McResults, reference: Option<f64>) {
    let error = results
        .error_estimate
        .map_or_else(|| "n/a".to_string(), |e| format!("{:.6}", e));
    let reference = reference.map_or_else(|| "n/a".to_string(), |r| format!("{:.6}", r));

    println!("\n┌──────────────────┬──────────────────┐");
    println!("│ MC price         │ {:>16.6} │", results.value);
    println!("│ Error estimate   │ {:>16} │", error);
    println!("│ Samples          │ {:>16} │", results.samples);
    println!("│ Black-Scholes    │ {:>16} │", reference);
    println!("└──────────────────┴──────────────────┘");
}
