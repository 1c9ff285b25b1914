//! Monte Carlo pricing engines.
//!
//! - [`McEuropeanEngine`]: European vanilla options on a uniform grid
//! - [`McDiscreteArithmeticAsEngine`]: discrete arithmetic average-strike
//!   Asian options on the grid of future fixings
//!
//! Both are normally obtained from their fluent builders,
//! [`MakeMcEuropeanEngine`] and [`MakeMcDiscreteArithmeticAsEngine`], and
//! implement [`McSimulation`](crate::mc::McSimulation).
//!
//! # Frozen parameters
//!
//! With `with_constant_parameters(true)` an engine replaces the
//! term-structure process by a [`ConstantBlackScholesProcess`] frozen at the
//! last grid time and the payoff strike before generating paths. Discounting
//! always uses the term-structure risk-free curve.
//!
//! ## Example
//!
//! ```rust
//! use pricer_core::market_data::curves::CurveEnum;
//! use pricer_core::market_data::surfaces::VolSurfaceEnum;
//! use pricer_models::instruments::{Exercise, OptionType, Payoff, VanillaOption};
//! use pricer_models::models::GeneralizedBlackScholesProcess;
//! use pricer_pricing::engines::MakeMcEuropeanEngine;
//! use pricer_pricing::mc::McSimulation;
//! use pricer_pricing::rng::PseudoRandom;
//!
//! let process = GeneralizedBlackScholesProcess::new(
//!     100.0,
//!     CurveEnum::flat(0.05),
//!     CurveEnum::flat(0.0),
//!     VolSurfaceEnum::flat(0.2),
//! )
//! .unwrap();
//!
//! let engine = MakeMcEuropeanEngine::<PseudoRandom>::new(process.into())
//!     .with_steps(1)
//!     .with_samples(10_000)
//!     .unwrap()
//!     .with_seed(42)
//!     .with_constant_parameters(true)
//!     .build()
//!     .unwrap();
//!
//! let option = VanillaOption::new(
//!     Payoff::plain_vanilla(OptionType::Call, 100.0),
//!     Exercise::european(1.0).unwrap(),
//! );
//! let results = engine.calculate(&option).unwrap();
//! assert!((results.value - 10.45).abs() < 1.0);
//! ```
//!
//! [`ConstantBlackScholesProcess`]: pricer_models::models::ConstantBlackScholesProcess

use pricer_models::models::{
    extract_constant_parameters, StochasticProcess1D, StochasticProcessEnum,
};
use tracing::debug;

use crate::mc::{EngineError, McEngineConfig, PathGenerator, TimeGrid};
use crate::rng::RngPolicy;

mod asian;
mod european;

pub use asian::{MakeMcDiscreteArithmeticAsEngine, McDiscreteArithmeticAsEngine};
pub use european::{MakeMcEuropeanEngine, McEuropeanEngine};

/// Process driving the paths: `process` itself, or its frozen counterpart
/// at `(time, strike)` when `constant_parameters` is set.
fn simulated_process(
    process: &StochasticProcessEnum,
    constant_parameters: bool,
    time: f64,
    strike: f64,
) -> Result<StochasticProcessEnum, EngineError> {
    if !constant_parameters {
        return Ok(process.clone());
    }
    let frozen = extract_constant_parameters(process, time, strike)?;
    let snapshot = frozen.snapshot();
    debug!(
        time,
        strike,
        spot = snapshot.spot(),
        rate = snapshot.rate(),
        dividend = snapshot.dividend(),
        volatility = snapshot.volatility(),
        "Frozen process parameters"
    );
    Ok(frozen.into())
}

/// Path generator over `grid` drawing `factors × steps` variates per path
/// from policy `R`.
fn policy_path_generator<R: RngPolicy>(
    process: StochasticProcessEnum,
    grid: TimeGrid,
    config: &McEngineConfig,
) -> Result<PathGenerator<R::Generator>, EngineError> {
    let dimension = process.factors() * grid.steps();
    let generator = R::make_sequence_generator(dimension, config.seed())?;
    PathGenerator::new(process, grid, generator, config.brownian_bridge())
}
