//! Monte Carlo simulation framework.
//!
//! The building blocks the engines in [`crate::engines`] are assembled from:
//!
//! - [`TimeGrid`] / [`Path`]: simulation times and the levels sampled on them
//! - [`BrownianBridge`]: reorders Gaussian shocks so the first variate fixes
//!   the terminal level
//! - [`PathGenerator`]: evolves a [`StochasticProcessEnum`] along a grid
//! - [`PathPricer`]: turns one path into a discounted payoff
//! - [`StatisticsAccumulator`]: running mean and standard error
//! - [`MonteCarloModel`] / [`McSimulation`]: the sampling loop and its stopping
//!   rules
//! - [`McEngineConfig`]: every knob of an engine run
//!
//! # Architecture
//!
//! ```text
//! McSimulation::calculate
//! ├── path_generator()  ── TimeGrid + RngPolicy::Generator + BrownianBridge
//! ├── path_pricer()     ── EuropeanPathPricer | ArithmeticAverageStrikePathPricer
//! └── MonteCarloModel
//!     ├── add_samples()           (antithetic pairs averaged)
//!     ├── value_with_samples()    (fixed sample count)
//!     └── value_with_tolerance()  (batches sized from the current error)
//! ```
//!
//! [`StochasticProcessEnum`]: pricer_models::models::StochasticProcessEnum

mod brownian_bridge;
mod config;
mod error;
mod path_generator;
mod path_pricer;
mod simulation;
mod statistics;
mod time_grid;

pub use brownian_bridge::BrownianBridge;
pub use config::McEngineConfig;
pub use error::{EngineError, PathPricerError};
pub use path_generator::{PathGenerator, Sample};
pub use path_pricer::{ArithmeticAverageStrikePathPricer, EuropeanPathPricer, PathPricer};
pub use simulation::{McResults, McSimulation, MonteCarloModel, PolicyPathGenerator, MIN_SAMPLES};
pub use statistics::{GeneralStatistics, StatisticsAccumulator};
pub use time_grid::{Path, TimeGrid};
