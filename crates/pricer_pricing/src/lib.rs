//! # Pricer Pricing (L3: Monte Carlo Engines)
//!
//! Monte Carlo engines for European vanilla and discrete arithmetic
//! average-strike Asian options under Black-Scholes dynamics, with an
//! optional frozen-parameter mode.
//!
//! ## Layer Role
//!
//! - Layer 1 (`pricer_core`): yield curves and volatility surfaces
//! - Layer 2 (`pricer_models`): processes, frozen-parameter extraction,
//!   instruments
//! - Layer 3 (this crate): random sequences, path generation, statistics and
//!   the engines that tie them together
//!
//! ## Modules
//!
//! - [`rng`]: pseudo-random and Sobol Gaussian sequences behind the
//!   [`RngPolicy`](rng::RngPolicy) trait
//! - [`mc`]: time grids, Brownian bridge, path generator, path pricers,
//!   statistics and the [`McSimulation`](mc::McSimulation) driver
//! - [`engines`]: [`McEuropeanEngine`](engines::McEuropeanEngine),
//!   [`McDiscreteArithmeticAsEngine`](engines::McDiscreteArithmeticAsEngine)
//!   and their fluent builders
//!
//! ## Frozen-parameter mode
//!
//! A term-structure Black-Scholes process looks up curves and a surface at
//! every step. With `with_constant_parameters(true)` the engines replace it,
//! for path generation only, by a process whose rate, dividend yield and
//! volatility are frozen at the final grid time and the payoff strike. The
//! terminal distribution is unchanged; path-dependent payoffs see an
//! approximation whenever the term structures are not flat.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::market_data::curves::CurveEnum;
//! use pricer_core::market_data::surfaces::VolSurfaceEnum;
//! use pricer_models::instruments::{
//!     DiscreteAveragingAsianOption, Exercise, OptionType, Payoff,
//! };
//! use pricer_models::models::GeneralizedBlackScholesProcess;
//! use pricer_pricing::engines::MakeMcDiscreteArithmeticAsEngine;
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
//! let option = DiscreteAveragingAsianOption::arithmetic(
//!     vec![0.25, 0.5, 0.75, 1.0],
//!     Payoff::plain_vanilla(OptionType::Call, 100.0),
//!     Exercise::european(1.0).unwrap(),
//! )
//! .unwrap();
//!
//! let engine = MakeMcDiscreteArithmeticAsEngine::<PseudoRandom>::new(process.into())
//!     .with_samples(5_000)
//!     .unwrap()
//!     .with_seed(42)
//!     .with_constant_parameters(true)
//!     .build();
//!
//! let results = engine.calculate(&option).unwrap();
//! assert!(results.value > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod engines;
pub mod mc;
pub mod rng;
