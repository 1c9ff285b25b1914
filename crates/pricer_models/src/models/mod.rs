//! One-factor diffusion processes for Monte Carlo simulation.
//!
//! - [`StochasticProcess1D`]: drift, diffusion and the log-space update used
//!   by the path generator
//! - [`GeneralizedBlackScholesProcess`]: spot driven by risk-free and dividend
//!   curves and a Black volatility surface
//! - [`ConstantBlackScholesProcess`]: the same dynamics with constant
//!   parameters held in a [`MarketSnapshot`]
//! - [`StochasticProcessEnum`]: static dispatch over the two
//! - [`extract_constant_parameters`]: freezes a term-structure process at a
//!   horizon and strike
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::curves::CurveEnum;
//! use pricer_core::market_data::surfaces::VolSurfaceEnum;
//! use pricer_models::models::{
//!     extract_constant_parameters, GeneralizedBlackScholesProcess, StochasticProcess1D,
//!     StochasticProcessEnum,
//! };
//!
//! let process: StochasticProcessEnum = GeneralizedBlackScholesProcess::new(
//!     100.0,
//!     CurveEnum::flat(0.05),
//!     CurveEnum::flat(0.0),
//!     VolSurfaceEnum::flat(0.2),
//! )
//! .unwrap()
//! .into();
//!
//! let frozen = extract_constant_parameters(&process, 1.0, 100.0).unwrap();
//! assert_eq!(frozen.x0(), 100.0);
//! assert!((frozen.snapshot().volatility() - 0.2).abs() < 1e-12);
//! ```

mod black_scholes;
mod constant_black_scholes;
mod error;
mod extraction;
mod process;
mod process_enum;

pub use black_scholes::GeneralizedBlackScholesProcess;
pub use constant_black_scholes::{ConstantBlackScholesProcess, MarketSnapshot};
pub use error::ProcessError;
pub use extraction::extract_constant_parameters;
pub use process::StochasticProcess1D;
pub use process_enum::StochasticProcessEnum;
