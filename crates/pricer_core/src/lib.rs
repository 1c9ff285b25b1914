//! # pricer_core: market data foundation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace and provides:
//! - Error types shared across layers (`types::error`)
//! - One- and two-dimensional interpolation (`math::interpolators`)
//! - Yield curves: `FlatCurve`, `InterpolatedCurve`, `CurveEnum` (`market_data::curves`)
//! - Volatility surfaces: `FlatVol`, `BlackVarianceCurve`, `InterpolatedVolSurface`,
//!   `VolSurfaceEnum` (`market_data::surfaces`)
//!
//! Times are year fractions measured from the valuation date, so no calendar
//! machinery lives here.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::curves::{CurveEnum, YieldCurve};
//! use pricer_core::market_data::surfaces::{VolSurfaceEnum, VolatilitySurface};
//!
//! let rates = CurveEnum::flat(0.05_f64);
//! let vols = VolSurfaceEnum::flat(0.20_f64);
//!
//! let r = rates.zero_rate(1.0).unwrap();
//! let var = vols.black_variance(100.0, 2.0).unwrap();
//! # assert!((r - 0.05).abs() < 1e-12);
//! # assert!((var - 0.08).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialisation for error types and flat term structures

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
