//! # Pricer Models (L2: Business Logic)
//!
//! One-factor diffusion processes, instruments and closed-form prices.
//!
//! This crate provides:
//! - The [`StochasticProcess1D`](models::StochasticProcess1D) contract used by
//!   the Monte Carlo path generator
//! - A Black-Scholes process driven by yield curves and a volatility surface
//! - The frozen-parameter process and the extractor that builds it from a
//!   term-structure process
//! - Payoffs, exercises, vanilla and discrete-averaging Asian options
//! - Analytical Black-Scholes prices for validation
//!
//! ## Design Principles
//!
//! - **Enum-based processes and instruments** for static dispatch, with
//!   typed `as_*` capability queries instead of downcasts
//! - **Validated constructors** returning `Result`; value objects are
//!   immutable once built

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
