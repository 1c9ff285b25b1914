//! Closed-form prices used to validate the Monte Carlo engines.
//!
//! - [`BlackScholes`]: European prices and sensitivities with a continuous
//!   dividend yield
//! - [`norm_cdf`], [`norm_pdf`]: standard normal distribution
//! - [`AnalyticalError`]: input validation failures

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
