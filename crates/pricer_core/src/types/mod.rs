//! Shared value types for the pricing layers.
//!
//! Only the error vocabulary lives here: every other quantity in the
//! workspace is a plain `f64` year fraction or price.

pub mod error;

pub use error::{InterpolationError, PricingError};
