//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: the coarse error every layer can convert into
//! - `InterpolationError`: failures raised by the interpolators

use thiserror::Error;

/// Categorised pricing errors.
///
/// The lowest common denominator of the workspace: layer-specific errors
/// (`MarketDataError`, `ProcessError`, `EngineError`, ...) provide
/// `From` conversions into this type so callers that do not care about the
/// precise failure can use a single error.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("negative spot".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: negative spot");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid market data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical procedure failed or produced a non-finite value.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Model assumptions violated.
    #[error("Model failure: {0}")]
    ModelFailure(String),

    /// Instrument not supported by the selected engine.
    #[error("Unsupported instrument: {0}")]
    UnsupportedInstrument(String),
}

/// Interpolation-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside the interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point
        x: f64,
        /// Lower end of the domain
        min: f64,
        /// Upper end of the domain
        max: f64,
    },

    /// Too few nodes to interpolate.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of nodes supplied
        got: usize,
        /// Minimum number of nodes
        need: usize,
    },

    /// Abscissae are not strictly increasing.
    #[error("Abscissae are not strictly increasing at index {index}")]
    NonMonotonicData {
        /// First offending index
        index: usize,
    },

    /// Shape mismatch or other malformed input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<InterpolationError> for PricingError {
    fn from(err: InterpolationError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        assert_eq!(
            PricingError::ModelFailure("negative variance".into()).to_string(),
            "Model failure: negative variance"
        );
        assert_eq!(
            PricingError::UnsupportedInstrument("digital".into()).to_string(),
            "Unsupported instrument: digital"
        );
    }

    #[test]
    fn test_interpolation_error_display() {
        let err = InterpolationError::InsufficientData { got: 1, need: 2 };
        assert_eq!(
            err.to_string(),
            "Insufficient data points: got 1, need at least 2"
        );

        let err = InterpolationError::NonMonotonicData { index: 3 };
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn test_interpolation_into_pricing_error() {
        let err: PricingError = InterpolationError::OutOfBounds {
            x: 4.0,
            min: 0.0,
            max: 1.0,
        }
        .into();
        match err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("4")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_errors_are_std_errors() {
        let _: &dyn std::error::Error = &PricingError::InvalidInput(String::new());
        let _: &dyn std::error::Error = &InterpolationError::InvalidInput(String::new());
    }
}
