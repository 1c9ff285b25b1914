//! Instrument error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Failures raised when building instruments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Non-finite strike.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// Offending strike
        strike: f64,
    },

    /// Negative or non-finite exercise or fixing time.
    #[error("Invalid time: t = {time}")]
    InvalidTime {
        /// Offending time
        time: f64,
    },

    /// An exercise or fixing schedule with no dates.
    #[error("Empty {what} schedule")]
    EmptySchedule {
        /// Which schedule
        what: &'static str,
    },

    /// Schedule dates not strictly increasing.
    #[error("{what} schedule not sorted at index {index}")]
    UnsortedSchedule {
        /// Which schedule
        what: &'static str,
        /// First offending index
        index: usize,
    },

    /// Other invalid argument.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description
        message: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Validates a schedule of year fractions: non-empty, finite, non-negative
/// unless `allow_negative`, strictly increasing.
pub(crate) fn validate_schedule(
    times: &[f64],
    what: &'static str,
    allow_negative: bool,
) -> Result<(), InstrumentError> {
    if times.is_empty() {
        return Err(InstrumentError::EmptySchedule { what });
    }
    if let Some(&t) = times
        .iter()
        .find(|&&t| !t.is_finite() || (!allow_negative && t < 0.0))
    {
        return Err(InstrumentError::InvalidTime { time: t });
    }
    match times.windows(2).position(|w| w[1] <= w[0]) {
        Some(i) => Err(InstrumentError::UnsortedSchedule { what, index: i + 1 }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            InstrumentError::EmptySchedule { what: "fixing" }.to_string(),
            "Empty fixing schedule"
        );
        assert_eq!(
            InstrumentError::UnsortedSchedule {
                what: "exercise",
                index: 2
            }
            .to_string(),
            "exercise schedule not sorted at index 2"
        );
    }

    #[test]
    fn test_validate_schedule() {
        assert!(validate_schedule(&[0.5, 1.0], "fixing", false).is_ok());
        assert!(validate_schedule(&[-0.5, 1.0], "fixing", true).is_ok());
        assert_eq!(
            validate_schedule(&[], "fixing", false).unwrap_err(),
            InstrumentError::EmptySchedule { what: "fixing" }
        );
        assert_eq!(
            validate_schedule(&[-0.5, 1.0], "fixing", false).unwrap_err(),
            InstrumentError::InvalidTime { time: -0.5 }
        );
        assert_eq!(
            validate_schedule(&[1.0, 1.0], "fixing", false).unwrap_err(),
            InstrumentError::UnsortedSchedule {
                what: "fixing",
                index: 1
            }
        );
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = InstrumentError::InvalidTime { time: -1.0 }.into();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }
}
