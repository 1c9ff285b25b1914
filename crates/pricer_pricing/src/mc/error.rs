//! Error types for the Monte Carlo engines.
//!
//! - [`PathPricerError`]: raised while turning one path into a payoff
//! - [`EngineError`]: configuration, instrument and simulation failures

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use pricer_models::models::ProcessError;
use thiserror::Error;

/// Failures raised by path pricers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathPricerError {
    /// Negative strike passed to a vanilla path pricer.
    #[error("strike less than zero not allowed")]
    NegativeStrike {
        /// Offending strike
        strike: f64,
    },

    /// Path too short to carry a payoff.
    #[error("the path cannot be empty")]
    EmptyPath,
}

/// Failures raised when configuring or running an engine.
///
/// Configuration errors carry the exact messages the builders and engine
/// constructors report; lower-layer failures are forwarded unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Neither a step count nor a step density was configured.
    #[error("no time steps provided")]
    NoTimeSteps,

    /// Both a step count and a step density were configured.
    #[error("both time steps and time steps per year were provided")]
    BothTimeSteps,

    /// A zero step count or step density.
    #[error("time steps must be positive")]
    NonPositiveTimeSteps,

    /// `with_samples` called after a tolerance was set.
    #[error("tolerance already set")]
    ToleranceAlreadySet,

    /// `with_absolute_tolerance` called after a sample count was set.
    #[error("number of samples already set")]
    SamplesAlreadySet,

    /// Tolerance requested under a policy that cannot estimate errors.
    #[error("chosen random generator policy does not allow an error estimate")]
    ErrorEstimateNotAllowed,

    /// Tolerance that is zero, negative or NaN.
    #[error("tolerance must be positive, got {tolerance}")]
    NonPositiveTolerance {
        /// Offending tolerance
        tolerance: f64,
    },

    /// Builder converted without any step setting.
    #[error("number of steps not given")]
    StepsNotGiven,

    /// Builder converted with both step settings.
    #[error("number of steps overspecified")]
    StepsOverspecified,

    /// Engine run without a sample count or a tolerance.
    #[error("neither tolerance nor number of samples set")]
    NoStoppingRule,

    /// Payoff is not a plain vanilla payoff.
    #[error("non-plain payoff given")]
    NonPlainPayoff,

    /// Exercise is not European.
    #[error("wrong exercise given")]
    WrongExercise,

    /// Asian option averaged other than arithmetically.
    #[error("not an arithmetic average option")]
    NotArithmeticAverage,

    /// Asian option with every fixing in the past.
    #[error("no future fixing times")]
    NoFutureFixings,

    /// Time grid could not be built.
    #[error("Invalid time grid: {reason}")]
    InvalidTimeGrid {
        /// Description
        reason: String,
    },

    /// Sequence generator and grid disagree on the number of variates.
    #[error("sequence generator dimensionality ({dimension}) != time steps ({steps})")]
    DimensionMismatch {
        /// Variates per draw
        dimension: usize,
        /// Steps on the grid times factors
        steps: usize,
    },

    /// Sequence generator asked for an unsupported dimension.
    #[error("Unsupported sequence dimension {dimension}: must be in [1, {max}]")]
    UnsupportedDimension {
        /// Requested dimension
        dimension: usize,
        /// Largest supported dimension
        max: usize,
    },

    /// Tolerance run hit its sample cap.
    #[error(
        "max number of samples ({max_samples}) reached, while error ({error}) is still above tolerance ({tolerance})"
    )]
    MaxSamplesReached {
        /// Sample cap
        max_samples: usize,
        /// Error estimate when the cap was hit
        error: f64,
        /// Requested tolerance
        tolerance: f64,
    },

    /// Fixed-sample run asked for fewer samples than already simulated.
    #[error("number of already simulated samples ({simulated}) greater than requested samples ({requested})")]
    TooFewSamplesRequested {
        /// Samples already accumulated
        simulated: usize,
        /// Samples requested
        requested: usize,
    },

    /// Statistics queried before any sample was added.
    #[error("empty sample set")]
    EmptySampleSet,

    /// Process construction or evolution failed.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// Curve or surface lookup failed.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    /// Path pricer failed.
    #[error(transparent)]
    PathPricer(#[from] PathPricerError),
}

impl From<EngineError> for PricingError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Process(e) => e.into(),
            EngineError::MarketData(e) => e.into(),
            EngineError::NonPlainPayoff
            | EngineError::WrongExercise
            | EngineError::NotArithmeticAverage => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
            EngineError::MaxSamplesReached { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_messages() {
        assert_eq!(EngineError::NoTimeSteps.to_string(), "no time steps provided");
        assert_eq!(
            EngineError::BothTimeSteps.to_string(),
            "both time steps and time steps per year were provided"
        );
        assert_eq!(EngineError::ToleranceAlreadySet.to_string(), "tolerance already set");
        assert_eq!(
            EngineError::SamplesAlreadySet.to_string(),
            "number of samples already set"
        );
        assert_eq!(
            EngineError::ErrorEstimateNotAllowed.to_string(),
            "chosen random generator policy does not allow an error estimate"
        );
        assert_eq!(EngineError::StepsNotGiven.to_string(), "number of steps not given");
        assert_eq!(
            EngineError::StepsOverspecified.to_string(),
            "number of steps overspecified"
        );
    }

    #[test]
    fn test_path_pricer_messages() {
        assert_eq!(
            PathPricerError::NegativeStrike { strike: -1.0 }.to_string(),
            "strike less than zero not allowed"
        );
        assert_eq!(PathPricerError::EmptyPath.to_string(), "the path cannot be empty");
    }

    #[test]
    fn test_lower_layer_errors_are_transparent() {
        let err: EngineError = ProcessError::BlackScholesRequired.into();
        assert_eq!(err.to_string(), "Black-Scholes process required");
        let err: EngineError = PathPricerError::EmptyPath.into();
        assert_eq!(err.to_string(), "the path cannot be empty");
    }

    #[test]
    fn test_into_pricing_error() {
        match PricingError::from(EngineError::NonPlainPayoff) {
            PricingError::UnsupportedInstrument(msg) => assert_eq!(msg, "non-plain payoff given"),
            e => panic!("Expected UnsupportedInstrument, got {:?}", e),
        }
        match PricingError::from(EngineError::from(ProcessError::BlackScholesRequired)) {
            PricingError::ModelFailure(_) => {}
            e => panic!("Expected ModelFailure, got {:?}", e),
        }
    }
}
