//! Path pricers: one discounted payoff per simulated path.

use pricer_models::instruments::{OptionType, PlainVanillaPayoff};

use super::error::PathPricerError;
use super::time_grid::Path;

/// Maps a simulated path to a discounted payoff.
pub trait PathPricer {
    /// Discounted payoff of `path`.
    fn price(&self, path: &Path) -> Result<f64, PathPricerError>;
}

/// Vanilla payoff on the terminal level of the path.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::OptionType;
/// use pricer_pricing::mc::{EuropeanPathPricer, Path, PathPricer};
///
/// let pricer = EuropeanPathPricer::new(OptionType::Call, 100.0, 0.95).unwrap();
/// let path = Path::new(vec![0.0, 1.0], vec![100.0, 110.0]).unwrap();
/// assert!((pricer.price(&path).unwrap() - 9.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuropeanPathPricer {
    payoff: PlainVanillaPayoff,
    discount: f64,
}

impl EuropeanPathPricer {
    /// Builds the pricer.
    ///
    /// # Errors
    ///
    /// `NegativeStrike` when `strike < 0`.
    pub fn new(
        option_type: OptionType,
        strike: f64,
        discount: f64,
    ) -> Result<Self, PathPricerError> {
        if strike < 0.0 {
            return Err(PathPricerError::NegativeStrike { strike });
        }
        Ok(Self {
            payoff: PlainVanillaPayoff::new(option_type, strike),
            discount,
        })
    }

    /// Discount factor applied to the payoff.
    #[inline]
    pub fn discount(&self) -> f64 {
        self.discount
    }
}

impl PathPricer for EuropeanPathPricer {
    fn price(&self, path: &Path) -> Result<f64, PathPricerError> {
        let terminal = path.back().ok_or(PathPricerError::EmptyPath)?;
        Ok(self.payoff.value(terminal) * self.discount)
    }
}

/// Vanilla payoff on the terminal level struck at the arithmetic average of
/// the fixings.
///
/// Every path point after the origin is a fixing; the origin is one only
/// when the first mandatory time of the path is `0`. Past fixings enter
/// through their running sum and count:
///
/// ```text
/// A = (running_sum + Σ fixings on path) / (past_fixings + fixings on path)
/// payoff = discount * max(w * (S_T - A), 0)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArithmeticAverageStrikePathPricer {
    option_type: OptionType,
    discount: f64,
    running_sum: f64,
    past_fixings: usize,
}

impl ArithmeticAverageStrikePathPricer {
    /// Builds the pricer.
    pub fn new(
        option_type: OptionType,
        discount: f64,
        running_sum: f64,
        past_fixings: usize,
    ) -> Self {
        Self {
            option_type,
            discount,
            running_sum,
            past_fixings,
        }
    }

    /// Discount factor applied to the payoff.
    #[inline]
    pub fn discount(&self) -> f64 {
        self.discount
    }
}

impl PathPricer for ArithmeticAverageStrikePathPricer {
    fn price(&self, path: &Path) -> Result<f64, PathPricerError> {
        let n = path.len();
        if n < 2 {
            return Err(PathPricerError::EmptyPath);
        }
        let values = path.values();

        let (sum, fixings) = if path.mandatory_times().first() == Some(&0.0) {
            (values.iter().sum::<f64>(), n)
        } else {
            (values[1..].iter().sum::<f64>(), n - 1)
        };
        let average = (self.running_sum + sum) / (self.past_fixings + fixings) as f64;

        let terminal = values[n - 1];
        let payoff = PlainVanillaPayoff::new(self.option_type, average);
        Ok(payoff.value(terminal) * self.discount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::TimeGrid;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn path(times: &[f64], values: &[f64]) -> Path {
        Path::new(times.to_vec(), values.to_vec()).unwrap()
    }

    // ================================================================
    // EuropeanPathPricer
    // ================================================================

    #[test]
    fn test_european_rejects_negative_strike() {
        assert_eq!(
            EuropeanPathPricer::new(OptionType::Call, -1.0, 1.0).unwrap_err(),
            PathPricerError::NegativeStrike { strike: -1.0 }
        );
        assert!(EuropeanPathPricer::new(OptionType::Put, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_european_rejects_empty_path() {
        let pricer = EuropeanPathPricer::new(OptionType::Call, 100.0, 1.0).unwrap();
        assert_eq!(
            pricer.price(&path(&[], &[])).unwrap_err(),
            PathPricerError::EmptyPath
        );
    }

    #[test]
    fn test_european_uses_terminal_level_only() {
        let pricer = EuropeanPathPricer::new(OptionType::Put, 100.0, 0.9).unwrap();
        let p = path(&[0.0, 0.5, 1.0], &[100.0, 50.0, 95.0]);
        assert_relative_eq!(pricer.price(&p).unwrap(), 4.5, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_european_payoff(
            strike in 0.0f64..200.0,
            terminal in 1e-3f64..400.0,
            discount in 0.1f64..1.0,
        ) {
            let p = path(&[0.0, 1.0], &[100.0, terminal]);
            let call = EuropeanPathPricer::new(OptionType::Call, strike, discount).unwrap();
            let put = EuropeanPathPricer::new(OptionType::Put, strike, discount).unwrap();
            let c = call.price(&p).unwrap();
            let q = put.price(&p).unwrap();
            prop_assert!(c >= 0.0 && q >= 0.0);
            prop_assert!((c - discount * (terminal - strike).max(0.0)).abs() < 1e-12);
            prop_assert!((c - q - discount * (terminal - strike)).abs() < 1e-9);
        }
    }

    // ================================================================
    // ArithmeticAverageStrikePathPricer
    // ================================================================

    #[test]
    fn test_average_strike_rejects_short_path() {
        let pricer = ArithmeticAverageStrikePathPricer::new(OptionType::Call, 1.0, 0.0, 0);
        assert_eq!(
            pricer.price(&path(&[0.0], &[100.0])).unwrap_err(),
            PathPricerError::EmptyPath
        );
    }

    #[test]
    fn test_average_strike_counts_origin_when_fixed_at_zero() {
        let pricer = ArithmeticAverageStrikePathPricer::new(OptionType::Call, 1.0, 0.0, 0);
        // average = (100 + 110 + 120) / 3 = 110
        let grid = TimeGrid::from_mandatory_times(&[0.0, 0.5, 1.0]).unwrap();
        let p = Path::from_grid(&grid, vec![100.0, 110.0, 120.0]).unwrap();
        assert_relative_eq!(pricer.price(&p).unwrap(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_average_strike_skips_origin_otherwise() {
        let pricer = ArithmeticAverageStrikePathPricer::new(OptionType::Call, 1.0, 0.0, 0);
        // the grid origin is not a fixing: average = (110 + 120) / 2 = 115
        let grid = TimeGrid::from_mandatory_times(&[0.5, 1.0]).unwrap();
        let p = Path::from_grid(&grid, vec![100.0, 110.0, 120.0]).unwrap();
        assert_relative_eq!(pricer.price(&p).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_average_strike_includes_past_fixings() {
        // one past fixing at 90: average = (90 + 110 + 120) / 3
        let grid = TimeGrid::from_mandatory_times(&[0.5, 1.0]).unwrap();
        let p = Path::from_grid(&grid, vec![100.0, 110.0, 120.0]).unwrap();
        let average = (90.0 + 110.0 + 120.0) / 3.0;

        let put = ArithmeticAverageStrikePathPricer::new(OptionType::Put, 0.5, 90.0, 1);
        assert_eq!(put.price(&p).unwrap(), 0.0);

        let call = ArithmeticAverageStrikePathPricer::new(OptionType::Call, 0.5, 90.0, 1);
        assert_relative_eq!(call.price(&p).unwrap(), 0.5 * (120.0 - average), epsilon = 1e-12);
    }
}
