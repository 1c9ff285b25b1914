//! Discrete-averaging Asian options.

use super::error::{validate_schedule, InstrumentError};
use super::exercise::Exercise;
use super::payoff::Payoff;

/// How fixings are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AverageType {
    /// Sum of fixings over their count
    Arithmetic,
    /// n-th root of the product of fixings
    Geometric,
}

impl AverageType {
    /// Neutral running accumulator when no fixing has occurred.
    #[inline]
    pub fn empty_accumulator(&self) -> f64 {
        match self {
            AverageType::Arithmetic => 0.0,
            AverageType::Geometric => 1.0,
        }
    }
}

/// Option on the discrete average of an underlying observed at fixing times.
///
/// Fixings before the valuation date (negative times) have already
/// happened: their combined value is carried in `running_accumulator` (a sum
/// for arithmetic averages, a product for geometric ones) and their number in
/// `past_fixings`. Only fixings at `t >= 0` are simulated.
///
/// # Example
///
/// ```
/// use pricer_models::instruments::{
///     AverageType, DiscreteAveragingAsianOption, Exercise, OptionType, Payoff,
/// };
///
/// // One fixing at 98.0 already observed, four more to come.
/// let option = DiscreteAveragingAsianOption::new(
///     AverageType::Arithmetic,
///     98.0,
///     1,
///     vec![-0.25, 0.25, 0.5, 0.75, 1.0],
///     Payoff::plain_vanilla(OptionType::Call, 100.0),
///     Exercise::european(1.0).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(option.future_fixing_times(), vec![0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscreteAveragingAsianOption {
    average_type: AverageType,
    running_accumulator: f64,
    past_fixings: usize,
    fixing_times: Vec<f64>,
    payoff: Payoff,
    exercise: Exercise,
}

impl DiscreteAveragingAsianOption {
    /// Builds the option.
    ///
    /// # Arguments
    ///
    /// * `average_type` - Arithmetic or geometric averaging
    /// * `running_accumulator` - Sum (arithmetic) or product (geometric) of
    ///   the fixings already observed
    /// * `past_fixings` - Number of fixings already observed
    /// * `fixing_times` - Strictly increasing fixing times; negative times are
    ///   in the past
    /// * `payoff` - Payoff applied against the average
    /// * `exercise` - Exercise schedule
    ///
    /// # Errors
    ///
    /// * `EmptySchedule` / `UnsortedSchedule` / `InvalidTime` - bad fixing times
    /// * `InvalidParameter` - non-finite accumulator, or a non-positive
    ///   geometric accumulator
    pub fn new(
        average_type: AverageType,
        running_accumulator: f64,
        past_fixings: usize,
        fixing_times: Vec<f64>,
        payoff: Payoff,
        exercise: Exercise,
    ) -> Result<Self, InstrumentError> {
        validate_schedule(&fixing_times, "fixing", true)?;
        if !running_accumulator.is_finite()
            || (average_type == AverageType::Geometric && running_accumulator <= 0.0)
        {
            return Err(InstrumentError::InvalidParameter {
                message: format!("running accumulator {} not admissible", running_accumulator),
            });
        }
        Ok(Self {
            average_type,
            running_accumulator,
            past_fixings,
            fixing_times,
            payoff,
            exercise,
        })
    }

    /// Arithmetic-average option with no past fixings.
    pub fn arithmetic(
        fixing_times: Vec<f64>,
        payoff: Payoff,
        exercise: Exercise,
    ) -> Result<Self, InstrumentError> {
        Self::new(
            AverageType::Arithmetic,
            AverageType::Arithmetic.empty_accumulator(),
            0,
            fixing_times,
            payoff,
            exercise,
        )
    }

    /// Averaging rule.
    #[inline]
    pub fn average_type(&self) -> AverageType {
        self.average_type
    }

    /// Combined value of past fixings.
    #[inline]
    pub fn running_accumulator(&self) -> f64 {
        self.running_accumulator
    }

    /// Number of past fixings.
    #[inline]
    pub fn past_fixings(&self) -> usize {
        self.past_fixings
    }

    /// All fixing times, past and future.
    #[inline]
    pub fn fixing_times(&self) -> &[f64] {
        &self.fixing_times
    }

    /// Fixing times at or after the valuation date.
    pub fn future_fixing_times(&self) -> Vec<f64> {
        self.fixing_times
            .iter()
            .copied()
            .filter(|&t| t >= 0.0)
            .collect()
    }

    /// Payoff applied to the average.
    #[inline]
    pub fn payoff(&self) -> &Payoff {
        &self.payoff
    }

    /// Exercise schedule.
    #[inline]
    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::OptionType;

    fn payoff() -> Payoff {
        Payoff::plain_vanilla(OptionType::Put, 100.0)
    }

    #[test]
    fn test_arithmetic_defaults() {
        let option = DiscreteAveragingAsianOption::arithmetic(
            vec![0.0, 0.5, 1.0],
            payoff(),
            Exercise::european(1.0).unwrap(),
        )
        .unwrap();
        assert_eq!(option.average_type(), AverageType::Arithmetic);
        assert_eq!(option.running_accumulator(), 0.0);
        assert_eq!(option.past_fixings(), 0);
        assert_eq!(option.future_fixing_times(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_past_fixings_filtered() {
        let option = DiscreteAveragingAsianOption::new(
            AverageType::Arithmetic,
            205.0,
            2,
            vec![-0.5, -0.25, 0.25],
            payoff(),
            Exercise::european(0.25).unwrap(),
        )
        .unwrap();
        assert_eq!(option.fixing_times().len(), 3);
        assert_eq!(option.future_fixing_times(), vec![0.25]);
    }

    #[test]
    fn test_rejects_unsorted_fixings() {
        let result = DiscreteAveragingAsianOption::arithmetic(
            vec![0.5, 0.25],
            payoff(),
            Exercise::european(1.0).unwrap(),
        );
        assert!(matches!(
            result.unwrap_err(),
            InstrumentError::UnsortedSchedule { what: "fixing", .. }
        ));
    }

    #[test]
    fn test_rejects_bad_geometric_accumulator() {
        let result = DiscreteAveragingAsianOption::new(
            AverageType::Geometric,
            0.0,
            0,
            vec![1.0],
            payoff(),
            Exercise::european(1.0).unwrap(),
        );
        assert!(matches!(
            result.unwrap_err(),
            InstrumentError::InvalidParameter { .. }
        ));
        assert_eq!(AverageType::Geometric.empty_accumulator(), 1.0);
    }
}
