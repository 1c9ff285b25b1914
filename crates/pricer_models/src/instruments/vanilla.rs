//! Single-asset option with a payoff and an exercise.

use super::exercise::Exercise;
use super::payoff::Payoff;

/// Option on one underlying.
///
/// Any payoff and exercise combination can be represented; engines decide
/// which they accept.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VanillaOption {
    payoff: Payoff,
    exercise: Exercise,
}

impl VanillaOption {
    /// Creates a new vanilla option.
    ///
    /// # Arguments
    ///
    /// * `payoff` - Payoff paid at exercise
    /// * `exercise` - Dates on which the option can be exercised
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_models::instruments::{Exercise, OptionType, Payoff, VanillaOption};
    ///
    /// let put = VanillaOption::new(
    ///     Payoff::plain_vanilla(OptionType::Put, 95.0),
    ///     Exercise::european(0.5).unwrap(),
    /// );
    /// assert_eq!(put.payoff().option_type(), OptionType::Put);
    /// assert_eq!(put.exercise().as_european(), Some(0.5));
    /// ```
    pub fn new(payoff: Payoff, exercise: Exercise) -> Self {
        Self { payoff, exercise }
    }

    /// Payoff.
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
