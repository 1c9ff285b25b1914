//! Striked payoffs.

use super::option_type::OptionType;

/// `max(S - K, 0)` or `max(K - S, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlainVanillaPayoff {
    option_type: OptionType,
    strike: f64,
}

impl PlainVanillaPayoff {
    /// Payoff of `option_type` struck at `strike`.
    #[inline]
    pub fn new(option_type: OptionType, strike: f64) -> Self {
        Self {
            option_type,
            strike,
        }
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Payoff at `spot`.
    #[inline]
    pub fn value(&self, spot: f64) -> f64 {
        self.option_type.intrinsic(spot, self.strike)
    }
}

/// Closed set of payoffs with a type and a strike.
///
/// Engines that only handle plain vanilla payoffs query
/// [`as_plain_vanilla`](Self::as_plain_vanilla) and reject the rest.
///
/// # Example
///
/// ```
/// use pricer_models::instruments::{OptionType, Payoff};
///
/// let digital = Payoff::cash_or_nothing(OptionType::Call, 100.0, 5.0);
/// assert_eq!(digital.value(101.0), 5.0);
/// assert!(digital.as_plain_vanilla().is_none());
///
/// let put = Payoff::plain_vanilla(OptionType::Put, 100.0);
/// assert_eq!(put.as_plain_vanilla().unwrap().value(90.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Payoff {
    /// Vanilla call or put
    PlainVanilla(PlainVanillaPayoff),
    /// Fixed amount when in the money
    CashOrNothing {
        /// Call or put
        option_type: OptionType,
        /// Strike
        strike: f64,
        /// Amount paid
        cash: f64,
    },
    /// The underlying when in the money
    AssetOrNothing {
        /// Call or put
        option_type: OptionType,
        /// Strike
        strike: f64,
    },
}

impl Payoff {
    /// Plain vanilla payoff.
    #[inline]
    pub fn plain_vanilla(option_type: OptionType, strike: f64) -> Self {
        Payoff::PlainVanilla(PlainVanillaPayoff::new(option_type, strike))
    }

    /// Cash-or-nothing digital.
    ///
    /// # Arguments
    ///
    /// * `option_type` - Call pays above the strike, put below
    /// * `strike` - Barrier level of the digital
    /// * `cash` - Amount paid when in the money
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_models::instruments::{OptionType, Payoff};
    ///
    /// let put = Payoff::cash_or_nothing(OptionType::Put, 100.0, 2.5);
    /// assert_eq!(put.value(90.0), 2.5);
    /// assert_eq!(put.value(110.0), 0.0);
    /// assert_eq!(put.strike(), 100.0);
    /// ```
    #[inline]
    pub fn cash_or_nothing(option_type: OptionType, strike: f64, cash: f64) -> Self {
        Payoff::CashOrNothing {
            option_type,
            strike,
            cash,
        }
    }

    /// Asset-or-nothing digital.
    #[inline]
    pub fn asset_or_nothing(option_type: OptionType, strike: f64) -> Self {
        Payoff::AssetOrNothing {
            option_type,
            strike,
        }
    }

    /// The vanilla payoff, when this is one.
    #[inline]
    pub fn as_plain_vanilla(&self) -> Option<&PlainVanillaPayoff> {
        match self {
            Payoff::PlainVanilla(p) => Some(p),
            _ => None,
        }
    }

    /// Call or put.
    pub fn option_type(&self) -> OptionType {
        match self {
            Payoff::PlainVanilla(p) => p.option_type(),
            Payoff::CashOrNothing { option_type, .. }
            | Payoff::AssetOrNothing { option_type, .. } => *option_type,
        }
    }

    /// Strike.
    pub fn strike(&self) -> f64 {
        match self {
            Payoff::PlainVanilla(p) => p.strike(),
            Payoff::CashOrNothing { strike, .. } | Payoff::AssetOrNothing { strike, .. } => *strike,
        }
    }

    /// Payoff at `spot`.
    pub fn value(&self, spot: f64) -> f64 {
        match self {
            Payoff::PlainVanilla(p) => p.value(spot),
            Payoff::CashOrNothing {
                option_type,
                strike,
                cash,
            } => {
                if option_type.sign() * (spot - strike) > 0.0 {
                    *cash
                } else {
                    0.0
                }
            }
            Payoff::AssetOrNothing {
                option_type,
                strike,
            } => {
                if option_type.sign() * (spot - strike) > 0.0 {
                    spot
                } else {
                    0.0
                }
            }
        }
    }

    /// Short name for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Payoff::PlainVanilla(_) => "Vanilla",
            Payoff::CashOrNothing { .. } => "CashOrNothing",
            Payoff::AssetOrNothing { .. } => "AssetOrNothing",
        }
    }
}

impl From<PlainVanillaPayoff> for Payoff {
    fn from(p: PlainVanillaPayoff) -> Self {
        Payoff::PlainVanilla(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_vanilla_values() {
        let call = Payoff::plain_vanilla(OptionType::Call, 100.0);
        assert_eq!(call.value(120.0), 20.0);
        assert_eq!(call.value(80.0), 0.0);
        let put = Payoff::plain_vanilla(OptionType::Put, 100.0);
        assert_eq!(put.value(80.0), 20.0);
        assert_eq!(put.value(100.0), 0.0);
    }

    #[test]
    fn test_digital_values() {
        let cash = Payoff::cash_or_nothing(OptionType::Put, 100.0, 3.0);
        assert_eq!(cash.value(99.0), 3.0);
        assert_eq!(cash.value(100.0), 0.0);
        let asset = Payoff::asset_or_nothing(OptionType::Call, 100.0);
        assert_eq!(asset.value(130.0), 130.0);
        assert_eq!(asset.value(70.0), 0.0);
    }

    #[test]
    fn test_accessors_across_variants() {
        let payoffs = [
            Payoff::plain_vanilla(OptionType::Call, 90.0),
            Payoff::cash_or_nothing(OptionType::Call, 90.0, 1.0),
            Payoff::asset_or_nothing(OptionType::Call, 90.0),
        ];
        for p in &payoffs {
            assert_eq!(p.strike(), 90.0);
            assert_eq!(p.option_type(), OptionType::Call);
        }
        assert!(payoffs[0].as_plain_vanilla().is_some());
        assert!(payoffs[1].as_plain_vanilla().is_none());
        assert_eq!(payoffs[2].name(), "AssetOrNothing");
    }
}
