//! Option contracts priced by the Monte Carlo engines.
//!
//! - [`OptionType`]: call or put
//! - [`Payoff`]: plain vanilla and digital payoffs, queried through
//!   [`Payoff::as_plain_vanilla`]
//! - [`Exercise`]: European, American and Bermudan schedules, queried
//!   through [`Exercise::as_european`]
//! - [`VanillaOption`]: a payoff and an exercise
//! - [`DiscreteAveragingAsianOption`]: a vanilla option whose strike or
//!   underlying is replaced by a discrete average over fixing times
//!
//! Times are year fractions from the valuation date.
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::{Exercise, OptionType, Payoff, VanillaOption};
//!
//! let option = VanillaOption::new(
//!     Payoff::plain_vanilla(OptionType::Call, 100.0),
//!     Exercise::european(1.0).unwrap(),
//! );
//! assert_eq!(option.payoff().strike(), 100.0);
//! assert_eq!(option.exercise().last_date(), 1.0);
//! ```

mod asian;
mod error;
mod exercise;
mod option_type;
mod payoff;
mod vanilla;

pub use asian::{AverageType, DiscreteAveragingAsianOption};
pub use error::InstrumentError;
pub use exercise::Exercise;
pub use option_type::OptionType;
pub use payoff::{Payoff, PlainVanillaPayoff};
pub use vanilla::VanillaOption;
