//! Yield curves.
//!
//! - [`YieldCurve`]: discount factors, continuously compounded zero rates and
//!   forward rates
//! - [`FlatCurve`]: a single constant rate
//! - [`InterpolatedCurve`]: pillar-based curve with linear zero-rate or
//!   log-linear discount interpolation
//! - [`CurveEnum`]: static dispatch over the above

mod curve_enum;
mod flat;
mod interpolated;
mod traits;

pub use curve_enum::CurveEnum;
pub use flat::FlatCurve;
pub use interpolated::{CurveInterpolation, InterpolatedCurve};
pub use traits::YieldCurve;
