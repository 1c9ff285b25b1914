//! Interpolation on sorted nodes.
//!
//! - [`LinearInterpolator`]: piecewise linear in one dimension, used by the
//!   interpolated yield curve and the Black variance curve
//! - [`BilinearInterpolator`]: strike × expiry grids for volatility surfaces
//!
//! Both are generic over `T: num_traits::Float` and reject unsorted or
//! duplicated abscissae at construction, so lookups never fail for
//! in-domain queries.
//!
//! ```
//! use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let interp = LinearInterpolator::<f64>::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
//! assert!((interp.interpolate(1.5).unwrap() - 2.5).abs() < 1e-12);
//! ```

mod bilinear;
mod linear;
mod traits;

pub use bilinear::BilinearInterpolator;
pub use linear::LinearInterpolator;
pub use traits::Interpolator;

use crate::types::InterpolationError;
use num_traits::Float;

/// Checks that `xs` has at least two strictly increasing nodes.
pub(crate) fn validate_axis<T: Float>(xs: &[T]) -> Result<(), InterpolationError> {
    if xs.len() < 2 {
        return Err(InterpolationError::InsufficientData {
            got: xs.len(),
            need: 2,
        });
    }
    match xs.windows(2).position(|w| w[1] <= w[0]) {
        Some(i) => Err(InterpolationError::NonMonotonicData { index: i + 1 }),
        None => Ok(()),
    }
}

/// Index `i` of the segment `[xs[i], xs[i+1]]` used for `x`, clamped to
/// `[0, n-2]`.
#[inline]
pub(crate) fn locate<T: Float>(xs: &[T], x: T) -> usize {
    let pos = xs.partition_point(|&xi| xi <= x);
    pos.saturating_sub(1).min(xs.len() - 2)
}
