//! One-dimensional interpolator contract.

use crate::types::InterpolationError;
use num_traits::Float;

/// A function sampled on sorted nodes and evaluated in between.
pub trait Interpolator<T: Float> {
    /// Value at `x`.
    ///
    /// # Errors
    ///
    /// `InterpolationError::OutOfBounds` when `x` lies outside [`domain`](Self::domain).
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Closed interval `(min, max)` on which [`interpolate`](Self::interpolate) succeeds.
    fn domain(&self) -> (T, T);
}
