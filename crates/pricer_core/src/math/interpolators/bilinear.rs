//! Bilinear interpolation on rectangular grids.

use super::{locate, validate_axis};
use crate::types::InterpolationError;
use num_traits::Float;

/// Bilinear interpolator for `z(x, y)` sampled on a rectangular grid.
///
/// The grid is stored row-major as `zs[i][j] = z(xs[i], ys[j])`. Queries
/// outside the grid are clamped to its edges, so the interpolator is flat
/// beyond the last node along either axis.
///
/// # Example
///
/// ```
/// use pricer_core::math::interpolators::BilinearInterpolator;
///
/// let xs = [0.0, 1.0];
/// let ys = [0.0, 2.0];
/// let zs = [vec![0.0, 2.0], vec![1.0, 3.0]];
///
/// let interp = BilinearInterpolator::<f64>::new(&xs, &ys, &zs).unwrap();
/// assert!((interp.interpolate(0.5, 1.0) - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BilinearInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
    zs: Vec<Vec<T>>,
}

impl<T: Float> BilinearInterpolator<T> {
    /// Builds the interpolator.
    ///
    /// # Errors
    ///
    /// * `InsufficientData` / `NonMonotonicData` - an axis with fewer than two
    ///   nodes or not strictly increasing
    /// * `InvalidInput` - `zs` is not `xs.len()` rows of `ys.len()` values
    pub fn new(xs: &[T], ys: &[T], zs: &[Vec<T>]) -> Result<Self, InterpolationError> {
        validate_axis(xs)?;
        validate_axis(ys)?;
        if zs.len() != xs.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "grid has {} rows, expected {}",
                zs.len(),
                xs.len()
            )));
        }
        if let Some((i, row)) = zs.iter().enumerate().find(|(_, r)| r.len() != ys.len()) {
            return Err(InterpolationError::InvalidInput(format!(
                "grid row {} has {} columns, expected {}",
                i,
                row.len(),
                ys.len()
            )));
        }
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            zs: zs.to_vec(),
        })
    }

    /// Value at `(x, y)`, clamping each coordinate to the grid.
    pub fn interpolate(&self, x: T, y: T) -> T {
        let x = clamp(x, self.xs[0], self.xs[self.xs.len() - 1]);
        let y = clamp(y, self.ys[0], self.ys[self.ys.len() - 1]);

        let i = locate(&self.xs, x);
        let j = locate(&self.ys, y);

        let u = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        let v = (y - self.ys[j]) / (self.ys[j + 1] - self.ys[j]);
        let one = T::one();

        self.zs[i][j] * (one - u) * (one - v)
            + self.zs[i + 1][j] * u * (one - v)
            + self.zs[i][j + 1] * (one - u) * v
            + self.zs[i + 1][j + 1] * u * v
    }

    /// Range of the first axis.
    pub fn domain_x(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Range of the second axis.
    pub fn domain_y(&self) -> (T, T) {
        (self.ys[0], self.ys[self.ys.len() - 1])
    }
}

#[inline]
fn clamp<T: Float>(v: T, lo: T, hi: T) -> T {
    v.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid() -> BilinearInterpolator<f64> {
        BilinearInterpolator::new(
            &[0.0, 1.0, 2.0],
            &[10.0, 20.0],
            &[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 8.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_ragged_grid() {
        let result = BilinearInterpolator::new(
            &[0.0, 1.0],
            &[0.0, 1.0],
            &[vec![1.0, 2.0], vec![3.0]],
        );
        match result.unwrap_err() {
            InterpolationError::InvalidInput(msg) => assert!(msg.contains("row 1")),
            e => panic!("Expected InvalidInput, got {:?}", e),
        }
    }

    #[test]
    fn test_new_rejects_row_count_mismatch() {
        let result = BilinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0], &[vec![1.0, 2.0]]);
        assert!(matches!(
            result.unwrap_err(),
            InterpolationError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_corners_are_exact() {
        let interp = grid();
        assert_relative_eq!(interp.interpolate(0.0, 10.0), 1.0);
        assert_relative_eq!(interp.interpolate(2.0, 20.0), 8.0);
        assert_relative_eq!(interp.interpolate(1.0, 20.0), 4.0);
    }

    #[test]
    fn test_cell_centre() {
        let interp = grid();
        assert_relative_eq!(interp.interpolate(1.5, 15.0), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_clamps_outside_grid() {
        let interp = grid();
        assert_relative_eq!(interp.interpolate(-1.0, 5.0), 1.0);
        assert_relative_eq!(interp.interpolate(3.0, 30.0), 8.0);
    }

    #[test]
    fn test_domains() {
        let interp = grid();
        assert_eq!(interp.domain_x(), (0.0, 2.0));
        assert_eq!(interp.domain_y(), (10.0, 20.0));
    }
}
