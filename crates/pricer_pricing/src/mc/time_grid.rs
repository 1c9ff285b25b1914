//! Simulation time grids and sampled paths.

use super::error::EngineError;

/// Times closer than this are merged when building a grid from mandatory
/// times.
const TIME_TOLERANCE: f64 = 1.0e-12;

/// Increasing sequence of year fractions starting at `0`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::TimeGrid;
///
/// let grid = TimeGrid::new(1.0, 4).unwrap();
/// assert_eq!(grid.times(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
///
/// let fixings = TimeGrid::from_mandatory_times(&[0.5, 1.0]).unwrap();
/// assert_eq!(fixings.times(), &[0.0, 0.5, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<f64>,
    dt: Vec<f64>,
    mandatory: Vec<f64>,
}

impl TimeGrid {
    /// Uniform grid `0, end/steps, ..., end`.
    ///
    /// # Errors
    ///
    /// `InvalidTimeGrid` when `end` is not strictly positive and finite or
    /// `steps` is zero.
    pub fn new(end: f64, steps: usize) -> Result<Self, EngineError> {
        if !(end > 0.0 && end.is_finite()) {
            return Err(EngineError::InvalidTimeGrid {
                reason: format!("end time {} must be positive", end),
            });
        }
        if steps == 0 {
            return Err(EngineError::InvalidTimeGrid {
                reason: "at least one step required".to_string(),
            });
        }
        let dt = end / steps as f64;
        let mut times: Vec<f64> = (0..=steps).map(|i| i as f64 * dt).collect();
        times[steps] = end;
        Ok(Self::from_sorted(times, vec![end]))
    }

    /// Grid through the given times, with `0` prepended when absent.
    ///
    /// Times are sorted and near-duplicates merged.
    ///
    /// # Errors
    ///
    /// `InvalidTimeGrid` for an empty slice, or for negative or non-finite
    /// times.
    pub fn from_mandatory_times(times: &[f64]) -> Result<Self, EngineError> {
        if times.is_empty() {
            return Err(EngineError::InvalidTimeGrid {
                reason: "empty time sequence".to_string(),
            });
        }
        if let Some(&t) = times.iter().find(|t| !(**t >= 0.0 && t.is_finite())) {
            return Err(EngineError::InvalidTimeGrid {
                reason: format!("negative or non-finite time {} not allowed", t),
            });
        }

        let mut mandatory = times.to_vec();
        mandatory.sort_by(f64::total_cmp);
        mandatory.dedup_by(|b, a| (*b - *a).abs() <= TIME_TOLERANCE);

        let mut grid = Vec::with_capacity(mandatory.len() + 1);
        if mandatory[0] > 0.0 {
            grid.push(0.0);
        }
        grid.extend_from_slice(&mandatory);
        Ok(Self::from_sorted(grid, mandatory))
    }

    fn from_sorted(times: Vec<f64>, mandatory: Vec<f64>) -> Self {
        let dt = times.windows(2).map(|w| w[1] - w[0]).collect();
        Self {
            times,
            dt,
            mandatory,
        }
    }

    /// Number of grid points.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`; a grid holds at least its origin.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of steps, `len() - 1`.
    #[inline]
    pub fn steps(&self) -> usize {
        self.dt.len()
    }

    /// Grid points.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// `i`-th grid point.
    #[inline]
    pub fn time(&self, i: usize) -> f64 {
        self.times[i]
    }

    /// Length of the `i`-th step, `times[i + 1] - times[i]`.
    #[inline]
    pub fn dt(&self, i: usize) -> f64 {
        self.dt[i]
    }

    /// First grid point.
    #[inline]
    pub fn front(&self) -> f64 {
        self.times[0]
    }

    /// Last grid point.
    #[inline]
    pub fn back(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Times the grid was required to hit.
    #[inline]
    pub fn mandatory_times(&self) -> &[f64] {
        &self.mandatory
    }
}

/// Asset levels sampled on a grid.
///
/// A path remembers which of its times were mandatory; path pricers use
/// them to tell fixings from intermediate simulation points.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{Path, TimeGrid};
///
/// let grid = TimeGrid::from_mandatory_times(&[0.5, 1.0]).unwrap();
/// let path = Path::from_grid(&grid, vec![100.0, 103.0, 98.0]).unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.back(), Some(98.0));
/// assert_eq!(path.mandatory_times(), &[0.5, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    times: Vec<f64>,
    mandatory: Vec<f64>,
    values: Vec<f64>,
}

impl Path {
    /// Path whose every time is mandatory.
    ///
    /// # Errors
    ///
    /// `InvalidTimeGrid` when `times` and `values` differ in length.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self, EngineError> {
        let mandatory = times.clone();
        Self::with_mandatory_times(times, mandatory, values)
    }

    /// Path on `grid`.
    ///
    /// # Errors
    ///
    /// `InvalidTimeGrid` when `values` does not have one level per grid point.
    pub fn from_grid(grid: &TimeGrid, values: Vec<f64>) -> Result<Self, EngineError> {
        Self::with_mandatory_times(
            grid.times().to_vec(),
            grid.mandatory_times().to_vec(),
            values,
        )
    }

    fn with_mandatory_times(
        times: Vec<f64>,
        mandatory: Vec<f64>,
        values: Vec<f64>,
    ) -> Result<Self, EngineError> {
        if times.len() != values.len() {
            return Err(EngineError::InvalidTimeGrid {
                reason: format!(
                    "{} times given for {} path values",
                    times.len(),
                    values.len()
                ),
            });
        }
        Ok(Self {
            times,
            mandatory,
            values,
        })
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the path has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Levels.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sampling times.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Times the underlying grid was required to hit.
    #[inline]
    pub fn mandatory_times(&self) -> &[f64] {
        &self.mandatory
    }

    /// First level.
    #[inline]
    pub fn front(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Last level.
    #[inline]
    pub fn back(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ================================================================
    // Uniform grids
    // ================================================================

    #[test]
    fn test_uniform_grid() {
        let grid = TimeGrid::new(2.0, 8).unwrap();
        assert_eq!(grid.len(), 9);
        assert_eq!(grid.steps(), 8);
        assert_eq!(grid.front(), 0.0);
        assert_eq!(grid.back(), 2.0);
        for i in 0..grid.steps() {
            assert_relative_eq!(grid.dt(i), 0.25, epsilon = 1e-15);
        }
        assert_eq!(grid.mandatory_times(), &[2.0]);
    }

    #[test]
    fn test_uniform_grid_end_is_exact() {
        let grid = TimeGrid::new(0.7, 3).unwrap();
        assert_eq!(grid.back(), 0.7);
    }

    #[test]
    fn test_uniform_grid_rejects_bad_input() {
        assert!(matches!(
            TimeGrid::new(0.0, 4),
            Err(EngineError::InvalidTimeGrid { .. })
        ));
        assert!(matches!(
            TimeGrid::new(1.0, 0),
            Err(EngineError::InvalidTimeGrid { .. })
        ));
    }

    // ================================================================
    // Mandatory-time grids
    // ================================================================

    #[test]
    fn test_mandatory_times_get_origin() {
        let grid = TimeGrid::from_mandatory_times(&[0.75, 0.25, 0.5]).unwrap();
        assert_eq!(grid.times(), &[0.0, 0.25, 0.5, 0.75]);
        assert_eq!(grid.mandatory_times(), &[0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_mandatory_times_starting_at_zero() {
        let grid = TimeGrid::from_mandatory_times(&[0.0, 1.0]).unwrap();
        assert_eq!(grid.times(), &[0.0, 1.0]);
        assert_eq!(grid.steps(), 1);
    }

    #[test]
    fn test_mandatory_duplicates_merged() {
        let grid = TimeGrid::from_mandatory_times(&[0.5, 0.5, 1.0]).unwrap();
        assert_eq!(grid.times(), &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_mandatory_times_rejected() {
        assert!(TimeGrid::from_mandatory_times(&[]).is_err());
        assert!(TimeGrid::from_mandatory_times(&[-0.1, 0.5]).is_err());
        assert!(TimeGrid::from_mandatory_times(&[f64::NAN]).is_err());
    }

    // ================================================================
    // Paths
    // ================================================================

    #[test]
    fn test_path_from_grid() {
        let grid = TimeGrid::new(1.0, 2).unwrap();
        let path = Path::from_grid(&grid, vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.times(), grid.times());
        assert_eq!(path.mandatory_times(), &[1.0]);
        assert!(Path::from_grid(&grid, vec![1.0]).is_err());
    }

    #[test]
    fn test_explicit_path_times_are_all_mandatory() {
        let path = Path::new(vec![0.0, 0.5], vec![100.0, 101.0]).unwrap();
        assert_eq!(path.mandatory_times(), &[0.0, 0.5]);
    }

    #[test]
    fn test_path_length_mismatch() {
        assert!(Path::new(vec![0.0, 1.0], vec![100.0]).is_err());
    }

    #[test]
    fn test_empty_path() {
        let path = Path::new(vec![], vec![]).unwrap();
        assert!(path.is_empty());
        assert_eq!(path.back(), None);
        assert_eq!(path.front(), None);
    }
}
