//! Brownian bridge construction over an arbitrary time grid.
//!
//! The first variate fixes the Brownian motion at the last grid time; each
//! later variate fills the midpoint (by index) of the widest remaining gap,
//! conditioned on its two neighbours. Low-discrepancy sequences put their
//! best-distributed coordinates first, so the bridge hands them to the
//! coarse features of the path.

use super::time_grid::TimeGrid;

/// Precomputed bridge weights for one grid.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{BrownianBridge, TimeGrid};
///
/// let bridge = BrownianBridge::new(&TimeGrid::new(1.0, 4).unwrap());
/// let mut increments = [0.0; 4];
/// bridge.transform(&[1.0, 0.0, 0.0, 0.0], &mut increments);
///
/// // A single unit shock at the horizon spreads evenly over the steps.
/// for dz in increments {
///     assert!((dz - 0.5).abs() < 1e-12);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BrownianBridge {
    size: usize,
    t: Vec<f64>,
    sqrt_dt: Vec<f64>,
    bridge_index: Vec<usize>,
    left_index: Vec<usize>,
    right_index: Vec<usize>,
    left_weight: Vec<f64>,
    right_weight: Vec<f64>,
    std_dev: Vec<f64>,
}

impl BrownianBridge {
    /// Bridge over the steps of `grid` (the origin is excluded).
    pub fn new(grid: &TimeGrid) -> Self {
        Self::from_times(&grid.times()[1..])
    }

    /// Bridge over strictly increasing positive times.
    pub fn from_times(times: &[f64]) -> Self {
        let size = times.len();
        let mut bridge = Self {
            size,
            t: times.to_vec(),
            sqrt_dt: vec![0.0; size],
            bridge_index: vec![0; size],
            left_index: vec![0; size],
            right_index: vec![0; size],
            left_weight: vec![0.0; size],
            right_weight: vec![0.0; size],
            std_dev: vec![0.0; size],
        };
        if size > 0 {
            bridge.initialise();
        }
        bridge
    }

    fn initialise(&mut self) {
        let n = self.size;
        let t = &self.t;

        self.sqrt_dt[0] = t[0].sqrt();
        for i in 1..n {
            self.sqrt_dt[i] = (t[i] - t[i - 1]).sqrt();
        }

        // map[i] != 0 once point i has been assigned a variate.
        let mut map = vec![0_usize; n];
        map[n - 1] = 1;
        self.bridge_index[0] = n - 1;
        self.std_dev[0] = t[n - 1].sqrt();

        let mut j = 0;
        for i in 1..n {
            while map[j] != 0 {
                j += 1;
            }
            let mut k = j;
            while map[k] == 0 {
                k += 1;
            }
            let l = j + ((k - 1 - j) >> 1);
            map[l] = i;

            self.bridge_index[i] = l;
            self.left_index[i] = j;
            self.right_index[i] = k;
            if j != 0 {
                let span = t[k] - t[j - 1];
                self.left_weight[i] = (t[k] - t[l]) / span;
                self.right_weight[i] = (t[l] - t[j - 1]) / span;
                self.std_dev[i] = ((t[l] - t[j - 1]) * (t[k] - t[l]) / span).sqrt();
            } else {
                self.left_weight[i] = (t[k] - t[l]) / t[k];
                self.right_weight[i] = t[l] / t[k];
                self.std_dev[i] = (t[l] * (t[k] - t[l]) / t[k]).sqrt();
            }

            j = k + 1;
            if j >= n {
                j = 0;
            }
        }
    }

    /// Number of variates consumed per path.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Maps independent standard normals to per-step Brownian increments
    /// normalised to unit variance.
    ///
    /// Both slices must hold at least [`size`](Self::size) values.
    pub fn transform(&self, variates: &[f64], output: &mut [f64]) {
        let n = self.size;
        if n == 0 {
            return;
        }

        output[n - 1] = self.std_dev[0] * variates[0];
        for i in 1..n {
            let j = self.left_index[i];
            let k = self.right_index[i];
            let l = self.bridge_index[i];
            output[l] = if j != 0 {
                self.left_weight[i] * output[j - 1]
                    + self.right_weight[i] * output[k]
                    + self.std_dev[i] * variates[i]
            } else {
                self.right_weight[i] * output[k] + self.std_dev[i] * variates[i]
            };
        }

        for i in (1..n).rev() {
            output[i] -= output[i - 1];
            output[i] /= self.sqrt_dt[i];
        }
        output[0] /= self.sqrt_dt[0];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PricerRng;
    use approx::assert_relative_eq;

    fn level_at_horizon(bridge: &BrownianBridge, increments: &[f64]) -> f64 {
        increments
            .iter()
            .zip(&bridge.sqrt_dt)
            .map(|(dz, sdt)| dz * sdt)
            .sum()
    }

    #[test]
    fn test_single_step_is_identity() {
        let bridge = BrownianBridge::new(&TimeGrid::new(2.0, 1).unwrap());
        let mut out = [0.0];
        bridge.transform(&[-0.7], &mut out);
        assert_relative_eq!(out[0], -0.7, epsilon = 1e-15);
    }

    #[test]
    fn test_first_variate_fixes_horizon() {
        let grid = TimeGrid::from_mandatory_times(&[0.1, 0.4, 0.45, 1.3, 2.0]).unwrap();
        let bridge = BrownianBridge::new(&grid);
        let mut rng = PricerRng::from_seed(17);
        let mut z = vec![0.0; bridge.size()];
        let mut out = vec![0.0; bridge.size()];
        for _ in 0..20 {
            rng.fill_normal(&mut z);
            bridge.transform(&z, &mut out);
            assert_relative_eq!(
                level_at_horizon(&bridge, &out),
                2.0_f64.sqrt() * z[0],
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_every_point_constructed_once() {
        let bridge = BrownianBridge::new(&TimeGrid::new(1.0, 13).unwrap());
        let mut seen = bridge.bridge_index.clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..13).collect::<Vec<_>>());
    }

    #[test]
    fn test_increments_have_unit_variance() {
        let grid = TimeGrid::from_mandatory_times(&[0.25, 0.3, 0.9, 1.0]).unwrap();
        let bridge = BrownianBridge::new(&grid);
        let mut rng = PricerRng::from_seed(2024);
        let n = 50_000;
        let mut z = vec![0.0; 4];
        let mut out = vec![0.0; 4];
        let mut sum_sq = [0.0; 4];
        let mut cross = 0.0;
        for _ in 0..n {
            rng.fill_normal(&mut z);
            bridge.transform(&z, &mut out);
            for (acc, x) in sum_sq.iter_mut().zip(&out) {
                *acc += x * x;
            }
            cross += out[0] * out[2];
        }
        for acc in sum_sq {
            assert!((acc / n as f64 - 1.0).abs() < 0.03, "variance = {}", acc / n as f64);
        }
        assert!((cross / n as f64).abs() < 0.03);
    }

    #[test]
    fn test_empty_grid_is_noop() {
        let bridge = BrownianBridge::from_times(&[]);
        assert_eq!(bridge.size(), 0);
        bridge.transform(&[], &mut []);
    }
}
