//! Sample statistics accumulated during a simulation.

/// Accumulator for weighted samples of the discounted payoff.
pub trait StatisticsAccumulator: Default {
    /// Adds one weighted sample. Weights must be non-negative.
    fn add(&mut self, value: f64, weight: f64);

    /// Number of samples added.
    fn samples(&self) -> usize;

    /// Sum of weights.
    fn weight_sum(&self) -> f64;

    /// Weighted mean; `NaN` when empty.
    fn mean(&self) -> f64;

    /// Unbiased weighted variance; `0` with fewer than two samples.
    fn variance(&self) -> f64;

    /// Square root of [`variance`](Self::variance).
    fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Standard error of the mean.
    fn error_estimate(&self) -> f64 {
        match self.samples() {
            0 => f64::NAN,
            n => (self.variance() / n as f64).sqrt(),
        }
    }

    /// Drops every sample.
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Running weighted moments, updated in one pass (West, 1979).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{GeneralStatistics, StatisticsAccumulator};
///
/// let mut stats = GeneralStatistics::default();
/// for x in [1.0, 2.0, 3.0, 4.0] {
///     stats.add(x, 1.0);
/// }
/// assert_eq!(stats.mean(), 2.5);
/// assert!((stats.variance() - 5.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralStatistics {
    samples: usize,
    weight_sum: f64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Default for GeneralStatistics {
    fn default() -> Self {
        Self {
            samples: 0,
            weight_sum: 0.0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl GeneralStatistics {
    /// Smallest sample; `+inf` when empty.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest sample; `-inf` when empty.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }
}

impl StatisticsAccumulator for GeneralStatistics {
    fn add(&mut self, value: f64, weight: f64) {
        self.samples += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);

        let total = self.weight_sum + weight;
        if total <= 0.0 {
            return;
        }
        let delta = value - self.mean;
        let r = delta * weight / total;
        self.mean += r;
        self.m2 += self.weight_sum * delta * r;
        self.weight_sum = total;
    }

    fn samples(&self) -> usize {
        self.samples
    }

    fn weight_sum(&self) -> f64 {
        self.weight_sum
    }

    fn mean(&self) -> f64 {
        if self.weight_sum > 0.0 {
            self.mean
        } else {
            f64::NAN
        }
    }

    fn variance(&self) -> f64 {
        if self.samples < 2 || self.weight_sum <= 0.0 {
            return 0.0;
        }
        let n = self.samples as f64;
        (self.m2 / self.weight_sum * n / (n - 1.0)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_empty() {
        let stats = GeneralStatistics::default();
        assert_eq!(stats.samples(), 0);
        assert!(stats.mean().is_nan());
        assert_eq!(stats.variance(), 0.0);
        assert!(stats.error_estimate().is_nan());
    }

    #[test]
    fn test_single_sample() {
        let mut stats = GeneralStatistics::default();
        stats.add(4.2, 1.0);
        assert_eq!(stats.mean(), 4.2);
        assert_eq!(stats.variance(), 0.0);
        assert_eq!(stats.error_estimate(), 0.0);
        assert_eq!((stats.min(), stats.max()), (4.2, 4.2));
    }

    #[test]
    fn test_weighted_mean() {
        let mut stats = GeneralStatistics::default();
        stats.add(1.0, 3.0);
        stats.add(5.0, 1.0);
        assert_relative_eq!(stats.mean(), 2.0, epsilon = 1e-15);
        assert_relative_eq!(stats.weight_sum(), 4.0, epsilon = 1e-15);
    }

    #[test]
    fn test_error_estimate() {
        let mut stats = GeneralStatistics::default();
        for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            stats.add(x, 1.0);
        }
        assert_relative_eq!(stats.variance(), 32.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(
            stats.error_estimate(),
            (32.0 / 7.0 / 8.0_f64).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_reset() {
        let mut stats = GeneralStatistics::default();
        stats.add(1.0, 1.0);
        stats.reset();
        assert_eq!(stats, GeneralStatistics::default());
    }

    proptest! {
        #[test]
        fn prop_matches_two_pass_moments(xs in prop::collection::vec(-1e3f64..1e3, 2..200)) {
            let mut stats = GeneralStatistics::default();
            for &x in &xs {
                stats.add(x, 1.0);
            }
            let n = xs.len() as f64;
            let mean = xs.iter().sum::<f64>() / n;
            let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
            prop_assert!((stats.mean() - mean).abs() <= 1e-9 * (1.0 + mean.abs()));
            prop_assert!((stats.variance() - var).abs() <= 1e-7 * (1.0 + var));
        }
    }
}
