//! Monte Carlo engine configuration.
//!
//! [`McEngineConfig`] carries every knob of an engine run. It is normally
//! produced by the fluent engine builders, which enforce the mutual
//! exclusions between its fields; engine constructors validate the time-step
//! settings once more before accepting it.

use super::error::EngineError;

/// Immutable engine settings.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::McEngineConfig;
///
/// let config = McEngineConfig::default()
///     .with_time_steps_per_year(52)
///     .with_required_samples(10_000)
///     .with_seed(42);
///
/// assert!(config.validate_time_steps().is_ok());
/// assert_eq!(config.steps_for(0.5), 26);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McEngineConfig {
    time_steps: Option<usize>,
    time_steps_per_year: Option<usize>,
    brownian_bridge: bool,
    antithetic_variate: bool,
    required_samples: Option<usize>,
    required_tolerance: Option<f64>,
    max_samples: Option<usize>,
    seed: Option<u64>,
    constant_parameters: bool,
}

impl McEngineConfig {
    /// Sets a fixed number of time steps.
    #[must_use]
    pub fn with_time_steps(mut self, steps: usize) -> Self {
        self.time_steps = Some(steps);
        self
    }

    /// Sets a step density per year of horizon.
    #[must_use]
    pub fn with_time_steps_per_year(mut self, steps: usize) -> Self {
        self.time_steps_per_year = Some(steps);
        self
    }

    /// Enables or disables the Brownian bridge.
    #[must_use]
    pub fn with_brownian_bridge(mut self, enabled: bool) -> Self {
        self.brownian_bridge = enabled;
        self
    }

    /// Enables or disables antithetic paths.
    #[must_use]
    pub fn with_antithetic_variate(mut self, enabled: bool) -> Self {
        self.antithetic_variate = enabled;
        self
    }

    /// Sets a fixed sample count.
    #[must_use]
    pub fn with_required_samples(mut self, samples: usize) -> Self {
        self.required_samples = Some(samples);
        self
    }

    /// Sets an absolute error tolerance.
    #[must_use]
    pub fn with_required_tolerance(mut self, tolerance: f64) -> Self {
        self.required_tolerance = Some(tolerance);
        self
    }

    /// Caps the number of samples of a tolerance run.
    #[must_use]
    pub fn with_max_samples(mut self, samples: usize) -> Self {
        self.max_samples = Some(samples);
        self
    }

    /// Seeds the random sequence.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables frozen-parameter simulation.
    #[must_use]
    pub fn with_constant_parameters(mut self, enabled: bool) -> Self {
        self.constant_parameters = enabled;
        self
    }

    /// Fixed number of time steps.
    #[inline]
    pub fn time_steps(&self) -> Option<usize> {
        self.time_steps
    }

    /// Time steps per year.
    #[inline]
    pub fn time_steps_per_year(&self) -> Option<usize> {
        self.time_steps_per_year
    }

    /// Whether shocks go through a Brownian bridge.
    #[inline]
    pub fn brownian_bridge(&self) -> bool {
        self.brownian_bridge
    }

    /// Whether each draw is paired with its antithetic path.
    #[inline]
    pub fn antithetic_variate(&self) -> bool {
        self.antithetic_variate
    }

    /// Fixed sample count.
    #[inline]
    pub fn required_samples(&self) -> Option<usize> {
        self.required_samples
    }

    /// Absolute error tolerance.
    #[inline]
    pub fn required_tolerance(&self) -> Option<f64> {
        self.required_tolerance
    }

    /// Sample cap of a tolerance run.
    #[inline]
    pub fn max_samples(&self) -> Option<usize> {
        self.max_samples
    }

    /// Seed of the random sequence.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether paths are simulated with frozen parameters.
    #[inline]
    pub fn constant_parameters(&self) -> bool {
        self.constant_parameters
    }

    /// Checks that exactly one positive step setting is present.
    ///
    /// # Errors
    ///
    /// * `NoTimeSteps` - neither setting given
    /// * `BothTimeSteps` - both settings given
    /// * `NonPositiveTimeSteps` - the given setting is zero
    pub fn validate_time_steps(&self) -> Result<(), EngineError> {
        match (self.time_steps, self.time_steps_per_year) {
            (None, None) => Err(EngineError::NoTimeSteps),
            (Some(_), Some(_)) => Err(EngineError::BothTimeSteps),
            (Some(0), None) | (None, Some(0)) => Err(EngineError::NonPositiveTimeSteps),
            _ => Ok(()),
        }
    }

    /// Number of steps for a grid ending at `horizon`: the fixed count, or
    /// `max(floor(steps_per_year * horizon), 1)`.
    pub fn steps_for(&self, horizon: f64) -> usize {
        match (self.time_steps, self.time_steps_per_year) {
            (Some(steps), _) => steps,
            (None, Some(per_year)) => ((per_year as f64 * horizon) as usize).max(1),
            (None, None) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = McEngineConfig::default();
        assert_eq!(config.time_steps(), None);
        assert_eq!(config.time_steps_per_year(), None);
        assert!(!config.brownian_bridge());
        assert!(!config.antithetic_variate());
        assert_eq!(config.required_samples(), None);
        assert_eq!(config.required_tolerance(), None);
        assert_eq!(config.max_samples(), None);
        assert_eq!(config.seed(), None);
        assert!(!config.constant_parameters());
    }

    #[test]
    fn test_time_step_validation() {
        assert_eq!(
            McEngineConfig::default().validate_time_steps(),
            Err(EngineError::NoTimeSteps)
        );
        assert_eq!(
            McEngineConfig::default()
                .with_time_steps(10)
                .with_time_steps_per_year(10)
                .validate_time_steps(),
            Err(EngineError::BothTimeSteps)
        );
        assert_eq!(
            McEngineConfig::default().with_time_steps(0).validate_time_steps(),
            Err(EngineError::NonPositiveTimeSteps)
        );
        assert_eq!(
            McEngineConfig::default()
                .with_time_steps_per_year(0)
                .validate_time_steps(),
            Err(EngineError::NonPositiveTimeSteps)
        );
        assert!(McEngineConfig::default()
            .with_time_steps(1)
            .validate_time_steps()
            .is_ok());
    }

    #[test]
    fn test_steps_for_horizon() {
        let fixed = McEngineConfig::default().with_time_steps(7);
        assert_eq!(fixed.steps_for(3.0), 7);

        let dense = McEngineConfig::default().with_time_steps_per_year(12);
        assert_eq!(dense.steps_for(1.0), 12);
        assert_eq!(dense.steps_for(0.5), 6);
        assert_eq!(dense.steps_for(0.01), 1);
    }
}
