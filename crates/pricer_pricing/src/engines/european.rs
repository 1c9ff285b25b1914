//! Monte Carlo engine for European vanilla options.

use std::marker::PhantomData;

use pricer_core::market_data::curves::YieldCurve;
use pricer_models::instruments::VanillaOption;
use pricer_models::models::{ProcessError, StochasticProcessEnum};
use tracing::debug;

use super::{policy_path_generator, simulated_process};
use crate::mc::{
    EngineError, EuropeanPathPricer, GeneralStatistics, McEngineConfig, McSimulation,
    PolicyPathGenerator, StatisticsAccumulator, TimeGrid,
};
use crate::rng::{PseudoRandom, RngPolicy};

/// European option engine.
///
/// Paths run on the uniform grid `0 .. T` with `T` the exercise date; the
/// payoff is read off the terminal level and discounted on the risk-free
/// curve of the process.
#[derive(Debug, Clone)]
pub struct McEuropeanEngine<R = PseudoRandom, S = GeneralStatistics> {
    process: StochasticProcessEnum,
    config: McEngineConfig,
    _policies: PhantomData<fn() -> (R, S)>,
}

impl<R: RngPolicy, S: StatisticsAccumulator> McEuropeanEngine<R, S> {
    /// Builds the engine.
    ///
    /// # Errors
    ///
    /// Time-step errors from [`McEngineConfig::validate_time_steps`].
    pub fn new(process: StochasticProcessEnum, config: McEngineConfig) -> Result<Self, EngineError> {
        config.validate_time_steps()?;
        Ok(Self {
            process,
            config,
            _policies: PhantomData,
        })
    }

    /// Process the engine was built with.
    #[inline]
    pub fn process(&self) -> &StochasticProcessEnum {
        &self.process
    }
}

impl<R: RngPolicy, S: StatisticsAccumulator> McSimulation for McEuropeanEngine<R, S> {
    type Instrument = VanillaOption;
    type Rng = R;
    type Stats = S;
    type Pricer = EuropeanPathPricer;

    fn config(&self) -> &McEngineConfig {
        &self.config
    }

    fn time_grid(&self, option: &VanillaOption) -> Result<TimeGrid, EngineError> {
        let maturity = option.exercise().last_date();
        let steps = self.config.steps_for(maturity);
        debug!(maturity, steps, "European time grid");
        TimeGrid::new(maturity, steps)
    }

    fn path_generator(
        &self,
        option: &VanillaOption,
    ) -> Result<PolicyPathGenerator<R>, EngineError> {
        let grid = self.time_grid(option)?;
        let process = if self.config.constant_parameters() {
            let strike = option
                .payoff()
                .as_plain_vanilla()
                .ok_or(EngineError::NonPlainPayoff)?
                .strike();
            simulated_process(&self.process, true, grid.back(), strike)?
        } else {
            self.process.clone()
        };
        policy_path_generator::<R>(process, grid, &self.config)
    }

    fn path_pricer(&self, option: &VanillaOption) -> Result<EuropeanPathPricer, EngineError> {
        let payoff = option
            .payoff()
            .as_plain_vanilla()
            .ok_or(EngineError::NonPlainPayoff)?;
        let process = self
            .process
            .as_black_scholes()
            .ok_or(ProcessError::BlackScholesRequired)?;

        let discount = process
            .risk_free_rate()
            .discount_factor(option.exercise().last_date())?;
        Ok(EuropeanPathPricer::new(
            payoff.option_type(),
            payoff.strike(),
            discount,
        )?)
    }
}

/// Fluent builder for [`McEuropeanEngine`].
///
/// Exactly one of [`with_steps`](Self::with_steps) and
/// [`with_steps_per_year`](Self::with_steps_per_year) must be given before
/// [`build`](Self::build). The Brownian bridge is off by default.
#[derive(Debug, Clone)]
pub struct MakeMcEuropeanEngine<R = PseudoRandom, S = GeneralStatistics> {
    process: StochasticProcessEnum,
    config: McEngineConfig,
    _policies: PhantomData<fn() -> (R, S)>,
}

impl<R: RngPolicy, S: StatisticsAccumulator> MakeMcEuropeanEngine<R, S> {
    /// Builder with default settings.
    pub fn new(process: StochasticProcessEnum) -> Self {
        Self {
            process,
            config: McEngineConfig::default(),
            _policies: PhantomData,
        }
    }

    /// Fixed number of time steps.
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.config = self.config.with_time_steps(steps);
        self
    }

    /// Time steps per year of maturity.
    #[must_use]
    pub fn with_steps_per_year(mut self, steps: usize) -> Self {
        self.config = self.config.with_time_steps_per_year(steps);
        self
    }

    /// Brownian bridge on or off.
    #[must_use]
    pub fn with_brownian_bridge(mut self, enabled: bool) -> Self {
        self.config = self.config.with_brownian_bridge(enabled);
        self
    }

    /// Antithetic variates on or off.
    #[must_use]
    pub fn with_antithetic_variate(mut self, enabled: bool) -> Self {
        self.config = self.config.with_antithetic_variate(enabled);
        self
    }

    /// Fixed sample count.
    ///
    /// # Errors
    ///
    /// `ToleranceAlreadySet` when a tolerance was given.
    pub fn with_samples(mut self, samples: usize) -> Result<Self, EngineError> {
        if self.config.required_tolerance().is_some() {
            return Err(EngineError::ToleranceAlreadySet);
        }
        self.config = self.config.with_required_samples(samples);
        Ok(self)
    }

    /// Absolute error tolerance.
    ///
    /// # Errors
    ///
    /// * `SamplesAlreadySet` - a sample count was given
    /// * `NonPositiveTolerance` - `tolerance` is zero, negative or NaN
    /// * `ErrorEstimateNotAllowed` - the random policy has no error estimate
    pub fn with_absolute_tolerance(mut self, tolerance: f64) -> Result<Self, EngineError> {
        if self.config.required_samples().is_some() {
            return Err(EngineError::SamplesAlreadySet);
        }
        if !(tolerance > 0.0) {
            return Err(EngineError::NonPositiveTolerance { tolerance });
        }
        if !R::ALLOWS_ERROR_ESTIMATE {
            return Err(EngineError::ErrorEstimateNotAllowed);
        }
        self.config = self.config.with_required_tolerance(tolerance);
        Ok(self)
    }

    /// Sample cap of a tolerance run.
    #[must_use]
    pub fn with_max_samples(mut self, samples: usize) -> Self {
        self.config = self.config.with_max_samples(samples);
        self
    }

    /// Random sequence seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Frozen-parameter simulation on or off.
    #[must_use]
    pub fn with_constant_parameters(mut self, enabled: bool) -> Self {
        self.config = self.config.with_constant_parameters(enabled);
        self
    }

    /// Settings collected so far.
    #[inline]
    pub fn config(&self) -> &McEngineConfig {
        &self.config
    }

    /// Builds an engine; the builder stays usable.
    ///
    /// # Errors
    ///
    /// * `StepsNotGiven` - no step setting
    /// * `StepsOverspecified` - both step settings
    /// * any error of [`McEuropeanEngine::new`]
    pub fn build(&self) -> Result<McEuropeanEngine<R, S>, EngineError> {
        match (
            self.config.time_steps(),
            self.config.time_steps_per_year(),
        ) {
            (None, None) => Err(EngineError::StepsNotGiven),
            (Some(_), Some(_)) => Err(EngineError::StepsOverspecified),
            _ => McEuropeanEngine::new(self.process.clone(), self.config.clone()),
        }
    }
}
