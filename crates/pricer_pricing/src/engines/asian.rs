//! Monte Carlo engine for discrete arithmetic average-strike Asian options.

use std::marker::PhantomData;

use pricer_core::market_data::curves::YieldCurve;
use pricer_models::instruments::{AverageType, DiscreteAveragingAsianOption};
use pricer_models::models::{ProcessError, StochasticProcessEnum};
use tracing::debug;

use super::{policy_path_generator, simulated_process};
use crate::mc::{
    ArithmeticAverageStrikePathPricer, EngineError, GeneralStatistics, McEngineConfig,
    McSimulation, PolicyPathGenerator, StatisticsAccumulator, TimeGrid,
};
use crate::rng::{PseudoRandom, RngPolicy};

/// Average-strike Asian option engine.
///
/// The grid is made of the future fixing times (with `0` prepended when no
/// fixing falls on it), so every simulated point after the origin is a
/// fixing. Past fixings enter through the option's running sum and count.
/// The step settings of the configuration are ignored.
#[derive(Debug, Clone)]
pub struct McDiscreteArithmeticAsEngine<R = PseudoRandom, S = GeneralStatistics> {
    process: StochasticProcessEnum,
    config: McEngineConfig,
    _policies: PhantomData<fn() -> (R, S)>,
}

impl<R: RngPolicy, S: StatisticsAccumulator> McDiscreteArithmeticAsEngine<R, S> {
    /// Builds the engine.
    pub fn new(process: StochasticProcessEnum, config: McEngineConfig) -> Self {
        Self {
            process,
            config,
            _policies: PhantomData,
        }
    }

    /// Process the engine was built with.
    #[inline]
    pub fn process(&self) -> &StochasticProcessEnum {
        &self.process
    }
}

impl<R: RngPolicy, S: StatisticsAccumulator> McSimulation for McDiscreteArithmeticAsEngine<R, S> {
    type Instrument = DiscreteAveragingAsianOption;
    type Rng = R;
    type Stats = S;
    type Pricer = ArithmeticAverageStrikePathPricer;

    fn config(&self) -> &McEngineConfig {
        &self.config
    }

    fn time_grid(&self, option: &DiscreteAveragingAsianOption) -> Result<TimeGrid, EngineError> {
        let fixings = option.future_fixing_times();
        if fixings.is_empty() {
            return Err(EngineError::NoFutureFixings);
        }
        debug!(
            future_fixings = fixings.len(),
            past_fixings = option.past_fixings(),
            "Asian time grid"
        );
        TimeGrid::from_mandatory_times(&fixings)
    }

    fn path_generator(
        &self,
        option: &DiscreteAveragingAsianOption,
    ) -> Result<PolicyPathGenerator<R>, EngineError> {
        let grid = self.time_grid(option)?;
        let process = simulated_process(
            &self.process,
            self.config.constant_parameters(),
            grid.back(),
            option.payoff().strike(),
        )?;
        policy_path_generator::<R>(process, grid, &self.config)
    }

    fn path_pricer(
        &self,
        option: &DiscreteAveragingAsianOption,
    ) -> Result<ArithmeticAverageStrikePathPricer, EngineError> {
        if option.average_type() != AverageType::Arithmetic {
            return Err(EngineError::NotArithmeticAverage);
        }
        let payoff = option
            .payoff()
            .as_plain_vanilla()
            .ok_or(EngineError::NonPlainPayoff)?;
        let exercise_date = option
            .exercise()
            .as_european()
            .ok_or(EngineError::WrongExercise)?;
        let process = self
            .process
            .as_black_scholes()
            .ok_or(ProcessError::BlackScholesRequired)?;

        let discount = process.risk_free_rate().discount_factor(exercise_date)?;
        Ok(ArithmeticAverageStrikePathPricer::new(
            payoff.option_type(),
            discount,
            option.running_accumulator(),
            option.past_fixings(),
        ))
    }
}

/// Fluent builder for [`McDiscreteArithmeticAsEngine`].
///
/// The Brownian bridge is on by default.
#[derive(Debug, Clone)]
pub struct MakeMcDiscreteArithmeticAsEngine<R = PseudoRandom, S = GeneralStatistics> {
    process: StochasticProcessEnum,
    config: McEngineConfig,
    _policies: PhantomData<fn() -> (R, S)>,
}

impl<R: RngPolicy, S: StatisticsAccumulator> MakeMcDiscreteArithmeticAsEngine<R, S> {
    /// Builder with default settings.
    pub fn new(process: StochasticProcessEnum) -> Self {
        Self {
            process,
            config: McEngineConfig::default().with_brownian_bridge(true),
            _policies: PhantomData,
        }
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
    pub fn build(&self) -> McDiscreteArithmeticAsEngine<R, S> {
        McDiscreteArithmeticAsEngine::new(self.process.clone(), self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::curves::CurveEnum;
    use pricer_core::market_data::surfaces::VolSurfaceEnum;
    use pricer_models::instruments::{Exercise, OptionType, Payoff};
    use pricer_models::models::GeneralizedBlackScholesProcess;

    fn process() -> StochasticProcessEnum {
        GeneralizedBlackScholesProcess::new(
            100.0,
            CurveEnum::flat(0.05),
            CurveEnum::flat(0.0),
            VolSurfaceEnum::flat(0.2),
        )
        .unwrap()
        .into()
    }

    fn quarterly(past: Option<f64>) -> DiscreteAveragingAsianOption {
        let (sum, count, mut times) = match past {
            Some(fixing) => (fixing, 1, vec![-0.25]),
            None => (0.0, 0, vec![]),
        };
        times.extend([0.25, 0.5, 0.75, 1.0]);
        DiscreteAveragingAsianOption::new(
            AverageType::Arithmetic,
            sum,
            count,
            times,
            Payoff::plain_vanilla(OptionType::Call, 100.0),
            Exercise::european(1.0).unwrap(),
        )
        .unwrap()
    }

    fn engine() -> McDiscreteArithmeticAsEngine {
        MakeMcDiscreteArithmeticAsEngine::<PseudoRandom>::new(process())
            .with_samples(1_000)
            .unwrap()
            .with_seed(11)
            .build()
    }

    #[test]
    fn test_builder_defaults() {
        let builder = MakeMcDiscreteArithmeticAsEngine::<PseudoRandom>::new(process());
        assert!(builder.config().brownian_bridge());
        assert!(!builder.config().antithetic_variate());
        assert!(!builder.config().constant_parameters());
        assert_eq!(builder.config().seed(), None);
    }

    #[test]
    fn test_builder_conflicts() {
        assert_eq!(
            MakeMcDiscreteArithmeticAsEngine::<PseudoRandom>::new(process())
                .with_samples(10)
                .unwrap()
                .with_absolute_tolerance(0.1)
                .unwrap_err(),
            EngineError::SamplesAlreadySet
        );
        assert_eq!(
            MakeMcDiscreteArithmeticAsEngine::<crate::rng::LowDiscrepancy>::new(process())
                .with_absolute_tolerance(0.1)
                .unwrap_err(),
            EngineError::ErrorEstimateNotAllowed
        );
        assert!(matches!(
            MakeMcDiscreteArithmeticAsEngine::<PseudoRandom>::new(process())
                .with_absolute_tolerance(0.0)
                .unwrap_err(),
            EngineError::NonPositiveTolerance { .. }
        ));
    }

    #[test]
    fn test_grid_skips_past_fixings() {
        let grid = engine().time_grid(&quarterly(Some(95.0))).unwrap();
        assert_eq!(grid.times(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(grid.mandatory_times(), &[0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_no_future_fixings() {
        let expired = DiscreteAveragingAsianOption::new(
            AverageType::Arithmetic,
            200.0,
            2,
            vec![-0.5, -0.25],
            Payoff::plain_vanilla(OptionType::Call, 100.0),
            Exercise::european(1.0).unwrap(),
        )
        .unwrap();
        assert_eq!(
            engine().time_grid(&expired).unwrap_err().to_string(),
            "no future fixing times"
        );
    }

    #[test]
    fn test_path_pricer_checks() {
        let option = quarterly(None);
        let bermudan = DiscreteAveragingAsianOption::arithmetic(
            option.fixing_times().to_vec(),
            *option.payoff(),
            Exercise::bermudan(vec![0.5, 1.0]).unwrap(),
        )
        .unwrap();
        assert_eq!(
            engine().path_pricer(&bermudan).unwrap_err().to_string(),
            "wrong exercise given"
        );

        let digital = DiscreteAveragingAsianOption::arithmetic(
            option.fixing_times().to_vec(),
            Payoff::asset_or_nothing(OptionType::Call, 100.0),
            Exercise::european(1.0).unwrap(),
        )
        .unwrap();
        assert_eq!(
            engine().path_pricer(&digital).unwrap_err(),
            EngineError::NonPlainPayoff
        );

        let geometric = DiscreteAveragingAsianOption::new(
            AverageType::Geometric,
            1.0,
            0,
            option.fixing_times().to_vec(),
            *option.payoff(),
            Exercise::european(1.0).unwrap(),
        )
        .unwrap();
        assert_eq!(
            engine().path_pricer(&geometric).unwrap_err(),
            EngineError::NotArithmeticAverage
        );
    }

    #[test]
    fn test_path_pricer_discounts_to_exercise() {
        let pricer = engine().path_pricer(&quarterly(None)).unwrap();
        assert_relative_eq!(pricer.discount(), (-0.05_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_past_fixing_moves_price() {
        // A low past fixing lowers the average strike and raises the call.
        let low = engine().calculate(&quarterly(Some(60.0))).unwrap();
        let none = engine().calculate(&quarterly(None)).unwrap();
        assert!(low.value > none.value);
    }
}
