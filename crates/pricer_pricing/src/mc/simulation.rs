//! Monte Carlo driver.
//!
//! [`MonteCarloModel`] pairs a path generator with a path pricer and feeds a
//! statistics accumulator. [`McSimulation`] is the interface engines
//! implement; its provided [`calculate`](McSimulation::calculate) builds a
//! fresh model per run and grows it until the configured sample count or
//! tolerance is reached.

use tracing::{debug, info, warn};

use super::config::McEngineConfig;
use super::error::EngineError;
use super::path_generator::PathGenerator;
use super::path_pricer::PathPricer;
use super::statistics::StatisticsAccumulator;
use super::time_grid::TimeGrid;
use crate::rng::{GaussianSequenceGenerator, RngPolicy};

/// Smallest first batch of a tolerance-driven run.
pub const MIN_SAMPLES: usize = 1023;

/// Path generator driven by the sequence generator of policy `R`.
pub type PolicyPathGenerator<R> = PathGenerator<<R as RngPolicy>::Generator>;

/// Outcome of a Monte Carlo run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McResults {
    /// Sample mean of the discounted payoff
    pub value: f64,
    /// Standard error of the mean; `None` when the random policy does not
    /// allow an error estimate
    pub error_estimate: Option<f64>,
    /// Number of samples accumulated (antithetic pairs count once)
    pub samples: usize,
}

/// Path generator, path pricer and the statistics they feed.
#[derive(Debug)]
pub struct MonteCarloModel<G, P, S> {
    path_generator: PathGenerator<G>,
    path_pricer: P,
    statistics: S,
    antithetic_variate: bool,
}

impl<G, P, S> MonteCarloModel<G, P, S>
where
    G: GaussianSequenceGenerator,
    P: PathPricer,
    S: StatisticsAccumulator,
{
    /// Model with empty statistics.
    pub fn new(path_generator: PathGenerator<G>, path_pricer: P, antithetic_variate: bool) -> Self {
        Self {
            path_generator,
            path_pricer,
            statistics: S::default(),
            antithetic_variate,
        }
    }

    /// Simulates `samples` more draws. With antithetic variates each draw
    /// contributes the average of a path and its mirror.
    pub fn add_samples(&mut self, samples: usize) -> Result<(), EngineError> {
        for _ in 0..samples {
            let sample = self.path_generator.next()?;
            let weight = sample.weight;
            let mut price = self.path_pricer.price(sample.value)?;

            if self.antithetic_variate {
                let mirror = self.path_generator.antithetic()?;
                let mirror_price = self.path_pricer.price(mirror.value)?;
                price = 0.5 * (price + mirror_price);
            }

            self.statistics.add(price, weight);
        }
        Ok(())
    }

    /// Statistics accumulated so far.
    #[inline]
    pub fn sample_accumulator(&self) -> &S {
        &self.statistics
    }

    /// Grows the run until the error estimate falls to `tolerance`.
    ///
    /// Starts with `min_samples` draws, then sizes each batch from the
    /// ratio of current to target error: the standard error shrinks like
    /// `1/sqrt(n)`, so `n * (err/tol)^2` samples should suffice, and 80% of
    /// that is requested to avoid overshooting.
    ///
    /// # Errors
    ///
    /// * `NonPositiveTolerance` - `tolerance` is zero, negative or NaN
    /// * `MaxSamplesReached` - the cap is hit with the error still above
    ///   tolerance
    pub fn value_with_tolerance(
        &mut self,
        tolerance: f64,
        max_samples: usize,
        min_samples: usize,
    ) -> Result<f64, EngineError> {
        if !(tolerance > 0.0) {
            return Err(EngineError::NonPositiveTolerance { tolerance });
        }
        let mut sample_number = self.statistics.samples();
        if sample_number < min_samples {
            self.add_samples(min_samples - sample_number)?;
            sample_number = self.statistics.samples();
        }

        let mut error = self.statistics.error_estimate();
        while error > tolerance {
            if sample_number >= max_samples {
                warn!(
                    max_samples,
                    error, tolerance, "Sample cap reached before tolerance"
                );
                return Err(EngineError::MaxSamplesReached {
                    max_samples,
                    error,
                    tolerance,
                });
            }
            let order = error * error / (tolerance * tolerance);
            let next_batch = (sample_number as f64 * order * 0.8 - sample_number as f64)
                .max(min_samples as f64) as usize;
            let next_batch = next_batch.min(max_samples - sample_number);

            debug!(sample_number, next_batch, error, "Extending tolerance run");
            sample_number += next_batch;
            self.add_samples(next_batch)?;
            error = self.statistics.error_estimate();
        }

        Ok(self.statistics.mean())
    }

    /// Grows the run to exactly `samples` draws.
    ///
    /// # Errors
    ///
    /// `TooFewSamplesRequested` when more samples were already simulated.
    pub fn value_with_samples(&mut self, samples: usize) -> Result<f64, EngineError> {
        let simulated = self.statistics.samples();
        if samples < simulated {
            return Err(EngineError::TooFewSamplesRequested {
                simulated,
                requested: samples,
            });
        }
        self.add_samples(samples - simulated)?;
        Ok(self.statistics.mean())
    }
}

/// A Monte Carlo pricing engine.
///
/// Implementors supply the grid, the path generator and the path pricer for
/// one instrument; [`calculate`](Self::calculate) asks for the generator and
/// the pricer exactly once per run and rebuilds both every time.
pub trait McSimulation {
    /// Instrument the engine prices.
    type Instrument;
    /// Random-number policy.
    type Rng: RngPolicy;
    /// Statistics accumulator.
    type Stats: StatisticsAccumulator;
    /// Path pricer.
    type Pricer: PathPricer;

    /// Engine settings.
    fn config(&self) -> &McEngineConfig;

    /// Simulation grid for `instrument`.
    fn time_grid(&self, instrument: &Self::Instrument) -> Result<TimeGrid, EngineError>;

    /// Path generator for `instrument`.
    fn path_generator(
        &self,
        instrument: &Self::Instrument,
    ) -> Result<PolicyPathGenerator<Self::Rng>, EngineError>;

    /// Path pricer for `instrument`.
    fn path_pricer(&self, instrument: &Self::Instrument) -> Result<Self::Pricer, EngineError>;

    /// Prices `instrument`.
    ///
    /// A configured tolerance takes precedence over a sample count; the
    /// builders never set both.
    ///
    /// # Errors
    ///
    /// * `NoStoppingRule` - neither tolerance nor sample count configured
    /// * `EmptySampleSet` - a run of zero samples
    /// * any error raised while building the generator or pricer, or while
    ///   simulating
    fn calculate(&self, instrument: &Self::Instrument) -> Result<McResults, EngineError> {
        let config = self.config();
        if config.required_tolerance().is_none() && config.required_samples().is_none() {
            return Err(EngineError::NoStoppingRule);
        }

        let mut model = MonteCarloModel::<_, _, Self::Stats>::new(
            self.path_generator(instrument)?,
            self.path_pricer(instrument)?,
            config.antithetic_variate(),
        );

        if let Some(tolerance) = config.required_tolerance() {
            let max_samples = config.max_samples().unwrap_or(usize::MAX);
            model.value_with_tolerance(tolerance, max_samples, MIN_SAMPLES)?;
        } else if let Some(samples) = config.required_samples() {
            model.value_with_samples(samples)?;
        }

        let stats = model.sample_accumulator();
        if stats.samples() == 0 {
            return Err(EngineError::EmptySampleSet);
        }
        let results = McResults {
            value: stats.mean(),
            error_estimate: <Self::Rng as RngPolicy>::ALLOWS_ERROR_ESTIMATE
                .then(|| stats.error_estimate()),
            samples: stats.samples(),
        };
        info!(
            rng = <Self::Rng as RngPolicy>::name(),
            samples = results.samples,
            value = results.value,
            error = ?results.error_estimate,
            "Monte Carlo run complete"
        );
        Ok(results)
    }
}
