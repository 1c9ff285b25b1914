//! Single-asset path generation.

use pricer_models::models::{StochasticProcess1D, StochasticProcessEnum};

use super::brownian_bridge::BrownianBridge;
use super::error::EngineError;
use super::time_grid::{Path, TimeGrid};
use crate::rng::GaussianSequenceGenerator;

/// A weighted Monte Carlo draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T> {
    /// The draw
    pub value: T,
    /// Its weight in the statistics
    pub weight: f64,
}

/// Generates paths of a one-factor process on a fixed grid.
///
/// Each call to [`next`](Self::next) consumes one Gaussian draw of dimension
/// `grid.steps()`, optionally reorders it through a Brownian bridge, and
/// evolves the process step by step with
/// [`StochasticProcess1D::evolve`]. [`antithetic`](Self::antithetic) replays
/// the last draw with every shock negated.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::ConstantBlackScholesProcess;
/// use pricer_pricing::mc::{PathGenerator, TimeGrid};
/// use pricer_pricing::rng::{PseudoRandom, RngPolicy};
///
/// let process = ConstantBlackScholesProcess::from_parameters(100.0, 0.05, 0.0, 0.2).unwrap();
/// let grid = TimeGrid::new(1.0, 12).unwrap();
/// let rng = PseudoRandom::make_sequence_generator(12, Some(42)).unwrap();
/// let mut generator = PathGenerator::new(process.into(), grid, rng, false).unwrap();
///
/// let path = generator.next().unwrap().value;
/// assert_eq!(path.len(), 13);
/// assert_eq!(path.front(), Some(100.0));
/// ```
#[derive(Debug, Clone)]
pub struct PathGenerator<G> {
    process: StochasticProcessEnum,
    grid: TimeGrid,
    generator: G,
    bridge: Option<BrownianBridge>,
    sequence: Vec<f64>,
    shocks: Vec<f64>,
    path: Path,
}

impl<G: GaussianSequenceGenerator> PathGenerator<G> {
    /// Builds the generator.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when the sequence generator does not produce
    /// `factors × steps` variates per draw.
    pub fn new(
        process: StochasticProcessEnum,
        grid: TimeGrid,
        generator: G,
        brownian_bridge: bool,
    ) -> Result<Self, EngineError> {
        let steps = process.factors() * grid.steps();
        if generator.dimension() != steps {
            return Err(EngineError::DimensionMismatch {
                dimension: generator.dimension(),
                steps,
            });
        }
        let bridge = brownian_bridge.then(|| BrownianBridge::new(&grid));
        let path = Path::from_grid(&grid, vec![0.0; grid.len()])?;
        Ok(Self {
            process,
            grid,
            generator,
            bridge,
            sequence: vec![0.0; steps],
            shocks: vec![0.0; steps],
            path,
        })
    }

    /// Process being simulated.
    #[inline]
    pub fn process(&self) -> &StochasticProcessEnum {
        &self.process
    }

    /// Simulation grid.
    #[inline]
    pub fn time_grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Whether shocks go through a Brownian bridge.
    #[inline]
    pub fn uses_brownian_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    /// Draws a new sequence and returns the path it drives.
    pub fn next(&mut self) -> Result<Sample<&Path>, EngineError> {
        self.generator.next_sequence(&mut self.sequence);
        self.generate(false)
    }

    /// Path driven by the negated shocks of the last draw.
    pub fn antithetic(&mut self) -> Result<Sample<&Path>, EngineError> {
        self.generate(true)
    }

    fn generate(&mut self, antithetic: bool) -> Result<Sample<&Path>, EngineError> {
        match &self.bridge {
            Some(bridge) => bridge.transform(&self.sequence, &mut self.shocks),
            None => self.shocks.copy_from_slice(&self.sequence),
        }

        let sign = if antithetic { -1.0 } else { 1.0 };
        let values = self.path.values_mut();
        values[0] = self.process.x0();
        for i in 1..values.len() {
            let t = self.grid.time(i - 1);
            let dt = self.grid.dt(i - 1);
            values[i] = self
                .process
                .evolve(t, values[i - 1], dt, sign * self.shocks[i - 1])?;
        }

        Ok(Sample {
            value: &self.path,
            weight: 1.0,
        })
    }
}
