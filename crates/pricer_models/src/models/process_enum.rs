//! Static dispatch over simulated processes.

use super::black_scholes::GeneralizedBlackScholesProcess;
use super::constant_black_scholes::ConstantBlackScholesProcess;
use super::error::ProcessError;
use super::process::StochasticProcess1D;

/// Closed set of processes an engine can simulate.
///
/// Engines query capabilities explicitly: [`as_black_scholes`](Self::as_black_scholes)
/// yields the curves and surface only for the term-structure variant.
#[derive(Debug, Clone, PartialEq)]
pub enum StochasticProcessEnum {
    /// Term-structure Black-Scholes dynamics
    BlackScholes(GeneralizedBlackScholesProcess),
    /// Frozen-parameter dynamics
    Constant(ConstantBlackScholesProcess),
}

impl StochasticProcessEnum {
    /// The term-structure process, when this is one.
    #[inline]
    pub fn as_black_scholes(&self) -> Option<&GeneralizedBlackScholesProcess> {
        match self {
            StochasticProcessEnum::BlackScholes(p) => Some(p),
            StochasticProcessEnum::Constant(_) => None,
        }
    }

    /// The frozen process, when this is one.
    #[inline]
    pub fn as_constant(&self) -> Option<&ConstantBlackScholesProcess> {
        match self {
            StochasticProcessEnum::Constant(p) => Some(p),
            StochasticProcessEnum::BlackScholes(_) => None,
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            StochasticProcessEnum::BlackScholes(_) => "GeneralizedBlackScholes",
            StochasticProcessEnum::Constant(_) => "ConstantBlackScholes",
        }
    }
}

impl StochasticProcess1D for StochasticProcessEnum {
    fn x0(&self) -> f64 {
        match self {
            StochasticProcessEnum::BlackScholes(p) => p.x0(),
            StochasticProcessEnum::Constant(p) => p.x0(),
        }
    }

    fn factors(&self) -> usize {
        match self {
            StochasticProcessEnum::BlackScholes(p) => p.factors(),
            StochasticProcessEnum::Constant(p) => p.factors(),
        }
    }

    fn drift(&self, t: f64, x: f64) -> Result<f64, ProcessError> {
        match self {
            StochasticProcessEnum::BlackScholes(p) => p.drift(t, x),
            StochasticProcessEnum::Constant(p) => p.drift(t, x),
        }
    }

    fn diffusion(&self, t: f64, x: f64) -> Result<f64, ProcessError> {
        match self {
            StochasticProcessEnum::BlackScholes(p) => p.diffusion(t, x),
            StochasticProcessEnum::Constant(p) => p.diffusion(t, x),
        }
    }

    fn apply(&self, x: f64, dx: f64) -> f64 {
        match self {
            StochasticProcessEnum::BlackScholes(p) => p.apply(x, dx),
            StochasticProcessEnum::Constant(p) => p.apply(x, dx),
        }
    }

    fn evolve(&self, t0: f64, x0: f64, dt: f64, dw: f64) -> Result<f64, ProcessError> {
        match self {
            StochasticProcessEnum::BlackScholes(p) => p.evolve(t0, x0, dt, dw),
            StochasticProcessEnum::Constant(p) => p.evolve(t0, x0, dt, dw),
        }
    }
}

impl From<GeneralizedBlackScholesProcess> for StochasticProcessEnum {
    fn from(p: GeneralizedBlackScholesProcess) -> Self {
        StochasticProcessEnum::BlackScholes(p)
    }
}

impl From<ConstantBlackScholesProcess> for StochasticProcessEnum {
    fn from(p: ConstantBlackScholesProcess) -> Self {
        StochasticProcessEnum::Constant(p)
    }
}
