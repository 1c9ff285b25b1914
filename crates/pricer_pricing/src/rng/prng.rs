//! Pseudo-random Gaussian sequences.
//!
//! [`PricerRng`] wraps `rand::StdRng` and keeps track of the seed it was
//! built from; [`PseudoRandomSequence`] draws one standard normal per
//! dimension from it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

use super::GaussianSequenceGenerator;

/// Seeded pseudo-random number generator.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng1 = PricerRng::from_seed(12345);
/// let mut rng2 = PricerRng::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
/// assert_eq!(rng1.seed(), Some(12345));
/// ```
#[derive(Debug, Clone)]
pub struct PricerRng {
    inner: StdRng,
    /// `None` when initialised from operating system entropy.
    seed: Option<u64>,
}

impl PricerRng {
    /// Initialises the generator from a 64-bit seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Initialises the generator from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seeded when `seed` is given, entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::from_seed(s),
            None => Self::from_entropy(),
        }
    }

    /// Seed used for initialisation, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Uniform variate in `[0, 1)`.
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Standard normal variate (Ziggurat, via `rand_distr::StandardNormal`).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills `buffer` with standard normal variates.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

/// Independent standard normals, `dimension` per draw.
#[derive(Debug, Clone)]
pub struct PseudoRandomSequence {
    rng: PricerRng,
    dimension: usize,
}

impl PseudoRandomSequence {
    /// Sequence of the given dimension over `rng`.
    pub fn new(dimension: usize, rng: PricerRng) -> Self {
        Self { rng, dimension }
    }

    /// Underlying generator.
    #[inline]
    pub fn rng(&self) -> &PricerRng {
        &self.rng
    }
}

impl GaussianSequenceGenerator for PseudoRandomSequence {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn next_sequence(&mut self, out: &mut [f64]) {
        self.rng.fill_normal(&mut out[..self.dimension]);
    }
}
