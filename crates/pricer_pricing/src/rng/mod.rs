//! # Random Number Generation
//!
//! Gaussian sequence generators for the Monte Carlo engines.
//!
//! - [`PricerRng`]: seeded wrapper around `rand::StdRng`
//! - [`PseudoRandomSequence`]: independent Ziggurat normals
//! - [`SobolSequence`] / [`SobolGaussianSequence`]: scrambled Sobol points
//!   and their image under [`inverse_normal_cdf`]
//! - [`RngPolicy`]: compile-time choice between [`PseudoRandom`] and
//!   [`LowDiscrepancy`]
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{GaussianSequenceGenerator, PseudoRandom, RngPolicy};
//!
//! let mut generator = PseudoRandom::make_sequence_generator(4, Some(42)).unwrap();
//! let mut draw = vec![0.0; generator.dimension()];
//! generator.next_sequence(&mut draw);
//! ```

mod policy;
mod prng;
mod sobol;

pub use policy::{LowDiscrepancy, PseudoRandom, RngPolicy};
pub use prng::{PricerRng, PseudoRandomSequence};
pub use sobol::{
    inverse_normal_cdf, SobolGaussianSequence, SobolSequence, DEFAULT_SOBOL_SEED,
    SOBOL_MAX_DIMENSIONS,
};

/// Source of standard normal vectors of fixed dimension.
pub trait GaussianSequenceGenerator {
    /// Variates per draw.
    fn dimension(&self) -> usize;

    /// Writes the next draw into `out[..dimension]`.
    ///
    /// `out` must hold at least `dimension` values.
    fn next_sequence(&mut self, out: &mut [f64]);
}
