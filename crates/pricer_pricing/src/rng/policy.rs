//! Random-number policies selected at compile time by the engines.

use super::prng::{PricerRng, PseudoRandomSequence};
use super::sobol::{SobolGaussianSequence, SobolSequence, DEFAULT_SOBOL_SEED, SOBOL_MAX_DIMENSIONS};
use super::GaussianSequenceGenerator;
use crate::mc::EngineError;

/// How an engine draws the Gaussian variates driving its paths.
pub trait RngPolicy {
    /// Whether the sample standard error is a meaningful error estimate.
    const ALLOWS_ERROR_ESTIMATE: bool;

    /// Sequence generator produced by the policy.
    type Generator: GaussianSequenceGenerator;

    /// Generator producing `dimension` variates per draw. An unset seed
    /// falls back to the policy's default.
    fn make_sequence_generator(
        dimension: usize,
        seed: Option<u64>,
    ) -> Result<Self::Generator, EngineError>;

    /// Short name for logs.
    fn name() -> &'static str;
}

/// `StdRng` with Ziggurat normals; unseeded runs draw from OS entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoRandom;

impl RngPolicy for PseudoRandom {
    const ALLOWS_ERROR_ESTIMATE: bool = true;
    type Generator = PseudoRandomSequence;

    fn make_sequence_generator(
        dimension: usize,
        seed: Option<u64>,
    ) -> Result<Self::Generator, EngineError> {
        Ok(PseudoRandomSequence::new(
            dimension,
            PricerRng::from_optional_seed(seed),
        ))
    }

    fn name() -> &'static str {
        "pseudo-random"
    }
}

/// Scrambled Sobol points through the inverse normal CDF.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowDiscrepancy;

impl RngPolicy for LowDiscrepancy {
    const ALLOWS_ERROR_ESTIMATE: bool = false;
    type Generator = SobolGaussianSequence;

    fn make_sequence_generator(
        dimension: usize,
        seed: Option<u64>,
    ) -> Result<Self::Generator, EngineError> {
        let sobol = SobolSequence::new(dimension, seed.unwrap_or(DEFAULT_SOBOL_SEED)).ok_or(
            EngineError::UnsupportedDimension {
                dimension,
                max: SOBOL_MAX_DIMENSIONS,
            },
        )?;
        Ok(SobolGaussianSequence::new(sobol))
    }

    fn name() -> &'static str {
        "low-discrepancy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_estimate_flags() {
        assert!(PseudoRandom::ALLOWS_ERROR_ESTIMATE);
        assert!(!LowDiscrepancy::ALLOWS_ERROR_ESTIMATE);
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let mut a = PseudoRandom::make_sequence_generator(3, Some(9)).unwrap();
        let mut b = PseudoRandom::make_sequence_generator(3, Some(9)).unwrap();
        let (mut xa, mut xb) = ([0.0; 3], [0.0; 3]);
        a.next_sequence(&mut xa);
        b.next_sequence(&mut xb);
        assert_eq!(xa, xb);
    }

    #[test]
    fn test_unseeded_low_discrepancy_uses_default_scramble() {
        let mut a = LowDiscrepancy::make_sequence_generator(2, None).unwrap();
        let mut b = LowDiscrepancy::make_sequence_generator(2, Some(DEFAULT_SOBOL_SEED)).unwrap();
        let (mut xa, mut xb) = ([0.0; 2], [0.0; 2]);
        a.next_sequence(&mut xa);
        b.next_sequence(&mut xb);
        assert_eq!(xa, xb);
        assert_eq!(a.dimension(), 2);
    }

    #[test]
    fn test_low_discrepancy_rejects_zero_dimension() {
        assert!(matches!(
            LowDiscrepancy::make_sequence_generator(0, Some(1)),
            Err(EngineError::UnsupportedDimension { dimension: 0, .. })
        ));
    }
}
