//! Scrambled Sobol sequences and their Gaussian transform.
//!
//! The first dimension uses the canonical direction numbers (van der Corput
//! in base 2); higher dimensions draw odd direction numbers from a
//! `splitmix64` hash of the seed. Every dimension is then digitally shifted
//! by a seed-dependent scrambler. Points are generated in Gray-code order and
//! mapped to the open interval `(0, 1)`.

use super::GaussianSequenceGenerator;

/// Largest supported dimension.
pub const SOBOL_MAX_DIMENSIONS: usize = 21_201;

/// Scramble seed used when none is configured.
pub const DEFAULT_SOBOL_SEED: u64 = 0;

const BITS: usize = 64;

/// `2^-53`.
const INV_2_53: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Scrambled Sobol sequence in `(0, 1)^d`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::SobolSequence;
///
/// let mut sobol = SobolSequence::new(3, 42).unwrap();
/// let mut point = [0.0; 3];
/// sobol.next_point(&mut point);
/// assert!(point.iter().all(|&u| u > 0.0 && u < 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct SobolSequence {
    dimension: usize,
    index: u64,
    state: Vec<u64>,
    directions: Vec<[u64; BITS]>,
    scramblers: Vec<u64>,
}

impl SobolSequence {
    /// Builds a sequence of the given dimension.
    ///
    /// Returns `None` outside `[1, SOBOL_MAX_DIMENSIONS]`.
    pub fn new(dimension: usize, seed: u64) -> Option<Self> {
        if !(1..=SOBOL_MAX_DIMENSIONS).contains(&dimension) {
            return None;
        }
        let directions = (0..dimension as u64)
            .map(|dim| direction_numbers(dim, seed))
            .collect();
        let scramblers = (0..dimension as u64)
            .map(|dim| splitmix64(seed ^ ((dim + 1) << 32)))
            .collect();
        Some(Self {
            dimension,
            index: 0,
            state: vec![0; dimension],
            directions,
            scramblers,
        })
    }

    /// Number of coordinates per point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Writes the next point into `out[..dimension]`.
    ///
    /// The sequence restarts after `2^64 - 1` points.
    pub fn next_point(&mut self, out: &mut [f64]) {
        self.index = self.index.wrapping_add(1);
        if self.index == 0 {
            self.index = 1;
            self.state.iter_mut().for_each(|x| *x = 0);
        }
        let c = self.index.trailing_zeros() as usize;
        for dim in 0..self.dimension {
            self.state[dim] ^= self.directions[dim][c];
            let bits = (self.state[dim] ^ self.scramblers[dim]) >> 11;
            out[dim] = (bits as f64 + 0.5) * INV_2_53;
        }
    }
}

fn direction_numbers(dim: u64, seed: u64) -> [u64; BITS] {
    let mut v = [0_u64; BITS];
    for (j, item) in v.iter_mut().enumerate() {
        let m = if dim == 0 {
            1
        } else {
            let mask = if j == BITS - 1 {
                u64::MAX
            } else {
                (1_u64 << (j + 1)) - 1
            };
            (splitmix64(seed ^ ((dim + 1) << 40) ^ j as u64) | 1) & mask
        };
        *item = m << (BITS - 1 - j);
    }
    v
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Inverse of the standard normal CDF (Acklam's rational approximation,
/// relative error below `1.15e-9`).
///
/// Returns `-inf`/`+inf` at `0`/`1` and `NaN` outside `[0, 1]`.
pub fn inverse_normal_cdf(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838,
        -2.549_732_539_343_734,
        4.374_664_141_464_968,
        2.938_163_982_698_783,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996,
        3.754_408_661_907_416,
    ];
    const P_LOW: f64 = 0.024_25;

    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    let tail = |q: f64| {
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    }
}

/// Sobol points mapped through the inverse normal CDF.
#[derive(Debug, Clone)]
pub struct SobolGaussianSequence {
    sobol: SobolSequence,
}

impl SobolGaussianSequence {
    /// Wraps a Sobol sequence.
    pub fn new(sobol: SobolSequence) -> Self {
        Self { sobol }
    }
}

impl GaussianSequenceGenerator for SobolGaussianSequence {
    fn dimension(&self) -> usize {
        self.sobol.dimension()
    }

    fn next_sequence(&mut self, out: &mut [f64]) {
        let out = &mut out[..self.sobol.dimension()];
        self.sobol.next_point(out);
        for x in out.iter_mut() {
            *x = inverse_normal_cdf(*x);
        }
    }
}
