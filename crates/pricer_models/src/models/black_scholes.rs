//! Black-Scholes process with term structures.
//!
//! ```text
//! d ln S = (r(t) - q(t) - 0.5 * sigma(t, S)^2) dt + sigma(t, S) dW
//! ```
//!
//! with `r` and `q` the instantaneous forward rates of the risk-free and
//! dividend curves and `sigma` the local volatility implied by the Black
//! variance surface.

use pricer_core::market_data::curves::{CurveEnum, YieldCurve};
use pricer_core::market_data::surfaces::{VolSurfaceEnum, VolatilitySurface};

use super::error::ProcessError;
use super::process::StochasticProcess1D;

/// Horizon over which instantaneous forwards and local variance are
/// approximated.
const INSTANTANEOUS_HORIZON: f64 = 1.0e-4;

/// Spot process driven by a risk-free curve, a dividend curve and a Black
/// volatility surface.
///
/// [`evolve`](StochasticProcess1D::evolve) is exact for strike-independent
/// surfaces: over `[t, t + dt]` it uses the forward rates of both curves and
/// the Black variance increment at the current level,
///
/// ```text
/// var   = w(S, t + dt) - w(S, t)
/// S'    = S * exp((f_r - f_q) * dt - 0.5 * var + sqrt(var) * dw)
/// ```
///
/// so every grid step re-reads the term structures.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralizedBlackScholesProcess {
    spot: f64,
    risk_free: CurveEnum<f64>,
    dividend: CurveEnum<f64>,
    volatility: VolSurfaceEnum<f64>,
}

impl GeneralizedBlackScholesProcess {
    /// Builds the process.
    ///
    /// # Errors
    ///
    /// `ProcessError::InvalidSpot` for a non-positive or non-finite spot.
    pub fn new(
        spot: f64,
        risk_free: CurveEnum<f64>,
        dividend: CurveEnum<f64>,
        volatility: VolSurfaceEnum<f64>,
    ) -> Result<Self, ProcessError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(ProcessError::InvalidSpot { spot });
        }
        Ok(Self {
            spot,
            risk_free,
            dividend,
            volatility,
        })
    }

    /// Current underlying level.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Risk-free discounting curve.
    #[inline]
    pub fn risk_free_rate(&self) -> &CurveEnum<f64> {
        &self.risk_free
    }

    /// Continuous dividend yield curve.
    #[inline]
    pub fn dividend_yield(&self) -> &CurveEnum<f64> {
        &self.dividend
    }

    /// Black volatility surface.
    #[inline]
    pub fn black_volatility(&self) -> &VolSurfaceEnum<f64> {
        &self.volatility
    }

    /// Whether every term structure is flat, in which case the process has
    /// constant coefficients.
    pub fn has_flat_term_structures(&self) -> bool {
        self.risk_free.is_flat() && self.dividend.is_flat() && self.volatility.is_flat()
    }

    /// Black variance accrued over `[t0, t0 + dt]` at level `x`, floored at
    /// zero.
    fn variance(&self, t0: f64, x: f64, dt: f64) -> Result<f64, ProcessError> {
        let w1 = self.volatility.black_variance(x, t0 + dt)?;
        let w0 = self.volatility.black_variance(x, t0)?;
        Ok((w1 - w0).max(0.0))
    }

    fn carry(&self, t0: f64, t1: f64) -> Result<f64, ProcessError> {
        let r = self.risk_free.forward_rate(t0, t1)?;
        let q = self.dividend.forward_rate(t0, t1)?;
        Ok(r - q)
    }
}

impl StochasticProcess1D for GeneralizedBlackScholesProcess {
    fn x0(&self) -> f64 {
        self.spot
    }

    fn drift(&self, t: f64, x: f64) -> Result<f64, ProcessError> {
        let h = INSTANTANEOUS_HORIZON;
        let local_var = self.variance(t, x, h)? / h;
        Ok(self.carry(t, t + h)? - 0.5 * local_var)
    }

    fn diffusion(&self, t: f64, x: f64) -> Result<f64, ProcessError> {
        let h = INSTANTANEOUS_HORIZON;
        Ok((self.variance(t, x, h)? / h).sqrt())
    }

    fn apply(&self, x: f64, dx: f64) -> f64 {
        x * dx.exp()
    }

    fn evolve(&self, t0: f64, x0: f64, dt: f64, dw: f64) -> Result<f64, ProcessError> {
        let var = self.variance(t0, x0, dt)?;
        let drift = self.carry(t0, t0 + dt)? * dt - 0.5 * var;
        Ok(self.apply(x0, drift + var.sqrt() * dw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::curves::{CurveInterpolation, InterpolatedCurve};
    use pricer_core::market_data::surfaces::{BlackVarianceCurve, InterpolatedVolSurface};

    fn flat(spot: f64, r: f64, q: f64, vol: f64) -> GeneralizedBlackScholesProcess {
        GeneralizedBlackScholesProcess::new(
            spot,
            CurveEnum::flat(r),
            CurveEnum::flat(q),
            VolSurfaceEnum::flat(vol),
        )
        .unwrap()
    }

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_new_rejects_bad_spot() {
        for spot in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = GeneralizedBlackScholesProcess::new(
                spot,
                CurveEnum::flat(0.0),
                CurveEnum::flat(0.0),
                VolSurfaceEnum::flat(0.2),
            );
            assert!(matches!(result, Err(ProcessError::InvalidSpot { .. })));
        }
    }

    #[test]
    fn test_accessors() {
        let p = flat(100.0, 0.05, 0.01, 0.2);
        assert_eq!(p.x0(), 100.0);
        assert_eq!(p.spot(), 100.0);
        assert_eq!(p.risk_free_rate().zero_rate(1.0).unwrap(), 0.05);
        assert_eq!(p.dividend_yield().zero_rate(1.0).unwrap(), 0.01);
        assert!(p.has_flat_term_structures());
    }

    // ========================================
    // Coefficients
    // ========================================

    #[test]
    fn test_flat_drift_and_diffusion() {
        let p = flat(100.0, 0.05, 0.01, 0.2);
        assert_relative_eq!(p.drift(0.0, 100.0).unwrap(), 0.05 - 0.01 - 0.02, epsilon = 1e-10);
        assert_relative_eq!(p.diffusion(0.5, 90.0).unwrap(), 0.2, epsilon = 1e-10);
    }

    #[test]
    fn test_flat_evolve_matches_closed_form() {
        let p = flat(100.0, 0.05, 0.0, 0.2);
        let dt: f64 = 0.5;
        let dw = 0.7;
        let expected = 100.0 * ((0.05 - 0.02) * dt + 0.2 * dt.sqrt() * dw).exp();
        assert_relative_eq!(p.evolve(0.0, 100.0, dt, dw).unwrap(), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_term_structure_evolve_uses_forward_quantities() {
        let rates = InterpolatedCurve::new(
            &[1.0, 2.0],
            &[0.02, 0.04],
            CurveInterpolation::LogLinear,
            false,
        )
        .unwrap();
        let vols = BlackVarianceCurve::new(&[1.0, 2.0], &[0.1, 0.2], false).unwrap();
        let p = GeneralizedBlackScholesProcess::new(
            100.0,
            rates.into(),
            CurveEnum::flat(0.0),
            vols.into(),
        )
        .unwrap();
        assert!(!p.has_flat_term_structures());

        // Forward rate on [1, 2] is 0.06, forward variance 0.08 - 0.01.
        let var: f64 = 0.07;
        let expected = 100.0 * (0.06 - 0.5 * var + var.sqrt() * 1.0).exp();
        assert_relative_eq!(p.evolve(1.0, 100.0, 1.0, 1.0).unwrap(), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_lookup_failure_propagates() {
        let vols = BlackVarianceCurve::new(&[1.0], &[0.2], false).unwrap();
        let p = GeneralizedBlackScholesProcess::new(
            100.0,
            CurveEnum::flat(0.0),
            CurveEnum::flat(0.0),
            vols.into(),
        )
        .unwrap();
        assert!(matches!(
            p.evolve(0.5, 100.0, 1.0, 0.0),
            Err(ProcessError::MarketData(_))
        ));
    }

    #[test]
    fn test_smile_evolves_before_first_expiry_and_off_grid() {
        let vols = InterpolatedVolSurface::new(
            &[80.0, 100.0, 120.0],
            &[0.5, 2.0],
            &[vec![0.26, 0.20, 0.22], vec![0.28, 0.22, 0.24]],
            false,
        )
        .unwrap();
        let p = GeneralizedBlackScholesProcess::new(
            100.0,
            CurveEnum::flat(0.0),
            CurveEnum::flat(0.0),
            VolSurfaceEnum::Interpolated(vols),
        )
        .unwrap();

        // First step sits inside [0, 0.5] where the 0.5y smile applies.
        let dt = 1.0 / 12.0;
        let var: f64 = 0.04 * dt;
        let expected = 100.0 * (-0.5 * var + var.sqrt()).exp();
        assert_relative_eq!(p.evolve(0.0, 100.0, dt, 1.0).unwrap(), expected, epsilon = 1e-12);

        // Levels beyond the strike grid use the edge vol.
        let var = 0.22 * 0.22 * dt;
        let expected = 150.0 * (-0.5 * var).exp();
        assert_relative_eq!(p.evolve(0.0, 150.0, dt, 0.0).unwrap(), expected, epsilon = 1e-12);
    }
}
