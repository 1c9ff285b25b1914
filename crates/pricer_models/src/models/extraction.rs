//! Frozen-parameter extraction.

use pricer_core::market_data::curves::YieldCurve;
use pricer_core::market_data::surfaces::VolatilitySurface;

use super::constant_black_scholes::{ConstantBlackScholesProcess, MarketSnapshot};
use super::error::ProcessError;
use super::process::StochasticProcess1D;
use super::process_enum::StochasticProcessEnum;

/// Freezes a term-structure Black-Scholes process at `time` and `strike`.
///
/// The snapshot holds
///
/// - `rate`: continuously compounded zero rate of the risk-free curve at `time`
/// - `dividend`: continuously compounded zero rate of the dividend curve at `time`
/// - `volatility`: Black volatility of the surface at `(strike, time)`
/// - `spot`: the current level of the process
///
/// # Approximation
///
/// The frozen process reproduces the term-structure process exactly only
/// for quantities that depend on the terminal distribution at `time` and on
/// the single strike `strike`. The shape of the curves between now and
/// `time`, and the smile away from `strike`, are discarded, so path-dependent
/// payoffs priced with the frozen process carry a model error whenever the
/// term structures are not flat.
///
/// # Errors
///
/// * `ProcessError::BlackScholesRequired` - `process` does not expose
///   Black-Scholes term structures; checked before any lookup
/// * `ProcessError::MarketData` - a curve or surface rejected the query
pub fn extract_constant_parameters(
    process: &StochasticProcessEnum,
    time: f64,
    strike: f64,
) -> Result<ConstantBlackScholesProcess, ProcessError> {
    let bs = process
        .as_black_scholes()
        .ok_or(ProcessError::BlackScholesRequired)?;

    let rate = bs.risk_free_rate().zero_rate(time)?;
    let dividend = bs.dividend_yield().zero_rate(time)?;
    let volatility = bs.black_volatility().volatility(strike, time)?;
    let spot = bs.x0();

    let snapshot = MarketSnapshot::new(spot, rate, dividend, volatility)?;
    Ok(ConstantBlackScholesProcess::new(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeneralizedBlackScholesProcess;
    use approx::assert_relative_eq;
    use pricer_core::market_data::curves::{CurveEnum, CurveInterpolation, InterpolatedCurve};
    use pricer_core::market_data::surfaces::{InterpolatedVolSurface, VolSurfaceEnum};
    use pricer_core::market_data::MarketDataError;

    fn term_structure_process() -> StochasticProcessEnum {
        let rates = InterpolatedCurve::new(
            &[0.5, 1.0, 2.0],
            &[0.02, 0.03, 0.05],
            CurveInterpolation::Linear,
            false,
        )
        .unwrap();
        let dividends = InterpolatedCurve::new(
            &[1.0, 2.0],
            &[0.01, 0.02],
            CurveInterpolation::Linear,
            false,
        )
        .unwrap();
        let smile = InterpolatedVolSurface::new(
            &[80.0, 100.0, 120.0],
            &[0.5, 2.0],
            &[vec![0.30, 0.20, 0.25], vec![0.26, 0.22, 0.24]],
            false,
        )
        .unwrap();
        GeneralizedBlackScholesProcess::new(102.0, rates.into(), dividends.into(), smile.into())
            .unwrap()
            .into()
    }

    #[test]
    fn test_samples_curves_at_horizon_and_strike() {
        let frozen = extract_constant_parameters(&term_structure_process(), 2.0, 80.0).unwrap();
        let s = frozen.snapshot();
        assert_eq!(s.spot(), 102.0);
        assert_relative_eq!(s.rate(), 0.05, epsilon = 1e-14);
        assert_relative_eq!(s.dividend(), 0.02, epsilon = 1e-14);
        assert_relative_eq!(s.volatility(), 0.26, epsilon = 1e-14);
    }

    #[test]
    fn test_strike_indexes_the_smile() {
        let process = term_structure_process();
        let atm = extract_constant_parameters(&process, 2.0, 100.0).unwrap();
        let otm = extract_constant_parameters(&process, 2.0, 120.0).unwrap();
        assert_relative_eq!(atm.snapshot().volatility(), 0.22, epsilon = 1e-14);
        assert_relative_eq!(otm.snapshot().volatility(), 0.24, epsilon = 1e-14);
        assert_eq!(atm.snapshot().rate(), otm.snapshot().rate());
    }

    #[test]
    fn test_deterministic() {
        let process = term_structure_process();
        let a = extract_constant_parameters(&process, 1.3, 95.0).unwrap();
        let b = extract_constant_parameters(&process, 1.3, 95.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_flat_curves_are_reproduced() {
        let process: StochasticProcessEnum = GeneralizedBlackScholesProcess::new(
            100.0,
            CurveEnum::flat(0.05),
            CurveEnum::flat(0.0),
            VolSurfaceEnum::flat(0.2),
        )
        .unwrap()
        .into();
        let frozen = extract_constant_parameters(&process, 1.0, 100.0).unwrap();
        let s = frozen.snapshot();
        assert_eq!((s.spot(), s.rate(), s.dividend(), s.volatility()), (100.0, 0.05, 0.0, 0.2));
    }

    #[test]
    fn test_requires_black_scholes_process() {
        let process: StochasticProcessEnum =
            ConstantBlackScholesProcess::from_parameters(100.0, 0.05, 0.0, 0.2)
                .unwrap()
                .into();
        assert_eq!(
            extract_constant_parameters(&process, 1.0, 100.0).unwrap_err(),
            ProcessError::BlackScholesRequired
        );
    }

    #[test]
    fn test_lookup_failures_propagate() {
        let process = term_structure_process();
        match extract_constant_parameters(&process, 3.0, 100.0).unwrap_err() {
            ProcessError::MarketData(MarketDataError::OutOfBounds { x, .. }) => assert_eq!(x, 3.0),
            e => panic!("Expected OutOfBounds, got {:?}", e),
        }
        match extract_constant_parameters(&process, 1.0, -5.0).unwrap_err() {
            ProcessError::MarketData(MarketDataError::InvalidStrike { strike }) => {
                assert_eq!(strike, -5.0)
            }
            e => panic!("Expected InvalidStrike, got {:?}", e),
        }
    }
}
