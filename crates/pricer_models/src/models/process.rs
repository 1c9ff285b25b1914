//! One-factor diffusion contract.
//!
//! A process describes
//!
//! ```text
//! dx = mu(t, x) dt + sigma(t, x) dW
//! ```
//!
//! in some state variable, together with an `apply` map that adds an
//! increment to a level. Log-space processes set `apply(x, dx) = x * exp(dx)`
//! so that drift and diffusion act on `ln x`.

use super::error::ProcessError;

/// One-factor diffusion used by the path generator.
///
/// Drift and diffusion return `Result` because term-structure processes look
/// them up in curves that may reject the query; constant-parameter processes
/// always succeed.
pub trait StochasticProcess1D {
    /// Initial level.
    fn x0(&self) -> f64;

    /// Number of Brownian factors driving the process.
    fn factors(&self) -> usize {
        1
    }

    /// Drift `mu(t, x)`.
    fn drift(&self, t: f64, x: f64) -> Result<f64, ProcessError>;

    /// Diffusion `sigma(t, x)`.
    fn diffusion(&self, t: f64, x: f64) -> Result<f64, ProcessError>;

    /// Level reached by adding `dx` to `x`.
    fn apply(&self, x: f64, dx: f64) -> f64 {
        x + dx
    }

    /// Level at `t0 + dt` given the standard normal draw `dw`.
    ///
    /// The default is an Euler step:
    ///
    /// ```text
    /// apply(x0, mu * dt + sigma * sqrt(dt) * dw)
    /// ```
    fn evolve(&self, t0: f64, x0: f64, dt: f64, dw: f64) -> Result<f64, ProcessError> {
        let mu = self.drift(t0, x0)?;
        let sigma = self.diffusion(t0, x0)?;
        Ok(self.apply(x0, mu * dt + sigma * dt.sqrt() * dw))
    }
}
