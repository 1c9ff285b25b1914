//! Run-file configuration.
//!
//! A run is described by a TOML file with `[market]`, `[option]` and
//! `[engine]` sections. Missing fields take defaults; `FROZEN_MC_*`
//! environment variables override the file, and command-line flags override
//! both.
//!
//! ```toml
//! log_level = "info"
//!
//! [market]
//! spot = 100.0
//! rate = 0.05
//! volatility = 0.2
//! # optional term structures as (time, value) pairs
//! rate_pillars = [[0.5, 0.03], [1.0, 0.04], [2.0, 0.045]]
//!
//! [option]
//! kind = "european"
//! option_type = "call"
//! strike = 100.0
//! maturity = 1.0
//!
//! [engine]
//! steps = 1
//! samples = 100000
//! antithetic = true
//! frozen = true
//! seed = 42
//! ```

use std::path::Path;

use pricer_models::instruments::OptionType;
use serde::Deserialize;

use crate::error::{CliError, Result};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Contract priced by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionKind {
    /// European vanilla
    #[default]
    European,
    /// Discrete arithmetic average-strike Asian
    AverageStrike,
}

/// Random-number policy of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RngKind {
    /// Pseudo-random normals
    #[default]
    PseudoRandom,
    /// Scrambled Sobol points
    LowDiscrepancy,
}

/// Market data: spot plus flat levels or `(time, value)` pillars.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Underlying level
    pub spot: f64,
    /// Flat continuously compounded risk-free rate
    pub rate: f64,
    /// Flat continuous dividend yield
    pub dividend: f64,
    /// Flat Black volatility
    pub volatility: f64,
    /// Zero-rate pillars replacing `rate`
    pub rate_pillars: Option<Vec<(f64, f64)>>,
    /// Volatility pillars replacing `volatility`
    pub vol_pillars: Option<Vec<(f64, f64)>>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            dividend: 0.0,
            volatility: 0.2,
            rate_pillars: None,
            vol_pillars: None,
        }
    }
}

/// Contract terms.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OptionConfig {
    /// European or average-strike
    pub kind: OptionKind,
    /// Call or put
    pub option_type: OptionType,
    /// Strike; for average-strike options only the volatility lookup of a
    /// frozen run uses it
    pub strike: f64,
    /// Exercise time
    pub maturity: f64,
    /// Average-strike fixing times; negative times are past fixings
    pub fixings: Vec<f64>,
    /// Sum of past fixings
    pub running_sum: f64,
    /// Number of past fixings
    pub past_fixings: usize,
}

impl Default for OptionConfig {
    fn default() -> Self {
        Self {
            kind: OptionKind::European,
            option_type: OptionType::Call,
            strike: 100.0,
            maturity: 1.0,
            fixings: Vec::new(),
            running_sum: 0.0,
            past_fixings: 0,
        }
    }
}

/// Engine settings, mapped onto the engine builders.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Random-number policy
    pub rng: RngKind,
    /// Fixed number of time steps (European)
    pub steps: Option<usize>,
    /// Time steps per year (European)
    pub steps_per_year: Option<usize>,
    /// Fixed sample count
    pub samples: Option<usize>,
    /// Absolute error tolerance
    pub tolerance: Option<f64>,
    /// Sample cap of a tolerance run
    pub max_samples: Option<usize>,
    /// Random sequence seed
    pub seed: Option<u64>,
    /// Antithetic variates
    pub antithetic: bool,
    /// Brownian bridge; engine default when unset
    pub brownian_bridge: Option<bool>,
    /// Frozen-parameter simulation
    pub frozen: bool,
}

/// A complete run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Market data
    pub market: MarketConfig,
    /// Contract
    pub option: OptionConfig,
    /// Engine
    pub engine: EngineConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            market: MarketConfig::default(),
            option: OptionConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}

impl RunConfig {
    /// Loads a run file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses a run from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `FROZEN_MC_*` environment overrides.
    pub fn with_env_override(self) -> Result<Self> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("FROZEN_MC_LOG_LEVEL") {
            self.log_level = level;
        }
        if let Some(samples) = lookup("FROZEN_MC_SAMPLES") {
            self.engine.samples = Some(parse_env("FROZEN_MC_SAMPLES", samples)?);
            self.engine.tolerance = None;
        }
        if let Some(tolerance) = lookup("FROZEN_MC_TOLERANCE") {
            self.engine.tolerance = Some(parse_env("FROZEN_MC_TOLERANCE", tolerance)?);
            self.engine.samples = None;
        }
        if let Some(seed) = lookup("FROZEN_MC_SEED") {
            self.engine.seed = Some(parse_env("FROZEN_MC_SEED", seed)?);
        }
        if let Some(frozen) = lookup("FROZEN_MC_FROZEN") {
            self.engine.frozen = parse_env("FROZEN_MC_FROZEN", frozen)?;
        }
        Ok(self)
    }

    /// Checks the run for settings the engines would reject, reporting every
    /// problem at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, LOG_LEVELS
            ));
        }

        let market = &self.market;
        if !(market.spot > 0.0 && market.spot.is_finite()) {
            errors.push(format!("spot must be positive, got {}", market.spot));
        }
        if market.vol_pillars.is_none() && !(market.volatility > 0.0) {
            errors.push(format!(
                "volatility must be positive, got {}",
                market.volatility
            ));
        }
        for (name, pillars) in [
            ("rate_pillars", &market.rate_pillars),
            ("vol_pillars", &market.vol_pillars),
        ] {
            if let Some(pillars) = pillars {
                if pillars.is_empty() {
                    errors.push(format!("{} cannot be empty", name));
                } else if pillars.windows(2).any(|w| w[1].0 <= w[0].0) {
                    errors.push(format!("{} times must be strictly increasing", name));
                }
            }
        }

        let option = &self.option;
        if !(option.maturity > 0.0) {
            errors.push(format!("maturity must be positive, got {}", option.maturity));
        }
        if option.strike < 0.0 {
            errors.push(format!("strike cannot be negative, got {}", option.strike));
        }
        match option.kind {
            OptionKind::European => {
                let engine = &self.engine;
                match (engine.steps, engine.steps_per_year) {
                    (None, None) => {
                        errors.push("european runs need steps or steps_per_year".to_string())
                    }
                    (Some(_), Some(_)) => errors
                        .push("steps and steps_per_year are mutually exclusive".to_string()),
                    _ => {}
                }
            }
            OptionKind::AverageStrike => {
                if !option.fixings.iter().any(|&t| t >= 0.0) {
                    errors.push("average-strike runs need at least one future fixing".to_string());
                }
                if self.engine.frozen && !(option.strike > 0.0) {
                    errors.push(
                        "frozen average-strike runs need a positive strike for the volatility lookup"
                            .to_string(),
                    );
                }
            }
        }

        let engine = &self.engine;
        match (engine.samples, engine.tolerance) {
            (None, None) => errors.push("either samples or tolerance must be set".to_string()),
            (Some(_), Some(_)) => {
                errors.push("samples and tolerance are mutually exclusive".to_string())
            }
            _ => {}
        }
        if let Some(tolerance) = engine.tolerance {
            if !(tolerance > 0.0) {
                errors.push(format!("tolerance must be positive, got {}", tolerance));
            }
            if engine.rng == RngKind::LowDiscrepancy {
                errors.push("low-discrepancy runs cannot target a tolerance".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::Validation(errors))
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidEnv { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EUROPEAN: &str = r#"
        [option]
        strike = 105.0

        [engine]
        steps = 1
        samples = 1000
    "#;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = RunConfig::from_toml(EUROPEAN).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.market, MarketConfig::default());
        assert_eq!(config.option.strike, 105.0);
        assert_eq!(config.option.kind, OptionKind::European);
        assert_eq!(config.engine.rng, RngKind::PseudoRandom);
        assert!(!config.engine.frozen);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_run_file() {
        let config = RunConfig::from_toml(
            r#"
            log_level = "debug"

            [market]
            spot = 95.0
            rate_pillars = [[0.5, 0.03], [1.0, 0.04]]
            vol_pillars = [[0.5, 0.25], [1.0, 0.22]]

            [option]
            kind = "average-strike"
            option_type = "put"
            fixings = [-0.25, 0.25, 0.5, 0.75, 1.0]
            running_sum = 97.0
            past_fixings = 1

            [engine]
            rng = "pseudo-random"
            tolerance = 0.05
            max_samples = 1000000
            frozen = true
            "#,
        )
        .unwrap();
        assert_eq!(config.option.kind, OptionKind::AverageStrike);
        assert_eq!(config.option.option_type, OptionType::Put);
        assert_eq!(
            config.market.rate_pillars,
            Some(vec![(0.5, 0.03), (1.0, 0.04)])
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sample_run_file_is_valid() {
        let config = RunConfig::from_toml(include_str!("../run.toml")).unwrap();
        assert_eq!(config.engine.steps_per_year, Some(12));
        assert!(config.engine.frozen);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_kind_is_a_parse_error() {
        let err = RunConfig::from_toml("[option]\nkind = \"barrier\"").unwrap_err();
        assert!(matches!(err, CliError::Parse(_)));
    }

    #[test]
    fn test_validation_collects_every_problem() {
        let mut config = RunConfig::default();
        config.market.spot = -1.0;
        config.engine.steps = Some(1);
        config.engine.steps_per_year = Some(12);
        match config.validate().unwrap_err() {
            CliError::Validation(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors[0].contains("spot"));
                assert!(errors[1].contains("mutually exclusive"));
                assert!(errors[2].contains("samples or tolerance"));
            }
            e => panic!("Expected Validation, got {:?}", e),
        }
    }

    #[test]
    fn test_low_discrepancy_tolerance_rejected() {
        let mut config = RunConfig::from_toml(EUROPEAN).unwrap();
        config.engine.samples = None;
        config.engine.tolerance = Some(0.01);
        config.engine.rng = RngKind::LowDiscrepancy;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = RunConfig::from_toml(EUROPEAN)
            .unwrap()
            .with_overrides_from(|name| match name {
                "FROZEN_MC_TOLERANCE" => Some("0.02".to_string()),
                "FROZEN_MC_FROZEN" => Some("true".to_string()),
                "FROZEN_MC_SEED" => Some(" 7 ".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.engine.tolerance, Some(0.02));
        assert_eq!(config.engine.samples, None);
        assert_eq!(config.engine.seed, Some(7));
        assert!(config.engine.frozen);
    }

    #[test]
    fn test_bad_env_value() {
        let err = RunConfig::default()
            .with_overrides_from(|name| {
                (name == "FROZEN_MC_SAMPLES").then(|| "many".to_string())
            })
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'many' for environment variable FROZEN_MC_SAMPLES"
        );
    }
}
