//! CLI configuration management.
//!
//! Configuration is resolved from (highest priority first) environment
//! variables prefixed `TRADEWIND_`, a TOML file, and built-in defaults.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use crate::error::{CliError, Result};

/// Log levels accepted on the command line and in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-node tracing.
    Trace,
    /// Diagnostic output.
    Debug,
    /// Normal operation.
    #[default]
    Info,
    /// Problems only.
    Warn,
    /// Failures only.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(CliError::Config(format!(
                "invalid log level '{other}', expected trace, debug, info, warn or error"
            ))),
        }
    }
}

impl LogLevel {
    /// The tracing filter directive for this level.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// The market section: spot and flat discount rates for the pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Currency pair, base/counter, e.g. `"EUR/USD"`.
    pub pair: String,
    /// Spot rate, counter per base.
    pub spot: f64,
    /// Flat continuously quoted deposit rate of the counter currency.
    pub domestic_rate: f64,
    /// Flat deposit rate of the base currency.
    pub foreign_rate: f64,
    /// Pillar times in years for the deposit strips.
    pub pillar_times: Vec<f64>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            pair: "EUR/USD".to_string(),
            spot: 1.40,
            domestic_rate: 0.029,
            foreign_rate: 0.018,
            pillar_times: vec![0.25, 0.5, 1.0, 2.0, 5.0],
        }
    }
}

/// The smile section: delta-quoted volatility pillars.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SmileConfig {
    /// At-the-money volatility.
    pub atm_volatility: f64,
    /// Risk reversal at the quoted delta, call minus put.
    pub risk_reversal: f64,
    /// Butterfly at the quoted delta.
    pub butterfly: f64,
    /// Quoted delta, e.g. `0.25`.
    pub delta: f64,
    /// Smile expiry pillars in years.
    pub expiries: Vec<f64>,
}

impl Default for SmileConfig {
    fn default() -> Self {
        Self {
            atm_volatility: 0.185,
            risk_reversal: -0.012,
            butterfly: 0.003,
            delta: 0.25,
            expiries: vec![0.25, 0.5, 1.0, 2.0],
        }
    }
}

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level unless overridden by `--verbose` or `RUST_LOG`.
    pub log_level: LogLevel,
    /// Market data.
    pub market: MarketConfig,
    /// Volatility smile.
    pub smile: SmileConfig,
}

impl AppConfig {
    /// Load from a TOML file, or defaults when the file is absent.
    pub fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("failed to parse {path}: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `TRADEWIND_*` environment overrides.
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(spot) = std::env::var("TRADEWIND_SPOT") {
            self.market.spot = spot
                .parse()
                .map_err(|_| CliError::Config(format!("invalid TRADEWIND_SPOT '{spot}'")))?;
        }
        if let Ok(pair) = std::env::var("TRADEWIND_PAIR") {
            self.market.pair = pair;
        }
        if let Ok(level) = std::env::var("TRADEWIND_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        self.validate()
    }

    /// Reject configurations no pricing run could use.
    pub fn validate(&self) -> Result<()> {
        if self.market.spot <= 0.0 {
            return Err(CliError::Config(format!(
                "spot must be positive, got {}",
                self.market.spot
            )));
        }
        if self.smile.atm_volatility <= 0.0 {
            return Err(CliError::Config(format!(
                "ATM volatility must be positive, got {}",
                self.smile.atm_volatility
            )));
        }
        if self.market.pillar_times.is_empty() {
            return Err(CliError::Config("at least one pillar time is required".into()));
        }
        if self.smile.expiries.is_empty() {
            return Err(CliError::Config("at least one smile expiry is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        AppConfig::default().validate().unwrap();
    }

    #[test]
    fn toml_overrides_the_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            log_level = "debug"

            [market]
            pair = "GBP/USD"
            spot = 1.27

            [smile]
            atm_volatility = 0.11
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.market.pair, "GBP/USD");
        assert!((config.market.spot - 1.27).abs() < 1e-12);
        assert!((config.smile.atm_volatility - 0.11).abs() < 1e-12);
        // Untouched sections keep their defaults
        assert_eq!(config.market.pillar_times.len(), 5);
    }

    #[test]
    fn negative_spot_is_rejected() {
        let mut config = AppConfig::default();
        config.market.spot = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::from_file("/nonexistent/tradewind.toml").unwrap();
        assert_eq!(config.market.pair, "EUR/USD");
    }
}
