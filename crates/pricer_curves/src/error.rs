//! Error types for node conversion, bootstrapping, and the provider.

use infra_master::error::MasterError;
use infra_master::id::ExternalId;
use pricer_core::market_data::error::{FxMatrixError, MarketDataError};
use pricer_core::types::{Currency, SolverError, Tenor};
use pricer_models::instruments::InstrumentError;
use pricer_models::schedules::ScheduleError;
use thiserror::Error;

/// Errors raised while converting a curve node into an instrument
/// definition.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The quote bundle has no value under the node's quote id.
    #[error("Missing quote: {id}")]
    MissingQuote {
        /// The quote id that was looked up.
        id: ExternalId,
    },

    /// The convention master has no record under the node's convention id.
    #[error("Missing convention: {id}")]
    MissingConvention {
        /// The convention id that was looked up.
        id: ExternalId,
    },

    /// The resolved convention is of the wrong kind for the node.
    #[error("Convention {id} is a {found}, expected a {expected}")]
    ConventionMismatch {
        /// The convention id that was resolved.
        id: ExternalId,
        /// Kind the node requires.
        expected: &'static str,
        /// Kind actually stored.
        found: &'static str,
    },

    /// Date arithmetic failed while laying out the instrument.
    #[error("Date error: {0}")]
    Date(#[from] pricer_core::types::DateError),

    /// Schedule generation failed.
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// The produced definition failed its own validation.
    #[error("Instrument error: {0}")]
    Instrument(#[from] InstrumentError),

    /// Master lookup failed for a reason other than a missing record.
    #[error("Master error: {0}")]
    Master(MasterError),
}

/// Errors raised by the sequential bootstrapper.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BootstrapError {
    /// Solver failed to converge at a specific maturity point.
    #[error("Failed to converge at maturity {maturity}: residual = {residual} after {iterations} iterations")]
    ConvergenceFailure {
        /// Maturity (in years) where convergence failed.
        maturity: f64,
        /// Final residual value.
        residual: f64,
        /// Number of iterations attempted.
        iterations: usize,
    },

    /// Two instruments share a pillar maturity.
    #[error("Duplicate maturity detected: {maturity}")]
    DuplicateMaturity {
        /// The duplicated maturity value.
        maturity: f64,
    },

    /// Not enough instruments to build a curve.
    #[error("Insufficient instruments: need at least {required}, got {provided}")]
    InsufficientData {
        /// Minimum number of instruments required.
        required: usize,
        /// Number of instruments provided.
        provided: usize,
    },

    /// A pillar implies a negative zero rate and the configuration
    /// forbids them.
    #[error("Negative rate detected at maturity {maturity}: rate = {rate}")]
    NegativeRate {
        /// Maturity where the negative rate was detected.
        maturity: f64,
        /// The negative rate value.
        rate: f64,
    },

    /// Discount factors stopped decreasing.
    #[error(
        "Arbitrage detected: discount factor not monotonically decreasing at maturity {maturity}"
    )]
    ArbitrageDetected {
        /// Maturity where arbitrage was detected.
        maturity: f64,
    },

    /// Wrapped root-finding error from the Brent fallback.
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    /// Wrapped market data error from the partial curve.
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// General invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl BootstrapError {
    /// Create a convergence failure error.
    pub fn convergence_failure(maturity: f64, residual: f64, iterations: usize) -> Self {
        Self::ConvergenceFailure {
            maturity,
            residual,
            iterations,
        }
    }

    /// Create a duplicate maturity error.
    pub fn duplicate_maturity(maturity: f64) -> Self {
        Self::DuplicateMaturity { maturity }
    }

    /// Create an insufficient data error.
    pub fn insufficient_data(required: usize, provided: usize) -> Self {
        Self::InsufficientData { required, provided }
    }

    /// Create a negative rate error.
    pub fn negative_rate(maturity: f64, rate: f64) -> Self {
        Self::NegativeRate { maturity, rate }
    }

    /// Create an arbitrage detected error.
    pub fn arbitrage_detected(maturity: f64) -> Self {
        Self::ArbitrageDetected { maturity }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if this is a convergence failure.
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::ConvergenceFailure { .. })
    }

    /// Check if this is a duplicate maturity error.
    pub fn is_duplicate_maturity(&self) -> bool {
        matches!(self, Self::DuplicateMaturity { .. })
    }

    /// Check if this is an insufficient data error.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }

    /// Check if this is a negative rate error.
    pub fn is_negative_rate(&self) -> bool {
        matches!(self, Self::NegativeRate { .. })
    }

    /// Check if this is an arbitrage detected error.
    pub fn is_arbitrage_detected(&self) -> bool {
        matches!(self, Self::ArbitrageDetected { .. })
    }
}

/// Errors raised by the multicurve provider and its builder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// No discount curve has been registered for the currency.
    #[error("No discount curve for currency {0}")]
    MissingDiscountCurve(Currency),

    /// No forward curve has been registered for the currency and tenor.
    #[error("No forward curve for {currency} {tenor}")]
    MissingForwardCurve {
        /// Currency of the missing curve.
        currency: Currency,
        /// Index tenor of the missing curve.
        tenor: Tenor,
    },

    /// Wrapped bootstrap failure from the builder.
    #[error("Bootstrap error: {0}")]
    Bootstrap(#[from] BootstrapError),

    /// Wrapped market data error from a curve query.
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// Wrapped FX matrix error.
    #[error("FX matrix error: {0}")]
    Fx(#[from] FxMatrixError),
}
