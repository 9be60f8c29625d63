//! CLI error types.

use thiserror::Error;

/// Errors surfaced by the command-line interface.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file named on the command line does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// An argument failed validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration loading or validation failed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV file could not be parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Pricing failed.
    #[error("Pricing error: {0}")]
    Pricing(#[from] pricer_fx::PricingError),

    /// Curve construction failed.
    #[error("Curve error: {0}")]
    Curve(#[from] pricer_curves::BootstrapError),

    /// Node conversion failed.
    #[error("Conversion error: {0}")]
    Convert(#[from] pricer_curves::ConvertError),

    /// The multicurve provider rejected a request.
    #[error("Provider error: {0}")]
    Provider(#[from] pricer_curves::ProviderError),

    /// A market data lookup failed.
    #[error("Market data error: {0}")]
    MarketData(#[from] pricer_core::market_data::MarketDataError),

    /// An instrument could not be constructed.
    #[error("Instrument error: {0}")]
    Instrument(#[from] pricer_models::instruments::error::InstrumentError),

    /// The reference-data master rejected a request.
    #[error("Master error: {0}")]
    Master(#[from] infra_master::error::MasterError),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
