//! Pricing error types.

use pricer_core::market_data::SurfaceError;
use pricer_core::types::{Currency, CurrencyPair};
use pricer_curves::ProviderError;
use thiserror::Error;

/// Errors raised by the FX pricing methods.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A pricing input failed validation.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// What was wrong with the input.
        message: String,
    },

    /// The instrument's currencies do not match the market data bundle.
    #[error("Option currency {found} not compatible with smile data for {expected}")]
    CurrencyMismatch {
        /// The currency pair the market data covers.
        expected: CurrencyPair,
        /// The offending instrument currency.
        found: Currency,
    },

    /// Wrapped multicurve provider failure.
    #[error("Market data error: {0}")]
    Market(#[from] ProviderError),

    /// Wrapped volatility surface failure.
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),
}

impl PricingError {
    /// An invalid-parameter error from any message type.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_message() {
        let err = PricingError::invalid_parameter("negative volatility");
        assert!(format!("{err}").contains("negative volatility"));
    }

    #[test]
    fn currency_mismatch_names_both_sides() {
        let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
        let err = PricingError::CurrencyMismatch {
            expected: pair,
            found: Currency::JPY,
        };
        let text = format!("{err}");
        assert!(text.contains("JPY"));
        assert!(text.contains("EUR"));
    }
}
