//! Instrument error types.
//!
//! Structured error handling for instrument construction and the
//! reduction of rates definitions to bootstrap form.

use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive
/// - `InvalidExpiry`: Expiry time is non-positive or after payment
/// - `InvalidNotional`: Notional amount is invalid
/// - `InvalidBarrier`: Barrier level is non-positive
/// - `InvalidDateOrder`: A date range runs backwards
/// - `InvalidParameter`: General parameter validation failure
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry time (non-positive, or after the payment time).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid notional amount.
    #[error("Invalid notional: N = {notional}")]
    InvalidNotional {
        /// The invalid notional value
        notional: f64,
    },

    /// Invalid barrier level (non-positive).
    #[error("Invalid barrier level: H = {level}")]
    InvalidBarrier {
        /// The invalid barrier level
        level: f64,
    },

    /// A date range runs backwards.
    #[error("Invalid date order: {message}")]
    InvalidDateOrder {
        /// Description of the offending range
        message: String,
    },

    /// Invalid parameter (general validation failure).
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the parameter error
        message: String,
    },
}
