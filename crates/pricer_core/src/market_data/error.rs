//! Market data error types.
//!
//! This module provides structured error handling for yield curve, FX
//! matrix, and volatility smile operations.

use crate::types::InterpolationError;
use thiserror::Error;

/// Market data operation errors.
///
/// # Variants
///
/// - `InvalidMaturity`: Negative time to maturity
/// - `InvalidStrike`: Non-positive strike price
/// - `InvalidExpiry`: Non-positive time to expiry
/// - `OutOfBounds`: Query outside valid domain
/// - `Interpolation`: Wrapped interpolation error
/// - `InsufficientData`: Not enough data points for construction
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Invalid maturity (negative time).
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Query point outside valid domain.
    #[error("Out of bounds: {x} not in [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },
}

/// FX cross-rate matrix errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FxMatrixError {
    /// A rate must be strictly positive and finite.
    #[error("Invalid FX rate {rate} for {base}/{quote}")]
    InvalidRate {
        /// Base currency code
        base: String,
        /// Quote currency code
        quote: String,
        /// The offending rate
        rate: f64,
    },

    /// Base and quote currency are the same.
    #[error("Base and quote currency are both {0}")]
    IdenticalCurrencies(String),

    /// Currency has not been added to the matrix.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Both currencies of an added pair are already present.
    #[error("Pair {base}/{quote}: both currencies already present, use update_rate")]
    PairAlreadyPresent {
        /// Base currency code
        base: String,
        /// Quote currency code
        quote: String,
    },

    /// Neither currency of an added pair is present (non-initial add).
    #[error("Pair {base}/{quote}: neither currency is in the matrix")]
    DisconnectedPair {
        /// Base currency code
        base: String,
        /// Quote currency code
        quote: String,
    },

    /// Update targeted a pair that was never added directly.
    #[error("Pair {base}/{quote} was not added directly to the matrix")]
    PairNotFound {
        /// Base currency code
        base: String,
        /// Quote currency code
        quote: String,
    },

    /// A triangle of cross rates fails the consistency check.
    #[error(
        "Inconsistent triangle {a}/{b}/{c}: product {product} deviates from 1 by more than {tolerance}"
    )]
    Inconsistent {
        /// First currency of the triangle
        a: String,
        /// Second currency of the triangle
        b: String,
        /// Third currency of the triangle
        c: String,
        /// Product of the three cross rates around the triangle
        product: f64,
        /// Allowed deviation from 1
        tolerance: f64,
    },
}

/// Volatility smile and term-structure construction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// Input slices have inconsistent lengths.
    #[error("Mismatched lengths: {what} has {got}, expected {expected}")]
    MismatchedLengths {
        /// Which input was wrong
        what: &'static str,
        /// Length provided
        got: usize,
        /// Length required
        expected: usize,
    },

    /// Deltas must be strictly ascending in (0, 0.5).
    #[error("Invalid delta ladder: deltas must be strictly ascending in (0, 0.5)")]
    InvalidDeltaLadder,

    /// A delta outside the open interval (0, 1).
    #[error("Invalid delta: {delta}")]
    InvalidDelta {
        /// The offending delta
        delta: f64,
    },

    /// Non-positive expiry.
    #[error("Invalid expiry: {expiry}")]
    InvalidExpiry {
        /// The offending expiry
        expiry: f64,
    },

    /// Non-positive volatility.
    #[error("Invalid volatility: {volatility}")]
    InvalidVolatility {
        /// The offending volatility
        volatility: f64,
    },

    /// A term structure needs at least one smile.
    #[error("Term structure has no smiles")]
    EmptyTermStructure,

    /// Expiries must be strictly ascending.
    #[error("Term structure expiries must be strictly ascending")]
    NonAscendingExpiries,

    /// All smiles in a term structure must share the same delta ladder.
    #[error("Smiles in a term structure must share the same delta ladder")]
    InconsistentDeltaLadder,

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),
}
