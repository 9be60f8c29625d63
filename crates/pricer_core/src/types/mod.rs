//! Core numeric, time, and financial types.
//!
//! This module provides:
//! - `time`: Time types (Date, DayCountConvention, BusinessDayConvention) for financial calculations
//! - `tenor`: Market tenor type ("ON", "3M", "10Y") with parsing and date arithmetic
//! - `currency`: ISO 4217 currency codes with metadata
//! - `currency_pair`: Currency pairs with market quotation order
//! - `error`: Structured error types for date, currency, interpolation, and solver operations
//! - `dual`: Dual number integration with num-dual (when `num-dual-mode` is enabled)
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`Date`], [`DayCountConvention`], [`BusinessDayConvention`] from `time`
//! - [`Tenor`] from `tenor`
//! - [`Currency`] from `currency`
//! - [`CurrencyPair`] from `currency_pair`
//! - [`DateError`], [`CurrencyError`], [`InterpolationError`], [`SolverError`] from `error`

pub mod currency;
pub mod currency_pair;
#[cfg(feature = "num-dual-mode")]
pub mod dual;
pub mod error;
pub mod tenor;
pub mod time;

// Re-export commonly used types at module level
pub use currency::Currency;
pub use currency_pair::CurrencyPair;
pub use error::{CurrencyError, DateError, InterpolationError, SolverError, TenorError};
pub use tenor::Tenor;
pub use time::{
    time_to_maturity_dates, BusinessDayConvention, Date, DayCountConvention,
};
