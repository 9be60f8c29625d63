//! Cash deposit definition.

use num_traits::Float;
use pricer_core::types::time::{Date, DayCountConvention};
use pricer_core::types::Currency;

use crate::instruments::error::InstrumentError;
use crate::instruments::rates::{curve_time, quote_value, BootstrapInstrument};

/// A cash deposit: unit notional placed at `start`, repaid with simple
/// interest at `end`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CashDepositDefinition {
    /// Deposit currency.
    pub currency: Currency,
    /// Settlement date.
    pub start: Date,
    /// Maturity date.
    pub end: Date,
    /// Simply compounded deposit rate.
    pub rate: f64,
    /// Accrual factor of the deposit period in its own day count.
    pub accrual_factor: f64,
}

impl CashDepositDefinition {
    /// Creates a deposit, computing the accrual factor in `day_count`.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidDateOrder` when `start >= end`.
    pub fn new(
        currency: Currency,
        start: Date,
        end: Date,
        rate: f64,
        day_count: DayCountConvention,
    ) -> Result<Self, InstrumentError> {
        if start >= end {
            return Err(InstrumentError::InvalidDateOrder {
                message: format!("deposit start {start} not before end {end}"),
            });
        }
        Ok(Self {
            currency,
            start,
            end,
            rate,
            accrual_factor: day_count.year_fraction_dates(start, end),
        })
    }

    /// Reduces the deposit to its bootstrap residual.
    pub fn to_bootstrap<T: Float>(
        &self,
        valuation: Date,
        curve_day_count: DayCountConvention,
    ) -> Result<BootstrapInstrument<T>, InstrumentError> {
        Ok(BootstrapInstrument::Deposit {
            start: curve_time(valuation, self.start, curve_day_count)?,
            maturity: curve_time(valuation, self.end, curve_day_count)?,
            rate: quote_value(self.rate)?,
            accrual: quote_value(self.accrual_factor)?,
        })
    }
}
