//! Interest rate future definition.

use num_traits::Float;
use pricer_core::types::time::{Date, DayCountConvention};
use pricer_core::types::Currency;

use crate::instruments::error::InstrumentError;
use crate::instruments::rates::{curve_time, quote_value, BootstrapInstrument};

/// A margined interest rate future on one index period.
///
/// Quoted as a price: `price = 1 - rate`. The index accrues from the
/// futures expiry (an IMM date) over the index tenor. Daily margining is
/// ignored for bootstrap purposes, so no convexity adjustment is applied.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateFutureDefinition {
    /// Contract currency.
    pub currency: Currency,
    /// Futures expiry, start of the index accrual.
    pub expiry: Date,
    /// End of the index accrual.
    pub accrual_end: Date,
    /// Futures price quote, e.g. `0.9550` for an implied rate of 4.5%.
    pub price: f64,
    /// Accrual factor of the index period in its own day count.
    pub accrual_factor: f64,
}

impl RateFutureDefinition {
    /// Creates a rate future, computing the accrual factor in `day_count`.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError` when the dates are backwards or the
    /// price is outside `(0, 1]`.
    pub fn new(
        currency: Currency,
        expiry: Date,
        accrual_end: Date,
        price: f64,
        day_count: DayCountConvention,
    ) -> Result<Self, InstrumentError> {
        if expiry >= accrual_end {
            return Err(InstrumentError::InvalidDateOrder {
                message: format!("future expiry {expiry} not before accrual end {accrual_end}"),
            });
        }
        if !(price > 0.0 && price <= 1.0) {
            return Err(InstrumentError::InvalidParameter {
                message: format!("futures price {price} outside (0, 1]"),
            });
        }
        Ok(Self {
            currency,
            expiry,
            accrual_end,
            price,
            accrual_factor: day_count.year_fraction_dates(expiry, accrual_end),
        })
    }

    /// Rate implied by the price quote, `1 - price`.
    #[inline]
    pub fn implied_rate(&self) -> f64 {
        1.0 - self.price
    }

    /// Reduces the future to its bootstrap residual.
    pub fn to_bootstrap<T: Float>(
        &self,
        valuation: Date,
        curve_day_count: DayCountConvention,
    ) -> Result<BootstrapInstrument<T>, InstrumentError> {
        Ok(BootstrapInstrument::Future {
            start: curve_time(valuation, self.expiry, curve_day_count)?,
            maturity: curve_time(valuation, self.accrual_end, curve_day_count)?,
            rate: quote_value(self.implied_rate())?,
            accrual: quote_value(self.accrual_factor)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn implied_rate_is_one_minus_price() {
        let fut = RateFutureDefinition::new(
            Currency::USD,
            Date::from_ymd(2025, 9, 17).unwrap(),
            Date::from_ymd(2025, 12, 17).unwrap(),
            0.9550,
            DayCountConvention::ActualActual360,
        )
        .unwrap();
        assert_relative_eq!(fut.implied_rate(), 0.045, epsilon = 1e-12);
    }

    #[test]
    fn price_above_one_is_rejected() {
        assert!(RateFutureDefinition::new(
            Currency::USD,
            Date::from_ymd(2025, 9, 17).unwrap(),
            Date::from_ymd(2025, 12, 17).unwrap(),
            1.01,
            DayCountConvention::ActualActual360,
        )
        .is_err());
    }
}
