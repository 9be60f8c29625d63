//! Discount bill definition.

use num_traits::Float;
use pricer_core::types::time::{Date, DayCountConvention};
use pricer_core::types::Currency;

use crate::instruments::error::InstrumentError;
use crate::instruments::rates::{curve_time, quote_value, BootstrapInstrument};

/// A zero-coupon bill quoted as a simple money-market yield.
///
/// Settles at `settlement` for `1 / (1 + y·τ)` and redeems at par on
/// `maturity`, which is exactly the deposit repricing equation, so the
/// bill bootstraps through the deposit residual.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BillDefinition {
    /// Bill currency.
    pub currency: Currency,
    /// Settlement date.
    pub settlement: Date,
    /// Redemption date.
    pub maturity: Date,
    /// Simple yield quote.
    pub yield_quote: f64,
    /// Accrual factor settlement to maturity in the bill's day count.
    pub accrual_factor: f64,
}

impl BillDefinition {
    /// Creates a bill, computing the accrual factor in `day_count`.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidDateOrder` when
    /// `settlement >= maturity`.
    pub fn new(
        currency: Currency,
        settlement: Date,
        maturity: Date,
        yield_quote: f64,
        day_count: DayCountConvention,
    ) -> Result<Self, InstrumentError> {
        if settlement >= maturity {
            return Err(InstrumentError::InvalidDateOrder {
                message: format!("bill settlement {settlement} not before maturity {maturity}"),
            });
        }
        Ok(Self {
            currency,
            settlement,
            maturity,
            yield_quote,
            accrual_factor: day_count.year_fraction_dates(settlement, maturity),
        })
    }

    /// Settlement price per unit face, `1 / (1 + y·τ)`.
    #[inline]
    pub fn price(&self) -> f64 {
        1.0 / (1.0 + self.yield_quote * self.accrual_factor)
    }

    /// Reduces the bill to its bootstrap residual.
    pub fn to_bootstrap<T: Float>(
        &self,
        valuation: Date,
        curve_day_count: DayCountConvention,
    ) -> Result<BootstrapInstrument<T>, InstrumentError> {
        Ok(BootstrapInstrument::Deposit {
            start: curve_time(valuation, self.settlement, curve_day_count)?,
            maturity: curve_time(valuation, self.maturity, curve_day_count)?,
            rate: quote_value(self.yield_quote)?,
            accrual: quote_value(self.accrual_factor)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn price_discounts_the_face_value() {
        let bill = BillDefinition::new(
            Currency::USD,
            Date::from_ymd(2025, 6, 18).unwrap(),
            Date::from_ymd(2025, 12, 18).unwrap(),
            0.05,
            DayCountConvention::ActualActual360,
        )
        .unwrap();
        let tau = 183.0 / 360.0;
        assert_relative_eq!(bill.price(), 1.0 / (1.0 + 0.05 * tau), epsilon = 1e-12);
    }

    #[test]
    fn bootstraps_as_a_deposit() {
        let bill = BillDefinition::new(
            Currency::USD,
            Date::from_ymd(2025, 6, 18).unwrap(),
            Date::from_ymd(2025, 12, 18).unwrap(),
            0.05,
            DayCountConvention::ActualActual360,
        )
        .unwrap();
        let valuation = Date::from_ymd(2025, 6, 16).unwrap();
        let instr = bill
            .to_bootstrap::<f64>(valuation, DayCountConvention::ActualActual365)
            .unwrap();
        assert!(matches!(instr, BootstrapInstrument::Deposit { .. }));
    }
}
