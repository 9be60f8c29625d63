//! Forward rate agreement definition.

use num_traits::Float;
use pricer_core::types::time::{Date, DayCountConvention};
use pricer_core::types::Currency;

use crate::instruments::error::InstrumentError;
use crate::instruments::rates::{curve_time, quote_value, BootstrapInstrument};

/// A forward rate agreement on one index period.
///
/// The index fixes on `fixing_date` and accrues from `accrual_start` to
/// `accrual_end`; the agreed rate is exchanged against the fixing over
/// that period.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FraDefinition {
    /// Contract currency.
    pub currency: Currency,
    /// Index fixing date.
    pub fixing_date: Date,
    /// Start of the index accrual.
    pub accrual_start: Date,
    /// End of the index accrual.
    pub accrual_end: Date,
    /// Agreed forward rate.
    pub rate: f64,
    /// Accrual factor of the index period in its own day count.
    pub accrual_factor: f64,
}

impl FraDefinition {
    /// Creates a FRA, computing the accrual factor in `day_count`.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidDateOrder` when the dates are not
    /// ordered `fixing <= accrual_start < accrual_end`.
    pub fn new(
        currency: Currency,
        fixing_date: Date,
        accrual_start: Date,
        accrual_end: Date,
        rate: f64,
        day_count: DayCountConvention,
    ) -> Result<Self, InstrumentError> {
        if fixing_date > accrual_start || accrual_start >= accrual_end {
            return Err(InstrumentError::InvalidDateOrder {
                message: format!(
                    "FRA dates must order fixing {fixing_date} <= start {accrual_start} < end {accrual_end}"
                ),
            });
        }
        Ok(Self {
            currency,
            fixing_date,
            accrual_start,
            accrual_end,
            rate,
            accrual_factor: day_count.year_fraction_dates(accrual_start, accrual_end),
        })
    }

    /// Reduces the FRA to its bootstrap residual.
    pub fn to_bootstrap<T: Float>(
        &self,
        valuation: Date,
        curve_day_count: DayCountConvention,
    ) -> Result<BootstrapInstrument<T>, InstrumentError> {
        Ok(BootstrapInstrument::Fra {
            start: curve_time(valuation, self.accrual_start, curve_day_count)?,
            maturity: curve_time(valuation, self.accrual_end, curve_day_count)?,
            rate: quote_value(self.rate)?,
            accrual: quote_value(self.accrual_factor)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fra() -> FraDefinition {
        FraDefinition::new(
            Currency::EUR,
            Date::from_ymd(2025, 9, 16).unwrap(),
            Date::from_ymd(2025, 9, 18).unwrap(),
            Date::from_ymd(2025, 12, 18).unwrap(),
            0.032,
            DayCountConvention::ActualActual360,
        )
        .unwrap()
    }

    #[test]
    fn accrual_covers_the_index_period() {
        assert_relative_eq!(fra().accrual_factor, 91.0 / 360.0, epsilon = 1e-12);
    }

    #[test]
    fn fixing_after_start_is_rejected() {
        assert!(FraDefinition::new(
            Currency::EUR,
            Date::from_ymd(2025, 9, 20).unwrap(),
            Date::from_ymd(2025, 9, 18).unwrap(),
            Date::from_ymd(2025, 12, 18).unwrap(),
            0.032,
            DayCountConvention::ActualActual360,
        )
        .is_err());
    }

    #[test]
    fn pillar_is_the_accrual_end() {
        let valuation = Date::from_ymd(2025, 6, 16).unwrap();
        let instr = fra()
            .to_bootstrap::<f64>(valuation, DayCountConvention::ActualActual365)
            .unwrap();
        assert_relative_eq!(instr.maturity(), 185.0 / 365.0, epsilon = 1e-12);
    }
}
