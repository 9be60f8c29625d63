//! Fixed-vs-ibor swap definition.

use num_traits::Float;
use pricer_core::types::time::{Date, DayCountConvention};
use pricer_core::types::{Currency, Tenor};

use crate::instruments::error::InstrumentError;
use crate::instruments::rates::{curve_time, quote_value, BootstrapInstrument};

/// The fixed leg of a swap: payment dates with their accrual factors and
/// the fixed rate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapFixedLeg {
    /// Payment dates, ascending.
    pub payment_dates: Vec<Date>,
    /// Accrual factor of each period in the leg's day count.
    pub accrual_factors: Vec<f64>,
    /// Fixed rate.
    pub rate: f64,
}

/// The floating leg of a swap: index payment dates with accrual factors
/// and the index tenor the forwards are projected from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapIborLeg {
    /// Payment dates, ascending.
    pub payment_dates: Vec<Date>,
    /// Accrual factor of each period in the leg's day count.
    pub accrual_factors: Vec<f64>,
    /// Tenor of the projected index.
    pub index_tenor: Tenor,
}

/// A fixed-vs-ibor interest rate swap.
///
/// `payer` refers to the fixed leg: `true` pays fixed and receives the
/// index. For bootstrapping only the fixed-leg cash flows and the
/// effective date matter; the floating leg is worth par at `effective`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapFixedIborDefinition {
    /// Swap currency.
    pub currency: Currency,
    /// Effective (start) date of both legs.
    pub effective: Date,
    /// Fixed leg.
    pub fixed_leg: SwapFixedLeg,
    /// Floating leg.
    pub ibor_leg: SwapIborLeg,
    /// True when the position pays the fixed leg.
    pub payer: bool,
}

impl SwapFixedIborDefinition {
    /// Creates a swap definition.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError` when a leg is empty, a leg's dates and
    /// accruals differ in length, or the fixed dates are not ascending
    /// and after the effective date.
    pub fn new(
        currency: Currency,
        effective: Date,
        fixed_leg: SwapFixedLeg,
        ibor_leg: SwapIborLeg,
        payer: bool,
    ) -> Result<Self, InstrumentError> {
        for (name, dates, accruals) in [
            ("fixed", &fixed_leg.payment_dates, &fixed_leg.accrual_factors),
            ("ibor", &ibor_leg.payment_dates, &ibor_leg.accrual_factors),
        ] {
            if dates.is_empty() {
                return Err(InstrumentError::InvalidParameter {
                    message: format!("{name} leg has no payments"),
                });
            }
            if dates.len() != accruals.len() {
                return Err(InstrumentError::InvalidParameter {
                    message: format!(
                        "{name} leg has {} dates but {} accrual factors",
                        dates.len(),
                        accruals.len()
                    ),
                });
            }
        }
        let mut previous = effective;
        for date in &fixed_leg.payment_dates {
            if *date <= previous {
                return Err(InstrumentError::InvalidDateOrder {
                    message: format!("fixed payment {date} not after {previous}"),
                });
            }
            previous = *date;
        }
        Ok(Self {
            currency,
            effective,
            fixed_leg,
            ibor_leg,
            payer,
        })
    }

    /// Maturity of the swap, the last fixed payment date.
    pub fn maturity_date(&self) -> Date {
        *self
            .fixed_leg
            .payment_dates
            .last()
            .unwrap_or(&self.effective)
    }

    /// Reduces the swap to its par-identity bootstrap residual.
    pub fn to_bootstrap<T: Float>(
        &self,
        valuation: Date,
        curve_day_count: DayCountConvention,
    ) -> Result<BootstrapInstrument<T>, InstrumentError> {
        let payment_times = self
            .fixed_leg
            .payment_dates
            .iter()
            .map(|d| curve_time(valuation, *d, curve_day_count))
            .collect::<Result<Vec<T>, _>>()?;
        let accrual_factors = self
            .fixed_leg
            .accrual_factors
            .iter()
            .map(|a| quote_value(*a))
            .collect::<Result<Vec<T>, _>>()?;
        Ok(BootstrapInstrument::Swap {
            start: curve_time(valuation, self.effective, curve_day_count)?,
            payment_times,
            accrual_factors,
            rate: quote_value(self.fixed_leg.rate)?,
            target: T::one(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_year_swap(rate: f64) -> SwapFixedIborDefinition {
        let effective = Date::from_ymd(2025, 6, 18).unwrap();
        let fixed = SwapFixedLeg {
            payment_dates: vec![
                Date::from_ymd(2026, 6, 18).unwrap(),
                Date::from_ymd(2027, 6, 18).unwrap(),
            ],
            accrual_factors: vec![1.0, 1.0],
            rate,
        };
        let ibor = SwapIborLeg {
            payment_dates: vec![
                Date::from_ymd(2025, 12, 18).unwrap(),
                Date::from_ymd(2026, 6, 18).unwrap(),
                Date::from_ymd(2026, 12, 18).unwrap(),
                Date::from_ymd(2027, 6, 18).unwrap(),
            ],
            accrual_factors: vec![0.5, 0.5, 0.5, 0.5],
            index_tenor: Tenor::months(6),
        };
        SwapFixedIborDefinition::new(Currency::USD, effective, fixed, ibor, true).unwrap()
    }

    #[test]
    fn maturity_is_the_last_fixed_payment() {
        let swap = two_year_swap(0.03);
        assert_eq!(swap.maturity_date(), Date::from_ymd(2027, 6, 18).unwrap());
    }

    #[test]
    fn bootstrap_form_uses_the_fixed_leg_and_par_target() {
        let valuation = Date::from_ymd(2025, 6, 16).unwrap();
        let instr = two_year_swap(0.03)
            .to_bootstrap::<f64>(valuation, DayCountConvention::ActualActual365)
            .unwrap();
        match instr {
            BootstrapInstrument::Swap {
                payment_times,
                rate,
                target,
                ..
            } => {
                assert_eq!(payment_times.len(), 2);
                assert_relative_eq!(rate, 0.03, epsilon = 1e-15);
                assert_relative_eq!(target, 1.0, epsilon = 1e-15);
            }
            other => panic!("expected a swap residual, got {other:?}"),
        }
    }

    #[test]
    fn mismatched_leg_lengths_are_rejected() {
        let effective = Date::from_ymd(2025, 6, 18).unwrap();
        let fixed = SwapFixedLeg {
            payment_dates: vec![Date::from_ymd(2026, 6, 18).unwrap()],
            accrual_factors: vec![1.0, 1.0],
            rate: 0.03,
        };
        let ibor = SwapIborLeg {
            payment_dates: vec![Date::from_ymd(2026, 6, 18).unwrap()],
            accrual_factors: vec![1.0],
            index_tenor: Tenor::months(6),
        };
        assert!(
            SwapFixedIborDefinition::new(Currency::USD, effective, fixed, ibor, true).is_err()
        );
    }

    #[test]
    fn descending_fixed_dates_are_rejected() {
        let effective = Date::from_ymd(2025, 6, 18).unwrap();
        let fixed = SwapFixedLeg {
            payment_dates: vec![
                Date::from_ymd(2027, 6, 18).unwrap(),
                Date::from_ymd(2026, 6, 18).unwrap(),
            ],
            accrual_factors: vec![1.0, 1.0],
            rate: 0.03,
        };
        let ibor = SwapIborLeg {
            payment_dates: vec![Date::from_ymd(2027, 6, 18).unwrap()],
            accrual_factors: vec![2.0],
            index_tenor: Tenor::months(6),
        };
        assert!(
            SwapFixedIborDefinition::new(Currency::USD, effective, fixed, ibor, true).is_err()
        );
    }
}
