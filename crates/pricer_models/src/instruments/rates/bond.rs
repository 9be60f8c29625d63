//! Fixed-coupon bond definition.

use num_traits::Float;
use pricer_core::types::time::{Date, DayCountConvention};
use pricer_core::types::Currency;

use crate::instruments::error::InstrumentError;
use crate::instruments::rates::{curve_time, quote_value, BootstrapInstrument};

/// How a bond is quoted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BondQuote {
    /// Clean price per unit face, e.g. `0.9875`.
    CleanPrice(f64),
    /// Annually compounded yield to maturity.
    Yield(f64),
}

/// A fixed-coupon bond with unit face value.
///
/// The coupon schedule is generated by the node converter from the bond
/// convention's frequency; settlement is assumed to fall on a coupon
/// date, so the clean and dirty prices coincide.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BondFixedDefinition {
    /// Bond currency.
    pub currency: Currency,
    /// Settlement date.
    pub settlement: Date,
    /// Coupon payment dates, ascending; the last pays coupon plus face.
    pub payment_dates: Vec<Date>,
    /// Accrual factor of each coupon period in the bond's day count.
    pub accrual_factors: Vec<f64>,
    /// Annual coupon rate.
    pub coupon: f64,
    /// Market quote.
    pub quote: BondQuote,
}

impl BondFixedDefinition {
    /// Creates a bond definition.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError` when the schedule is empty, lengths
    /// differ, or the payment dates are not ascending after settlement.
    pub fn new(
        currency: Currency,
        settlement: Date,
        payment_dates: Vec<Date>,
        accrual_factors: Vec<f64>,
        coupon: f64,
        quote: BondQuote,
    ) -> Result<Self, InstrumentError> {
        if payment_dates.is_empty() {
            return Err(InstrumentError::InvalidParameter {
                message: "bond has no coupon payments".to_string(),
            });
        }
        if payment_dates.len() != accrual_factors.len() {
            return Err(InstrumentError::InvalidParameter {
                message: format!(
                    "bond has {} payment dates but {} accrual factors",
                    payment_dates.len(),
                    accrual_factors.len()
                ),
            });
        }
        let mut previous = settlement;
        for date in &payment_dates {
            if *date <= previous {
                return Err(InstrumentError::InvalidDateOrder {
                    message: format!("bond payment {date} not after {previous}"),
                });
            }
            previous = *date;
        }
        Ok(Self {
            currency,
            settlement,
            payment_dates,
            accrual_factors,
            coupon,
            quote,
        })
    }

    /// Price per unit face at settlement.
    ///
    /// For a yield quote the price is recomputed by discounting each
    /// coupon annually at the yield over the cumulative accruals.
    pub fn dirty_price(&self) -> f64 {
        match self.quote {
            BondQuote::CleanPrice(price) => price,
            BondQuote::Yield(y) => {
                let mut time = 0.0;
                let mut price = 0.0;
                for (i, tau) in self.accrual_factors.iter().enumerate() {
                    time += tau;
                    let v = (1.0 + y).powf(-time);
                    price += self.coupon * tau * v;
                    if i + 1 == self.accrual_factors.len() {
                        price += v;
                    }
                }
                price
            }
        }
    }

    /// Reduces the bond to a swap-shaped residual with the dirty price
    /// as target.
    pub fn to_bootstrap<T: Float>(
        &self,
        valuation: Date,
        curve_day_count: DayCountConvention,
    ) -> Result<BootstrapInstrument<T>, InstrumentError> {
        let payment_times = self
            .payment_dates
            .iter()
            .map(|d| curve_time(valuation, *d, curve_day_count))
            .collect::<Result<Vec<T>, _>>()?;
        let accrual_factors = self
            .accrual_factors
            .iter()
            .map(|a| quote_value(*a))
            .collect::<Result<Vec<T>, _>>()?;
        Ok(BootstrapInstrument::Swap {
            start: curve_time(valuation, self.settlement, curve_day_count)?,
            payment_times,
            accrual_factors,
            rate: quote_value(self.coupon)?,
            target: quote_value(self.dirty_price())?,
        })
    }
}
