//! Rates instrument definitions for curve construction.
//!
//! Each definition is date-based, as produced by a curve-node converter
//! from a convention and a market quote. `to_bootstrap(valuation,
//! day_count)` maps the dates to year fractions and reduces the
//! definition to a [`BootstrapInstrument`] residual for the curve engine.
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::rates::CashDepositDefinition;
//! use pricer_core::types::{Currency, DayCountConvention, time::Date};
//!
//! let valuation = Date::from_ymd(2025, 6, 16).unwrap();
//! let deposit = CashDepositDefinition::new(
//!     Currency::USD,
//!     Date::from_ymd(2025, 6, 18).unwrap(),
//!     Date::from_ymd(2025, 9, 18).unwrap(),
//!     0.045,
//!     DayCountConvention::ActualActual360,
//! )
//! .unwrap();
//! let instr = deposit
//!     .to_bootstrap::<f64>(valuation, DayCountConvention::ActualActual365)
//!     .unwrap();
//! assert!(instr.maturity() > 0.0);
//! ```

mod bill;
mod bond;
mod bootstrap;
mod cash;
mod fra;
mod future;
mod swap;

pub use bill::BillDefinition;
pub use bond::{BondFixedDefinition, BondQuote};
pub use bootstrap::BootstrapInstrument;
pub use cash::CashDepositDefinition;
pub use fra::FraDefinition;
pub use future::RateFutureDefinition;
pub use swap::{SwapFixedIborDefinition, SwapFixedLeg, SwapIborLeg};

use num_traits::Float;
use pricer_core::types::time::{Date, DayCountConvention};

use crate::instruments::error::InstrumentError;

/// Year fraction from the valuation date in the curve's day count,
/// converted into the working float type.
pub(crate) fn curve_time<T: Float>(
    valuation: Date,
    date: Date,
    day_count: DayCountConvention,
) -> Result<T, InstrumentError> {
    let t = day_count.year_fraction_dates(valuation, date);
    if t < 0.0 {
        return Err(InstrumentError::InvalidDateOrder {
            message: format!("date {t} years before valuation"),
        });
    }
    T::from(t).ok_or_else(|| InstrumentError::InvalidParameter {
        message: format!("time {t} is not representable"),
    })
}

/// A quote value converted into the working float type.
pub(crate) fn quote_value<T: Float>(value: f64) -> Result<T, InstrumentError> {
    T::from(value).ok_or_else(|| InstrumentError::InvalidParameter {
        message: format!("quote {value} is not representable"),
    })
}
