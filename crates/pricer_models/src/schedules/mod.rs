//! Payment schedule generation for swap legs.
//!
//! The node converter rolls accrual periods between effective and
//! maturity dates when it turns curve nodes into bootstrap cashflows:
//!
//! - [`Schedule`]: an ordered set of accrual periods
//! - [`Period`]: one accrual period with start, end and payment dates
//! - [`Frequency`]: payment frequency (annual, semi-annual, ...)
//! - [`ScheduleBuilder`]: builder for assembling schedules
//!
//! # Examples
//!
//! ```
//! use pricer_models::schedules::{Frequency, ScheduleBuilder};
//! use pricer_core::types::time::{Date, DayCountConvention};
//!
//! let schedule = ScheduleBuilder::new()
//!     .start(Date::from_ymd(2026, 8, 28).unwrap())
//!     .end(Date::from_ymd(2028, 8, 28).unwrap())
//!     .frequency(Frequency::SemiAnnual)
//!     .day_count(DayCountConvention::ActualActual360)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(schedule.periods().len(), 4);
//! ```

mod error;
mod frequency;
mod period;
mod schedule;

pub use error::ScheduleError;
pub use frequency::Frequency;
pub use period::Period;
pub use schedule::{Schedule, ScheduleBuilder};
