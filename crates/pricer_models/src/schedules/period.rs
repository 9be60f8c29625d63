//! Accrual period for scheduled instruments.

use pricer_core::types::time::{Date, DayCountConvention};
use std::fmt;

/// A single accrual period: start, end, payment date, and the day count
/// used to turn the period into a year fraction.
///
/// # Examples
///
/// ```
/// use pricer_models::schedules::Period;
/// use pricer_core::types::time::{Date, DayCountConvention};
///
/// let period = Period::with_payment_on_end(
///     Date::from_ymd(2025, 1, 15).unwrap(),
///     Date::from_ymd(2025, 7, 15).unwrap(),
///     DayCountConvention::Thirty360,
/// );
/// assert!((period.year_fraction() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    start: Date,
    end: Date,
    payment: Date,
    day_count: DayCountConvention,
}

impl Period {
    /// Creates a period with an explicit payment date.
    #[inline]
    pub fn new(start: Date, end: Date, payment: Date, day_count: DayCountConvention) -> Self {
        Self {
            start,
            end,
            payment,
            day_count,
        }
    }

    /// Creates a period paying on its accrual end date.
    #[inline]
    pub fn with_payment_on_end(start: Date, end: Date, day_count: DayCountConvention) -> Self {
        Self::new(start, end, end, day_count)
    }

    /// Accrual start date.
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Accrual end date.
    #[inline]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Payment date, possibly adjusted away from the accrual end.
    #[inline]
    pub fn payment(&self) -> Date {
        self.payment
    }

    /// Day count convention of the period.
    #[inline]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Year fraction of the accrual period in its day count.
    #[inline]
    pub fn year_fraction(&self) -> f64 {
        self.day_count.year_fraction_dates(self.start, self.end)
    }

    /// True when `date` lies in `[start, end)`.
    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date < self.end
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}] pay {}", self.start, self.end, self.payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn year_fraction_uses_the_day_count() {
        let p = Period::with_payment_on_end(
            date(2025, 1, 1),
            date(2025, 7, 1),
            DayCountConvention::ActualActual360,
        );
        assert!((p.year_fraction() - 181.0 / 360.0).abs() < 1e-12);
    }

    #[test]
    fn contains_is_half_open() {
        let p = Period::with_payment_on_end(
            date(2025, 1, 1),
            date(2025, 7, 1),
            DayCountConvention::ActualActual365,
        );
        assert!(p.contains(date(2025, 1, 1)));
        assert!(p.contains(date(2025, 6, 30)));
        assert!(!p.contains(date(2025, 7, 1)));
    }

    #[test]
    fn payment_can_differ_from_accrual_end() {
        let p = Period::new(
            date(2025, 1, 15),
            date(2025, 7, 15),
            date(2025, 7, 17),
            DayCountConvention::ActualActual365,
        );
        assert_eq!(p.end(), date(2025, 7, 15));
        assert_eq!(p.payment(), date(2025, 7, 17));
    }
}
