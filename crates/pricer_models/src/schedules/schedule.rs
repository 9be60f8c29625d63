//! Schedule generation.

use super::error::ScheduleError;
use super::frequency::Frequency;
use super::period::Period;
use pricer_core::types::time::{Date, DayCountConvention};
use pricer_core::types::Tenor;

/// A payment schedule: consecutive accrual periods from a start to an
/// end date.
///
/// # Examples
///
/// ```
/// use pricer_models::schedules::{Frequency, ScheduleBuilder};
/// use pricer_core::types::time::{Date, DayCountConvention};
///
/// let schedule = ScheduleBuilder::new()
///     .start(Date::from_ymd(2025, 1, 15).unwrap())
///     .end(Date::from_ymd(2027, 1, 15).unwrap())
///     .frequency(Frequency::SemiAnnual)
///     .day_count(DayCountConvention::ActualActual360)
///     .build()
///     .unwrap();
///
/// assert_eq!(schedule.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    periods: Vec<Period>,
}

impl Schedule {
    fn from_periods(periods: Vec<Period>) -> Self {
        Self { periods }
    }

    /// The periods in the schedule.
    #[inline]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Number of periods.
    #[inline]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// True when the schedule has no periods. Never true for a built
    /// schedule.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Payment dates, one per period.
    pub fn payment_dates(&self) -> Vec<Date> {
        self.periods.iter().map(|p| p.payment()).collect()
    }

    /// Accrual factor of each period.
    pub fn accrual_factors(&self) -> Vec<f64> {
        self.periods.iter().map(|p| p.year_fraction()).collect()
    }

    /// First accrual start date.
    #[inline]
    pub fn start_date(&self) -> Date {
        self.periods[0].start()
    }

    /// Last accrual end date.
    #[inline]
    pub fn end_date(&self) -> Date {
        self.periods[self.periods.len() - 1].end()
    }

    /// Iterator over the periods.
    pub fn iter(&self) -> impl Iterator<Item = &Period> {
        self.periods.iter()
    }

    /// The period containing `date`, if any.
    pub fn period_containing(&self, date: Date) -> Option<&Period> {
        self.periods.iter().find(|p| p.contains(date))
    }
}

/// Builder generating schedules by rolling calendar months forward from
/// the start date.
///
/// Rolling `i` periods lands on `start + i·months`, so the roll day
/// never drifts through short months. When `end_of_month` is set and the
/// start date is the last day of its month, every rolled date snaps to
/// its month end. A final short stub is created when the end date is not
/// a whole number of periods away.
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    start_date: Option<Date>,
    end_date: Option<Date>,
    period_months: Option<u32>,
    day_count: DayCountConvention,
    end_of_month: bool,
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleBuilder {
    /// Creates a builder with ACT/365 day count and no end-of-month rule.
    pub fn new() -> Self {
        Self {
            start_date: None,
            end_date: None,
            period_months: None,
            day_count: DayCountConvention::ActualActual365,
            end_of_month: false,
        }
    }

    /// Sets the first accrual start date.
    pub fn start(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the final accrual end date.
    pub fn end(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the payment frequency.
    pub fn frequency(mut self, freq: Frequency) -> Self {
        self.period_months = Some(freq.months());
        self
    }

    /// Sets the payment period from a month-based tenor.
    ///
    /// # Panics
    ///
    /// Does not panic; a non-month tenor surfaces as a build error.
    pub fn period(mut self, tenor: Tenor) -> Self {
        use pricer_core::types::tenor::TenorUnit;
        self.period_months = match tenor.unit() {
            TenorUnit::Months => Some(tenor.amount().unsigned_abs()),
            TenorUnit::Years => Some(tenor.amount().unsigned_abs() * 12),
            _ => None,
        };
        self
    }

    /// Sets the day count convention.
    pub fn day_count(mut self, dc: DayCountConvention) -> Self {
        self.day_count = dc;
        self
    }

    /// Snaps rolled dates to month end when the start date is one.
    pub fn end_of_month(mut self, flag: bool) -> Self {
        self.end_of_month = flag;
        self
    }

    /// Builds the schedule.
    ///
    /// # Errors
    ///
    /// Returns an error when a required field is missing, the start is
    /// not before the end, or no period can be generated.
    pub fn build(self) -> Result<Schedule, ScheduleError> {
        let start = self
            .start_date
            .ok_or(ScheduleError::MissingField { field: "start" })?;
        let end = self
            .end_date
            .ok_or(ScheduleError::MissingField { field: "end" })?;
        let months = self
            .period_months
            .filter(|m| *m > 0)
            .ok_or(ScheduleError::MissingField { field: "frequency" })?;
        if start >= end {
            return Err(ScheduleError::InvalidDateRange { start, end });
        }

        let snap_to_eom = self.end_of_month && start == start.end_of_month();
        let mut boundaries = vec![start];
        for i in 1.. {
            let shift = i64::from(i) * i64::from(months);
            let shift = i32::try_from(shift).map_err(|_| ScheduleError::DateOverflow {
                reason: format!("rolling {i} periods of {months} months"),
            })?;
            let mut date = start.add_months(shift);
            if snap_to_eom {
                date = date.end_of_month();
            }
            if date >= end {
                boundaries.push(end);
                break;
            }
            boundaries.push(date);
        }

        let periods: Vec<Period> = boundaries
            .windows(2)
            .map(|w| Period::with_payment_on_end(w[0], w[1], self.day_count))
            .collect();
        if periods.is_empty() {
            return Err(ScheduleError::NoPeriods { start, end });
        }
        Ok(Schedule::from_periods(periods))
    }
}
