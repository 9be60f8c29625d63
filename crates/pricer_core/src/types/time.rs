//! Time types and Day Count Conventions for financial calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate with calendar arithmetic
//! - `DayCountConvention`: Industry-standard day count conventions
//! - `BusinessDayConvention`: Date adjustment rules for non-business days
//! - Year fraction calculations for financial instruments
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{Date, DayCountConvention};
//! use pricer_core::types::tenor::Tenor;
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = start.add_tenor(Tenor::months(6));
//! assert_eq!(end, Date::from_ymd(2024, 7, 1).unwrap());
//!
//! // Calculate year fraction using ACT/365
//! let yf = DayCountConvention::ActualActual365.year_fraction_dates(start, end);
//! assert!((yf - 0.4986).abs() < 0.001);
//! ```

use chrono::{Datelike, Local, Months, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;
use super::tenor::{Tenor, TenorUnit};

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation, standard date arithmetic, and the
/// calendar stepping operations (days, months, tenors) that instrument
/// schedule generation relies on.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// assert_eq!(date - start, 166);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// Returns `Err(DateError::InvalidDate)` when the components do not
    /// form a real calendar date (e.g. 30 February).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 6, 15).unwrap();
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert!(Date::from_ymd(2024, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    /// assert!(Date::parse("15/06/2024").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the nth occurrence of a weekday within a month.
    ///
    /// Used for exchange-traded expiry rules such as the third Wednesday
    /// of the contract month.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    /// use chrono::Weekday;
    ///
    /// // Third Wednesday of March 2024
    /// let imm = Date::nth_weekday_of_month(2024, 3, 3, Weekday::Wed).unwrap();
    /// assert_eq!(imm, Date::from_ymd(2024, 3, 20).unwrap());
    /// ```
    pub fn nth_weekday_of_month(
        year: i32,
        month: u32,
        nth: u8,
        weekday: Weekday,
    ) -> Result<Self, DateError> {
        NaiveDate::from_weekday_of_month_opt(year, month, weekday, nth)
            .map(Date)
            .ok_or(DateError::NoSuchWeekday { year, month, nth })
    }

    /// Returns the underlying NaiveDate for access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns true if the date falls on a Saturday or Sunday.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 6, 15).unwrap().is_weekend()); // Saturday
    /// assert!(!Date::from_ymd(2024, 6, 17).unwrap().is_weekend()); // Monday
    /// ```
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns the date shifted by a number of calendar days.
    ///
    /// Negative values shift backwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 28).unwrap();
    /// assert_eq!(date.add_days(1), Date::from_ymd(2024, 2, 29).unwrap());
    /// assert_eq!(date.add_days(-28), Date::from_ymd(2024, 1, 31).unwrap());
    /// ```
    pub fn add_days(self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Returns the date shifted by a number of calendar months.
    ///
    /// When the target month is shorter, the day is clamped to its last
    /// day (31 January + 1M is 29 February in a leap year).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let eom = Date::from_ymd(2024, 1, 31).unwrap();
    /// assert_eq!(eom.add_months(1), Date::from_ymd(2024, 2, 29).unwrap());
    /// assert_eq!(eom.add_months(-2), Date::from_ymd(2023, 11, 30).unwrap());
    /// ```
    pub fn add_months(self, months: i32) -> Self {
        if months >= 0 {
            Date(self.0 + Months::new(months as u32))
        } else {
            Date(self.0 - Months::new(months.unsigned_abs()))
        }
    }

    /// Returns the date shifted by a number of calendar years.
    ///
    /// Equivalent to `add_months(12 * years)`, with the same day clamping
    /// (29 February + 1Y is 28 February).
    pub fn add_years(self, years: i32) -> Self {
        self.add_months(years.saturating_mul(12))
    }

    /// Returns the date shifted by a market tenor.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    /// use pricer_core::types::tenor::Tenor;
    ///
    /// let date = Date::from_ymd(2024, 1, 15).unwrap();
    /// assert_eq!(date.add_tenor(Tenor::weeks(2)), Date::from_ymd(2024, 1, 29).unwrap());
    /// assert_eq!(date.add_tenor(Tenor::months(6)), Date::from_ymd(2024, 7, 15).unwrap());
    /// assert_eq!(date.add_tenor(Tenor::years(10)), Date::from_ymd(2034, 1, 15).unwrap());
    /// ```
    pub fn add_tenor(self, tenor: Tenor) -> Self {
        match tenor.unit() {
            TenorUnit::Days => self.add_days(i64::from(tenor.amount())),
            TenorUnit::Weeks => self.add_days(7 * i64::from(tenor.amount())),
            TenorUnit::Months => self.add_months(tenor.amount()),
            TenorUnit::Years => self.add_years(tenor.amount()),
        }
    }

    /// Returns the last day of this date's month.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 10).unwrap();
    /// assert_eq!(date.end_of_month(), Date::from_ymd(2024, 2, 29).unwrap());
    /// ```
    pub fn end_of_month(self) -> Self {
        let first = Date(self.0 - chrono::Duration::days(i64::from(self.day()) - 1));
        first.add_months(1).add_days(-1)
    }

    /// Returns true if this date is the last day of its month.
    pub fn is_end_of_month(&self) -> bool {
        *self == self.end_of_month()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(inner: NaiveDate) -> Self {
        Date(inner)
    }
}

/// Day Count Convention (year fraction convention).
///
/// # Variants
/// - `ActualActual365`: Actual days / 365 (standard for derivatives and UK bonds)
/// - `ActualActual360`: Actual days / 360 (money market instruments)
/// - `Thirty360`: Each month treated as 30 days, year as 360 days (US corporate bonds)
///
/// # Usage
///
/// ```
/// use pricer_core::types::time::DayCountConvention;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
///
/// let yf = DayCountConvention::ActualActual360.year_fraction(start, end);
/// // 182 days / 360.0 ≈ 0.5056
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    ///
    /// Used in most derivatives markets, UK gilts, and JGBs.
    ActualActual365,

    /// Actual/360: actual_days / 360.0
    ///
    /// Used in money market deposits, T-bills, and IBOR-based instruments.
    ActualActual360,

    /// 30/360 US Bond Basis.
    ///
    /// Each month is treated as having 30 days, and the year as 360 days.
    /// Used in US corporate and agency bonds.
    Thirty360,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::ActualActual365.name(), "ACT/365");
    /// assert_eq!(DayCountConvention::Thirty360.name(), "30/360");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::ActualActual365 => "ACT/365",
            DayCountConvention::ActualActual360 => "ACT/360",
            DayCountConvention::Thirty360 => "30/360",
        }
    }

    /// Calculate year fraction between two dates.
    ///
    /// # Panics
    /// Panics if `start > end`. Use [`year_fraction_dates`](Self::year_fraction_dates)
    /// when a signed result is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::DayCountConvention;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    ///
    /// let yf_365 = DayCountConvention::ActualActual365.year_fraction(start, end);
    /// assert!((yf_365 - 0.4986).abs() < 0.001);
    /// ```
    pub fn year_fraction(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        assert!(
            start <= end,
            "start date must be less than or equal to end date"
        );

        match self {
            DayCountConvention::ActualActual365 => (end - start).num_days() as f64 / 365.0,
            DayCountConvention::ActualActual360 => (end - start).num_days() as f64 / 360.0,
            DayCountConvention::Thirty360 => thirty_360_days(start, end) as f64 / 360.0,
        }
    }

    /// Calculates year fraction using the Date type.
    ///
    /// Unlike `year_fraction`, this method returns negative values when
    /// start > end instead of panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::{Date, DayCountConvention};
    ///
    /// let start = Date::from_ymd(2024, 1, 1).unwrap();
    /// let end = Date::from_ymd(2024, 7, 1).unwrap();
    ///
    /// let yf = DayCountConvention::ActualActual365.year_fraction_dates(start, end);
    /// assert!((yf - 0.4986).abs() < 0.001);
    ///
    /// let yf_neg = DayCountConvention::ActualActual365.year_fraction_dates(end, start);
    /// assert!((yf_neg + 0.4986).abs() < 0.001);
    /// ```
    pub fn year_fraction_dates(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCountConvention::ActualActual365 => (end - start) as f64 / 365.0,
            DayCountConvention::ActualActual360 => (end - start) as f64 / 360.0,
            DayCountConvention::Thirty360 => {
                if start <= end {
                    thirty_360_days(start.into_inner(), end.into_inner()) as f64 / 360.0
                } else {
                    -thirty_360_days(end.into_inner(), start.into_inner()) as f64 / 360.0
                }
            }
        }
    }
}

/// Day count between two ordered dates under the 30/360 US Bond Basis rules.
fn thirty_360_days(start: NaiveDate, end: NaiveDate) -> i32 {
    let d1 = start.day();
    let d2 = end.day();

    // 30/360 US adjustments
    let d1_adj = if d1 == 31 { 30 } else { d1 };
    let d2_adj = if d2 == 31 && d1_adj == 30 { 30 } else { d2 };

    360 * (end.year() - start.year())
        + 30 * (end.month() as i32 - start.month() as i32)
        + (d2_adj as i32 - d1_adj as i32)
}

impl FromStr for DayCountConvention {
    type Err = String;

    /// Parses day count convention from string (case-insensitive).
    ///
    /// Supports multiple aliases for each convention:
    /// - ACT/365: "ACT/365", "Actual/365", "Act365", "A365"
    /// - ACT/360: "ACT/360", "Actual/360", "Act360", "A360"
    /// - 30/360: "30/360", "Thirty360", "30360"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365" | "ACTUAL365" | "A365" => Ok(DayCountConvention::ActualActual365),
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCountConvention::ActualActual360),
            "30360" | "THIRTY360" => Ok(DayCountConvention::Thirty360),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_dcc_impl {
    use super::DayCountConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

/// Business Day Convention for date adjustments.
///
/// Defines how to adjust dates that fall on non-business days (weekends, holidays).
///
/// # Variants
///
/// - `Following`: Move to the next business day
/// - `ModifiedFollowing`: Move to the next business day, unless it crosses a month boundary
/// - `Preceding`: Move to the previous business day
/// - `ModifiedPreceding`: Move to the previous business day, unless it crosses a month boundary
/// - `Unadjusted`: Do not adjust the date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessDayConvention {
    /// Move to the next business day.
    Following,

    /// Move to the next business day, unless it crosses a month boundary,
    /// in which case move backward instead. The most common convention
    /// for money market instruments.
    ModifiedFollowing,

    /// Move to the previous business day.
    Preceding,

    /// Move to the previous business day, unless it crosses a month
    /// boundary, in which case move forward instead.
    ModifiedPreceding,

    /// Do not adjust the date, even if it falls on a weekend or holiday.
    Unadjusted,
}

impl BusinessDayConvention {
    /// Returns the standard name for this convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::BusinessDayConvention;
    ///
    /// assert_eq!(BusinessDayConvention::ModifiedFollowing.name(), "Modified Following");
    /// ```
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        }
    }

    /// Returns a short code for this convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::BusinessDayConvention;
    ///
    /// assert_eq!(BusinessDayConvention::ModifiedFollowing.code(), "MF");
    /// ```
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            BusinessDayConvention::Following => "F",
            BusinessDayConvention::ModifiedFollowing => "MF",
            BusinessDayConvention::Preceding => "P",
            BusinessDayConvention::ModifiedPreceding => "MP",
            BusinessDayConvention::Unadjusted => "U",
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BusinessDayConvention {
    type Err = String;

    /// Parses business day convention from string (case-insensitive).
    ///
    /// Supports full names and short codes:
    /// - Following: "following", "f"
    /// - ModifiedFollowing: "modified following", "modifiedfollowing", "mf"
    /// - Preceding: "preceding", "p"
    /// - ModifiedPreceding: "modified preceding", "modifiedpreceding", "mp"
    /// - Unadjusted: "unadjusted", "u", "none"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "following" | "f" => Ok(BusinessDayConvention::Following),
            "modifiedfollowing" | "mf" => Ok(BusinessDayConvention::ModifiedFollowing),
            "preceding" | "p" => Ok(BusinessDayConvention::Preceding),
            "modifiedpreceding" | "mp" => Ok(BusinessDayConvention::ModifiedPreceding),
            "unadjusted" | "u" | "none" => Ok(BusinessDayConvention::Unadjusted),
            _ => Err(format!("Unknown business day convention: {}", s)),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_bdc_impl {
    use super::BusinessDayConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for BusinessDayConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for BusinessDayConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            BusinessDayConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

/// Calculate time to maturity using default convention (Act/365).
///
/// # Panics
/// Panics if `start > end`
pub fn time_to_maturity(start: NaiveDate, end: NaiveDate) -> f64 {
    DayCountConvention::ActualActual365.year_fraction(start, end)
}

/// Calculate time to maturity using Date type and default convention (Act/365).
///
/// Unlike `time_to_maturity`, this function does not panic when start > end,
/// instead returning a negative value.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{Date, time_to_maturity_dates};
///
/// let valuation_date = Date::from_ymd(2024, 1, 1).unwrap();
/// let maturity_date = Date::from_ymd(2025, 1, 1).unwrap();
///
/// let ttm = time_to_maturity_dates(valuation_date, maturity_date);
/// assert!((ttm - 1.0027).abs() < 0.001); // 366 days in the 2024 leap year
/// ```
pub fn time_to_maturity_dates(start: Date, end: Date) -> f64 {
    DayCountConvention::ActualActual365.year_fraction_dates(start, end)
}
