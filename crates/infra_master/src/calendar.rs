//! Holiday calendars and business-day adjustment.
//!
//! A [`Calendar`] combines the weekend rule with an explicit holiday set
//! and drives date adjustment under a [`BusinessDayConvention`]. Spot
//! dates and schedule rolls in the convention layer all route through
//! here so that a single calendar id resolves to one source of truth.

use std::collections::BTreeSet;

use pricer_core::types::time::{BusinessDayConvention, Date};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A business-day calendar: weekends plus an explicit holiday set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calendar {
    id: String,
    holidays: BTreeSet<Date>,
}

impl Calendar {
    /// Creates a calendar with the given holiday dates.
    pub fn new(id: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            id: id.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// A calendar where only Saturdays and Sundays are non-business days.
    pub fn weekends_only(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            holidays: BTreeSet::new(),
        }
    }

    /// Identifier this calendar is registered under, e.g. `"GBLO"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// True when `date` is neither a weekend day nor a listed holiday.
    pub fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.holidays.contains(&date)
    }

    /// True when `date` is a weekend day or a listed holiday.
    pub fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts `date` onto a business day under `convention`.
    pub fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        match convention {
            BusinessDayConvention::Unadjusted => date,
            BusinessDayConvention::Following => self.next_business_day(date),
            BusinessDayConvention::Preceding => self.previous_business_day(date),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.next_business_day(date);
                if adjusted.month() == date.month() {
                    adjusted
                } else {
                    self.previous_business_day(date)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.previous_business_day(date);
                if adjusted.month() == date.month() {
                    adjusted
                } else {
                    self.next_business_day(date)
                }
            }
        }
    }

    /// Shifts `date` by `days` business days. Negative counts move
    /// backwards. A zero count adjusts forward onto a business day.
    pub fn add_business_days(&self, date: Date, days: i32) -> Date {
        if days == 0 {
            return self.next_business_day(date);
        }
        let step: i64 = if days > 0 { 1 } else { -1 };
        let mut current = date;
        let mut remaining = days.unsigned_abs();
        while remaining > 0 {
            current = current.add_days(step);
            if self.is_business_day(current) {
                remaining -= 1;
            }
        }
        current
    }

    /// Spot date for a trade struck on `trade_date` with the given
    /// settlement lag in business days.
    pub fn spot_date(&self, trade_date: Date, settlement_days: u32) -> Date {
        self.add_business_days(trade_date, settlement_days as i32)
    }

    fn next_business_day(&self, date: Date) -> Date {
        let mut current = date;
        while !self.is_business_day(current) {
            current = current.add_days(1);
        }
        current
    }

    fn previous_business_day(&self, date: Date) -> Date {
        let mut current = date;
        while !self.is_business_day(current) {
            current = current.add_days(-1);
        }
        current
    }
}
