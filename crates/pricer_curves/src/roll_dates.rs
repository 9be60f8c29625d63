//! Quarterly IMM roll dates.
//!
//! The quarterly IMM dates are the third Wednesdays of March, June,
//! September, and December. Futures nodes and roll-date swap nodes
//! resolve their dates through [`nth_imm_date`].

use chrono::Weekday;
use pricer_core::types::time::Date;
use pricer_core::types::DateError;

const IMM_MONTHS: [u32; 4] = [3, 6, 9, 12];

/// Third Wednesday of the given month.
pub fn third_wednesday(year: i32, month: u32) -> Result<Date, DateError> {
    Date::nth_weekday_of_month(year, month, 3, Weekday::Wed)
}

/// The first quarterly IMM date on or after `base`.
pub fn imm_date_on_or_after(base: Date) -> Result<Date, DateError> {
    let mut year = base.year();
    loop {
        for month in IMM_MONTHS {
            let imm = third_wednesday(year, month)?;
            if imm >= base {
                return Ok(imm);
            }
        }
        year += 1;
    }
}

/// The `n`-th quarterly IMM date on or after `base`, `n >= 1`.
///
/// `n = 1` is the first IMM date on or after `base` itself; each further
/// step moves one quarter ahead.
pub fn nth_imm_date(base: Date, n: u32) -> Result<Date, DateError> {
    let mut imm = imm_date_on_or_after(base)?;
    for _ in 1..n.max(1) {
        imm = imm_date_on_or_after(imm.add_days(1))?;
    }
    Ok(imm)
}
