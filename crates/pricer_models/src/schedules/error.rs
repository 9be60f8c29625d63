//! Errors raised while rolling payment schedules.

use pricer_core::types::time::Date;
use thiserror::Error;

/// Errors that can occur during schedule generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The start date does not precede the end date.
    #[error("start date {start} must be before end date {end}")]
    InvalidDateRange {
        /// The start date.
        start: Date,
        /// The end date.
        end: Date,
    },

    /// A required builder field was never set.
    #[error("missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The date range is shorter than one accrual period.
    #[error("no accrual periods fit between {start} and {end}")]
    NoPeriods {
        /// The start date.
        start: Date,
        /// The end date.
        end: Date,
    },

    /// Date arithmetic left the representable range.
    #[error("date arithmetic overflow: {reason}")]
    DateOverflow {
        /// Reason for the overflow.
        reason: String,
    },
}
