//! Stored document states.

use crate::id::UniqueId;
use chrono::{DateTime, Utc};

/// One stored state of an object, with its bitemporal interval.
///
/// Business time runs over `[version_from, version_to)` and correction
/// time over `[correction_from, correction_to)`; `None` upper bounds mean
/// open-ended. A document with both upper bounds open is the live state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document<T> {
    /// Identity of this stored state.
    pub unique_id: UniqueId,
    /// Start of the business-time interval.
    pub version_from: DateTime<Utc>,
    /// End of the business-time interval; `None` while current.
    pub version_to: Option<DateTime<Utc>>,
    /// Start of the correction-time interval.
    pub correction_from: DateTime<Utc>,
    /// End of the correction-time interval; `None` while latest.
    pub correction_to: Option<DateTime<Utc>>,
    /// The stored value.
    pub value: T,
}

impl<T> Document<T> {
    /// Returns true if this state is current in business time and is the
    /// latest correction.
    pub fn is_latest(&self) -> bool {
        self.version_to.is_none() && self.correction_to.is_none()
    }

    /// Returns true if `instant` falls inside the business-time interval.
    pub fn version_contains(&self, instant: DateTime<Utc>) -> bool {
        self.version_from <= instant && self.version_to.map_or(true, |to| instant < to)
    }

    /// Returns true if `instant` falls inside the correction-time interval.
    pub fn correction_contains(&self, instant: DateTime<Utc>) -> bool {
        self.correction_from <= instant && self.correction_to.map_or(true, |to| instant < to)
    }
}
