//! Bitemporal query coordinates.

use crate::error::IdParseError;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use std::str::FromStr;

/// A point on the two bitemporal axes of a master.
///
/// `version_as_of` fixes business time (which version of the object),
/// `corrected_to` fixes correction time (which correction of that
/// version). `None` on either axis means "latest".
///
/// The textual form is `V<instant>.C<instant>` with `LATEST` standing in
/// for `None`, e.g. `V2024-01-15T10:30:00Z.CLATEST`.
///
/// # Example
///
/// ```
/// use infra_master::id::VersionCorrection;
///
/// let latest = VersionCorrection::LATEST;
/// assert_eq!(latest.to_string(), "VLATEST.CLATEST");
/// assert_eq!("VLATEST.CLATEST".parse::<VersionCorrection>().unwrap(), latest);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionCorrection {
    /// Business-time coordinate; `None` means latest version.
    pub version_as_of: Option<DateTime<Utc>>,
    /// Correction-time coordinate; `None` means latest correction.
    pub corrected_to: Option<DateTime<Utc>>,
}

impl VersionCorrection {
    /// Latest version, latest correction.
    pub const LATEST: Self = Self {
        version_as_of: None,
        corrected_to: None,
    };

    /// Fix both axes.
    pub fn of(version_as_of: DateTime<Utc>, corrected_to: DateTime<Utc>) -> Self {
        Self {
            version_as_of: Some(version_as_of),
            corrected_to: Some(corrected_to),
        }
    }

    /// Fix business time only; correction stays latest.
    pub fn of_version_as_of(version_as_of: DateTime<Utc>) -> Self {
        Self {
            version_as_of: Some(version_as_of),
            corrected_to: None,
        }
    }

    /// Fix correction time only; version stays latest.
    pub fn of_corrected_to(corrected_to: DateTime<Utc>) -> Self {
        Self {
            version_as_of: None,
            corrected_to: Some(corrected_to),
        }
    }

    /// Returns true if both axes are "latest".
    pub fn is_latest(&self) -> bool {
        self.version_as_of.is_none() && self.corrected_to.is_none()
    }
}

fn fmt_axis(instant: Option<DateTime<Utc>>) -> String {
    match instant {
        Some(i) => i.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        None => "LATEST".to_string(),
    }
}

fn parse_axis(s: &str) -> Result<Option<DateTime<Utc>>, IdParseError> {
    if s == "LATEST" {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|_| IdParseError::InvalidInstant(s.to_string()))
}

impl fmt::Display for VersionCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "V{}.C{}",
            fmt_axis(self.version_as_of),
            fmt_axis(self.corrected_to)
        )
    }
}

impl FromStr for VersionCorrection {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Form: V<instant-or-LATEST>.C<instant-or-LATEST>. The version
        // instant may itself contain dots, so split at the ".C" separator.
        let rest = s
            .strip_prefix('V')
            .ok_or_else(|| IdParseError::InvalidFormat(format!("expected V…C…: {s}")))?;
        let sep = rest
            .rfind(".C")
            .ok_or_else(|| IdParseError::InvalidFormat(format!("expected V…C…: {s}")))?;
        let (version_str, correction_str) = (&rest[..sep], &rest[sep + 2..]);
        Ok(Self {
            version_as_of: parse_axis(version_str)?,
            corrected_to: parse_axis(correction_str)?,
        })
    }
}
