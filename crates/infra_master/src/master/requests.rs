//! Query request types.

use crate::id::{ExternalId, VersionCorrection};
use chrono::{DateTime, Utc};

/// Request for the version history of one object.
///
/// The correction axis is fixed by `corrected_to` (`None` = latest
/// corrections); the optional instant window restricts which business-time
/// versions are returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryRequest {
    /// Only versions still current at or after this instant.
    pub versions_from: Option<DateTime<Utc>>,
    /// Only versions that started before this instant.
    pub versions_to: Option<DateTime<Utc>>,
    /// Correction-time coordinate; `None` means latest corrections.
    pub corrected_to: Option<DateTime<Utc>>,
}

impl HistoryRequest {
    /// Full history at the latest corrections.
    pub fn full() -> Self {
        Self::default()
    }

    /// Restrict to versions overlapping `[from, …)`.
    #[must_use]
    pub fn with_versions_from(mut self, from: DateTime<Utc>) -> Self {
        self.versions_from = Some(from);
        self
    }

    /// Restrict to versions starting before `to`.
    #[must_use]
    pub fn with_versions_to(mut self, to: DateTime<Utc>) -> Self {
        self.versions_to = Some(to);
        self
    }

    /// View the history as it was corrected at `instant`.
    #[must_use]
    pub fn with_corrected_to(mut self, instant: DateTime<Utc>) -> Self {
        self.corrected_to = Some(instant);
        self
    }
}

/// Request to search the latest documents of a master.
///
/// Name matching is case-insensitive with `*` wildcards; the external id,
/// if given, must be a member of the document's bundle. Both filters are
/// optional and conjunctive.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    /// Name pattern, e.g. `"USD*"`.
    pub name: Option<String>,
    /// External id that must be in the document's bundle.
    pub external_id: Option<ExternalId>,
    /// Bitemporal coordinates of the search.
    pub version_correction: VersionCorrection,
}

impl SearchRequest {
    /// Match everything at the latest version-correction.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter by name pattern.
    #[must_use]
    pub fn with_name(mut self, pattern: impl Into<String>) -> Self {
        self.name = Some(pattern.into());
        self
    }

    /// Filter by external id membership.
    #[must_use]
    pub fn with_external_id(mut self, id: ExternalId) -> Self {
        self.external_id = Some(id);
        self
    }

    /// Search at specific bitemporal coordinates.
    #[must_use]
    pub fn with_version_correction(mut self, vc: VersionCorrection) -> Self {
        self.version_correction = vc;
        self
    }
}
