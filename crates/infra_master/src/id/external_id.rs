//! External identifiers and bundles.

use super::object_id::check_part;
use crate::error::IdParseError;
use std::fmt;
use std::str::FromStr;

/// A key into an external identification system.
///
/// Same textual form as an object id (`Scheme~value`), but external ids
/// are assigned by outside systems and carry no version semantics; they
/// are used to look conventions and securities up in the masters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExternalId {
    scheme: String,
    value: String,
}

impl ExternalId {
    /// Create an external id from a scheme and value.
    pub fn new(scheme: impl Into<String>, value: impl Into<String>) -> Result<Self, IdParseError> {
        let scheme = scheme.into();
        let value = value.into();
        check_part("scheme", &scheme)?;
        check_part("value", &value)?;
        Ok(Self { scheme, value })
    }

    /// The scheme naming the external system.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The value within the scheme.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.scheme, self.value)
    }
}

impl FromStr for ExternalId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('~');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(value), None) => Self::new(scheme, value),
            _ => Err(IdParseError::InvalidFormat(format!(
                "expected Scheme~value: {s}"
            ))),
        }
    }
}

/// A sorted, deduplicated set of external ids.
///
/// Reference data typically carries several identifiers (an internal
/// code, a vendor ticker, …); lookups succeed if any bundle member
/// matches.
///
/// # Example
///
/// ```
/// use infra_master::id::{ExternalId, ExternalIdBundle};
///
/// let bundle = ExternalIdBundle::of([
///     ExternalId::new("CONVENTION", "USD Deposit").unwrap(),
///     ExternalId::new("VENDOR", "USDDEP").unwrap(),
/// ]);
/// assert_eq!(bundle.len(), 2);
/// assert!(bundle.contains(&ExternalId::new("VENDOR", "USDDEP").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExternalIdBundle {
    ids: Vec<ExternalId>,
}

impl ExternalIdBundle {
    /// Create an empty bundle.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a bundle from any iterator of ids; sorts and deduplicates.
    pub fn of(ids: impl IntoIterator<Item = ExternalId>) -> Self {
        let mut ids: Vec<ExternalId> = ids.into_iter().collect();
        ids.sort();
        ids.dedup();
        Self { ids }
    }

    /// Create a bundle holding a single id.
    pub fn single(id: ExternalId) -> Self {
        Self { ids: vec![id] }
    }

    /// Number of ids in the bundle.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the bundle holds no ids.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns true if `id` is a member of the bundle.
    pub fn contains(&self, id: &ExternalId) -> bool {
        self.ids.binary_search(id).is_ok()
    }

    /// Returns true if the two bundles share at least one id.
    pub fn intersects(&self, other: &ExternalIdBundle) -> bool {
        self.ids.iter().any(|id| other.contains(id))
    }

    /// Iterate the ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &ExternalId> {
        self.ids.iter()
    }

    /// Return a new bundle with `id` added.
    #[must_use]
    pub fn with(&self, id: ExternalId) -> Self {
        Self::of(self.ids.iter().cloned().chain(std::iter::once(id)))
    }
}

impl fmt::Display for ExternalIdBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, id) in self.ids.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{id}")?;
        }
        write!(f, "]")
    }
}
