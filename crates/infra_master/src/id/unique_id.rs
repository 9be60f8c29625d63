//! Versioned object identity.

use super::object_id::{check_part, ObjectId};
use crate::error::IdParseError;
use std::fmt;
use std::str::FromStr;

/// Identity of one stored state of an object.
///
/// A unique id is an [`ObjectId`] plus a version string assigned by the
/// master ("0", "1", …). The textual form is `Scheme~value~version`.
///
/// # Example
///
/// ```
/// use infra_master::id::UniqueId;
///
/// let uid = UniqueId::new("MemCnv", "1234", "2").unwrap();
/// assert_eq!(uid.to_string(), "MemCnv~1234~2");
/// assert_eq!(uid.object_id().to_string(), "MemCnv~1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniqueId {
    scheme: String,
    value: String,
    version: String,
}

impl UniqueId {
    /// Create a unique id from scheme, value, and version.
    pub fn new(
        scheme: impl Into<String>,
        value: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, IdParseError> {
        let scheme = scheme.into();
        let value = value.into();
        let version = version.into();
        check_part("scheme", &scheme)?;
        check_part("value", &value)?;
        check_part("version", &version)?;
        Ok(Self {
            scheme,
            value,
            version,
        })
    }

    /// Build a unique id from an object id and a version.
    pub fn from_object_id(object_id: ObjectId, version: impl Into<String>) -> Self {
        Self {
            scheme: object_id.scheme().to_string(),
            value: object_id.value().to_string(),
            version: version.into(),
        }
    }

    /// The scheme naming the issuing system.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The value within the scheme.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The version string of this state.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The stable object id, with the version stripped.
    pub fn object_id(&self) -> ObjectId {
        ObjectId::new(&self.scheme, &self.value)
            .unwrap_or_else(|_| unreachable!("parts validated at construction"))
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}~{}", self.scheme, self.value, self.version)
    }
}

impl FromStr for UniqueId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('~');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(value), Some(version), None) => Self::new(scheme, value, version),
            _ => Err(IdParseError::InvalidFormat(format!(
                "expected Scheme~value~version: {s}"
            ))),
        }
    }
}
