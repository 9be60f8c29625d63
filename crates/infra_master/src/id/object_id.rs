//! Stable object identity.

use crate::error::IdParseError;
use std::fmt;
use std::str::FromStr;

/// Stable identity of a logical object within a master.
///
/// An object id survives updates and corrections; it names the object,
/// not a particular stored state. The textual form is `Scheme~value`.
///
/// # Example
///
/// ```
/// use infra_master::id::ObjectId;
///
/// let id = ObjectId::new("MemCnv", "1234").unwrap();
/// assert_eq!(id.to_string(), "MemCnv~1234");
/// assert_eq!("MemCnv~1234".parse::<ObjectId>().unwrap(), id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectId {
    scheme: String,
    value: String,
}

impl ObjectId {
    /// Create an object id from a scheme and value.
    ///
    /// Both parts must be non-empty and must not contain `~`.
    pub fn new(scheme: impl Into<String>, value: impl Into<String>) -> Result<Self, IdParseError> {
        let scheme = scheme.into();
        let value = value.into();
        check_part("scheme", &scheme)?;
        check_part("value", &value)?;
        Ok(Self { scheme, value })
    }

    /// The scheme naming the issuing system.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The value within the scheme.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Attach a version, producing a [`UniqueId`](crate::id::UniqueId).
    pub fn at_version(&self, version: impl Into<String>) -> crate::id::UniqueId {
        crate::id::UniqueId::from_object_id(self.clone(), version)
    }
}

pub(crate) fn check_part(name: &'static str, part: &str) -> Result<(), IdParseError> {
    if part.is_empty() {
        return Err(IdParseError::EmptyField(name));
    }
    if part.contains('~') {
        return Err(IdParseError::InvalidFormat(format!(
            "{name} must not contain '~': {part}"
        )));
    }
    Ok(())
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.scheme, self.value)
    }
}

impl FromStr for ObjectId {
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
