//! Trait implemented by storable reference data.

use crate::id::ExternalIdBundle;

/// A value that can be stored in a [`BeanMaster`](super::BeanMaster) and
/// found again by name or external id.
pub trait MasterRecord: Clone + Send + Sync {
    /// Display name, searchable with `*` wildcards.
    fn name(&self) -> &str;

    /// External identifiers for lookup from other systems.
    fn external_ids(&self) -> &ExternalIdBundle;
}
