//! Read-side lookup traits over the masters.
//!
//! Pricing and curve-construction code should depend on these traits
//! rather than on [`BeanMaster`] directly, so that a calculation sees a
//! plain key-to-record lookup and never the bitemporal machinery.

use crate::conventions::Convention;
use crate::error::MasterError;
use crate::id::{ExternalId, UniqueId};
use crate::master::{BeanMaster, SearchRequest};
use crate::securities::Security;

/// Lookup of market conventions by identifier or name.
pub trait ConventionSource {
    /// The convention stored under an exact unique id.
    fn get_convention(&self, unique_id: &UniqueId) -> Result<Convention, MasterError>;

    /// The latest convention carrying the given external id.
    fn convention_by_external_id(&self, id: &ExternalId) -> Result<Convention, MasterError>;

    /// The latest convention whose name matches exactly.
    fn convention_by_name(&self, name: &str) -> Result<Convention, MasterError>;
}

/// Lookup of security definitions by identifier or name.
pub trait SecuritySource {
    /// The security stored under an exact unique id.
    fn get_security(&self, unique_id: &UniqueId) -> Result<Security, MasterError>;

    /// The latest security carrying the given external id.
    fn security_by_external_id(&self, id: &ExternalId) -> Result<Security, MasterError>;

    /// The latest security whose name matches exactly.
    fn security_by_name(&self, name: &str) -> Result<Security, MasterError>;
}

fn single_by_external_id<T: crate::master::MasterRecord>(
    master: &BeanMaster<T>,
    id: &ExternalId,
) -> Result<T, MasterError> {
    let hits = master.search(&SearchRequest::all().with_external_id(id.clone()));
    match hits.len() {
        0 => Err(MasterError::NotFound(id.to_string())),
        1 => Ok(hits.into_iter().next().map(|d| d.value).unwrap_or_else(|| unreachable!())),
        n => Err(MasterError::Validation(format!(
            "external id {id} matches {n} records"
        ))),
    }
}

fn single_by_name<T: crate::master::MasterRecord>(
    master: &BeanMaster<T>,
    name: &str,
) -> Result<T, MasterError> {
    let hits = master.search(&SearchRequest::all().with_name(name));
    let mut exact = hits.into_iter().filter(|d| d.value.name() == name);
    match (exact.next(), exact.next()) {
        (None, _) => Err(MasterError::NotFound(name.to_string())),
        (Some(doc), None) => Ok(doc.value),
        (Some(_), Some(_)) => Err(MasterError::Validation(format!(
            "name {name:?} matches more than one record"
        ))),
    }
}

impl ConventionSource for BeanMaster<Convention> {
    fn get_convention(&self, unique_id: &UniqueId) -> Result<Convention, MasterError> {
        self.get(unique_id).map(|d| d.value)
    }

    fn convention_by_external_id(&self, id: &ExternalId) -> Result<Convention, MasterError> {
        single_by_external_id(self, id)
    }

    fn convention_by_name(&self, name: &str) -> Result<Convention, MasterError> {
        single_by_name(self, name)
    }
}

impl SecuritySource for BeanMaster<Security> {
    fn get_security(&self, unique_id: &UniqueId) -> Result<Security, MasterError> {
        self.get(unique_id).map(|d| d.value)
    }

    fn security_by_external_id(&self, id: &ExternalId) -> Result<Security, MasterError> {
        single_by_external_id(self, id)
    }

    fn security_by_name(&self, name: &str) -> Result<Security, MasterError> {
        single_by_name(self, name)
    }
}
