//! Security reference data.
//!
//! A deliberately small taxonomy: enough for the security master and its
//! source trait to be exercised by the pricing layer without reproducing
//! a full instrument hierarchy.

use crate::id::ExternalIdBundle;
use crate::master::MasterRecord;
use pricer_core::types::{Currency, Date};

/// A named security stored in the security master.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Security {
    /// Display name.
    pub name: String,
    /// External ids under which the security can be found.
    pub external_ids: ExternalIdBundle,
    /// The security payload.
    pub kind: SecurityKind,
}

impl Security {
    /// Create a security.
    pub fn new(
        name: impl Into<String>,
        external_ids: ExternalIdBundle,
        kind: SecurityKind,
    ) -> Self {
        Self {
            name: name.into(),
            external_ids,
            kind,
        }
    }
}

impl MasterRecord for Security {
    fn name(&self) -> &str {
        &self.name
    }

    fn external_ids(&self) -> &ExternalIdBundle {
        &self.external_ids
    }
}

/// The payload of a security.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SecurityKind {
    /// A vanilla FX option contract.
    FxOption(FxOptionSecurity),
    /// Any other instrument, carried as a typed name plus opaque data.
    Generic {
        /// Instrument type label, e.g. `"EQUITY"`.
        security_type: String,
        /// Serialized payload.
        data: String,
    },
}

/// Vanilla FX option security.
///
/// The contract exchanges `put_amount` of `put_currency` against
/// `call_amount` of `call_currency` at the holder's choice on expiry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FxOptionSecurity {
    /// Currency the holder may deliver.
    pub put_currency: Currency,
    /// Amount of the put currency.
    pub put_amount: f64,
    /// Currency the holder may receive.
    pub call_currency: Currency,
    /// Amount of the call currency.
    pub call_amount: f64,
    /// Expiry date.
    pub expiry: Date,
    /// Settlement date of the exchanged payments.
    pub settlement_date: Date,
    /// True if the position is long the option.
    pub long: bool,
}
