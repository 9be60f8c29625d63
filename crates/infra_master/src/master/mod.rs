//! Bitemporal document store.
//!
//! A [`BeanMaster`] stores versioned, correctable documents keyed by
//! [`ObjectId`](crate::id::ObjectId). The four mutations are:
//!
//! - `add`: create version "0" of a new object;
//! - `update`: close the latest version in business time and open a new
//!   one;
//! - `correct`: supersede one version's latest correction without
//!   touching business time;
//! - `remove`: logically delete by closing the latest version.
//!
//! All mutation goes through a single write path behind an `RwLock`, and
//! timestamps come from a monotonic instant source, so the bitemporal
//! intervals of one object never collapse or overlap.

mod document;
mod record;
mod requests;
mod store;

pub use document::Document;
pub use record::MasterRecord;
pub use requests::{HistoryRequest, SearchRequest};
pub use store::BeanMaster;

use crate::conventions::Convention;
use crate::securities::Security;

/// Bitemporal master for market conventions.
pub type ConventionMaster = BeanMaster<Convention>;

/// Bitemporal master for securities.
pub type SecurityMaster = BeanMaster<Security>;
