//! Identity types for reference data.
//!
//! - [`ObjectId`]: stable identity of a logical object (`Scheme~value`)
//! - [`UniqueId`]: identity of one object state (`Scheme~value~version`)
//! - [`ExternalId`] / [`ExternalIdBundle`]: keys into external systems
//! - [`VersionCorrection`]: a point on the two bitemporal axes

mod external_id;
mod object_id;
mod unique_id;
mod version_correction;

pub use external_id::{ExternalId, ExternalIdBundle};
pub use object_id::ObjectId;
pub use unique_id::UniqueId;
pub use version_correction::VersionCorrection;
