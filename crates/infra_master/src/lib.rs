//! # infra_master: Identity and Bitemporal Reference Data
//!
//! ## Infra Layer Role
//!
//! infra_master provides the reference-data backbone used by curve
//! construction and pricing:
//!
//! - Identity types: `ObjectId`, `UniqueId`, `ExternalId`,
//!   `ExternalIdBundle`, `VersionCorrection` (`id`)
//! - Bitemporal document store: `BeanMaster<T>` with add / update /
//!   correct / remove and full version-correction history (`master`)
//! - Reference data payloads: market conventions and securities
//!   (`conventions`, `securities`)
//! - Holiday calendars with business-day adjustment (`calendar`)
//! - Source traits for convention/security lookup (`sources`)
//!
//! ## Bitemporality
//!
//! Every stored state carries two time axes: business time
//! (`version_from`/`version_to`, advanced by `update`) and correction
//! time (`correction_from`/`correction_to`, advanced by `correct`).
//! Queries fix a point on each axis through a [`id::VersionCorrection`];
//! `None` on an axis means "latest". Removal is logical, so history
//! remains fully queryable.
//!
//! ## Usage Example
//!
//! ```rust
//! use infra_master::conventions::{Convention, ConventionKind, DepositConvention};
//! use infra_master::id::{ExternalId, ExternalIdBundle};
//! use infra_master::master::ConventionMaster;
//! use pricer_core::types::{Currency, DayCountConvention, BusinessDayConvention};
//!
//! let master = ConventionMaster::new("MemCnv");
//! let convention = Convention::new(
//!     "USD Deposit",
//!     ExternalIdBundle::of([ExternalId::new("CONVENTION", "USD Deposit").unwrap()]),
//!     ConventionKind::Deposit(DepositConvention {
//!         currency: Currency::USD,
//!         day_count: DayCountConvention::ActualActual360,
//!         business_day_convention: BusinessDayConvention::ModifiedFollowing,
//!         settlement_days: 2,
//!         calendar_id: "USNY".to_string(),
//!     }),
//! );
//! let doc = master.add(convention).unwrap();
//! assert_eq!(doc.unique_id.version(), "0");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod calendar;
pub mod conventions;
pub mod error;
pub mod id;
pub mod master;
pub mod securities;
pub mod sources;
