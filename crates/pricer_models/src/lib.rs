//! # Pricer Models (L2: Instrument Definitions)
//!
//! Financial instrument definitions shared by curve construction and
//! option pricing.
//!
//! This crate provides:
//! - FX transactions and options (vanilla, digital, barrier,
//!   non-deliverable) in time-based form (`instruments::fx`)
//! - Rates instrument definitions produced by curve-node converters,
//!   each reducible to a bootstrap residual (`instruments::rates`)
//! - Payment schedules and frequencies (`schedules`)
//!
//! ## Design Principles
//!
//! - **Enum-based dispatch** rather than visitor hierarchies
//! - **Generic over `num_traits::Float`** so AD types price unchanged
//! - **Validated constructors** returning `Result` with structured errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
pub mod schedules;
