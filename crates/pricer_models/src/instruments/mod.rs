//! Instrument definitions.
//!
//! Two families:
//!
//! - [`fx`]: time-based FX transactions and options, with amounts in the
//!   two currencies of the pair. These are consumed by the pricing
//!   methods in `pricer_fx`.
//! - [`rates`]: date-based instrument definitions (deposits, FRAs, swaps,
//!   futures, bills, bonds) as produced by curve-node converters. Each
//!   reduces to a [`rates::BootstrapInstrument`] residual via
//!   `to_bootstrap`.

pub mod error;
pub mod fx;
pub mod rates;

pub use error::InstrumentError;
