//! Sequential curve bootstrapping.
//!
//! Strips a set of [`BootstrapInstrument`]s into pillar discount factors
//! one maturity at a time, then wraps them in a [`BootstrappedCurve`]
//! which implements [`YieldCurve`](pricer_core::market_data::curves::YieldCurve).
//!
//! Each pillar is solved with Newton-Raphson on the pillar discount
//! factor; if that fails to converge the engine brackets the root and
//! falls back to Brent's method.
//!
//! [`BootstrapInstrument`]: pricer_models::instruments::rates::BootstrapInstrument

mod config;
mod curve;
mod engine;

pub use config::{BootstrapConfig, BootstrapConfigBuilder, BootstrapInterpolation};
pub use curve::{BootstrappedCurve, BootstrappedCurveBuilder};
pub use engine::{BootstrapResult, SequentialBootstrapper};
