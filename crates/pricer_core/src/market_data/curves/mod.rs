//! Yield curve trait and implementations.
//!
//! The [`YieldCurve`] trait is the discounting abstraction used across the
//! workspace; [`FlatCurve`] is the constant-rate reference implementation
//! used in tests and simple scenarios. Bootstrapped pillar curves live in
//! the curve-construction crate and implement the same trait.

mod flat;
mod traits;

pub use flat::FlatCurve;
pub use traits::YieldCurve;
