//! Delta-quoted FX volatility smile.
//!
//! FX options are quoted by delta rather than strike: an at-the-money
//! volatility plus risk-reversal and butterfly quotes at a ladder of
//! deltas (typically 25Δ and 10Δ). [`SmileDeltaParameters`] holds one
//! expiry's smile in that form and converts delta pillars to strikes;
//! [`SmileDeltaTermStructure`] stacks smiles across expiries and
//! interpolates in total variance.

mod delta_parameters;
mod term_structure;

pub use delta_parameters::SmileDeltaParameters;
pub use term_structure::SmileDeltaTermStructure;
