//! # pricer_core: Foundation Types for FX Analytics
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the I-P-S architecture, providing:
//! - Time types: `Date`, `Tenor`, `DayCountConvention`, `BusinessDayConvention` (`types::time`, `types::tenor`)
//! - Currency types: `Currency`, `CurrencyPair` (`types::currency`, `types::currency_pair`)
//! - Normal distribution functions and interpolation (`math`)
//! - Root-finding solvers used by curve construction (`math::solvers`)
//! - Market-data abstractions: yield curves, FX cross-rate matrix, and the
//!   delta-quoted volatility smile term structure (`market_data`)
//! - Error types for each of the above (`types::error`, `market_data::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - num-dual: Dual number types for automatic differentiation (optional)
//! - chrono: Date arithmetic
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{Currency, Date, DayCountConvention, Tenor};
//!
//! // Date operations
//! let start = Date::from_ymd(2024, 1, 15).unwrap();
//! let end = start.add_tenor(Tenor::months(6));
//! let tau = DayCountConvention::ActualActual360.year_fraction_dates(start, end);
//! assert!(tau > 0.49 && tau < 0.52);
//!
//! // Currency information
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for dates, currencies, and market data
//! - `num-dual-mode`: Expose the `Dual64` alias for derivative verification

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
