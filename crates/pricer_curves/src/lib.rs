//! # pricer_curves - Curve Construction
//!
//! Turns market quotes into discount and forward curves. The flow is:
//!
//! 1. **Nodes** ([`nodes`]) describe one market instrument each: a tenor
//!    layout, the external id of its market convention, and the external
//!    id of its quote.
//! 2. **Converters** ([`convert`]) resolve the convention through a
//!    [`ConventionSource`](infra_master::sources::ConventionSource), the
//!    quote through a [`QuoteBundle`](quotes::QuoteBundle), apply spot
//!    lag and business-day adjustment, and produce an instrument
//!    definition from `pricer_models`.
//! 3. **Bootstrapping** ([`bootstrap`]) strips the definitions into
//!    pillar discount factors sequentially, solving each pillar with
//!    Newton-Raphson and a Brent fallback.
//! 4. The **multicurve provider** ([`provider`]) bundles the resulting
//!    discount curves, tenor forward curves, and an FX cross-rate matrix
//!    for consumption by pricing code.
//!
//! ## Example
//!
//! ```
//! use pricer_curves::bootstrap::{BootstrapConfig, SequentialBootstrapper};
//! use pricer_curves::BootstrapInstrument;
//! use pricer_core::market_data::curves::YieldCurve;
//!
//! let instruments: Vec<BootstrapInstrument<f64>> = vec![
//!     BootstrapInstrument::Deposit { start: 0.0, maturity: 0.5, rate: 0.030, accrual: 0.5 },
//!     BootstrapInstrument::Deposit { start: 0.0, maturity: 1.0, rate: 0.032, accrual: 1.0 },
//! ];
//!
//! let bootstrapper = SequentialBootstrapper::new(BootstrapConfig::default());
//! let result = bootstrapper.bootstrap(&instruments).unwrap();
//!
//! let df = result.curve.discount_factor(0.75).unwrap();
//! assert!(df > 0.0 && df < 1.0);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod bootstrap;
pub mod convert;
pub mod error;
pub mod nodes;
pub mod provider;
pub mod quotes;
pub mod roll_dates;

pub use bootstrap::{BootstrapConfig, BootstrapInterpolation, BootstrappedCurve, SequentialBootstrapper};
pub use convert::{NodeConverter, RatesDefinition};
pub use error::{BootstrapError, ConvertError, ProviderError};
pub use nodes::CurveNode;
pub use provider::{MulticurveBuilder, MulticurveProvider};
pub use quotes::QuoteBundle;

// The time-based residual form lives with the instrument definitions so
// each definition can reduce itself; the curve layer re-exports it as
// part of its own surface.
pub use pricer_models::instruments::rates::BootstrapInstrument;
