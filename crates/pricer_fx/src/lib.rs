//! # pricer_fx - Forex Option Pricing
//!
//! Analytic pricing of FX options against a multicurve provider and a
//! delta-quoted volatility smile:
//!
//! - **Vanillas** ([`vanilla_smile`]): Black on the forward with the
//!   smile volatility at the strike, plus the delta/gamma/vega/theta
//!   family in both quote conventions and the currency exposure.
//! - **Vanna-volga** ([`vanna_volga`]): the three-pillar correction
//!   that reproduces the quoted smile exactly at its reference strikes.
//! - **Digitals** ([`digital`]): the exact cash-or-nothing formula in
//!   either payment currency, and the call-spread replication that
//!   carries the smile slope.
//! - **Barriers** ([`barrier`]): closed-form single-barrier prices with
//!   exact in-out parity and expiry-paid rebates.
//! - **American exercise** ([`american`]): the Bjerksund-Stensland
//!   flat-boundary approximation on the FX cost of carry.
//! - **Non-deliverable options** ([`ndo`]): cash-settled vanillas.
//!
//! Market data enters through [`BlackForexSmileProvider`], which pins a
//! currency pair to a [`MulticurveProvider`](pricer_curves::MulticurveProvider)
//! and a [`SmileDeltaTermStructure`](pricer_core::market_data::SmileDeltaTermStructure).
//! Prices come back as [`CurrencyAmount`]s so callers always know what
//! currency a number is in.
//!
//! ## Example
//!
//! ```
//! use pricer_fx::black;
//!
//! // Undiscounted Black price on the forward
//! let price = black::price(1.40_f64, 1.45, 1.0, 0.18, true);
//! assert!(price > 0.0 && price < 1.40);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod amount;
pub mod american;
pub mod barrier;
pub mod black;
pub mod digital;
pub mod error;
pub mod ndo;
pub mod provider;
pub mod vanilla_smile;
pub mod vanna_volga;

pub use amount::{CurrencyAmount, CurrencyExposure};
pub use digital::CallSpreadDigitalMethod;
pub use error::PricingError;
pub use provider::BlackForexSmileProvider;
