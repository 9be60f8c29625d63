//! Market data structures for FX analytics.
//!
//! This module provides the market-data abstractions consumed by curve
//! construction and option pricing:
//!
//! - [`curves`]: Yield curve trait and a flat reference implementation
//! - [`fx_matrix`]: Checked FX cross-rate matrix with triangulation
//! - [`smile`]: Delta-quoted volatility smile and its term structure
//! - [`error`]: Market data error types
//!
//! # Architecture
//!
//! Curve and smile structures are generic over `T: Float` so that both
//! standard floating-point types and dual numbers can flow through; the
//! FX matrix holds plain `f64` market quotes.
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{FlatCurve, YieldCurve};
//!
//! let curve = FlatCurve::new(0.05_f64);
//! let df = curve.discount_factor(1.0).unwrap();
//! assert!((df - 0.951229).abs() < 1e-5);
//! ```

pub mod curves;
pub mod error;
pub mod fx_matrix;
pub mod smile;

// Re-export commonly used types
pub use curves::{FlatCurve, YieldCurve};
pub use error::{FxMatrixError, MarketDataError, SurfaceError};
pub use fx_matrix::FxMatrix;
pub use smile::{SmileDeltaParameters, SmileDeltaTermStructure};
