//! Numerical building blocks for curve construction and option pricing.
//!
//! This module collects the mathematical machinery shared by the higher
//! layers:
//!
//! - [`distributions`]: Standard normal PDF, CDF, and inverse CDF
//! - [`interpolators`]: Piecewise interpolation with flat extrapolation
//! - [`solvers`]: Newton-Raphson and Brent root finders
//!
//! All routines are generic over `T: Float` so that dual numbers can be
//! threaded through for derivative verification where needed.

pub mod distributions;
pub mod interpolators;
pub mod solvers;
