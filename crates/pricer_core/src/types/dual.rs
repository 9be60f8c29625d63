//! Dual number type integration for automatic differentiation.
//!
//! This module provides a type alias for num-dual's Dual64 type,
//! enabling forward-mode automatic differentiation of pricing functions
//! for Greeks verification against the closed-form expressions.
//!
//! ## Usage
//!
//! ```ignore
//! use pricer_core::types::dual::DualNumber;
//!
//! // Seed the spot with a unit derivative
//! let spot = DualNumber::from(1.10).derivative();
//! let strike = DualNumber::from(1.15);
//!
//! // Any Float-generic pricing function propagates the gradient
//! let price = price_fn(spot, strike);
//! let value = price.re;   // function value
//! let delta = price.eps;  // d(price)/d(spot)
//! ```

/// Type alias for num-dual's Dual64 (f64-based dual numbers).
///
/// This type supports first-order automatic differentiation with:
/// - `re`: Real part (function value)
/// - `eps`: Dual part (derivative/gradient)
///
/// NOTE: `DualNumber` (`Dual64`) does NOT implement `num_traits::Float`.
/// Pricing functions that should propagate gradients need the more
/// permissive `DualNum<f64>` trait bound instead.
#[cfg(feature = "num-dual-mode")]
pub type DualNumber = num_dual::Dual64;
