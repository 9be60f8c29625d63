//! Integration tests for the dual number type alias.
//!
//! Verifies that `DualNumber` is accessible and that forward-mode
//! derivatives propagate correctly through the kind of expressions the
//! pricing layers build (discounting, forwards, log-moneyness).
//!
//! Note: `num_dual::Dual64` does not implement `num_traits::Float`, so
//! code that should propagate gradients uses the `DualNum<f64>` trait
//! bound instead.

#![cfg(feature = "num-dual-mode")]

use approx::assert_relative_eq;
use num_dual::DualNum;
use pricer_core::types::dual::DualNumber;

/// Test that the DualNumber type alias is accessible.
#[test]
fn test_dual_number_type_accessible() {
    let dual = DualNumber::new(3.0, 1.0);
    assert_eq!(dual.re, 3.0);
    assert_eq!(dual.eps, 1.0);
}

/// Test DualNumber basic arithmetic operations.
#[test]
fn test_dual_number_arithmetic() {
    let a = DualNumber::new(2.0, 1.0); // a = 2, da/da = 1
    let b = DualNumber::new(3.0, 0.0); // b = 3, db/da = 0

    let sum = a + b;
    assert_relative_eq!(sum.re, 5.0, epsilon = 1e-10);
    assert_relative_eq!(sum.eps, 1.0, epsilon = 1e-10);

    let prod = a * b;
    assert_relative_eq!(prod.re, 6.0, epsilon = 1e-10);
    assert_relative_eq!(prod.eps, 3.0, epsilon = 1e-10);

    let quot = a / b;
    assert_relative_eq!(quot.re, 2.0 / 3.0, epsilon = 1e-10);
    assert_relative_eq!(quot.eps, 1.0 / 3.0, epsilon = 1e-10);
}

/// Derivative of a discounted forward with respect to spot.
///
/// F = S * df_for / df_dom, so dF/dS = df_for / df_dom.
#[test]
fn test_fx_forward_spot_sensitivity() {
    let r_dom = 0.05;
    let r_for = 0.02;
    let t = 2.0;
    let df_dom = (-r_dom * t).exp();
    let df_for = (-r_for * t).exp();

    let spot = DualNumber::new(1.40, 1.0);
    let forward = spot * df_for / df_dom;

    assert_relative_eq!(forward.re, 1.40 * df_for / df_dom, epsilon = 1e-12);
    assert_relative_eq!(forward.eps, df_for / df_dom, epsilon = 1e-12);
}

/// Derivative of log-moneyness ln(F/K) with respect to the forward.
#[test]
fn test_log_moneyness_sensitivity() {
    let strike = 1.50;
    let forward = DualNumber::new(1.40, 1.0);

    let log_moneyness = (forward / strike).ln();

    assert_relative_eq!(log_moneyness.re, (1.40_f64 / 1.50).ln(), epsilon = 1e-12);
    // d ln(F/K) / dF = 1/F
    assert_relative_eq!(log_moneyness.eps, 1.0 / 1.40, epsilon = 1e-12);
}

/// Derivative of total volatility sigma * sqrt(t) with respect to sigma.
#[test]
fn test_total_volatility_sensitivity() {
    let t = 4.0_f64;
    let sigma = DualNumber::new(0.18, 1.0);

    let total_vol = sigma * t.sqrt();

    assert_relative_eq!(total_vol.re, 0.36, epsilon = 1e-12);
    assert_relative_eq!(total_vol.eps, 2.0, epsilon = 1e-12);
}

/// Exponential and sqrt chain rule through a discount factor.
#[test]
fn test_discount_factor_rate_sensitivity() {
    let t = 3.0;
    let rate = DualNumber::new(0.04, 1.0);

    let df = (-rate * t).exp();

    let expected = (-0.04_f64 * 3.0).exp();
    assert_relative_eq!(df.re, expected, epsilon = 1e-12);
    // d exp(-r t) / dr = -t exp(-r t)
    assert_relative_eq!(df.eps, -3.0 * expected, epsilon = 1e-12);
}
