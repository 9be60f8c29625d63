//! Standard normal distribution functions.
//!
//! This module provides AD-compatible implementations of:
//! - `norm_pdf`: Probability density function
//! - `norm_cdf`: Cumulative distribution function
//! - `inverse_norm_cdf`: Quantile function (inverse CDF)
//!
//! `norm_pdf` and `norm_cdf` are generic over `T: Float` to support both
//! `f64` and dual numbers for automatic differentiation. The inverse CDF
//! is `f64`-only: it is used to map delta quotes to strikes where no
//! derivative propagation is required.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function approximation using Horner's method.
///
/// Uses the Abramowitz and Stegun approximation (formula 7.1.26) which
/// provides maximum error of 1.5e-7 for all x.
///
/// # AD Compatibility
/// Uses only smooth operations (exp, polynomial) for AD compatibility.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let zero = T::zero();

    let abs_x = x.abs();

    // Abramowitz and Stegun constants (7.1.26)
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    // t = 1 / (1 + p * |x|)
    let t = one / (one + p * abs_x);

    // Horner's method for polynomial evaluation
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));

    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    let two = T::from(2.0).unwrap();
    if x < zero {
        two - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal probability density function.
///
/// Computes φ(x) = (1 / sqrt(2π)) * exp(-x² / 2).
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    frac_1_sqrt_2pi * (-half * x * x).exp()
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) via Φ(x) = (1/2) erfc(-x / √2).
///
/// # Accuracy
/// Accurate to at least 1e-7 for all finite x values.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
///
/// let cdf_pos = norm_cdf(3.0_f64);
/// assert!(cdf_pos > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    half * erfc_approx(-x / sqrt_2)
}

/// Inverse of the standard normal CDF (quantile function).
///
/// Uses Acklam's rational approximation, which has relative error below
/// 1.15e-9 over the full open interval (0, 1). This is more than enough
/// precision for delta-to-strike conversion on a volatility smile.
///
/// Returns `None` if `p` is outside the open interval (0, 1) or not finite.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::{inverse_norm_cdf, norm_cdf};
///
/// let z = inverse_norm_cdf(0.975).unwrap();
/// assert!((z - 1.959964).abs() < 1e-5);
///
/// // Round-trips through the CDF
/// let p = norm_cdf(z);
/// assert!((p - 0.975).abs() < 1e-6);
/// ```
pub fn inverse_norm_cdf(p: f64) -> Option<f64> {
    if !p.is_finite() || p <= 0.0 || p >= 1.0 {
        return None;
    }

    // Acklam coefficients.
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];

    // Break-points between the central and tail regions.
    const P_LOW: f64 = 0.02425;
    const P_HIGH: f64 = 1.0 - P_LOW;

    let x = if p < P_LOW {
        // Lower tail
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= P_HIGH {
        // Central region
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        // Upper tail
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_pdf_at_zero() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        for &x in &[0.25, 0.5, 1.0, 1.7, 2.5] {
            assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_known_values() {
        // Reference values from standard normal tables
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.1586553, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(1.96_f64), 0.9750021, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-2.575_f64), 0.0050122, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_cdf_complement() {
        for &x in &[0.1, 0.5, 1.0, 2.0, 3.0] {
            let sum: f64 = norm_cdf(x) + norm_cdf(-x);
            assert_relative_eq!(sum, 1.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_inverse_norm_cdf_known_values() {
        assert_relative_eq!(inverse_norm_cdf(0.5).unwrap(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(inverse_norm_cdf(0.975).unwrap(), 1.95996398, epsilon = 1e-7);
        assert_relative_eq!(inverse_norm_cdf(0.025).unwrap(), -1.95996398, epsilon = 1e-7);
        assert_relative_eq!(inverse_norm_cdf(0.99).unwrap(), 2.32634787, epsilon = 1e-7);
    }

    #[test]
    fn test_inverse_norm_cdf_round_trip() {
        for &p in &[0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99] {
            let z = inverse_norm_cdf(p).unwrap();
            assert_relative_eq!(norm_cdf(z), p, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_inverse_norm_cdf_rejects_out_of_range() {
        assert!(inverse_norm_cdf(0.0).is_none());
        assert!(inverse_norm_cdf(1.0).is_none());
        assert!(inverse_norm_cdf(-0.3).is_none());
        assert!(inverse_norm_cdf(f64::NAN).is_none());
    }

    #[test]
    fn test_inverse_norm_cdf_antisymmetry() {
        for &p in &[0.001, 0.05, 0.2, 0.4] {
            let lo = inverse_norm_cdf(p).unwrap();
            let hi = inverse_norm_cdf(1.0 - p).unwrap();
            assert_relative_eq!(lo, -hi, epsilon = 1e-7);
        }
    }

    proptest::proptest! {
        #[test]
        fn prop_norm_cdf_monotone(a in -5.0..5.0f64, b in -5.0..5.0f64) {
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            proptest::prop_assert!(norm_cdf(lo) <= norm_cdf(hi) + 1e-12);
        }

        #[test]
        fn prop_norm_cdf_in_unit_interval(x in -10.0..10.0f64) {
            let p = norm_cdf(x);
            proptest::prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}
