//! Forward Black formula and its analytic greeks.
//!
//! Everything here is undiscounted and strike/forward based: the price
//! is the expected payoff under the forward measure, so a present value
//! is `df_domestic · price`. The FX methods layer the discounting,
//! notional scaling and quote conventions on top.
//!
//! With `d1 = (ln(F/K) + σ²t/2)/(σ√t)` and `d2 = d1 − σ√t`:
//!
//! ```text
//! call = F·N(d1) − K·N(d2)        put = K·N(−d2) − F·N(−d1)
//! ```

use num_traits::Float;
use pricer_core::math::distributions::{norm_cdf, norm_pdf};

fn d1_d2<T: Float>(forward: T, strike: T, expiry: T, volatility: T) -> (T, T) {
    let half = T::from(0.5).unwrap();
    let vol_sqrt_t = volatility * expiry.sqrt();
    let d1 = (forward / strike).ln() / vol_sqrt_t + half * vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Intrinsic forward payoff, used on the zero-expiry and zero-vol edges.
fn intrinsic<T: Float>(forward: T, strike: T, is_call: bool) -> T {
    if is_call {
        (forward - strike).max(T::zero())
    } else {
        (strike - forward).max(T::zero())
    }
}

/// Undiscounted Black price of a vanilla option on the forward.
pub fn price<T: Float>(forward: T, strike: T, expiry: T, volatility: T, is_call: bool) -> T {
    if expiry <= T::zero() || volatility <= T::zero() {
        return intrinsic(forward, strike, is_call);
    }
    let (d1, d2) = d1_d2(forward, strike, expiry, volatility);
    if is_call {
        forward * norm_cdf(d1) - strike * norm_cdf(d2)
    } else {
        strike * norm_cdf(-d2) - forward * norm_cdf(-d1)
    }
}

/// Forward delta: first derivative of the price with respect to the
/// forward, `ω·N(ω·d1)`.
pub fn delta<T: Float>(forward: T, strike: T, expiry: T, volatility: T, is_call: bool) -> T {
    if expiry <= T::zero() || volatility <= T::zero() {
        let in_the_money = if is_call {
            forward > strike
        } else {
            forward < strike
        };
        let unit = if in_the_money { T::one() } else { T::zero() };
        return if is_call { unit } else { -unit };
    }
    let (d1, _) = d1_d2(forward, strike, expiry, volatility);
    if is_call {
        norm_cdf(d1)
    } else {
        norm_cdf(d1) - T::one()
    }
}

/// Forward gamma: second derivative of the price with respect to the
/// forward, `n(d1)/(F·σ√t)`. Identical for calls and puts.
pub fn gamma<T: Float>(forward: T, strike: T, expiry: T, volatility: T) -> T {
    if expiry <= T::zero() || volatility <= T::zero() {
        return T::zero();
    }
    let (d1, _) = d1_d2(forward, strike, expiry, volatility);
    norm_pdf(d1) / (forward * volatility * expiry.sqrt())
}

/// Vega: derivative of the price with respect to the volatility,
/// `F·n(d1)·√t`. Identical for calls and puts.
pub fn vega<T: Float>(forward: T, strike: T, expiry: T, volatility: T) -> T {
    if expiry <= T::zero() || volatility <= T::zero() {
        return T::zero();
    }
    let (d1, _) = d1_d2(forward, strike, expiry, volatility);
    forward * norm_pdf(d1) * expiry.sqrt()
}

/// Driftless theta: derivative of the undiscounted price with respect
/// to calendar time, `−F·n(d1)·σ/(2√t)`.
pub fn driftless_theta<T: Float>(forward: T, strike: T, expiry: T, volatility: T) -> T {
    if expiry <= T::zero() || volatility <= T::zero() {
        return T::zero();
    }
    let two = T::from(2.0).unwrap();
    let (d1, _) = d1_d2(forward, strike, expiry, volatility);
    -forward * norm_pdf(d1) * volatility / (two * expiry.sqrt())
}

/// Undiscounted cash-or-nothing digital paying one unit, `N(ω·d2)`.
pub fn cash_digital<T: Float>(forward: T, strike: T, expiry: T, volatility: T, is_call: bool) -> T {
    if expiry <= T::zero() || volatility <= T::zero() {
        let in_the_money = if is_call {
            forward > strike
        } else {
            forward < strike
        };
        return if in_the_money { T::one() } else { T::zero() };
    }
    let (_, d2) = d1_d2(forward, strike, expiry, volatility);
    if is_call {
        norm_cdf(d2)
    } else {
        norm_cdf(-d2)
    }
}
