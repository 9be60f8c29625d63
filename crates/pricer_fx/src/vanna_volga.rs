//! Vanna-volga pricing of vanilla FX options.
//!
//! The method prices with a flat ATM volatility and corrects by a
//! weighted sum of the market-versus-flat price differences at the
//! three smile reference strikes (put pillar, ATM, call pillar). The
//! weights are the log-strike Lagrange coefficients scaled by vega
//! ratios, so the correction reproduces the market volatility exactly
//! at each reference strike and interpolates smoothly in between.
//!
//! A smile with a single delta pillar (three quoted volatilities) is
//! required; richer ladders are rejected.

use num_traits::Float;
use pricer_models::instruments::fx::ForexOptionVanilla;

use crate::amount::CurrencyAmount;
use crate::black;
use crate::error::PricingError;
use crate::provider::BlackForexSmileProvider;

/// The correction weights at the three reference strikes.
///
/// Exposed for calibration diagnostics; `present_value` is the main
/// entry point.
pub fn vanna_volga_weights<T: Float>(
    forward: T,
    strike: T,
    expiry: T,
    reference_strikes: &[T; 3],
    atm_volatility: T,
) -> [T; 3] {
    let [k1, k2, k3] = *reference_strikes;
    let ln1 = (k1 / strike).ln();
    let ln2 = (k2 / strike).ln();
    let ln3 = (k3 / strike).ln();
    let ln21 = (k2 / k1).ln();
    let ln31 = (k3 / k1).ln();
    let ln32 = (k3 / k2).ln();

    let vega_flat = black::vega(forward, strike, expiry, atm_volatility);
    let vega1 = black::vega(forward, k1, expiry, atm_volatility);
    let vega2 = black::vega(forward, k2, expiry, atm_volatility);
    let vega3 = black::vega(forward, k3, expiry, atm_volatility);

    [
        vega_flat * ln2 * ln3 / (vega1 * ln21 * ln31),
        -vega_flat * ln1 * ln3 / (vega2 * ln21 * ln32),
        vega_flat * ln1 * ln2 / (vega3 * ln31 * ln32),
    ]
}

/// Present value by the vanna-volga method, in the domestic currency.
pub fn present_value<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<CurrencyAmount<T>, PricingError> {
    data.check_pair(option.underlying().currency_pair())?;
    let payment_time = option.payment_time();
    let expiry = option.expiry_time();
    let strike = option.strike();

    let df_domestic = data.discount_factor_domestic(payment_time)?;
    let df_foreign = data.discount_factor_foreign(payment_time)?;
    let spot = data.spot()?;
    let forward = spot * df_foreign / df_domestic;

    let smile = data.smile().smile_for_expiry(expiry)?;
    let vols = smile.volatilities().to_vec();
    if vols.len() != 3 {
        return Err(PricingError::invalid_parameter(format!(
            "vanna-volga requires a three-point smile, got {} volatilities",
            vols.len()
        )));
    }
    let strikes = smile.strikes(forward)?;
    let reference = [strikes[0], strikes[1], strikes[2]];
    let atm = smile.atm_volatility();

    let weights = vanna_volga_weights(forward, strike, expiry, &reference, atm);

    let mut price = black::price(forward, strike, expiry, atm, option.is_call());
    for i in 0..3 {
        let market = black::price(forward, reference[i], expiry, vols[i], option.is_call());
        let flat = black::price(forward, reference[i], expiry, atm, option.is_call());
        price = price + weights[i] * (market - flat);
    }

    let pv = price
        * df_domestic
        * option.underlying().notional_foreign().abs()
        * option.sign();
    Ok(CurrencyAmount::new(
        option.underlying().domestic_currency(),
        pv,
    ))
}

/// The volatility the method implies at a strike.
///
/// Obtained by inverting the vanna-volga price back through Black. Used
/// mostly in tests and smile diagnostics.
pub fn smile_volatility<T: Float>(
    expiry: T,
    strike: T,
    forward: T,
    reference_strikes: &[T; 3],
    reference_volatilities: &[T; 3],
) -> Result<T, PricingError> {
    let atm = reference_volatilities[1];
    let weights = vanna_volga_weights(forward, strike, expiry, reference_strikes, atm);
    let mut price = black::price(forward, strike, expiry, atm, true);
    for i in 0..3 {
        let market = black::price(
            forward,
            reference_strikes[i],
            expiry,
            reference_volatilities[i],
            true,
        );
        let flat = black::price(forward, reference_strikes[i], expiry, atm, true);
        price = price + weights[i] * (market - flat);
    }
    implied_volatility_from_price(price, forward, strike, expiry)
}

// Bisection on the Black price; the price is monotone in volatility
fn implied_volatility_from_price<T: Float>(
    target: T,
    forward: T,
    strike: T,
    expiry: T,
) -> Result<T, PricingError> {
    let intrinsic = (forward - strike).max(T::zero());
    if target < intrinsic || target > forward {
        return Err(PricingError::invalid_parameter(
            "price outside the arbitrage bounds, no implied volatility",
        ));
    }
    let mut low = T::from(1e-6).unwrap();
    let mut high = T::from(5.0).unwrap();
    let half = T::from(0.5).unwrap();
    for _ in 0..100 {
        let mid = half * (low + high);
        if black::price(forward, strike, expiry, mid, true) > target {
            high = mid;
        } else {
            low = mid;
        }
    }
    Ok(half * (low + high))
}
