//! Vanilla FX option pricing with Black and a volatility smile.
//!
//! The present value is the Black price on the forward
//! `F = S·df_foreign/df_domestic` with the smile volatility at
//! `(expiry, strike, F)`, discounted by the domestic factor and scaled
//! by the absolute foreign notional and the long/short sign. All
//! results are in the domestic currency unless stated otherwise.
//!
//! The delta and gamma family comes in a direct-quote form (domestic
//! per foreign, the internal convention) and a reverse-quote form
//! obtained through the `−S²` Jacobian of the inverted rate.

use num_traits::Float;
use pricer_models::instruments::fx::ForexOptionVanilla;

use crate::amount::{CurrencyAmount, CurrencyExposure};
use crate::black;
use crate::error::PricingError;
use crate::provider::BlackForexSmileProvider;

/// The shared market inputs of every vanilla method.
struct MarketInputs<T: Float> {
    df_domestic: T,
    df_foreign: T,
    spot: T,
    forward: T,
    volatility: T,
}

fn market_inputs<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<MarketInputs<T>, PricingError> {
    data.check_pair(option.underlying().currency_pair())?;
    let payment_time = option.payment_time();
    let df_domestic = data.discount_factor_domestic(payment_time)?;
    let df_foreign = data.discount_factor_foreign(payment_time)?;
    let spot = data.spot()?;
    let forward = spot * df_foreign / df_domestic;
    let volatility = data.volatility(option.expiry_time(), option.strike(), forward)?;
    Ok(MarketInputs {
        df_domestic,
        df_foreign,
        spot,
        forward,
        volatility,
    })
}

/// Present value in the domestic currency.
pub fn present_value<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<CurrencyAmount<T>, PricingError> {
    let market = market_inputs(option, data)?;
    let price = black::price(
        market.forward,
        option.strike(),
        option.expiry_time(),
        market.volatility,
        option.is_call(),
    );
    let pv = price
        * market.df_domestic
        * option.underlying().notional_foreign().abs()
        * option.sign();
    Ok(CurrencyAmount::new(
        option.underlying().domestic_currency(),
        pv,
    ))
}

/// The smile volatility the option is priced with.
pub fn implied_volatility<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<T, PricingError> {
    Ok(market_inputs(option, data)?.volatility)
}

/// First-order hedge amounts in the two option currencies.
///
/// The foreign amount is the spot delta scaled by the notional; the
/// domestic amount is the residual so that the exposure collapses to
/// the present value at today's spot. Smile sensitivity to spot is not
/// included.
pub fn currency_exposure<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<CurrencyExposure<T>, PricingError> {
    let market = market_inputs(option, data)?;
    let notional = option.underlying().notional_foreign().abs();
    let sign = option.sign();

    let price = black::price(
        market.forward,
        option.strike(),
        option.expiry_time(),
        market.volatility,
        option.is_call(),
    ) * market.df_domestic;
    let forward_delta = black::delta(
        market.forward,
        option.strike(),
        option.expiry_time(),
        market.volatility,
        option.is_call(),
    );
    // dPV/dS: the forward moves by df_foreign/df_domestic per unit of spot
    let delta_spot = forward_delta * market.df_foreign;

    let pv = price * notional * sign;
    let foreign_amount = delta_spot * notional * sign;
    let domestic_amount = -delta_spot * notional * market.spot * sign + pv;

    Ok(CurrencyExposure {
        foreign: CurrencyAmount::new(option.underlying().foreign_currency(), foreign_amount),
        domestic: CurrencyAmount::new(option.underlying().domestic_currency(), domestic_amount),
    })
}

/// Forward delta of the undiscounted Black price, quote-convention free.
pub fn forward_delta_theoretical<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<T, PricingError> {
    let market = market_inputs(option, data)?;
    Ok(black::delta(
        market.forward,
        option.strike(),
        option.expiry_time(),
        market.volatility,
        option.is_call(),
    ))
}

/// Spot delta: forward delta carried back by the foreign discount factor.
pub fn spot_delta_theoretical<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<T, PricingError> {
    let market = market_inputs(option, data)?;
    let forward_delta = black::delta(
        market.forward,
        option.strike(),
        option.expiry_time(),
        market.volatility,
        option.is_call(),
    );
    Ok(forward_delta * market.df_foreign)
}

/// Relative delta: the first-order equivalent foreign amount per unit
/// of notional, signed by the position.
///
/// With `direct_quote` the sensitivity is to the domestic-per-foreign
/// rate; otherwise to the reverse quote via the `−S²` Jacobian.
pub fn delta_relative<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
    direct_quote: bool,
) -> Result<T, PricingError> {
    let market = market_inputs(option, data)?;
    let delta_direct = black::delta(
        market.forward,
        option.strike(),
        option.expiry_time(),
        market.volatility,
        option.is_call(),
    ) * market.df_foreign
        * option.sign();
    if direct_quote {
        Ok(delta_direct)
    } else {
        Ok(-delta_direct * market.spot * market.spot)
    }
}

/// Delta scaled by the foreign notional, in the domestic currency.
pub fn delta<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
    direct_quote: bool,
) -> Result<CurrencyAmount<T>, PricingError> {
    let relative = delta_relative(option, data, direct_quote)?;
    Ok(CurrencyAmount::new(
        option.underlying().domestic_currency(),
        relative * option.underlying().notional_foreign().abs(),
    ))
}

/// Forward gamma of the undiscounted Black price.
pub fn forward_gamma_theoretical<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<T, PricingError> {
    let market = market_inputs(option, data)?;
    Ok(black::gamma(
        market.forward,
        option.strike(),
        option.expiry_time(),
        market.volatility,
    ))
}

/// Spot gamma: forward gamma times `df_foreign²/df_domestic`.
pub fn spot_gamma_theoretical<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<T, PricingError> {
    let market = market_inputs(option, data)?;
    let forward_gamma = black::gamma(
        market.forward,
        option.strike(),
        option.expiry_time(),
        market.volatility,
    );
    Ok(forward_gamma * market.df_foreign * market.df_foreign / market.df_domestic)
}

/// Relative gamma: second-order pv sensitivity per unit of notional.
pub fn gamma_relative<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
    direct_quote: bool,
) -> Result<T, PricingError> {
    let market = market_inputs(option, data)?;
    let sign = option.sign();
    let gamma_direct = black::gamma(
        market.forward,
        option.strike(),
        option.expiry_time(),
        market.volatility,
    ) * market.df_foreign
        * market.df_foreign
        / market.df_domestic
        * sign;
    if direct_quote {
        return Ok(gamma_direct);
    }
    let two = T::from(2.0).unwrap();
    let delta_direct = black::delta(
        market.forward,
        option.strike(),
        option.expiry_time(),
        market.volatility,
        option.is_call(),
    ) * market.df_foreign
        * sign;
    let spot = market.spot;
    Ok((gamma_direct * spot + two * delta_direct) * spot * spot * spot)
}

/// Gamma scaled by the foreign notional, in the domestic currency.
pub fn gamma<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
    direct_quote: bool,
) -> Result<CurrencyAmount<T>, PricingError> {
    let relative = gamma_relative(option, data, direct_quote)?;
    Ok(CurrencyAmount::new(
        option.underlying().domestic_currency(),
        relative * option.underlying().notional_foreign().abs(),
    ))
}

/// Forward vega of the undiscounted Black price.
pub fn forward_vega_theoretical<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<T, PricingError> {
    let market = market_inputs(option, data)?;
    Ok(black::vega(
        market.forward,
        option.strike(),
        option.expiry_time(),
        market.volatility,
    ))
}

/// Vega of the present value, in the domestic currency.
pub fn vega<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<CurrencyAmount<T>, PricingError> {
    let market = market_inputs(option, data)?;
    let forward_vega = black::vega(
        market.forward,
        option.strike(),
        option.expiry_time(),
        market.volatility,
    );
    Ok(CurrencyAmount::new(
        option.underlying().domestic_currency(),
        forward_vega
            * market.df_domestic
            * option.underlying().notional_foreign().abs()
            * option.sign(),
    ))
}

/// Forward driftless theta of the undiscounted Black price.
pub fn forward_driftless_theta_theoretical<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<T, PricingError> {
    let market = market_inputs(option, data)?;
    Ok(black::driftless_theta(
        market.forward,
        option.strike(),
        option.expiry_time(),
        market.volatility,
    ))
}

/// Driftless theta scaled by the notional and sign, in the domestic
/// currency.
pub fn theta_theoretical<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<CurrencyAmount<T>, PricingError> {
    let market = market_inputs(option, data)?;
    let theta = black::driftless_theta(
        market.forward,
        option.strike(),
        option.expiry_time(),
        market.volatility,
    );
    Ok(CurrencyAmount::new(
        option.underlying().domestic_currency(),
        theta * option.underlying().notional_foreign().abs() * option.sign(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::test_support::{eurusd_provider, SPOT};
    use approx::assert_relative_eq;
    use pricer_core::types::{Currency, CurrencyPair};
    use pricer_models::instruments::fx::Forex;

    const NOTIONAL: f64 = 1_000_000.0;
    const STRIKE: f64 = 1.45;
    const EXPIRY: f64 = 1.0;

    fn option(is_call: bool, is_long: bool) -> ForexOptionVanilla<f64> {
        let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
        let underlying = Forex::new(pair, EXPIRY, NOTIONAL, STRIKE).unwrap();
        ForexOptionVanilla::new(underlying, EXPIRY, is_call, is_long).unwrap()
    }

    // ========================================
    // Present Value Tests
    // ========================================

    #[test]
    fn pv_is_domestic_and_positive_for_a_long_call() {
        let data = eurusd_provider();
        let pv = present_value(&option(true, true), &data).unwrap();
        assert_eq!(pv.currency(), Currency::USD);
        assert!(pv.amount() > 0.0);
    }

    #[test]
    fn short_position_flips_the_sign() {
        let data = eurusd_provider();
        let long = present_value(&option(true, true), &data).unwrap();
        let short = present_value(&option(true, false), &data).unwrap();
        assert_relative_eq!(long.amount(), -short.amount(), epsilon = 1e-8);
    }

    #[test]
    fn put_call_parity_at_the_forward() {
        let data = eurusd_provider();
        let call = present_value(&option(true, true), &data).unwrap();
        let put = present_value(&option(false, true), &data).unwrap();

        let df_domestic = data.discount_factor_domestic(EXPIRY).unwrap();
        let forward = data.forward_rate(EXPIRY).unwrap();
        let parity = df_domestic * (forward - STRIKE) * NOTIONAL;
        assert_relative_eq!(call.amount() - put.amount(), parity, epsilon = 1e-6);
    }

    #[test]
    fn wrong_pair_is_rejected() {
        let data = eurusd_provider();
        let pair = CurrencyPair::new(Currency::GBP, Currency::USD).unwrap();
        let underlying = Forex::new(pair, EXPIRY, NOTIONAL, STRIKE).unwrap();
        let opt = ForexOptionVanilla::new(underlying, EXPIRY, true, true).unwrap();
        assert!(matches!(
            present_value(&opt, &data),
            Err(PricingError::CurrencyMismatch { .. })
        ));
    }

    // ========================================
    // Currency Exposure Tests
    // ========================================

    #[test]
    fn exposure_collapses_to_the_present_value() {
        let data = eurusd_provider();
        let opt = option(true, true);
        let pv = present_value(&opt, &data).unwrap();
        let exposure = currency_exposure(&opt, &data).unwrap();

        assert_eq!(exposure.foreign.currency(), Currency::EUR);
        assert_eq!(exposure.domestic.currency(), Currency::USD);
        assert_relative_eq!(
            exposure.value_in_domestic(SPOT),
            pv.amount(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn exposure_matches_a_spot_bump() {
        // Finite-difference delta at frozen volatility
        let data = eurusd_provider();
        let opt = option(true, true);
        let exposure = currency_exposure(&opt, &data).unwrap();

        let bump = 1e-5;
        let base_vol = implied_volatility(&opt, &data).unwrap();
        let df_d = data.discount_factor_domestic(EXPIRY).unwrap();
        let df_f = data.discount_factor_foreign(EXPIRY).unwrap();
        let pv_base =
            black::price(SPOT * df_f / df_d, STRIKE, EXPIRY, base_vol, true) * df_d * NOTIONAL;
        let pv_bumped = black::price(
            (SPOT + bump) * df_f / df_d,
            STRIKE,
            EXPIRY,
            base_vol,
            true,
        ) * df_d
            * NOTIONAL;
        let fd_delta = (pv_bumped - pv_base) / bump;
        assert_relative_eq!(exposure.foreign.amount(), fd_delta, max_relative = 1e-3);
    }

    // ========================================
    // Greek Tests
    // ========================================

    #[test]
    fn spot_delta_is_discounted_forward_delta() {
        let data = eurusd_provider();
        let opt = option(true, true);
        let fwd = forward_delta_theoretical(&opt, &data).unwrap();
        let spot_delta = spot_delta_theoretical(&opt, &data).unwrap();
        let df_f = data.discount_factor_foreign(EXPIRY).unwrap();
        assert_relative_eq!(spot_delta, fwd * df_f, epsilon = 1e-12);
    }

    #[test]
    fn reverse_quote_delta_applies_the_jacobian() {
        let data = eurusd_provider();
        let opt = option(true, true);
        let direct = delta_relative(&opt, &data, true).unwrap();
        let reverse = delta_relative(&opt, &data, false).unwrap();
        assert_relative_eq!(reverse, -direct * SPOT * SPOT, epsilon = 1e-12);
    }

    #[test]
    fn reverse_quote_gamma_applies_the_jacobian() {
        let data = eurusd_provider();
        let opt = option(true, true);
        let gamma_direct = gamma_relative(&opt, &data, true).unwrap();
        let delta_direct = delta_relative(&opt, &data, true).unwrap();
        let reverse = gamma_relative(&opt, &data, false).unwrap();
        assert_relative_eq!(
            reverse,
            (gamma_direct * SPOT + 2.0 * delta_direct) * SPOT.powi(3),
            epsilon = 1e-9
        );
    }

    #[test]
    fn vega_scales_with_the_notional() {
        let data = eurusd_provider();
        let opt = option(true, true);
        let v = vega(&opt, &data).unwrap();
        let fwd_vega = forward_vega_theoretical(&opt, &data).unwrap();
        let df_d = data.discount_factor_domestic(EXPIRY).unwrap();
        assert_relative_eq!(v.amount(), fwd_vega * df_d * NOTIONAL, epsilon = 1e-6);
        assert!(v.amount() > 0.0);
    }

    #[test]
    fn theta_is_negative_for_a_long_position() {
        let data = eurusd_provider();
        let theta = theta_theoretical(&option(true, true), &data).unwrap();
        assert!(theta.amount() < 0.0);
    }

    #[test]
    fn implied_vol_reflects_the_skew() {
        // Risk reversal is negative: low strikes carry higher vols
        let data = eurusd_provider();
        let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
        let low = ForexOptionVanilla::new(
            Forex::new(pair, EXPIRY, NOTIONAL, 1.20).unwrap(),
            EXPIRY,
            false,
            true,
        )
        .unwrap();
        let high = ForexOptionVanilla::new(
            Forex::new(pair, EXPIRY, NOTIONAL, 1.60).unwrap(),
            EXPIRY,
            true,
            true,
        )
        .unwrap();
        let vol_low = implied_volatility(&low, &data).unwrap();
        let vol_high = implied_volatility(&high, &data).unwrap();
        assert!(vol_low > vol_high);
    }
}
