//! American FX option pricing by the Bjerksund-Stensland approximation.
//!
//! The kernel values an American call against a flat early-exercise
//! boundary: below the trigger the price is a combination of the
//! capped-exercise building block `phi`, above it the option is worth
//! immediate exercise. A call on a non-dividend-like underlying (cost
//! of carry at least the discount rate) is never exercised early and
//! collapses to the European price. Puts go through the usual
//! transformation `P(S, K, r, b) = C(K, S, r - b, -b)`.
//!
//! For FX the cost of carry is the domestic-foreign rate differential
//! implied from the discount factors at the payment time, and the
//! volatility is the smile reading at the option strike.

use num_traits::Float;
use pricer_core::math::distributions::norm_cdf;
use pricer_models::instruments::fx::ForexOptionVanilla;

use crate::amount::CurrencyAmount;
use crate::black;
use crate::error::PricingError;
use crate::provider::BlackForexSmileProvider;

/// The capped-exercise building block.
///
/// Expected discounted payoff of `S_t^gamma` at the first of expiry and
/// the boundary `x`, evaluated against the level `h`.
fn phi<T: Float>(spot: T, expiry: T, gamma: T, h: T, x: T, rate: T, carry: T, vol: T) -> T {
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();
    let vol_sq = vol * vol;
    let sigma_sqrt_t = vol * expiry.sqrt();

    let kappa = two * carry / vol_sq + two * gamma - T::one();
    let lambda = -rate + gamma * carry + half * gamma * (gamma - T::one()) * vol_sq;
    let drift = (carry + (gamma - half) * vol_sq) * expiry;

    let d1 = -((spot / h).ln() + drift) / sigma_sqrt_t;
    let d2 = -((x * x / (spot * h)).ln() + drift) / sigma_sqrt_t;

    (lambda * expiry).exp()
        * spot.powf(gamma)
        * (norm_cdf(d1) - (x / spot).powf(kappa) * norm_cdf(d2))
}

fn european_price<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    carry: T,
    expiry: T,
    vol: T,
    is_call: bool,
) -> T {
    let forward = spot * (carry * expiry).exp();
    black::price(forward, strike, expiry, vol, is_call) * (-rate * expiry).exp()
}

fn american_call<T: Float>(spot: T, strike: T, rate: T, carry: T, expiry: T, vol: T) -> T {
    if carry >= rate {
        // Early exercise is never optimal
        return european_price(spot, strike, rate, carry, expiry, vol, true);
    }
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();
    let vol_sq = vol * vol;

    let discriminant = ((carry / vol_sq - half) * (carry / vol_sq - half)
        + two * rate / vol_sq)
        .max(T::zero());
    let beta = (half - carry / vol_sq) + discriminant.sqrt();
    if beta <= T::one() {
        // Degenerate boundary, exercise never caps the European value
        return european_price(spot, strike, rate, carry, expiry, vol, true);
    }

    let boundary_infinite = beta / (beta - T::one()) * strike;
    let boundary_zero = strike.max(rate / (rate - carry) * strike);
    let h = -(carry * expiry + two * vol * expiry.sqrt()) * boundary_zero
        / (boundary_infinite - boundary_zero);
    let trigger = boundary_zero + (boundary_infinite - boundary_zero) * (T::one() - h.exp());

    if spot >= trigger {
        return spot - strike;
    }

    let alpha = (trigger - strike) * trigger.powf(-beta);
    alpha * spot.powf(beta)
        - alpha * phi(spot, expiry, beta, trigger, trigger, rate, carry, vol)
        + phi(spot, expiry, T::one(), trigger, trigger, rate, carry, vol)
        - phi(spot, expiry, T::one(), strike, trigger, rate, carry, vol)
        - strike * phi(spot, expiry, T::zero(), trigger, trigger, rate, carry, vol)
        + strike * phi(spot, expiry, T::zero(), strike, trigger, rate, carry, vol)
}

/// American option price per unit of notional on the spot.
///
/// `cost_of_carry` is the drift of the underlying under the pricing
/// measure; for FX it is the domestic minus the foreign rate.
pub fn american_option_price<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    cost_of_carry: T,
    expiry: T,
    volatility: T,
    is_call: bool,
) -> T {
    let intrinsic = if is_call {
        (spot - strike).max(T::zero())
    } else {
        (strike - spot).max(T::zero())
    };
    if expiry <= T::zero() || volatility <= T::zero() {
        return intrinsic;
    }
    let price = if is_call {
        american_call(spot, strike, rate, cost_of_carry, expiry, volatility)
    } else {
        american_call(
            strike,
            spot,
            rate - cost_of_carry,
            -cost_of_carry,
            expiry,
            volatility,
        )
    };
    price.max(intrinsic)
}

/// Present value of an American-exercise vanilla, in the domestic
/// currency.
pub fn present_value<T: Float>(
    option: &ForexOptionVanilla<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<CurrencyAmount<T>, PricingError> {
    data.check_pair(option.underlying().currency_pair())?;
    let payment_time = option.payment_time();
    if payment_time <= T::zero() {
        return Err(PricingError::invalid_parameter(
            "American pricing requires a strictly positive payment time",
        ));
    }
    let df_domestic = data.discount_factor_domestic(payment_time)?;
    let df_foreign = data.discount_factor_foreign(payment_time)?;
    let spot = data.spot()?;
    let forward = spot * df_foreign / df_domestic;

    let rate_domestic = -df_domestic.ln() / payment_time;
    let rate_foreign = -df_foreign.ln() / payment_time;
    let volatility = data.volatility(option.expiry_time(), option.strike(), forward)?;

    let price = american_option_price(
        spot,
        option.strike(),
        rate_domestic,
        rate_domestic - rate_foreign,
        option.expiry_time(),
        volatility,
        option.is_call(),
    );
    Ok(CurrencyAmount::new(
        option.underlying().domestic_currency(),
        price * option.underlying().notional_foreign().abs() * option.sign(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::test_support::eurusd_provider;
    use crate::vanilla_smile;
    use approx::assert_relative_eq;
    use pricer_core::types::{Currency, CurrencyPair};
    use pricer_models::instruments::fx::Forex;

    const NOTIONAL: f64 = 1_000_000.0;
    const EXPIRY: f64 = 1.0;

    fn option(strike: f64, is_call: bool) -> ForexOptionVanilla<f64> {
        let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
        let fx = Forex::new(pair, EXPIRY, NOTIONAL, strike).unwrap();
        ForexOptionVanilla::new(fx, EXPIRY, is_call, true).unwrap()
    }

    // ========================================
    // Kernel Tests
    // ========================================

    #[test]
    fn call_with_high_carry_is_european() {
        // b >= r: never exercised early
        let american = american_option_price(1.40, 1.45, 0.03, 0.05, 1.0, 0.18, true);
        let european = european_price(1.40, 1.45, 0.03, 0.05, 1.0, 0.18, true);
        assert_relative_eq!(american, european, epsilon = 1e-12);
    }

    #[test]
    fn american_dominates_the_european_price() {
        for is_call in [true, false] {
            for strike in [1.25, 1.40, 1.55] {
                let american =
                    american_option_price(1.40, strike, 0.029, 0.011, 1.0, 0.185, is_call);
                let european = european_price(1.40, strike, 0.029, 0.011, 1.0, 0.185, is_call);
                assert!(
                    american >= european - 1e-12,
                    "strike {strike} call {is_call}: {american} < {european}"
                );
            }
        }
    }

    #[test]
    fn price_respects_the_intrinsic_floor() {
        let deep_put = american_option_price(1.10, 1.60, 0.029, 0.011, 1.0, 0.18, false);
        assert!(deep_put >= 0.50);
        let deep_call = american_option_price(1.90, 1.40, 0.029, 0.011, 1.0, 0.18, true);
        assert!(deep_call >= 0.50);
    }

    #[test]
    fn deep_in_the_money_put_is_exercised_now() {
        // Strongly positive carry makes waiting costly for the put
        let price = american_option_price(0.80, 1.60, 0.05, 0.05, 1.0, 0.10, false);
        assert_relative_eq!(price, 0.80, epsilon = 1e-9);
    }

    #[test]
    fn expired_option_pays_the_intrinsic() {
        assert_relative_eq!(
            american_option_price(1.50, 1.40, 0.03, 0.01, 0.0, 0.18, true),
            0.10,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            american_option_price(1.50, 1.40, 0.03, 0.01, 0.0, 0.18, false),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn price_increases_with_volatility() {
        let low = american_option_price(1.40, 1.45, 0.029, 0.011, 1.0, 0.10, true);
        let high = american_option_price(1.40, 1.45, 0.029, 0.011, 1.0, 0.30, true);
        assert!(high > low);
    }

    // ========================================
    // FX Wrapper Tests
    // ========================================

    #[test]
    fn pv_is_domestic_and_dominates_the_european_smile_price() {
        let data = eurusd_provider();
        for is_call in [true, false] {
            let opt = option(1.45, is_call);
            let american = present_value(&opt, &data).unwrap();
            let european = vanilla_smile::present_value(&opt, &data).unwrap();
            assert_eq!(american.currency(), Currency::USD);
            assert!(american.amount() >= european.amount() - 1e-6);
        }
    }

    #[test]
    fn short_position_flips_the_sign() {
        let data = eurusd_provider();
        let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
        let fx = Forex::new(pair, EXPIRY, NOTIONAL, 1.45).unwrap();
        let long = ForexOptionVanilla::new(fx.clone(), EXPIRY, false, true).unwrap();
        let short = ForexOptionVanilla::new(fx, EXPIRY, false, false).unwrap();
        let long_pv = present_value(&long, &data).unwrap();
        let short_pv = present_value(&short, &data).unwrap();
        assert_relative_eq!(long_pv.amount(), -short_pv.amount(), epsilon = 1e-8);
    }

    #[test]
    fn wrong_pair_is_rejected() {
        let data = eurusd_provider();
        let pair = CurrencyPair::new(Currency::GBP, Currency::USD).unwrap();
        let fx = Forex::new(pair, EXPIRY, NOTIONAL, 1.45).unwrap();
        let opt = ForexOptionVanilla::new(fx, EXPIRY, true, true).unwrap();
        assert!(matches!(
            present_value(&opt, &data),
            Err(PricingError::CurrencyMismatch { .. })
        ));
    }

    // ========================================
    // Property Tests
    // ========================================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(300))]

            #[test]
            fn early_exercise_premium_is_never_negative(
                spot in 0.8f64..2.0,
                strike in 0.8f64..2.0,
                vol in 0.05f64..0.5,
                rate in 0.0f64..0.10,
                carry in -0.05f64..0.10,
                is_call in any::<bool>(),
            ) {
                let american =
                    american_option_price(spot, strike, rate, carry, 1.0, vol, is_call);
                let european = european_price(spot, strike, rate, carry, 1.0, vol, is_call);
                prop_assert!(american >= european - 1e-9);
            }

            #[test]
            fn price_stays_within_model_bounds(
                spot in 0.8f64..2.0,
                strike in 0.8f64..2.0,
                vol in 0.05f64..0.5,
            ) {
                let call = american_option_price(spot, strike, 0.03, 0.01, 1.0, vol, true);
                let put = american_option_price(spot, strike, 0.03, 0.01, 1.0, vol, false);
                prop_assert!(call >= (spot - strike).max(0.0) - 1e-12);
                prop_assert!(call <= spot + 1e-12);
                prop_assert!(put >= (strike - spot).max(0.0) - 1e-12);
                prop_assert!(put <= strike + 1e-12);
            }
        }
    }
}
