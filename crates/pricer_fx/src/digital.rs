//! Cash-or-nothing FX digital pricing.
//!
//! Two methods are provided. The exact method discounts the
//! risk-neutral exercise probability in the payment currency. The
//! call-spread method replicates the digital by a tight spread of
//! vanillas, which picks up the smile slope the exact method ignores
//! and is the standard hedging-consistent alternative.
//!
//! A foreign-paying digital is valued in the inverted quote: the payoff
//! `S_T > K` becomes `1/S_T < 1/K` under the foreign measure, where the
//! inverted rate is lognormal with the same volatility and forward
//! `1/F`.

use num_traits::Float;
use pricer_core::math::distributions::norm_cdf;
use pricer_models::instruments::fx::{ForexOptionDigital, PaymentCurrency};

use crate::amount::CurrencyAmount;
use crate::black;
use crate::error::PricingError;
use crate::provider::BlackForexSmileProvider;

/// Default relative strike spread of the call-spread replication.
pub const DEFAULT_RELATIVE_SPREAD: f64 = 0.0001;

struct DigitalQuote<T: Float> {
    /// Strike in the pricing quote (inverted for foreign payment).
    strike: T,
    /// Forward in the pricing quote.
    forward: T,
    /// Discount factor of the payment currency.
    df_payment: T,
    /// `+1` when the payoff triggers above the pricing-quote strike.
    omega: T,
    payment_currency: pricer_core::types::Currency,
}

/// Market inputs rotated into the quote the digital pays in.
fn digital_quote<T: Float>(
    option: &ForexOptionDigital<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<(DigitalQuote<T>, T), PricingError> {
    data.check_pair(option.underlying().currency_pair())?;
    let payment_time = option.payment_time();
    let df_domestic = data.discount_factor_domestic(payment_time)?;
    let df_foreign = data.discount_factor_foreign(payment_time)?;
    let spot = data.spot()?;
    let forward = spot * df_foreign / df_domestic;
    let strike = option.strike();

    // Lognormal volatility is invariant under quote inversion
    let volatility = data.volatility(option.expiry_time(), strike, forward)?;

    let quote = match option.payment_currency() {
        PaymentCurrency::Domestic => DigitalQuote {
            strike,
            forward,
            df_payment: df_domestic,
            omega: if option.is_call() { T::one() } else { -T::one() },
            payment_currency: option.underlying().domestic_currency(),
        },
        PaymentCurrency::Foreign => DigitalQuote {
            strike: T::one() / strike,
            forward: T::one() / forward,
            df_payment: df_foreign,
            omega: if option.is_call() { -T::one() } else { T::one() },
            payment_currency: option.underlying().foreign_currency(),
        },
    };
    Ok((quote, volatility))
}

/// Present value of the digital by the exact formula, in the payment
/// currency.
pub fn present_value<T: Float>(
    option: &ForexOptionDigital<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<CurrencyAmount<T>, PricingError> {
    let (quote, volatility) = digital_quote(option, data)?;
    let expiry = option.expiry_time();
    let half = T::from(0.5).unwrap();

    let probability = if expiry <= T::zero() || volatility <= T::zero() {
        // Indicator of the terminal quote against the strike
        let in_the_money = quote.omega * (quote.forward - quote.strike) > T::zero();
        if in_the_money { T::one() } else { T::zero() }
    } else {
        let sigma_sqrt_t = volatility * expiry.sqrt();
        let d = (quote.forward / quote.strike).ln() / sigma_sqrt_t - half * sigma_sqrt_t;
        norm_cdf(quote.omega * d)
    };

    let pv = option.payoff_amount() * quote.df_payment * probability * option.sign();
    Ok(CurrencyAmount::new(quote.payment_currency, pv))
}

/// Spot delta of the exact digital price, per unit of spot move.
pub fn spot_delta<T: Float>(
    option: &ForexOptionDigital<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<T, PricingError> {
    let (quote, volatility) = digital_quote(option, data)?;
    let expiry = option.expiry_time();
    if expiry <= T::zero() || volatility <= T::zero() {
        return Ok(T::zero());
    }
    let half = T::from(0.5).unwrap();
    let sigma_sqrt_t = volatility * expiry.sqrt();
    let d = (quote.forward / quote.strike).ln() / sigma_sqrt_t - half * sigma_sqrt_t;
    let density = pricer_core::math::distributions::norm_pdf(d);
    // dF'/dS = ±F'/S depending on the quote orientation
    let spot = data.spot()?;
    let df_ds = match option.payment_currency() {
        PaymentCurrency::Domestic => quote.forward / spot,
        PaymentCurrency::Foreign => -quote.forward / spot,
    };
    Ok(option.payoff_amount()
        * quote.df_payment
        * quote.omega
        * density
        * df_ds
        / (quote.forward * sigma_sqrt_t)
        * option.sign())
}

/// Prices digitals as a tight spread of smile-priced vanillas.
#[derive(Debug, Clone, Copy)]
pub struct CallSpreadDigitalMethod<T: Float> {
    spread: T,
}

impl<T: Float> Default for CallSpreadDigitalMethod<T> {
    fn default() -> Self {
        Self {
            spread: T::from(DEFAULT_RELATIVE_SPREAD).unwrap(),
        }
    }
}

impl<T: Float> CallSpreadDigitalMethod<T> {
    /// Creates the method with a relative half-width for the strikes.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` unless `0 < spread < 1`.
    pub fn new(spread: T) -> Result<Self, PricingError> {
        if spread <= T::zero() || spread >= T::one() {
            return Err(PricingError::invalid_parameter(
                "call-spread relative width must be in (0, 1)",
            ));
        }
        Ok(Self { spread })
    }

    /// Relative half-width of the replication strikes.
    pub fn spread(&self) -> T {
        self.spread
    }

    /// Present value by call-spread replication, in the payment
    /// currency.
    ///
    /// The two replication legs read the smile at their own strikes, so
    /// unlike the exact formula this price carries the smile-slope
    /// correction.
    pub fn present_value(
        &self,
        option: &ForexOptionDigital<T>,
        data: &BlackForexSmileProvider<T>,
    ) -> Result<CurrencyAmount<T>, PricingError> {
        data.check_pair(option.underlying().currency_pair())?;
        let payment_time = option.payment_time();
        let expiry = option.expiry_time();
        let df_domestic = data.discount_factor_domestic(payment_time)?;
        let df_foreign = data.discount_factor_foreign(payment_time)?;
        let spot = data.spot()?;
        let forward = spot * df_foreign / df_domestic;

        // Work in the quote the digital pays in
        let (quote_strike, quote_forward, df_payment, as_call, payment_currency) =
            match option.payment_currency() {
                PaymentCurrency::Domestic => (
                    option.strike(),
                    forward,
                    df_domestic,
                    option.is_call(),
                    option.underlying().domestic_currency(),
                ),
                PaymentCurrency::Foreign => (
                    T::one() / option.strike(),
                    T::one() / forward,
                    df_foreign,
                    !option.is_call(),
                    option.underlying().foreign_currency(),
                ),
            };

        let strike_low = quote_strike * (T::one() - self.spread);
        let strike_high = quote_strike * (T::one() + self.spread);
        let width = strike_high - strike_low;

        // Volatilities looked up on the direct pair; invariant under
        // quote inversion so the inverted strike maps back through 1/k
        let vol_at = |k: T| -> Result<T, PricingError> {
            let direct_strike = match option.payment_currency() {
                PaymentCurrency::Domestic => k,
                PaymentCurrency::Foreign => T::one() / k,
            };
            data.volatility(expiry, direct_strike, forward)
        };
        let vol_low = vol_at(strike_low)?;
        let vol_high = vol_at(strike_high)?;

        let low = black::price(quote_forward, strike_low, expiry, vol_low, as_call);
        let high = black::price(quote_forward, strike_high, expiry, vol_high, as_call);
        // A call digital is long the low strike; a put digital is long
        // the high strike
        let spread_value = if as_call { low - high } else { high - low };

        let pv = option.payoff_amount() * df_payment * spread_value / width * option.sign();
        Ok(CurrencyAmount::new(payment_currency, pv))
    }
}
