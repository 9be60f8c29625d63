//! Digital (binary) FX option.

use num_traits::Float;

use crate::instruments::error::InstrumentError;
use crate::instruments::fx::Forex;

/// Which currency a digital option pays in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaymentCurrency {
    /// Pays the domestic amount of the underlying when in the money.
    Domestic,
    /// Pays the foreign amount of the underlying when in the money.
    Foreign,
}

/// A cash-or-nothing FX option.
///
/// Pays a fixed amount in the selected currency when the spot rate at
/// expiry is beyond the strike (above for a call, below for a put), and
/// nothing otherwise. The amounts come from the underlying [`Forex`]:
/// the domestic payoff is `|notional_domestic|`, the foreign payoff is
/// `|notional_foreign|`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForexOptionDigital<T: Float> {
    underlying: Forex<T>,
    expiry_time: T,
    is_call: bool,
    is_long: bool,
    payment_currency: PaymentCurrency,
}

impl<T: Float> ForexOptionDigital<T> {
    /// Creates a digital FX option.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidExpiry` if the expiry is negative
    /// or falls after the underlying payment time.
    pub fn new(
        underlying: Forex<T>,
        expiry_time: T,
        is_call: bool,
        is_long: bool,
        payment_currency: PaymentCurrency,
    ) -> Result<Self, InstrumentError> {
        if expiry_time < T::zero() || expiry_time > underlying.payment_time() {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry_time.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            underlying,
            expiry_time,
            is_call,
            is_long,
            payment_currency,
        })
    }

    /// The underlying FX exchange.
    #[inline]
    pub fn underlying(&self) -> &Forex<T> {
        &self.underlying
    }

    /// Expiry time in years from valuation.
    #[inline]
    pub fn expiry_time(&self) -> T {
        self.expiry_time
    }

    /// Settlement time of the underlying exchange.
    #[inline]
    pub fn payment_time(&self) -> T {
        self.underlying.payment_time()
    }

    /// Strike, domestic per foreign.
    #[inline]
    pub fn strike(&self) -> T {
        self.underlying.strike()
    }

    /// True for a call (pays when spot ends above the strike).
    #[inline]
    pub fn is_call(&self) -> bool {
        self.is_call
    }

    /// True when the position is long the option.
    #[inline]
    pub fn is_long(&self) -> bool {
        self.is_long
    }

    /// Position sign: `+1` long, `-1` short.
    #[inline]
    pub fn sign(&self) -> T {
        if self.is_long { T::one() } else { -T::one() }
    }

    /// Currency the digital pays in.
    #[inline]
    pub fn payment_currency(&self) -> PaymentCurrency {
        self.payment_currency
    }

    /// Fixed amount paid when in the money, in the payment currency.
    #[inline]
    pub fn payoff_amount(&self) -> T {
        match self.payment_currency {
            PaymentCurrency::Domestic => self.underlying.notional_domestic().abs(),
            PaymentCurrency::Foreign => self.underlying.notional_foreign().abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::{Currency, CurrencyPair};

    fn underlying() -> Forex<f64> {
        let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
        Forex::new(pair, 1.0, 1_000_000.0, 1.12).unwrap()
    }

    #[test]
    fn payoff_amount_follows_the_payment_currency() {
        let dom =
            ForexOptionDigital::new(underlying(), 1.0, true, true, PaymentCurrency::Domestic)
                .unwrap();
        let fgn =
            ForexOptionDigital::new(underlying(), 1.0, true, true, PaymentCurrency::Foreign)
                .unwrap();
        assert!((dom.payoff_amount() - 1_120_000.0).abs() < 1e-6);
        assert!((fgn.payoff_amount() - 1_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn expiry_after_payment_is_rejected() {
        assert!(ForexOptionDigital::new(
            underlying(),
            2.0,
            true,
            true,
            PaymentCurrency::Domestic
        )
        .is_err());
    }
}
