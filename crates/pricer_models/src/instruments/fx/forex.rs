//! Spot/forward FX transaction.

use num_traits::Float;
use pricer_core::types::{Currency, CurrencyPair};

use crate::instruments::error::InstrumentError;

/// An exchange of two currency amounts at a future payment time.
///
/// The transaction exchanges `notional_foreign` units of the foreign
/// (base) currency against `-notional_foreign * strike` units of the
/// domestic (counter) currency at `payment_time`. A positive foreign
/// notional therefore means receiving foreign and paying domestic.
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `Dual64`)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forex<T: Float> {
    currency_pair: CurrencyPair,
    payment_time: T,
    notional_foreign: T,
    strike: T,
}

impl<T: Float> Forex<T> {
    /// Creates an FX transaction.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError` if the strike is not positive, the
    /// payment time is negative, or the foreign notional is zero.
    pub fn new(
        currency_pair: CurrencyPair,
        payment_time: T,
        notional_foreign: T,
        strike: T,
    ) -> Result<Self, InstrumentError> {
        if strike <= T::zero() {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if payment_time < T::zero() {
            return Err(InstrumentError::InvalidExpiry {
                expiry: payment_time.to_f64().unwrap_or(f64::NAN),
            });
        }
        if notional_foreign == T::zero() {
            return Err(InstrumentError::InvalidNotional { notional: 0.0 });
        }
        Ok(Self {
            currency_pair,
            payment_time,
            notional_foreign,
            strike,
        })
    }

    /// The currency pair, foreign/domestic.
    #[inline]
    pub fn currency_pair(&self) -> &CurrencyPair {
        &self.currency_pair
    }

    /// Foreign (base) currency of the exchange.
    #[inline]
    pub fn foreign_currency(&self) -> Currency {
        self.currency_pair.base()
    }

    /// Domestic (counter) currency of the exchange.
    #[inline]
    pub fn domestic_currency(&self) -> Currency {
        self.currency_pair.counter()
    }

    /// Payment time in years from valuation.
    #[inline]
    pub fn payment_time(&self) -> T {
        self.payment_time
    }

    /// Signed amount of foreign currency exchanged.
    #[inline]
    pub fn notional_foreign(&self) -> T {
        self.notional_foreign
    }

    /// Signed amount of domestic currency exchanged,
    /// `-notional_foreign * strike`.
    #[inline]
    pub fn notional_domestic(&self) -> T {
        -self.notional_foreign * self.strike
    }

    /// Contractual exchange rate, domestic per foreign.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::Currency;

    fn eurusd() -> CurrencyPair {
        CurrencyPair::new(Currency::EUR, Currency::USD).unwrap()
    }

    #[test]
    fn amounts_balance_through_the_strike() {
        let fx = Forex::new(eurusd(), 1.0_f64, 1_000_000.0, 1.12).unwrap();
        assert_eq!(fx.foreign_currency(), Currency::EUR);
        assert_eq!(fx.domestic_currency(), Currency::USD);
        assert!((fx.notional_domestic() + 1_120_000.0).abs() < 1e-6);
    }

    #[test]
    fn negative_foreign_notional_flips_the_domestic_leg() {
        let fx = Forex::new(eurusd(), 0.5_f64, -500_000.0, 1.10).unwrap();
        assert!((fx.notional_domestic() - 550_000.0).abs() < 1e-6);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(matches!(
            Forex::new(eurusd(), 1.0_f64, 1_000_000.0, 0.0),
            Err(InstrumentError::InvalidStrike { .. })
        ));
        assert!(matches!(
            Forex::new(eurusd(), -0.1_f64, 1_000_000.0, 1.12),
            Err(InstrumentError::InvalidExpiry { .. })
        ));
        assert!(matches!(
            Forex::new(eurusd(), 1.0_f64, 0.0, 1.12),
            Err(InstrumentError::InvalidNotional { .. })
        ));
    }
}
