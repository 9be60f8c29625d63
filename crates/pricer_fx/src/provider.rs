//! Market data bundle for Black-smile FX pricing.

use std::sync::Arc;

use num_traits::Float;
use pricer_core::market_data::SmileDeltaTermStructure;
use pricer_core::types::{Currency, CurrencyPair};
use pricer_curves::MulticurveProvider;

use crate::error::PricingError;

/// Multicurve provider, smile term structure and the currency pair the
/// smile is quoted on.
///
/// All pricing methods take one of these; the quote convention
/// throughout is domestic per foreign, i.e. the pair's counter currency
/// per one unit of its base currency.
#[derive(Debug, Clone)]
pub struct BlackForexSmileProvider<T: Float> {
    multicurve: Arc<MulticurveProvider<T>>,
    smile: SmileDeltaTermStructure<T>,
    pair: CurrencyPair,
}

impl<T: Float> BlackForexSmileProvider<T> {
    /// Bundle curves and a smile for one currency pair.
    pub fn new(
        multicurve: Arc<MulticurveProvider<T>>,
        smile: SmileDeltaTermStructure<T>,
        pair: CurrencyPair,
    ) -> Self {
        Self {
            multicurve,
            smile,
            pair,
        }
    }

    /// The currency pair the smile covers, foreign/domestic.
    #[inline]
    pub fn pair(&self) -> &CurrencyPair {
        &self.pair
    }

    /// The underlying multicurve provider.
    #[inline]
    pub fn multicurve(&self) -> &MulticurveProvider<T> {
        &self.multicurve
    }

    /// The smile term structure.
    #[inline]
    pub fn smile(&self) -> &SmileDeltaTermStructure<T> {
        &self.smile
    }

    /// Check that an instrument's pair matches the smile data.
    pub fn check_pair(&self, pair: &CurrencyPair) -> Result<(), PricingError> {
        if *pair != self.pair {
            let found = if pair.base() == self.pair.base() {
                pair.counter()
            } else {
                pair.base()
            };
            tracing::debug!(expected = %self.pair, requested = %pair, "currency pair mismatch");
            return Err(PricingError::CurrencyMismatch {
                expected: self.pair,
                found,
            });
        }
        Ok(())
    }

    /// Spot rate of the pair, domestic per foreign.
    pub fn spot(&self) -> Result<T, PricingError> {
        let rate = self
            .multicurve
            .fx_rate(self.pair.base(), self.pair.counter())?;
        T::from(rate).ok_or_else(|| PricingError::invalid_parameter("spot rate not representable"))
    }

    /// Domestic discount factor to time `t`.
    pub fn discount_factor_domestic(&self, t: T) -> Result<T, PricingError> {
        Ok(self.multicurve.discount_factor(self.pair.counter(), t)?)
    }

    /// Foreign discount factor to time `t`.
    pub fn discount_factor_foreign(&self, t: T) -> Result<T, PricingError> {
        Ok(self.multicurve.discount_factor(self.pair.base(), t)?)
    }

    /// Discount factor in an arbitrary curve currency.
    pub fn discount_factor(&self, currency: Currency, t: T) -> Result<T, PricingError> {
        Ok(self.multicurve.discount_factor(currency, t)?)
    }

    /// Forward FX rate for exchange at `payment_time`:
    /// `F = S · df_foreign / df_domestic`.
    pub fn forward_rate(&self, payment_time: T) -> Result<T, PricingError> {
        let df_domestic = self.discount_factor_domestic(payment_time)?;
        let df_foreign = self.discount_factor_foreign(payment_time)?;
        Ok(self.spot()? * df_foreign / df_domestic)
    }

    /// Smile volatility at an expiry, strike and forward.
    pub fn volatility(&self, expiry: T, strike: T, forward: T) -> Result<T, PricingError> {
        Ok(self.smile.volatility(expiry, strike, forward)?)
    }
}
