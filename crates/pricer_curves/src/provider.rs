//! Multicurve market data provider.
//!
//! A [`MulticurveProvider`] holds one discount curve per currency,
//! optional tenor-keyed forward curves, and an FX matrix for spot
//! conversion. Pricing code queries it for discount factors, simply
//! compounded forward rates, and cross rates; when no dedicated forward
//! curve exists for a currency/tenor pair, projection falls back to the
//! discount curve.
//!
//! The [`MulticurveBuilder`] bootstraps every registered curve from its
//! instrument strip. With the `parallel` feature the per-currency
//! bootstraps run on rayon's scheduler; the assembled provider is
//! identical either way.

use std::collections::HashMap;
use std::sync::Arc;

use num_traits::Float;
use pricer_core::market_data::{FxMatrix, MarketDataError, YieldCurve};
use pricer_core::types::{Currency, Tenor};

use crate::bootstrap::{BootstrapConfig, BootstrappedCurve, SequentialBootstrapper};
use crate::error::ProviderError;
use pricer_models::instruments::rates::BootstrapInstrument;

/// Discount curves, forward curves, and FX spot rates for one valuation.
#[derive(Debug, Clone)]
pub struct MulticurveProvider<T: Float> {
    discount: HashMap<Currency, Arc<BootstrappedCurve<T>>>,
    forward: HashMap<(Currency, Tenor), Arc<BootstrappedCurve<T>>>,
    fx: FxMatrix,
}

impl<T: Float> MulticurveProvider<T> {
    /// Create an empty provider over an FX matrix.
    pub fn new(fx: FxMatrix) -> Self {
        Self {
            discount: HashMap::new(),
            forward: HashMap::new(),
            fx,
        }
    }

    /// Register the discount curve for a currency, replacing any
    /// existing one.
    pub fn insert_discount(&mut self, currency: Currency, curve: BootstrappedCurve<T>) {
        self.discount.insert(currency, Arc::new(curve));
    }

    /// Register a forward curve for a currency and index tenor.
    pub fn insert_forward(&mut self, currency: Currency, tenor: Tenor, curve: BootstrappedCurve<T>) {
        self.forward.insert((currency, tenor), Arc::new(curve));
    }

    /// The discount curve for a currency.
    pub fn discount_curve(
        &self,
        currency: Currency,
    ) -> Result<&Arc<BootstrappedCurve<T>>, ProviderError> {
        self.discount
            .get(&currency)
            .ok_or(ProviderError::MissingDiscountCurve(currency))
    }

    /// The projection curve for a currency and index tenor.
    ///
    /// Falls back to the currency's discount curve when no dedicated
    /// forward curve is registered.
    pub fn forward_curve(
        &self,
        currency: Currency,
        tenor: Tenor,
    ) -> Result<&Arc<BootstrappedCurve<T>>, ProviderError> {
        if let Some(curve) = self.forward.get(&(currency, tenor)) {
            return Ok(curve);
        }
        self.discount
            .get(&currency)
            .ok_or(ProviderError::MissingForwardCurve { currency, tenor })
    }

    /// Whether a dedicated forward curve exists for the pair.
    pub fn has_forward_curve(&self, currency: Currency, tenor: Tenor) -> bool {
        self.forward.contains_key(&(currency, tenor))
    }

    /// Currencies with a registered discount curve.
    pub fn currencies(&self) -> Vec<Currency> {
        let mut currencies: Vec<Currency> = self.discount.keys().copied().collect();
        currencies.sort_by_key(|c| c.code());
        currencies
    }

    /// Discount factor to time `t` in the currency.
    pub fn discount_factor(&self, currency: Currency, t: T) -> Result<T, ProviderError> {
        let curve = self.discount_curve(currency)?;
        Ok(curve.discount_factor(t)?)
    }

    /// Continuously compounded zero rate to time `t` in the currency.
    pub fn zero_rate(&self, currency: Currency, t: T) -> Result<T, ProviderError> {
        let curve = self.discount_curve(currency)?;
        Ok(curve.zero_rate(t)?)
    }

    /// Simply compounded forward rate between `t1` and `t2` off the
    /// projection curve for the index tenor.
    pub fn forward_rate(
        &self,
        currency: Currency,
        tenor: Tenor,
        t1: T,
        t2: T,
    ) -> Result<T, ProviderError> {
        if t2 <= t1 {
            return Err(ProviderError::MarketData(MarketDataError::InvalidMaturity {
                t: t2.to_f64().unwrap_or(f64::NAN),
            }));
        }
        let curve = self.forward_curve(currency, tenor)?;
        let df1 = curve.discount_factor(t1)?;
        let df2 = curve.discount_factor(t2)?;
        Ok((df1 / df2 - T::one()) / (t2 - t1))
    }

    /// Spot exchange rate: units of `quote` per one `base`.
    pub fn fx_rate(&self, base: Currency, quote: Currency) -> Result<f64, ProviderError> {
        Ok(self.fx.rate(base, quote)?)
    }

    /// The underlying FX matrix.
    pub fn fx_matrix(&self) -> &FxMatrix {
        &self.fx
    }
}

/// Bootstraps a [`MulticurveProvider`] from per-currency instrument
/// strips.
#[derive(Debug, Clone)]
pub struct MulticurveBuilder<T: Float> {
    config: BootstrapConfig<T>,
    discount: Vec<(Currency, Vec<BootstrapInstrument<T>>)>,
    forward: Vec<(Currency, Tenor, Vec<BootstrapInstrument<T>>)>,
    fx: FxMatrix,
}

impl<T: Float> MulticurveBuilder<T> {
    /// Create a builder with the given bootstrap configuration.
    pub fn new(config: BootstrapConfig<T>) -> Self {
        Self {
            config,
            discount: Vec::new(),
            forward: Vec::new(),
            fx: FxMatrix::new(),
        }
    }

    /// Create a builder with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(BootstrapConfig::default())
    }

    /// Register the discount instrument strip for a currency.
    pub fn discount_instruments(
        mut self,
        currency: Currency,
        instruments: Vec<BootstrapInstrument<T>>,
    ) -> Self {
        self.discount.push((currency, instruments));
        self
    }

    /// Register a forward instrument strip for a currency and tenor.
    pub fn forward_instruments(
        mut self,
        currency: Currency,
        tenor: Tenor,
        instruments: Vec<BootstrapInstrument<T>>,
    ) -> Self {
        self.forward.push((currency, tenor, instruments));
        self
    }

    /// Attach the FX matrix carried by the provider.
    pub fn fx_matrix(mut self, fx: FxMatrix) -> Self {
        self.fx = fx;
        self
    }

    /// Bootstrap every registered strip sequentially.
    pub fn build(self) -> Result<MulticurveProvider<T>, ProviderError> {
        let bootstrapper = SequentialBootstrapper::new(self.config);
        let mut provider = MulticurveProvider::new(self.fx);

        for (currency, instruments) in &self.discount {
            let result = bootstrapper.bootstrap(instruments)?;
            tracing::info!(
                currency = %currency,
                pillars = result.curve.pillar_count(),
                "discount curve built"
            );
            provider.insert_discount(*currency, result.curve);
        }

        for (currency, tenor, instruments) in &self.forward {
            let result = bootstrapper.bootstrap(instruments)?;
            tracing::info!(
                currency = %currency,
                tenor = %tenor,
                pillars = result.curve.pillar_count(),
                "forward curve built"
            );
            provider.insert_forward(*currency, *tenor, result.curve);
        }

        Ok(provider)
    }

    /// Bootstrap the registered strips on rayon's scheduler.
    ///
    /// Curves are built concurrently and merged in registration order,
    /// so the resulting provider matches [`build`](Self::build).
    #[cfg(feature = "parallel")]
    pub fn build_parallel(self) -> Result<MulticurveProvider<T>, ProviderError>
    where
        T: Send + Sync,
    {
        use rayon::prelude::*;

        let config = self.config;
        let discount_curves: Result<Vec<_>, ProviderError> = self
            .discount
            .par_iter()
            .map(|(currency, instruments)| {
                let bootstrapper = SequentialBootstrapper::new(config.clone());
                let result = bootstrapper.bootstrap(instruments)?;
                Ok((*currency, result.curve))
            })
            .collect();

        let forward_curves: Result<Vec<_>, ProviderError> = self
            .forward
            .par_iter()
            .map(|(currency, tenor, instruments)| {
                let bootstrapper = SequentialBootstrapper::new(config.clone());
                let result = bootstrapper.bootstrap(instruments)?;
                Ok((*currency, *tenor, result.curve))
            })
            .collect();

        let mut provider = MulticurveProvider::new(self.fx);
        for (currency, curve) in discount_curves? {
            tracing::info!(
                currency = %currency,
                pillars = curve.pillar_count(),
                "discount curve built"
            );
            provider.insert_discount(currency, curve);
        }
        for (currency, tenor, curve) in forward_curves? {
            tracing::info!(
                currency = %currency,
                tenor = %tenor,
                pillars = curve.pillar_count(),
                "forward curve built"
            );
            provider.insert_forward(currency, tenor, curve);
        }
        Ok(provider)
    }

    /// Sequential fallback when the `parallel` feature is disabled.
    #[cfg(not(feature = "parallel"))]
    pub fn build_parallel(self) -> Result<MulticurveProvider<T>, ProviderError> {
        self.build()
    }
}
