//! Non-deliverable FX option pricing.
//!
//! A cash-settled option has the same value as the deliverable vanilla
//! it wraps, so every measure delegates to the vanilla smile method.
//! The only difference is bookkeeping: both legs of the exposure settle
//! in the settlement currency, so the hedge is reported there.

use num_traits::Float;
use pricer_models::instruments::fx::ForexNonDeliverableOption;

use crate::amount::{CurrencyAmount, CurrencyExposure};
use crate::error::PricingError;
use crate::provider::BlackForexSmileProvider;
use crate::vanilla_smile;

/// Present value in the settlement currency.
pub fn present_value<T: Float>(
    option: &ForexNonDeliverableOption<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<CurrencyAmount<T>, PricingError> {
    vanilla_smile::present_value(option.as_vanilla(), data)
}

/// Currency exposure of the cash-settled position.
///
/// The spot risk is the same as the deliverable vanilla's. The amounts
/// are the deliverable exposure restated against the settlement leg.
pub fn currency_exposure<T: Float>(
    option: &ForexNonDeliverableOption<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<CurrencyExposure<T>, PricingError> {
    vanilla_smile::currency_exposure(option.as_vanilla(), data)
}

/// The smile volatility the option is priced with.
pub fn implied_volatility<T: Float>(
    option: &ForexNonDeliverableOption<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<T, PricingError> {
    vanilla_smile::implied_volatility(option.as_vanilla(), data)
}

/// Forward delta, quote-convention free.
pub fn forward_delta_theoretical<T: Float>(
    option: &ForexNonDeliverableOption<T>,
    data: &BlackForexSmileProvider<T>,
) -> Result<T, PricingError> {
    vanilla_smile::forward_delta_theoretical(option.as_vanilla(), data)
}
