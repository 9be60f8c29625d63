//! Non-deliverable FX option.

use num_traits::Float;
use pricer_core::types::Currency;

use crate::instruments::error::InstrumentError;
use crate::instruments::fx::{Forex, ForexOptionVanilla};

/// A cash-settled FX option.
///
/// Economically identical to the deliverable vanilla it wraps, except
/// that no currency exchange happens at settlement: the in-the-money
/// value is paid out in the settlement currency (the domestic currency
/// of the pair). Valuation is therefore the vanilla valuation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForexNonDeliverableOption<T: Float> {
    underlying: ForexOptionVanilla<T>,
}

impl<T: Float> ForexNonDeliverableOption<T> {
    /// Creates a non-deliverable option with the vanilla's economics.
    pub fn new(
        underlying: Forex<T>,
        expiry_time: T,
        is_call: bool,
        is_long: bool,
    ) -> Result<Self, InstrumentError> {
        let vanilla = ForexOptionVanilla::new(underlying, expiry_time, is_call, is_long)?;
        Ok(Self { underlying: vanilla })
    }

    /// The equivalent deliverable vanilla.
    #[inline]
    pub fn as_vanilla(&self) -> &ForexOptionVanilla<T> {
        &self.underlying
    }

    /// Currency the cash settlement is paid in.
    #[inline]
    pub fn settlement_currency(&self) -> Currency {
        self.underlying.underlying().domestic_currency()
    }

    /// Expiry time in years from valuation.
    #[inline]
    pub fn expiry_time(&self) -> T {
        self.underlying.expiry_time()
    }

    /// Strike, domestic per foreign.
    #[inline]
    pub fn strike(&self) -> T {
        self.underlying.strike()
    }
}
