//! Currency-labelled amounts returned by the pricing methods.

use num_traits::Float;
use pricer_core::types::Currency;

/// An amount in a single currency.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyAmount<T: Float> {
    currency: Currency,
    amount: T,
}

impl<T: Float> CurrencyAmount<T> {
    /// Create an amount in the given currency.
    pub fn new(currency: Currency, amount: T) -> Self {
        Self { currency, amount }
    }

    /// The currency of the amount.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The amount.
    #[inline]
    pub fn amount(&self) -> T {
        self.amount
    }
}

/// First-order hedge amounts in the two currencies of an FX option.
///
/// The foreign leg is the delta expressed as a foreign amount; the
/// domestic leg is the residual such that
/// `foreign · spot + domestic = present value`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyExposure<T: Float> {
    /// Exposure in the foreign (base) currency.
    pub foreign: CurrencyAmount<T>,
    /// Exposure in the domestic (counter) currency.
    pub domestic: CurrencyAmount<T>,
}

impl<T: Float> CurrencyExposure<T> {
    /// The exposure collapsed to a domestic amount at the given spot.
    pub fn value_in_domestic(&self, spot: T) -> T {
        self.foreign.amount() * spot + self.domestic.amount()
    }
}
