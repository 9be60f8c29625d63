//! Vanilla FX option.

use num_traits::Float;

use crate::instruments::error::InstrumentError;
use crate::instruments::fx::Forex;

/// A European FX option on an underlying [`Forex`] exchange.
///
/// A call is the right to receive the foreign leg (buy foreign, sell
/// domestic at the strike); a put is the right to deliver it. The option
/// expires at `expiry_time` and, if exercised, settles at the underlying
/// payment time.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::fx::{Forex, ForexOptionVanilla};
/// use pricer_core::types::{Currency, CurrencyPair};
///
/// let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
/// let underlying = Forex::new(pair, 1.0_f64, 1_000_000.0, 1.12).unwrap();
/// let call = ForexOptionVanilla::new(underlying, 1.0, true, true).unwrap();
/// assert!(call.is_call());
/// assert!((call.strike() - 1.12).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForexOptionVanilla<T: Float> {
    underlying: Forex<T>,
    expiry_time: T,
    is_call: bool,
    is_long: bool,
}

impl<T: Float> ForexOptionVanilla<T> {
    /// Creates a vanilla FX option.
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

    /// Strike, domestic per foreign, from the underlying payments.
    #[inline]
    pub fn strike(&self) -> T {
        self.underlying.strike()
    }

    /// True for a call on the foreign currency.
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
}
