//! Currency pair types for FX calculations.
//!
//! This module provides the ordered currency pair used to key FX rates,
//! volatility surfaces, and forex instruments. Exchange rates themselves
//! live in the FX matrix; the pair is a pure identifier.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::{Currency, CurrencyPair};
//!
//! let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
//! assert_eq!(pair.base(), Currency::EUR);
//! assert_eq!(pair.counter(), Currency::USD);
//! assert_eq!(pair.to_string(), "EUR/USD");
//!
//! // Interbank quotation order puts EUR first regardless of input order
//! let conventional = CurrencyPair::market_convention(Currency::USD, Currency::EUR).unwrap();
//! assert_eq!(conventional, pair);
//! ```

use std::fmt;
use std::str::FromStr;

use super::currency::Currency;
use super::error::CurrencyError;

/// An ordered currency pair.
///
/// The convention is BASE/COUNTER: an FX rate for the pair expresses how
/// many units of the counter currency one unit of the base currency buys.
/// Pairs compare and hash on the two currencies, so they serve directly
/// as map keys.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{Currency, CurrencyPair};
///
/// let eurusd = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
/// assert!(eurusd.contains(Currency::EUR));
/// assert_eq!(eurusd.invert().base(), Currency::USD);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyPair {
    /// Base currency (one unit of this buys `rate` units of counter)
    base: Currency,
    /// Counter (quote) currency
    counter: Currency,
}

impl CurrencyPair {
    /// Creates a new currency pair in the given order.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::SameCurrency` if base and counter are equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::{Currency, CurrencyPair};
    ///
    /// let pair = CurrencyPair::new(Currency::USD, Currency::JPY).unwrap();
    /// assert_eq!(pair.code(), "USD/JPY");
    ///
    /// assert!(CurrencyPair::new(Currency::USD, Currency::USD).is_err());
    /// ```
    pub fn new(base: Currency, counter: Currency) -> Result<Self, CurrencyError> {
        if base == counter {
            return Err(CurrencyError::SameCurrency(base.code().to_string()));
        }
        Ok(Self { base, counter })
    }

    /// Creates the pair in interbank quotation order.
    ///
    /// The currency with the lower [`quote_priority`](Currency::quote_priority)
    /// becomes the base, whatever order the arguments arrive in. EUR/USD,
    /// GBP/JPY, and AUD/NZD are conventional; USD/EUR is not.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::SameCurrency` if the currencies are equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::{Currency, CurrencyPair};
    ///
    /// let pair = CurrencyPair::market_convention(Currency::JPY, Currency::GBP).unwrap();
    /// assert_eq!(pair.code(), "GBP/JPY");
    /// ```
    pub fn market_convention(a: Currency, b: Currency) -> Result<Self, CurrencyError> {
        if a.quote_priority() <= b.quote_priority() {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    /// Returns the base currency.
    #[inline]
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Returns the counter (quote) currency.
    #[inline]
    pub fn counter(&self) -> Currency {
        self.counter
    }

    /// Returns true when the pair is already in interbank quotation order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::{Currency, CurrencyPair};
    ///
    /// let eurusd = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
    /// assert!(eurusd.is_market_convention());
    /// assert!(!eurusd.invert().is_market_convention());
    /// ```
    #[inline]
    pub fn is_market_convention(&self) -> bool {
        self.base.quote_priority() < self.counter.quote_priority()
    }

    /// Returns the currency pair code in standard format (BASE/COUNTER).
    pub fn code(&self) -> String {
        format!("{}/{}", self.base.code(), self.counter.code())
    }

    /// Returns the inverted pair (base and counter swapped).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::{Currency, CurrencyPair};
    ///
    /// let eurusd = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
    /// let usdeur = eurusd.invert();
    /// assert_eq!(usdeur.base(), Currency::USD);
    /// assert_eq!(usdeur.counter(), Currency::EUR);
    /// ```
    pub fn invert(&self) -> Self {
        Self {
            base: self.counter,
            counter: self.base,
        }
    }

    /// Checks if this pair contains the given currency.
    #[inline]
    pub fn contains(&self, currency: Currency) -> bool {
        self.base == currency || self.counter == currency
    }

    /// Returns the other currency of the pair, or None when the given
    /// currency is not part of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::{Currency, CurrencyPair};
    ///
    /// let pair = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
    /// assert_eq!(pair.other(Currency::EUR), Some(Currency::USD));
    /// assert_eq!(pair.other(Currency::JPY), None);
    /// ```
    pub fn other(&self, currency: Currency) -> Option<Currency> {
        if currency == self.base {
            Some(self.counter)
        } else if currency == self.counter {
            Some(self.base)
        } else {
            None
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base.code(), self.counter.code())
    }
}

impl FromStr for CurrencyPair {
    type Err = CurrencyError;

    /// Parses a pair from "EUR/USD", "EUR-USD", or compact "EURUSD" form.
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        let trimmed = s.trim();
        let (base_str, counter_str) = match trimmed.split_once(['/', '-']) {
            Some(parts) => parts,
            None if trimmed.len() == 6 => trimmed.split_at(3),
            None => return Err(CurrencyError::InvalidPair(s.to_string())),
        };
        let base: Currency = base_str.parse()?;
        let counter: Currency = counter_str.parse()?;
        Self::new(base, counter)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::CurrencyPair;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for CurrencyPair {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.code())
        }
    }

    impl<'de> Deserialize<'de> for CurrencyPair {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            CurrencyPair::from_str(&s).map_err(de::Error::custom)
        }
    }
}
