//! Currency types for financial calculations.
//!
//! This module provides ISO 4217 currency codes with metadata for
//! decimal precision, deposit settlement lag, and FX quotation priority.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::currency::Currency;
//!
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//! assert_eq!(usd.decimal_places(), 2);
//!
//! let jpy = Currency::JPY;
//! assert_eq!(jpy.decimal_places(), 0);  // Yen has no decimal places
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes with market metadata.
///
/// Designed for static dispatch (enum-based) so currency lookups stay on
/// the stack. Covers the major FX trading currencies with their standard
/// decimal precision, money market settlement lag, and the quotation
/// priority used to order currency pairs.
///
/// # Examples
///
/// ```
/// use pricer_core::types::currency::Currency;
///
/// assert_eq!(Currency::USD.code(), "USD");
/// assert_eq!(Currency::JPY.decimal_places(), 0);
///
/// // Parse from string (case-insensitive)
/// let eur: Currency = "eur".parse().unwrap();
/// assert_eq!(eur, Currency::EUR);
///
/// // EUR is quoted before USD in any pair containing both
/// assert!(Currency::EUR.quote_priority() < Currency::USD.quote_priority());
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// United States Dollar (2 decimal places)
    USD,
    /// Euro (2 decimal places)
    EUR,
    /// British Pound Sterling (2 decimal places)
    GBP,
    /// Japanese Yen (0 decimal places)
    JPY,
    /// Swiss Franc (2 decimal places)
    CHF,
    /// Australian Dollar (2 decimal places)
    AUD,
    /// New Zealand Dollar (2 decimal places)
    NZD,
    /// Canadian Dollar (2 decimal places)
    CAD,
    /// Swedish Krona (2 decimal places)
    SEK,
    /// Norwegian Krone (2 decimal places)
    NOK,
    /// Danish Krone (2 decimal places)
    DKK,
    /// Mexican Peso (2 decimal places)
    MXN,
}

impl Currency {
    /// All supported currencies, in quotation priority order.
    pub const ALL: [Currency; 12] = [
        Currency::EUR,
        Currency::GBP,
        Currency::AUD,
        Currency::NZD,
        Currency::USD,
        Currency::CAD,
        Currency::CHF,
        Currency::NOK,
        Currency::SEK,
        Currency::DKK,
        Currency::MXN,
        Currency::JPY,
    ];

    /// Returns the ISO 4217 three-letter currency code.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::USD.code(), "USD");
    /// assert_eq!(Currency::NZD.code(), "NZD");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::AUD => "AUD",
            Currency::NZD => "NZD",
            Currency::CAD => "CAD",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
            Currency::DKK => "DKK",
            Currency::MXN => "MXN",
        }
    }

    /// Returns the standard number of decimal places for this currency.
    ///
    /// Most currencies use 2 decimal places; JPY uses 0.
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the standard settlement lag in business days for money
    /// market deposits in this currency.
    ///
    /// Most currencies settle T+2. GBP deposits settle same-day and CAD
    /// settles T+1.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::USD.spot_lag(), 2);
    /// assert_eq!(Currency::GBP.spot_lag(), 0);
    /// assert_eq!(Currency::CAD.spot_lag(), 1);
    /// ```
    pub fn spot_lag(&self) -> u32 {
        match self {
            Currency::GBP => 0,
            Currency::CAD => 1,
            _ => 2,
        }
    }

    /// Returns the FX quotation priority of this currency.
    ///
    /// In any pair the currency with the lower priority value is quoted
    /// first (the base), following interbank convention: EUR before GBP
    /// before the commodity currencies before USD, with JPY always
    /// quoted last.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::currency::Currency;
    ///
    /// assert!(Currency::EUR.quote_priority() < Currency::USD.quote_priority());
    /// assert!(Currency::USD.quote_priority() < Currency::JPY.quote_priority());
    /// ```
    pub fn quote_priority(&self) -> u8 {
        match self {
            Currency::EUR => 0,
            Currency::GBP => 1,
            Currency::AUD => 2,
            Currency::NZD => 3,
            Currency::USD => 4,
            Currency::CAD => 5,
            Currency::CHF => 6,
            Currency::NOK => 7,
            Currency::SEK => 8,
            Currency::DKK => 9,
            Currency::MXN => 10,
            Currency::JPY => 11,
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses ISO 4217 currency code (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::currency::Currency;
    ///
    /// let usd: Currency = "USD".parse().unwrap();
    /// assert_eq!(usd, Currency::USD);
    ///
    /// let result: Result<Currency, _> = "XYZ".parse();
    /// assert!(result.is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "CHF" => Ok(Currency::CHF),
            "AUD" => Ok(Currency::AUD),
            "NZD" => Ok(Currency::NZD),
            "CAD" => Ok(Currency::CAD),
            "SEK" => Ok(Currency::SEK),
            "NOK" => Ok(Currency::NOK),
            "DKK" => Ok(Currency::DKK),
            "MXN" => Ok(Currency::MXN),
            _ => Err(CurrencyError::UnknownCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::GBP.code(), "GBP");
        assert_eq!(Currency::JPY.code(), "JPY");
        assert_eq!(Currency::AUD.code(), "AUD");
        assert_eq!(Currency::MXN.code(), "MXN");
    }

    #[test]
    fn test_currency_decimal_places() {
        assert_eq!(Currency::USD.decimal_places(), 2);
        assert_eq!(Currency::EUR.decimal_places(), 2);
        assert_eq!(Currency::JPY.decimal_places(), 0);
        assert_eq!(Currency::NOK.decimal_places(), 2);
    }

    #[test]
    fn test_currency_spot_lag() {
        assert_eq!(Currency::USD.spot_lag(), 2);
        assert_eq!(Currency::EUR.spot_lag(), 2);
        assert_eq!(Currency::GBP.spot_lag(), 0);
        assert_eq!(Currency::CAD.spot_lag(), 1);
    }

    #[test]
    fn test_quote_priority_ordering() {
        // EUR leads everything, JPY trails everything
        for currency in Currency::ALL {
            if currency != Currency::EUR {
                assert!(Currency::EUR.quote_priority() < currency.quote_priority());
            }
            if currency != Currency::JPY {
                assert!(currency.quote_priority() < Currency::JPY.quote_priority());
            }
        }
    }

    #[test]
    fn test_all_is_priority_ordered_and_unique() {
        for pair in Currency::ALL.windows(2) {
            assert!(pair[0].quote_priority() < pair[1].quote_priority());
        }
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::EUR);
        assert_eq!("NZD".parse::<Currency>().unwrap(), Currency::NZD);
        assert_eq!("SEK".parse::<Currency>().unwrap(), Currency::SEK);
    }

    #[test]
    fn test_currency_from_str_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!("Eur".parse::<Currency>().unwrap(), Currency::EUR);
        assert_eq!("gbP".parse::<Currency>().unwrap(), Currency::GBP);
    }

    #[test]
    fn test_currency_from_str_unknown() {
        let result = "XYZ".parse::<Currency>();
        match result {
            Err(CurrencyError::UnknownCurrency(code)) => assert_eq!(code, "XYZ"),
            _ => panic!("Expected UnknownCurrency error"),
        }
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(format!("{}", Currency::USD), "USD");
        assert_eq!(format!("{}", Currency::CHF), "CHF");
    }

    #[test]
    fn test_currency_roundtrip() {
        for currency in Currency::ALL {
            let parsed: Currency = currency.code().parse().unwrap();
            assert_eq!(currency, parsed);
        }
    }

    #[test]
    fn test_currency_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Currency::USD);
        set.insert(Currency::EUR);
        set.insert(Currency::USD); // Duplicate
        assert_eq!(set.len(), 2);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_currency_serde_roundtrip() {
            let currency = Currency::USD;
            let json = serde_json::to_string(&currency).unwrap();
            assert_eq!(json, "\"USD\"");

            let parsed: Currency = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, currency);
        }

        #[test]
        fn test_all_currencies_serde_roundtrip() {
            for currency in Currency::ALL {
                let json = serde_json::to_string(&currency).unwrap();
                let parsed: Currency = serde_json::from_str(&json).unwrap();
                assert_eq!(parsed, currency);
            }
        }
    }
}
