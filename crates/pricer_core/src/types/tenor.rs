//! Market tenor type for quoting instrument maturities.
//!
//! A tenor is the market shorthand for a period ("ON", "1W", "3M", "10Y")
//! attached to deposits, forwards, and swaps. This module provides:
//! - `Tenor`: amount plus unit, with date arithmetic via [`Date::add_tenor`](super::time::Date::add_tenor)
//! - `TenorUnit`: the calendar unit (days, weeks, months, years)
//! - Parsing of market strings, including the money market codes ON, TN, and SN
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::tenor::Tenor;
//!
//! let three_months: Tenor = "3M".parse().unwrap();
//! assert_eq!(three_months, Tenor::months(3));
//! assert_eq!(three_months.to_string(), "3M");
//!
//! // Money market codes normalise to day counts
//! let overnight: Tenor = "ON".parse().unwrap();
//! assert_eq!(overnight, Tenor::days(1));
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::TenorError;

/// Calendar unit of a market tenor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TenorUnit {
    /// Calendar days.
    Days,
    /// Calendar weeks (seven days).
    Weeks,
    /// Calendar months, with end-of-month clamping on date arithmetic.
    Months,
    /// Calendar years (twelve months).
    Years,
}

impl TenorUnit {
    /// Returns the single-letter market suffix for this unit.
    pub fn suffix(&self) -> char {
        match self {
            TenorUnit::Days => 'D',
            TenorUnit::Weeks => 'W',
            TenorUnit::Months => 'M',
            TenorUnit::Years => 'Y',
        }
    }
}

/// A market tenor: an amount of calendar units.
///
/// Tenors compare structurally, so `Tenor::months(12)` and `Tenor::years(1)`
/// are distinct values even though they step a date by the same period.
/// Use [`approx_years`](Self::approx_years) when an approximate ordering
/// across units is needed.
///
/// # Examples
///
/// ```
/// use pricer_core::types::tenor::Tenor;
///
/// let deposit = Tenor::months(6);
/// assert_eq!(deposit.to_string(), "6M");
/// assert!(deposit.approx_years() < Tenor::years(1).approx_years());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tenor {
    amount: i32,
    unit: TenorUnit,
}

impl Tenor {
    /// Overnight: one calendar day.
    pub const ON: Tenor = Tenor {
        amount: 1,
        unit: TenorUnit::Days,
    };

    /// Tomorrow/next: two calendar days.
    pub const TN: Tenor = Tenor {
        amount: 2,
        unit: TenorUnit::Days,
    };

    /// Spot/next: three calendar days.
    pub const SN: Tenor = Tenor {
        amount: 3,
        unit: TenorUnit::Days,
    };

    /// Creates a tenor of calendar days.
    pub const fn days(amount: i32) -> Self {
        Tenor {
            amount,
            unit: TenorUnit::Days,
        }
    }

    /// Creates a tenor of calendar weeks.
    pub const fn weeks(amount: i32) -> Self {
        Tenor {
            amount,
            unit: TenorUnit::Weeks,
        }
    }

    /// Creates a tenor of calendar months.
    pub const fn months(amount: i32) -> Self {
        Tenor {
            amount,
            unit: TenorUnit::Months,
        }
    }

    /// Creates a tenor of calendar years.
    pub const fn years(amount: i32) -> Self {
        Tenor {
            amount,
            unit: TenorUnit::Years,
        }
    }

    /// Returns the amount of units.
    pub fn amount(&self) -> i32 {
        self.amount
    }

    /// Returns the calendar unit.
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Returns true when the tenor steps a date by zero days.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Approximate length in years, for ordering tenors across units.
    ///
    /// Days and weeks are converted on a 365-day year, months on a
    /// twelve-month year. The result is approximate and must not be used
    /// as a year fraction in pricing.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::tenor::Tenor;
    ///
    /// assert!(Tenor::weeks(2).approx_years() < Tenor::months(1).approx_years());
    /// assert!((Tenor::months(12).approx_years() - 1.0).abs() < 1e-12);
    /// ```
    pub fn approx_years(&self) -> f64 {
        match self.unit {
            TenorUnit::Days => f64::from(self.amount) / 365.0,
            TenorUnit::Weeks => 7.0 * f64::from(self.amount) / 365.0,
            TenorUnit::Months => f64::from(self.amount) / 12.0,
            TenorUnit::Years => f64::from(self.amount),
        }
    }
}

impl fmt::Display for Tenor {
    /// Formats as the market string, e.g. "3M" or "10Y".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.suffix())
    }
}

impl FromStr for Tenor {
    type Err = TenorError;

    /// Parses a market tenor string (case-insensitive).
    ///
    /// Accepts:
    /// - Amount plus unit suffix: "7D", "2W", "3M", "10Y"
    /// - ISO-8601 period prefix: "P3M", "P10Y"
    /// - Money market codes: "ON" (1D), "TN" (2D), "SN" (3D)
    fn from_str(s: &str) -> Result<Self, TenorError> {
        let upper = s.trim().to_uppercase();
        match upper.as_str() {
            "ON" | "O/N" => return Ok(Tenor::ON),
            "TN" | "T/N" => return Ok(Tenor::TN),
            "SN" | "S/N" => return Ok(Tenor::SN),
            _ => {}
        }

        let body = upper.strip_prefix('P').unwrap_or(&upper);
        let (digits, suffix) = body.split_at(body.len().saturating_sub(1));
        let amount: i32 = digits
            .parse()
            .map_err(|_| TenorError::Parse(s.to_string()))?;
        if amount <= 0 {
            return Err(TenorError::NonPositive(s.to_string()));
        }

        let unit = match suffix {
            "D" => TenorUnit::Days,
            "W" => TenorUnit::Weeks,
            "M" => TenorUnit::Months,
            "Y" => TenorUnit::Years,
            _ => return Err(TenorError::Parse(s.to_string())),
        };
        Ok(Tenor { amount, unit })
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Tenor;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for Tenor {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for Tenor {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Tenor::from_str(&s).map_err(de::Error::custom)
        }
    }
}
