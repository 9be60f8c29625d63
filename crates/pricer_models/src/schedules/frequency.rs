//! Payment frequency enumeration.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::Tenor;

/// Payment frequency for scheduled instruments.
///
/// All frequencies are whole numbers of months, so schedule generation
/// can roll dates by calendar months without drift.
///
/// # Examples
///
/// ```
/// use pricer_models::schedules::Frequency;
///
/// let freq = Frequency::Quarterly;
/// assert_eq!(freq.periods_per_year(), 4);
/// assert_eq!(freq.months(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frequency {
    /// Annual payments (once per year).
    Annual,
    /// Semi-annual payments (twice per year).
    SemiAnnual,
    /// Quarterly payments (four times per year).
    Quarterly,
    /// Monthly payments (twelve times per year).
    Monthly,
}

impl Frequency {
    /// Number of payment periods per year.
    #[inline]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Number of months between payment dates.
    #[inline]
    pub fn months(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// The frequency expressed as a market tenor.
    ///
    /// ```
    /// use pricer_models::schedules::Frequency;
    /// use pricer_core::types::Tenor;
    ///
    /// assert_eq!(Frequency::SemiAnnual.tenor(), Tenor::months(6));
    /// ```
    #[inline]
    pub fn tenor(&self) -> Tenor {
        Tenor::months(self.months() as i32)
    }

    /// Standard display name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Frequency {
    type Err = String;

    /// Parses a frequency from a name or tenor form (case-insensitive):
    /// `"annual"`/`"1y"`, `"semi-annual"`/`"6m"`, `"quarterly"`/`"3m"`,
    /// `"monthly"`/`"1m"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "annual" | "1y" | "yearly" | "12m" => Ok(Frequency::Annual),
            "semiannual" | "6m" => Ok(Frequency::SemiAnnual),
            "quarterly" | "3m" => Ok(Frequency::Quarterly),
            "monthly" | "1m" => Ok(Frequency::Monthly),
            _ => Err(format!("Unknown frequency: {}", s)),
        }
    }
}
