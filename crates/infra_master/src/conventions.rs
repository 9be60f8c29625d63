//! Market convention reference data.
//!
//! A [`Convention`] bundles a display name, external ids for lookup, and
//! one [`ConventionKind`] payload describing how a family of instruments
//! trades: day count, business-day adjustment, spot lag, payment
//! frequency, index tenor, and the calendar to adjust against. Node
//! converters resolve conventions through a
//! [`ConventionSource`](crate::sources::ConventionSource) when turning
//! curve nodes into instrument definitions.

use crate::id::ExternalIdBundle;
use crate::master::MasterRecord;
use pricer_core::types::{BusinessDayConvention, Currency, DayCountConvention, Tenor};

/// A named market convention stored in the convention master.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Convention {
    /// Display name, e.g. `"USD Deposit"`.
    pub name: String,
    /// External ids under which the convention can be found.
    pub external_ids: ExternalIdBundle,
    /// The convention payload.
    pub kind: ConventionKind,
}

impl Convention {
    /// Create a convention.
    pub fn new(
        name: impl Into<String>,
        external_ids: ExternalIdBundle,
        kind: ConventionKind,
    ) -> Self {
        Self {
            name: name.into(),
            external_ids,
            kind,
        }
    }
}

impl MasterRecord for Convention {
    fn name(&self) -> &str {
        &self.name
    }

    fn external_ids(&self) -> &ExternalIdBundle {
        &self.external_ids
    }
}

/// The payload of a convention, one variant per instrument family.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConventionKind {
    /// Cash deposit.
    Deposit(DepositConvention),
    /// Term ibor-like index.
    IborIndex(IborIndexConvention),
    /// Overnight index.
    OvernightIndex(OvernightIndexConvention),
    /// Fixed leg of a vanilla swap.
    FixedSwapLeg(FixedSwapLegConvention),
    /// Floating ibor leg of a vanilla swap.
    IborSwapLeg(IborSwapLegConvention),
    /// Floating overnight leg of a swap.
    OvernightSwapLeg(OvernightSwapLegConvention),
    /// Forward rate agreement.
    Fra(FraConvention),
    /// Margined interest rate future.
    RateFuture(RateFutureConvention),
    /// Discount bill.
    Bill(BillConvention),
    /// Fixed-coupon bond.
    Bond(BondConvention),
    /// FX spot settlement.
    FxSpot(FxSpotConvention),
}

impl ConventionKind {
    /// Short name of the variant, for logging and display.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ConventionKind::Deposit(_) => "Deposit",
            ConventionKind::IborIndex(_) => "IborIndex",
            ConventionKind::OvernightIndex(_) => "OvernightIndex",
            ConventionKind::FixedSwapLeg(_) => "FixedSwapLeg",
            ConventionKind::IborSwapLeg(_) => "IborSwapLeg",
            ConventionKind::OvernightSwapLeg(_) => "OvernightSwapLeg",
            ConventionKind::Fra(_) => "Fra",
            ConventionKind::RateFuture(_) => "RateFuture",
            ConventionKind::Bill(_) => "Bill",
            ConventionKind::Bond(_) => "Bond",
            ConventionKind::FxSpot(_) => "FxSpot",
        }
    }
}

/// Cash deposit convention.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositConvention {
    /// Deposit currency.
    pub currency: Currency,
    /// Accrual day count.
    pub day_count: DayCountConvention,
    /// Date adjustment rule.
    pub business_day_convention: BusinessDayConvention,
    /// Spot lag in business days.
    pub settlement_days: u32,
    /// Calendar to adjust against.
    pub calendar_id: String,
}

/// Term ibor-like index convention.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IborIndexConvention {
    /// Index currency.
    pub currency: Currency,
    /// Accrual day count.
    pub day_count: DayCountConvention,
    /// Date adjustment rule.
    pub business_day_convention: BusinessDayConvention,
    /// Fixing-to-value spot lag in business days.
    pub settlement_days: u32,
    /// Underlying deposit tenor, e.g. 3M.
    pub index_tenor: Tenor,
    /// Roll on month ends.
    pub end_of_month: bool,
    /// Calendar to adjust against.
    pub calendar_id: String,
}

/// Overnight index convention.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OvernightIndexConvention {
    /// Index currency.
    pub currency: Currency,
    /// Accrual day count.
    pub day_count: DayCountConvention,
    /// Rate publication lag in days.
    pub publication_lag: u32,
    /// Calendar to adjust against.
    pub calendar_id: String,
}

/// Fixed swap leg convention.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedSwapLegConvention {
    /// Leg currency.
    pub currency: Currency,
    /// Accrual day count.
    pub day_count: DayCountConvention,
    /// Date adjustment rule.
    pub business_day_convention: BusinessDayConvention,
    /// Period between payments, e.g. 6M.
    pub payment_period: Tenor,
    /// Spot lag in business days.
    pub settlement_days: u32,
    /// Roll on month ends.
    pub end_of_month: bool,
    /// Calendar to adjust against.
    pub calendar_id: String,
}

/// Floating ibor swap leg convention.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IborSwapLegConvention {
    /// Leg currency.
    pub currency: Currency,
    /// Accrual day count.
    pub day_count: DayCountConvention,
    /// Date adjustment rule.
    pub business_day_convention: BusinessDayConvention,
    /// Period between payments; typically the index tenor.
    pub payment_period: Tenor,
    /// Tenor of the referenced index.
    pub index_tenor: Tenor,
    /// Spot lag in business days.
    pub settlement_days: u32,
    /// Roll on month ends.
    pub end_of_month: bool,
    /// Calendar to adjust against.
    pub calendar_id: String,
}

/// Floating overnight swap leg convention.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OvernightSwapLegConvention {
    /// Leg currency.
    pub currency: Currency,
    /// Accrual day count.
    pub day_count: DayCountConvention,
    /// Date adjustment rule.
    pub business_day_convention: BusinessDayConvention,
    /// Period between payments, e.g. 12M.
    pub payment_period: Tenor,
    /// Spot lag in business days.
    pub settlement_days: u32,
    /// Calendar to adjust against.
    pub calendar_id: String,
}

/// Forward rate agreement convention.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FraConvention {
    /// Contract currency.
    pub currency: Currency,
    /// Accrual day count.
    pub day_count: DayCountConvention,
    /// Date adjustment rule.
    pub business_day_convention: BusinessDayConvention,
    /// Tenor of the underlying index, e.g. 3M.
    pub index_tenor: Tenor,
    /// Spot lag in business days.
    pub settlement_days: u32,
    /// Calendar to adjust against.
    pub calendar_id: String,
}

/// Margined interest rate future convention.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateFutureConvention {
    /// Contract currency.
    pub currency: Currency,
    /// Accrual day count.
    pub day_count: DayCountConvention,
    /// Tenor of the underlying index, e.g. 3M.
    pub index_tenor: Tenor,
    /// Calendar to adjust against.
    pub calendar_id: String,
}

/// Discount bill convention.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BillConvention {
    /// Bill currency.
    pub currency: Currency,
    /// Accrual day count.
    pub day_count: DayCountConvention,
    /// Date adjustment rule.
    pub business_day_convention: BusinessDayConvention,
    /// Spot lag in business days.
    pub settlement_days: u32,
    /// Calendar to adjust against.
    pub calendar_id: String,
}

/// Fixed-coupon bond convention.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BondConvention {
    /// Bond currency.
    pub currency: Currency,
    /// Accrual day count.
    pub day_count: DayCountConvention,
    /// Date adjustment rule.
    pub business_day_convention: BusinessDayConvention,
    /// Period between coupons, e.g. 6M.
    pub coupon_period: Tenor,
    /// Spot lag in business days.
    pub settlement_days: u32,
    /// Roll on month ends.
    pub end_of_month: bool,
    /// Calendar to adjust against.
    pub calendar_id: String,
}

/// FX spot settlement convention.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FxSpotConvention {
    /// Spot lag in business days.
    pub settlement_days: u32,
    /// Calendar to adjust against.
    pub calendar_id: String,
}
