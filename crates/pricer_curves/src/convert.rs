//! Node-to-definition conversion.
//!
//! The [`NodeConverter`] resolves a [`CurveNode`]'s convention through a
//! [`ConventionSource`], its quote through a [`QuoteBundle`], and lays
//! out the instrument's dates against a valuation date: spot lag,
//! business-day adjustment, schedule generation, and IMM roll
//! resolution all happen here. The output is a dated
//! [`RatesDefinition`] from `pricer_models`, ready to reduce to a
//! bootstrap residual.

use std::collections::HashMap;

use infra_master::calendar::Calendar;
use infra_master::conventions::{Convention, ConventionKind};
use infra_master::error::MasterError;
use infra_master::id::ExternalId;
use infra_master::sources::ConventionSource;
use num_traits::Float;
use pricer_core::types::time::{BusinessDayConvention, Date, DayCountConvention};
use pricer_core::types::Tenor;
use pricer_models::instruments::rates::{
    BillDefinition, BondFixedDefinition, BondQuote, BootstrapInstrument, CashDepositDefinition,
    FraDefinition, RateFutureDefinition, SwapFixedIborDefinition, SwapFixedLeg, SwapIborLeg,
};
use pricer_models::instruments::InstrumentError;
use pricer_models::schedules::ScheduleBuilder;

use crate::error::ConvertError;
use crate::nodes::{
    BillNode, BondNode, BondQuoteKind, CashNode, CurveNode, FraNode, RateFutureNode,
    RollDateSwapNode, SwapNode,
};
use crate::quotes::QuoteBundle;
use crate::roll_dates::nth_imm_date;

/// A dated instrument definition produced from a curve node.
#[derive(Debug, Clone, PartialEq)]
pub enum RatesDefinition {
    /// Cash deposit.
    Cash(CashDepositDefinition),
    /// Forward rate agreement.
    Fra(FraDefinition),
    /// Fixed-vs-ibor swap.
    Swap(SwapFixedIborDefinition),
    /// Margined rate future.
    Future(RateFutureDefinition),
    /// Discount bill.
    Bill(BillDefinition),
    /// Fixed-coupon bond.
    Bond(BondFixedDefinition),
}

impl RatesDefinition {
    /// The pillar maturity date of the definition.
    pub fn maturity_date(&self) -> Date {
        match self {
            RatesDefinition::Cash(d) => d.end,
            RatesDefinition::Fra(d) => d.accrual_end,
            RatesDefinition::Swap(d) => d.maturity_date(),
            RatesDefinition::Future(d) => d.accrual_end,
            RatesDefinition::Bill(d) => d.maturity,
            RatesDefinition::Bond(d) => {
                *d.payment_dates.last().unwrap_or(&d.settlement)
            }
        }
    }

    /// Reduces the definition to its bootstrap residual.
    pub fn to_bootstrap<T: Float>(
        &self,
        valuation: Date,
        curve_day_count: DayCountConvention,
    ) -> Result<BootstrapInstrument<T>, InstrumentError> {
        match self {
            RatesDefinition::Cash(d) => d.to_bootstrap(valuation, curve_day_count),
            RatesDefinition::Fra(d) => d.to_bootstrap(valuation, curve_day_count),
            RatesDefinition::Swap(d) => d.to_bootstrap(valuation, curve_day_count),
            RatesDefinition::Future(d) => d.to_bootstrap(valuation, curve_day_count),
            RatesDefinition::Bill(d) => d.to_bootstrap(valuation, curve_day_count),
            RatesDefinition::Bond(d) => d.to_bootstrap(valuation, curve_day_count),
        }
    }
}

/// Converts curve nodes into dated instrument definitions.
///
/// Calendars are registered by id; a node whose convention names an
/// unregistered calendar falls back to a weekends-only calendar under
/// that id.
pub struct NodeConverter<'a, S: ConventionSource> {
    conventions: &'a S,
    quotes: &'a QuoteBundle,
    calendars: HashMap<String, Calendar>,
}

impl<'a, S: ConventionSource> NodeConverter<'a, S> {
    /// Create a converter over a convention source and a quote bundle.
    pub fn new(conventions: &'a S, quotes: &'a QuoteBundle) -> Self {
        Self {
            conventions,
            quotes,
            calendars: HashMap::new(),
        }
    }

    /// Register a holiday calendar under its own id.
    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.calendars.insert(calendar.id().to_string(), calendar);
        self
    }

    /// Convert one node against a valuation date.
    pub fn convert(
        &self,
        node: &CurveNode,
        valuation: Date,
    ) -> Result<RatesDefinition, ConvertError> {
        match node {
            CurveNode::Cash(n) => self.convert_cash(n, valuation),
            CurveNode::Fra(n) => self.convert_fra(n, valuation),
            CurveNode::Swap(n) => self.convert_swap(n, valuation),
            CurveNode::RateFuture(n) => self.convert_future(n, valuation),
            CurveNode::Bill(n) => self.convert_bill(n, valuation),
            CurveNode::Bond(n) => self.convert_bond(n, valuation),
            CurveNode::RollDateSwap(n) => self.convert_roll_date_swap(n, valuation),
        }
    }

    /// Convert a slice of nodes, preserving order.
    pub fn convert_all(
        &self,
        nodes: &[CurveNode],
        valuation: Date,
    ) -> Result<Vec<RatesDefinition>, ConvertError> {
        nodes
            .iter()
            .map(|node| {
                let definition = self.convert(node, valuation)?;
                tracing::debug!(
                    kind = node.kind_name(),
                    quote = %node.quote_id(),
                    maturity = %definition.maturity_date(),
                    "node converted"
                );
                Ok(definition)
            })
            .collect()
    }

    fn convention(&self, id: &ExternalId) -> Result<Convention, ConvertError> {
        self.conventions
            .convention_by_external_id(id)
            .map_err(|e| match e {
                MasterError::NotFound(_) => ConvertError::MissingConvention { id: id.clone() },
                other => ConvertError::Master(other),
            })
    }

    fn calendar(&self, id: &str) -> Calendar {
        self.calendars
            .get(id)
            .cloned()
            .unwrap_or_else(|| Calendar::weekends_only(id))
    }

    fn convert_cash(&self, node: &CashNode, valuation: Date) -> Result<RatesDefinition, ConvertError> {
        let convention = self.convention(&node.convention)?;
        let dep = match convention.kind {
            ConventionKind::Deposit(dep) => dep,
            other => {
                return Err(ConvertError::ConventionMismatch {
                    id: node.convention.clone(),
                    expected: "Deposit",
                    found: other.kind_name(),
                })
            }
        };
        let rate = self.quotes.require(&node.quote)?;

        let calendar = self.calendar(&dep.calendar_id);
        let spot = calendar.spot_date(valuation, dep.settlement_days);
        let start = calendar.adjust(spot.add_tenor(node.start), dep.business_day_convention);
        let end = calendar.adjust(start.add_tenor(node.maturity), dep.business_day_convention);

        Ok(RatesDefinition::Cash(CashDepositDefinition::new(
            dep.currency,
            start,
            end,
            rate,
            dep.day_count,
        )?))
    }

    fn convert_fra(&self, node: &FraNode, valuation: Date) -> Result<RatesDefinition, ConvertError> {
        let convention = self.convention(&node.convention)?;
        let fra = match convention.kind {
            ConventionKind::Fra(fra) => fra,
            other => {
                return Err(ConvertError::ConventionMismatch {
                    id: node.convention.clone(),
                    expected: "Fra",
                    found: other.kind_name(),
                })
            }
        };
        let rate = self.quotes.require(&node.quote)?;

        let calendar = self.calendar(&fra.calendar_id);
        let spot = calendar.spot_date(valuation, fra.settlement_days);
        let accrual_start =
            calendar.adjust(spot.add_tenor(node.start), fra.business_day_convention);
        let accrual_end = calendar.adjust(
            accrual_start.add_tenor(fra.index_tenor),
            fra.business_day_convention,
        );
        let fixing = calendar.add_business_days(accrual_start, -(fra.settlement_days as i32));

        Ok(RatesDefinition::Fra(FraDefinition::new(
            fra.currency,
            fixing,
            accrual_start,
            accrual_end,
            rate,
            fra.day_count,
        )?))
    }

    fn convert_swap(&self, node: &SwapNode, valuation: Date) -> Result<RatesDefinition, ConvertError> {
        let fixed = self.convention(&node.fixed_leg)?;
        let fixed = match fixed.kind {
            ConventionKind::FixedSwapLeg(leg) => leg,
            other => {
                return Err(ConvertError::ConventionMismatch {
                    id: node.fixed_leg.clone(),
                    expected: "FixedSwapLeg",
                    found: other.kind_name(),
                })
            }
        };
        let ibor = self.convention(&node.ibor_leg)?;
        let ibor = match ibor.kind {
            ConventionKind::IborSwapLeg(leg) => leg,
            other => {
                return Err(ConvertError::ConventionMismatch {
                    id: node.ibor_leg.clone(),
                    expected: "IborSwapLeg",
                    found: other.kind_name(),
                })
            }
        };
        let rate = self.quotes.require(&node.quote)?;

        let calendar = self.calendar(&fixed.calendar_id);
        let spot = calendar.spot_date(valuation, fixed.settlement_days);
        let effective = calendar.adjust(spot.add_tenor(node.start), fixed.business_day_convention);
        // Unadjusted; the schedule roll adjusts each payment
        let end = effective.add_tenor(node.maturity);

        self.build_swap(effective, end, rate, &fixed, &ibor)
    }

    fn convert_roll_date_swap(
        &self,
        node: &RollDateSwapNode,
        valuation: Date,
    ) -> Result<RatesDefinition, ConvertError> {
        if node.end_number <= node.start_number {
            return Err(ConvertError::Instrument(InstrumentError::InvalidParameter {
                message: format!(
                    "roll-date swap must end after it starts ({} vs {})",
                    node.start_number, node.end_number
                ),
            }));
        }
        let fixed = self.convention(&node.fixed_leg)?;
        let fixed = match fixed.kind {
            ConventionKind::FixedSwapLeg(leg) => leg,
            other => {
                return Err(ConvertError::ConventionMismatch {
                    id: node.fixed_leg.clone(),
                    expected: "FixedSwapLeg",
                    found: other.kind_name(),
                })
            }
        };
        let ibor = self.convention(&node.ibor_leg)?;
        let ibor = match ibor.kind {
            ConventionKind::IborSwapLeg(leg) => leg,
            other => {
                return Err(ConvertError::ConventionMismatch {
                    id: node.ibor_leg.clone(),
                    expected: "IborSwapLeg",
                    found: other.kind_name(),
                })
            }
        };
        let rate = self.quotes.require(&node.quote)?;

        let effective = nth_imm_date(valuation, node.start_number)?;
        let end = nth_imm_date(valuation, node.end_number)?;

        self.build_swap(effective, end, rate, &fixed, &ibor)
    }

    fn build_swap(
        &self,
        effective: Date,
        end: Date,
        rate: f64,
        fixed: &infra_master::conventions::FixedSwapLegConvention,
        ibor: &infra_master::conventions::IborSwapLegConvention,
    ) -> Result<RatesDefinition, ConvertError> {
        let fixed_calendar = self.calendar(&fixed.calendar_id);
        let (fixed_dates, fixed_accruals) = self.adjusted_schedule(
            &fixed_calendar,
            fixed.business_day_convention,
            effective,
            end,
            fixed.payment_period,
            fixed.day_count,
            fixed.end_of_month,
        )?;

        let ibor_calendar = self.calendar(&ibor.calendar_id);
        let (ibor_dates, ibor_accruals) = self.adjusted_schedule(
            &ibor_calendar,
            ibor.business_day_convention,
            effective,
            end,
            ibor.payment_period,
            ibor.day_count,
            ibor.end_of_month,
        )?;

        Ok(RatesDefinition::Swap(SwapFixedIborDefinition::new(
            fixed.currency,
            effective,
            SwapFixedLeg {
                payment_dates: fixed_dates,
                accrual_factors: fixed_accruals,
                rate,
            },
            SwapIborLeg {
                payment_dates: ibor_dates,
                accrual_factors: ibor_accruals,
                index_tenor: ibor.index_tenor,
            },
            true,
        )?))
    }

    fn convert_future(
        &self,
        node: &RateFutureNode,
        valuation: Date,
    ) -> Result<RatesDefinition, ConvertError> {
        let convention = self.convention(&node.convention)?;
        let fut = match convention.kind {
            ConventionKind::RateFuture(fut) => fut,
            other => {
                return Err(ConvertError::ConventionMismatch {
                    id: node.convention.clone(),
                    expected: "RateFuture",
                    found: other.kind_name(),
                })
            }
        };
        let price = self.quotes.require(&node.quote)?;

        let calendar = self.calendar(&fut.calendar_id);
        let expiry = nth_imm_date(valuation.add_tenor(node.start), node.future_number)?;
        let accrual_end = calendar.adjust(
            expiry.add_tenor(fut.index_tenor),
            BusinessDayConvention::Following,
        );

        Ok(RatesDefinition::Future(RateFutureDefinition::new(
            fut.currency,
            expiry,
            accrual_end,
            price,
            fut.day_count,
        )?))
    }

    fn convert_bill(&self, node: &BillNode, valuation: Date) -> Result<RatesDefinition, ConvertError> {
        let convention = self.convention(&node.convention)?;
        let bill = match convention.kind {
            ConventionKind::Bill(bill) => bill,
            other => {
                return Err(ConvertError::ConventionMismatch {
                    id: node.convention.clone(),
                    expected: "Bill",
                    found: other.kind_name(),
                })
            }
        };
        let yield_quote = self.quotes.require(&node.quote)?;

        let calendar = self.calendar(&bill.calendar_id);
        let settlement = calendar.spot_date(valuation, bill.settlement_days);
        let maturity = calendar.adjust(
            settlement.add_tenor(node.maturity),
            bill.business_day_convention,
        );

        Ok(RatesDefinition::Bill(BillDefinition::new(
            bill.currency,
            settlement,
            maturity,
            yield_quote,
            bill.day_count,
        )?))
    }

    fn convert_bond(&self, node: &BondNode, valuation: Date) -> Result<RatesDefinition, ConvertError> {
        let convention = self.convention(&node.convention)?;
        let bond = match convention.kind {
            ConventionKind::Bond(bond) => bond,
            other => {
                return Err(ConvertError::ConventionMismatch {
                    id: node.convention.clone(),
                    expected: "Bond",
                    found: other.kind_name(),
                })
            }
        };
        let quote_value = self.quotes.require(&node.quote)?;
        let quote = match node.quote_kind {
            BondQuoteKind::CleanPrice => BondQuote::CleanPrice(quote_value),
            BondQuoteKind::Yield => BondQuote::Yield(quote_value),
        };

        let calendar = self.calendar(&bond.calendar_id);
        let settlement = calendar.spot_date(valuation, bond.settlement_days);
        let end = settlement.add_tenor(node.maturity);

        let (payment_dates, accrual_factors) = self.adjusted_schedule(
            &calendar,
            bond.business_day_convention,
            settlement,
            end,
            bond.coupon_period,
            bond.day_count,
            bond.end_of_month,
        )?;

        Ok(RatesDefinition::Bond(BondFixedDefinition::new(
            bond.currency,
            settlement,
            payment_dates,
            accrual_factors,
            node.coupon,
            quote,
        )?))
    }

    /// Generate a periodic schedule from `start` to `end`, adjust each
    /// payment onto a business day, and recompute the accrual factors
    /// over the adjusted period boundaries.
    #[allow(clippy::too_many_arguments)]
    fn adjusted_schedule(
        &self,
        calendar: &Calendar,
        business_day_convention: BusinessDayConvention,
        start: Date,
        end: Date,
        period: Tenor,
        day_count: DayCountConvention,
        end_of_month: bool,
    ) -> Result<(Vec<Date>, Vec<f64>), ConvertError> {
        let schedule = ScheduleBuilder::new()
            .start(start)
            .end(end)
            .period(period)
            .day_count(day_count)
            .end_of_month(end_of_month)
            .build()?;

        let payment_dates: Vec<Date> = schedule
            .payment_dates()
            .into_iter()
            .map(|d| calendar.adjust(d, business_day_convention))
            .collect();

        let mut accrual_factors = Vec::with_capacity(payment_dates.len());
        let mut previous = start;
        for date in &payment_dates {
            accrual_factors.push(day_count.year_fraction_dates(previous, *date));
            previous = *date;
        }

        Ok((payment_dates, accrual_factors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra_master::conventions::{
        BillConvention, BondConvention, DepositConvention, FixedSwapLegConvention, FraConvention,
        IborSwapLegConvention, RateFutureConvention,
    };
    use infra_master::id::ExternalIdBundle;
    use infra_master::master::BeanMaster;
    use pricer_core::types::Currency;

    fn conv_id(value: &str) -> ExternalId {
        ExternalId::new("CONVENTION", value).unwrap()
    }

    fn quote_id(value: &str) -> ExternalId {
        ExternalId::new("TICKER", value).unwrap()
    }

    fn master_with(conventions: Vec<(&str, ConventionKind)>) -> BeanMaster<Convention> {
        let master = BeanMaster::new("conventions");
        for (name, kind) in conventions {
            master
                .add(Convention::new(
                    name,
                    ExternalIdBundle::single(conv_id(name)),
                    kind,
                ))
                .unwrap();
        }
        master
    }

    fn usd_deposit_kind() -> ConventionKind {
        ConventionKind::Deposit(DepositConvention {
            currency: Currency::USD,
            day_count: DayCountConvention::ActualActual360,
            business_day_convention: BusinessDayConvention::ModifiedFollowing,
            settlement_days: 2,
            calendar_id: "USNY".to_string(),
        })
    }

    // Monday.
    fn valuation() -> Date {
        Date::from_ymd(2025, 6, 16).unwrap()
    }

    // ========================================
    // Cash Node Tests
    // ========================================

    #[test]
    fn cash_node_applies_spot_lag_and_adjustment() {
        let master = master_with(vec![("USD Deposit", usd_deposit_kind())]);
        let mut quotes = QuoteBundle::new();
        quotes.insert(quote_id("USD-DEP-3M"), 0.045);

        let converter = NodeConverter::new(&master, &quotes);
        let node = CurveNode::Cash(CashNode {
            start: Tenor::days(0),
            maturity: Tenor::months(3),
            convention: conv_id("USD Deposit"),
            quote: quote_id("USD-DEP-3M"),
        });

        let definition = converter.convert(&node, valuation()).unwrap();
        let RatesDefinition::Cash(dep) = definition else {
            panic!("expected a cash definition");
        };

        // Monday + 2 business days = Wednesday 18 June
        assert_eq!(dep.start, Date::from_ymd(2025, 6, 18).unwrap());
        // 18 September 2025 is a Thursday, no adjustment needed
        assert_eq!(dep.end, Date::from_ymd(2025, 9, 18).unwrap());
        assert!((dep.rate - 0.045).abs() < 1e-12);
    }

    #[test]
    fn missing_quote_is_reported_with_its_id() {
        let master = master_with(vec![("USD Deposit", usd_deposit_kind())]);
        let quotes = QuoteBundle::new();

        let converter = NodeConverter::new(&master, &quotes);
        let node = CurveNode::Cash(CashNode {
            start: Tenor::days(0),
            maturity: Tenor::months(3),
            convention: conv_id("USD Deposit"),
            quote: quote_id("USD-DEP-3M"),
        });

        let err = converter.convert(&node, valuation()).unwrap_err();
        assert!(matches!(err, ConvertError::MissingQuote { .. }));
    }

    #[test]
    fn missing_convention_is_reported_with_its_id() {
        let master = master_with(vec![]);
        let mut quotes = QuoteBundle::new();
        quotes.insert(quote_id("USD-DEP-3M"), 0.045);

        let converter = NodeConverter::new(&master, &quotes);
        let node = CurveNode::Cash(CashNode {
            start: Tenor::days(0),
            maturity: Tenor::months(3),
            convention: conv_id("USD Deposit"),
            quote: quote_id("USD-DEP-3M"),
        });

        let err = converter.convert(&node, valuation()).unwrap_err();
        assert!(matches!(err, ConvertError::MissingConvention { .. }));
    }

    #[test]
    fn wrong_convention_kind_is_a_mismatch() {
        let master = master_with(vec![(
            "USD Bill",
            ConventionKind::Bill(BillConvention {
                currency: Currency::USD,
                day_count: DayCountConvention::ActualActual360,
                business_day_convention: BusinessDayConvention::Following,
                settlement_days: 1,
                calendar_id: "USNY".to_string(),
            }),
        )]);
        let mut quotes = QuoteBundle::new();
        quotes.insert(quote_id("USD-DEP-3M"), 0.045);

        let converter = NodeConverter::new(&master, &quotes);
        let node = CurveNode::Cash(CashNode {
            start: Tenor::days(0),
            maturity: Tenor::months(3),
            convention: conv_id("USD Bill"),
            quote: quote_id("USD-DEP-3M"),
        });

        let err = converter.convert(&node, valuation()).unwrap_err();
        match err {
            ConvertError::ConventionMismatch {
                expected, found, ..
            } => {
                assert_eq!(expected, "Deposit");
                assert_eq!(found, "Bill");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn registered_holiday_calendar_moves_the_spot_date() {
        let master = master_with(vec![("USD Deposit", usd_deposit_kind())]);
        let mut quotes = QuoteBundle::new();
        quotes.insert(quote_id("USD-DEP-3M"), 0.045);

        // Wednesday 18 June 2025 is a holiday; spot rolls to Thursday
        let calendar = Calendar::new("USNY", vec![Date::from_ymd(2025, 6, 18).unwrap()]);
        let converter = NodeConverter::new(&master, &quotes).with_calendar(calendar);

        let node = CurveNode::Cash(CashNode {
            start: Tenor::days(0),
            maturity: Tenor::months(3),
            convention: conv_id("USD Deposit"),
            quote: quote_id("USD-DEP-3M"),
        });

        let definition = converter.convert(&node, valuation()).unwrap();
        let RatesDefinition::Cash(dep) = definition else {
            panic!("expected a cash definition");
        };
        assert_eq!(dep.start, Date::from_ymd(2025, 6, 19).unwrap());
    }

    // ========================================
    // FRA Node Tests
    // ========================================

    #[test]
    fn fra_node_covers_one_index_period() {
        let master = master_with(vec![(
            "EUR 3M FRA",
            ConventionKind::Fra(FraConvention {
                currency: Currency::EUR,
                day_count: DayCountConvention::ActualActual360,
                business_day_convention: BusinessDayConvention::ModifiedFollowing,
                index_tenor: Tenor::months(3),
                settlement_days: 2,
                calendar_id: "EUTA".to_string(),
            }),
        )]);
        let mut quotes = QuoteBundle::new();
        quotes.insert(quote_id("EUR-FRA-3X6"), 0.032);

        let converter = NodeConverter::new(&master, &quotes);
        let node = CurveNode::Fra(FraNode {
            start: Tenor::months(3),
            convention: conv_id("EUR 3M FRA"),
            quote: quote_id("EUR-FRA-3X6"),
        });

        let definition = converter.convert(&node, valuation()).unwrap();
        let RatesDefinition::Fra(fra) = definition else {
            panic!("expected a FRA definition");
        };

        // Spot Wednesday 18 June + 3M = Thursday 18 September
        assert_eq!(fra.accrual_start, Date::from_ymd(2025, 9, 18).unwrap());
        // + 3M index period = Thursday 18 December
        assert_eq!(fra.accrual_end, Date::from_ymd(2025, 12, 18).unwrap());
        // Fixing two business days before the accrual start
        assert_eq!(fra.fixing_date, Date::from_ymd(2025, 9, 16).unwrap());
    }

    // ========================================
    // Swap Node Tests
    // ========================================

    fn swap_leg_kinds() -> Vec<(&'static str, ConventionKind)> {
        vec![
            (
                "USD Fixed Leg",
                ConventionKind::FixedSwapLeg(FixedSwapLegConvention {
                    currency: Currency::USD,
                    day_count: DayCountConvention::Thirty360,
                    business_day_convention: BusinessDayConvention::ModifiedFollowing,
                    payment_period: Tenor::months(12),
                    settlement_days: 2,
                    end_of_month: false,
                    calendar_id: "USNY".to_string(),
                }),
            ),
            (
                "USD 3M Ibor Leg",
                ConventionKind::IborSwapLeg(IborSwapLegConvention {
                    currency: Currency::USD,
                    day_count: DayCountConvention::ActualActual360,
                    business_day_convention: BusinessDayConvention::ModifiedFollowing,
                    payment_period: Tenor::months(3),
                    index_tenor: Tenor::months(3),
                    settlement_days: 2,
                    end_of_month: false,
                    calendar_id: "USNY".to_string(),
                }),
            ),
        ]
    }

    #[test]
    fn swap_node_builds_both_legs() {
        let master = master_with(swap_leg_kinds());
        let mut quotes = QuoteBundle::new();
        quotes.insert(quote_id("USD-SWAP-2Y"), 0.035);

        let converter = NodeConverter::new(&master, &quotes);
        let node = CurveNode::Swap(SwapNode {
            start: Tenor::days(0),
            maturity: Tenor::years(2),
            fixed_leg: conv_id("USD Fixed Leg"),
            ibor_leg: conv_id("USD 3M Ibor Leg"),
            quote: quote_id("USD-SWAP-2Y"),
        });

        let definition = converter.convert(&node, valuation()).unwrap();
        let RatesDefinition::Swap(swap) = definition else {
            panic!("expected a swap definition");
        };

        assert_eq!(swap.effective, Date::from_ymd(2025, 6, 18).unwrap());
        // Two annual fixed payments, eight quarterly ibor payments
        assert_eq!(swap.fixed_leg.payment_dates.len(), 2);
        assert_eq!(swap.ibor_leg.payment_dates.len(), 8);
        assert!((swap.fixed_leg.rate - 0.035).abs() < 1e-12);
        assert_eq!(swap.ibor_leg.index_tenor, Tenor::months(3));

        // Accruals cover the adjusted periods without gaps
        let total: f64 = swap.fixed_leg.accrual_factors.iter().sum();
        assert!((total - 2.0).abs() < 0.02);
    }

    #[test]
    fn roll_date_swap_starts_and_ends_on_imm_dates() {
        let master = master_with(swap_leg_kinds());
        let mut quotes = QuoteBundle::new();
        quotes.insert(quote_id("USD-IMM-SWAP"), 0.034);

        let converter = NodeConverter::new(&master, &quotes);
        let node = CurveNode::RollDateSwap(RollDateSwapNode {
            start_number: 1,
            end_number: 5,
            fixed_leg: conv_id("USD Fixed Leg"),
            ibor_leg: conv_id("USD 3M Ibor Leg"),
            quote: quote_id("USD-IMM-SWAP"),
        });

        let definition = converter.convert(&node, valuation()).unwrap();
        let RatesDefinition::Swap(swap) = definition else {
            panic!("expected a swap definition");
        };

        // First IMM on or after 16 June 2025 is Wednesday 18 June;
        // the fifth is Wednesday 17 June 2026.
        assert_eq!(swap.effective, Date::from_ymd(2025, 6, 18).unwrap());
        assert_eq!(
            swap.maturity_date(),
            Date::from_ymd(2026, 6, 17).unwrap()
        );
    }

    #[test]
    fn roll_date_swap_rejects_backwards_numbers() {
        let master = master_with(swap_leg_kinds());
        let mut quotes = QuoteBundle::new();
        quotes.insert(quote_id("USD-IMM-SWAP"), 0.034);

        let converter = NodeConverter::new(&master, &quotes);
        let node = CurveNode::RollDateSwap(RollDateSwapNode {
            start_number: 3,
            end_number: 3,
            fixed_leg: conv_id("USD Fixed Leg"),
            ibor_leg: conv_id("USD 3M Ibor Leg"),
            quote: quote_id("USD-IMM-SWAP"),
        });

        assert!(converter.convert(&node, valuation()).is_err());
    }

    // ========================================
    // Rate Future Node Tests
    // ========================================

    #[test]
    fn future_node_resolves_the_imm_expiry() {
        let master = master_with(vec![(
            "USD 3M Future",
            ConventionKind::RateFuture(RateFutureConvention {
                currency: Currency::USD,
                day_count: DayCountConvention::ActualActual360,
                index_tenor: Tenor::months(3),
                calendar_id: "USNY".to_string(),
            }),
        )]);
        let mut quotes = QuoteBundle::new();
        quotes.insert(quote_id("USD-FUT-2"), 0.9550);

        let converter = NodeConverter::new(&master, &quotes);
        let node = CurveNode::RateFuture(RateFutureNode {
            start: Tenor::days(0),
            future_number: 2,
            convention: conv_id("USD 3M Future"),
            quote: quote_id("USD-FUT-2"),
        });

        let definition = converter.convert(&node, valuation()).unwrap();
        let RatesDefinition::Future(fut) = definition else {
            panic!("expected a future definition");
        };

        // Second IMM from 16 June 2025 is Wednesday 17 September
        assert_eq!(fut.expiry, Date::from_ymd(2025, 9, 17).unwrap());
        assert_eq!(fut.accrual_end, Date::from_ymd(2025, 12, 17).unwrap());
        assert!((fut.implied_rate() - 0.045).abs() < 1e-12);
    }

    // ========================================
    // Bill and Bond Node Tests
    // ========================================

    #[test]
    fn bill_node_settles_on_spot() {
        let master = master_with(vec![(
            "USD Bill",
            ConventionKind::Bill(BillConvention {
                currency: Currency::USD,
                day_count: DayCountConvention::ActualActual360,
                business_day_convention: BusinessDayConvention::ModifiedFollowing,
                settlement_days: 1,
                calendar_id: "USNY".to_string(),
            }),
        )]);
        let mut quotes = QuoteBundle::new();
        quotes.insert(quote_id("USD-BILL-6M"), 0.05);

        let converter = NodeConverter::new(&master, &quotes);
        let node = CurveNode::Bill(BillNode {
            maturity: Tenor::months(6),
            convention: conv_id("USD Bill"),
            quote: quote_id("USD-BILL-6M"),
        });

        let definition = converter.convert(&node, valuation()).unwrap();
        let RatesDefinition::Bill(bill) = definition else {
            panic!("expected a bill definition");
        };

        assert_eq!(bill.settlement, Date::from_ymd(2025, 6, 17).unwrap());
        assert_eq!(bill.maturity, Date::from_ymd(2025, 12, 17).unwrap());
    }

    #[test]
    fn bond_node_generates_the_coupon_schedule() {
        let master = master_with(vec![(
            "GBP Gilt",
            ConventionKind::Bond(BondConvention {
                currency: Currency::GBP,
                day_count: DayCountConvention::ActualActual365,
                business_day_convention: BusinessDayConvention::ModifiedFollowing,
                coupon_period: Tenor::months(12),
                settlement_days: 1,
                end_of_month: false,
                calendar_id: "GBLO".to_string(),
            }),
        )]);
        let mut quotes = QuoteBundle::new();
        quotes.insert(quote_id("GBP-GILT-3Y"), 0.9875);

        let converter = NodeConverter::new(&master, &quotes);
        let node = CurveNode::Bond(BondNode {
            maturity: Tenor::years(3),
            coupon: 0.04,
            quote_kind: BondQuoteKind::CleanPrice,
            convention: conv_id("GBP Gilt"),
            quote: quote_id("GBP-GILT-3Y"),
        });

        let definition = converter.convert(&node, valuation()).unwrap();
        let RatesDefinition::Bond(bond) = definition else {
            panic!("expected a bond definition");
        };

        assert_eq!(bond.payment_dates.len(), 3);
        assert_eq!(bond.quote, BondQuote::CleanPrice(0.9875));
        assert!((bond.coupon - 0.04).abs() < 1e-12);
    }

    // ========================================
    // Batch Conversion Tests
    // ========================================

    #[test]
    fn convert_all_preserves_node_order() {
        let master = master_with(vec![("USD Deposit", usd_deposit_kind())]);
        let mut quotes = QuoteBundle::new();
        quotes.insert(quote_id("USD-DEP-3M"), 0.045);
        quotes.insert(quote_id("USD-DEP-6M"), 0.047);

        let converter = NodeConverter::new(&master, &quotes);
        let nodes = vec![
            CurveNode::Cash(CashNode {
                start: Tenor::days(0),
                maturity: Tenor::months(6),
                convention: conv_id("USD Deposit"),
                quote: quote_id("USD-DEP-6M"),
            }),
            CurveNode::Cash(CashNode {
                start: Tenor::days(0),
                maturity: Tenor::months(3),
                convention: conv_id("USD Deposit"),
                quote: quote_id("USD-DEP-3M"),
            }),
        ];

        let definitions = converter.convert_all(&nodes, valuation()).unwrap();
        assert_eq!(definitions.len(), 2);
        assert!(definitions[0].maturity_date() > definitions[1].maturity_date());
    }

    #[test]
    fn converted_definitions_reduce_to_bootstrap_instruments() {
        let master = master_with(vec![("USD Deposit", usd_deposit_kind())]);
        let mut quotes = QuoteBundle::new();
        quotes.insert(quote_id("USD-DEP-3M"), 0.045);

        let converter = NodeConverter::new(&master, &quotes);
        let node = CurveNode::Cash(CashNode {
            start: Tenor::days(0),
            maturity: Tenor::months(3),
            convention: conv_id("USD Deposit"),
            quote: quote_id("USD-DEP-3M"),
        });

        let definition = converter.convert(&node, valuation()).unwrap();
        let instrument = definition
            .to_bootstrap::<f64>(valuation(), DayCountConvention::ActualActual365)
            .unwrap();
        assert!(instrument.maturity() > 0.0);
    }
}
