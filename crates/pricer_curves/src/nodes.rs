//! Curve node configuration.
//!
//! A node is the static description of one market instrument on a curve:
//! its tenor layout, the external id of the convention it trades under,
//! and the external id of its market quote. Nodes carry no dates and no
//! numbers; the converter resolves both against a valuation date, a
//! convention source, and a quote bundle.

use infra_master::id::ExternalId;
use pricer_core::types::Tenor;

/// How a bond node's quote is to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BondQuoteKind {
    /// The quote is a clean price per unit face.
    CleanPrice,
    /// The quote is an annually compounded yield.
    Yield,
}

/// Cash deposit node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CashNode {
    /// Offset from spot to the deposit start, e.g. 0D.
    pub start: Tenor,
    /// Deposit length from the start date, e.g. 3M.
    pub maturity: Tenor,
    /// External id of the deposit convention.
    pub convention: ExternalId,
    /// External id of the rate quote.
    pub quote: ExternalId,
}

/// Forward rate agreement node.
///
/// The accrual period is the convention's index tenor starting at
/// spot + `start`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FraNode {
    /// Offset from spot to the accrual start, e.g. 3M for a 3x6 FRA.
    pub start: Tenor,
    /// External id of the FRA convention.
    pub convention: ExternalId,
    /// External id of the forward rate quote.
    pub quote: ExternalId,
}

/// Fixed-vs-ibor swap node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapNode {
    /// Offset from spot to the effective date, usually 0D.
    pub start: Tenor,
    /// Swap length from the effective date, e.g. 5Y.
    pub maturity: Tenor,
    /// External id of the fixed leg convention.
    pub fixed_leg: ExternalId,
    /// External id of the ibor leg convention.
    pub ibor_leg: ExternalId,
    /// External id of the par rate quote.
    pub quote: ExternalId,
}

/// Margined rate future node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateFutureNode {
    /// Offset from the valuation date to the first eligible expiry.
    pub start: Tenor,
    /// Which quarterly IMM expiry to take, 1-based.
    pub future_number: u32,
    /// External id of the rate future convention.
    pub convention: ExternalId,
    /// External id of the price quote.
    pub quote: ExternalId,
}

/// Discount bill node, quoted as a simple money-market yield.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BillNode {
    /// Bill length from settlement, e.g. 6M.
    pub maturity: Tenor,
    /// External id of the bill convention.
    pub convention: ExternalId,
    /// External id of the yield quote.
    pub quote: ExternalId,
}

/// Fixed-coupon bond node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BondNode {
    /// Bond length from settlement, e.g. 10Y.
    pub maturity: Tenor,
    /// Annual coupon rate of the bond.
    pub coupon: f64,
    /// Whether the quote is a clean price or a yield.
    pub quote_kind: BondQuoteKind,
    /// External id of the bond convention.
    pub convention: ExternalId,
    /// External id of the quote.
    pub quote: ExternalId,
}

/// Swap node whose effective and maturity dates lie on quarterly IMM
/// roll dates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollDateSwapNode {
    /// 1-based number of the IMM date the swap starts on.
    pub start_number: u32,
    /// 1-based number of the IMM date the swap ends on; must exceed
    /// `start_number`.
    pub end_number: u32,
    /// External id of the fixed leg convention.
    pub fixed_leg: ExternalId,
    /// External id of the ibor leg convention.
    pub ibor_leg: ExternalId,
    /// External id of the par rate quote.
    pub quote: ExternalId,
}

/// One instrument on a curve, ready for conversion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveNode {
    /// Cash deposit.
    Cash(CashNode),
    /// Forward rate agreement.
    Fra(FraNode),
    /// Fixed-vs-ibor swap.
    Swap(SwapNode),
    /// Margined rate future on an IMM expiry.
    RateFuture(RateFutureNode),
    /// Discount bill.
    Bill(BillNode),
    /// Fixed-coupon bond.
    Bond(BondNode),
    /// Swap rolling on IMM dates.
    RollDateSwap(RollDateSwapNode),
}

impl CurveNode {
    /// The external id of the node's market quote.
    pub fn quote_id(&self) -> &ExternalId {
        match self {
            CurveNode::Cash(n) => &n.quote,
            CurveNode::Fra(n) => &n.quote,
            CurveNode::Swap(n) => &n.quote,
            CurveNode::RateFuture(n) => &n.quote,
            CurveNode::Bill(n) => &n.quote,
            CurveNode::Bond(n) => &n.quote,
            CurveNode::RollDateSwap(n) => &n.quote,
        }
    }

    /// Short name of the node kind, for logging and display.
    pub fn kind_name(&self) -> &'static str {
        match self {
            CurveNode::Cash(_) => "Cash",
            CurveNode::Fra(_) => "Fra",
            CurveNode::Swap(_) => "Swap",
            CurveNode::RateFuture(_) => "RateFuture",
            CurveNode::Bill(_) => "Bill",
            CurveNode::Bond(_) => "Bond",
            CurveNode::RollDateSwap(_) => "RollDateSwap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> ExternalId {
        ExternalId::new("TICKER", value).unwrap()
    }

    #[test]
    fn quote_id_reaches_through_the_variants() {
        let node = CurveNode::Cash(CashNode {
            start: Tenor::days(0),
            maturity: Tenor::months(3),
            convention: id("USD-DEPOSIT"),
            quote: id("USD-DEPOSIT-3M"),
        });
        assert_eq!(node.quote_id(), &id("USD-DEPOSIT-3M"));
        assert_eq!(node.kind_name(), "Cash");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn node_serde_round_trip() {
        let node = CurveNode::Swap(SwapNode {
            start: Tenor::days(0),
            maturity: Tenor::years(5),
            fixed_leg: id("USD-FIXED-LEG"),
            ibor_leg: id("USD-IBOR-LEG"),
            quote: id("USD-SWAP-5Y"),
        });
        let json = serde_json::to_string(&node).unwrap();
        let back: CurveNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
