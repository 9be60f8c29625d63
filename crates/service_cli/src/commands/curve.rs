//! Curve command: bootstrap a discount curve from a quotes CSV.
//!
//! Quote values name their instrument and tenor, e.g. `USD-DEP-3M` for
//! a three-month deposit and `USD-SWAP-2Y` for a two-year swap. The
//! conventions come from the built-in master
//! ([`market::standard_conventions`]).

use clap::Args;
use serde_json::json;
use std::str::FromStr;
use tracing::info;

use infra_master::id::ExternalId;
use pricer_core::market_data::YieldCurve;
use pricer_core::types::{Currency, Date, DayCountConvention, Tenor};
use pricer_curves::nodes::{CashNode, SwapNode};
use pricer_curves::{CurveNode, NodeConverter, QuoteBundle, SequentialBootstrapper};

use crate::commands::OutputFormat;
use crate::error::{CliError, Result};
use crate::market;

const CURVE_DAY_COUNT: DayCountConvention = DayCountConvention::ActualActual365;

/// Arguments of the curve command.
#[derive(Debug, Args)]
pub struct CurveArgs {
    /// Quotes CSV with scheme,value,quote rows
    #[arg(short, long)]
    pub quotes: String,

    /// Curve currency
    #[arg(short, long, default_value = "USD")]
    pub currency: String,

    /// Valuation date, YYYY-MM-DD
    #[arg(short, long)]
    pub valuation: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Run the curve command.
pub fn run(args: &CurveArgs) -> Result<()> {
    let currency = Currency::from_str(&args.currency)
        .map_err(|_| CliError::InvalidArgument(format!("unknown currency '{}'", args.currency)))?;
    let valuation = Date::parse(&args.valuation).map_err(|e| {
        CliError::InvalidArgument(format!("bad valuation date '{}': {e}", args.valuation))
    })?;

    let rows = market::load_quote_rows(&args.quotes)?;
    let nodes = layout_nodes(currency, &rows)?;
    info!(currency = %currency.code(), nodes = nodes.len(), "bootstrapping curve");

    let mut quotes = QuoteBundle::new();
    for (id, value) in rows {
        quotes.insert(id, value);
    }

    let master = market::standard_conventions(currency)?;
    let converter = NodeConverter::new(&master, &quotes);
    let definitions = converter.convert_all(&nodes, valuation)?;

    let mut instruments = definitions
        .iter()
        .map(|d| d.to_bootstrap::<f64>(valuation, CURVE_DAY_COUNT))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    instruments.sort_by(|a, b| {
        a.maturity()
            .partial_cmp(&b.maturity())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let result = SequentialBootstrapper::with_defaults().bootstrap(&instruments)?;

    match args.format {
        OutputFormat::Json => {
            let pillars: Vec<_> = result
                .pillars
                .iter()
                .zip(&result.discount_factors)
                .map(|(&t, &df)| {
                    json!({
                        "time": t,
                        "discount_factor": df,
                        "zero_rate": -df.ln() / t,
                    })
                })
                .collect();
            let doc = json!({
                "currency": currency.code(),
                "valuation": args.valuation,
                "pillars": pillars,
            });
            println!("{}", serde_json::to_string_pretty(&doc).unwrap_or_default());
        }
        OutputFormat::Table => {
            println!("{:>10} {:>16} {:>12}", "time", "discount_factor", "zero_rate");
            for (&t, &df) in result.pillars.iter().zip(&result.discount_factors) {
                println!("{t:>10.4} {df:>16.8} {:>12.6}", -df.ln() / t);
            }
        }
    }

    // Sanity reprice before declaring success
    for instrument in &instruments {
        let df = result.curve.discount_factor(instrument.maturity())?;
        let residual = instrument.residual(df, &result.curve)?;
        if residual.abs() > 1e-6 {
            return Err(CliError::InvalidArgument(format!(
                "curve failed to reprice the instrument at {}: residual {residual}",
                instrument.maturity()
            )));
        }
    }
    info!(pillars = result.pillars.len(), "curve built");
    Ok(())
}

/// Derive the node layout from the quote identifiers.
fn layout_nodes(currency: Currency, rows: &[(ExternalId, f64)]) -> Result<Vec<CurveNode>> {
    let code = currency.code();
    let deposit = market::convention_id(&format!("{code} Deposit"))?;
    let fixed_leg = market::convention_id(&format!("{code} Fixed Leg"))?;
    let ibor_leg = market::convention_id(&format!("{code} 3M Ibor Leg"))?;

    let mut nodes = Vec::with_capacity(rows.len());
    for (id, _) in rows {
        let mut parts = id.value().splitn(3, '-');
        let (ccy, kind, tenor) = match (parts.next(), parts.next(), parts.next()) {
            (Some(c), Some(k), Some(t)) => (c, k, t),
            _ => {
                return Err(CliError::InvalidArgument(format!(
                    "quote id '{id}' is not of the form CCY-KIND-TENOR"
                )))
            }
        };
        if ccy != code {
            continue;
        }
        let tenor = Tenor::from_str(tenor).map_err(|e| {
            CliError::InvalidArgument(format!("bad tenor in quote id '{id}': {e}"))
        })?;
        let node = match kind {
            "DEP" => CurveNode::Cash(CashNode {
                start: Tenor::days(0),
                maturity: tenor,
                convention: deposit.clone(),
                quote: id.clone(),
            }),
            "SWAP" => CurveNode::Swap(SwapNode {
                start: Tenor::days(0),
                maturity: tenor,
                fixed_leg: fixed_leg.clone(),
                ibor_leg: ibor_leg.clone(),
                quote: id.clone(),
            }),
            other => {
                return Err(CliError::InvalidArgument(format!(
                    "unknown instrument kind '{other}' in quote id '{id}'"
                )))
            }
        };
        nodes.push(node);
    }
    if nodes.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "no {code} quotes found in the file"
        )));
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> ExternalId {
        ExternalId::new("TICKER", value).unwrap()
    }

    #[test]
    fn layout_reads_deposits_and_swaps() {
        let rows = vec![
            (id("USD-DEP-3M"), 0.043),
            (id("USD-SWAP-2Y"), 0.042),
            (id("EUR-DEP-3M"), 0.021), // other currency: skipped
        ];
        let nodes = layout_nodes(Currency::USD, &rows).unwrap();
        assert_eq!(nodes.len(), 2);
        assert!(matches!(nodes[0], CurveNode::Cash(_)));
        assert!(matches!(nodes[1], CurveNode::Swap(_)));
    }

    #[test]
    fn malformed_quote_ids_are_rejected() {
        let rows = vec![(id("USD-FUT-3M"), 0.043)];
        assert!(layout_nodes(Currency::USD, &rows).is_err());
        let rows = vec![(id("USDDEP3M"), 0.043)];
        assert!(layout_nodes(Currency::USD, &rows).is_err());
    }
}
