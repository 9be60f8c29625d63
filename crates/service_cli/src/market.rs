//! Market data assembly for the CLI commands.
//!
//! Builds a [`BlackForexSmileProvider`] from the configured flat rates
//! and smile quotes, seeds the built-in convention master, and loads
//! quotes from CSV files with `scheme,value,quote` rows.

use std::str::FromStr;
use std::sync::Arc;

use tracing::info;

use infra_master::conventions::{
    Convention, ConventionKind, DepositConvention, FixedSwapLegConvention, IborSwapLegConvention,
};
use infra_master::id::{ExternalId, ExternalIdBundle};
use infra_master::master::BeanMaster;
use pricer_core::market_data::{FxMatrix, SmileDeltaParameters, SmileDeltaTermStructure};
use pricer_core::types::{BusinessDayConvention, Currency, CurrencyPair, DayCountConvention, Tenor};
use pricer_curves::{BootstrapInstrument, MulticurveBuilder};
use pricer_fx::BlackForexSmileProvider;

use crate::config::AppConfig;
use crate::error::{CliError, Result};

/// Parse a `"EUR/USD"` style pair string.
pub fn parse_pair(pair: &str) -> Result<CurrencyPair> {
    let (base, counter) = pair.split_once('/').ok_or_else(|| {
        CliError::InvalidArgument(format!("pair '{pair}' is not of the form BASE/COUNTER"))
    })?;
    let base = Currency::from_str(base.trim())
        .map_err(|_| CliError::InvalidArgument(format!("unknown currency '{base}'")))?;
    let counter = Currency::from_str(counter.trim())
        .map_err(|_| CliError::InvalidArgument(format!("unknown currency '{counter}'")))?;
    CurrencyPair::new(base, counter)
        .map_err(|e| CliError::InvalidArgument(format!("invalid pair '{pair}': {e}")))
}

fn deposit_strip(rate: f64, pillars: &[f64]) -> Vec<BootstrapInstrument<f64>> {
    pillars
        .iter()
        .map(|&maturity| BootstrapInstrument::Deposit {
            start: 0.0,
            maturity,
            rate,
            accrual: maturity,
        })
        .collect()
}

/// Build the pricing provider described by the configuration.
pub fn build_provider(config: &AppConfig) -> Result<BlackForexSmileProvider<f64>> {
    let pair = parse_pair(&config.market.pair)?;

    let mut fx = FxMatrix::new();
    fx.add_currency(pair.base(), pair.counter(), config.market.spot)
        .map_err(pricer_curves::ProviderError::from)?;

    let multicurve = MulticurveBuilder::with_defaults()
        .discount_instruments(
            pair.counter(),
            deposit_strip(config.market.domestic_rate, &config.market.pillar_times),
        )
        .discount_instruments(
            pair.base(),
            deposit_strip(config.market.foreign_rate, &config.market.pillar_times),
        )
        .fx_matrix(fx)
        .build()?;

    let smiles = config
        .smile
        .expiries
        .iter()
        .map(|&t| {
            SmileDeltaParameters::from_market_quotes(
                t,
                config.smile.atm_volatility,
                &[config.smile.delta],
                &[config.smile.risk_reversal],
                &[config.smile.butterfly],
            )
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(pricer_fx::PricingError::from)?;
    let smile =
        SmileDeltaTermStructure::new(smiles).map_err(pricer_fx::PricingError::from)?;

    info!(
        pair = %config.market.pair,
        spot = config.market.spot,
        "market data provider built"
    );
    Ok(BlackForexSmileProvider::new(
        Arc::new(multicurve),
        smile,
        pair,
    ))
}

/// External id under which a built-in convention is registered.
pub fn convention_id(name: &str) -> Result<ExternalId> {
    ExternalId::new("CONVENTION", name)
        .map_err(|e| CliError::Config(format!("bad convention id '{name}': {e}")))
}

/// The built-in convention master for a currency.
///
/// Registers a money-market deposit, an annual fixed swap leg, and a
/// three-month ibor leg, named `"<CCY> Deposit"`, `"<CCY> Fixed Leg"`
/// and `"<CCY> 3M Ibor Leg"`.
pub fn standard_conventions(currency: Currency) -> Result<BeanMaster<Convention>> {
    let master = BeanMaster::new("conventions");
    let code = currency.code();
    let calendar_id = format!("{code}-BANK");
    let entries = vec![
        (
            format!("{code} Deposit"),
            ConventionKind::Deposit(DepositConvention {
                currency,
                day_count: DayCountConvention::ActualActual360,
                business_day_convention: BusinessDayConvention::ModifiedFollowing,
                settlement_days: 2,
                calendar_id: calendar_id.clone(),
            }),
        ),
        (
            format!("{code} Fixed Leg"),
            ConventionKind::FixedSwapLeg(FixedSwapLegConvention {
                currency,
                day_count: DayCountConvention::Thirty360,
                business_day_convention: BusinessDayConvention::ModifiedFollowing,
                payment_period: Tenor::months(12),
                settlement_days: 2,
                end_of_month: false,
                calendar_id: calendar_id.clone(),
            }),
        ),
        (
            format!("{code} 3M Ibor Leg"),
            ConventionKind::IborSwapLeg(IborSwapLegConvention {
                currency,
                day_count: DayCountConvention::ActualActual360,
                business_day_convention: BusinessDayConvention::ModifiedFollowing,
                payment_period: Tenor::months(3),
                index_tenor: Tenor::months(3),
                settlement_days: 2,
                end_of_month: false,
                calendar_id,
            }),
        ),
    ];
    for (name, kind) in entries {
        let id = convention_id(&name)?;
        master.add(Convention::new(name, ExternalIdBundle::single(id), kind))?;
    }
    Ok(master)
}

/// One row of a quotes CSV file.
#[derive(Debug, serde::Deserialize)]
struct QuoteRow {
    scheme: String,
    value: String,
    quote: f64,
}

/// Load a `scheme,value,quote` CSV into id-value pairs, in file order.
pub fn load_quote_rows(path: &str) -> Result<Vec<(ExternalId, f64)>> {
    if !std::path::Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: QuoteRow = record?;
        let id = ExternalId::new(row.scheme.as_str(), row.value.as_str()).map_err(|e| {
            CliError::InvalidArgument(format!(
                "bad external id '{}~{}': {e}",
                row.scheme, row.value
            ))
        })?;
        rows.push((id, row.quote));
    }
    info!(path, rows = rows.len(), "quotes loaded");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_parsing_accepts_the_slash_form() {
        let pair = parse_pair("EUR/USD").unwrap();
        assert_eq!(pair.base(), Currency::EUR);
        assert_eq!(pair.counter(), Currency::USD);
        assert!(parse_pair("EURUSD").is_err());
        assert!(parse_pair("EUR/XXX").is_err());
    }

    #[test]
    fn standard_conventions_register_three_entries() {
        use infra_master::master::SearchRequest;
        let master = standard_conventions(Currency::USD).unwrap();
        let all = master.search(&SearchRequest::all());
        assert_eq!(all.len(), 3);
        let deposits = master.search(&SearchRequest::all().with_name("USD Deposit"));
        assert_eq!(deposits.len(), 1);
    }

    #[test]
    fn default_config_builds_a_provider() {
        use approx::assert_relative_eq;
        let provider = build_provider(&AppConfig::default()).unwrap();
        let spot = provider.spot().unwrap();
        assert_relative_eq!(spot, 1.40, max_relative = 1e-12);
        let df = provider.discount_factor_domestic(1.0).unwrap();
        assert!(df > 0.9 && df < 1.0);
    }
}
