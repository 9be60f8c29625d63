//! Price command: value a single FX option against the configured
//! market.

use clap::{Args, ValueEnum};
use serde_json::json;
use tracing::info;

use pricer_fx::{american, barrier, digital, ndo, vanilla_smile, vanna_volga};
use pricer_fx::{BlackForexSmileProvider, CallSpreadDigitalMethod, CurrencyAmount};
use pricer_models::instruments::fx::{
    Barrier, BarrierDirection, Forex, ForexNonDeliverableOption, ForexOptionDigital,
    ForexOptionSingleBarrier, ForexOptionVanilla, KnockType, PaymentCurrency,
};

use crate::commands::OutputFormat;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::market;

/// Pricing method to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// European vanilla, Black with the smile volatility.
    Vanilla,
    /// European vanilla, vanna-volga corrected.
    VannaVolga,
    /// Cash-or-nothing digital, exact formula.
    Digital,
    /// Single-barrier option.
    Barrier,
    /// American exercise, Bjerksund-Stensland.
    American,
    /// Non-deliverable (cash-settled) vanilla.
    Ndo,
}

/// Side of the spot a barrier sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// Barrier above the spot.
    Up,
    /// Barrier below the spot.
    Down,
}

/// Knock behaviour of a barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Knock {
    /// Option activates at the barrier.
    In,
    /// Option extinguishes at the barrier.
    Out,
}

/// Currency a digital pays in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Payment {
    /// Pay the domestic (counter) amount.
    #[default]
    Domestic,
    /// Pay the foreign (base) amount.
    Foreign,
}

/// Arguments of the price command.
#[derive(Debug, Args)]
pub struct PriceArgs {
    /// Pricing method
    #[arg(short, long, value_enum, default_value_t = Style::Vanilla)]
    pub style: Style,

    /// Strike, domestic per foreign
    #[arg(short = 'k', long)]
    pub strike: f64,

    /// Expiry in years
    #[arg(short, long, default_value_t = 1.0)]
    pub expiry: f64,

    /// Foreign notional
    #[arg(short, long, default_value_t = 1_000_000.0)]
    pub notional: f64,

    /// Price a put instead of a call
    #[arg(long)]
    pub put: bool,

    /// Price a short position
    #[arg(long = "short")]
    pub short_position: bool,

    /// Barrier level (barrier style only)
    #[arg(long)]
    pub barrier_level: Option<f64>,

    /// Barrier direction (barrier style only)
    #[arg(long, value_enum)]
    pub barrier_direction: Option<Direction>,

    /// Knock type (barrier style only)
    #[arg(long, value_enum)]
    pub knock: Option<Knock>,

    /// Flat rebate in domestic currency (barrier style only)
    #[arg(long, default_value_t = 0.0)]
    pub rebate: f64,

    /// Payment currency (digital style only)
    #[arg(long, value_enum, default_value_t = Payment::Domestic)]
    pub payment_currency: Payment,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

struct PriceReport {
    pv: CurrencyAmount<f64>,
    measures: Vec<(&'static str, f64)>,
}

/// Run the price command.
pub fn run(config: &AppConfig, args: &PriceArgs) -> Result<()> {
    info!(style = ?args.style, strike = args.strike, expiry = args.expiry, "pricing");
    let data = market::build_provider(config)?;
    let report = price(&data, args)?;
    render(&report, args.format);
    Ok(())
}

fn price(data: &BlackForexSmileProvider<f64>, args: &PriceArgs) -> Result<PriceReport> {
    let pair = *data.pair();
    let is_call = !args.put;
    let is_long = !args.short_position;
    let forex = Forex::new(pair, args.expiry, args.notional, args.strike)?;

    match args.style {
        Style::Vanilla => {
            let option = ForexOptionVanilla::new(forex, args.expiry, is_call, is_long)?;
            let pv = vanilla_smile::present_value(&option, data)?;
            let measures = vec![
                ("implied_vol", vanilla_smile::implied_volatility(&option, data)?),
                ("spot_delta", vanilla_smile::spot_delta_theoretical(&option, data)?),
                ("spot_gamma", vanilla_smile::spot_gamma_theoretical(&option, data)?),
                ("vega", vanilla_smile::vega(&option, data)?.amount()),
                ("theta", vanilla_smile::theta_theoretical(&option, data)?.amount()),
            ];
            Ok(PriceReport { pv, measures })
        }
        Style::VannaVolga => {
            let option = ForexOptionVanilla::new(forex, args.expiry, is_call, is_long)?;
            let pv = vanna_volga::present_value(&option, data)?;
            let smile_pv = vanilla_smile::present_value(&option, data)?;
            let measures = vec![("smile_interpolated_pv", smile_pv.amount())];
            Ok(PriceReport { pv, measures })
        }
        Style::Digital => {
            let payment = match args.payment_currency {
                Payment::Domestic => PaymentCurrency::Domestic,
                Payment::Foreign => PaymentCurrency::Foreign,
            };
            let option = ForexOptionDigital::new(forex, args.expiry, is_call, is_long, payment)?;
            let pv = digital::present_value(&option, data)?;
            let spread = CallSpreadDigitalMethod::default().present_value(&option, data)?;
            let measures = vec![
                ("call_spread_pv", spread.amount()),
                ("payoff_amount", option.payoff_amount()),
            ];
            Ok(PriceReport { pv, measures })
        }
        Style::Barrier => {
            let level = args.barrier_level.ok_or_else(|| {
                CliError::InvalidArgument("--barrier-level is required for barriers".into())
            })?;
            let direction = match args.barrier_direction {
                Some(Direction::Up) => BarrierDirection::Up,
                Some(Direction::Down) => BarrierDirection::Down,
                None => {
                    return Err(CliError::InvalidArgument(
                        "--barrier-direction is required for barriers".into(),
                    ))
                }
            };
            let knock = match args.knock {
                Some(Knock::In) => KnockType::In,
                Some(Knock::Out) => KnockType::Out,
                None => {
                    return Err(CliError::InvalidArgument(
                        "--knock is required for barriers".into(),
                    ))
                }
            };
            let vanilla = ForexOptionVanilla::new(forex, args.expiry, is_call, is_long)?;
            let barrier_def = Barrier::new(direction, knock, level)?;
            let option =
                ForexOptionSingleBarrier::with_rebate(vanilla.clone(), barrier_def, args.rebate)?;
            let pv = barrier::present_value(&option, data)?;
            let opposite = ForexOptionSingleBarrier::with_rebate(
                vanilla.clone(),
                barrier_def.opposite_knock(),
                args.rebate,
            )?;
            let measures = vec![
                ("opposite_knock_pv", barrier::present_value(&opposite, data)?.amount()),
                ("vanilla_pv", vanilla_smile::present_value(&vanilla, data)?.amount()),
            ];
            Ok(PriceReport { pv, measures })
        }
        Style::American => {
            let option = ForexOptionVanilla::new(forex, args.expiry, is_call, is_long)?;
            let pv = american::present_value(&option, data)?;
            let european = vanilla_smile::present_value(&option, data)?;
            let measures = vec![
                ("european_pv", european.amount()),
                ("early_exercise_premium", pv.amount() - european.amount()),
            ];
            Ok(PriceReport { pv, measures })
        }
        Style::Ndo => {
            let option = ForexNonDeliverableOption::new(forex, args.expiry, is_call, is_long)?;
            let pv = ndo::present_value(&option, data)?;
            let measures = vec![
                ("implied_vol", ndo::implied_volatility(&option, data)?),
                ("forward_delta", ndo::forward_delta_theoretical(&option, data)?),
            ];
            Ok(PriceReport { pv, measures })
        }
    }
}

fn render(report: &PriceReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let mut doc = json!({
                "present_value": report.pv.amount(),
                "currency": report.pv.currency().code(),
            });
            for (name, value) in &report.measures {
                doc[*name] = json!(value);
            }
            println!("{}", serde_json::to_string_pretty(&doc).unwrap_or_default());
        }
        OutputFormat::Table => {
            println!("{:<24} {:>18.4} {}", "present_value", report.pv.amount(), report.pv.currency().code());
            for (name, value) in &report.measures {
                println!("{name:<24} {value:>18.6}");
            }
        }
    }
}
