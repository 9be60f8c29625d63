//! Check command: validate the configuration and smoke-test the market.
//!
//! Builds the full pricing stack from the resolved configuration and
//! prices an at-the-money vanilla so a broken setup fails fast.

use tracing::info;

use pricer_fx::vanilla_smile;
use pricer_models::instruments::fx::{Forex, ForexOptionVanilla};

use crate::config::AppConfig;
use crate::error::Result;
use crate::market;

/// Run the check command.
pub fn run(config: &AppConfig) -> Result<()> {
    config.validate()?;
    println!("configuration        ok");
    println!("  pair               {}", config.market.pair);
    println!("  spot               {}", config.market.spot);
    println!("  domestic rate      {}", config.market.domestic_rate);
    println!("  foreign rate       {}", config.market.foreign_rate);
    println!("  atm volatility     {}", config.smile.atm_volatility);
    println!("  log level          {}", config.log_level.as_filter_str());

    let provider = market::build_provider(config)?;
    let spot = provider.spot()?;
    println!("market data          ok");
    println!("  resolved spot      {spot:.6}");

    // Smoke price: one year ATM forward call on one unit of foreign.
    let expiry = 1.0;
    let strike = provider.forward_rate(expiry)?;
    let pair = *provider.pair();
    let forex = Forex::new(pair, expiry, 1.0, strike)?;
    let option = ForexOptionVanilla::new(forex, expiry, true, true)?;
    let pv = vanilla_smile::present_value(&option, &provider)?;
    info!(strike, pv = pv.amount(), "smoke price complete");
    println!("smoke price          ok");
    println!("  atm forward strike {strike:.6}");
    println!("  call pv            {} {:.6}", pv.currency(), pv.amount());
    Ok(())
}
