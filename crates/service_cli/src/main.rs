//! Tradewind CLI - command line operations for FX analytics.
//!
//! # Commands
//!
//! - `tradewind price --style vanilla --strike 1.45` - Price an FX option
//! - `tradewind curve --quotes <file> --valuation <date>` - Bootstrap a discount curve
//! - `tradewind master` - Inspect the built-in convention master
//! - `tradewind check` - Validate configuration and smoke-test the market
//!
//! Configuration is resolved as CLI flags over `TRADEWIND_*` environment
//! variables over the TOML file over built-in defaults.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod market;

pub use error::{CliError, Result};

use config::AppConfig;

/// Tradewind FX analytics CLI
#[derive(Parser)]
#[command(name = "tradewind")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "tradewind.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price an FX option under the configured market
    Price(commands::price::PriceArgs),

    /// Bootstrap a discount curve from a CSV quote file
    Curve(commands::curve::CurveArgs),

    /// Inspect the built-in convention master
    Master(commands::master::MasterArgs),

    /// Check configuration and smoke-test the pricing stack
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_file(&cli.config)?;
    config.apply_env()?;

    let filter = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price(args) => commands::price::run(&config, &args),
        Commands::Curve(args) => commands::curve::run(&args),
        Commands::Master(args) => commands::master::run(&args),
        Commands::Check => commands::check::run(&config),
    }
}
