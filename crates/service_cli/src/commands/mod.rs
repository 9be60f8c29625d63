//! CLI command implementations.
//!
//! Each submodule implements one subcommand and owns its clap argument
//! struct.

pub mod check;
pub mod curve;
pub mod master;
pub mod price;

use clap::ValueEnum;

/// Output formats shared by the commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// One JSON document on stdout.
    Json,
}
