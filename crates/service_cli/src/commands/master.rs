//! Master command: inspect the built-in convention master.
//!
//! Lists the live documents with their bitemporal coordinates, or the
//! full version history of a single convention.

use clap::Args;
use serde_json::json;

use infra_master::conventions::Convention;
use infra_master::master::{BeanMaster, Document, SearchRequest};
use pricer_core::types::Currency;
use std::str::FromStr;

use crate::commands::OutputFormat;
use crate::error::{CliError, Result};
use crate::market;

/// Arguments of the master command.
#[derive(Debug, Args)]
pub struct MasterArgs {
    /// Currency whose conventions to list
    #[arg(short, long, default_value = "USD")]
    pub currency: String,

    /// Name pattern, case-insensitive with `*` wildcards
    #[arg(short, long)]
    pub name: Option<String>,

    /// Amend the deposit convention, then show the full version history
    /// instead of the live documents
    #[arg(long)]
    pub history: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Run the master command.
pub fn run(args: &MasterArgs) -> Result<()> {
    let currency = Currency::from_str(&args.currency)
        .map_err(|_| CliError::InvalidArgument(format!("unknown currency '{}'", args.currency)))?;
    let master = market::standard_conventions(currency)?;

    let documents = if args.history {
        amend_deposit(&master, currency)?;
        history(&master, args.name.as_deref())?
    } else {
        let mut request = SearchRequest::all();
        if let Some(pattern) = &args.name {
            request = request.with_name(pattern.clone());
        }
        master.search(&request)
    };

    if documents.is_empty() {
        return Err(CliError::InvalidArgument(
            "no conventions match the search".into(),
        ));
    }
    render(&documents, args.format);
    Ok(())
}

/// Walks the deposit convention through an update and a correction so
/// the history output shows both bitemporal axes moving.
fn amend_deposit(master: &BeanMaster<Convention>, currency: Currency) -> Result<()> {
    use infra_master::conventions::ConventionKind;

    let name = format!("{} Deposit", currency.code());
    let live = master.search(&SearchRequest::all().with_name(name.clone()));
    let Some(doc) = live.first() else {
        return Err(CliError::InvalidArgument(format!(
            "no deposit convention registered for {currency}"
        )));
    };

    // Update: move to same-day settlement.
    let mut amended = doc.value.clone();
    if let ConventionKind::Deposit(deposit) = &mut amended.kind {
        deposit.settlement_days = 0;
    }
    let updated = master.update(&doc.unique_id, amended)?;

    // Correction: the amendment should have said one day, not zero.
    let mut corrected = updated.value.clone();
    if let ConventionKind::Deposit(deposit) = &mut corrected.kind {
        deposit.settlement_days = 1;
    }
    master.correct(&updated.unique_id, corrected)?;
    Ok(())
}

fn history(
    master: &BeanMaster<Convention>,
    name: Option<&str>,
) -> Result<Vec<Document<Convention>>> {
    use infra_master::master::HistoryRequest;
    let live = {
        let mut request = SearchRequest::all();
        if let Some(pattern) = name {
            request = request.with_name(pattern.to_string());
        }
        master.search(&request)
    };
    let mut documents = Vec::new();
    for doc in live {
        let object_id = doc.unique_id.object_id();
        documents.extend(master.history(&object_id, HistoryRequest::full())?);
    }
    Ok(documents)
}

fn render(documents: &[Document<Convention>], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let docs: Vec<_> = documents
                .iter()
                .map(|d| {
                    json!({
                        "unique_id": d.unique_id.to_string(),
                        "name": d.value.name,
                        "kind": d.value.kind.kind_name(),
                        "version_from": d.version_from.to_rfc3339(),
                        "latest": d.is_latest(),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "documents": docs })).unwrap_or_default()
            );
        }
        OutputFormat::Table => {
            println!(
                "{:<28} {:<16} {:<32} {:>6}",
                "name", "kind", "version_from", "latest"
            );
            for d in documents {
                println!(
                    "{:<28} {:<16} {:<32} {:>6}",
                    d.value.name,
                    d.value.kind.kind_name(),
                    d.version_from.to_rfc3339(),
                    d.is_latest()
                );
            }
        }
    }
}
