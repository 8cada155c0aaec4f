// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `skusel`: apply option toggles to a catalog file and show what remains.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use sku_select::{
    CompatibilityMode, GroupStatus, OptionValue, RecordSelector, SelectorConfig, ValueKeying,
};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "skusel")]
#[command(author, version, about = "Show reachable options and the resolved variant of a catalog")]
struct Cli {
    /// Catalog file: {"groups": [...], "variants": [...]} as field-keyed records
    catalog: PathBuf,

    /// Option value to toggle, in order (repeatable). Integers are read as numbers.
    #[arg(short, long = "select", value_name = "VALUE")]
    select: Vec<String>,

    /// Selector configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the value keying (per-group, shared-value)
    #[arg(long)]
    keying: Option<ValueKeying>,

    /// Override the compatibility test (pairwise, joint)
    #[arg(long)]
    compatibility: Option<CompatibilityMode>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SelectorConfig::from_json(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SelectorConfig::default(),
    };
    if let Some(keying) = cli.keying {
        config.keying = keying;
    }
    if let Some(compatibility) = cli.compatibility {
        config.compatibility = compatibility;
    }

    let text = fs::read_to_string(&cli.catalog)
        .with_context(|| format!("reading catalog {}", cli.catalog.display()))?;
    let document: Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing catalog {}", cli.catalog.display()))?;
    let mut selector = RecordSelector::from_document(&document, &config)
        .with_context(|| format!("indexing catalog {}", cli.catalog.display()))?;

    for raw in &cli.select {
        let value = parse_value(raw);
        selector
            .toggle(&value)
            .with_context(|| format!("toggling {:?}", raw))?;
    }

    let statuses = selector.statuses();
    let record = selector.selected_record();

    if cli.json {
        let output = serde_json::json!({
            "groups": statuses,
            "variant": selector.resolve_variant(),
            "code": selector.selected_code().as_biguint().to_string(),
            "record": record,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_statuses(&statuses);
        match selector.resolve_variant() {
            Some(id) => println!("variant: {}", id),
            None => println!("variant: (none)"),
        }
    }

    Ok(())
}

/// Read an integer when the text is one, otherwise keep it as text.
fn parse_value(raw: &str) -> OptionValue {
    raw.parse::<i64>()
        .map(OptionValue::from)
        .unwrap_or_else(|_| OptionValue::from(raw))
}

fn print_statuses(statuses: &[GroupStatus]) {
    for group in statuses {
        let values: Vec<String> = group
            .values
            .iter()
            .map(|status| {
                if status.selected {
                    format!("[{}]", status.value)
                } else if status.disabled {
                    format!("({})", status.value)
                } else {
                    status.value.to_string()
                }
            })
            .collect();
        println!("{:<16} {}", group.name, values.join("  "));
    }
}
