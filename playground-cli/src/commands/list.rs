//! `playground list [--json]`

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use playground_catalog::Catalog;

/// Arguments for `playground list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ExampleJson<'a> {
    name: &'a str,
    files: Vec<&'a str>,
}

#[derive(Tabled)]
struct ExampleRow {
    #[tabled(rename = "example")]
    name: String,
    #[tabled(rename = "files")]
    files: usize,
    #[tabled(rename = "entry")]
    entry: String,
}

impl ListArgs {
    pub fn run(self, catalog: &Catalog) -> Result<()> {
        if self.json {
            return print_json(catalog);
        }
        print_table(catalog);
        Ok(())
    }
}

fn print_json(catalog: &Catalog) -> Result<()> {
    let payload: Vec<ExampleJson<'_>> = catalog
        .registry()
        .iter()
        .map(|set| ExampleJson {
            name: set.name().as_str(),
            files: set.files().iter().map(|f| f.name.as_str()).collect(),
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize example list")?
    );
    Ok(())
}

fn print_table(catalog: &Catalog) {
    let registry = catalog.registry();
    if registry.is_empty() {
        println!("No examples in catalog.");
        return;
    }

    let default = catalog.default_set().map(|s| s.name().as_str());
    let rows: Vec<ExampleRow> = registry
        .iter()
        .map(|set| ExampleRow {
            name: set.name().to_string(),
            files: set.len(),
            entry: set
                .entry_file()
                .map(|f| f.name.to_string())
                .unwrap_or_default(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    if let Some(default) = default {
        println!("{} {}", "default:".bright_black(), default.bold());
    }
}
