//! `playground show <name> [--file <FILE>] [--json]`

use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;

use playground_catalog::Catalog;

/// Arguments for `playground show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Example set name (exact, case-sensitive).
    pub name: String,

    /// Print only this file, without a header.
    #[arg(long, short = 'f', conflicts_with = "json")]
    pub file: Option<String>,

    /// Emit the set as a JSON `{ filename: content }` map.
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    pub fn run(self, catalog: &Catalog) -> Result<()> {
        let set = super::find(catalog, &self.name)?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(set).context("failed to serialize example")?
            );
            return Ok(());
        }

        if let Some(file) = self.file.as_deref() {
            let file = set.file(file).ok_or_else(|| {
                anyhow!("example '{}' has no file '{}'", self.name, file)
            })?;
            print!("{}", file.content);
            return Ok(());
        }

        let separator = "─".repeat(60).bright_black().to_string();
        set.for_each_file(|name, content| {
            println!("{separator}");
            println!("{}", name.to_string().bold());
            println!("{separator}");
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
        });
        Ok(())
    }
}
