//! Playground — inspect and export the live-coding example catalog.
//!
//! # Usage
//!
//! ```text
//! playground list [--json]
//! playground show <name> [--file <FILE>] [--json]
//! playground export <name> <dir> [--force] [--dry-run]
//!
//! global: [--variant base|extended] [--examples-dir <DIR>]... [--config <FILE>]
//! ```

mod commands;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use commands::{export::ExportArgs, list::ListArgs, show::ShowArgs};
use playground_core::CatalogVariant;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "playground",
    version,
    about = "Browse the example sets that seed the live-coding playground",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    catalog: CatalogArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List example sets in declaration order.
    List(ListArgs),

    /// Print the files of one example set.
    Show(ShowArgs),

    /// Write the files of one example set into a directory.
    Export(ExportArgs),
}

/// Catalog selection flags shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct CatalogArgs {
    /// Built-in catalog: base | extended. Overrides the config file.
    #[arg(long, global = true, value_name = "VARIANT")]
    pub variant: Option<VariantArg>,

    /// Extra example directory; each sub-directory becomes one example set.
    #[arg(long = "examples-dir", global = true, value_name = "DIR")]
    pub examples_dirs: Vec<PathBuf>,

    /// Config file to use instead of ~/.playground/config.yaml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Shared CatalogVariant argument — parsed from CLI strings, converts to core type
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse `CatalogVariant` from CLI args.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantArg(pub CatalogVariant);

impl FromStr for VariantArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base" => Ok(Self(CatalogVariant::Base)),
            "extended" => Ok(Self(CatalogVariant::Extended)),
            other => Err(format!(
                "unknown catalog variant '{other}'; expected: base, extended"
            )),
        }
    }
}

impl fmt::Display for VariantArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<VariantArg> for CatalogVariant {
    fn from(v: VariantArg) -> Self {
        v.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let catalog = commands::load_catalog(&cli.catalog)?;
    match cli.command {
        Commands::List(args) => args.run(&catalog),
        Commands::Show(args) => args.run(&catalog),
        Commands::Export(args) => args.run(&catalog),
    }
}

/// Log to stderr so `--json` output on stdout stays parseable.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
