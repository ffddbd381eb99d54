//! Subcommands and the catalog loading they share.

pub mod export;
pub mod list;
pub mod show;

use anyhow::{anyhow, Context, Result};

use playground_catalog::Catalog;
use playground_core::{config, CatalogConfig, ExampleSet, RegistryError};

use crate::CatalogArgs;

/// Config file (or defaults) with command-line overrides applied, then assembled.
pub fn load_catalog(args: &CatalogArgs) -> Result<Catalog> {
    let mut cfg = match &args.config {
        Some(path) => config::load_from(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => match config::load() {
            Ok(cfg) => cfg,
            Err(RegistryError::HomeNotFound) => {
                tracing::warn!("cannot determine home directory; using default config");
                CatalogConfig::default()
            }
            Err(err) => return Err(err).context("failed to load ~/.playground/config.yaml"),
        },
    };

    if let Some(variant) = args.variant {
        cfg.variant = variant.into();
    }
    cfg.example_dirs.extend(args.examples_dirs.iter().cloned());

    Catalog::from_config(&cfg).context("failed to assemble example catalog")
}

/// Resolve `name`, turning a miss into an error that lists what exists.
pub fn find<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a ExampleSet> {
    let registry = catalog.registry();
    registry.require(name).map_err(|err| {
        let names: Vec<&str> = registry.names().map(|n| n.as_str()).collect();
        anyhow!("{err}. Available: {}", names.join(", "))
    })
}
