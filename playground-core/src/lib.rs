//! Playground core library — example registry, domain types, config, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes, [`ExampleSpec`] declarations and [`ExampleSet`]
//! - [`registry`] — [`build_registry`] and the read-only [`Registry`]
//! - [`config`] — `~/.playground/config.yaml` loading
//! - [`error`] — [`RegistryError`]

pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use config::CatalogConfig;
pub use error::RegistryError;
pub use registry::{build_registry, Names, Registry};
pub use types::{
    CatalogVariant, ExampleName, ExampleSet, ExampleSpec, FileName, VirtualFile,
};
