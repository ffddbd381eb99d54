//! # playground-catalog
//!
//! The built-in playground examples and the function that assembles them,
//! together with any configured extra example directories, into a
//! [`Registry`](playground_core::Registry).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use playground_catalog::{assemble, CatalogOptions};
//! use playground_core::CatalogVariant;
//!
//! fn seed_editor() {
//!     if let Ok(registry) = assemble(CatalogOptions::new(CatalogVariant::Extended)) {
//!         if let Some(set) = registry.get("CompilerHints") {
//!             set.for_each_file(|name, content| {
//!                 println!("{name}: {} bytes", content.len());
//!             });
//!         }
//!     }
//! }
//! ```

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod loader;

pub use builtin::{builtin_names, builtin_specs};
pub use catalog::{assemble, Catalog, CatalogOptions};
pub use error::CatalogError;
pub use loader::{load_example_dir, load_example_set};
