//! Error types for playground-catalog.

use std::path::PathBuf;

use thiserror::Error;

use playground_core::RegistryError;

/// All errors that can arise while assembling a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The declarations broke a registry invariant (duplicate name, empty set, ...).
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Filesystem error while loading an example directory.
    #[error("example io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`CatalogError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> CatalogError {
    CatalogError::Io {
        path: path.into(),
        source,
    }
}
