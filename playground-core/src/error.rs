//! Error types for playground-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from building, querying or configuring the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Lookup of a name that was never declared. Only surfaced by
    /// [`Registry::require`](crate::Registry::require); `get` returns `None`.
    #[error("example '{name}' not found")]
    NotFound { name: String },

    /// Two example sets were declared with the same name.
    #[error("duplicate example name '{name}'")]
    DuplicateExample { name: String },

    /// Two files inside one example set share a filename.
    #[error("duplicate file '{file}' in example '{example}'")]
    DuplicateFile { example: String, file: String },

    /// An example set was declared with an empty name.
    #[error("example name must not be empty")]
    EmptyExampleName,

    /// A file was declared with an empty filename.
    #[error("example '{example}' declares a file with an empty name")]
    EmptyFileName { example: String },

    /// An example set was declared without any files.
    #[error("example '{name}' has no files")]
    EmptyExample { name: String },

    /// Underlying I/O failure while reading the configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error on config load — includes the file path.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.playground/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

impl RegistryError {
    /// `true` for errors raised while assembling a catalog.
    ///
    /// These indicate a broken declaration and should abort startup.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            RegistryError::DuplicateExample { .. }
                | RegistryError::DuplicateFile { .. }
                | RegistryError::EmptyExampleName
                | RegistryError::EmptyFileName { .. }
                | RegistryError::EmptyExample { .. }
        )
    }
}
