//! Catalog configuration.
//!
//! # Storage layout
//!
//! ```text
//! ~/.playground/
//!   config.yaml   (optional — defaults apply when absent)
//! ```
//!
//! # API pattern
//!
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::types::CatalogVariant;

/// File placed first when example sets are loaded from a directory.
pub const DEFAULT_ENTRY_FILE: &str = "App.vue";

/// Contents of `~/.playground/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Built-in catalog to start from.
    pub variant: CatalogVariant,
    /// Directories whose sub-directories are appended as extra example sets.
    pub example_dirs: Vec<PathBuf>,
    /// Set a consumer should fall back to when a requested name is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_example: Option<String>,
    pub entry_file: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            variant: CatalogVariant::default(),
            example_dirs: Vec::new(),
            default_example: None,
            entry_file: DEFAULT_ENTRY_FILE.to_owned(),
        }
    }
}

/// `<home>/.playground/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".playground").join("config.yaml")
}

/// Load `<home>/.playground/config.yaml`, or defaults if it does not exist.
pub fn load_at(home: &Path) -> Result<CatalogConfig, RegistryError> {
    let path = config_path_at(home);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CatalogConfig::default());
    }
    load_from(&path)
}

/// Load an explicit config file. A missing file is an I/O error here.
///
/// Relative `example_dirs` are resolved against the directory holding `path`,
/// so the result does not depend on the working directory.
pub fn load_from(path: &Path) -> Result<CatalogConfig, RegistryError> {
    let contents = std::fs::read_to_string(path)?;
    // An empty file deserializes to `()`, not a mapping.
    if contents.trim().is_empty() {
        return Ok(CatalogConfig::default());
    }
    let mut config: CatalogConfig = serde_yaml::from_str(&contents).map_err(|e| RegistryError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    if let Some(base) = path.parent() {
        for dir in &mut config.example_dirs {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
    }
    Ok(config)
}

/// `load_at` convenience wrapper.
///
/// Fails with [`RegistryError::HomeNotFound`] when no home directory is known.
pub fn load() -> Result<CatalogConfig, RegistryError> {
    load_at(&home()?)
}

fn home() -> Result<PathBuf, RegistryError> {
    dirs::home_dir().ok_or(RegistryError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(home: &TempDir, body: &str) {
        let path = config_path_at(home.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, body).unwrap();
    }

    #[test]
    fn config_path_is_correct() {
        let home = TempDir::new().expect("tempdir");
        assert!(config_path_at(home.path()).ends_with(".playground/config.yaml"));
    }

    #[test]
    fn missing_config_yields_defaults() {
        let home = TempDir::new().expect("tempdir");
        let cfg = load_at(home.path()).expect("load");
        assert_eq!(cfg, CatalogConfig::default());
        assert_eq!(cfg.entry_file, "App.vue");
    }

    #[test]
    fn empty_config_yields_defaults() {
        let home = TempDir::new().expect("tempdir");
        write_config(&home, "\n");
        assert_eq!(load_at(home.path()).expect("load"), CatalogConfig::default());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let home = TempDir::new().expect("tempdir");
        write_config(&home, "variant: base\ndefault_example: Simple\n");
        let cfg = load_at(home.path()).expect("load");
        assert_eq!(cfg.variant, CatalogVariant::Base);
        assert_eq!(cfg.default_example.as_deref(), Some("Simple"));
        assert!(cfg.example_dirs.is_empty());
    }

    #[test]
    fn unknown_variant_is_parse_error_with_path() {
        let home = TempDir::new().expect("tempdir");
        write_config(&home, "variant: nightly\n");
        let err = load_at(home.path()).unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }), "got: {err}");
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    fn home_not_found_error_message() {
        assert!(RegistryError::HomeNotFound.to_string().contains("home directory"));
        assert!(!RegistryError::HomeNotFound.is_construction_error());
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let home = TempDir::new().expect("tempdir");
        let err = load_from(&home.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, RegistryError::Io(_)));
    }
}
