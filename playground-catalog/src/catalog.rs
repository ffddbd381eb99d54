//! Catalog assembly — one parameterized entry point for every variant.

use playground_core::{build_registry, CatalogConfig, CatalogVariant, ExampleSet, ExampleSpec, Registry};

use crate::builtin::builtin_specs;
use crate::error::CatalogError;
use crate::loader::load_example_dir;

/// Inputs to [`assemble`].
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    pub variant: CatalogVariant,
    /// Declared after the built-ins, in order.
    pub extra: Vec<ExampleSpec>,
}

impl CatalogOptions {
    pub fn new(variant: CatalogVariant) -> Self {
        Self { variant, extra: Vec::new() }
    }

    pub fn with_extra(mut self, specs: impl IntoIterator<Item = ExampleSpec>) -> Self {
        self.extra.extend(specs);
        self
    }
}

/// Build the registry: built-ins for the variant first, then extras.
///
/// An extra reusing a built-in name fails with `DuplicateExample`.
pub fn assemble(options: CatalogOptions) -> Result<Registry, CatalogError> {
    let specs = builtin_specs(options.variant).into_iter().chain(options.extra);
    let registry = build_registry(specs)?;
    tracing::debug!(variant = %options.variant, examples = registry.len(), "catalog assembled");
    Ok(registry)
}

/// An assembled registry plus the consumer's fallback choice.
#[derive(Debug, Clone)]
pub struct Catalog {
    registry: Registry,
    default_example: Option<String>,
}

impl Catalog {
    /// Built-in examples only.
    pub fn builtin(variant: CatalogVariant) -> Result<Self, CatalogError> {
        Ok(Self {
            registry: assemble(CatalogOptions::new(variant))?,
            default_example: None,
        })
    }

    /// Built-ins plus every configured example directory.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut options = CatalogOptions::new(config.variant);
        for dir in &config.example_dirs {
            options.extra.extend(load_example_dir(dir, &config.entry_file)?);
        }
        let registry = assemble(options)?;

        if let Some(default) = &config.default_example {
            if !registry.contains(default) {
                tracing::warn!(default = %default, "configured default example is not in the catalog");
            }
        }

        Ok(Self {
            registry,
            default_example: config.default_example.clone(),
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The configured default if present, otherwise the first declared set.
    pub fn default_set(&self) -> Option<&ExampleSet> {
        self.default_example
            .as_deref()
            .and_then(|d| self.registry.get(d))
            .or_else(|| self.registry.first())
    }

    /// `name` if present, otherwise [`default_set`](Self::default_set).
    pub fn get_or_default(&self, name: &str) -> Option<&ExampleSet> {
        self.registry
            .get_or_default(name, self.default_example.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playground_core::RegistryError;

    #[test]
    fn variants_differ_by_expose_only() {
        let base = assemble(CatalogOptions::new(CatalogVariant::Base)).expect("base");
        let extended = assemble(CatalogOptions::new(CatalogVariant::Extended)).expect("extended");
        assert_eq!(extended.len(), base.len() + 1);
        assert!(base.get("expose").is_none());
        assert!(extended.get("expose").is_some());
        for set in &base {
            assert_eq!(extended.get(set.name().as_str()), Some(set));
        }
    }

    #[test]
    fn extras_follow_builtins() {
        let opts = CatalogOptions::new(CatalogVariant::Base)
            .with_extra([ExampleSpec::new("Mine").file("App.vue", "x")]);
        let reg = assemble(opts).expect("assemble");
        assert_eq!(reg.names().last().map(|n| n.as_str()), Some("Mine"));
    }

    #[test]
    fn extra_colliding_with_builtin_fails() {
        let opts = CatalogOptions::new(CatalogVariant::Base)
            .with_extra([ExampleSpec::new("Simple").file("App.vue", "shadow")]);
        let err = assemble(opts).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Registry(RegistryError::DuplicateExample { .. })
        ));
    }

    #[test]
    fn default_set_prefers_configured_name() {
        let config = CatalogConfig {
            default_example: Some("CompilerHints".into()),
            ..CatalogConfig::default()
        };
        let catalog = Catalog::from_config(&config).expect("catalog");
        assert_eq!(catalog.default_set().unwrap().name().as_str(), "CompilerHints");
        assert_eq!(catalog.get_or_default("Missing").unwrap().name().as_str(), "CompilerHints");
        assert_eq!(catalog.get_or_default("expose").unwrap().name().as_str(), "expose");
    }

    #[test]
    fn unknown_default_falls_back_to_first() {
        let config = CatalogConfig {
            default_example: Some("Nope".into()),
            ..CatalogConfig::default()
        };
        let catalog = Catalog::from_config(&config).expect("catalog");
        assert_eq!(catalog.default_set().unwrap().name().as_str(), "Simple");
    }
}
