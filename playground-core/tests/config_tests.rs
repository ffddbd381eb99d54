//! Config loading against a temporary home directory.

use assert_fs::prelude::*;
use playground_core::{config, CatalogVariant, RegistryError};
use predicates::prelude::predicate;

#[test]
fn full_config_is_loaded() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    home.child(".playground/config.yaml")
        .write_str(
            "variant: base\n\
             example_dirs:\n  - /srv/examples\n\
             default_example: CompilerHints\n\
             entry_file: main.ts\n",
        )
        .expect("write");

    let cfg = config::load_at(home.path()).expect("load");
    assert_eq!(cfg.variant, CatalogVariant::Base);
    assert_eq!(cfg.example_dirs, vec![std::path::PathBuf::from("/srv/examples")]);
    assert_eq!(cfg.default_example.as_deref(), Some("CompilerHints"));
    assert_eq!(cfg.entry_file, "main.ts");
}

#[test]
fn unknown_field_is_rejected() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    home.child(".playground/config.yaml")
        .write_str("variants: base\n")
        .expect("write");

    let err = config::load_at(home.path()).unwrap_err();
    assert!(matches!(err, RegistryError::Parse { .. }), "got: {err}");
}

#[test]
fn loading_never_creates_files() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    config::load_at(home.path()).expect("load");
    home.child(".playground").assert(predicate::path::missing());
}

#[test]
fn relative_example_dirs_resolve_against_config_dir() {
    let home = assert_fs::TempDir::new().expect("tempdir");
    home.child(".playground/config.yaml")
        .write_str("example_dirs:\n  - extras\n  - /srv/examples\n")
        .expect("write");

    let cfg = config::load_at(home.path()).expect("load");
    assert_eq!(
        cfg.example_dirs,
        vec![
            home.path().join(".playground").join("extras"),
            std::path::PathBuf::from("/srv/examples"),
        ]
    );
}
