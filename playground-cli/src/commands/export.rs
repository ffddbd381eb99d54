//! `playground export <name> <dir> [--force] [--dry-run]`
//!
//! Every target is checked before anything is written, so a conflict or an
//! unsafe filename leaves the directory untouched. Each file is written to
//! `<path>.playground.tmp` and renamed into place.

use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use playground_catalog::Catalog;
use playground_core::FileName;

/// Arguments for `playground export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Example set name (exact, case-sensitive).
    pub name: String,

    /// Target directory; created if missing.
    pub dir: PathBuf,

    /// Overwrite files that already exist.
    #[arg(long)]
    pub force: bool,

    /// Report what would be written without touching the filesystem.
    #[arg(long)]
    pub dry_run: bool,
}

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
enum WriteResult {
    Written { path: PathBuf },
    WouldWrite { path: PathBuf },
}

impl ExportArgs {
    pub fn run(self, catalog: &Catalog) -> Result<()> {
        let set = super::find(catalog, &self.name)?;

        set.try_for_each_file(|name, _| {
            let path = target_path(&self.dir, name)?;
            if path.exists() && !self.force {
                bail!(
                    "'{}' already exists; pass --force to overwrite",
                    path.display()
                );
            }
            Ok::<_, anyhow::Error>(())
        })?;

        let mut results = Vec::with_capacity(set.len());
        set.try_for_each_file(|name, content| {
            let path = target_path(&self.dir, name)?;
            results.push(write_file(&path, content, self.dry_run)?);
            Ok::<_, anyhow::Error>(())
        })?;

        for result in &results {
            match result {
                WriteResult::Written { path } => println!("✓ wrote {}", path.display()),
                WriteResult::WouldWrite { path } => println!("[dry-run] would write {}", path.display()),
            }
        }
        if !self.dry_run {
            println!("Exported '{}' ({} files) to {}", set.name(), results.len(), self.dir.display());
        }
        Ok(())
    }
}

/// Join `name` onto `dir`, refusing anything that could escape `dir`.
fn target_path(dir: &Path, name: &FileName) -> Result<PathBuf> {
    let rel = Path::new(name.as_str());
    let safe = rel
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !safe || rel.as_os_str().is_empty() {
        bail!("refusing to export unsafe filename '{name}'");
    }
    Ok(dir.join(rel))
}

fn write_file(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult> {
    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite { path: path.to_path_buf() });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create '{}'", parent.display()))?;
    }

    let tmp = PathBuf::from(format!("{}.playground.tmp", path.display()));
    std::fs::write(&tmp, content).with_context(|| format!("cannot write '{}'", tmp.display()))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("cannot move into '{}'", path.display()));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written { path: path.to_path_buf() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn target_path_rejects_escapes() {
        let dir = Path::new("/out");
        assert!(target_path(dir, &FileName::from("../evil.vue")).is_err());
        assert!(target_path(dir, &FileName::from("/etc/passwd")).is_err());
        assert!(target_path(dir, &FileName::from("a/../../b")).is_err());
    }

    #[test]
    fn target_path_allows_nested_names() {
        let dir = Path::new("/out");
        let path = target_path(dir, &FileName::from("lib/format.ts")).expect("safe");
        assert_eq!(path, PathBuf::from("/out/lib/format.ts"));
    }

    #[test]
    fn write_file_leaves_no_tmp() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("nested").join("App.vue");
        let result = write_file(&path, "<template/>", false).expect("write");
        assert_eq!(result, WriteResult::Written { path: path.clone() });
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<template/>");
        assert!(!tmp.path().join("nested").join("App.vue.playground.tmp").exists());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("App.vue");
        let result = write_file(&path, "x", true).expect("dry run");
        assert!(matches!(result, WriteResult::WouldWrite { .. }));
        assert!(!path.exists());
    }
}
