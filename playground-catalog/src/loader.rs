//! Load extra example sets from a directory tree.
//!
//! ```text
//! <dir>/
//!   Counter/          -> example "Counter"
//!     App.vue         -> entry file, placed first
//!     Button.vue
//!     lib/format.ts   -> file "lib/format.ts"
//!   .cache/           (hidden, skipped)
//! ```
//!
//! Sets are ordered by directory name. Within a set, files are ordered by
//! relative path, except that the entry file comes first when present.

use std::path::{Path, PathBuf};

use playground_core::ExampleSpec;

use crate::error::{io_err, CatalogError};

/// Read every sub-directory of `dir` as one example set.
pub fn load_example_dir(dir: &Path, entry_file: &str) -> Result<Vec<ExampleSpec>, CatalogError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    let mut set_dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        if is_hidden(&path) {
            continue;
        }
        let meta = std::fs::metadata(&path).map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            set_dirs.push(path);
        }
    }
    set_dirs.sort();

    let mut specs = Vec::with_capacity(set_dirs.len());
    for set_dir in set_dirs {
        let name = set_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let spec = load_example_set(&set_dir, name, entry_file)?;
        if spec.files.is_empty() {
            tracing::warn!(path = %set_dir.display(), "skipping example directory without files");
            continue;
        }
        specs.push(spec);
    }

    tracing::info!(dir = %dir.display(), examples = specs.len(), "loaded example directory");
    Ok(specs)
}

/// Read a single directory as one example set named `name`.
pub fn load_example_set(
    dir: &Path,
    name: impl Into<String>,
    entry_file: &str,
) -> Result<ExampleSpec, CatalogError> {
    let mut paths = Vec::new();
    collect_files(dir, &mut paths)?;

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let file_name = normalize_file_name(rel);
        let content = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        files.push((file_name, content));
    }

    files.sort_by(|(a, _), (b, _)| (a != entry_file).cmp(&(b != entry_file)).then_with(|| a.cmp(b)));

    Ok(ExampleSpec { name: name.into(), files })
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), CatalogError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        if is_hidden(&path) {
            continue;
        }
        let meta = std::fs::metadata(&path).map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn normalize_file_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
