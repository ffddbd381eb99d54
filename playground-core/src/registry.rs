//! The immutable example registry.
//!
//! # Lifecycle
//!
//! ```text
//! [ExampleSpec, ...] --build_registry--> Registry --get / names / iter--> consumers
//! ```
//!
//! Construction checks every invariant and fails on the first violation:
//! duplicate example names, duplicate filenames within a set, empty names and
//! empty sets. Nothing is ever overwritten. After construction the registry
//! has no mutation path, so it can be shared freely between threads.

use std::collections::HashMap;
use std::collections::HashSet;
use std::iter::FusedIterator;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::RegistryError;
use crate::types::{ExampleName, ExampleSet, ExampleSpec, FileName, VirtualFile};

// ---------------------------------------------------------------------------
// 1. Construction
// ---------------------------------------------------------------------------

/// Build a [`Registry`] from declarations, preserving their order.
pub fn build_registry<I, S>(entries: I) -> Result<Registry, RegistryError>
where
    I: IntoIterator<Item = S>,
    S: Into<ExampleSpec>,
{
    let mut sets: Vec<ExampleSet> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let spec: ExampleSpec = entry.into();
        let set = build_set(spec)?;
        if index.contains_key(&set.name.0) {
            return Err(RegistryError::DuplicateExample { name: set.name.0 });
        }
        tracing::debug!(example = %set.name, files = set.files.len(), "registered example");
        index.insert(set.name.0.clone(), sets.len());
        sets.push(set);
    }

    tracing::debug!(examples = sets.len(), "example registry built");
    Ok(Registry { sets, index })
}

fn build_set(spec: ExampleSpec) -> Result<ExampleSet, RegistryError> {
    if spec.name.is_empty() {
        return Err(RegistryError::EmptyExampleName);
    }
    if spec.files.is_empty() {
        return Err(RegistryError::EmptyExample { name: spec.name });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(spec.files.len());
    for (file, _) in &spec.files {
        if file.is_empty() {
            return Err(RegistryError::EmptyFileName { example: spec.name.clone() });
        }
        if !seen.insert(file.as_str()) {
            return Err(RegistryError::DuplicateFile {
                example: spec.name.clone(),
                file: file.clone(),
            });
        }
    }

    let files = spec
        .files
        .into_iter()
        .map(|(name, content)| VirtualFile { name: FileName::from(name), content })
        .collect();
    Ok(ExampleSet { name: ExampleName::from(spec.name), files })
}

// ---------------------------------------------------------------------------
// 2. Registry
// ---------------------------------------------------------------------------

/// Read-only catalog of example sets, keyed by unique name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    sets: Vec<ExampleSet>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// See [`build_registry`].
    pub fn build<I, S>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<ExampleSpec>,
    {
        build_registry(entries)
    }

    /// Exact-match lookup. Absence is an ordinary `None`.
    pub fn get(&self, name: &str) -> Option<&ExampleSet> {
        self.index.get(name).map(|&i| &self.sets[i])
    }

    /// Lookup that reports a miss as [`RegistryError::NotFound`].
    pub fn require(&self, name: &str) -> Result<&ExampleSet, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::NotFound { name: name.to_owned() })
    }

    /// Lookup with graceful degradation: `name`, then `default`, then the
    /// first declared set. `None` only when the registry is empty.
    pub fn get_or_default(&self, name: &str, default: Option<&str>) -> Option<&ExampleSet> {
        self.get(name)
            .or_else(|| default.and_then(|d| self.get(d)))
            .or_else(|| self.first())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The first declared set.
    pub fn first(&self) -> Option<&ExampleSet> {
        self.sets.first()
    }

    /// Example names in declaration order. Call again to restart.
    pub fn names(&self) -> Names<'_> {
        Names { inner: self.sets.iter() }
    }

    /// Example sets in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExampleSet> {
        self.sets.iter()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ExampleSet;
    type IntoIter = std::slice::Iter<'a, ExampleSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serializes as `{ "<example>": { "<filename>": "<content>" } }` in declaration order.
impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sets.len()))?;
        for set in &self.sets {
            map.serialize_entry(&set.name, set)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// 3. Name iterator
// ---------------------------------------------------------------------------

/// Lazy iterator over registry keys, returned by [`Registry::names`].
#[derive(Debug, Clone)]
pub struct Names<'a> {
    inner: std::slice::Iter<'a, ExampleSet>,
}

impl<'a> Iterator for Names<'a> {
    type Item = &'a ExampleName;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|set| &set.name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Names<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|set| &set.name)
    }
}

impl ExactSizeIterator for Names<'_> {}

impl FusedIterator for Names<'_> {}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
