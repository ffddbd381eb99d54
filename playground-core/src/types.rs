//! Domain types for the example registry.
//!
//! File content is opaque text: nothing here parses, validates or rewrites it.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for an example set in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExampleName(pub String);

impl ExampleName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExampleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ExampleName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ExampleName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed virtual filename inside an example set (e.g. `App.vue`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileName(pub String);

impl FileName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for FileName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FileName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which of the two built-in catalogs to assemble.
///
/// `Extended` is `Base` plus the `expose` example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVariant {
    Base,
    #[default]
    Extended,
}

impl CatalogVariant {
    /// All variants in a stable order.
    pub fn all() -> &'static [CatalogVariant] {
        &[CatalogVariant::Base, CatalogVariant::Extended]
    }
}

impl fmt::Display for CatalogVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogVariant::Base => write!(f, "base"),
            CatalogVariant::Extended => write!(f, "extended"),
        }
    }
}

// ---------------------------------------------------------------------------
// Declarations
// ---------------------------------------------------------------------------

/// Declaration of one example set: a name and its files in display order.
///
/// This is the only input the registry accepts. Checks happen in
/// [`build_registry`](crate::registry::build_registry), not here.
///
/// Files are a list of `[filename, content]` pairs so declaration order
/// survives a YAML or JSON round trip.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExampleSpec {
    pub name: String,
    #[serde(default)]
    pub files: Vec<(String, String)>,
}

impl ExampleSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), files: Vec::new() }
    }

    /// Append a file, keeping declaration order.
    pub fn file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push((name.into(), content.into()));
        self
    }
}

impl<N, F, C> From<(N, Vec<(F, C)>)> for ExampleSpec
where
    N: Into<String>,
    F: Into<String>,
    C: Into<String>,
{
    fn from((name, files): (N, Vec<(F, C)>)) -> Self {
        Self {
            name: name.into(),
            files: files.into_iter().map(|(f, c)| (f.into(), c.into())).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Registry values
// ---------------------------------------------------------------------------

/// One file of an example set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VirtualFile {
    pub name: FileName,
    pub content: String,
}

/// A named, ordered collection of virtual files.
///
/// Only the registry constructs these, so every `ExampleSet` a caller sees
/// holds at least one file and no two files share a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleSet {
    pub(crate) name: ExampleName,
    pub(crate) files: Vec<VirtualFile>,
}

impl ExampleSet {
    pub fn name(&self) -> &ExampleName {
        &self.name
    }

    /// Files in declaration order.
    pub fn files(&self) -> &[VirtualFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Always `false` for sets obtained from a [`Registry`](crate::Registry).
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The file a consumer should open first.
    pub fn entry_file(&self) -> Option<&VirtualFile> {
        self.files.first()
    }

    /// Look up a single file by exact name.
    pub fn file(&self, name: &str) -> Option<&VirtualFile> {
        self.files.iter().find(|f| f.name.0 == name)
    }

    /// Call `visitor(filename, content)` for every file, in declaration order.
    pub fn for_each_file<F>(&self, mut visitor: F)
    where
        F: FnMut(&FileName, &str),
    {
        for file in &self.files {
            visitor(&file.name, &file.content);
        }
    }

    /// Like [`for_each_file`](Self::for_each_file) but stops at the first error.
    pub fn try_for_each_file<F, E>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&FileName, &str) -> Result<(), E>,
    {
        for file in &self.files {
            visitor(&file.name, &file.content)?;
        }
        Ok(())
    }

    /// Owned `(filename, content)` pairs in declaration order.
    pub fn to_file_map(&self) -> Vec<(String, String)> {
        self.files
            .iter()
            .map(|f| (f.name.0.clone(), f.content.clone()))
            .collect()
    }
}

/// Serializes as `{ "<filename>": "<content>", ... }` in declaration order.
impl Serialize for ExampleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.files.len()))?;
        for file in &self.files {
            map.serialize_entry(&file.name, &file.content)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn two_file_set() -> ExampleSet {
        ExampleSet {
            name: ExampleName::from("CompilerHints"),
            files: vec![
                VirtualFile { name: FileName::from("App.vue"), content: "<app/>".into() },
                VirtualFile { name: FileName::from("Comp.vue"), content: "<comp/>".into() },
            ],
        }
    }

    #[test]
    fn newtype_display() {
        assert_eq!(ExampleName::from("Simple").to_string(), "Simple");
        assert_eq!(FileName::from("App.vue").to_string(), "App.vue");
    }

    #[test]
    fn variant_display_and_default() {
        assert_eq!(CatalogVariant::Base.to_string(), "base");
        assert_eq!(CatalogVariant::default(), CatalogVariant::Extended);
    }

    #[test]
    fn spec_builder_keeps_order() {
        let spec = ExampleSpec::new("X").file("b.vue", "b").file("a.vue", "a");
        assert_eq!(spec.files[0].0, "b.vue");
        assert_eq!(spec.files[1].0, "a.vue");
    }

    #[test]
    fn spec_from_tuple() {
        let spec: ExampleSpec = ("Simple", vec![("App.vue", "<template/>")]).into();
        assert_eq!(spec.name, "Simple");
        assert_eq!(spec.files, vec![("App.vue".to_string(), "<template/>".to_string())]);
    }

    #[test]
    fn try_for_each_file_stops_at_first_error() {
        let set = two_file_set();
        let mut seen = Vec::new();
        let res: Result<(), String> = set.try_for_each_file(|name, _| {
            seen.push(name.to_string());
            Err(format!("boom at {name}"))
        });
        assert_eq!(res.unwrap_err(), "boom at App.vue");
        assert_eq!(seen, vec!["App.vue"]);
    }

    #[test]
    fn serializes_as_ordered_file_map() {
        let json = serde_json::to_string(&two_file_set()).expect("serialize");
        assert_eq!(json, r#"{"App.vue":"<app/>","Comp.vue":"<comp/>"}"#);
    }

    #[test]
    fn entry_file_is_first_declared() {
        let set = two_file_set();
        assert_eq!(set.entry_file().map(|f| f.name.as_str()), Some("App.vue"));
        assert!(set.file("Comp.vue").is_some());
        assert!(set.file("Missing.vue").is_none());
    }
}
