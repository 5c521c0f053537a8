//! Spec loader
//!
//! Finds spec documents under a root directory, keeps the ones whose path mentions an allowed
//! topic, and parses them into [`SpecDocument`]s.
//!
//! ## Notes
//!
//! - Topic matching is plain substring containment on the whole path, not a glob.
//! - Any walk, read or parse failure is returned as a [`GenError`]; there is no skip-and-continue.
//! - Entries are visited in file-name order so repeated runs see the same sequence.

pub mod value;

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::GenError;

pub use value::{DataValue, Number};

/// Topics generated by default.
///
/// `partials` and `lambdas` are left out: the renderer is not expected to pass them yet.
pub const DEFAULT_TOPICS: &[&str] = &["comments", "delimiters", "interpolation", "inverted", "sections"];

/// Extension that marks a file as a spec document.
pub const SPEC_EXTENSION: &str = "json";

/// One spec file: an ordered list of cases.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecDocument {
    /// Where the document was loaded from.
    #[serde(skip)]
    pub path: PathBuf,
    pub tests: Vec<SpecCase>,
}

/// A single conformance case.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecCase {
    pub name: String,
    #[serde(default)]
    pub data: DataValue,
    pub expected: String,
    pub template: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    /// `None` when absent or `null`; an empty mapping is kept as `Some`.
    #[serde(default)]
    pub partials: Option<IndexMap<String, String>>,
}

impl SpecDocument {
    /// Parse a document from its JSON text.
    pub fn from_json(path: impl Into<PathBuf>, text: &str) -> Result<Self, GenError> {
        let path = path.into();
        let mut document: SpecDocument =
            serde_json::from_str(text).map_err(|source| GenError::Parse { path: path.clone(), source })?;
        document.path = path;
        Ok(document)
    }

    /// Namespace prefix for the routines generated from this document.
    pub fn scope(&self) -> String {
        scope_for(&self.path)
    }
}

/// Allow-list of topic keywords a spec path must mention to be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicFilter {
    keywords: Vec<String>,
}

impl Default for TopicFilter {
    fn default() -> Self {
        Self::new(DEFAULT_TOPICS.iter().copied())
    }
}

impl TopicFilter {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True if any keyword occurs anywhere in `path`.
    pub fn matches(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.keywords.iter().any(|k| path.contains(k.as_str()))
    }
}

/// Recursively collect spec documents under `root` that pass `filter`.
#[tracing::instrument(skip(root, filter), fields(root = %root.display()))]
pub fn discover_spec_files(root: &Path, filter: &TopicFilter, extension: &str) -> Result<Vec<PathBuf>, GenError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| GenError::Walk {
            root: root.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        if !filter.matches(path) {
            tracing::debug!(path = %path.display(), "skipping spec outside the topic allow-list");
            continue;
        }

        files.push(path.to_path_buf());
    }
    Ok(files)
}

/// Read and parse one spec document.
pub fn load_document(path: &Path) -> Result<SpecDocument, GenError> {
    let text = fs::read_to_string(path).map_err(|source| GenError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    SpecDocument::from_json(path, &text)
}

/// Scope prefix for a spec path: its file stem, first letter upper-cased.
pub fn scope_for(path: &Path) -> String {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    crate::backend::ident::capitalize(&stem)
}
