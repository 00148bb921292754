//! In-memory document store.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use super::DocumentStore;

/// Documents held in a map of absolute path to text.
///
/// Directories are implicit: a path exists if it names a document or is an
/// ancestor of one, and only documents count as regular files.
///
/// # Examples
///
/// ```rust
/// use docweave::store::{DocumentStore, MemoryStore};
/// use std::path::Path;
///
/// let store = MemoryStore::new()
///     .with_document("/r/a.md", "Head @(./b) Tail")
///     .with_document("/r/b.md", "Middle");
///
/// assert!(store.is_regular_file(Path::new("/r/a.md")));
/// assert!(store.exists(Path::new("/r")));
/// assert!(!store.is_regular_file(Path::new("/r")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: BTreeMap<PathBuf, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document, builder style.
    #[must_use]
    pub fn with_document(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    /// Add or replace a document.
    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.documents.insert(path.into(), text.into());
    }

    /// Number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.documents.contains_key(path) || self.documents.keys().any(|doc| doc.starts_with(path))
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        self.documents.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no document at {}", path.display()))
        })
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        self.documents.contains_key(path)
    }

    fn list_files(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        Ok(self.documents.keys().filter(|doc| doc.starts_with(root)).cloned().collect())
    }
}
