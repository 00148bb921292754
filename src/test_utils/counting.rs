use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::store::DocumentStore;

/// Wraps a [`DocumentStore`] and records every `read_text` call.
///
/// Used to check that each document is read at most once per loader.
#[derive(Debug, Default)]
pub struct CountingStore<S> {
    inner: S,
    total: AtomicUsize,
    per_path: Mutex<HashMap<PathBuf, usize>>,
}

impl<S> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            total: AtomicUsize::new(0),
            per_path: Mutex::new(HashMap::new()),
        }
    }

    /// Reads of `path` so far.
    pub fn reads(&self, path: impl AsRef<Path>) -> usize {
        self.per_path
            .lock()
            .map(|counts| counts.get(path.as_ref()).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Reads of any path so far.
    pub fn total_reads(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: DocumentStore> DocumentStore for CountingStore<S> {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        self.total.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut counts) = self.per_path.lock() {
            *counts.entry(path.to_path_buf()).or_insert(0) += 1;
        }
        self.inner.read_text(path)
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        self.inner.is_regular_file(path)
    }

    fn list_files(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        self.inner.list_files(root)
    }

    fn real_path(&self, path: &Path) -> io::Result<PathBuf> {
        self.inner.real_path(path)
    }
}
