//! Filesystem-backed document store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::DocumentStore;

/// Reads documents straight from the local filesystem.
///
/// Symlinks are followed. A dangling symlink reports `false` from both
/// [`exists`](DocumentStore::exists) and
/// [`is_regular_file`](DocumentStore::is_regular_file), and
/// [`real_path`](DocumentStore::real_path) canonicalizes through every link.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FsStore {
    /// Create a filesystem store.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DocumentStore for FsStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false)
    }

    fn real_path(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn list_files(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        if !root.is_dir() {
            return Ok(files);
        }

        for entry in walkdir::WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}
