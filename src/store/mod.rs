//! Document storage backends.
//!
//! The resolver never touches the filesystem directly. It asks a
//! [`DocumentStore`] whether a path exists, whether it is a regular file, and
//! for its text. [`FsStore`] is the default binding; [`MemoryStore`] keeps
//! documents in memory for embedding and tests.
//!
//! Paths handed to a store are always absolute and lexically inside the root.
//! Stores that can alias paths (symlinks) report the real location through
//! [`DocumentStore::real_path`] so the resolver can check it as well.

mod fs;
mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

use std::io;
use std::path::{Path, PathBuf};

/// Source of raw document text.
pub trait DocumentStore {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read the full text of the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the document cannot be read.
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Whether `path` is a regular file.
    ///
    /// Must not fail: a missing or un-stat-able path is simply `false`.
    fn is_regular_file(&self, path: &Path) -> bool;

    /// Every regular file below `root`, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an I/O error only if `root` itself cannot be enumerated.
    fn list_files(&self, root: &Path) -> io::Result<Vec<PathBuf>>;

    /// Where `path` really lives once links are followed.
    ///
    /// Stores without links return `path` unchanged.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if `path` cannot be resolved.
    fn real_path(&self, path: &Path) -> io::Result<PathBuf> {
        Ok(path.to_path_buf())
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        (**self).read_text(path)
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        (**self).is_regular_file(path)
    }

    fn list_files(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        (**self).list_files(root)
    }

    fn real_path(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).real_path(path)
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for Box<S> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        (**self).read_text(path)
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        (**self).is_regular_file(path)
    }

    fn list_files(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        (**self).list_files(root)
    }

    fn real_path(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).real_path(path)
    }
}
