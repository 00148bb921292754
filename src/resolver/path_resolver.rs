//! Logical name and import reference resolution.
//!
//! Turns `"agents/reviewer"` or `"@(../shared/tone)"` into a [`CanonicalPath`]:
//!
//! 1. join onto the root (entries, `/`-prefixed imports) or onto the importing
//!    document's directory (all other imports)
//! 2. normalize `.` and `..` lexically
//! 3. append the default extension unless a recognized one is present
//! 4. reject anything that ends up outside the root
//! 5. require the store to report an existing regular file
//! 6. reject the file if its real location (links followed) is outside the
//!    real root
//!
//! Steps 1 to 4 are purely lexical. Step 6 asks the store through
//! [`DocumentStore::real_path`], so a symlink inside the root may point
//! elsewhere inside the root but never out of it.

use std::ffi::OsString;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::config::LoaderConfig;
use crate::constants::ROOT_RELATIVE_MARKER;
use crate::core::{CanonicalPath, ResolutionError};
use crate::store::DocumentStore;

/// Resolves names and references to sandbox-checked document paths.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
    config: LoaderConfig,
}

impl PathResolver {
    /// Build a resolver for `config.root`, made absolute against the current
    /// directory and normalized.
    ///
    /// # Errors
    ///
    /// Fails only if the root is relative and the current directory cannot be
    /// determined.
    pub fn new(config: &LoaderConfig) -> io::Result<Self> {
        let root = normalize_lexically(&std::path::absolute(&config.root)?);
        Ok(Self {
            root,
            config: config.clone(),
        })
    }

    /// The normalized sandbox root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a top-level logical name such as `"reviewer"` or `"team/lead.md"`.
    ///
    /// A name ending in a path separator names a directory and is never a
    /// document, so `"sub/"` does not load `sub.md`.
    ///
    /// # Errors
    ///
    /// [`ResolutionError::PathEscape`] if the name leaves the root,
    /// [`ResolutionError::NotFound`] if no regular file exists there.
    pub fn resolve_entry<S: DocumentStore>(
        &self,
        store: &S,
        logical_name: &str,
    ) -> Result<CanonicalPath, ResolutionError> {
        let joined = self.root.join(logical_name);
        self.finish(store, logical_name, None, &joined)
    }

    /// Resolve an import reference found in the document at `from`.
    ///
    /// # Errors
    ///
    /// [`ResolutionError::EmptyImportPath`] for a blank reference, otherwise the
    /// same errors as [`resolve_entry`](Self::resolve_entry).
    pub fn resolve_import<S: DocumentStore>(
        &self,
        store: &S,
        from: &CanonicalPath,
        reference: &str,
    ) -> Result<CanonicalPath, ResolutionError> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(ResolutionError::EmptyImportPath {
                from: from.as_path().to_path_buf(),
            });
        }

        let joined = match reference.strip_prefix(ROOT_RELATIVE_MARKER) {
            Some(rooted) => self.root.join(rooted),
            None => from.parent().join(reference),
        };
        self.finish(store, reference, Some(from), &joined)
    }

    /// Root-relative, `/`-separated logical name for a document path, such
    /// that [`resolve_entry`](Self::resolve_entry) maps it back to `path`.
    ///
    /// The default extension is dropped when that round-trips (`a.md` gives
    /// `a`). Any other recognized extension, or a differently cased default,
    /// is kept (`c.MD`, `notes.markdown`). `None` for paths outside the root or
    /// without a recognized extension.
    #[must_use]
    pub fn logical_name(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let ext = relative.extension()?.to_str()?;
        if !self.config.is_recognized_extension(ext) {
            return None;
        }

        let stem = relative.with_extension("");
        let stem_is_ambiguous = stem
            .extension()
            .and_then(|inner| inner.to_str())
            .is_some_and(|inner| self.config.is_recognized_extension(inner));
        let name = if ext == self.config.normalized_default_extension() && !stem_is_ambiguous {
            stem
        } else {
            relative.to_path_buf()
        };

        let parts =
            name.components().map(|c| c.as_os_str().to_str()).collect::<Option<Vec<&str>>>()?;
        Some(parts.join("/"))
    }

    fn finish<S: DocumentStore>(
        &self,
        store: &S,
        reference: &str,
        from: Option<&CanonicalPath>,
        joined: &Path,
    ) -> Result<CanonicalPath, ResolutionError> {
        let normalized = normalize_lexically(joined);
        let path = self.with_document_extension(normalized.clone());

        if !is_within(&path, &self.root) {
            return Err(self.escape(reference, from));
        }

        if names_directory(reference) {
            return Err(ResolutionError::NotFound {
                path: normalized,
            });
        }

        if !(store.exists(&path) && store.is_regular_file(&path)) {
            return Err(ResolutionError::NotFound {
                path,
            });
        }

        let (Ok(real_root), Ok(real_path)) = (store.real_path(&self.root), store.real_path(&path))
        else {
            return Err(ResolutionError::NotFound {
                path,
            });
        };
        if !is_within(&real_path, &real_root) {
            tracing::debug!("{} links outside the root to {}", path.display(), real_path.display());
            return Err(self.escape(reference, from));
        }

        tracing::debug!("Resolved '{}' to {}", reference, path.display());
        Ok(CanonicalPath::new(path))
    }

    fn escape(&self, reference: &str, from: Option<&CanonicalPath>) -> ResolutionError {
        ResolutionError::PathEscape {
            reference: reference.to_string(),
            from: from.map(|from| from.as_path().to_path_buf()),
            root: self.root.clone(),
        }
    }

    fn with_document_extension(&self, path: PathBuf) -> PathBuf {
        let recognized = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.config.is_recognized_extension(ext));
        if recognized {
            return path;
        }

        let mut raw: OsString = path.into_os_string();
        raw.push(".");
        raw.push(self.config.normalized_default_extension());
        PathBuf::from(raw)
    }
}

fn names_directory(reference: &str) -> bool {
    reference.chars().last().is_some_and(std::path::is_separator)
}

/// Whether `path` lies strictly below `root`. Both must already be normalized.
fn is_within(path: &Path, root: &Path) -> bool {
    match path.strip_prefix(root) {
        Ok(relative) => !matches!(relative.components().next(), None | Some(Component::ParentDir)),
        Err(_) => false,
    }
}

/// Resolve `.` and `..` without touching the filesystem.
///
/// `..` at the top of an absolute path stays at the top, as it does on disk.
/// Leading `..` of a relative path is kept.
pub(crate) fn normalize_lexically(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last().copied() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            other => components.push(other),
        }
    }

    components.iter().collect()
}
