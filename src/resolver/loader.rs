//! The [`Loader`] façade.

use anyhow::{Context, Result};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::cache::{CacheStats, ResolutionCache};
use super::expander::Expander;
use super::path_resolver::PathResolver;
use super::visiting::VisitingSet;
use crate::config::LoaderConfig;
use crate::core::{ResolutionError, ResolvedDocument};
use crate::store::{DocumentStore, FsStore};

/// Loads documents by logical name and expands their imports.
///
/// A loader owns its cache: every document it resolves is kept for as long as
/// the loader lives, and each distinct file is read at most once. Methods take
/// `&self`, so a loader can be shared between threads when its store allows it.
///
/// # Examples
///
/// ```rust,no_run
/// use docweave::resolver::Loader;
///
/// # fn example() -> anyhow::Result<()> {
/// let loader = Loader::from_root("prompts")?;
///
/// match loader.get_document("agents/reviewer") {
///     Some(doc) => println!("{}", doc.body()),
///     None => println!("reviewer is unavailable, see the logs"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Loader<S = FsStore> {
    config: LoaderConfig,
    resolver: PathResolver,
    store: S,
    cache: ResolutionCache,
}

impl Loader<FsStore> {
    /// Loader reading from the filesystem.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or a relative root cannot be made
    /// absolute.
    pub fn new(config: LoaderConfig) -> Result<Self> {
        Self::with_store(config, FsStore::new())
    }

    /// Filesystem loader for `root` with default settings.
    ///
    /// # Errors
    ///
    /// Same as [`Loader::new`].
    pub fn from_root(root: impl Into<PathBuf>) -> Result<Self> {
        Self::new(LoaderConfig::new(root))
    }
}

impl<S: DocumentStore> Loader<S> {
    /// Loader reading through a custom [`DocumentStore`].
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or a relative root cannot be made
    /// absolute.
    pub fn with_store(config: LoaderConfig, store: S) -> Result<Self> {
        config.validate()?;
        let resolver = PathResolver::new(&config).with_context(|| {
            format!("Failed to resolve document root {}", config.root.display())
        })?;

        Ok(Self {
            config,
            resolver,
            store,
            cache: ResolutionCache::new(),
        })
    }

    /// Load and expand the document named `logical_name`.
    ///
    /// Every failure (missing file, sandbox escape, empty import, bad
    /// frontmatter, unreadable file, circular import) is logged as a warning
    /// and reported as `None`. Use [`try_get_document`](Self::try_get_document)
    /// to inspect the error instead.
    pub fn get_document(&self, logical_name: &str) -> Option<Arc<ResolvedDocument>> {
        match self.try_get_document(logical_name) {
            Ok(document) => Some(document),
            Err(err) => {
                tracing::warn!(
                    document = logical_name,
                    kind = %err.kind(),
                    "Failed to load document '{}': {}",
                    logical_name,
                    err
                );
                None
            }
        }
    }

    /// Load and expand the document named `logical_name`, returning the error
    /// on failure.
    ///
    /// # Errors
    ///
    /// Any [`ResolutionError`] raised while resolving the name or any of its
    /// transitive imports.
    pub fn try_get_document(
        &self,
        logical_name: &str,
    ) -> Result<Arc<ResolvedDocument>, ResolutionError> {
        let path = self.resolver.resolve_entry(&self.store, logical_name)?;
        let mut visiting = VisitingSet::new();
        self.expander().resolve(&path, &mut visiting)
    }

    /// Whether `logical_name` resolves to a document that is already cached.
    #[must_use]
    pub fn is_cached(&self, logical_name: &str) -> bool {
        self.resolver
            .resolve_entry(&self.store, logical_name)
            .is_ok_and(|path| self.cache.contains(&path))
    }

    /// Logical names of every document below the root, sorted.
    ///
    /// Files without a recognized extension are skipped, as are links whose
    /// target lies outside the root. Names use `/` as the separator and omit
    /// the default extension, so each can be passed straight back to
    /// [`get_document`](Self::get_document).
    ///
    /// # Errors
    ///
    /// Returns the store's I/O error if the root cannot be enumerated.
    pub fn list_documents(&self) -> io::Result<Vec<String>> {
        let mut names: Vec<String> = self
            .store
            .list_files(self.resolver.root())?
            .iter()
            .filter_map(|path| self.resolver.logical_name(path))
            .filter(|name| self.resolver.resolve_entry(&self.store, name).is_ok())
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    /// Cache counters for this loader.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// The normalized sandbox root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.resolver.root()
    }

    /// The configuration this loader was built from.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn expander(&self) -> Expander<'_, S> {
        Expander {
            resolver: &self.resolver,
            store: &self.store,
            cache: &self.cache,
        }
    }
}
