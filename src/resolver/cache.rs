//! Resolution cache.
//!
//! Fully expanded documents are kept per [`CanonicalPath`] for the lifetime of
//! the owning [`Loader`](super::Loader). Entries are never evicted, so a
//! document is read and expanded at most once per loader.
//!
//! The map is a [`DashMap`] so a loader can be shared across threads. Two
//! threads racing on the same unresolved path both compute a result, but only
//! the first insertion is kept and both receive that same [`Arc`].

use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::{CanonicalPath, ResolvedDocument};

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: usize,
    /// Lookups that had to resolve the document.
    pub misses: usize,
    /// Documents currently cached.
    pub entries: usize,
}

impl CacheStats {
    /// Hit rate as a percentage, `0.0` before any lookup.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ResolutionCache {
    entries: DashMap<CanonicalPath, Arc<ResolvedDocument>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl ResolutionCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Cached document for `path`, counting the lookup.
    pub(crate) fn get(&self, path: &CanonicalPath) -> Option<Arc<ResolvedDocument>> {
        // Clone out of the shard guard before returning; callers recurse into the map.
        let found = self.entries.get(path).map(|entry| Arc::clone(entry.value()));
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    /// Whether `path` is cached, without touching the counters.
    pub(crate) fn contains(&self, path: &CanonicalPath) -> bool {
        self.entries.contains_key(path)
    }

    /// Store `document` unless another entry won the race, and return the
    /// entry that ends up in the cache.
    pub(crate) fn insert(
        &self,
        path: CanonicalPath,
        document: ResolvedDocument,
    ) -> Arc<ResolvedDocument> {
        let entry = self.entries.entry(path).or_insert_with(|| Arc::new(document));
        Arc::clone(entry.value())
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}
