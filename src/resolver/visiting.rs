//! Cycle detection along the active import chain.
//!
//! Each top-level request gets a fresh [`VisitingSet`]. Entering a document
//! pushes it; the returned [`VisitGuard`] pops it again when dropped, so the
//! set is restored on every exit path, including early `?` returns.

use std::ops::{Deref, DerefMut};
use std::path::PathBuf;

use crate::core::{CanonicalPath, ResolutionError};

/// Documents currently being expanded, outermost first.
#[derive(Debug, Default)]
pub struct VisitingSet {
    stack: Vec<CanonicalPath>,
}

impl VisitingSet {
    /// An empty set for a new top-level request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `path` is on the active chain.
    #[must_use]
    pub fn contains(&self, path: &CanonicalPath) -> bool {
        self.stack.contains(path)
    }

    /// The active chain, outermost first.
    #[must_use]
    pub fn paths(&self) -> &[CanonicalPath] {
        &self.stack
    }

    /// Number of documents on the active chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether no document is being expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Push `path` onto the chain for the lifetime of the returned guard.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::CircularImport`] if `path` is already on the
    /// chain. The error's chain starts at the earlier occurrence and ends with
    /// `path` itself.
    pub fn enter(&mut self, path: &CanonicalPath) -> Result<VisitGuard<'_>, ResolutionError> {
        if let Some(start) = self.stack.iter().position(|visiting| visiting == path) {
            let chain: Vec<PathBuf> = self.stack[start..]
                .iter()
                .chain(std::iter::once(path))
                .map(|p| p.as_path().to_path_buf())
                .collect();
            tracing::debug!("Cycle closed at {}", path);
            return Err(ResolutionError::CircularImport {
                chain,
            });
        }

        self.stack.push(path.clone());
        Ok(VisitGuard {
            set: self,
        })
    }
}

/// Keeps one document on the [`VisitingSet`] until dropped.
///
/// Derefs to the set so nested imports can be entered through the guard.
#[derive(Debug)]
pub struct VisitGuard<'a> {
    set: &'a mut VisitingSet,
}

impl Deref for VisitGuard<'_> {
    type Target = VisitingSet;

    fn deref(&self) -> &Self::Target {
        self.set
    }
}

impl DerefMut for VisitGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.set
    }
}

impl Drop for VisitGuard<'_> {
    fn drop(&mut self) {
        self.set.stack.pop();
    }
}
