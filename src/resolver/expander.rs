//! Recursive import expansion.
//!
//! For one canonical path:
//!
//! 1. return the cached document if there is one
//! 2. fail with a circular import if the path is already on the active chain
//! 3. read and split the document
//! 4. replace each `@(...)` directive, left to right, with the body of the
//!    resolved target (resolved through this same procedure)
//! 5. leave the chain, cache the result, return it
//!
//! Any failure propagates unchanged. The chain is unwound by the
//! [`VisitGuard`](super::visiting::VisitGuard) on every exit, and nothing is
//! cached for a path whose expansion failed. Documents that finished before the
//! failure stay cached.

use std::sync::Arc;

use super::cache::ResolutionCache;
use super::path_resolver::PathResolver;
use super::visiting::VisitingSet;
use crate::core::{CanonicalPath, ResolutionError, ResolvedDocument};
use crate::markdown::{find_imports, split_document};
use crate::store::DocumentStore;

pub(crate) struct Expander<'a, S> {
    pub(crate) resolver: &'a PathResolver,
    pub(crate) store: &'a S,
    pub(crate) cache: &'a ResolutionCache,
}

impl<S: DocumentStore> Expander<'_, S> {
    pub(crate) fn resolve(
        &self,
        path: &CanonicalPath,
        visiting: &mut VisitingSet,
    ) -> Result<Arc<ResolvedDocument>, ResolutionError> {
        if let Some(cached) = self.cache.get(path) {
            tracing::debug!("Cache hit for {}", path);
            return Ok(cached);
        }

        let mut guard = visiting.enter(path)?;
        tracing::debug!("Expanding {}", path);
        let document = self.expand(path, &mut guard)?;
        drop(guard);

        Ok(self.cache.insert(path.clone(), document))
    }

    fn expand(
        &self,
        path: &CanonicalPath,
        visiting: &mut VisitingSet,
    ) -> Result<ResolvedDocument, ResolutionError> {
        let raw = self.store.read_text(path.as_path()).map_err(|source| {
            ResolutionError::ReadFailure {
                path: path.as_path().to_path_buf(),
                source,
            }
        })?;
        let parsed = split_document(&raw, path.as_path())?;

        let directives = find_imports(&parsed.body);
        if directives.is_empty() {
            return Ok(ResolvedDocument::new(path.clone(), parsed.metadata, parsed.body, Vec::new()));
        }

        let mut body = String::with_capacity(parsed.body.len());
        let mut imports = Vec::with_capacity(directives.len());
        let mut copied_to = 0;

        for directive in &directives {
            let target = self.resolver.resolve_import(self.store, path, directive.reference)?;
            tracing::trace!("Expanding @({}) in {} from {}", directive.reference, path, target);
            let imported = self.resolve(&target, visiting)?;

            body.push_str(&parsed.body[copied_to..directive.span.start]);
            body.push_str(imported.body());
            copied_to = directive.span.end;
            imports.push(target);
        }
        body.push_str(&parsed.body[copied_to..]);

        Ok(ResolvedDocument::new(path.clone(), parsed.metadata, body, imports))
    }
}
