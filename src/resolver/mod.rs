//! Document resolution and import expansion.
//!
//! [`Loader`] is the entry point. It owns a [`PathResolver`], a
//! [`DocumentStore`](crate::store::DocumentStore) and a cache, and turns a
//! logical name into a fully expanded [`ResolvedDocument`](crate::core::ResolvedDocument).
//!
//! # Resolution
//!
//! - Entry names are joined onto the root.
//! - `@(/x)` references are joined onto the root, `@(x)` onto the importing
//!   document's directory.
//! - `.` and `..` are removed lexically, then the default extension is added
//!   when no recognized one is present.
//! - Anything that ends up outside the root is a
//!   [`PathEscape`](crate::core::ResolutionError::PathEscape), whether or not it
//!   exists. So is an existing file whose real location, once symlinks are
//!   followed, is outside the real root.
//! - A name ending in a separator (`sub/`) names a directory, never a document.
//!
//! # Expansion
//!
//! Directives are replaced left to right with the imported document's expanded
//! body. Imported frontmatter is dropped. The same target may be imported any
//! number of times, from one document or many, and is only read once.
//!
//! # Cycle Detection
//!
//! Each top-level request carries a [`VisitingSet`] of the documents currently
//! being expanded. Re-entering one of them fails with
//! [`CircularImport`](crate::core::ResolutionError::CircularImport), whose chain
//! runs from the first occurrence back to itself:
//!
//! ```text
//! /docs/x.md -> /docs/y.md -> /docs/x.md
//! ```
//!
//! # Caching
//!
//! Finished documents are cached per canonical path for the loader's lifetime
//! and handed out as shared [`Arc`](std::sync::Arc)s. Nothing is cached for a
//! document whose expansion failed, so a later request retries it. Documents
//! that completed before the failure stay cached.

mod cache;
mod expander;
mod loader;
mod path_resolver;
mod visiting;

pub use cache::CacheStats;
pub use loader::Loader;
pub use path_resolver::PathResolver;
pub use visiting::{VisitGuard, VisitingSet};
