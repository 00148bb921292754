//! docweave - sandboxed markdown document loading
//!
//! Loads markdown documents from a root directory by logical name, splits off
//! their YAML frontmatter, and expands `@(reference)` import directives
//! recursively into a single body.
//!
//! # Architecture Overview
//!
//! A request for `"agents/reviewer"` flows through:
//!
//! 1. [`resolver::PathResolver`] - logical name to an absolute, sandbox-checked
//!    path (`<root>/agents/reviewer.md`)
//! 2. [`store::DocumentStore`] - raw text for that path
//! 3. [`markdown`] - frontmatter split and directive scan
//! 4. the expander inside [`resolver`] - each directive replaced by the body of
//!    the document it names, with cycle detection along the active chain
//! 5. the per-loader cache - every finished document kept as an
//!    `Arc<ResolvedDocument>`, so each file is read at most once
//!
//! ## Key Properties
//!
//! - **Sandboxed**: no name or reference can reach a file outside the root
//! - **Metadata stays local**: only the top-level document's frontmatter is
//!   returned; imported documents contribute their body only
//! - **Absent, not fatal**: [`Loader::get_document`] reports any failure as
//!   `None` plus a `WARN` log event
//!
//! # Document Format
//!
//! ```markdown
//! ---
//! name: reviewer
//! description: Reviews pull requests
//! ---
//! You are a careful reviewer.
//!
//! @(./checklists/review)
//! @(/shared/tone)
//! ```
//!
//! References starting with `/` are relative to the root; all others are
//! relative to the importing document's directory. A reference without a
//! recognized extension gets `.md` appended.
//!
//! # Example
//!
//! ```rust,no_run
//! use docweave::{Loader, LoaderConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let loader = Loader::new(LoaderConfig::new("prompts"))?;
//!
//! for name in loader.list_documents()? {
//!     if let Some(doc) = loader.get_document(&name) {
//!         println!("{name}: {} bytes", doc.body().len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Core Modules
//!
//! - [`config`] - loader configuration, optionally from TOML
//! - [`core`] - document types and the error taxonomy
//! - [`markdown`] - frontmatter and directive parsing
//! - [`resolver`] - path resolution, expansion, cycle detection, caching
//! - [`store`] - where document text comes from

pub mod config;
pub mod constants;
pub mod core;
pub mod markdown;
pub mod resolver;
pub mod store;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::LoaderConfig;
pub use crate::core::{CanonicalPath, ErrorKind, Metadata, ParsedDocument, ResolutionError, ResolvedDocument};
pub use resolver::{CacheStats, Loader};
pub use store::{DocumentStore, FsStore, MemoryStore};
