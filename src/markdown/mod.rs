//! Markdown document format handling.
//!
//! Documents are markdown files with an optional YAML frontmatter block and a
//! body that may pull in other documents through `@(reference)` directives:
//!
//! ```markdown
//! ---
//! name: reviewer
//! description: Reviews pull requests
//! tools:
//!   - read
//! ---
//! You are a careful reviewer.
//!
//! @(/shared/style-guide)
//! ```
//!
//! This module only deals with the text of a single document:
//!
//! - [`frontmatter`] splits metadata from body
//! - [`directives`] finds import directives in a body
//!
//! Resolving and expanding the directives is the job of
//! [`crate::resolver`].

pub mod directives;
pub mod frontmatter;

pub use directives::{ImportDirective, find_imports};
pub use frontmatter::{FrontmatterBlock, locate_frontmatter, split_document};

