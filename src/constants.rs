//! Fixed markers and defaults shared across the loader.
//!
//! These values describe the on-disk document format and are not part of the
//! runtime configuration. The configurable counterparts (root directory and
//! extensions) live in [`crate::config::LoaderConfig`].

/// Line that opens and closes a frontmatter block.
///
/// The line must match exactly (a trailing `\r` from CRLF files is tolerated).
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Leading character that makes an import reference root-relative.
pub const ROOT_RELATIVE_MARKER: char = '/';

/// Extension appended to logical names and import references that lack one.
pub const DEFAULT_EXTENSION: &str = "md";

/// Separator used when rendering a circular import chain.
pub const CHAIN_SEPARATOR: &str = " -> ";
