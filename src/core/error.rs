//! Error handling for document resolution
//!
//! Every failure the resolver can hit is a variant of [`ResolutionError`].
//! Errors are raised deep inside the recursive import expansion and travel
//! upward unchanged; only the [`Loader`](crate::resolver::Loader) façade turns
//! them into a logged warning and an absent result.
//!
//! # Error Categories
//!
//! - **Path errors**: [`ResolutionError::NotFound`], [`ResolutionError::PathEscape`],
//!   [`ResolutionError::EmptyImportPath`]
//! - **Content errors**: [`ResolutionError::ParseFailure`], [`ResolutionError::ReadFailure`]
//! - **Graph errors**: [`ResolutionError::CircularImport`]
//!
//! None of these are transient: the loader never retries within a request.
//! Nothing is cached for a failed document, so a later request reads it again.
//!
//! # Examples
//!
//! ```rust
//! use docweave::core::{ErrorKind, ResolutionError};
//! use std::path::PathBuf;
//!
//! let err = ResolutionError::CircularImport {
//!     chain: vec![PathBuf::from("/r/a.md"), PathBuf::from("/r/b.md"), PathBuf::from("/r/a.md")],
//! };
//! assert_eq!(err.kind(), ErrorKind::CircularImport);
//! assert!(err.to_string().contains("/r/a.md -> /r/b.md -> /r/a.md"));
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::CHAIN_SEPARATOR;

/// Errors raised while resolving a document and its imports.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The resolved path does not exist or is not a regular file.
    ///
    /// A path that cannot be stat'ed (for example a dangling symlink) is
    /// reported here as well.
    #[error("Document not found: {path}")]
    NotFound {
        /// The normalized path that was looked up
        path: PathBuf,
    },

    /// The reference would resolve to a location outside the sandbox root,
    /// either lexically or through a symlink.
    #[error("Path '{reference}'{} escapes the document root {root}", format_origin(.from.as_deref()))]
    PathEscape {
        /// The logical name or import reference as written
        reference: String,
        /// The document containing the `@(...)` directive, `None` for a
        /// top-level name
        from: Option<PathBuf>,
        /// The sandbox root
        root: PathBuf,
    },

    /// An `@()` directive with nothing but whitespace inside.
    #[error("Empty import path in {from}")]
    EmptyImportPath {
        /// The document containing the empty directive
        from: PathBuf,
    },

    /// The frontmatter block is unterminated or is not a valid YAML mapping.
    #[error("Invalid frontmatter in {path}: {reason}")]
    ParseFailure {
        /// The document whose frontmatter failed to parse
        path: PathBuf,
        /// What was wrong with the block
        reason: String,
    },

    /// The store reported the file as present but could not read it.
    #[error("Failed to read {path}")]
    ReadFailure {
        /// The document that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A document was reached again while it was still being expanded.
    ///
    /// `chain` runs from the first occurrence of the repeated path through the
    /// repeated path itself, so `a -> b -> a` is stored as three entries.
    #[error("Circular import detected: {}", format_chain(.chain))]
    CircularImport {
        /// Paths in traversal order, first and last entries equal
        chain: Vec<PathBuf>,
    },
}

/// Coarse classification of a [`ResolutionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ResolutionError::NotFound`]
    NotFound,
    /// See [`ResolutionError::PathEscape`]
    PathEscape,
    /// See [`ResolutionError::EmptyImportPath`]
    EmptyImportPath,
    /// See [`ResolutionError::ParseFailure`]
    ParseFailure,
    /// See [`ResolutionError::ReadFailure`]
    ReadFailure,
    /// See [`ResolutionError::CircularImport`]
    CircularImport,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotFound => "not_found",
            Self::PathEscape => "path_escape",
            Self::EmptyImportPath => "empty_import_path",
            Self::ParseFailure => "parse_failure",
            Self::ReadFailure => "read_failure",
            Self::CircularImport => "circular_import",
        };
        f.write_str(name)
    }
}

impl ResolutionError {
    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound {
                ..
            } => ErrorKind::NotFound,
            Self::PathEscape {
                ..
            } => ErrorKind::PathEscape,
            Self::EmptyImportPath {
                ..
            } => ErrorKind::EmptyImportPath,
            Self::ParseFailure {
                ..
            } => ErrorKind::ParseFailure,
            Self::ReadFailure {
                ..
            } => ErrorKind::ReadFailure,
            Self::CircularImport {
                ..
            } => ErrorKind::CircularImport,
        }
    }

    /// Returns the path most closely associated with the failure, if any.
    ///
    /// For a circular import this is the path that closed the cycle.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound {
                path,
            }
            | Self::ParseFailure {
                path,
                ..
            }
            | Self::ReadFailure {
                path,
                ..
            } => Some(path),
            Self::EmptyImportPath {
                from,
            } => Some(from),
            Self::CircularImport {
                chain,
            } => chain.last().map(PathBuf::as_path),
            Self::PathEscape {
                from,
                ..
            } => from.as_deref(),
        }
    }

    pub(crate) fn parse_failure(path: &Path, reason: impl Into<String>) -> Self {
        Self::ParseFailure {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

fn format_origin(from: Option<&Path>) -> String {
    from.map(|path| format!(" in {}", path.display())).unwrap_or_default()
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(CHAIN_SEPARATOR)
}
