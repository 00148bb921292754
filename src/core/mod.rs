//! Core types for docweave
//!
//! This module holds the value types that flow through the resolver and the
//! error taxonomy every resolution step reports through.
//!
//! - [`CanonicalPath`] - a sandbox-checked path to an existing document
//! - [`ParsedDocument`] - frontmatter split from body
//! - [`ResolvedDocument`] - body with all imports expanded
//! - [`ResolutionError`] / [`ErrorKind`] - what went wrong and where

pub mod document;
pub mod error;

pub use document::{CanonicalPath, Metadata, ParsedDocument, ResolvedDocument};
pub use error::{ErrorKind, ResolutionError};
