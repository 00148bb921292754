//! Document value types.
//!
//! A document moves through three shapes:
//!
//! 1. raw text, as returned by a [`DocumentStore`](crate::store::DocumentStore)
//! 2. [`ParsedDocument`] - frontmatter split from the body
//! 3. [`ResolvedDocument`] - body with every `@(...)` directive expanded
//!
//! Resolved documents are cached by [`CanonicalPath`] and handed out behind an
//! [`Arc`](std::sync::Arc), so two lookups of the same path share one value.

use serde::de::DeserializeOwned;
use std::fmt;
use std::path::{Path, PathBuf};

/// Frontmatter key/value data. Keys are unique, values may be any YAML shape.
pub type Metadata = serde_yaml::Mapping;

/// An absolute, normalized path that lies inside the loader's root and named
/// an existing regular file when it was produced.
///
/// Only the path resolver constructs these, so holding one means the sandbox
/// and existence checks have already passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalPath(PathBuf);

impl CanonicalPath {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self(path)
    }

    /// Borrow the underlying path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Directory containing this document, used as the base for relative imports.
    #[must_use]
    pub fn parent(&self) -> &Path {
        self.0.parent().unwrap_or(&self.0)
    }
}

impl AsRef<Path> for CanonicalPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A document split into frontmatter and body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedDocument {
    /// Parsed frontmatter, empty when the document has none.
    pub metadata: Metadata,
    /// Everything after the frontmatter block.
    pub body: String,
}

impl ParsedDocument {
    /// Build a parsed document from its parts.
    #[must_use]
    pub fn new(metadata: Metadata, body: String) -> Self {
        Self {
            metadata,
            body,
        }
    }
}

/// A parsed document whose body has had all imports expanded.
///
/// The metadata is exactly the metadata of the originating file. Imported
/// documents contribute their body text only.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDocument {
    path: CanonicalPath,
    metadata: Metadata,
    body: String,
    imports: Vec<CanonicalPath>,
}

impl ResolvedDocument {
    pub(crate) fn new(
        path: CanonicalPath,
        metadata: Metadata,
        body: String,
        imports: Vec<CanonicalPath>,
    ) -> Self {
        Self {
            path,
            metadata,
            body,
            imports,
        }
    }

    /// Canonical path of the file this document was loaded from.
    #[must_use]
    pub fn path(&self) -> &CanonicalPath {
        &self.path
    }

    /// Frontmatter of the originating file.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Fully expanded body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Documents imported directly by this one, in directive order.
    ///
    /// A document imported twice appears twice.
    #[must_use]
    pub fn imports(&self) -> &[CanonicalPath] {
        &self.imports
    }

    /// Look up a single frontmatter value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.metadata.get(key)
    }

    /// Deserialize the frontmatter into a caller-defined type.
    ///
    /// # Errors
    ///
    /// Returns the `serde_yaml` error if the mapping does not fit `T`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use docweave::resolver::Loader;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct AgentHeader {
    ///     name: String,
    ///     model: Option<String>,
    /// }
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let loader = Loader::from_root("agents")?;
    /// if let Some(doc) = loader.get_document("reviewer") {
    ///     let header: AgentHeader = doc.metadata_as()?;
    ///     println!("{} uses {:?}", header.name, header.model);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn metadata_as<T: DeserializeOwned>(&self) -> Result<T, serde_yaml::Error> {
        serde_yaml::from_value(serde_yaml::Value::Mapping(self.metadata.clone()))
    }

    /// Convert the frontmatter into JSON, the shape template engines expect.
    ///
    /// # Errors
    ///
    /// Fails when a key is not representable as a JSON object key (for example
    /// a YAML sequence used as a key).
    pub fn metadata_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(&self.metadata)
    }
}
