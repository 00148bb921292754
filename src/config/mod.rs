//! Loader configuration.
//!
//! A [`LoaderConfig`] names the sandbox root and the document extensions. It
//! can be built in code or read from a TOML file:
//!
//! ```toml
//! # docweave.toml
//! root = "~/agents"
//! default_extension = "md"
//! extensions = ["md", "markdown"]
//! ```
//!
//! The `root` value goes through `~` and `$VAR` expansion when it is loaded
//! from TOML. Relative roots are resolved against the current directory when
//! the [`Loader`](crate::resolver::Loader) is built.
//!
//! # Examples
//!
//! ```rust,no_run
//! use docweave::config::LoaderConfig;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = LoaderConfig::load_from(Path::new("docweave.toml"))?;
//! println!("Loading documents from {}", config.root.display());
//!
//! let inline = LoaderConfig::new("prompts").with_extensions(["md", "txt"]);
//! assert!(inline.is_recognized_extension("txt"));
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_EXTENSION;

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_extensions() -> Vec<String> {
    vec![DEFAULT_EXTENSION.to_string()]
}

/// Settings for a [`Loader`](crate::resolver::Loader).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Sandbox root. No resolved document may lie outside it.
    pub root: PathBuf,

    /// Extension appended to names and references that lack a recognized one.
    ///
    /// Written without the leading dot. A leading dot is tolerated and ignored.
    #[serde(default = "default_extension")]
    pub default_extension: String,

    /// Extensions treated as documents. The default extension always counts,
    /// whether or not it is listed here.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl LoaderConfig {
    /// Configuration for `root` with the default `.md` extension.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            default_extension: default_extension(),
            extensions: default_extensions(),
        }
    }

    /// Replace the default extension.
    #[must_use]
    pub fn with_default_extension(mut self, extension: impl Into<String>) -> Self {
        self.default_extension = extension.into();
        self
    }

    /// Replace the list of recognized extensions.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, `root` is missing, `root`
    /// references an undefined environment variable, or [`validate`](Self::validate)
    /// rejects the result.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).context("Failed to parse loader config")?;
        config.root = expand_root(&config.root)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or
    /// [`from_toml_str`](Self::from_toml_str) rejects its contents.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read loader config from {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid loader config in {}", path.display()))
    }

    /// Check that the extensions can be used for path normalization.
    ///
    /// # Errors
    ///
    /// Returns an error if the default extension is empty or any extension
    /// contains a path separator.
    pub fn validate(&self) -> Result<()> {
        if trim_dot(&self.default_extension).is_empty() {
            bail!("default_extension must not be empty");
        }
        for ext in std::iter::once(&self.default_extension).chain(&self.extensions) {
            if ext.contains('/') || ext.contains('\\') {
                bail!("extension '{ext}' must not contain a path separator");
            }
        }
        Ok(())
    }

    /// The default extension without a leading dot.
    #[must_use]
    pub fn normalized_default_extension(&self) -> &str {
        trim_dot(&self.default_extension)
    }

    /// Whether `ext` (without dot, case-insensitive) names a document type.
    #[must_use]
    pub fn is_recognized_extension(&self, ext: &str) -> bool {
        ext.eq_ignore_ascii_case(self.normalized_default_extension())
            || self.extensions.iter().any(|known| ext.eq_ignore_ascii_case(trim_dot(known)))
    }
}

fn trim_dot(ext: &str) -> &str {
    ext.strip_prefix('.').unwrap_or(ext)
}

fn expand_root(root: &Path) -> Result<PathBuf> {
    let raw = root.to_str().ok_or_else(|| anyhow!("root is not valid UTF-8: {}", root.display()))?;
    let expanded = shellexpand::full(raw)
        .map_err(|e| anyhow!("Failed to expand root '{raw}': {e}"))?;
    Ok(PathBuf::from(expanded.into_owned()))
}
