//! Temporary document roots for tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures::DocumentFixture;
use crate::config::LoaderConfig;
use crate::resolver::Loader;
use crate::store::FsStore;

/// A temporary directory with a `docs/` root inside it.
///
/// The root is a subdirectory so tests can place files next to it, outside
/// the sandbox.
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestEnvironment {
    /// Create an empty environment.
    pub fn new() -> Result<Self> {
        super::init_test_logging();

        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join("docs");
        fs::create_dir_all(&root)?;

        Ok(Self {
            temp_dir,
            root,
        })
    }

    /// Write `content` to `relative` below the root, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf> {
        write_file(&self.root.join(relative), content)
    }

    /// Write `content` to `relative` below the temporary directory, outside
    /// the root.
    pub fn write_outside(&self, relative: &str, content: &str) -> Result<PathBuf> {
        write_file(&self.temp_dir.path().join(relative), content)
    }

    /// Write a fixture below the root.
    pub fn add(&self, fixture: &DocumentFixture) -> Result<PathBuf> {
        self.write(&fixture.path, &fixture.render())
    }

    /// Absolute path of `relative` below the root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn config(&self) -> LoaderConfig {
        LoaderConfig::new(&self.root)
    }

    /// A filesystem loader over the root.
    pub fn loader(&self) -> Result<Loader<FsStore>> {
        Loader::new(self.config())
    }
}

fn write_file(path: &Path, content: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path.to_path_buf())
}
