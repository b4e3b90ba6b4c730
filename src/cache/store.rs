//! Cache storage implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Storage for cached templates.
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Root directory for cache.
    root: PathBuf,
}

impl CacheStore {
    /// Create a new cache store.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the cache directory has been created by a sync.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Ensure the cache directory exists.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Get the path a template file with the given base name is stored at.
    pub fn template_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Write a template file into the cache, overwriting any existing file
    /// with the same name.
    ///
    /// `file_name` must be a bare file name; anything that would escape the
    /// cache root is rejected.
    pub fn write_template(&self, file_name: &str, content: &[u8]) -> Result<PathBuf> {
        let is_bare = Path::new(file_name)
            .file_name()
            .is_some_and(|base| base == file_name);
        if !is_bare {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a bare template file name: {:?}", file_name),
            )
            .into());
        }

        self.ensure_dir()?;
        let path = self.template_path(file_name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Remove everything inside the cache directory.
    ///
    /// The directory itself is kept. A missing directory counts as already
    /// empty. Returns the number of top-level entries removed. On error the
    /// cache is left in an indeterminate state; no partial recovery is made.
    pub fn wipe(&self) -> Result<usize> {
        if !self.root.exists() {
            return Ok(0);
        }

        let mut removed = 0;
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();

            if entry.file_type()?.is_dir() {
                fs::remove_dir_all(&path)?;
            } else {
                fs::remove_file(&path)?;
            }
            removed += 1;
        }

        tracing::debug!("Wiped {} entries from {}", removed, self.root.display());
        Ok(removed)
    }

    /// Count regular files currently in the cache root.
    pub fn file_count(&self) -> Result<usize> {
        if !self.exists() {
            return Ok(0);
        }

        let mut count = 0;
        for entry in fs::read_dir(&self.root)? {
            if entry?.file_type()?.is_file() {
                count += 1;
            }
        }
        Ok(count)
    }
}
