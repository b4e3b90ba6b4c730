//! Template name index.
//!
//! The index maps a lowercased template name to the file holding it. It is
//! rebuilt from a full scan of the cache every time it is needed and never
//! persisted.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::cache::{CacheStore, TEMPLATE_SUFFIX};
use crate::error::{JoeError, Result};

/// In-memory mapping from template name to cached file.
#[derive(Debug, Clone, Default)]
pub struct TemplateIndex {
    entries: HashMap<String, PathBuf>,
}

impl TemplateIndex {
    /// Scan the cache recursively and index every template file.
    ///
    /// Fails with [`JoeError::CacheNotFound`] when the cache directory is
    /// missing or its root cannot be read. Unreadable nested entries are
    /// skipped. When two files map to the same key, the one scanned last wins.
    pub fn build(store: &CacheStore) -> Result<Self> {
        let root = store.root();
        if !store.exists() {
            return Err(JoeError::CacheNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut entries = HashMap::new();
        for entry in WalkDir::new(root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    tracing::debug!("Cannot read cache root {}: {}", root.display(), e);
                    return Err(JoeError::CacheNotFound {
                        path: root.to_path_buf(),
                    });
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable cache entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(key) = entry.file_name().to_str().and_then(template_key) else {
                continue;
            };
            entries.insert(key, entry.into_path());
        }

        tracing::debug!("Indexed {} templates under {}", entries.len(), root.display());
        Ok(Self { entries })
    }

    /// Look up a template by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(&name.to_lowercase()).map(PathBuf::as_path)
    }

    /// Whether a template with this name is indexed, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All indexed names, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Number of indexed templates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Index key for a cached file name: suffix removed, then lowercased.
///
/// Returns `None` for files that are not templates, and for a bare
/// `.gitignore` which would produce an empty name.
pub fn template_key(file_name: &str) -> Option<String> {
    file_name
        .strip_suffix(TEMPLATE_SUFFIX)
        .filter(|stem| !stem.is_empty())
        .map(str::to_lowercase)
}

/// List the names of all cached templates, unsorted.
pub fn list_names(store: &CacheStore) -> Result<Vec<String>> {
    Ok(TemplateIndex::build(store)?.names())
}
