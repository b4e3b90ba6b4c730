//! Template archive extraction.

use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::cache::{CacheStore, TEMPLATE_SUFFIX};
use crate::error::{JoeError, Result};

/// Base file name an archive entry is cached under, if it is a template.
///
/// Archive entries are matched on a case-sensitive `.gitignore` suffix and
/// flattened to their last path component.
pub fn template_file_name(entry_name: &str) -> Option<&str> {
    if !entry_name.ends_with(TEMPLATE_SUFFIX) {
        return None;
    }
    entry_name.rsplit('/').next().filter(|base| !base.is_empty())
}

/// A zip archive of templates held in memory.
pub struct TemplateArchive<'a> {
    archive: ZipArchive<Cursor<&'a [u8]>>,
}

impl<'a> TemplateArchive<'a> {
    /// Open an archive from raw bytes.
    pub fn open(bytes: &'a [u8]) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(bytes))?;
        Ok(Self { archive })
    }

    /// Number of entries in the archive, templates or not.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Whether the archive has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Write every template entry into `store`.
    ///
    /// Non-template entries are skipped. Not transactional: on failure the
    /// store keeps whatever was written before the failing entry. Returns the
    /// number of templates written.
    pub fn extract_into(&mut self, store: &CacheStore) -> Result<usize> {
        store.ensure_dir()?;

        let mut written = 0;
        for index in 0..self.archive.len() {
            let mut entry = self.archive.by_index(index)?;
            if !entry.is_file() {
                continue;
            }

            let entry_name = entry.name().to_string();
            let Some(file_name) = template_file_name(&entry_name) else {
                continue;
            };

            // The declared size comes from the archive and is not trusted.
            let mut content = Vec::new();
            entry
                .read_to_end(&mut content)
                .map_err(|e| JoeError::Archive {
                    message: format!("{}: {}", entry_name, e),
                })?;

            store.write_template(file_name, &content)?;
            written += 1;
        }

        tracing::debug!(
            "Extracted {} templates from {} archive entries",
            written,
            self.archive.len()
        );
        Ok(written)
    }
}
