//! Cache synchronization from the remote archive.

use crate::cache::CacheStore;
use crate::error::Result;

use super::archive::TemplateArchive;
use super::http::HttpFetcher;

/// Upstream archive of `.gitignore` templates.
pub const DEFAULT_SOURCE_URL: &str = "https://github.com/github/gitignore/archive/master.zip";

/// Outcome of a single sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Size of the downloaded archive in bytes.
    pub archive_bytes: usize,
    /// Number of template files written to the cache.
    pub templates_written: usize,
}

/// Outcome of a wipe-then-sync update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// Entries removed from the cache before repopulating it.
    pub entries_removed: usize,
    /// Result of the sync that followed the wipe.
    pub sync: SyncReport,
}

/// Pulls templates from a remote archive into a cache store.
pub struct RemoteSync {
    source_url: String,
    fetcher: HttpFetcher,
}

impl RemoteSync {
    /// Create a sync for the given archive URL.
    pub fn new(source_url: impl Into<String>, fetcher: HttpFetcher) -> Self {
        Self {
            source_url: source_url.into(),
            fetcher,
        }
    }

    /// The archive URL this sync pulls from.
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Fetch the archive and extract its templates into `destination`.
    ///
    /// Fails with a network error before touching the destination, or with
    /// an archive error, possibly after some templates were already written.
    pub fn sync(&self, destination: &CacheStore) -> Result<SyncReport> {
        tracing::debug!("Fetching template archive from {}", self.source_url);
        let bytes = self.fetcher.fetch(&self.source_url)?;

        let mut archive = TemplateArchive::open(&bytes)?;
        let templates_written = archive.extract_into(destination)?;

        Ok(SyncReport {
            archive_bytes: bytes.len(),
            templates_written,
        })
    }

    /// Wipe `store` and repopulate it from the remote archive.
    ///
    /// Stale templates are never mixed with new ones. If the sync fails after
    /// the wipe, the cache is left empty.
    pub fn update(&self, store: &CacheStore) -> Result<UpdateReport> {
        let entries_removed = store.wipe()?;
        let sync = self.sync(store)?;

        tracing::info!(
            "Cache at {} now holds {} templates",
            store.root().display(),
            sync.templates_written
        );

        Ok(UpdateReport {
            entries_removed,
            sync,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JoeError;
    use crate::remote::archive::tests::build_zip;
    use httpmock::prelude::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn sync_for(url: String) -> RemoteSync {
        RemoteSync::new(url, HttpFetcher::with_timeout(Duration::from_secs(10)))
    }

    #[test]
    fn default_source_is_github_gitignore() {
        assert!(DEFAULT_SOURCE_URL.starts_with("https://github.com/github/gitignore"));
        assert!(DEFAULT_SOURCE_URL.ends_with(".zip"));
    }

    #[test]
    fn sync_populates_store() {
        let server = MockServer::start();
        let body = build_zip(&[
            ("gitignore-main/Node.gitignore", "node_modules/\n"),
            ("gitignore-main/Python.gitignore", "*.pyc\n"),
            ("gitignore-main/LICENSE", "CC0"),
        ]);
        let body_len = body.len();
        server.mock(|when, then| {
            when.method(GET).path("/master.zip");
            then.status(200).body(body);
        });

        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path().join("cache"));
        let report = sync_for(server.url("/master.zip")).sync(&store).unwrap();

        assert_eq!(report.templates_written, 2);
        assert_eq!(report.archive_bytes, body_len);
        assert!(store.template_path("Node.gitignore").is_file());
        assert!(store.template_path("Python.gitignore").is_file());
        assert!(!store.template_path("LICENSE").exists());
    }

    #[test]
    fn update_replaces_rather_than_merges() {
        let server = MockServer::start();
        let body = build_zip(&[("gitignore-main/Rust.gitignore", "target/\n")]);
        server.mock(|when, then| {
            when.method(GET).path("/master.zip");
            then.status(200).body(body);
        });

        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());
        store.write_template("Stale.gitignore", b"old\n").unwrap();
        store.write_template("Rust.gitignore", b"old rust\n").unwrap();

        let report = sync_for(server.url("/master.zip")).update(&store).unwrap();

        assert_eq!(report.entries_removed, 2);
        assert_eq!(report.sync.templates_written, 1);
        assert!(!store.template_path("Stale.gitignore").exists());
        let rust = fs::read_to_string(store.template_path("Rust.gitignore")).unwrap();
        assert_eq!(rust, "target/\n");
    }

    #[test]
    fn update_with_unreachable_source_leaves_cache_empty() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());
        store.write_template("Go.gitignore", b"bin/\n").unwrap();

        let err = sync_for("http://127.0.0.1:1/master.zip".to_string())
            .update(&store)
            .unwrap_err();

        assert!(matches!(err, JoeError::Network { .. }));
        assert!(store.exists());
        assert_eq!(store.file_count().unwrap(), 0);
    }

    #[test]
    fn update_with_http_error_is_network_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/master.zip");
            then.status(503);
        });

        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());

        let err = sync_for(server.url("/master.zip"))
            .update(&store)
            .unwrap_err();
        assert!(matches!(err, JoeError::Network { .. }));
    }

    #[test]
    fn sync_with_garbage_payload_is_archive_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/master.zip");
            then.status(200).body("definitely not a zip file");
        });

        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());

        let err = sync_for(server.url("/master.zip")).sync(&store).unwrap_err();
        assert!(matches!(err, JoeError::Archive { .. }));
    }
}
