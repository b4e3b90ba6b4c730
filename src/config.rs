//! Runtime configuration.
//!
//! joe has no config file. Everything a core operation needs is carried in
//! an explicit [`Config`] value, resolved from command-line flags which in
//! turn fall back to environment variables:
//!
//! | Flag | Environment | Default |
//! |------|-------------|---------|
//! | `--cache-dir` | `JOE_DATA_DIR` | `~/.joe-data` |
//! | `--source-url` | `JOE_SOURCE_URL` | GitHub's gitignore archive |
//! | `--timeout` | `JOE_TIMEOUT` | 30 seconds |
//!
//! # Example
//!
//! ```
//! use joe::config::Config;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let config = Config::default().with_cache_dir(temp.path());
//!
//! assert_eq!(config.cache_store().root(), temp.path());
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::cache::{default_cache_dir, CacheStore};
use crate::cli::Cli;
use crate::remote::{HttpFetcher, RemoteSync, DEFAULT_SOURCE_URL};

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root directory of the template cache.
    pub cache_dir: PathBuf,
    /// URL of the template archive.
    pub source_url: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Resolve configuration from parsed CLI arguments.
    ///
    /// Environment fallbacks are applied by clap while parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();

        Self {
            cache_dir: cli.cache_dir.clone().unwrap_or(defaults.cache_dir),
            source_url: cli.source_url.clone().unwrap_or(defaults.source_url),
            timeout: cli
                .timeout
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }

    /// Override the cache directory.
    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }

    /// Override the archive URL.
    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = source_url.into();
        self
    }

    /// The cache store rooted at the configured directory.
    pub fn cache_store(&self) -> CacheStore {
        CacheStore::new(&self.cache_dir)
    }

    /// A remote sync for the configured archive URL.
    pub fn remote_sync(&self) -> RemoteSync {
        RemoteSync::new(&self.source_url, HttpFetcher::with_timeout(self.timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn default_uses_home_cache_and_github_source() {
        let config = Config::default();
        assert!(config.cache_dir.ends_with(".joe-data"));
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn from_cli_applies_flags() {
        let cli = Cli::parse_from([
            "joe",
            "--cache-dir",
            "/tmp/joe-cache",
            "--source-url",
            "http://localhost:8080/archive.zip",
            "--timeout",
            "5",
            "ls",
        ]);

        let config = Config::from_cli(&cli);
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/joe-cache"));
        assert_eq!(config.source_url, "http://localhost:8080/archive.zip");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn builders_override_fields() {
        let config = Config::default()
            .with_cache_dir("/data/templates")
            .with_source_url("http://mirror/archive.zip");

        assert_eq!(config.cache_store().root(), PathBuf::from("/data/templates"));
        assert_eq!(config.remote_sync().source_url(), "http://mirror/archive.zip");
    }
}
