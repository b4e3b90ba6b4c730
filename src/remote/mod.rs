//! Remote template synchronization.
//!
//! This module fetches the upstream template archive over HTTP and extracts
//! its `.gitignore` entries into the local [`CacheStore`](crate::cache::CacheStore).

pub mod archive;
pub mod http;
pub mod sync;

pub use archive::{template_file_name, TemplateArchive};
pub use http::HttpFetcher;
pub use sync::{RemoteSync, SyncReport, UpdateReport, DEFAULT_SOURCE_URL};
