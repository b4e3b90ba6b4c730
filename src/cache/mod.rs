//! Local template cache.
//!
//! The cache is a single directory holding one `<name>.gitignore` file per
//! template. It is wiped and repopulated as a whole on every update and is
//! read-only in between.

pub mod store;

pub use store::CacheStore;

/// Suffix every cached template file carries (matched case-sensitively).
pub const TEMPLATE_SUFFIX: &str = ".gitignore";

/// Name of the cache directory under the user's home.
pub const DATA_DIR_NAME: &str = ".joe-data";

/// Get the default cache directory.
pub fn default_cache_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cache_dir_valid() {
        let path = default_cache_dir();
        assert!(path.ends_with(".joe-data"));
    }

    #[test]
    fn template_suffix_is_gitignore() {
        assert_eq!(TEMPLATE_SUFFIX, ".gitignore");
    }
}
