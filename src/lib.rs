//! joe - generate `.gitignore` files from the command line.
//!
//! joe keeps a local mirror of the github/gitignore template collection and
//! concatenates templates by name into a single `.gitignore` document.
//!
//! # Modules
//!
//! - [`cache`] - The on-disk template cache
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Runtime configuration passed into every operation
//! - [`error`] - Error types and result aliases
//! - [`generator`] - Document generation from requested names
//! - [`index`] - Case-insensitive name index over the cache
//! - [`remote`] - Fetching and extracting the template archive
//! - [`ui`] - Terminal output, spinners and test doubles
//!
//! # Example
//!
//! ```
//! use joe::cache::CacheStore;
//! use joe::generator::{generate, parse_request};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let store = CacheStore::new(temp.path());
//! store.write_template("Rust.gitignore", b"target/\n").unwrap();
//!
//! let result = generate(&parse_request("rust"), &store).unwrap();
//! assert!(result.document().contains("#### rust ####\ntarget/\n"));
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod index;
pub mod remote;
pub mod ui;

pub use error::{JoeError, Result};
