//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command receives the
//! resolved [`Config`](crate::config::Config) rather than reading the
//! environment itself.

pub mod completions;
pub mod dispatcher;
pub mod generate;
pub mod list;
pub mod update;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
