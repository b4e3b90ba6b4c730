//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

const BANNER: &str = r"
 ▄▄▄▄▄▄▄▄▄▄▄  ▄▄▄▄▄▄▄▄▄▄▄  ▄▄▄▄▄▄▄▄▄▄▄
▐░░░░░░░░░░░▌▐░░░░░░░░░░░▌▐░░░░░░░░░░░▌
 ▀▀▀▀▀█░█▀▀▀ ▐░█▀▀▀▀▀▀▀█░▌▐░█▀▀▀▀▀▀▀▀▀
      ▐░▌    ▐░▌       ▐░▌▐░▌
      ▐░▌    ▐░▌       ▐░▌▐░█▄▄▄▄▄▄▄▄▄
      ▐░▌    ▐░▌       ▐░▌▐░░░░░░░░░░░▌
      ▐░▌    ▐░▌       ▐░▌▐░█▀▀▀▀▀▀▀▀▀
      ▐░▌    ▐░▌       ▐░▌▐░▌
 ▄▄▄▄▄█░▌    ▐░█▄▄▄▄▄▄▄█░▌▐░█▄▄▄▄▄▄▄▄▄
▐░░░░░░░▌    ▐░░░░░░░░░░░▌▐░░░░░░░░░░░▌
 ▀▀▀▀▀▀▀      ▀▀▀▀▀▀▀▀▀▀▀  ▀▀▀▀▀▀▀▀▀▀▀
";

/// joe - generate .gitignore files from the command line.
#[derive(Debug, Parser)]
#[command(name = "joe")]
#[command(author, version, about, long_about = None)]
#[command(before_help = BANNER)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Template cache directory (defaults to ~/.joe-data)
    #[arg(long, global = true, env = "JOE_DATA_DIR", value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// URL of the zip archive to download templates from
    #[arg(long, global = true, env = "JOE_SOURCE_URL", value_name = "URL")]
    pub source_url: Option<String>,

    /// HTTP timeout in seconds when downloading templates
    #[arg(long, global = true, env = "JOE_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all available files
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Update all available gitignore files
    #[command(visible_alias = "u")]
    Update(UpdateArgs),

    /// Generate gitignore files
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `update` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct UpdateArgs {}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenerateArgs {
    /// Comma-separated template names (e.g. "rust,macos")
    #[arg(value_name = "NAMES")]
    pub names: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
