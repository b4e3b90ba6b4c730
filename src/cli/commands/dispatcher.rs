//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use clap::CommandFactory;

use crate::cli::args::{Cli, Commands};
use crate::config::Config;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: Config,
}

impl CommandDispatcher {
    /// Create a new dispatcher with the resolved configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration commands run with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(&self.config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Update(args)) => {
                let cmd = super::update::UpdateCommand::new(&self.config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Generate(args)) => {
                let cmd = super::generate::GenerateCommand::new(&self.config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Only global flags were given
                ui.output(&Cli::command().render_help().to_string());
                Ok(CommandResult::success())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_keeps_config() {
        let config = Config::default().with_cache_dir("/test");
        let dispatcher = CommandDispatcher::new(config.clone());
        assert_eq!(dispatcher.config(), &config);
    }

    #[test]
    fn dispatches_generate_against_configured_cache() {
        let temp = TempDir::new().unwrap();
        let config = Config::default().with_cache_dir(temp.path());
        config
            .cache_store()
            .write_template("Rust.gitignore", b"target/\n")
            .unwrap();

        let cli = Cli::parse_from(["joe", "g", "rust"]);
        let mut ui = MockUI::new();
        let result = CommandDispatcher::new(config)
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.outputs()[0].contains("#### rust ####\ntarget/\n"));
    }

    #[test]
    fn no_subcommand_prints_help() {
        let cli = Cli::parse_from(["joe", "--debug"]);
        let mut ui = MockUI::new();
        let result = CommandDispatcher::new(Config::default())
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.outputs()[0].contains("Usage"));
    }
}
