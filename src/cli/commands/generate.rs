//! Generate command implementation.
//!
//! The `joe generate` command prints a combined `.gitignore` for a
//! comma-separated list of template names.

use crate::cache::CacheStore;
use crate::cli::args::GenerateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::generator::{generate, parse_request, GenerationResult};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The generate command implementation.
pub struct GenerateCommand {
    store: CacheStore,
    args: GenerateArgs,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(config: &Config, args: GenerateArgs) -> Self {
        Self {
            store: config.cache_store(),
            args,
        }
    }
}

impl Command for GenerateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let names = parse_request(&self.args.names);

        match generate(&names, &self.store)? {
            GenerationResult::Document(document) => {
                if !document.is_empty() {
                    ui.output(&document);
                }
            }
            GenerationResult::Unresolved(unresolved) => {
                ui.warning(&format!("Unsupported files: {}", unresolved.join(", ")));
                ui.show_hint("Run `joe ls` to see list of available gitignores.");
            }
        }

        // Unresolved names are a normal outcome, not a failure
        Ok(CommandResult::success())
    }
}
