//! List command implementation.
//!
//! The `joe list` command shows every template name in the cache.

use serde::Serialize;

use crate::cache::CacheStore;
use crate::cli::args::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::index::list_names;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// JSON shape of `joe list --json`.
#[derive(Debug, Serialize)]
struct Listing<'a> {
    count: usize,
    templates: &'a [String],
}

/// The list command implementation.
pub struct ListCommand {
    store: CacheStore,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(config: &Config, args: ListArgs) -> Self {
        Self {
            store: config.cache_store(),
            args,
        }
    }

    /// All cached template names, sorted.
    fn sorted_names(&self) -> Result<Vec<String>> {
        let mut names = list_names(&self.store)?;
        names.sort();
        Ok(names)
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let names = self.sorted_names()?;

        if self.args.json {
            let listing = Listing {
                count: names.len(),
                templates: &names,
            };
            let json = serde_json::to_string_pretty(&listing).map_err(anyhow::Error::from)?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        ui.message(&format!("{} supported .gitignore files:", names.len()));
        ui.output(&names.join(", "));

        Ok(CommandResult::success())
    }
}
