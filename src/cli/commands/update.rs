//! Update command implementation.
//!
//! The `joe update` command wipes the template cache and repopulates it
//! from the remote archive.

use crate::cache::CacheStore;
use crate::cli::args::UpdateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::remote::RemoteSync;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The update command implementation.
pub struct UpdateCommand {
    store: CacheStore,
    sync: RemoteSync,
}

impl UpdateCommand {
    /// Create a new update command.
    pub fn new(config: &Config, _args: UpdateArgs) -> Self {
        Self {
            store: config.cache_store(),
            sync: config.remote_sync(),
        }
    }
}

impl Command for UpdateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message("Updating gitignore files..");

        let mut spinner =
            ui.start_spinner(&format!("Downloading {}", self.sync.source_url()));

        match self.sync.update(&self.store) {
            Ok(report) => {
                spinner.finish_success(&format!(
                    "Cached {} templates in {}",
                    report.sync.templates_written,
                    self.store.root().display()
                ));
                if ui.output_mode().shows_details() {
                    ui.message(&format!(
                        "Removed {} old cache entries",
                        report.entries_removed
                    ));
                    ui.message(&format!(
                        "Downloaded {} bytes from {}",
                        report.sync.archive_bytes,
                        self.sync.source_url()
                    ));
                }
                Ok(CommandResult::success())
            }
            Err(e) => {
                spinner.finish_error("Update failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JoeError;
    use crate::remote::archive::tests::build_zip;
    use crate::ui::{MockUI, OutputMode, SpinnerStatus};
    use httpmock::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn update_reports_template_count() {
        let server = MockServer::start();
        let body = build_zip(&[
            ("gitignore-main/Node.gitignore", "node_modules/\n"),
            ("gitignore-main/Python.gitignore", "*.pyc\n"),
        ]);
        server.mock(|when, then| {
            when.method(GET).path("/master.zip");
            then.status(200).body(body);
        });

        let temp = TempDir::new().unwrap();
        let config = Config::default()
            .with_cache_dir(temp.path())
            .with_source_url(server.url("/master.zip"));
        let mut ui = MockUI::new();

        let result = UpdateCommand::new(&config, UpdateArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("Updating gitignore files.."));
        let results = ui.spinner_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, SpinnerStatus::Success);
        assert!(results[0].1.contains("Cached 2 templates"));
        assert!(!ui.has_message("Downloaded"));
    }

    #[test]
    fn verbose_update_shows_report_details() {
        let server = MockServer::start();
        let body = build_zip(&[("gitignore-main/Go.gitignore", "bin/\n")]);
        let body_len = body.len();
        server.mock(|when, then| {
            when.method(GET).path("/master.zip");
            then.status(200).body(body);
        });

        let temp = TempDir::new().unwrap();
        let config = Config::default()
            .with_cache_dir(temp.path())
            .with_source_url(server.url("/master.zip"));
        let store = config.cache_store();
        store.write_template("Old.gitignore", b"old\n").unwrap();
        store.write_template("Older.gitignore", b"older\n").unwrap();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        UpdateCommand::new(&config, UpdateArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("Removed 2 old cache entries"));
        assert!(ui.has_message(&format!("Downloaded {} bytes", body_len)));
    }

    #[test]
    fn update_failure_propagates_network_error() {
        let temp = TempDir::new().unwrap();
        let config = Config::default()
            .with_cache_dir(temp.path())
            .with_source_url("http://127.0.0.1:1/master.zip");
        config
            .cache_store()
            .write_template("Old.gitignore", b"old\n")
            .unwrap();
        let mut ui = MockUI::new();

        let err = UpdateCommand::new(&config, UpdateArgs::default())
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, JoeError::Network { .. }));
        assert_eq!(ui.spinner_results()[0].0, SpinnerStatus::Error);
        assert_eq!(config.cache_store().file_count().unwrap(), 0);
    }
}
