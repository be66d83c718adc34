//! Recent files command implementation.

use crate::cli::args::{RecentArgs, RecentCommands};
use crate::cli::output::Output;
use crate::config::Settings;
use crate::error::{LaunchpadError, Result};
use crate::recent::{now_millis, RecentFileEntry};
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RecentResponse {
    pub stored: bool,
    pub files: Vec<RecentFileEntry>,
}

pub fn run(vault: &Vault, settings: &Settings, args: &RecentArgs, output: &Output) -> Result<()> {
    let mut settings = settings.clone();
    let mut recent = settings.recent_files(&vault.root);

    match &args.command {
        None => {}
        Some(RecentCommands::Open { path }) => {
            if !vault.note_path(path).is_file() {
                return Err(LaunchpadError::NoteNotFound(path.clone()));
            }
            recent.record_open(path.clone(), now_millis());
        }
        Some(RecentCommands::Remove { path }) => {
            if !recent.remove(path) {
                output.info(&format!("{} was not in the recent list", path.display()));
            }
        }
        Some(RecentCommands::Clear) => recent.clear(),
    }

    if args.command.is_some() {
        if settings.store_recent_files {
            settings.store_recent(&recent);
            settings.save(&vault.root)?;
        } else {
            output.info("Recent files are not stored (store_recent_files = false)");
        }
    }

    output.print(&RecentResponse {
        stored: settings.store_recent_files,
        files: recent.entries().to_vec(),
    })
}
