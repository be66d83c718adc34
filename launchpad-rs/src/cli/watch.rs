//! Watch command implementation.

use crate::cli::args::WatchArgs;
use crate::cli::dashboard::DashboardResponse;
use crate::cli::output::Output;
use crate::config::Settings;
use crate::dashboard::DashboardManager;
use crate::error::Result;
use crate::vault::Vault;
use crate::watch::VaultWatcher;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Print a dashboard snapshot after every debounced rescan. Runs until killed.
pub fn run(vault: &Vault, settings: &Settings, args: &WatchArgs, output: Output) -> Result<()> {
    let watcher = VaultWatcher::start(&vault.root)?;
    let manager = DashboardManager::new(vault.clone())
        .with_quiet_period(Duration::from_millis(args.debounce_ms));

    // Projects are stored after todos, so a projects update means both are fresh.
    let updates = manager.projects().subscribe();
    let todos = Arc::clone(manager.todos());
    let settings = settings.clone();
    let recent = settings.recent_files(&vault.root);

    output.info(&format!("Watching {}", vault.root.display()));
    let printer = std::thread::spawn(move || {
        for projects in updates {
            let response =
                DashboardResponse::build(&settings, &todos.get(), &projects, recent.entries());
            if let Err(e) = output.print_compact(&response) {
                warn!("failed to print snapshot: {}", e);
            }
        }
    });

    let shutdown = AtomicBool::new(false);
    let result = manager.run(&watcher, &shutdown);

    drop(manager);
    let _ = printer.join();
    result
}
