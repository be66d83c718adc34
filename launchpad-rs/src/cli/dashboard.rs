//! Dashboard command implementation.

use crate::cli::output::Output;
use crate::config::Settings;
use crate::dashboard::DashboardManager;
use crate::error::Result;
use crate::recent::RecentFileEntry;
use crate::types::{ActiveProject, TodoItem};
use crate::vault::Vault;
use chrono::{Local, Timelike};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub greeting: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todos: Option<Vec<TodoItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_projects: Option<Vec<ActiveProject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_files: Option<Vec<RecentFileEntry>>,
}

impl DashboardResponse {
    /// Assemble the sections enabled in `settings`.
    pub fn build(
        settings: &Settings,
        todos: &[TodoItem],
        projects: &[ActiveProject],
        recent: &[RecentFileEntry],
    ) -> Self {
        Self {
            greeting: greeting(&settings.user_name, Local::now().hour()),
            todos: settings.show_todos.then(|| todos.to_vec()),
            active_projects: settings.show_active_projects.then(|| projects.to_vec()),
            recent_files: settings.show_recent_files.then(|| recent.to_vec()),
        }
    }
}

pub fn run(vault: &Vault, settings: &Settings, output: &Output) -> Result<()> {
    let manager = DashboardManager::new(vault.clone());
    manager.refresh()?;

    let recent = settings.recent_files(&vault.root);
    let response = DashboardResponse::build(
        settings,
        &manager.todos().get(),
        &manager.projects().get(),
        recent.entries(),
    );
    output.print(&response)
}

fn greeting(name: &str, hour: u32) -> String {
    let part = match hour {
        0..=11 => "morning",
        12..=17 => "afternoon",
        _ => "evening",
    };
    if name.trim().is_empty() {
        format!("Good {}", part)
    } else {
        format!("Good {}, {}", part, name.trim())
    }
}
