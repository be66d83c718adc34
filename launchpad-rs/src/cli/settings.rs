//! Settings command implementation.

use crate::cli::output::Output;
use crate::config::Settings;
use crate::error::Result;
use crate::vault::Vault;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SettingsResponse<'a> {
    pub path: String,
    pub exists: bool,
    pub settings: &'a Settings,
}

pub fn run(vault: &Vault, settings: &Settings, output: &Output) -> Result<()> {
    let path = Settings::path(&vault.root);
    output.print(&SettingsResponse {
        path: path.to_string_lossy().to_string(),
        exists: path.is_file(),
        settings,
    })
}
