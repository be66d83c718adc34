//! Global config and per-vault settings.

use crate::error::{LaunchpadError, Result};
use crate::recent::{RecentFiles, StoredRecentFile};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Folder inside the vault holding Launchpad's own files.
pub const SETTINGS_DIR: &str = ".launchpad";
pub const SETTINGS_FILE: &str = "settings.toml";

/// User-level configuration, read from `<config dir>/launchpad/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vault used when `--vault` is not given.
    pub vault: Option<PathBuf>,
}

impl Config {
    /// Default location of the global config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("launchpad").join("config.toml"))
    }

    /// Load from the default location; a missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            LaunchpadError::ConfigError(format!("{}: {}", path.display(), e))
        })
    }

    /// Vault to operate on: the explicit path, else the configured one, else
    /// the current directory.
    pub fn resolve_vault_path(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.vault {
            return Ok(expand_home(path));
        }
        Ok(std::env::current_dir()?)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionHighlight {
    #[default]
    Default,
    AccentColor,
}

/// Per-vault settings, stored at `<vault>/.launchpad/settings.toml`.
///
/// Missing keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub user_name: String,

    pub max_results: usize,
    /// Milliseconds to wait after typing before searching.
    pub search_delay: u64,
    pub markdown_only: bool,
    pub unresolved_links: bool,
    pub show_path: bool,
    pub show_shortcuts: bool,

    pub show_todos: bool,
    pub show_active_projects: bool,
    pub show_recent_files: bool,
    pub max_recent_files: usize,
    pub store_recent_files: bool,

    // Host tab behavior; carried for embedders, unused by the CLI.
    pub replace_new_tabs: bool,
    pub new_tab_on_start: bool,
    pub close_previous_session_tabs: bool,

    pub selection_highlight: SelectionHighlight,

    /// Kept last so it serializes as a trailing array of tables.
    pub recent_files: Vec<StoredRecentFile>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_name: "Justin".to_string(),
            max_results: 5,
            search_delay: 0,
            markdown_only: false,
            unresolved_links: false,
            show_path: true,
            show_shortcuts: true,
            show_todos: true,
            show_active_projects: true,
            show_recent_files: true,
            max_recent_files: 5,
            store_recent_files: true,
            replace_new_tabs: true,
            new_tab_on_start: false,
            close_previous_session_tabs: false,
            selection_highlight: SelectionHighlight::Default,
            recent_files: Vec::new(),
        }
    }
}

impl Settings {
    pub fn path(vault_root: &Path) -> PathBuf {
        vault_root.join(SETTINGS_DIR).join(SETTINGS_FILE)
    }

    /// Load the vault's settings; a missing file yields the defaults.
    pub fn load(vault_root: &Path) -> Result<Self> {
        let path = Self::path(vault_root);
        if !path.is_file() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| {
            LaunchpadError::ConfigError(format!("{}: {}", path.display(), e))
        })
    }

    pub fn save(&self, vault_root: &Path) -> Result<()> {
        let path = Self::path(vault_root);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, toml::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Recent files from the settings, minus those no longer in the vault.
    pub fn recent_files(&self, vault_root: &Path) -> RecentFiles {
        if !self.store_recent_files {
            return RecentFiles::new(self.max_recent_files);
        }
        RecentFiles::from_stored(&self.recent_files, self.max_recent_files, |p| {
            vault_root.join(p).is_file()
        })
    }

    /// Write `recent` back into the record. A no-op unless persistence is on.
    pub fn store_recent(&mut self, recent: &RecentFiles) {
        if self.store_recent_files {
            self.recent_files = recent.to_stored();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_use_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.max_results, 5);
        assert!(settings.show_todos);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(SETTINGS_DIR)).unwrap();
        std::fs::write(
            Settings::path(dir.path()),
            "user_name = \"Sam\"\nshow_todos = false\nselection_highlight = \"accent-color\"\n",
        )
        .unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.user_name, "Sam");
        assert!(!settings.show_todos);
        assert_eq!(settings.selection_highlight, SelectionHighlight::AccentColor);
        assert_eq!(settings.max_recent_files, 5);
    }

    #[test]
    fn test_invalid_settings_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(SETTINGS_DIR)).unwrap();
        std::fs::write(Settings::path(dir.path()), "max_results = \"many\"\n").unwrap();
        assert!(matches!(
            Settings::load(dir.path()),
            Err(LaunchpadError::ConfigError(_))
        ));
    }

    #[test]
    fn test_save_and_reload_recent_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.md"), "").unwrap();

        let mut recent = RecentFiles::new(5);
        recent.record_open("a.md", 100);
        recent.record_open("deleted.md", 200);

        let mut settings = Settings::default();
        settings.store_recent(&recent);
        settings.save(dir.path()).unwrap();

        let loaded = Settings::load(dir.path()).unwrap();
        assert_eq!(loaded.recent_files.len(), 2);
        let recent = loaded.recent_files(dir.path());
        assert_eq!(recent.len(), 1);
        assert_eq!(recent.entries()[0].path, PathBuf::from("a.md"));
    }

    #[test]
    fn test_store_recent_disabled() {
        let mut settings = Settings {
            store_recent_files: false,
            ..Settings::default()
        };
        let mut recent = RecentFiles::new(5);
        recent.record_open("a.md", 1);
        settings.store_recent(&recent);
        assert!(settings.recent_files.is_empty());
    }

    #[test]
    fn test_config_resolution_order() {
        let config = Config {
            vault: Some(PathBuf::from("/configured")),
        };
        assert_eq!(
            config.resolve_vault_path(Some(Path::new("/explicit"))).unwrap(),
            PathBuf::from("/explicit")
        );
        assert_eq!(
            config.resolve_vault_path(None).unwrap(),
            PathBuf::from("/configured")
        );
        assert_eq!(
            Config::default().resolve_vault_path(None).unwrap(),
            std::env::current_dir().unwrap()
        );
    }

    #[test]
    fn test_config_load_from() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        std::fs::write(&path, "vault = \"/notes\"\n").unwrap();
        assert_eq!(
            Config::load_from(&path).unwrap().vault,
            Some(PathBuf::from("/notes"))
        );
    }
}
