//! Error types and exit codes for Launchpad.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOTE_NOT_FOUND: i32 = 2;
    pub const NOTE_ALREADY_EXISTS: i32 = 3;
    pub const INVALID_INPUT: i32 = 4;
    pub const INVALID_FRONTMATTER: i32 = 5;
}

/// Main error type for Launchpad operations.
#[derive(Error, Debug)]
pub enum LaunchpadError {
    #[error("Note not found: {0}")]
    NoteNotFound(PathBuf),

    #[error("Note already exists: {0}")]
    NoteAlreadyExists(PathBuf),

    #[error("Invalid frontmatter in {path}: {message}")]
    InvalidFrontmatter { path: PathBuf, message: String },

    #[error("Vault not found at: {0}")]
    VaultNotFound(PathBuf),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Unknown note type '{note_type}' for domain '{domain}'")]
    UnknownNoteType { domain: String, note_type: String },

    #[error("Capture is at step '{actual}', expected '{expected}'")]
    InvalidStep { expected: String, actual: String },

    #[error("Invalid capture input: {0}")]
    InvalidCapture(String),

    #[error("Watch error: {0}")]
    Watch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("{0}")]
    Other(String),
}

impl LaunchpadError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchpadError::NoteNotFound(_) => exit_code::NOTE_NOT_FOUND,
            LaunchpadError::NoteAlreadyExists(_) => exit_code::NOTE_ALREADY_EXISTS,
            LaunchpadError::UnknownDomain(_)
            | LaunchpadError::UnknownNoteType { .. }
            | LaunchpadError::InvalidStep { .. }
            | LaunchpadError::InvalidCapture(_) => exit_code::INVALID_INPUT,
            LaunchpadError::InvalidFrontmatter { .. } => exit_code::INVALID_FRONTMATTER,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

impl From<notify::Error> for LaunchpadError {
    fn from(e: notify::Error) -> Self {
        LaunchpadError::Watch(e.to_string())
    }
}

/// Result type alias for Launchpad operations.
pub type Result<T> = std::result::Result<T, LaunchpadError>;
