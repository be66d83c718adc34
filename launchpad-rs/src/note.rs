//! Note representation and operations.

use crate::error::Result;
use crate::metadata::NoteMetadata;
use crate::parser::{self, parse_links, split_frontmatter, LinkRef};
use regex::Regex;
use serde_yaml::Value as YamlValue;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// "2024-01-31 - " style prefix written by the note creator.
static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}\s*-\s*").unwrap());

/// A markdown note in the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Path relative to vault root (e.g., "Business/Todos/2024-01-31 - Call Bob.md").
    pub path: PathBuf,

    /// Raw content of the note.
    pub content: String,
}

impl Note {
    /// Create a new note from path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Load a note from disk.
    pub fn load(vault_root: &Path, relative_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(vault_root.join(relative_path))?;
        Ok(Self {
            path: relative_path.to_path_buf(),
            content,
        })
    }

    /// Save the note to disk, creating parent folders as needed.
    pub fn save(&self, vault_root: &Path) -> Result<()> {
        let full_path = vault_root.join(&self.path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&full_path, &self.content)?;
        Ok(())
    }

    /// The filename without the .md extension.
    pub fn name(&self) -> &str {
        basename(&self.path)
    }

    /// Display title: the basename without a leading `YYYY-MM-DD - ` prefix.
    pub fn title(&self) -> String {
        display_title(self.name())
    }

    /// Parse frontmatter as YAML value.
    pub fn frontmatter(&self) -> Result<Option<YamlValue>> {
        parser::parse_frontmatter_with_path(&self.content, &self.path)
    }

    /// Typed frontmatter; `Ok(None)` when absent or not a mapping.
    pub fn metadata(&self) -> Result<Option<NoteMetadata>> {
        Ok(self
            .frontmatter()?
            .as_ref()
            .and_then(NoteMetadata::from_yaml))
    }

    /// Content without frontmatter.
    pub fn body(&self) -> &str {
        split_frontmatter(&self.content).body
    }

    /// All references to other notes, including those in frontmatter values.
    pub fn links(&self) -> Vec<LinkRef> {
        let split = split_frontmatter(&self.content);
        let mut links = split.yaml.map(parse_links).unwrap_or_default();
        links.extend(parse_links(split.body));
        links
    }

    /// Replace content, keeping the path.
    pub fn with_content(&self, new_content: impl Into<String>) -> Self {
        Self {
            path: self.path.clone(),
            content: new_content.into(),
        }
    }
}

/// File stem of a vault path.
pub fn basename(path: &Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("")
}

/// Strip the creator's date prefix from a basename.
pub fn display_title(name: &str) -> String {
    DATE_PREFIX.replace(name, "").into_owned()
}
