//! Vault representation and operations.

use crate::error::{LaunchpadError, Result};
use crate::metadata::NoteMetadata;
use crate::note::{basename, Note};
use glob::glob;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A scanned markdown file with its (optional) typed frontmatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the vault root.
    pub path: PathBuf,
    /// Filename without extension.
    pub basename: String,
    /// `None` when the file has no frontmatter or it failed to parse.
    pub metadata: Option<NoteMetadata>,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, metadata: Option<NoteMetadata>) -> Self {
        let path = path.into();
        let basename = basename(&path).to_string();
        Self {
            path,
            basename,
            metadata,
        }
    }

    /// Document for a loaded note; malformed frontmatter leaves `metadata` empty.
    pub fn from_note(note: &Note) -> Self {
        let metadata = note.metadata().unwrap_or_else(|e| {
            warn!(path = %note.path.display(), "skipping frontmatter: {}", e);
            None
        });
        Self::new(note.path.clone(), metadata)
    }
}

/// Represents an Obsidian-style vault rooted at a directory.
#[derive(Debug, Clone)]
pub struct Vault {
    /// Root path of the vault.
    pub root: PathBuf,
}

impl Vault {
    /// Open an existing vault directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(LaunchpadError::VaultNotFound(root));
        }

        Ok(Self { root })
    }

    /// Get the full path to a vault-relative path.
    pub fn note_path(&self, relative_path: &Path) -> PathBuf {
        self.root.join(relative_path)
    }

    /// Check if a note exists.
    pub fn note_exists(&self, relative_path: &Path) -> bool {
        self.note_path(relative_path).is_file()
    }

    /// Load a note from the vault.
    pub fn load_note(&self, relative_path: &Path) -> Result<Note> {
        if !self.note_exists(relative_path) {
            return Err(LaunchpadError::NoteNotFound(relative_path.to_path_buf()));
        }
        Note::load(&self.root, relative_path)
    }

    /// Save a note to the vault.
    pub fn save_note(&self, note: &Note) -> Result<()> {
        note.save(&self.root)
    }

    /// Create a new note; fails if one already exists at the path.
    pub fn create_note(&self, relative_path: &Path, content: &str) -> Result<Note> {
        if self.note_exists(relative_path) {
            return Err(LaunchpadError::NoteAlreadyExists(relative_path.to_path_buf()));
        }

        let note = Note::new(relative_path, content);
        self.save_note(&note)?;
        Ok(note)
    }

    /// Make sure a vault folder and all of its parents exist.
    pub fn ensure_folder(&self, relative_folder: &Path) -> Result<()> {
        let full = self.note_path(relative_folder);
        if !full.is_dir() {
            debug!(folder = %relative_folder.display(), "creating folder");
            std::fs::create_dir_all(full)?;
        }
        Ok(())
    }

    /// List all markdown files in the vault, sorted by path.
    pub fn list_notes(&self) -> Result<Vec<PathBuf>> {
        self.list_matching("**/*.md")
    }

    /// List every non-hidden file in the vault, sorted by path.
    pub fn list_files(&self) -> Result<Vec<PathBuf>> {
        self.list_matching("**/*")
    }

    fn list_matching(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let full_pattern = self.root.join(pattern);
        let pattern_str = full_pattern.to_string_lossy();

        let mut paths = Vec::new();

        for entry in glob(&pattern_str)? {
            match entry {
                Ok(path) => {
                    if !path.is_file() {
                        continue;
                    }
                    if let Ok(relative) = path.strip_prefix(&self.root) {
                        if !is_hidden(relative) {
                            paths.push(relative.to_path_buf());
                        }
                    }
                }
                Err(e) => warn!("glob error: {}", e),
            }
        }

        paths.sort();
        Ok(paths)
    }

    /// Read every markdown file along with its typed frontmatter.
    ///
    /// Unreadable files and malformed frontmatter never abort the scan; the
    /// document is still returned, just without metadata.
    pub fn documents(&self) -> Result<Vec<Document>> {
        let mut docs = Vec::new();

        self.scan_notes(|path, note| {
            docs.push(match note {
                Some(note) => Document::from_note(&note),
                None => Document::new(path, None),
            })
        })?;
        Ok(docs)
    }

    /// Load every markdown file once, in path order. Files that cannot be read
    /// are logged and visited with `None`.
    pub fn scan_notes(&self, mut visit: impl FnMut(PathBuf, Option<Note>)) -> Result<()> {
        for path in self.list_notes()? {
            match self.load_note(&path) {
                Ok(note) => visit(path, Some(note)),
                Err(e) => {
                    warn!(path = %path.display(), "skipping unreadable note: {}", e);
                    visit(path, None);
                }
            }
        }
        Ok(())
    }
}

/// Whether any component of a vault-relative path starts with a dot.
pub fn is_hidden(relative: &Path) -> bool {
    relative
        .components()
        .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
}
