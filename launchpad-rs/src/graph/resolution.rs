//! Link target resolution logic.
//!
//! Obsidian resolves links in this order:
//! 1. Exact vault path match (if target contains `/`)
//! 2. Filename match (case-insensitive)
//! 3. Alias match from frontmatter

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Lookup tables for resolving link targets to vault paths.
#[derive(Debug, Default, Clone)]
pub struct LinkResolver {
    /// Normalized vault path (no extension) -> note path.
    by_path: HashMap<String, PathBuf>,
    /// Normalized basename -> first note path with that basename.
    by_name: HashMap<String, PathBuf>,
    /// Normalized alias -> note path.
    by_alias: HashMap<String, PathBuf>,
}

impl LinkResolver {
    /// Register a note. Paths should be added in sorted order so that the
    /// first note with a given basename wins ties.
    pub fn add_note(&mut self, path: &Path, aliases: &[String]) {
        let path_key = normalize_key(&path.to_string_lossy());
        self.by_path.insert(path_key, path.to_path_buf());

        if let Some(stem) = path.file_stem() {
            self.by_name
                .entry(normalize_key(&stem.to_string_lossy()))
                .or_insert_with(|| path.to_path_buf());
        }

        for alias in aliases {
            self.by_alias
                .entry(normalize_key(alias))
                .or_insert_with(|| path.to_path_buf());
        }
    }

    /// Resolve a link target, returning `None` for broken links.
    pub fn resolve(&self, target: &str) -> Option<&PathBuf> {
        let target = target.split('#').next().unwrap_or(target).trim();
        if target.is_empty() {
            return None;
        }
        let key = normalize_key(target);

        if target.contains('/') {
            if let Some(path) = self.by_path.get(&key) {
                return Some(path);
            }
        }

        let name_key = key.rsplit('/').next().unwrap_or(&key);
        self.by_name
            .get(name_key)
            .or_else(|| self.by_alias.get(&key))
    }
}

/// Normalize a link target or path for lookup: NFC, lowercase, no `.md`,
/// forward slashes.
pub fn normalize_key(target: &str) -> String {
    let normalized: String = target.nfc().collect::<String>().replace('\\', "/").to_lowercase();
    normalized
        .strip_suffix(".md")
        .unwrap_or(&normalized)
        .to_string()
}
