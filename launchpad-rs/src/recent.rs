//! Recently opened files, most recent first.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentFileEntry {
    pub path: PathBuf,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// On-disk form of a recent-file entry, as kept in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecentFile {
    pub filepath: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentFiles {
    entries: Vec<RecentFileEntry>,
    max: usize,
}

impl RecentFiles {
    pub fn new(max: usize) -> Self {
        Self {
            entries: Vec::new(),
            max,
        }
    }

    pub fn entries(&self) -> &[RecentFileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record that `path` was opened at `timestamp`.
    ///
    /// A known path gets its timestamp refreshed. Otherwise the entry is added,
    /// evicting the oldest one when the list is full.
    pub fn record_open(&mut self, path: impl Into<PathBuf>, timestamp: i64) {
        let path = path.into();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.path == path) {
            entry.timestamp = timestamp;
        } else if self.max == 0 {
            return;
        } else if self.entries.len() >= self.max {
            if let Some(last) = self.entries.last_mut() {
                *last = RecentFileEntry { path, timestamp };
            }
        } else {
            self.entries.push(RecentFileEntry { path, timestamp });
        }
        self.sort();
    }

    pub fn remove(&mut self, path: &Path) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.path != path);
        self.entries.len() != before
    }

    /// Follow a file rename, keeping its position.
    pub fn rename(&mut self, from: &Path, to: impl Into<PathBuf>) -> bool {
        match self.entries.iter_mut().find(|e| e.path == from) {
            Some(entry) => {
                entry.path = to.into();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn to_stored(&self) -> Vec<StoredRecentFile> {
        self.entries
            .iter()
            .map(|e| StoredRecentFile {
                filepath: e.path.to_string_lossy().into_owned(),
                timestamp: e.timestamp,
            })
            .collect()
    }

    /// Rebuild from stored entries, dropping those `exists` rejects.
    pub fn from_stored(
        stored: &[StoredRecentFile],
        max: usize,
        exists: impl Fn(&Path) -> bool,
    ) -> Self {
        let mut recent = Self::new(max);
        recent.entries = stored
            .iter()
            .map(|s| RecentFileEntry {
                path: PathBuf::from(&s.filepath),
                timestamp: s.timestamp,
            })
            .filter(|e| exists(&e.path))
            .collect();
        recent.sort();
        recent.entries.truncate(max);
        recent
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }
}

/// Current time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
