//! Vault change notifications.
//!
//! A [`ChangeFeed`] delivers [`VaultEvent`]s to registered listeners.
//! [`VaultWatcher`] sources them from the filesystem; [`ManualFeed`] lets a
//! host (or a test) push them by hand.

use crate::error::Result;
use crate::vault::is_hidden;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, trace, warn};

/// Events emitted for markdown files in the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultEvent {
    /// A markdown file was created or modified.
    Changed(PathBuf),
    /// A markdown file was deleted.
    Removed(PathBuf),
}

impl VaultEvent {
    pub fn path(&self) -> &Path {
        match self {
            VaultEvent::Changed(path) | VaultEvent::Removed(path) => path,
        }
    }
}

/// Handle returned by [`ChangeFeed::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// Callback invoked for each event. May run on a background thread.
pub type Listener = Box<dyn Fn(&VaultEvent) + Send + Sync + 'static>;

/// Source of vault change events.
pub trait ChangeFeed {
    fn register(&self, listener: Listener) -> Result<ListenerId>;

    /// Remove a listener. Unknown ids are ignored.
    fn unregister(&self, id: ListenerId);
}

#[derive(Default)]
struct Listeners {
    next_id: AtomicU64,
    entries: Mutex<BTreeMap<ListenerId, Listener>>,
}

impl Listeners {
    fn add(&self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, listener);
        id
    }

    fn remove(&self, id: ListenerId) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&id);
    }

    fn dispatch(&self, event: &VaultEvent) {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        for listener in entries.values() {
            listener(event);
        }
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Watches a vault directory and forwards markdown changes to listeners.
pub struct VaultWatcher {
    _watcher: RecommendedWatcher,
    listeners: Arc<Listeners>,
}

impl VaultWatcher {
    /// Start watching `vault_root` recursively.
    ///
    /// Event paths are reported relative to the vault root.
    pub fn start(vault_root: &Path) -> Result<Self> {
        let listeners = Arc::new(Listeners::default());
        let root = vault_root
            .canonicalize()
            .unwrap_or_else(|_| vault_root.to_path_buf());

        let dispatch_to = Arc::clone(&listeners);
        let event_root = root.clone();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            match res {
                Ok(event) => {
                    for vault_event in translate(&event_root, &event) {
                        trace!(?vault_event, "vault event");
                        dispatch_to.dispatch(&vault_event);
                    }
                }
                Err(e) => warn!("watch error: {}", e),
            }
        })?;

        watcher.watch(&root, RecursiveMode::Recursive)?;
        debug!(root = %root.display(), "watching vault");

        Ok(Self {
            _watcher: watcher,
            listeners,
        })
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ChangeFeed for VaultWatcher {
    fn register(&self, listener: Listener) -> Result<ListenerId> {
        Ok(self.listeners.add(listener))
    }

    fn unregister(&self, id: ListenerId) {
        self.listeners.remove(id);
    }
}

/// Map a raw notify event to vault events: markdown only, hidden paths skipped.
fn translate(root: &Path, event: &Event) -> Vec<VaultEvent> {
    let mut out = Vec::new();
    for path in &event.paths {
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        if is_hidden(relative) {
            continue;
        }
        let relative = relative.to_path_buf();
        match event.kind {
            EventKind::Create(_) | EventKind::Modify(_) => out.push(VaultEvent::Changed(relative)),
            EventKind::Remove(_) => out.push(VaultEvent::Removed(relative)),
            _ => {}
        }
    }
    out
}

/// In-memory feed driven by [`ManualFeed::emit`].
#[derive(Clone, Default)]
pub struct ManualFeed {
    listeners: Arc<Listeners>,
}

impl ManualFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to every registered listener on the calling thread.
    pub fn emit(&self, event: VaultEvent) {
        self.listeners.dispatch(&event);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ChangeFeed for ManualFeed {
    fn register(&self, listener: Listener) -> Result<ListenerId> {
        Ok(self.listeners.add(listener))
    }

    fn unregister(&self, id: ListenerId) {
        self.listeners.remove(id);
    }
}
