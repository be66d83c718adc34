//! Keeps the dashboard stores in sync with the vault.

use super::debounce::{Debouncer, DEFAULT_QUIET_PERIOD};
use super::scan::{project_active_projects, project_todos};
use crate::error::Result;
use crate::graph::{BacklinkIndex, BacklinkSource};
use crate::store::Store;
use crate::types::{ActiveProject, TodoItem};
use crate::vault::{Document, Vault};
use crate::watch::{ChangeFeed, VaultEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

// Upper bound on how long the loop blocks before rechecking shutdown.
const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

/// Documents and link counts from one pass over the source.
pub struct Scan<'a> {
    pub documents: Vec<Document>,
    pub backlinks: Box<dyn BacklinkSource + 'a>,
}

/// Where the dashboard reads documents and link counts from.
pub trait DocumentSource {
    /// Every markdown document with its parsed frontmatter.
    fn documents(&self) -> Result<Vec<Document>>;

    /// Backlink counts for the current vault contents.
    fn backlinks(&self) -> Result<Box<dyn BacklinkSource + '_>>;

    /// Both of the above. Override when one read can serve both.
    fn scan(&self) -> Result<Scan<'_>> {
        Ok(Scan {
            documents: self.documents()?,
            backlinks: self.backlinks()?,
        })
    }
}

impl DocumentSource for Vault {
    fn documents(&self) -> Result<Vec<Document>> {
        Vault::documents(self)
    }

    fn backlinks(&self) -> Result<Box<dyn BacklinkSource + '_>> {
        Ok(Box::new(BacklinkIndex::build(self)?))
    }

    /// Reads each file once for both frontmatter and links.
    fn scan(&self) -> Result<Scan<'_>> {
        let mut documents = Vec::new();
        let mut notes = Vec::new();
        self.scan_notes(|path, note| match note {
            Some(note) => {
                documents.push(Document::from_note(&note));
                notes.push(note);
            }
            None => documents.push(Document::new(path, None)),
        })?;

        Ok(Scan {
            documents,
            backlinks: Box::new(BacklinkIndex::from_notes(&notes)),
        })
    }
}

pub struct DashboardManager<S> {
    source: S,
    todos: Arc<Store<Vec<TodoItem>>>,
    projects: Arc<Store<Vec<ActiveProject>>>,
    quiet_period: Duration,
}

impl<S: DocumentSource> DashboardManager<S> {
    pub fn new(source: S) -> Self {
        Self::with_stores(source, Arc::default(), Arc::default())
    }

    /// Use stores owned by the caller, e.g. ones a UI already subscribes to.
    pub fn with_stores(
        source: S,
        todos: Arc<Store<Vec<TodoItem>>>,
        projects: Arc<Store<Vec<ActiveProject>>>,
    ) -> Self {
        Self {
            source,
            todos,
            projects,
            quiet_period: DEFAULT_QUIET_PERIOD,
        }
    }

    pub fn with_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = quiet_period;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn todos(&self) -> &Arc<Store<Vec<TodoItem>>> {
        &self.todos
    }

    pub fn projects(&self) -> &Arc<Store<Vec<ActiveProject>>> {
        &self.projects
    }

    /// Full rescan. Both stores are replaced wholesale.
    pub fn refresh(&self) -> Result<()> {
        let Scan {
            documents: docs,
            backlinks,
        } = self.source.scan()?;

        let todos = project_todos(&docs);
        let projects = project_active_projects(&docs, backlinks.as_ref());
        debug!(
            documents = docs.len(),
            todos = todos.len(),
            projects = projects.len(),
            "dashboard refreshed"
        );

        self.todos.set(todos);
        self.projects.set(projects);
        Ok(())
    }

    /// Refresh now, then again after each quiet period following changes on
    /// `feed`, until `shutdown` is set or the feed drops the listener.
    ///
    /// Refresh failures inside the loop are logged and the loop keeps going.
    pub fn run(&self, feed: &dyn ChangeFeed, shutdown: &AtomicBool) -> Result<()> {
        let (tx, rx) = mpsc::channel::<VaultEvent>();
        let id = feed.register(Box::new(move |event: &VaultEvent| {
            let _ = tx.send(event.clone());
        }))?;

        if let Err(e) = self.refresh() {
            feed.unregister(id);
            return Err(e);
        }

        let mut debouncer = Debouncer::new(self.quiet_period);
        loop {
            if shutdown.load(Ordering::SeqCst) {
                break;
            }

            let wait = debouncer
                .time_until_deadline(Instant::now())
                .map_or(SHUTDOWN_POLL, |d| d.min(SHUTDOWN_POLL));

            match rx.recv_timeout(wait) {
                Ok(event) => {
                    trace!(path = %event.path().display(), "change");
                    debouncer.notify(Instant::now());
                    while let Ok(event) = rx.try_recv() {
                        trace!(path = %event.path().display(), "change");
                        debouncer.notify(Instant::now());
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    debug!("change feed closed");
                    break;
                }
            }

            if debouncer.poll(Instant::now()) {
                if let Err(e) = self.refresh() {
                    warn!("dashboard refresh failed: {}", e);
                }
                debouncer.finish(Instant::now());
            }
        }

        feed.unregister(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Domain, NoteStatus, Quadrant};
    use crate::watch::ManualFeed;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write(dir: &TempDir, path: &str, content: &str) {
        let full = dir.path().join(path);
        std::fs::create_dir_all(full.parent().unwrap()).unwrap();
        std::fs::write(full, content).unwrap();
    }

    fn vault_fixture() -> (TempDir, Vault) {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "Business/Todos/2024-01-01 - Call.md",
            "---\ntype: todo\ndomain: business\nstatus: active\neisenhower: do-first\n---\n",
        );
        write(
            &dir,
            "Business/Ideas/2024-01-02 - Box.md",
            "---\ntype: idea\ndomain: business\nstatus: project\n---\n",
        );
        write(&dir, "Business/Logs/Kickoff.md", "Started [[2024-01-02 - Box]].\n");
        let vault = Vault::new(dir.path()).unwrap();
        (dir, vault)
    }

    #[test]
    fn test_refresh_populates_stores() {
        let (_dir, vault) = vault_fixture();
        let manager = DashboardManager::new(vault);
        manager.refresh().unwrap();

        let todos = manager.todos().get();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Call");
        assert_eq!(todos[0].quadrant, Quadrant::DoFirst);
        assert_eq!(todos[0].status, NoteStatus::Active);

        let projects = manager.projects().get();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].domain, Domain::Business);
        assert_eq!(projects[0].linked_count, 1);
    }

    #[test]
    fn test_vault_scan_matches_separate_reads() {
        let (_dir, vault) = vault_fixture();
        std::fs::write(vault.root.join("broken.md"), "---\n: [\n---\n").unwrap();

        let scan = vault.scan().unwrap();
        assert_eq!(scan.documents, vault.documents().unwrap());

        let separate = DocumentSource::backlinks(&vault).unwrap();
        for doc in &scan.documents {
            assert_eq!(
                scan.backlinks.backlink_count(&doc.path),
                separate.backlink_count(&doc.path)
            );
        }
        let project = Path::new("Business/Ideas/2024-01-02 - Box.md");
        assert_eq!(scan.backlinks.backlink_count(project), 1);
    }

    #[test]
    fn test_refresh_replaces_rather_than_appends() {
        let (dir, vault) = vault_fixture();
        let manager = DashboardManager::new(vault);
        manager.refresh().unwrap();
        std::fs::remove_file(dir.path().join("Business/Todos/2024-01-01 - Call.md")).unwrap();
        manager.refresh().unwrap();
        assert!(manager.todos().get().is_empty());
        assert_eq!(manager.todos().version(), 2);
    }

    struct FixedSource(Vec<Document>);

    impl DocumentSource for FixedSource {
        fn documents(&self) -> Result<Vec<Document>> {
            Ok(self.0.clone())
        }

        fn backlinks(&self) -> Result<Box<dyn BacklinkSource + '_>> {
            Ok(Box::new(|_: &Path| 0usize))
        }
    }

    #[test]
    fn test_custom_source_and_injected_stores() {
        let todos: Arc<Store<Vec<TodoItem>>> = Arc::default();
        let manager = DashboardManager::with_stores(
            FixedSource(vec![Document::new(PathBuf::from("x.md"), None)]),
            Arc::clone(&todos),
            Arc::default(),
        );
        manager.refresh().unwrap();
        assert_eq!(todos.version(), 1);
        assert!(todos.get().is_empty());
    }

    #[test]
    fn test_run_coalesces_bursts() {
        let (_dir, vault) = vault_fixture();
        let manager = DashboardManager::new(vault).with_quiet_period(Duration::from_millis(200));
        let feed = ManualFeed::new();
        let shutdown = AtomicBool::new(false);
        let snapshots = manager.todos().subscribe();

        std::thread::scope(|s| {
            let handle = s.spawn(|| manager.run(&feed, &shutdown));

            // Initial refresh.
            snapshots.recv_timeout(Duration::from_secs(5)).unwrap();
            assert_eq!(feed.listener_count(), 1);

            for _ in 0..5 {
                feed.emit(VaultEvent::Changed(PathBuf::from("Business/Todos/x.md")));
                std::thread::sleep(Duration::from_millis(5));
            }

            snapshots.recv_timeout(Duration::from_secs(5)).unwrap();
            assert!(snapshots.recv_timeout(Duration::from_millis(500)).is_err());

            shutdown.store(true, Ordering::SeqCst);
            handle.join().unwrap().unwrap();
        });

        assert_eq!(manager.todos().version(), 2);
        assert_eq!(feed.listener_count(), 0);
    }
}
