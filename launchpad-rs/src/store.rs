//! Observable snapshot stores.
//!
//! A store holds one `Arc` snapshot. `set` swaps the whole value, so a reader
//! sees either the previous or the new snapshot, never a mix.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, RwLock};

#[derive(Debug)]
struct Inner<T> {
    value: Arc<T>,
    version: u64,
}

/// Shared, replace-on-write value with change subscriptions.
#[derive(Debug)]
pub struct Store<T> {
    inner: RwLock<Inner<T>>,
    subscribers: Mutex<Vec<Sender<Arc<T>>>>,
}

impl<T> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: RwLock::new(Inner {
                value: Arc::new(value),
                version: 0,
            }),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Current snapshot.
    pub fn get(&self) -> Arc<T> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&inner.value)
    }

    /// Number of times the store has been replaced.
    pub fn version(&self) -> u64 {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).version
    }

    /// Replace the snapshot and notify subscribers.
    pub fn set(&self, value: T) {
        let value = Arc::new(value);
        {
            let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
            inner.value = Arc::clone(&value);
            inner.version += 1;
        }
        self.publish(value);
    }

    /// Receive every snapshot set after this call.
    ///
    /// Dropping the receiver unsubscribes on the next publish.
    pub fn subscribe(&self) -> Receiver<Arc<T>> {
        let (tx, rx) = mpsc::channel();
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(tx);
        rx
    }

    fn publish(&self, value: Arc<T>) {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        subscribers.retain(|tx| tx.send(Arc::clone(&value)).is_ok());
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_snapshot() {
        let store = Store::new(vec![1, 2]);
        let before = store.get();
        store.set(vec![3]);
        assert_eq!(*before, vec![1, 2]);
        assert_eq!(*store.get(), vec![3]);
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_subscribers_receive_snapshots() {
        let store: Store<Vec<&str>> = Store::default();
        let rx = store.subscribe();
        store.set(vec!["a"]);
        store.set(vec!["b"]);
        assert_eq!(*rx.recv().unwrap(), vec!["a"]);
        assert_eq!(*rx.recv().unwrap(), vec!["b"]);
    }

    #[test]
    fn test_dropped_subscriber_pruned() {
        let store = Store::new(0);
        let rx = store.subscribe();
        drop(rx);
        store.set(1);
        assert!(store.subscribers.lock().unwrap().is_empty());
    }
}
