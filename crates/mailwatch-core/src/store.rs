// ── Owned view state ──
//
// Each controller receives its state object at construction and owns it
// exclusively. Updates go through `watch` channels: readers take cheap
// `Arc` snapshots or subscribe for push-based change notification. No
// update ever holds a lock across an `.await`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

/// An ordered, observable collection of records.
///
/// Starts `Empty`; the first [`replace`](Self::replace) moves it to
/// `Loaded`, and it stays `Loaded` from then on, even when a later load
/// yields zero rows.
pub struct Collection<T: Clone + Send + Sync + 'static> {
    items: watch::Sender<Arc<Vec<T>>>,
    loaded: AtomicBool,
}

impl<T: Clone + Send + Sync + 'static> Collection<T> {
    pub fn new() -> Self {
        let (items, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            items,
            loaded: AtomicBool::new(false),
        }
    }

    /// A collection that is already `Loaded` with `items`.
    pub fn with_items(items: Vec<T>) -> Self {
        let (items, _) = watch::channel(Arc::new(items));
        Self {
            items,
            loaded: AtomicBool::new(true),
        }
    }

    /// Get the current snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        self.items.borrow().clone()
    }

    /// Subscribe to snapshot changes via a `watch::Receiver`.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<T>>> {
        self.items.subscribe()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Whether a load has ever completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    /// Swap in a freshly loaded set of records.
    pub fn replace(&self, items: Vec<T>) {
        self.items.send_replace(Arc::new(items));
        self.loaded.store(true, Ordering::Release);
    }

    /// Mutate the records in place.
    ///
    /// Copies the underlying vec only if a reader still holds the previous
    /// snapshot.
    pub fn update(&self, f: impl FnOnce(&mut Vec<T>)) {
        // `send_modify` updates unconditionally, even with zero receivers.
        self.items.send_modify(|items| f(Arc::make_mut(items)));
    }
}

impl<T: Clone + Send + Sync + 'static> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A single observable value, such as the monitoring status.
pub struct StatusCell<T: Clone + Send + Sync + 'static> {
    value: watch::Sender<T>,
}

impl<T: Clone + Send + Sync + 'static> StatusCell<T> {
    pub fn new(initial: T) -> Self {
        let (value, _) = watch::channel(initial);
        Self { value }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    pub fn set(&self, value: T) {
        self.value.send_replace(value);
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.value.send_modify(f);
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.value.subscribe()
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Default for StatusCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
