//! Memoized legacy text.
//!
//! Hosts often send the same component (a prefix, a formatted broadcast)
//! to many players. The cache remembers the legacy string rendered for each
//! component *instance*, so repeated sends skip flattening entirely.
//!
//! ## Keys and lifetimes
//!
//! Entries are keyed by [`Component::identity`], the address of the shared
//! node. An address is only unique while the node is alive, so every entry
//! keeps its own handle to the component: a cached node can't be freed, so
//! its address can't be reused by a different component.
//!
//! ## Bounding
//!
//! The cache holds at most `capacity` entries and evicts the oldest
//! insertion first. A capacity of zero disables caching.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chatforge_text::Component;

struct Entry {
    /// Keeps the node, and therefore its identity, alive.
    _component: Component,
    text: Arc<str>,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<usize, Entry>,
    /// Insertion order, oldest first.
    order: VecDeque<usize>,
}

/// A bounded, thread-safe map from component instances to rendered text.
pub struct LegacyTextCache {
    capacity: usize,
    state: Mutex<CacheState>,
}

impl LegacyTextCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry, releasing the components they kept alive.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.order.clear();
    }

    /// Returns the cached text for this exact component instance, or
    /// renders it with `render` and remembers the result.
    ///
    /// `render` runs without the lock held, so concurrent misses on the
    /// same component may both render; the first to finish wins.
    pub fn get_or_render(
        &self,
        component: &Component,
        render: impl FnOnce() -> String,
    ) -> Arc<str> {
        let key = component.identity();
        if let Some(entry) = self.lock().entries.get(&key) {
            tracing::trace!(key, "legacy text cache hit");
            return Arc::clone(&entry.text);
        }

        tracing::trace!(key, "legacy text cache miss");
        let text: Arc<str> = render().into();
        if self.capacity == 0 {
            return text;
        }

        let mut state = self.lock();
        if let Some(entry) = state.entries.get(&key) {
            return Arc::clone(&entry.text);
        }
        while state.order.len() >= self.capacity {
            let Some(oldest) = state.order.pop_front() else {
                break;
            };
            state.entries.remove(&oldest);
            tracing::debug!(key = oldest, capacity = self.capacity, "legacy text cache eviction");
        }
        state.order.push_back(key);
        state.entries.insert(
            key,
            Entry {
                _component: component.clone(),
                text: Arc::clone(&text),
            },
        );
        text
    }

    /// A poisoned lock only means another thread panicked mid-render; the
    /// map itself is never left half-updated.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for LegacyTextCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegacyTextCache")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}
