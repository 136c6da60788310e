//! In-memory transactional store
//!
//! ## Layer Stack
//!
//! ```text
//! layers[depth]   <- active layer: set/delete write here, get reads here first
//! ...
//! layers[1]       <- outermost open transaction
//! layers[0]       <- root state, never popped
//! ```
//!
//! Invariant: `layers` is never empty, so `depth() == layers.len() - 1` is
//! always a valid index.
//!
//! ## Compaction
//!
//! Deletes are recorded as tombstones. Tombstones that reach the root are only
//! purged when a commit brings the depth back to 0: with nothing open above
//! the root, a tombstone and a missing entry are indistinguishable.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};
use txstore_core::{Entry, Overlay, Store};

/// Layered key/value store with nested transactions
///
/// # Thread Safety
///
/// Not synchronized. Mutating operations take `&mut self`; wrap the whole
/// store in a lock if it must be shared.
///
/// # Example
///
/// ```
/// use txstore_engine::{Store, TxStore};
///
/// let mut store = TxStore::new();
/// store.set("a", "1");
/// store.begin();
/// store.set("a", "2");
/// assert_eq!(store.get("a"), Some("2"));
/// store.rollback();
/// assert_eq!(store.get("a"), Some("1"));
/// ```
#[derive(Debug, Clone)]
pub struct TxStore {
    /// Overlay stack, index = nesting depth
    layers: Vec<Overlay>,
}

impl TxStore {
    /// Create an empty store with no open transaction
    pub fn new() -> Self {
        Self {
            layers: vec![Overlay::new()],
        }
    }

    /// Create a store whose root layer is pre-allocated for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: vec![Overlay::with_capacity(capacity)],
        }
    }

    /// Number of currently open transactions
    #[inline]
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// Number of entries physically stored in the root layer
    ///
    /// Tombstones are included, so this can exceed the number of live keys
    /// until the next compaction.
    pub fn root_len(&self) -> usize {
        self.layers[0].len()
    }

    fn active_mut(&mut self) -> &mut Overlay {
        let depth = self.depth();
        &mut self.layers[depth]
    }

    /// Topmost entry recorded for `key`, tombstones included
    fn resolve(&self, key: &str) -> Option<&Entry> {
        self.layers.iter().rev().find_map(|layer| layer.get(key))
    }

    fn compact_root(&mut self) {
        let purged = self.layers[0].purge_tombstones();
        if purged > 0 {
            debug!(purged, remaining = self.layers[0].len(), "compacted root layer");
        }
    }
}

impl Default for TxStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for TxStore {
    fn set(&mut self, key: &str, value: &str) {
        trace!(key, value, depth = self.depth(), "set");
        self.active_mut().insert(key, Entry::from(value));
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.resolve(key).and_then(Entry::as_value)
    }

    fn delete(&mut self, key: &str) {
        trace!(key, depth = self.depth(), "delete");
        self.active_mut().insert(key, Entry::Tombstone);
    }

    fn count(&self, value: &str) -> usize {
        // Replay layers bottom-up: a later write to a key always replaces
        // whatever an earlier layer decided about it.
        let mut matching: FxHashSet<&str> = FxHashSet::default();
        for layer in &self.layers {
            for (key, entry) in layer.iter() {
                matching.remove(key);
                if entry.matches(value) {
                    matching.insert(key);
                }
            }
        }
        matching.len()
    }

    fn begin(&mut self) {
        self.layers.push(Overlay::new());
        debug!(depth = self.depth(), "transaction opened");
    }

    fn commit(&mut self) {
        if self.depth() == 0 {
            return;
        }
        if let Some(top) = self.layers.pop() {
            let merged = top.len();
            let tombstones = top.tombstone_count();
            self.active_mut().absorb(top);
            debug!(depth = self.depth(), merged, tombstones, "transaction committed");
        }
        if self.depth() == 0 {
            self.compact_root();
        }
    }

    fn rollback(&mut self) {
        if self.depth() == 0 {
            return;
        }
        if let Some(top) = self.layers.pop() {
            debug!(depth = self.depth(), discarded = top.len(), "transaction rolled back");
        }
    }

    fn depth(&self) -> usize {
        TxStore::depth(self)
    }
}
