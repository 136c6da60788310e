//! Overlay layers
//!
//! An overlay holds the writes made since it was opened. The engine stacks
//! overlays: the root at the bottom, one more per open transaction.
//!
//! # Design
//!
//! - FxHashMap: O(1) lookups, fast non-crypto hash
//! - Tombstones are stored like values so a layer can hide lower layers
//!   without touching them

use crate::entry::Entry;
use rustc_hash::FxHashMap;

/// One layer of recorded writes
///
/// Keys map to an [`Entry`]. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    /// HashMap with FxHash for O(1) lookups
    entries: FxHashMap<String, Entry>,
}

impl Overlay {
    /// Create a new empty overlay
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Create an overlay with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Get the entry recorded for `key` in this layer only
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Record `entry` for `key`, replacing any earlier entry in this layer
    pub fn insert(&mut self, key: impl Into<String>, entry: Entry) -> Option<Entry> {
        self.entries.insert(key.into(), entry)
    }

    /// Merge every entry of `upper` into this layer
    ///
    /// Entries from `upper` win over entries already present here.
    /// Tombstones are carried over as-is.
    pub fn absorb(&mut self, upper: Overlay) {
        self.entries.reserve(upper.entries.len());
        self.entries.extend(upper.entries);
    }

    /// Physically remove every tombstone from this layer
    ///
    /// Returns the number of entries removed.
    pub fn purge_tombstones(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_tombstone());
        before - self.entries.len()
    }

    /// Number of tombstones currently recorded in this layer
    pub fn tombstone_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_tombstone()).count()
    }

    /// Iterate over `(key, entry)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Get number of entries in this layer, tombstones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if layer is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
