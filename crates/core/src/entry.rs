//! Recorded writes
//!
//! A layer records either a value or a tombstone for a key. Tombstones shadow
//! lower layers exactly like values do, but they never match a value query and
//! are never handed back to callers.

/// A single write recorded in an [`Overlay`](crate::Overlay).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entry {
    /// The key holds this value.
    Value(String),
    /// The key was deleted in this layer.
    Tombstone,
}

impl Entry {
    /// Returns the value, or `None` for a tombstone.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Entry::Value(v) => Some(v.as_str()),
            Entry::Tombstone => None,
        }
    }

    /// Check if this entry is a tombstone
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Entry::Tombstone)
    }

    /// Check if this entry holds exactly `value`.
    ///
    /// Tombstones never match, including against the empty string.
    pub fn matches(&self, value: &str) -> bool {
        self.as_value() == Some(value)
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Entry::Value(value)
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Entry::Value(value.to_string())
    }
}
