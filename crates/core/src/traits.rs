//! The store contract
//!
//! [`Store`] is what drivers program against. The engine crate provides the
//! in-memory implementation.

/// A key/value store with nested transactions
///
/// Every operation addresses the innermost open transaction, or the root
/// state when none is open. None of the operations fail: unknown keys read as
/// absent, and closing a transaction when none is open does nothing.
///
/// ## Example
///
/// ```ignore
/// store.set("a", "1");
/// store.begin();
/// store.set("a", "2");
/// assert_eq!(store.get("a"), Some("2"));
/// store.rollback();
/// assert_eq!(store.get("a"), Some("1"));
/// ```
///
/// # Thread Safety
///
/// Implementations are single-threaded. Callers that need sharing must
/// serialize access to the whole store themselves.
pub trait Store {
    /// Store `value` for `key`
    fn set(&mut self, key: &str, value: &str);

    /// Get the current value for `key`
    ///
    /// Returns `None` if the key was never set or is deleted.
    fn get(&self, key: &str) -> Option<&str>;

    /// Delete `key`
    fn delete(&mut self, key: &str);

    /// Count the keys whose current value is `value`
    fn count(&self, value: &str) -> usize;

    /// Open a new (nested) transaction
    fn begin(&mut self);

    /// Fold the innermost transaction into its parent
    ///
    /// No-op when no transaction is open.
    fn commit(&mut self);

    /// Discard the innermost transaction
    ///
    /// No-op when no transaction is open.
    fn rollback(&mut self);

    /// Number of currently open transactions
    fn depth(&self) -> usize;
}
