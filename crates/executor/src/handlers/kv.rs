//! Key/value command handlers.

use txstore_core::Store;

use crate::Output;

/// Handle SET command.
pub fn kv_set<S: Store>(store: &mut S, key: &str, value: &str) -> Output {
    store.set(key, value);
    Output::Unit
}

/// Handle GET command.
pub fn kv_get<S: Store>(store: &S, key: &str) -> Output {
    Output::Value(store.get(key).map(str::to_string))
}

/// Handle DELETE command.
pub fn kv_delete<S: Store>(store: &mut S, key: &str) -> Output {
    store.delete(key);
    Output::Unit
}

/// Handle COUNT command.
pub fn kv_count<S: Store>(store: &S, value: &str) -> Output {
    Output::Count(store.count(value))
}
