//! Shared test utilities.

#![allow(dead_code)]

pub use txstore::prelude::*;

/// Create an empty store.
pub fn create_store() -> TxStore {
    TxStore::new()
}

/// Create an executor over an empty store.
pub fn create_executor() -> Executor {
    Executor::new(TxStore::new())
}

/// Run one line through the executor, expecting it to parse.
pub fn run(executor: &mut Executor, line: &str) -> Output {
    executor
        .execute_line(line)
        .expect("line should parse")
        .expect("line should not be blank")
}

/// Every `get` result for `keys` and `count` result for `values`.
///
/// Two stores that agree on this are observationally identical for those
/// keys and values.
pub fn observe(store: &TxStore, keys: &[&str], values: &[&str]) -> (Vec<Option<String>>, Vec<usize>) {
    let gets = keys
        .iter()
        .map(|k| store.get(k).map(str::to_string))
        .collect();
    let counts = values.iter().map(|v| store.count(v)).collect();
    (gets, counts)
}
