//! Transaction control handlers.

use txstore_core::Store;

use crate::Output;

/// Handle BEGIN command.
pub fn txn_begin<S: Store>(store: &mut S) -> Output {
    store.begin();
    Output::Unit
}

/// Handle COMMIT command.
pub fn txn_commit<S: Store>(store: &mut S) -> Output {
    store.commit();
    Output::Unit
}

/// Handle ROLLBACK command.
pub fn txn_rollback<S: Store>(store: &mut S) -> Output {
    store.rollback();
    Output::Unit
}

/// Handle INFO command.
pub fn txn_info<S: Store>(store: &S) -> Output {
    Output::Info {
        depth: store.depth(),
    }
}
