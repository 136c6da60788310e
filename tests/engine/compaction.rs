//! Tombstone Compaction
//!
//! Tombstones in the root are purged exactly when a commit brings the depth
//! back to 0. Purging must never change what callers observe.

use crate::common::*;

#[test]
fn repeated_delete_commit_is_transparent() {
    let mut store = create_store();
    store.set("a", "x");
    store.set("b", "x");
    store.set("c", "y");
    let keys = ["a", "b", "c", "d"];
    let values = ["x", "y"];

    for round in 0..100 {
        let key = keys[round % keys.len()];
        let before = observe(&store, &keys, &values);

        store.begin();
        store.delete(key);
        store.commit();

        let after = observe(&store, &keys, &values);
        for (i, k) in keys.iter().enumerate() {
            if *k == key {
                assert_eq!(after.0[i], None);
            } else {
                assert_eq!(after.0[i], before.0[i]);
            }
        }
    }

    assert_eq!(store.count("x"), 0);
    assert_eq!(store.count("y"), 0);
    assert_eq!(store.root_len(), 0);
}

#[test]
fn tombstones_kept_while_any_transaction_is_open() {
    let mut store = create_store();
    store.set("a", "1");

    store.begin();
    store.begin();
    store.delete("a");
    store.commit();
    store.commit();
    assert_eq!(store.root_len(), 0);

    store.set("b", "2");
    store.begin();
    store.delete("b");
    store.begin();
    store.commit();
    // Inner commit leaves depth 1: the delete is still pending above the root
    assert_eq!(store.depth(), 1);
    assert_eq!(store.root_len(), 1);
    assert_eq!(store.get("b"), None);

    store.commit();
    assert_eq!(store.root_len(), 0);
}

#[test]
fn root_level_deletes_wait_for_next_commit() {
    let mut store = create_store();
    for i in 0..50 {
        let key = format!("k{}", i);
        store.set(&key, "v");
        store.delete(&key);
    }
    assert_eq!(store.root_len(), 50);
    assert_eq!(store.count("v"), 0);

    store.begin();
    store.commit();
    assert_eq!(store.root_len(), 0);
    assert_eq!(store.count("v"), 0);
}

#[test]
fn values_survive_compaction() {
    let mut store = create_store();
    store.set("keep", "1");
    store.set("empty", "");

    store.begin();
    store.delete("gone");
    store.set("new", "1");
    store.commit();

    assert_eq!(store.root_len(), 3);
    assert_eq!(store.get("keep"), Some("1"));
    assert_eq!(store.get("empty"), Some(""));
    assert_eq!(store.get("new"), Some("1"));
    assert_eq!(store.count("1"), 2);
}
