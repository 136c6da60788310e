//! Session Tests
//!
//! Whole console sessions replayed line by line.

use crate::common::*;

/// Run every line, collecting the outputs that carry something to print.
fn replay(executor: &mut Executor, script: &str) -> Vec<Output> {
    script
        .lines()
        .filter_map(|line| executor.execute_line(line).expect("script line should parse"))
        .filter(|output| !output.is_unit())
        .collect()
}

#[test]
fn nested_transaction_session() {
    let mut executor = create_executor();
    let outputs = replay(
        &mut executor,
        "
        BEGIN
        SET key1 value1
        GET key1
        BEGIN
        SET key1 value2
        GET key1
        BEGIN
        SET key1 value3
        GET key1
        ROLLBACK
        GET key1
        ROLLBACK
        GET key1
        ROLLBACK
        GET key1
        ",
    );

    assert_eq!(
        outputs,
        vec![
            Output::Value(Some("value1".into())),
            Output::Value(Some("value2".into())),
            Output::Value(Some("value3".into())),
            Output::Value(Some("value2".into())),
            Output::Value(Some("value1".into())),
            Output::Value(None),
        ]
    );
}

#[test]
fn count_session() {
    let mut executor = create_executor();
    let outputs = replay(
        &mut executor,
        "
        SET a 10
        SET b 10
        COUNT 10
        COUNT 20
        DELETE a
        COUNT 10
        SET b 30
        COUNT 10
        ",
    );

    assert_eq!(
        outputs,
        vec![
            Output::Count(2),
            Output::Count(0),
            Output::Count(1),
            Output::Count(0),
        ]
    );
}

#[test]
fn commit_session() {
    let mut executor = create_executor();
    let outputs = replay(
        &mut executor,
        "
        BEGIN
        SET a 30
        BEGIN
        SET a 40
        COMMIT
        GET a
        ROLLBACK
        GET a
        INFO
        ",
    );

    assert_eq!(
        outputs,
        vec![
            Output::Value(Some("40".into())),
            Output::Value(None),
            Output::Info { depth: 0 },
        ]
    );
}

#[test]
fn outputs_serialize_for_json_drivers() {
    let mut executor = create_executor();
    let outputs = replay(&mut executor, "SET a 1\nGET a\nCOUNT 1\nGET b");
    let json: Vec<String> = outputs
        .iter()
        .map(|o| serde_json::to_string(o).unwrap())
        .collect();

    assert_eq!(
        json,
        vec![r#"{"value":"1"}"#, r#"{"count":1}"#, r#"{"value":null}"#]
    );
}
