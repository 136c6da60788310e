//! Command Dispatch Tests
//!
//! Tests that the Executor correctly dispatches all Command variants
//! and returns the appropriate Output types.

use crate::common::*;

// ============================================================================
// KV Commands
// ============================================================================

#[test]
fn set_returns_unit() {
    let mut executor = create_executor();

    let output = executor.execute(Command::Set {
        key: "k".into(),
        value: "v".into(),
    });
    assert!(matches!(output, Output::Unit));
}

#[test]
fn get_returns_value_or_none() {
    let mut executor = create_executor();
    run(&mut executor, "SET k v");

    match executor.execute(Command::Get { key: "k".into() }) {
        Output::Value(Some(v)) => assert_eq!(v, "v"),
        other => panic!("Expected Value(Some), got {:?}", other),
    }
    assert_eq!(
        executor.execute(Command::Get { key: "nope".into() }),
        Output::Value(None)
    );
}

#[test]
fn delete_returns_unit_and_hides_key() {
    let mut executor = create_executor();
    run(&mut executor, "SET k v");

    let output = executor.execute(Command::Delete { key: "k".into() });
    assert!(matches!(output, Output::Unit));
    assert_eq!(run(&mut executor, "GET k"), Output::Value(None));
}

#[test]
fn count_returns_count() {
    let mut executor = create_executor();
    run(&mut executor, "SET a x");
    run(&mut executor, "SET b x");
    run(&mut executor, "SET c y");

    assert_eq!(
        executor.execute(Command::Count { value: "x".into() }),
        Output::Count(2)
    );
    assert_eq!(run(&mut executor, "COUNT z"), Output::Count(0));
}

// ============================================================================
// Transaction Commands
// ============================================================================

#[test]
fn transaction_commands_return_unit() {
    let mut executor = create_executor();

    for cmd in [Command::Begin, Command::Commit, Command::Begin, Command::Rollback] {
        assert!(executor.execute(cmd).is_unit());
    }
    assert_eq!(executor.store().depth(), 0);
}

#[test]
fn info_reports_depth() {
    let mut executor = create_executor();
    assert_eq!(executor.execute(Command::Info), Output::Info { depth: 0 });

    run(&mut executor, "BEGIN");
    run(&mut executor, "BEGIN");
    assert_eq!(executor.execute(Command::Info), Output::Info { depth: 2 });
}

#[test]
fn commit_and_rollback_without_transaction_are_accepted() {
    let mut executor = create_executor();
    run(&mut executor, "SET k v");

    assert_eq!(run(&mut executor, "COMMIT"), Output::Unit);
    assert_eq!(run(&mut executor, "ROLLBACK"), Output::Unit);
    assert_eq!(run(&mut executor, "GET k"), Output::Value(Some("v".into())));
}

// ============================================================================
// Input errors
// ============================================================================

#[test]
fn unknown_command_is_reported() {
    let mut executor = create_executor();

    let err = executor.execute_line("INCR counter").unwrap_err();
    assert!(err.is_unknown_command());
    assert_eq!(err.to_string(), "Unknown command INCR");
}

#[test]
fn arity_errors_are_reported() {
    let mut executor = create_executor();

    for line in ["SET", "SET k", "GET", "DELETE", "COUNT", "SET a b c", "COMMIT now"] {
        let err = executor.execute_line(line).unwrap_err();
        assert!(err.is_arity_error(), "{} should be an arity error", line);
    }
}

#[test]
fn rejected_lines_have_no_effect() {
    let mut executor = create_executor();
    run(&mut executor, "SET k v");

    assert!(executor.execute_line("DELETE").is_err());
    assert!(executor.execute_line("BEGIN please").is_err());

    assert_eq!(executor.store().depth(), 0);
    assert_eq!(run(&mut executor, "GET k"), Output::Value(Some("v".into())));
}

#[test]
fn blank_lines_produce_nothing() {
    let mut executor = create_executor();
    assert_eq!(executor.execute_line("").unwrap(), None);
    assert_eq!(executor.execute_line(" \t ").unwrap(), None);
}
