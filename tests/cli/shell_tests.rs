use std::ops::ControlFlow;

use chaintable::cli::{Command, TableCommandExecutor, parse_command, run_demo};
use chaintable::common::exception::TableError;
use chaintable::container::HashStrategy;

use crate::common::fixtures::table_with;

fn run_script(executor: &mut TableCommandExecutor, lines: &[&str]) -> String {
    let mut out = Vec::new();
    for line in lines {
        let flow = assert_ok!(executor.execute_line(line, &mut out), "running script line");
        if flow == ControlFlow::Break(()) {
            break;
        }
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn test_scripted_session() {
    let mut executor = TableCommandExecutor::new(table_with(10, HashStrategy::Additive));
    let output = run_script(
        &mut executor,
        &[
            "insert John 909-876-1234",
            "insert Amy 111-222-3333",
            "insert May 222-333-1111",
            "insert Amy 999-999-9999",
            "search Amy",
            "search Chris",
            "exit",
            "insert Never 000",
        ],
    );

    let expected = "\
Inserted John: 909-876-1234
Inserted Amy: 111-222-3333
Inserted May: 222-333-1111
Updated Amy: 999-999-9999
Amy: 999-999-9999
Chris not found
";
    assert_eq!(output, expected);
    assert_eq!(executor.table().len(), 3);
    assert!(executor.table().search("Never").is_none());
}

#[test]
fn test_invalid_commands_surface_errors() {
    let mut executor = TableCommandExecutor::new(table_with(2, HashStrategy::Additive));
    let mut out = Vec::new();
    assert_err_matches!(
        executor.execute_line("remove John", &mut out),
        TableError::InvalidCommand(_)
    );
    assert_err_matches!(
        executor.execute_line("insert OnlyName", &mut out),
        TableError::InvalidCommand(_)
    );
    assert!(out.is_empty());
}

#[test]
fn test_stats_reflect_activity() {
    let mut executor = TableCommandExecutor::new(table_with(10, HashStrategy::Additive));
    let output = run_script(
        &mut executor,
        &[
            "insert Amy 1",
            "insert May 2",
            "insert Amy 3",
            "search May",
            "search Chris",
            "stats",
        ],
    );
    assert!(output.contains("Inserts             3 (2 new, 1 updates)"));
    assert!(output.contains("Searches            2 (1 hits, 1 misses, 4 chain steps)"));
    assert!(output.contains("Longest Chain       2"));
}

#[test]
fn test_parse_command_round_trip_of_verbs() {
    assert_eq!(assert_ok!(parse_command("stats")), Command::Stats);
    assert_eq!(assert_ok!(parse_command("help")), Command::Help);
    assert_eq!(assert_ok!(parse_command("print")), Command::Print);
}

#[test]
fn test_demo_matches_reference_output() {
    let mut table = table_with(10, HashStrategy::Additive);
    let mut out = Vec::new();
    assert_ok!(run_demo(&mut table, &mut out));

    let expected = "\
Index 0: empty
Index 1: empty
Index 2: empty
Index 3: empty
Index 4: empty
Index 5: - Amy: 111-222-3333 - May: 222-333-1111
Index 6: empty
Index 7: - Rebecca: 999-444-9999
Index 8: empty
Index 9: - John: 909-876-1234

Search for John: John: 909-876-1234
Search for Chris: not found
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}
