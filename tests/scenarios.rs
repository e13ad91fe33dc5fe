//! Integration tests pinning the exact output of the script transformations.

use sqlite_script::{clean, remove_comments, split_statements, trim_lines};

// =============================================================================
// Comment removal
// =============================================================================

#[test]
fn test_line_comment_leaves_empty_line() {
    assert_eq!(remove_comments("-- c\nSELECT 1;"), "\nSELECT 1;");
}

#[test]
fn test_inline_block_comment_leaves_surrounding_spaces() {
    assert_eq!(remove_comments("SELECT /* x */ 1;"), "SELECT  1;");
}

#[test]
fn test_trailing_comment_keeps_content_and_spacing() {
    assert_eq!(
        remove_comments("SELECT 1;    -- first\nSELECT 2;\t/* second */\n"),
        "SELECT 1;    \nSELECT 2;\t\n"
    );
}

#[test]
fn test_comment_only_inputs() {
    assert_eq!(remove_comments("-- a\n-- b\n"), "\n\n");
    assert_eq!(remove_comments("/* a */"), "");
    assert_eq!(remove_comments("/* open"), "");
}

// =============================================================================
// Line trimming
// =============================================================================

#[test]
fn test_blank_line_collapsed() {
    assert_eq!(trim_lines("SELECT *\n\nFROM t;"), "SELECT *\nFROM t;");
}

#[test]
fn test_trailing_whitespace_and_newline_removed() {
    assert_eq!(trim_lines("SELECT 1;   \n"), "SELECT 1;");
}

#[test]
fn test_trim_multi_line_script() {
    let script = "\n\n\nCREATE TABLE t (  \n    x INTEGER\t\n);\n\n\n\nINSERT INTO t VALUES (1);  \n\n";
    assert_eq!(
        trim_lines(script),
        "CREATE TABLE t (\n    x INTEGER\n);\nINSERT INTO t VALUES (1);"
    );
}

#[test]
fn test_trim_is_idempotent() {
    let script = "\r\n  a  \r\n\r\n\tb 'c \n\n '\n\n";
    let once = trim_lines(script);
    assert_eq!(trim_lines(&once), once);
}

// =============================================================================
// Statement splitting
// =============================================================================

#[test]
fn test_split_keeps_same_line_spacing() {
    assert_eq!(split_statements("SELECT 1; SELECT 2;"), ["SELECT 1", " SELECT 2"]);
}

#[test]
fn test_split_ignores_semicolon_in_literal() {
    assert_eq!(
        split_statements("INSERT INTO t VALUES ('a;b');"),
        ["INSERT INTO t VALUES ('a;b')"]
    );
}

#[test]
fn test_split_keeps_trigger_whole() {
    let statements = split_statements("CREATE TRIGGER x BEFORE INSERT ON t BEGIN SELECT 1; END;");
    assert_eq!(statements.len(), 1);
    assert!(statements[0].contains("BEGIN SELECT 1; END"));
}

#[test]
fn test_split_drops_empty_statements() {
    assert_eq!(split_statements("A;;B;"), ["A", "B"]);
}

#[test]
fn test_split_adversarial_inputs_do_not_panic() {
    for input in [
        "",
        ";",
        "'",
        "''",
        "'''",
        "/*",
        "--",
        "BEGIN",
        "END",
        "BEGIN BEGIN BEGIN BEGIN ; END",
        "END END END ; BEGIN",
        "\0;\0",
        "é;ü;'ß",
    ] {
        let _ = remove_comments(input);
        let _ = trim_lines(input);
        for statement in split_statements(input) {
            assert!(!statement.trim().is_empty(), "blank statement from {input:?}");
        }
    }
}

#[test]
fn test_deep_nesting() {
    let mut script = String::new();
    for _ in 0..1000 {
        script.push_str("BEGIN x; ");
    }
    for _ in 0..1000 {
        script.push_str("END; ");
    }
    script.push_str("\nSELECT 1;");
    let statements = split_statements(&script);
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[1], "SELECT 1");
}

// =============================================================================
// Literal preservation across all transformations
// =============================================================================

#[test]
fn test_literal_survives_everything() {
    let literal = "'-- not; /* a */ BEGIN comment END ''quoted''\n\n  '";
    let script = format!("-- header\nINSERT INTO t VALUES ({literal});  \n\n\nSELECT 1;\n");

    assert!(remove_comments(&script).contains(literal));
    assert!(trim_lines(&script).contains(literal));
    assert!(clean(&script).contains(literal));

    let statements = split_statements(&script);
    assert_eq!(statements.len(), 2);
    assert!(statements[0].contains(literal));
    assert_eq!(statements[1], "SELECT 1");
}
