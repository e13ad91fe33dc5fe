//! Regression tests for the property checks driven by the fuzz targets.
//!
//! Structured inputs are built by hand from [`ScriptFragment`]s; the
//! `arbitrary`-driven cases replay fixed byte seeds through
//! [`arbitrary::Unstructured`] so every run checks the same scripts.

#![cfg(feature = "testing")]

use arbitrary::{Arbitrary, Unstructured};
use sqlite_script::testing::{
    Punct, ScriptFragment, Whitespace, check_comment_removal, check_literals_preserved,
    check_script, check_split_invariants, check_trim_idempotent, render_fragments,
};

fn word(text: &str) -> ScriptFragment {
    ScriptFragment::Word(text.into())
}

fn space() -> ScriptFragment {
    ScriptFragment::Whitespace(Whitespace::Space)
}

fn newline() -> ScriptFragment {
    ScriptFragment::Whitespace(Whitespace::Newline)
}

#[test]
fn test_render_with_and_without_comments() {
    let fragments = [
        ScriptFragment::LineComment("header".into()),
        word("SELECT"),
        space(),
        ScriptFragment::BlockComment("x".into()),
        ScriptFragment::Literal("it's".into()),
        ScriptFragment::Semicolon,
    ];
    assert_eq!(render_fragments(&fragments, true), "--header\nSELECT /*x*/'it''s';");
    assert_eq!(render_fragments(&fragments, false), "\nSELECT 'it''s';");
}

#[test]
fn test_trigger_script_fragments() {
    let fragments = [
        word("CREATE"),
        space(),
        word("TRIGGER"),
        space(),
        word("t"),
        space(),
        ScriptFragment::Begin,
        newline(),
        word("INSERT"),
        space(),
        ScriptFragment::Punct(Punct::LParen),
        ScriptFragment::Literal("a;b -- c /* d */ BEGIN".into()),
        ScriptFragment::Punct(Punct::RParen),
        ScriptFragment::Semicolon,
        ScriptFragment::LineComment(" body; END".into()),
        ScriptFragment::End,
        ScriptFragment::Semicolon,
        ScriptFragment::Whitespace(Whitespace::CrLf),
        ScriptFragment::BlockComment("tail".into()),
    ];
    check_script(&fragments);
}

#[test]
fn test_adjacent_literals_merge_into_one() {
    let fragments = [
        ScriptFragment::Literal("a".into()),
        ScriptFragment::Literal(";".into()),
        ScriptFragment::Semicolon,
    ];
    check_comment_removal(&fragments);
    check_literals_preserved(&fragments);
}

#[test]
fn test_empty_fragments() {
    check_script(&[]);
    check_script(&[ScriptFragment::Word(String::new())]);
    check_script(&[ScriptFragment::Literal(String::new())]);
}

#[test]
fn test_raw_text_invariants() {
    for text in [
        "",
        ";",
        " ; ; ",
        "'",
        "a';'b",
        "BEGIN;END;BEGIN",
        "x;\r\n\r\ny; z",
        "\u{b}\u{c};\u{b}",
        "--;\n/*;*/;",
    ] {
        check_split_invariants(text);
        check_trim_idempotent(text);
    }
}

#[test]
fn test_arbitrary_seeds() {
    for seed in 0u8..64 {
        let bytes: Vec<u8> = (0..512u32)
            .map(|i| {
                let mixed = (i.wrapping_mul(31) ^ u32::from(seed).wrapping_mul(131)) % 251;
                u8::try_from(mixed).unwrap()
            })
            .collect();
        let mut unstructured = Unstructured::new(&bytes);
        let fragments = Vec::<ScriptFragment>::arbitrary(&mut unstructured).unwrap();
        check_script(&fragments);
    }
}
