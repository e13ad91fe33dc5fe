//! Property checks shared by the integration tests and the fuzz targets.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`ScriptFragment`] and [`render_fragments`]: structured scripts generated
//!   with [`arbitrary`], rendered with or without their comments
//! - [`check_comment_removal`]: stripping comments equals rendering without them
//! - [`check_literals_preserved`]: every literal survives all transformations
//! - [`check_split_invariants`]: no blank statements, nothing but terminators
//!   and whitespace lost
//! - [`check_trim_idempotent`]: trimming twice equals trimming once
//! - [`check_script`]: all of the above for one fragment list

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use arbitrary::Arbitrary;

use crate::script::{KeywordMatching, Splitter, remove_comments, trim_lines};

/// Whitespace pieces a generated script may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Whitespace {
    /// A single space.
    Space,
    /// A horizontal tab.
    Tab,
    /// A `\n` line terminator.
    Newline,
    /// A `\r\n` line terminator.
    CrLf,
}

/// Punctuation a generated script may contain.
///
/// `-`, `/` and `'` are left out so that comments and literals only come from
/// their own fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Punct {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `=`
    Equals,
    /// `*`
    Star,
    /// `+`
    Plus,
}

/// One lexical piece of a generated script.
#[derive(Debug, Clone, PartialEq, Eq, Arbitrary)]
pub enum ScriptFragment {
    /// An identifier; characters outside `[A-Za-z0-9_]` are dropped.
    Word(String),
    /// The `BEGIN` keyword.
    Begin,
    /// The `END` keyword.
    End,
    /// A quoted literal holding the given value, with `'` escaped as `''`.
    Literal(String),
    /// A `--` comment, always followed by a newline.
    LineComment(String),
    /// A `/* */` comment.
    BlockComment(String),
    /// Whitespace.
    Whitespace(Whitespace),
    /// Punctuation.
    Punct(Punct),
    /// A `;`.
    Semicolon,
}

impl ScriptFragment {
    fn render_into(&self, output: &mut String, with_comments: bool) {
        match self {
            Self::Word(word) => {
                let start = output.len();
                output.extend(word.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '_'));
                if output.len() == start {
                    output.push('x');
                }
            }
            Self::Begin => output.push_str("BEGIN"),
            Self::End => output.push_str("END"),
            Self::Literal(_) => output.push_str(&self.rendered_literal().unwrap_or_default()),
            Self::LineComment(body) => {
                if with_comments {
                    output.push_str("--");
                    output.extend(body.chars().filter(|c| !matches!(*c, '\n' | '\r' | '\'')));
                }
                output.push('\n');
            }
            Self::BlockComment(body) => {
                if with_comments {
                    output.push_str("/*");
                    output.extend(body.chars().filter(|c| !matches!(*c, '*' | '\'')));
                    output.push_str("*/");
                }
            }
            Self::Whitespace(Whitespace::Space) => output.push(' '),
            Self::Whitespace(Whitespace::Tab) => output.push('\t'),
            Self::Whitespace(Whitespace::Newline) => output.push('\n'),
            Self::Whitespace(Whitespace::CrLf) => output.push_str("\r\n"),
            Self::Punct(punct) => output.push(match punct {
                Punct::LParen => '(',
                Punct::RParen => ')',
                Punct::Comma => ',',
                Punct::Equals => '=',
                Punct::Star => '*',
                Punct::Plus => '+',
            }),
            Self::Semicolon => output.push(';'),
        }
    }

    /// The quoted form of a [`ScriptFragment::Literal`], `None` for any other
    /// fragment.
    #[must_use]
    pub fn rendered_literal(&self) -> Option<String> {
        match self {
            Self::Literal(value) => Some(format!("'{}'", value.replace('\'', "''"))),
            _ => None,
        }
    }
}

/// Renders `fragments` as script text, optionally leaving comments out.
///
/// A line comment always contributes its trailing newline, so both renderings
/// agree on line structure.
#[must_use]
pub fn render_fragments(fragments: &[ScriptFragment], with_comments: bool) -> String {
    let mut output = String::new();
    for fragment in fragments {
        fragment.render_into(&mut output, with_comments);
    }
    output
}

/// Asserts that removing comments from the rendered script equals rendering
/// it without comments.
///
/// # Panics
///
/// Panics if the two texts differ.
pub fn check_comment_removal(fragments: &[ScriptFragment]) {
    let script = render_fragments(fragments, true);
    let expected = render_fragments(fragments, false);
    assert_eq!(remove_comments(&script), expected, "script: {script:?}");
}

/// Asserts that every literal of the rendered script survives comment removal,
/// line trimming and splitting verbatim.
///
/// # Panics
///
/// Panics if a literal is missing from any of the outputs.
pub fn check_literals_preserved(fragments: &[ScriptFragment]) {
    let script = render_fragments(fragments, true);
    let without_comments = remove_comments(&script);
    let trimmed = trim_lines(&script);
    let statements = Splitter::new().split(&script);

    for literal in fragments.iter().filter_map(ScriptFragment::rendered_literal) {
        assert!(
            without_comments.contains(&literal),
            "literal {literal:?} lost by remove_comments in {script:?}"
        );
        assert!(
            trimmed.contains(&literal),
            "literal {literal:?} lost by trim_lines in {script:?}"
        );
        assert!(
            statements.iter().any(|statement| statement.contains(&literal)),
            "literal {literal:?} lost by splitting {script:?}"
        );
    }
}

/// Keeps only the bytes that splitting must preserve.
fn significant_bytes(text: &str) -> Vec<u8> {
    text.bytes()
        .filter(|b| !matches!(*b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C | b';'))
        .collect()
}

/// Asserts the structural invariants of splitting `text` with both keyword
/// matching modes.
///
/// # Panics
///
/// Panics if a statement is blank, or if joining the statements with `;`
/// lost or added anything other than whitespace and terminators.
pub fn check_split_invariants(text: &str) {
    for keyword_matching in [KeywordMatching::Lenient, KeywordMatching::WordBoundary] {
        let splitter = Splitter::new().with_keyword_matching(keyword_matching);
        let statements = splitter.split(text);

        for statement in &statements {
            assert!(
                statement.bytes().any(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)),
                "blank statement {statement:?} from {text:?}"
            );
        }

        let borrowed: Vec<&str> = splitter.statements(text).collect();
        assert_eq!(borrowed, statements, "iterator and split disagree on {text:?}");

        assert_eq!(
            significant_bytes(&statements.join(";")),
            significant_bytes(text),
            "round trip failed for {text:?} ({keyword_matching:?}): {statements:?}"
        );
    }
}

/// Asserts that [`trim_lines`] is idempotent on `text`.
///
/// # Panics
///
/// Panics if trimming the trimmed text changes it again.
pub fn check_trim_idempotent(text: &str) {
    let once = trim_lines(text);
    let twice = trim_lines(&once);
    assert_eq!(once, twice, "trim_lines is not idempotent on {text:?}");
}

/// Runs every check on the script rendered from `fragments`.
///
/// # Panics
///
/// Panics if any check fails.
pub fn check_script(fragments: &[ScriptFragment]) {
    check_comment_removal(fragments);
    check_literals_preserved(fragments);

    let script = render_fragments(fragments, true);
    check_split_invariants(&script);
    check_trim_idempotent(&script);
    check_trim_idempotent(&remove_comments(&script));
}
