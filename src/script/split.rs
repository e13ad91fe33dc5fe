//! Splitting of a script into the statements SQLite prepares one at a time.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::iter::FusedIterator;

use super::scan::{is_blank, is_ident_byte, is_line_terminator, is_space, literal_end};
use crate::errors::ScriptError;
use crate::executor::{StatementExecutor, execute_statements};

/// How the `BEGIN` and `END` keywords of trigger bodies are recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KeywordMatching {
    /// Case-insensitive substring match with no word boundary: `BEGINNING`
    /// opens a body and `BACKEND` closes one.
    #[default]
    Lenient,
    /// The keyword must not touch an identifier character on either side.
    WordBoundary,
}

/// Keywords that change the nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Begin,
    End,
}

impl Keyword {
    const ALL: [Self; 2] = [Self::Begin, Self::End];

    fn text(self) -> &'static [u8] {
        match self {
            Self::Begin => b"BEGIN",
            Self::End => b"END",
        }
    }

    /// The keyword found at `pos`, if any.
    fn at(bytes: &[u8], pos: usize, matching: KeywordMatching) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| {
            let text = keyword.text();
            let end = pos + text.len();
            let Some(candidate) = bytes.get(pos..end) else {
                return false;
            };
            if !candidate.eq_ignore_ascii_case(text) {
                return false;
            }
            match matching {
                KeywordMatching::Lenient => true,
                KeywordMatching::WordBoundary => {
                    let before = pos.checked_sub(1).map(|i| bytes[i]);
                    let after = bytes.get(end).copied();
                    !before.is_some_and(is_ident_byte) && !after.is_some_and(is_ident_byte)
                }
            }
        })
    }
}

/// Splits SQL scripts into individual statements.
///
/// A `;` ends a statement only at the top level: outside quoted literals and
/// outside any open `BEGIN ... END` body, so trigger definitions stay whole.
/// Blank statements are never produced and the last statement needs no `;`.
///
/// # Examples
///
/// ```
/// use sqlite_script::{KeywordMatching, Splitter};
///
/// let splitter = Splitter::new().with_keyword_matching(KeywordMatching::WordBoundary);
/// let statements = splitter.split("CREATE TABLE beginnings (x);\nSELECT x FROM beginnings;");
/// assert_eq!(statements, ["CREATE TABLE beginnings (x)", "SELECT x FROM beginnings"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Splitter {
    keyword_matching: KeywordMatching,
}

impl Splitter {
    /// Creates a splitter with lenient keyword matching.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how `BEGIN` and `END` are recognized.
    #[must_use]
    pub fn with_keyword_matching(mut self, keyword_matching: KeywordMatching) -> Self {
        self.keyword_matching = keyword_matching;
        self
    }

    /// Returns how `BEGIN` and `END` are recognized.
    #[must_use]
    pub fn keyword_matching(&self) -> KeywordMatching {
        self.keyword_matching
    }

    /// Returns an iterator over the statements of `text`, borrowed from it.
    #[must_use]
    pub fn statements<'a>(&self, text: &'a str) -> Statements<'a> {
        Statements {
            text,
            pos: 0,
            keyword_matching: self.keyword_matching,
        }
    }

    /// Splits `text` into owned statements.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        let statements: Vec<String> = self.statements(text).map(ToString::to_string).collect();
        log::trace!("split script of {} bytes into {} statements", text.len(), statements.len());
        statements
    }

    /// Splits `script` and runs every statement through `executor` in order.
    ///
    /// Returns the number of statements executed.
    ///
    /// # Errors
    ///
    /// Stops at the first statement the executor rejects and returns it as
    /// [`ScriptError::Statement`].
    pub fn execute<X: StatementExecutor>(
        &self,
        executor: &mut X,
        script: &str,
    ) -> Result<usize, ScriptError<X::Error>> {
        execute_statements(executor, self.statements(script))
    }
}

/// Iterator over the statements of a script, created by [`Splitter::statements`].
#[derive(Debug, Clone)]
pub struct Statements<'a> {
    text: &'a str,
    pos: usize,
    keyword_matching: KeywordMatching,
}

impl<'a> Statements<'a> {
    /// The part of the script not consumed yet.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Index just past the whitespace following the terminator that ends at
    /// `pos`. The whitespace is skipped only when it ends the line or the
    /// input; whitespace followed by more content on the same line belongs to
    /// the next statement.
    fn skip_after_terminator(&self, pos: usize) -> usize {
        let bytes = self.text.as_bytes();
        let mut end = pos;
        let mut crosses_line = false;
        while end < bytes.len() && is_space(bytes[end]) {
            crosses_line |= is_line_terminator(bytes[end]);
            end += 1;
        }
        if crosses_line || end == bytes.len() {
            end
        } else {
            pos
        }
    }
}

impl<'a> Iterator for Statements<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.text.as_bytes();
        let mut start = self.pos;
        let mut pos = self.pos;
        let mut depth = 0usize;

        while pos < bytes.len() {
            match bytes[pos] {
                b'\'' => pos = literal_end(bytes, pos),
                b';' if depth == 0 => {
                    let statement = &self.text[start..pos];
                    pos = self.skip_after_terminator(pos + 1);
                    self.pos = pos;
                    if !is_blank(statement) {
                        return Some(statement);
                    }
                    start = pos;
                }
                _ => match Keyword::at(bytes, pos, self.keyword_matching) {
                    Some(keyword) => {
                        match keyword {
                            Keyword::Begin => depth += 1,
                            Keyword::End => depth = depth.saturating_sub(1),
                        }
                        pos += keyword.text().len();
                    }
                    None => pos += 1,
                },
            }
        }

        self.pos = bytes.len();
        if depth > 0 {
            log::warn!("script ended inside {depth} unclosed BEGIN block(s)");
        }
        let statement = &self.text[start..];
        (!is_blank(statement)).then_some(statement)
    }
}

impl FusedIterator for Statements<'_> {}

/// Splits `text` into statements with the default [`Splitter`].
///
/// # Examples
///
/// ```
/// use sqlite_script::script::split_statements;
///
/// assert_eq!(split_statements("SELECT 1; SELECT 2;"), ["SELECT 1", " SELECT 2"]);
/// assert_eq!(split_statements("A;;B;"), ["A", "B"]);
/// assert_eq!(
///     split_statements("INSERT INTO t VALUES ('a;b');"),
///     ["INSERT INTO t VALUES ('a;b')"]
/// );
/// ```
#[must_use]
pub fn split_statements(text: &str) -> Vec<String> {
    Splitter::new().split(text)
}
