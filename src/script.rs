//! Single-pass scanners over multi-statement SQL scripts.
//!
//! The scanners only understand what is needed to avoid mangling a script:
//! single-quoted literals (with `''` escapes), `--` and `/* */` comments, and
//! the `BEGIN ... END` bodies of trigger definitions. They are total: every
//! input, including unterminated literals or comments, yields an output.
//!
//! - [`remove_comments`] strips comments;
//! - [`trim_lines`] collapses blank lines and trailing whitespace;
//! - [`split_statements`] / [`Splitter`] cut a script at top-level `;`.

mod comments;
mod lines;
mod scan;
mod split;

use alloc::string::String;

pub use comments::remove_comments;
pub use lines::trim_lines;
pub use split::{KeywordMatching, Splitter, Statements, split_statements};

/// Removes comments, then collapses blank lines and trailing whitespace.
///
/// # Examples
///
/// ```
/// use sqlite_script::script::clean;
///
/// let script = "-- schema\nCREATE TABLE t (x); -- table\n\n\n/* seed */\nINSERT INTO t VALUES (1);\n";
/// assert_eq!(clean(script), "CREATE TABLE t (x);\nINSERT INTO t VALUES (1);");
/// ```
#[must_use]
pub fn clean(text: &str) -> String {
    trim_lines(&remove_comments(text))
}
