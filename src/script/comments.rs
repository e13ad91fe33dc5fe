//! Removal of `--` line comments and `/* */` block comments.

use alloc::string::String;

use super::scan::{block_comment_end, line_comment_end, literal_end, starts_with_pair};

/// Removes every line and block comment from `text`.
///
/// Quoted literals are copied verbatim, so comment markers inside them are
/// kept. A line comment stops before its line terminator, which is kept; a
/// block comment ends at the first `*/` (block comments do not nest). An
/// unterminated block comment discards the rest of the input, and an
/// unterminated literal keeps it.
///
/// # Examples
///
/// ```
/// use sqlite_script::script::remove_comments;
///
/// assert_eq!(remove_comments("-- c\nSELECT 1;"), "\nSELECT 1;");
/// assert_eq!(remove_comments("SELECT /* x */ 1;"), "SELECT  1;");
/// assert_eq!(remove_comments("SELECT '--';"), "SELECT '--';");
/// ```
#[must_use]
pub fn remove_comments(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut output = String::with_capacity(text.len());
    // Start of the pending span that has not been copied yet.
    let mut copy_from = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'\'' => pos = literal_end(bytes, pos),
            b'-' if starts_with_pair(bytes, pos, *b"--") => {
                output.push_str(&text[copy_from..pos]);
                pos = line_comment_end(bytes, pos + 2);
                copy_from = pos;
            }
            b'/' if starts_with_pair(bytes, pos, *b"/*") => {
                output.push_str(&text[copy_from..pos]);
                pos = block_comment_end(bytes, pos + 2);
                copy_from = pos;
            }
            _ => pos += 1,
        }
    }
    output.push_str(&text[copy_from..]);

    output
}
