//! Blank-line collapsing and trailing-whitespace trimming.

use alloc::string::String;

use super::scan::{is_horizontal_space, is_line_terminator, line_terminator_len, literal_end};

/// Collapses blank lines and trims trailing whitespace outside quoted literals.
///
/// Every maximal run of spaces, tabs and line terminators outside a literal is
/// rewritten as follows:
///
/// - a run reaching the end of input is dropped;
/// - a run holding no line terminator is interior spacing and kept as is;
/// - a run at the start of input loses its blank lines but keeps the
///   indentation of the first content line;
/// - any other run becomes its first line terminator followed by the
///   indentation of the next content line.
///
/// Literals, including any line breaks inside them, are copied verbatim. The
/// result is stable: trimming it again returns it unchanged.
///
/// # Examples
///
/// ```
/// use sqlite_script::script::trim_lines;
///
/// assert_eq!(trim_lines("SELECT *\n\nFROM t;"), "SELECT *\nFROM t;");
/// assert_eq!(trim_lines("SELECT 1;   \n"), "SELECT 1;");
/// ```
#[must_use]
pub fn trim_lines(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut output = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        if b == b'\'' {
            let end = literal_end(bytes, pos);
            output.push_str(&text[pos..end]);
            pos = end;
        } else if is_horizontal_space(b) || is_line_terminator(b) {
            pos = push_whitespace_run(text, pos, &mut output);
        } else {
            let start = pos;
            while pos < bytes.len() && !is_special(bytes[pos]) {
                pos += 1;
            }
            output.push_str(&text[start..pos]);
        }
    }

    output
}

/// Bytes that interrupt a plain content run.
fn is_special(b: u8) -> bool {
    b == b'\'' || is_horizontal_space(b) || is_line_terminator(b)
}

/// Rewrites the whitespace run starting at `start` into `output` and returns
/// the index just past it.
fn push_whitespace_run(text: &str, start: usize, output: &mut String) -> usize {
    let bytes = text.as_bytes();
    let mut pos = start;
    let mut first_terminator = None;
    // Start of the indentation following the last terminator of the run.
    let mut indent_start = start;

    while pos < bytes.len() {
        let terminator = line_terminator_len(bytes, pos);
        if terminator > 0 {
            if first_terminator.is_none() {
                first_terminator = Some(pos..pos + terminator);
            }
            pos += terminator;
            indent_start = pos;
        } else if is_horizontal_space(bytes[pos]) {
            pos += 1;
        } else {
            break;
        }
    }

    if pos == bytes.len() {
        return pos;
    }

    match first_terminator {
        None => output.push_str(&text[start..pos]),
        Some(terminator) => {
            if start > 0 {
                output.push_str(&text[terminator]);
            }
            output.push_str(&text[indent_start..pos]);
        }
    }

    pos
}
