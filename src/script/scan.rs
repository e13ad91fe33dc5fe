//! Byte-level scanning primitives shared by the script transformations.
//!
//! Every delimiter recognized here is ASCII, so any index returned by these
//! helpers is a valid `char` boundary of the `str` the bytes came from.

/// Returns the index just past the quoted literal opening at `start`.
///
/// `bytes[start]` must be the opening `'`. A doubled `''` inside the literal
/// is an escaped quote and does not close it. An unterminated literal runs to
/// the end of input.
pub(crate) fn literal_end(bytes: &[u8], start: usize) -> usize {
    debug_assert_eq!(bytes.get(start), Some(&b'\''));
    let mut pos = start + 1;
    while pos < bytes.len() {
        if bytes[pos] == b'\'' {
            if bytes.get(pos + 1) == Some(&b'\'') {
                pos += 2;
            } else {
                return pos + 1;
            }
        } else {
            pos += 1;
        }
    }
    bytes.len()
}

/// Returns the index of the line terminator ending the line comment whose body
/// starts at `pos`, or the end of input.
pub(crate) fn line_comment_end(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && !is_line_terminator(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Returns the index just past the `*/` closing the block comment whose body
/// starts at `pos`, or the end of input when the comment is unterminated.
pub(crate) fn block_comment_end(bytes: &[u8], mut pos: usize) -> usize {
    while pos + 1 < bytes.len() {
        if bytes[pos] == b'*' && bytes[pos + 1] == b'/' {
            return pos + 2;
        }
        pos += 1;
    }
    bytes.len()
}

/// Whether `bytes[pos..]` starts with the two-byte marker `marker`.
pub(crate) fn starts_with_pair(bytes: &[u8], pos: usize, marker: [u8; 2]) -> bool {
    bytes.get(pos) == Some(&marker[0]) && bytes.get(pos + 1) == Some(&marker[1])
}

/// Length of the line terminator at `pos`: 2 for `\r\n`, 1 for a lone `\n` or
/// `\r`, 0 when there is none.
pub(crate) fn line_terminator_len(bytes: &[u8], pos: usize) -> usize {
    match bytes.get(pos) {
        Some(b'\r') if bytes.get(pos + 1) == Some(&b'\n') => 2,
        Some(b'\r' | b'\n') => 1,
        _ => 0,
    }
}

pub(crate) fn is_line_terminator(b: u8) -> bool {
    matches!(b, b'\n' | b'\r')
}

pub(crate) fn is_horizontal_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

/// Horizontal or vertical whitespace, including vertical tab and form feed.
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Whether `text` is empty or made only of whitespace.
pub(crate) fn is_blank(text: &str) -> bool {
    text.bytes().all(is_space)
}

/// Whether `b` can continue an identifier, so that a keyword touching it is
/// part of a longer word. Non-ASCII bytes count as identifier bytes.
pub(crate) fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || !b.is_ascii()
}
