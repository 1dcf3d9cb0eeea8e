//! Byte classes of the JSON grammar.
//!
//! Every scanner and container state machine asks these predicates instead of
//! matching characters inline, so each class is written down exactly once.

/// Insignificant whitespace: space, tab, carriage return, line feed.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Characters allowed directly after a backslash, apart from `u`.
#[inline]
pub fn is_escapable(b: u8) -> bool {
    matches!(b, b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't')
}

#[inline]
pub fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

#[inline]
pub fn is_dec_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// `1`-`9`. Excludes `0` so that `01` cannot start an integer part.
#[inline]
pub fn is_leading_digit(b: u8) -> bool {
    matches!(b, b'1'..=b'9')
}

/// Any byte that may legally follow a complete number literal.
#[inline]
pub fn is_number_delimiter(b: u8) -> bool {
    is_whitespace(b) || matches!(b, b',' | b']' | b'}')
}
