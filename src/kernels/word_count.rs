//! A single-pass, allocation-free word counter.
//!
//! A word is a maximal run of characters that are not word separators. The
//! separator set is fixed and locale-independent: space, tab, newline,
//! carriage return, form feed and vertical tab. Every separator is ASCII, and
//! UTF-8 never encodes a non-ASCII character with ASCII bytes, so scanning the
//! bytes of a `&str` gives the same answer as scanning its `char`s.

//==================================================================================
// 1. Classification
//==================================================================================

/// Returns `true` for the six characters that delimit words.
///
/// Unlike `char::is_ascii_whitespace`, this includes vertical tab (U+000B).
/// Non-ASCII spaces such as U+00A0 are word characters.
#[inline]
pub fn is_word_separator(c: char) -> bool {
    c.is_ascii() && is_separator_byte(c as u8)
}

#[inline(always)]
fn is_separator_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Counts the words in `text`.
pub fn count_words(text: &str) -> usize {
    count_words_in_bytes(text.as_bytes())
}

/// Counts the words in a UTF-8 (or ASCII-compatible) byte buffer.
///
/// Bytes outside the separator set, including any non-ASCII byte, are treated
/// as word bytes.
pub fn count_words_in_bytes(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut in_word = false;

    for &b in bytes {
        if is_separator_byte(b) {
            in_word = false;
        } else if !in_word {
            in_word = true;
            count += 1;
        }
    }

    count
}
