//! Quote-aware string splitting.
//!
//! This module provides [`split_unquoted`], the splitting primitive shared by
//! the rest of the crate: key lists, value lists, and `key = value` lines are
//! all separated with the same scanner instead of ad hoc `find`/`split` calls
//! at each call site.
//!
//! A delimiter only counts as a split point when the scan is outside a quoted
//! span. Quoted spans open at any character in the quote set and close at the
//! next occurrence of the *same* character; everything between, including
//! delimiters and the other quote character, passes through untouched.
//!
//! ## Examples
//!
//! ```rust
//! use xini::split::{split_unquoted, QUOTES};
//!
//! let parts = split_unquoted("a, \"b,c\", d", ',', 0, &QUOTES);
//! assert_eq!(parts, vec!["a", " \"b,c\"", " d"]);
//! ```

/// The quote characters recognized by the parser.
pub const QUOTES: [char; 2] = ['"', '\''];

/// Splits `text` on `delimiter`, ignoring delimiters inside quoted spans.
///
/// The returned parts are subslices of `text` in original order, with quote
/// characters preserved and no trimming applied. Callers trim results
/// themselves.
///
/// With a nonzero `max_parts`, splitting stops once `max_parts - 1` parts have
/// been produced; the rest of the text becomes the final part verbatim, still
/// carrying the delimiter in front. This lets a caller tell a real split from
/// a delimiter that never occurred:
///
/// ```rust
/// use xini::split::{split_unquoted, QUOTES};
///
/// let parts = split_unquoted("key = value", '=', 2, &QUOTES);
/// assert_eq!(parts, vec!["key ", "= value"]);
/// ```
///
/// An unterminated quote is not an error at this layer; the remainder of the
/// text is treated as still quoted and copied through. Later stages validate
/// quoting per token.
#[must_use]
pub fn split_unquoted<'a>(
    text: &'a str,
    delimiter: char,
    max_parts: usize,
    quotes: &[char],
) -> Vec<&'a str> {
    if max_parts == 1 {
        return vec![text];
    }

    let mut parts = Vec::new();
    let mut start = 0;
    let mut open: Option<char> = None;

    for (pos, ch) in text.char_indices() {
        match open {
            Some(quote) => {
                if ch == quote {
                    open = None;
                }
            }
            None => {
                if quotes.contains(&ch) {
                    open = Some(ch);
                } else if ch == delimiter {
                    parts.push(&text[start..pos]);
                    if max_parts != 0 && parts.len() == max_parts - 1 {
                        // Remainder keeps the delimiter in front.
                        parts.push(&text[pos..]);
                        return parts;
                    }
                    start = pos + ch.len_utf8();
                }
            }
        }
    }

    parts.push(&text[start..]);
    parts
}
