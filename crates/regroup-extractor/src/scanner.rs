//! Delimiter-depth scanning
//!
//! The only "parsing" the extractor does: an explicit counter that goes up on
//! an opening delimiter and down on a closing one. String literals and
//! comments are not special.

use regroup_domain::Delimiters;

/// Byte offset just past the delimiter that closes the one at `open_at`
///
/// `open_at` must point at an opening delimiter. Returns `None` when the depth
/// never returns to zero before the end of `text`.
///
/// # Examples
///
/// ```
/// use regroup_domain::Delimiters;
/// use regroup_extractor::matching_close;
///
/// let text = "a { b { c } d } e";
/// assert_eq!(matching_close(text, 2, Delimiters::default()), Some(15));
/// assert_eq!(matching_close("{ {", 0, Delimiters::default()), None);
/// ```
pub fn matching_close(text: &str, open_at: usize, delimiters: Delimiters) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, c) in text.get(open_at..)?.char_indices() {
        if c == delimiters.open {
            depth += 1;
        } else if c == delimiters.close && depth > 0 {
            depth -= 1;
            if depth == 0 {
                return Some(open_at + idx + c.len_utf8());
            }
        }
    }
    None
}

/// Byte offset of the first opening delimiter at or after `from`, before `end`
pub(crate) fn find_open(text: &str, from: usize, end: usize, delimiters: Delimiters) -> Option<usize> {
    text.get(from..end)?
        .find(delimiters.open)
        .map(|idx| from + idx)
}

/// 1-based line number of a byte offset
pub fn line_of(text: &str, offset: usize) -> usize {
    let offset = offset.min(text.len());
    text.as_bytes()[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Whether `c` can appear in an identifier
pub(crate) fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
