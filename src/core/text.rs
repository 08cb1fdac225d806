//! Bounded-length text.
//!
//! Map keys and values are stored with a fixed maximum length. Longer input
//! is silently truncated on copy: that is a constraint callers live with,
//! not an error. Truncation never splits a UTF-8 character, so the stored
//! text may be a few bytes shorter than the bound.

/// Default maximum stored length of a key or value, in bytes.
pub const DEFAULT_MAX_STRING_LEN: usize = 1024;

/// Longest prefix of `s` that is at most `max_len` bytes and ends on a
/// character boundary.
///
/// # Examples
///
/// ```
/// use chainbloom::core::text::bounded;
///
/// assert_eq!(bounded("hello", 10), "hello");
/// assert_eq!(bounded("hello", 3), "hel");
/// // 'é' is two bytes; cutting through it backs off to the boundary
/// assert_eq!(bounded("café", 4), "caf");
/// ```
#[must_use]
pub fn bounded(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }

    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
