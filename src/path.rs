//! Path validation.
//!
//! ```abnf
//! path        = "/" *( pchar / "/" )
//! pchar       = unreserved / pct-encoded / sub-delims / ":" / "@" / placeholder
//! placeholder = "{" / "}"
//! ```
//!
//! Braces are accepted so that template paths such as `/users/{id}` can be
//! stored before substitution.

use crate::constants::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};
use crate::error::UriError;

/// Validates a non-empty path.
pub(crate) fn validate(path: &str) -> Result<(), UriError> {
    let invalid = |reason| UriError::InvalidPath {
        path: path.to_string(),
        reason,
    };

    if !path.starts_with('/') {
        return Err(invalid("path must start with '/'"));
    }

    match scan(path, is_path_char) {
        Ok(()) => Ok(()),
        Err(Invalid::Char(_, _)) => Err(invalid(
            "path contains a character that must be percent-encoded",
        )),
        Err(Invalid::PercentEncoding(_)) => {
            Err(invalid("'%' must be followed by two hexadecimal digits"))
        }
    }
}

/// Returns true if the character may appear unencoded in a path.
#[must_use]
pub(crate) const fn is_path_char(c: char) -> bool {
    is_unreserved(c)
        || is_sub_delim(c)
        || matches!(c, ':' | '@' | '/' | PLACEHOLDER_OPEN | PLACEHOLDER_CLOSE)
}

pub(crate) const fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

pub(crate) const fn is_sub_delim(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
    )
}

/// First offending position found by [`scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Invalid {
    /// Disallowed character and its byte position
    Char(char, usize),
    /// Byte position of a malformed percent escape
    PercentEncoding(usize),
}

/// Checks every character of `input` against `allowed`, accepting `%XX`
/// escapes in between.
pub(crate) fn scan(input: &str, allowed: impl Fn(char) -> bool) -> Result<(), Invalid> {
    let bytes = input.as_bytes();
    let mut chars = input.char_indices();

    while let Some((i, c)) = chars.next() {
        if c == '%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                return Err(Invalid::PercentEncoding(i));
            }
            chars.nth(1);
        } else if !allowed(c) {
            return Err(Invalid::Char(c, i));
        }
    }

    Ok(())
}
