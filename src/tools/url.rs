//! Percent encoding for URL components.

use anyhow::{Context, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Everything `encodeURIComponent` escapes: all but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent encodes text for use as a single URL component.
///
/// # Examples
///
/// ```
/// assert_eq!(toolshed::tools::url::encode("a b&c"), "a%20b%26c");
/// ```
pub fn encode(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Decodes percent escapes.
///
/// Malformed escapes such as `%zz` are kept literally. A `+` is not treated
/// as a space.
///
/// # Errors
///
/// Returns error if decoded bytes are not valid UTF8
pub fn decode(input: &str) -> Result<String> {
    percent_decode_str(input)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .context("Percent decoded input is not valid UTF8")
}
