//! Base64 encoding and decoding with the standard padded alphabet.

use ::base64::Engine;
use ::base64::engine::general_purpose::STANDARD;
use anyhow::{Context, Result};

/// Encodes bytes as padded standard Base64.
///
/// # Examples
///
/// ```
/// assert_eq!(toolshed::tools::base64::encode(b"hello"), "aGVsbG8=");
/// ```
pub fn encode(input: impl AsRef<[u8]>) -> String {
    STANDARD.encode(input)
}

/// Decodes padded standard Base64.
///
/// Surrounding whitespace, including a trailing newline from piped input,
/// is ignored.
///
/// # Errors
///
/// Returns error if input contains characters outside the alphabet or has
/// invalid padding or length
pub fn decode(input: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(input.trim())
        .context("Input is not valid Base64")
}

/// Decodes padded standard Base64 into UTF8 text.
///
/// # Errors
///
/// Returns error if input is not valid Base64 or decoded bytes are not UTF8
pub fn decode_to_string(input: &str) -> Result<String> {
    let bytes = decode(input)?;
    String::from_utf8(bytes).context("Decoded Base64 is not valid UTF8")
}
