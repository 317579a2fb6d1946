//! URL-safe base36 (base36url) encoding and decoding.
//!
//! Digits and lowercase letters only. There is no padding for base36url.

use crate::alphabet::BASE36_URL;
use crate::radix::{self, BASE36_TABLE};
use crate::DecodeError;

/// Encodes a byte slice to a base36url string.
///
/// # Example
///
/// ```
/// use basen::base36_url_encode_from_buffer;
///
/// let uuid = [
///     0x30, 0x6a, 0xf1, 0x9c, 0x41, 0xa4, 0x4b, 0x21,
///     0x85, 0x72, 0x32, 0x30, 0x8e, 0x6c, 0x03, 0xea,
/// ];
/// assert_eq!(base36_url_encode_from_buffer(&uuid), "2v6wzt8h82b4efcjdelmiaxuy");
/// ```
pub fn base36_url_encode_from_buffer(input: &[u8]) -> String {
    radix::encode(input, &BASE36_URL, &BASE36_TABLE)
}

/// Encodes the UTF-8 bytes of `input` to a base36url string.
pub fn base36_url_encode_from_string(input: &str) -> String {
    base36_url_encode_from_buffer(input.as_bytes())
}

/// Decodes a base36url string to bytes.
pub fn base36_url_decode_to_buffer(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    radix::decode(encoded, &BASE36_URL, &BASE36_TABLE)
}

/// Decodes a base36url string to UTF-8 text.
pub fn base36_url_decode_to_string(encoded: &str) -> Result<String, DecodeError> {
    Ok(String::from_utf8(base36_url_decode_to_buffer(encoded)?)?)
}
