//! Base62 encoding and decoding.

use crate::alphabet::BASE62;
use crate::constants::BASE62_PADDING_UNIT;
use crate::flags::BaseNFlags;
use crate::padding::{append_padding, strip_padding};
use crate::radix::{self, BASE62_TABLE};
use crate::DecodeError;

/// Encodes a byte slice to a base62 string.
///
/// With `BaseNFlags::ADD_PADDING` the output is padded to a multiple of
/// eleven symbols, the width of one 8-byte block.
///
/// # Example
///
/// ```
/// use basen::{base62_encode_from_buffer, BaseNFlags};
///
/// assert_eq!(base62_encode_from_buffer(b"hello world", BaseNFlags::DEFAULT), "AAwf93rvy4aWQVw");
/// assert_eq!(base62_encode_from_buffer(b"hello world", BaseNFlags::ADD_PADDING), "AAwf93rvy4aWQVw=======");
/// ```
pub fn base62_encode_from_buffer(input: &[u8], flags: BaseNFlags) -> String {
    let mut out = radix::encode(input, &BASE62, &BASE62_TABLE);
    if flags.add_padding() {
        append_padding(&mut out, BASE62_PADDING_UNIT);
    }
    out
}

/// Encodes the UTF-8 bytes of `input` to a base62 string.
pub fn base62_encode_from_string(input: &str, flags: BaseNFlags) -> String {
    base62_encode_from_buffer(input.as_bytes(), flags)
}

/// Decodes a base62 string, with or without padding, to bytes.
pub fn base62_decode_to_buffer(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let unpadded = strip_padding(encoded, BASE62_PADDING_UNIT)?;
    radix::decode(unpadded, &BASE62, &BASE62_TABLE)
}

/// Decodes a base62 string to UTF-8 text.
pub fn base62_decode_to_string(encoded: &str) -> Result<String, DecodeError> {
    Ok(String::from_utf8(base62_decode_to_buffer(encoded)?)?)
}
