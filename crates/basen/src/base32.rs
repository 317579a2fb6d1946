//! URL-safe base32 (base32url) encoding and decoding.
//!
//! The buffer is read as one big-endian unsigned integer and written with the
//! lowercase alphabet `0-9a-v`, five bits per symbol, at a fixed width of
//! `ceil(8 * len / 5)` symbols. Leading zero bytes therefore survive a round
//! trip.

use crate::alphabet::BASE32_URL;
use crate::bits::{self, Justify};
use crate::constants::BASE32_PADDING_UNIT;
use crate::flags::BaseNFlags;
use crate::padding::{append_padding, strip_padding};
use crate::DecodeError;

/// Encodes a byte slice to a base32url string.
///
/// # Example
///
/// ```
/// use basen::{base32_url_encode_from_buffer, BaseNFlags};
///
/// let uuid = [
///     0x30, 0x6a, 0xf1, 0x9c, 0x41, 0xa4, 0x4b, 0x21,
///     0x85, 0x72, 0x32, 0x30, 0x8e, 0x6c, 0x03, 0xea,
/// ];
/// assert_eq!(
///     base32_url_encode_from_buffer(&uuid, BaseNFlags::DEFAULT),
///     "1gdbopogd49cgoashi6276o0va"
/// );
/// ```
pub fn base32_url_encode_from_buffer(input: &[u8], flags: BaseNFlags) -> String {
    let mut out = bits::encode(input, &BASE32_URL, 5, Justify::Right);
    if flags.add_padding() {
        append_padding(&mut out, BASE32_PADDING_UNIT);
    }
    out
}

/// Encodes the UTF-8 bytes of `input` to a base32url string.
pub fn base32_url_encode_from_string(input: &str, flags: BaseNFlags) -> String {
    base32_url_encode_from_buffer(input.as_bytes(), flags)
}

/// Decodes a base32url string, with or without padding, to bytes.
pub fn base32_url_decode_to_buffer(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let unpadded = strip_padding(encoded, BASE32_PADDING_UNIT)?;
    bits::decode(unpadded, &BASE32_URL, 5, Justify::Right)
}

/// Decodes a base32url string to UTF-8 text.
pub fn base32_url_decode_to_string(encoded: &str) -> Result<String, DecodeError> {
    Ok(String::from_utf8(base32_url_decode_to_buffer(encoded)?)?)
}
