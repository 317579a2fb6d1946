//! URL-safe base64 (base64url) encoding and decoding.

use crate::alphabet::BASE64_URL;
use crate::bits::{self, Justify};
use crate::constants::BASE64_PADDING_UNIT;
use crate::flags::BaseNFlags;
use crate::padding::{append_padding, strip_padding};
use crate::tape::{self, SEXTET_TAPE};
use crate::DecodeError;

/// Encodes a byte slice to a base64url string.
///
/// Uses the RFC 4648 URL-safe alphabet (`-` and `_` instead of `+` and `/`).
/// Padding is only added when `flags` contains `BaseNFlags::ADD_PADDING`.
///
/// # Example
///
/// ```
/// use basen::{base64_url_encode_from_buffer, BaseNFlags};
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0xff, 0xfe, 0xfc, 0xfb, 0xfa];
/// assert_eq!(base64_url_encode_from_buffer(&data, BaseNFlags::DEFAULT), "AQIDBAX__vz7-g");
/// assert_eq!(base64_url_encode_from_buffer(&data, BaseNFlags::ADD_PADDING), "AQIDBAX__vz7-g==");
/// ```
pub fn base64_url_encode_from_buffer(input: &[u8], flags: BaseNFlags) -> String {
    let mut out = tape::run(&SEXTET_TAPE, input, &BASE64_URL);
    if flags.add_padding() {
        append_padding(&mut out, BASE64_PADDING_UNIT);
    }
    out
}

/// Encodes the UTF-8 bytes of `input` to a base64url string.
///
/// Always identical to encoding `input.as_bytes()` with
/// [`base64_url_encode_from_buffer`].
///
/// # Example
///
/// ```
/// use basen::{base64_url_encode_from_string, BaseNFlags};
///
/// let encoded = base64_url_encode_from_string("0102030405fffefcfbfa", BaseNFlags::DEFAULT);
/// assert_eq!(encoded, "MDEwMjAzMDQwNWZmZmVmY2ZiZmE");
/// ```
pub fn base64_url_encode_from_string(input: &str, flags: BaseNFlags) -> String {
    base64_url_encode_from_buffer(input.as_bytes(), flags)
}

/// Decodes a base64url string, with or without padding, to bytes.
pub fn base64_url_decode_to_buffer(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let unpadded = strip_padding(encoded, BASE64_PADDING_UNIT)?;
    bits::decode(unpadded, &BASE64_URL, 6, Justify::Left)
}

/// Decodes a base64url string to UTF-8 text.
pub fn base64_url_decode_to_string(encoded: &str) -> Result<String, DecodeError> {
    Ok(String::from_utf8(base64_url_decode_to_buffer(encoded)?)?)
}
