//! URL-safe base-N transcoding for byte buffers and strings.
//!
//! This crate converts bytes to printable strings, and back, for:
//! - base32url and base64url, where every symbol holds a whole number of bits
//! - base36url and base62, where it does not and the buffer is converted as
//!   one big unsigned integer
//!
//! Encoded output carries no padding unless `BaseNFlags::ADD_PADDING` is
//! passed. Encoding never fails; decoding reports a [`DecodeError`].
//!
//! # Example
//!
//! ```
//! use basen::{base64_url_encode_from_buffer, base64_url_decode_to_buffer, BaseNFlags};
//!
//! let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0xff, 0xfe, 0xfc, 0xfb, 0xfa];
//! let encoded = base64_url_encode_from_buffer(&data, BaseNFlags::DEFAULT);
//! assert_eq!(encoded, "AQIDBAX__vz7-g");
//! assert_eq!(base64_url_decode_to_buffer(&encoded).unwrap(), data);
//! ```

mod alphabet;
mod base32;
mod base36;
mod base62;
mod base64;
mod bits;
mod constants;
mod flags;
mod padding;
mod radix;
mod tape;

pub use alphabet::{Alphabet, BASE32_URL, BASE36_URL, BASE62, BASE64_URL};
pub use base32::{
    base32_url_decode_to_buffer, base32_url_decode_to_string, base32_url_encode_from_buffer,
    base32_url_encode_from_string,
};
pub use base36::{
    base36_url_decode_to_buffer, base36_url_decode_to_string, base36_url_encode_from_buffer,
    base36_url_encode_from_string,
};
pub use base62::{
    base62_decode_to_buffer, base62_decode_to_string, base62_encode_from_buffer,
    base62_encode_from_string,
};
pub use base64::{
    base64_url_decode_to_buffer, base64_url_decode_to_string, base64_url_encode_from_buffer,
    base64_url_encode_from_string,
};
pub use constants::{
    ALPHABET_BASE32_URL, ALPHABET_BASE36_URL, ALPHABET_BASE62, ALPHABET_BASE64_URL,
    BASE32_PADDING_UNIT, BASE62_PADDING_UNIT, BASE64_PADDING_UNIT, PAD,
};
pub use flags::BaseNFlags;
pub use padding::padding_required;

use std::string::FromUtf8Error;
use thiserror::Error;

/// Error type for decoding operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A character is not part of the alphabet.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    /// No byte count encodes to this many symbols.
    #[error("encoded length {0} does not map to a whole number of bytes")]
    InvalidLength(usize),
    /// Padding is present but does not complete the final unit.
    #[error("invalid padding")]
    InvalidPadding,
    /// Filler bits that the encoder always leaves as zero are set.
    #[error("non-zero filler bits")]
    NonCanonical,
    /// The encoded value is too large for the byte count its length implies.
    #[error("encoded value does not fit in the decoded length")]
    Overflow,
    /// The decoded bytes are not valid UTF-8.
    #[error("decoded data is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),
}

impl DecodeError {
    pub(crate) fn invalid_character(text: &str, position: usize) -> Self {
        let character = text
            .get(position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        DecodeError::InvalidCharacter {
            character,
            position,
        }
    }
}
