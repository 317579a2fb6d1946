//! Charset membership checks.
//!
//! The empty string passes every check: it is what an empty buffer encodes to.

use basen::{Alphabet, BASE32_URL, BASE36_URL, BASE62, BASE64_URL, PAD};

fn is_alphabet_data(input: &str, alphabet: &Alphabet) -> bool {
    input.bytes().all(|c| alphabet.contains(c))
}

/// Alphabet symbols, optionally followed by a run of pad characters.
fn is_padded_alphabet_data(input: &str, alphabet: &Alphabet) -> bool {
    is_alphabet_data(input.trim_end_matches(PAD), alphabet)
}

pub fn is_base32_url_data(input: &str) -> bool {
    is_padded_alphabet_data(input, &BASE32_URL)
}

/// Digits and lowercase letters only; base36url is never padded.
pub fn is_base36_url_data(input: &str) -> bool {
    is_alphabet_data(input, &BASE36_URL)
}

pub fn is_base62_string(input: &str) -> bool {
    is_padded_alphabet_data(input, &BASE62)
}

pub fn is_base64_url_data(input: &str) -> bool {
    is_padded_alphabet_data(input, &BASE64_URL)
}
