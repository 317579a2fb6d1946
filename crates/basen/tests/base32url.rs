//! Tests for base32url encoding and decoding.

use basen::{
    base32_url_decode_to_buffer, base32_url_decode_to_string, base32_url_encode_from_buffer,
    base32_url_encode_from_string, BaseNFlags, DecodeError, ALPHABET_BASE32_URL,
};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

#[test]
fn encodes_a_bytes_buffer() {
    let input = hex("306af19c41a44b21857232308e6c03ea");
    assert_eq!(
        base32_url_encode_from_buffer(&input, BaseNFlags::DEFAULT),
        "1gdbopogd49cgoashi6276o0va"
    );
}

#[test]
fn encodes_a_string() {
    let input = "306af19c-41a4-4b21-8572-32308e6c03ea";
    assert_eq!(
        base32_url_encode_from_string(input, BaseNFlags::DEFAULT),
        "1j60r62phh75hiqd1hc4q2qd3268oiqe1l6sp2qcpi6co3gp9mcco36pb1"
    );
}

#[test]
fn honours_the_padding_flag() {
    let input = hex("306af19c41a44b21857232308e6c03ea");
    let padded = base32_url_encode_from_buffer(&input, BaseNFlags::ADD_PADDING);
    assert_eq!(padded, "1gdbopogd49cgoashi6276o0va======");
    assert_eq!(padded.len() % 8, 0);
    assert_eq!(base32_url_decode_to_buffer(&padded).unwrap(), input);
}

#[test]
fn matches_reference_encoder() {
    for _ in 0..100 {
        let blob = generate_blob();
        assert_eq!(
            base32_url_encode_from_buffer(&blob, BaseNFlags::DEFAULT),
            base32_encode(&blob),
            "Failed for blob of length {}",
            blob.len()
        );
    }
}

#[test]
fn round_trip() {
    for _ in 0..100 {
        let blob = generate_blob();
        for flags in [BaseNFlags::DEFAULT, BaseNFlags::ADD_PADDING] {
            let encoded = base32_url_encode_from_buffer(&blob, flags);
            assert_eq!(base32_url_decode_to_buffer(&encoded).unwrap(), blob);
        }
    }
}

#[test]
fn keeps_leading_zero_bytes() {
    let input = [0, 0, 1];
    let encoded = base32_url_encode_from_buffer(&input, BaseNFlags::DEFAULT);
    assert_eq!(encoded, "00001");
    assert_eq!(base32_url_decode_to_buffer(&encoded).unwrap(), input);
}

#[test]
fn empty_input() {
    assert_eq!(base32_url_encode_from_buffer(b"", BaseNFlags::DEFAULT), "");
    assert_eq!(base32_url_encode_from_buffer(b"", BaseNFlags::ADD_PADDING), "");
    assert_eq!(base32_url_decode_to_buffer("").unwrap(), b"");
}

#[test]
fn decodes_to_string() {
    let text = "306af19c-41a4-4b21-8572-32308e6c03ea";
    let encoded = base32_url_encode_from_string(text, BaseNFlags::DEFAULT);
    assert_eq!(base32_url_decode_to_string(&encoded).unwrap(), text);
}

#[test]
fn rejects_uppercase() {
    assert_eq!(
        base32_url_decode_to_buffer("1G"),
        Err(DecodeError::InvalidCharacter {
            character: 'G',
            position: 1
        })
    );
}

#[test]
fn rejects_bad_length() {
    assert_eq!(
        base32_url_decode_to_buffer("123"),
        Err(DecodeError::InvalidLength(3))
    );
}

#[test]
fn rejects_overlong_first_symbol() {
    // one byte leaves two filler bits at the front
    assert_eq!(
        base32_url_decode_to_buffer("8v"),
        Err(DecodeError::NonCanonical)
    );
    assert_eq!(base32_url_decode_to_buffer("7v").unwrap(), [0xff]);
}

/// Writes the buffer as a big-endian integer in base 32 by repeated
/// division, zero-filled to `ceil(8 * len / 5)` digits.
fn base32_encode(data: &[u8]) -> String {
    let alphabet = ALPHABET_BASE32_URL.as_bytes();
    let width = (data.len() * 8).div_ceil(5);
    let mut number = data.to_vec();
    let mut digits = Vec::with_capacity(width);

    for _ in 0..width {
        let mut remainder = 0u32;
        for byte in number.iter_mut() {
            let acc = (remainder << 8) | u32::from(*byte);
            *byte = (acc / 32) as u8;
            remainder = acc % 32;
        }
        digits.push(alphabet[remainder as usize] as char);
    }

    digits.iter().rev().collect()
}
