//! Conversion for radices that are not a power of two.
//!
//! No whole number of bits maps to one base-36 or base-62 symbol, so the
//! buffer is treated as one big-endian unsigned integer and written out in
//! the target radix. The integer is never materialised as a bignum: it is
//! held as 32-bit limbs and reduced by streaming long division, carrying each
//! limb's remainder into the next. Every division step divides by the largest
//! power of the radix that fits in 32 bits, so one pass yields several digits.

use crate::alphabet::Alphabet;
use crate::DecodeError;

/// Precomputed division step for one radix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixTable {
    pub radix: u32,
    /// `radix.pow(chunk_digits)`, the largest such power below 2^32.
    pub chunk_divisor: u64,
    /// Digits produced by one long-division pass.
    pub chunk_digits: usize,
}

impl RadixTable {
    pub const fn new(radix: u32) -> Self {
        assert!(radix >= 2 && radix <= 256, "radix must be within 2..=256");

        let mut chunk_divisor = radix as u64;
        let mut chunk_digits = 1;
        while chunk_divisor * radix as u64 <= u32::MAX as u64 {
            chunk_divisor *= radix as u64;
            chunk_digits += 1;
        }

        Self {
            radix,
            chunk_divisor,
            chunk_digits,
        }
    }

    /// Smallest digit count `d` with `radix^d >= 256^byte_len`.
    ///
    /// Every buffer of `byte_len` bytes encodes to exactly this many digits.
    pub fn encoded_len(&self, byte_len: usize) -> usize {
        if byte_len == 0 {
            return 0;
        }
        (byte_len as f64 * 8.0 / f64::from(self.radix).log2()).ceil() as usize
    }

    /// Inverse of [`encoded_len`](Self::encoded_len), or `None` if no byte
    /// count encodes to `digit_len` digits.
    pub fn decoded_len(&self, digit_len: usize) -> Option<usize> {
        let byte_len = (digit_len as f64 * f64::from(self.radix).log2() / 8.0).floor() as usize;
        (self.encoded_len(byte_len) == digit_len).then_some(byte_len)
    }
}

pub static BASE36_TABLE: RadixTable = RadixTable::new(36);
pub static BASE62_TABLE: RadixTable = RadixTable::new(62);

/// Splits a big-endian byte string into big-endian 32-bit limbs, without
/// leading zero limbs.
fn to_limbs(input: &[u8]) -> Vec<u32> {
    let head = input.len() % 4;
    let mut limbs = Vec::with_capacity(input.len() / 4 + 1);
    if head > 0 {
        limbs.push(
            input[..head]
                .iter()
                .fold(0u32, |acc, &b| (acc << 8) | u32::from(b)),
        );
    }
    limbs.extend(
        input[head..]
            .chunks_exact(4)
            .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]])),
    );
    let leading_zeros = limbs.iter().take_while(|&&limb| limb == 0).count();
    limbs.drain(..leading_zeros);
    limbs
}

/// Encodes `input` as a fixed-width, zero-filled number in the table's radix.
pub fn encode(input: &[u8], alphabet: &Alphabet, table: &RadixTable) -> String {
    debug_assert_eq!(alphabet.radix(), table.radix as usize);

    let width = table.encoded_len(input.len());
    let radix = u64::from(table.radix);
    let mut limbs = to_limbs(input);
    // least significant first
    let mut digits: Vec<u8> = Vec::with_capacity(width + table.chunk_digits);

    while !limbs.is_empty() {
        let mut remainder = 0u64;
        for limb in limbs.iter_mut() {
            let acc = (remainder << 32) | u64::from(*limb);
            *limb = (acc / table.chunk_divisor) as u32;
            remainder = acc % table.chunk_divisor;
        }

        let leading_zeros = limbs.iter().take_while(|&&limb| limb == 0).count();
        limbs.drain(..leading_zeros);

        for _ in 0..table.chunk_digits {
            digits.push((remainder % radix) as u8);
            remainder /= radix;
        }
    }

    // The value is below radix^width, so anything past `width` is a zero.
    digits.resize(width, 0);
    digits.iter().rev().map(|&d| alphabet.symbol(d)).collect()
}

/// Decodes a fixed-width number back into the buffer it was encoded from.
pub fn decode(text: &str, alphabet: &Alphabet, table: &RadixTable) -> Result<Vec<u8>, DecodeError> {
    let byte_len = table
        .decoded_len(text.len())
        .ok_or(DecodeError::InvalidLength(text.len()))?;
    let mut out = vec![0u8; byte_len];

    for (position, c) in text.bytes().enumerate() {
        let digit = alphabet
            .index_of(c)
            .ok_or_else(|| DecodeError::invalid_character(text, position))?;

        let mut carry = u32::from(digit);
        for byte in out.iter_mut().rev() {
            carry += u32::from(*byte) * table.radix;
            *byte = carry as u8;
            carry >>= 8;
        }
        if carry != 0 {
            return Err(DecodeError::Overflow);
        }
    }

    Ok(out)
}
