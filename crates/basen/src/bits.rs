//! Bit packing for radices that are a power of two.
//!
//! A symbol of a radix-2^k alphabet holds exactly k bits. Because k does not
//! divide 8, bits read from one byte are carried over and combined with the
//! next byte before the next symbol can be emitted.

use crate::alphabet::Alphabet;
use crate::DecodeError;

/// Where the zero filler bits go when `8 * len` is not a multiple of k.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    /// RFC 4648 style. The buffer is an MSB-first bit stream and the last
    /// symbol is completed with zero bits past the end of the buffer.
    Left,
    /// Integer style. The buffer is one big-endian unsigned integer and the
    /// filler bits are leading zeros in the first symbol.
    Right,
}

/// Number of k-bit symbols needed for `byte_len` bytes.
#[inline]
pub fn encoded_len(byte_len: usize, bits: u32) -> usize {
    (byte_len * 8).div_ceil(bits as usize)
}

/// Encodes `input` with a radix-2^`bits` alphabet.
pub fn encode(input: &[u8], alphabet: &Alphabet, bits: u32, justify: Justify) -> String {
    debug_assert_eq!(alphabet.radix(), 1 << bits);

    let symbols = encoded_len(input.len(), bits);
    let mask = (1u32 << bits) - 1;
    let mut out = String::with_capacity(symbols);

    // bits read but not yet emitted, right-aligned
    let mut carry = 0u32;
    let mut carry_bits = match justify {
        Justify::Left => 0,
        Justify::Right => (symbols * bits as usize - input.len() * 8) as u32,
    };

    for &byte in input {
        carry = (carry << 8) | u32::from(byte);
        carry_bits += 8;
        while carry_bits >= bits {
            carry_bits -= bits;
            out.push(alphabet.symbol(((carry >> carry_bits) & mask) as u8));
        }
        carry &= (1 << carry_bits) - 1;
    }

    // Only reachable for Justify::Left.
    if carry_bits > 0 {
        out.push(alphabet.symbol(((carry << (bits - carry_bits)) & mask) as u8));
    }

    out
}

/// Decodes unpadded `text` written with a radix-2^`bits` alphabet.
///
/// Rejects lengths no buffer encodes to and filler bits that are not zero, so
/// every accepted string has exactly one decoding.
pub fn decode(
    text: &str,
    alphabet: &Alphabet,
    bits: u32,
    justify: Justify,
) -> Result<Vec<u8>, DecodeError> {
    let symbols = text.len();
    let byte_len = symbols * bits as usize / 8;
    if encoded_len(byte_len, bits) != symbols {
        return Err(DecodeError::InvalidLength(symbols));
    }

    let filler = (symbols * bits as usize - byte_len * 8) as u32;
    let mut skip = match justify {
        Justify::Left => 0,
        Justify::Right => filler,
    };

    let mut out = Vec::with_capacity(byte_len);
    let mut carry = 0u32;
    let mut carry_bits = 0u32;

    for (position, c) in text.bytes().enumerate() {
        let value = alphabet
            .index_of(c)
            .ok_or_else(|| DecodeError::invalid_character(text, position))?;
        carry = (carry << bits) | u32::from(value);
        carry_bits += bits;

        if skip > 0 {
            carry_bits -= skip;
            if carry >> carry_bits != 0 {
                return Err(DecodeError::NonCanonical);
            }
            skip = 0;
        }

        if carry_bits >= 8 {
            carry_bits -= 8;
            out.push((carry >> carry_bits) as u8);
            carry &= (1 << carry_bits) - 1;
        }
    }

    // Left-justified trailing filler must be zero.
    if carry != 0 {
        return Err(DecodeError::NonCanonical);
    }

    Ok(out)
}
