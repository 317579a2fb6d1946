//! Symbol tables shared by every encoder.

use crate::constants::{
    ALPHABET_BASE32_URL, ALPHABET_BASE36_URL, ALPHABET_BASE62, ALPHABET_BASE64_URL,
};

const NOT_IN_ALPHABET: u8 = 0xff;

/// An ordered set of unique printable ASCII symbols.
///
/// The position of a symbol is its digit value, so `symbol` and `index_of`
/// are inverses over `0..radix()`. The reverse lookup table is built at
/// compile time; an alphabet with a repeated or non-printable symbol fails
/// to compile when declared as a `static`.
#[derive(Debug)]
pub struct Alphabet {
    symbols: &'static str,
    lookup: [u8; 256],
}

impl Alphabet {
    /// Builds an alphabet and its reverse lookup table.
    ///
    /// # Panics
    ///
    /// Panics (at compile time in const context) if `symbols` is empty,
    /// longer than 255 entries, or contains a duplicate or non-printable
    /// character.
    pub const fn new(symbols: &'static str) -> Self {
        let bytes = symbols.as_bytes();
        assert!(!bytes.is_empty(), "alphabet must not be empty");
        assert!(bytes.len() < 256, "alphabet must have fewer than 256 symbols");

        let mut lookup = [NOT_IN_ALPHABET; 256];
        let mut i = 0;
        while i < bytes.len() {
            let c = bytes[i];
            assert!(c.is_ascii_graphic(), "alphabet symbols must be printable ASCII");
            assert!(
                lookup[c as usize] == NOT_IN_ALPHABET,
                "alphabet symbols must be unique"
            );
            lookup[c as usize] = i as u8;
            i += 1;
        }

        Self { symbols, lookup }
    }

    /// Number of symbols, which is also the radix of the encoding.
    pub const fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the symbol for a digit value.
    ///
    /// `index` must be below `radix()`.
    #[inline]
    pub fn symbol(&self, index: u8) -> char {
        self.symbols.as_bytes()[index as usize] as char
    }

    /// Returns the digit value of a symbol, if it belongs to the alphabet.
    #[inline]
    pub fn index_of(&self, c: u8) -> Option<u8> {
        match self.lookup[c as usize] {
            NOT_IN_ALPHABET => None,
            index => Some(index),
        }
    }

    /// Returns true if `c` is one of the alphabet's symbols.
    #[inline]
    pub fn contains(&self, c: u8) -> bool {
        self.lookup[c as usize] != NOT_IN_ALPHABET
    }

    pub const fn as_str(&self) -> &'static str {
        self.symbols
    }
}

pub static BASE32_URL: Alphabet = Alphabet::new(ALPHABET_BASE32_URL);
pub static BASE36_URL: Alphabet = Alphabet::new(ALPHABET_BASE36_URL);
pub static BASE62: Alphabet = Alphabet::new(ALPHABET_BASE62);
pub static BASE64_URL: Alphabet = Alphabet::new(ALPHABET_BASE64_URL);
