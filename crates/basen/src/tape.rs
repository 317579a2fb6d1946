//! Quantum instruction tape for six-bit alphabets.
//!
//! Instead of one monolithic loop body, encoding a 3-byte quantum into four
//! symbols is written as a fixed tape of small instructions that all work on
//! one [`QuantumContext`]. An instruction pointer walks the tape modulo its
//! length until every bit group has been emitted. Any radix-64 alphabet can
//! run on [`SEXTET_TAPE`].

use crate::alphabet::Alphabet;
use crate::bits;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Load the byte at the buffer offset, or zero past the end.
    ReadByte,
    /// Take the bits under `mask` from carry plus current byte, shifted down
    /// by `shift`, and drop them from the current byte.
    ExtractBitGroup { mask: u16, shift: u8 },
    /// Append the symbol for the extracted bit group.
    TranslateBitGroup,
    /// Move the unconsumed bits of the current byte above the next byte.
    CalculateCarry,
    IncBitGroupCount,
    IncBufferOffset,
}

use Instruction::*;

/// Three bytes in, four sextets out.
pub const SEXTET_TAPE: [Instruction; 20] = [
    ReadByte,
    ExtractBitGroup { mask: 63 << 2, shift: 2 },
    TranslateBitGroup,
    CalculateCarry,
    IncBitGroupCount,
    IncBufferOffset,
    ReadByte,
    ExtractBitGroup { mask: 63 << 4, shift: 4 },
    TranslateBitGroup,
    CalculateCarry,
    IncBitGroupCount,
    IncBufferOffset,
    ReadByte,
    ExtractBitGroup { mask: 63 << 6, shift: 6 },
    TranslateBitGroup,
    IncBitGroupCount,
    ExtractBitGroup { mask: 63, shift: 0 },
    TranslateBitGroup,
    IncBitGroupCount,
    IncBufferOffset,
];

/// Mutable state threaded through one run of a tape.
#[derive(Debug)]
pub struct QuantumContext<'a> {
    input: &'a [u8],
    alphabet: &'a Alphabet,
    offset: usize,
    current_byte: u16,
    bit_group: u16,
    carry: u16,
    bit_group_count: usize,
    output: String,
}

impl<'a> QuantumContext<'a> {
    pub fn new(input: &'a [u8], alphabet: &'a Alphabet, capacity: usize) -> Self {
        Self {
            input,
            alphabet,
            offset: 0,
            current_byte: 0,
            bit_group: 0,
            carry: 0,
            bit_group_count: 0,
            output: String::with_capacity(capacity),
        }
    }

    pub fn step(&mut self, instruction: Instruction) {
        match instruction {
            ReadByte => {
                self.current_byte = self.input.get(self.offset).copied().map_or(0, u16::from);
            }
            ExtractBitGroup { mask, shift } => {
                self.bit_group = ((self.carry + self.current_byte) & mask) >> shift;
                self.carry = 0;
                self.current_byte -= self.current_byte & mask;
            }
            TranslateBitGroup => {
                self.output.push(self.alphabet.symbol(self.bit_group as u8));
            }
            CalculateCarry => {
                self.carry = self.current_byte << 8;
            }
            IncBitGroupCount => self.bit_group_count += 1,
            IncBufferOffset => self.offset += 1,
        }
    }

    pub fn bit_group_count(&self) -> usize {
        self.bit_group_count
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

/// Runs `tape` over `input` until `ceil(8 * len / 6)` bit groups are emitted.
pub fn run(tape: &[Instruction], input: &[u8], alphabet: &Alphabet) -> String {
    let max_bit_groups = bits::encoded_len(input.len(), 6);
    let mut ctx = QuantumContext::new(input, alphabet, max_bit_groups);
    let mut ip = 0;
    while ctx.bit_group_count() < max_bit_groups {
        ctx.step(tape[ip]);
        ip = (ip + 1) % tape.len();
    }
    ctx.into_output()
}
