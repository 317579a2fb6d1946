//! Output options for the encoders that support padding.

use std::ops::{BitOr, BitOrAssign};

/// A small bitset of encoder options.
///
/// The default is no options at all, which means encoded output carries no
/// padding characters. This differs from the RFC 4648 default on purpose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BaseNFlags(u8);

impl BaseNFlags {
    /// No options set.
    pub const DEFAULT: Self = Self(0);
    /// Append `=` until the output fills a whole padding unit.
    pub const ADD_PADDING: Self = Self(1);

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if every option in `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn add_padding(self) -> bool {
        self.contains(Self::ADD_PADDING)
    }
}

impl BitOr for BaseNFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for BaseNFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
