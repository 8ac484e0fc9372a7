//! Core types for m-sequence generation
//!
//! An m-sequence is produced by a linear recurrence over a small finite
//! alphabet. Only prime alphabet sizes with curated tap tables are
//! supported:
//!
//! ```text
//!   Alphabet   base   raw symbols      signed symbols
//!   ────────   ────   ─────────────    ─────────────────
//!   Binary       2    0, 1             -1, +1
//!   Ternary      3    0, 1, 2          0, 1, -1
//!   Quinary      5    0, 1, 2, 3, 4    0, 1, 2, -2, -1
//! ```

use serde::{Deserialize, Serialize};

/// Raw symbol produced by the recurrence, in `[0, base-1]`.
pub type RawSymbol = u8;

/// Remapped symbol in the signed output alphabet.
pub type Symbol = i8;

/// Result type for m-sequence operations
pub type MseqResult<T> = Result<T, MseqError>;

/// Errors that can occur while looking up taps or generating sequences
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MseqError {
    #[error("M-sequence {base}^{power} is not defined")]
    UndefinedSequence { base: u32, power: u32 },

    #[error("Invalid alphabet size: {0}. Must be 2, 3, or 5")]
    InvalidAlphabet(u32),
}

/// Alphabet (number of sequence levels) of an m-sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Alphabet {
    /// Two levels, arithmetic mod 2
    Binary,
    /// Three levels, arithmetic mod 3
    Ternary,
    /// Five levels, arithmetic mod 5
    Quinary,
}

impl Alphabet {
    /// All supported alphabets, smallest first.
    pub const ALL: [Alphabet; 3] = [Alphabet::Binary, Alphabet::Ternary, Alphabet::Quinary];

    /// Number of levels (the arithmetic modulus).
    pub const fn base(self) -> u32 {
        match self {
            Alphabet::Binary => 2,
            Alphabet::Ternary => 3,
            Alphabet::Quinary => 5,
        }
    }

    /// Sequence length for a register of `power` stages: `base^power - 1`.
    ///
    /// Saturates at `usize::MAX - 1` for lengths far beyond any tap table.
    pub fn period(self, power: u32) -> usize {
        (self.base() as usize).saturating_pow(power) - 1
    }

    /// Map a raw recurrence symbol onto the signed output alphabet.
    #[inline]
    pub fn to_signed(self, raw: RawSymbol) -> Symbol {
        match self {
            Alphabet::Binary => raw as i8 * 2 - 1,
            Alphabet::Ternary => match raw {
                2 => -1,
                v => v as i8,
            },
            Alphabet::Quinary => match raw {
                4 => -1,
                3 => -2,
                v => v as i8,
            },
        }
    }

    /// Signed symbols this alphabet can produce, in ascending order.
    pub fn signed_symbols(self) -> &'static [Symbol] {
        match self {
            Alphabet::Binary => &[-1, 1],
            Alphabet::Ternary => &[-1, 0, 1],
            Alphabet::Quinary => &[-2, -1, 0, 1, 2],
        }
    }
}

impl TryFrom<u32> for Alphabet {
    type Error = MseqError;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        match base {
            2 => Ok(Alphabet::Binary),
            3 => Ok(Alphabet::Ternary),
            5 => Ok(Alphabet::Quinary),
            other => Err(MseqError::InvalidAlphabet(other)),
        }
    }
}

impl From<Alphabet> for u32 {
    fn from(alphabet: Alphabet) -> u32 {
        alphabet.base()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alphabet::Binary => write!(f, "binary"),
            Alphabet::Ternary => write!(f, "ternary"),
            Alphabet::Quinary => write!(f, "quinary"),
        }
    }
}
