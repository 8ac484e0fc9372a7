//! Feedback Tap Tables
//!
//! Every `(base, power)` pair with a known set of maximal-length feedback
//! configurations owns a fixed, ordered list of taps. The list is reference
//! data: nothing is computed at runtime, and a pair without an entry is an
//! error rather than an approximation.
//!
//! ## Tap Representations
//!
//! ```text
//! Binary (sparse positions):      Ternary / Quinary (dense weights):
//!
//!   taps = [2, 3]                   taps = [1, 0, 2]
//!   ┌───┬───┬───┐                   ┌───┬───┬───┐
//!   │ 1 │ 2 │ 3 │ register          │ 1 │ 2 │ 3 │ register
//!   └───┴─┬─┴─┬─┘                   └─┬─┴─┬─┴─┬─┘
//!         └─⊕─┘                      ×1  ×0  ×2
//!           │                         └───Σ───┘ mod 3
//!           ▼                             ▼
//!       next bit                      next symbol
//! ```
//!
//! Both forms normalize into a dense weight vector with
//! [`TapConfig::weights`].
//!
//! ## Example
//!
//! ```rust
//! use mseq_core::taps::get_taps;
//!
//! let taps = get_taps(2, 5).unwrap();
//! assert_eq!(taps.len(), 6);
//! assert_eq!(taps.get(1).unwrap().weights(5), vec![0, 1, 0, 0, 1]);
//!
//! assert!(get_taps(2, 1).is_err());
//! ```

mod tables;

use std::ops::RangeInclusive;

use crate::types::{Alphabet, MseqError, MseqResult};

/// A single feedback configuration from the tap tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapConfig {
    /// 1-based register stages summed mod 2 (binary alphabet).
    Positions(&'static [u8]),
    /// One weight per register stage, newest stage first.
    Weights(&'static [u8]),
}

impl TapConfig {
    /// Dense weight vector of length `power`.
    pub fn weights(&self, power: u32) -> Vec<u8> {
        match self {
            TapConfig::Positions(positions) => {
                let mut weights = vec![0; power as usize];
                for &p in positions.iter() {
                    if let Some(w) = (p as usize).checked_sub(1).and_then(|i| weights.get_mut(i)) {
                        *w = 1;
                    }
                }
                weights
            }
            TapConfig::Weights(weights) => weights.to_vec(),
        }
    }

    /// Raw table row.
    pub fn as_slice(&self) -> &'static [u8] {
        match self {
            TapConfig::Positions(row) | TapConfig::Weights(row) => *row,
        }
    }
}

/// Ordered tap configurations for one `(base, power)` pair.
#[derive(Debug, Clone, Copy)]
pub struct TapSet {
    alphabet: Alphabet,
    power: u32,
    rows: &'static [&'static [u8]],
}

impl TapSet {
    /// Number of configurations (the selection range is `1..=len`).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a set returned by [`get_taps`].
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Configuration by 1-based selection index.
    pub fn get(&self, selection: usize) -> Option<TapConfig> {
        let row = *self.rows.get(selection.checked_sub(1)?)?;
        Some(self.wrap(row))
    }

    /// Iterate configurations in selection order.
    pub fn iter(&self) -> impl Iterator<Item = TapConfig> + '_ {
        self.rows.iter().map(move |&row| self.wrap(row))
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    /// Sequence length produced by any configuration in this set.
    pub fn period(&self) -> usize {
        self.alphabet.period(self.power)
    }

    fn wrap(&self, row: &'static [u8]) -> TapConfig {
        match self.alphabet {
            Alphabet::Binary => TapConfig::Positions(row),
            Alphabet::Ternary | Alphabet::Quinary => TapConfig::Weights(row),
        }
    }
}

/// Look up the tap configurations for `base` levels and `power` stages.
///
/// Fails with [`MseqError::UndefinedSequence`] when the pair has no table
/// entry, including when `base` is not 2, 3 or 5.
pub fn get_taps(base: u32, power: u32) -> MseqResult<TapSet> {
    Alphabet::try_from(base)
        .ok()
        .and_then(|alphabet| lookup(alphabet, power))
        .ok_or(MseqError::UndefinedSequence { base, power })
}

/// Typed variant of [`get_taps`].
pub fn taps_for(alphabet: Alphabet, power: u32) -> MseqResult<TapSet> {
    lookup(alphabet, power).ok_or(MseqError::UndefinedSequence {
        base: alphabet.base(),
        power,
    })
}

/// Number of configurations tabulated for `(base, power)`.
pub fn table_len(base: u32, power: u32) -> MseqResult<usize> {
    get_taps(base, power).map(|taps| taps.len())
}

/// Register lengths with a table entry for `alphabet`.
pub fn supported_powers(alphabet: Alphabet) -> RangeInclusive<u32> {
    match alphabet {
        Alphabet::Binary => 2..=30,
        Alphabet::Ternary => 2..=7,
        Alphabet::Quinary => 2..=4,
    }
}

fn lookup(alphabet: Alphabet, power: u32) -> Option<TapSet> {
    let rows = match alphabet {
        Alphabet::Binary => tables::binary(power),
        Alphabet::Ternary => tables::ternary(power),
        Alphabet::Quinary => tables::quinary(power),
    }?;
    Some(TapSet {
        alphabet,
        power,
        rows,
    })
}
