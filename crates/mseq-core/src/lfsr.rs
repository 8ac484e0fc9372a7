//! Multi-level LFSR — sliding-window linear recurrence over GF(base)
//!
//! The register holds the last `power` output symbols, newest first. Each
//! clock computes the weighted sum of the window mod `base`, emits it, and
//! shifts it in at the front while the oldest symbol falls off the end.
//!
//! ```text
//!   weights:   w1    w2    w3   ...   wn
//!               ×     ×     ×          ×
//!   register: [r1]─►[r2]─►[r3]─► ... ─►[rn]─► (dropped)
//!               ▲     └─────┴────Σ─────┘
//!               │                │ mod base
//!               └────────────────┴──────────► output
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mseq_core::lfsr::MultiLevelLfsr;
//! use mseq_core::Alphabet;
//!
//! // x^2 + x + 1 over GF(2): period 3
//! let mut lfsr = MultiLevelLfsr::new(Alphabet::Binary, vec![1, 1]);
//! let bits: Vec<u8> = lfsr.by_ref().take(3).collect();
//! assert_eq!(bits, vec![0, 1, 1]);
//! assert_eq!(lfsr.state(), vec![1, 1]);
//! ```

use std::collections::VecDeque;

use crate::types::{Alphabet, RawSymbol};

/// Linear feedback shift register over a 2, 3 or 5 level alphabet.
#[derive(Debug, Clone)]
pub struct MultiLevelLfsr {
    alphabet: Alphabet,
    /// Feedback weight per stage, newest stage first.
    weights: Vec<u8>,
    /// Last `weights.len()` symbols, newest first.
    register: VecDeque<RawSymbol>,
}

impl MultiLevelLfsr {
    /// Create a register with all stages set to one.
    ///
    /// The register length is the number of weights.
    pub fn new(alphabet: Alphabet, weights: Vec<u8>) -> Self {
        let register = std::iter::repeat(1).take(weights.len()).collect();
        Self {
            alphabet,
            weights,
            register,
        }
    }

    /// Advance one step and return the produced symbol.
    #[inline]
    pub fn clock(&mut self) -> RawSymbol {
        let base = self.alphabet.base();
        let sum: u32 = self
            .weights
            .iter()
            .zip(self.register.iter())
            .map(|(&w, &r)| w as u32 * r as u32)
            .sum();
        let next = (sum % base) as RawSymbol;

        // A zero-length register has nothing to shift.
        if self.register.pop_back().is_some() {
            self.register.push_front(next);
        }
        next
    }

    /// Produce `n` symbols.
    pub fn generate(&mut self, n: usize) -> Vec<RawSymbol> {
        (0..n).map(|_| self.clock()).collect()
    }

    /// Current register contents, newest first.
    pub fn state(&self) -> Vec<RawSymbol> {
        self.register.iter().copied().collect()
    }

    /// Restore the all-ones start state.
    pub fn reset(&mut self) {
        self.register.iter_mut().for_each(|r| *r = 1);
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn weights(&self) -> &[u8] {
        &self.weights
    }

    /// Register length.
    pub fn power(&self) -> u32 {
        self.weights.len() as u32
    }

    /// Maximal period `base^power - 1`.
    pub fn period(&self) -> usize {
        self.alphabet.period(self.power())
    }
}

impl Iterator for MultiLevelLfsr {
    type Item = RawSymbol;

    fn next(&mut self) -> Option<RawSymbol> {
        Some(self.clock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taps::{get_taps, supported_powers};
    use std::collections::HashSet;

    #[test]
    fn test_two_stage_trace() {
        let mut lfsr = MultiLevelLfsr::new(Alphabet::Binary, vec![1, 1]);
        assert_eq!(lfsr.state(), vec![1, 1]);
        assert_eq!(lfsr.clock(), 0);
        assert_eq!(lfsr.state(), vec![0, 1]);
        assert_eq!(lfsr.clock(), 1);
        assert_eq!(lfsr.state(), vec![1, 0]);
        assert_eq!(lfsr.clock(), 1);
        assert_eq!(lfsr.state(), vec![1, 1]);
    }

    #[test]
    fn test_register_length_constant() {
        let mut lfsr = MultiLevelLfsr::new(Alphabet::Ternary, vec![0, 1, 2]);
        for _ in 0..100 {
            lfsr.clock();
            assert_eq!(lfsr.state().len(), 3);
        }
    }

    #[test]
    fn test_empty_register_stays_empty() {
        let mut lfsr = MultiLevelLfsr::new(Alphabet::Binary, vec![]);
        assert_eq!(lfsr.clock(), 0);
        assert_eq!(lfsr.clock(), 0);
        assert!(lfsr.state().is_empty());
        assert_eq!(lfsr.power(), 0);
    }

    #[test]
    fn test_symbols_in_range() {
        let mut lfsr = MultiLevelLfsr::new(Alphabet::Quinary, vec![4, 3]);
        assert!(lfsr.generate(48).iter().all(|&s| s < 5));
    }

    #[test]
    fn test_reset() {
        let mut lfsr = MultiLevelLfsr::new(Alphabet::Binary, vec![1, 0, 1]);
        let first = lfsr.generate(7);
        lfsr.reset();
        assert_eq!(lfsr.state(), vec![1, 1, 1]);
        assert_eq!(lfsr.generate(7), first);
    }

    #[test]
    fn test_period_accessor() {
        let lfsr = MultiLevelLfsr::new(Alphabet::Ternary, vec![0, 0, 2, 1]);
        assert_eq!(lfsr.power(), 4);
        assert_eq!(lfsr.period(), 80);
    }

    /// Every tabulated configuration visits each non-zero state exactly once.
    fn assert_maximal(alphabet: Alphabet, power: u32) {
        let taps = get_taps(alphabet.base(), power).unwrap();
        for (k, tap) in taps.iter().enumerate() {
            let mut lfsr = MultiLevelLfsr::new(alphabet, tap.weights(power));
            let period = lfsr.period();
            let mut seen = HashSet::with_capacity(period);
            let mut first = Vec::with_capacity(period);
            for _ in 0..period {
                assert!(
                    seen.insert(lfsr.state()),
                    "{alphabet} power {power} selection {} repeats a state",
                    k + 1
                );
                first.push(lfsr.clock());
            }
            assert_eq!(lfsr.state(), vec![1; power as usize]);
            assert_eq!(lfsr.generate(period), first);
        }
    }

    #[test]
    fn test_binary_tables_maximal() {
        for power in 2..=12 {
            assert_maximal(Alphabet::Binary, power);
        }
    }

    #[test]
    fn test_ternary_tables_maximal() {
        for power in supported_powers(Alphabet::Ternary) {
            assert_maximal(Alphabet::Ternary, power);
        }
    }

    #[test]
    fn test_quinary_tables_maximal() {
        for power in supported_powers(Alphabet::Quinary) {
            assert_maximal(Alphabet::Quinary, power);
        }
    }
}
