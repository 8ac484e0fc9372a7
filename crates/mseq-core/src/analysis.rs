//! Sequence analysis helpers
//!
//! Periodic correlation and symbol statistics for signed m-sequences, as
//! used when laying out stimulus schedules or excitation signals. For a binary
//! m-sequence of length `N` the periodic autocorrelation is two-valued:
//!
//! ```text
//!   R(0) = N,   R(k) = -1   for 0 < k < N
//! ```

use std::collections::BTreeMap;

use crate::types::Symbol;

/// Periodic autocorrelation of a signed sequence at `lag`.
pub fn autocorrelation(sequence: &[Symbol], lag: usize) -> i64 {
    let n = sequence.len();
    sequence
        .iter()
        .enumerate()
        .map(|(i, &s)| s as i64 * sequence[(i + lag) % n] as i64)
        .sum()
}

/// Periodic cross-correlation of two equal-length sequences at `lag`.
///
/// Returns `None` when the lengths differ.
pub fn cross_correlation(seq_a: &[Symbol], seq_b: &[Symbol], lag: usize) -> Option<i64> {
    if seq_a.len() != seq_b.len() {
        return None;
    }
    let n = seq_b.len();
    Some(
        seq_a
            .iter()
            .enumerate()
            .map(|(i, &s)| s as i64 * seq_b[(i + lag) % n] as i64)
            .sum(),
    )
}

/// Occurrences of each symbol.
pub fn symbol_counts(sequence: &[Symbol]) -> BTreeMap<Symbol, usize> {
    let mut counts = BTreeMap::new();
    for &s in sequence {
        *counts.entry(s).or_insert(0) += 1;
    }
    counts
}
