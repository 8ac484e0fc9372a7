//! M-Sequence Generator
//!
//! Produces one full period of a maximum-length sequence for a tabulated
//! `(base, power)` pair, rotated cyclically and remapped onto a signed
//! alphabet.
//!
//! ## Signal Flow
//!
//! ```text
//! (base, power) → Tap Table → select row → weights
//!                                             │
//!   register = [1; power] → LFSR × (base^power - 1) → rotate(shift) → remap
//! ```
//!
//! ## Selection Policy
//!
//! - `selection = 0` draws a row uniformly from `1..=len`.
//! - `selection > len` wraps around to `selection % len + 1` and logs a
//!   warning.
//!
//! ## Example
//!
//! ```rust
//! use mseq_core::mseq::{generate, MSequence, MseqParams};
//!
//! // Binary sequence of length 2^3 - 1 using the second tap row
//! let ms = generate(2, 3, 0, 2).unwrap();
//! assert_eq!(ms, vec![-1, -1, 1, -1, 1, 1, 1]);
//!
//! // Same thing through the builder
//! let params = MseqParams::builder().base(2).power(3).shift(0).selection(2).build();
//! let seq = MSequence::new(&params).unwrap();
//! assert_eq!(seq.generate(), ms);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::lfsr::MultiLevelLfsr;
use crate::taps::get_taps;
use crate::types::{Alphabet, MseqError, MseqResult, RawSymbol, Symbol};

/// Generation parameters.
///
/// Defaults follow the classic `mseq` toolbox convention: shift by one,
/// first tap row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MseqParams {
    /// Number of sequence levels (2, 3 or 5)
    pub base: u32,
    /// Register length; the sequence has `base^power - 1` symbols
    pub power: u32,
    /// Cyclic left rotation, reduced modulo the sequence length
    pub shift: usize,
    /// 1-based tap row, or 0 for a random row
    pub selection: usize,
}

impl Default for MseqParams {
    fn default() -> Self {
        Self {
            base: 2,
            power: 5,
            shift: 1,
            selection: 1,
        }
    }
}

impl MseqParams {
    /// Create a new builder for generation parameters
    pub fn builder() -> MseqParamsBuilder {
        MseqParamsBuilder::default()
    }
}

/// Builder for MseqParams
#[derive(Debug, Default)]
pub struct MseqParamsBuilder {
    params: MseqParams,
}

impl MseqParamsBuilder {
    pub fn base(mut self, base: u32) -> Self {
        self.params.base = base;
        self
    }

    pub fn power(mut self, power: u32) -> Self {
        self.params.power = power;
        self
    }

    pub fn shift(mut self, shift: usize) -> Self {
        self.params.shift = shift;
        self
    }

    pub fn selection(mut self, selection: usize) -> Self {
        self.params.selection = selection;
        self
    }

    /// Shorthand for `selection(0)`.
    pub fn random_selection(self) -> Self {
        self.selection(0)
    }

    pub fn build(self) -> MseqParams {
        self.params
    }
}

/// A resolved m-sequence: tap row chosen, ready to generate.
#[derive(Debug, Clone)]
pub struct MSequence {
    alphabet: Alphabet,
    power: u32,
    /// Rotation already reduced modulo the period
    shift: usize,
    /// Resolved 1-based tap row
    selection: usize,
    table_len: usize,
    weights: Vec<u8>,
}

impl MSequence {
    /// Resolve `params`, drawing a random row from the thread RNG if
    /// `selection` is 0.
    pub fn new(params: &MseqParams) -> MseqResult<Self> {
        Self::with_rng(params, &mut rand::thread_rng())
    }

    /// Resolve `params` using `rng` for a random row selection.
    pub fn with_rng<R: Rng + ?Sized>(params: &MseqParams, rng: &mut R) -> MseqResult<Self> {
        let taps = get_taps(params.base, params.power)?;
        let alphabet = taps.alphabet();
        let selection = resolve_selection(params.selection, taps.len(), rng);
        let weights = taps
            .get(selection)
            .ok_or(MseqError::UndefinedSequence {
                base: params.base,
                power: params.power,
            })?
            .weights(params.power);
        let period = taps.period();

        tracing::debug!(
            base = params.base,
            power = params.power,
            selection,
            period,
            "m-sequence resolved"
        );

        Ok(Self {
            alphabet,
            power: params.power,
            shift: params.shift % period,
            selection,
            table_len: taps.len(),
            weights,
        })
    }

    /// One period of raw symbols in `[0, base-1]`, unrotated.
    pub fn raw(&self) -> Vec<RawSymbol> {
        self.lfsr().generate(self.period())
    }

    /// One period, rotated by the shift and remapped to signed symbols.
    pub fn generate(&self) -> Vec<Symbol> {
        let mut raw = self.raw();
        raw.rotate_left(self.shift);
        raw.into_iter().map(|v| self.alphabet.to_signed(v)).collect()
    }

    /// Fresh register loaded with this sequence's weights.
    pub fn lfsr(&self) -> MultiLevelLfsr {
        MultiLevelLfsr::new(self.alphabet, self.weights.clone())
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    /// Effective rotation in `0..period`.
    pub fn shift(&self) -> usize {
        self.shift
    }

    /// Resolved 1-based tap row.
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Number of rows the selection was made from.
    pub fn table_len(&self) -> usize {
        self.table_len
    }

    pub fn weights(&self) -> &[u8] {
        &self.weights
    }

    /// Sequence length `base^power - 1`.
    pub fn period(&self) -> usize {
        self.alphabet.period(self.power)
    }
}

/// Map a requested selection onto `1..=table_len`.
///
/// Zero draws uniformly from `rng`; values past the end wrap around with a
/// warning. `table_len` must be non-zero.
pub fn resolve_selection<R: Rng + ?Sized>(selection: usize, table_len: usize, rng: &mut R) -> usize {
    if selection == 0 {
        let drawn = rng.gen_range(1..=table_len);
        tracing::trace!(drawn, table_len, "random tap selection");
        drawn
    } else if selection > table_len {
        let wrapped = selection % table_len + 1;
        tracing::warn!(
            requested = selection,
            resolved = wrapped,
            table_len,
            "tap selection out of range, wrapping around"
        );
        wrapped
    } else {
        selection
    }
}

/// Generate a signed m-sequence of length `base^power - 1`.
///
/// - `shift`: cyclic left rotation (0 disables)
/// - `selection`: 1-based tap row, 0 for random
pub fn generate(base: u32, power: u32, shift: usize, selection: usize) -> MseqResult<Vec<Symbol>> {
    generate_with_rng(base, power, shift, selection, &mut rand::thread_rng())
}

/// [`generate`] with an injected random source for `selection = 0`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    base: u32,
    power: u32,
    shift: usize,
    selection: usize,
    rng: &mut R,
) -> MseqResult<Vec<Symbol>> {
    let params = MseqParams {
        base,
        power,
        shift,
        selection,
    };
    Ok(MSequence::with_rng(&params, rng)?.generate())
}

/// One unrotated period of raw symbols in `[0, base-1]`.
pub fn raw_sequence(base: u32, power: u32, selection: usize) -> MseqResult<Vec<RawSymbol>> {
    let params = MseqParams {
        base,
        power,
        shift: 0,
        selection,
    };
    Ok(MSequence::new(&params)?.raw())
}

/// Cyclic left rotation: `seq[shift..] ++ seq[..shift]`, with `shift`
/// reduced modulo the length.
pub fn rotate_left<T: Clone>(seq: &[T], shift: usize) -> Vec<T> {
    let mut out = seq.to_vec();
    if !out.is_empty() {
        out.rotate_left(shift % seq.len());
    }
    out
}

/// Remap raw symbols of a `base`-level sequence onto the signed alphabet.
pub fn remap(base: u32, raw: &[RawSymbol]) -> MseqResult<Vec<Symbol>> {
    let alphabet = Alphabet::try_from(base)?;
    Ok(raw.iter().map(|&v| alphabet.to_signed(v)).collect())
}
