//! # M-Sequence Library
//!
//! Maximum-length sequences (m-sequences) over 2, 3 and 5 level alphabets,
//! generated by linear feedback shift registers with curated feedback taps.
//! M-sequences have period `base^power - 1` and a nearly flat spectrum,
//! which makes them useful for event-related fMRI stimulus ordering and
//! for system identification excitation signals.
//!
//! ## Signal Flow
//!
//! ```text
//! (base, power) → Tap Table → weights → LFSR (one period) → Rotate → Remap → [i8]
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mseq_core::{generate, get_taps};
//!
//! // Ternary sequence of length 3^4 - 1 = 80, rotated by 5, third tap row
//! let ms = generate(3, 4, 5, 3).unwrap();
//! assert_eq!(ms.len(), 80);
//! assert!(ms.iter().all(|s| (-1..=1).contains(s)));
//!
//! // Eight tap rows are tabulated for 3^4
//! assert_eq!(get_taps(3, 4).unwrap().len(), 8);
//! ```
//!
//! Register values are taken from W.D.T. Davies, *System Identification for
//! Self-Adaptive Control*, Wiley-Interscience, 1970. For the fMRI use case
//! see G.T. Buracas & G.M. Boynton (2002), *Efficient Design of
//! Event-Related fMRI Experiments Using M-sequences*, NeuroImage 16, 801-813.

pub mod analysis;
pub mod config;
pub mod lfsr;
pub mod logging;
pub mod mseq;
pub mod taps;
pub mod types;

// Re-export main types
pub use config::{ConfigError, MseqConfig, SequenceConfig};
pub use lfsr::MultiLevelLfsr;
pub use mseq::{generate, generate_with_rng, MSequence, MseqParams};
pub use taps::{get_taps, TapConfig, TapSet};
pub use types::{Alphabet, MseqError, MseqResult, RawSymbol, Symbol};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::mseq::{generate, generate_with_rng, MSequence, MseqParams};
    pub use crate::taps::{get_taps, TapConfig, TapSet};
    pub use crate::types::{Alphabet, MseqError, MseqResult};
}
