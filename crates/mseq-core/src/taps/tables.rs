//! Curated feedback-tap tables
//!
//! Register values are taken from W.D.T. Davies, *System Identification for
//! Self-Adaptive Control*, Wiley-Interscience, 1970.
//!
//! Binary rows list 1-based tapped stages. Ternary and quinary rows list one
//! weight per stage, newest stage first. Row order is the selection order.

// ============================================================================
// Binary (mod 2) tap positions
// ============================================================================

const BINARY_2: &[&[u8]] = &[&[1, 2]];

const BINARY_3: &[&[u8]] = &[
    &[1, 3],
    &[2, 3],
];

const BINARY_4: &[&[u8]] = &[
    &[1, 4],
    &[3, 4],
];

const BINARY_5: &[&[u8]] = &[
    &[2, 5],
    &[3, 5],
    &[1, 2, 3, 5],
    &[2, 3, 4, 5],
    &[1, 2, 4, 5],
    &[1, 3, 4, 5],
];

const BINARY_6: &[&[u8]] = &[
    &[1, 6],
    &[5, 6],
    &[1, 2, 5, 6],
    &[1, 4, 5, 6],
    &[1, 3, 4, 6],
    &[2, 3, 5, 6],
];

const BINARY_7: &[&[u8]] = &[
    &[1, 7],
    &[6, 7],
    &[3, 7],
    &[4, 7],
    &[1, 2, 3, 7],
    &[4, 5, 6, 7],
    &[1, 2, 5, 7],
    &[2, 5, 6, 7],
    &[2, 3, 4, 7],
    &[3, 4, 5, 7],
    &[1, 3, 5, 7],
    &[2, 4, 6, 7],
    &[1, 3, 6, 7],
    &[1, 4, 6, 7],
    &[2, 3, 4, 5, 6, 7],
    &[1, 2, 3, 4, 5, 7],
    &[1, 2, 4, 5, 6, 7],
    &[1, 2, 3, 5, 6, 7],
];

const BINARY_8: &[&[u8]] = &[
    &[1, 2, 7, 8],
    &[1, 6, 7, 8],
    &[1, 3, 5, 8],
    &[3, 5, 7, 8],
    &[2, 3, 4, 8],
    &[4, 5, 6, 8],
    &[2, 3, 5, 8],
    &[3, 5, 6, 8],
    &[2, 3, 6, 8],
    &[2, 5, 6, 8],
    &[2, 3, 7, 8],
    &[1, 5, 6, 8],
    &[1, 2, 3, 4, 6, 8],
    &[2, 4, 5, 6, 7, 8],
    &[1, 2, 3, 6, 7, 8],
    &[1, 2, 5, 6, 7, 8],
];

const BINARY_9: &[&[u8]] = &[
    &[4, 9],
    &[5, 9],
    &[3, 4, 6, 9],
    &[3, 5, 6, 9],
    &[4, 5, 8, 9],
    &[1, 4, 5, 9],
    &[1, 4, 8, 9],
    &[1, 5, 8, 9],
    &[2, 3, 5, 9],
    &[4, 6, 7, 9],
    &[5, 6, 8, 9],
    &[1, 3, 4, 9],
    &[2, 7, 8, 9],
    &[1, 2, 7, 9],
    &[2, 4, 7, 9],
    &[2, 5, 7, 9],
    &[2, 4, 8, 9],
    &[1, 5, 7, 9],
    &[1, 2, 4, 5, 6, 9],
    &[3, 4, 5, 7, 8, 9],
    &[1, 3, 4, 6, 7, 9],
    &[2, 3, 5, 6, 8, 9],
    &[3, 5, 6, 7, 8, 9],
    &[1, 2, 3, 4, 6, 9],
    &[1, 5, 6, 7, 8, 9],
    &[1, 2, 3, 4, 8, 9],
    &[1, 2, 3, 7, 8, 9],
    &[1, 2, 6, 7, 8, 9],
    &[1, 3, 5, 6, 8, 9],
    &[1, 3, 4, 6, 8, 9],
    &[1, 2, 3, 5, 6, 9],
    &[3, 4, 6, 7, 8, 9],
    &[2, 3, 6, 7, 8, 9],
    &[1, 2, 3, 6, 7, 9],
    &[1, 4, 5, 6, 8, 9],
    &[1, 3, 4, 5, 8, 9],
    &[1, 3, 6, 7, 8, 9],
    &[1, 2, 3, 6, 8, 9],
    &[2, 3, 4, 5, 6, 9],
    &[3, 4, 5, 6, 7, 9],
    &[2, 4, 6, 7, 8, 9],
    &[1, 2, 3, 5, 7, 9],
    &[2, 3, 4, 5, 7, 9],
    &[2, 4, 5, 6, 7, 9],
    &[1, 2, 4, 5, 7, 9],
    &[2, 4, 5, 6, 7, 9],
    &[1, 3, 4, 5, 6, 7, 8, 9],
    &[1, 2, 3, 4, 5, 6, 8, 9],
];

const BINARY_10: &[&[u8]] = &[
    &[3, 10],
    &[7, 10],
    &[2, 3, 8, 10],
    &[2, 7, 8, 10],
    &[1, 3, 4, 10],
    &[6, 7, 9, 10],
    &[1, 5, 8, 10],
    &[2, 5, 9, 10],
    &[4, 5, 8, 10],
    &[2, 5, 6, 10],
    &[1, 4, 9, 10],
    &[1, 6, 9, 10],
    &[3, 4, 8, 10],
    &[2, 6, 7, 10],
    &[2, 3, 5, 10],
    &[5, 7, 8, 10],
    &[1, 2, 5, 10],
    &[5, 8, 9, 10],
    &[2, 4, 9, 10],
    &[1, 6, 8, 10],
    &[3, 7, 9, 10],
    &[1, 3, 7, 10],
    &[1, 2, 3, 5, 6, 10],
    &[4, 5, 7, 8, 9, 10],
    &[2, 3, 6, 8, 9, 10],
    &[1, 2, 4, 7, 8, 10],
    &[1, 5, 6, 8, 9, 10],
    &[1, 2, 4, 5, 9, 10],
    &[2, 5, 6, 7, 8, 10],
    &[2, 3, 4, 5, 8, 10],
    &[2, 4, 6, 8, 9, 10],
    &[1, 2, 4, 6, 8, 10],
    &[1, 2, 3, 7, 8, 10],
    &[2, 3, 7, 8, 9, 10],
    &[3, 4, 5, 8, 9, 10],
    &[1, 2, 5, 6, 7, 10],
    &[1, 4, 6, 7, 9, 10],
    &[1, 3, 4, 6, 9, 10],
    &[1, 2, 6, 8, 9, 10],
    &[1, 2, 4, 8, 9, 10],
    &[1, 4, 7, 8, 9, 10],
    &[1, 2, 3, 6, 9, 10],
    &[1, 2, 6, 7, 8, 10],
    &[2, 3, 4, 8, 9, 10],
    &[1, 2, 4, 6, 7, 10],
    &[3, 4, 6, 8, 9, 10],
    &[2, 4, 5, 7, 9, 10],
    &[1, 3, 5, 6, 8, 10],
    &[3, 4, 5, 6, 9, 10],
    &[1, 4, 5, 6, 7, 10],
    &[1, 3, 4, 5, 6, 7, 8, 10],
    &[2, 3, 4, 5, 6, 7, 9, 10],
    &[3, 4, 5, 6, 7, 8, 9, 10],
    &[1, 2, 3, 4, 5, 6, 7, 10],
    &[1, 2, 3, 4, 5, 6, 9, 10],
    &[1, 4, 5, 6, 7, 8, 9, 10],
    &[2, 3, 4, 5, 6, 8, 9, 10],
    &[1, 2, 4, 5, 6, 7, 8, 10],
    &[1, 2, 3, 4, 6, 7, 9, 10],
    &[1, 3, 4, 6, 7, 8, 9, 10],
];

const BINARY_11: &[&[u8]] = &[&[9, 11]];

const BINARY_12: &[&[u8]] = &[&[6, 8, 11, 12]];

const BINARY_13: &[&[u8]] = &[&[9, 10, 12, 13]];

const BINARY_14: &[&[u8]] = &[&[4, 8, 13, 14]];

const BINARY_15: &[&[u8]] = &[&[14, 15]];

const BINARY_16: &[&[u8]] = &[&[4, 13, 15, 16]];

const BINARY_17: &[&[u8]] = &[&[14, 17]];

const BINARY_18: &[&[u8]] = &[&[11, 18]];

const BINARY_19: &[&[u8]] = &[&[14, 17, 18, 19]];

const BINARY_20: &[&[u8]] = &[&[17, 20]];

const BINARY_21: &[&[u8]] = &[&[19, 21]];

const BINARY_22: &[&[u8]] = &[&[21, 22]];

const BINARY_23: &[&[u8]] = &[&[18, 23]];

const BINARY_24: &[&[u8]] = &[&[17, 22, 23, 24]];

const BINARY_25: &[&[u8]] = &[&[22, 25]];

const BINARY_26: &[&[u8]] = &[&[20, 24, 25, 26]];

const BINARY_27: &[&[u8]] = &[&[22, 25, 26, 27]];

const BINARY_28: &[&[u8]] = &[&[25, 28]];

const BINARY_29: &[&[u8]] = &[&[27, 29]];

const BINARY_30: &[&[u8]] = &[&[7, 28, 29, 30]];

/// Binary rows for a register of `power` stages.
pub(super) fn binary(power: u32) -> Option<&'static [&'static [u8]]> {
    let rows = match power {
        2 => BINARY_2,
        3 => BINARY_3,
        4 => BINARY_4,
        5 => BINARY_5,
        6 => BINARY_6,
        7 => BINARY_7,
        8 => BINARY_8,
        9 => BINARY_9,
        10 => BINARY_10,
        11 => BINARY_11,
        12 => BINARY_12,
        13 => BINARY_13,
        14 => BINARY_14,
        15 => BINARY_15,
        16 => BINARY_16,
        17 => BINARY_17,
        18 => BINARY_18,
        19 => BINARY_19,
        20 => BINARY_20,
        21 => BINARY_21,
        22 => BINARY_22,
        23 => BINARY_23,
        24 => BINARY_24,
        25 => BINARY_25,
        26 => BINARY_26,
        27 => BINARY_27,
        28 => BINARY_28,
        29 => BINARY_29,
        30 => BINARY_30,
        _ => return None,
    };
    Some(rows)
}

// ============================================================================
// Ternary (mod 3) stage weights
// ============================================================================

const TERNARY_2: &[&[u8]] = &[
    &[2, 1],
    &[1, 1],
];

const TERNARY_3: &[&[u8]] = &[
    &[0, 1, 2],
    &[1, 0, 2],
    &[1, 2, 2],
    &[2, 1, 2],
];

const TERNARY_4: &[&[u8]] = &[
    &[0, 0, 2, 1],
    &[0, 0, 1, 1],
    &[2, 0, 0, 1],
    &[2, 2, 1, 1],
    &[2, 1, 1, 1],
    &[1, 0, 0, 1],
    &[1, 2, 2, 1],
    &[1, 1, 2, 1],
];

const TERNARY_5: &[&[u8]] = &[
    &[0, 0, 0, 1, 2],
    &[0, 0, 0, 1, 2],
    &[0, 0, 1, 2, 2],
    &[0, 2, 1, 0, 2],
    &[0, 2, 1, 1, 2],
    &[0, 1, 2, 0, 2],
    &[0, 1, 1, 2, 2],
    &[2, 0, 0, 1, 2],
    &[2, 0, 2, 0, 2],
    &[2, 0, 2, 2, 2],
    &[2, 2, 0, 2, 2],
    &[2, 2, 2, 1, 2],
    &[2, 2, 1, 2, 2],
    &[2, 1, 2, 2, 2],
    &[2, 1, 1, 0, 2],
    &[1, 0, 0, 0, 2],
    &[1, 0, 0, 2, 2],
    &[1, 0, 1, 1, 2],
    &[1, 2, 2, 2, 2],
    &[1, 1, 0, 1, 2],
    &[1, 1, 2, 0, 2],
];

const TERNARY_6: &[&[u8]] = &[
    &[0, 0, 0, 0, 2, 1],
    &[0, 0, 0, 0, 1, 1],
    &[0, 0, 2, 0, 2, 1],
    &[0, 0, 1, 0, 1, 1],
    &[0, 2, 0, 1, 2, 1],
    &[0, 2, 0, 1, 1, 1],
    &[0, 2, 2, 0, 1, 1],
    &[0, 2, 2, 2, 1, 1],
    &[2, 1, 1, 1, 0, 1],
    &[1, 0, 0, 0, 0, 1],
    &[1, 0, 2, 1, 0, 1],
    &[1, 0, 1, 0, 0, 1],
    &[1, 0, 1, 2, 1, 1],
    &[1, 0, 1, 1, 1, 1],
    &[1, 2, 0, 2, 2, 1],
    &[1, 2, 0, 1, 0, 1],
    &[1, 2, 2, 1, 2, 1],
    &[1, 2, 1, 0, 1, 1],
    &[1, 2, 1, 2, 1, 1],
    &[1, 2, 1, 1, 2, 1],
    &[1, 1, 2, 1, 0, 1],
    &[1, 1, 1, 0, 1, 1],
    &[1, 1, 1, 2, 0, 1],
    &[1, 1, 1, 1, 1, 1],
];

const TERNARY_7: &[&[u8]] = &[
    &[0, 0, 0, 0, 2, 1, 2],
    &[0, 0, 0, 0, 1, 0, 2],
    &[0, 0, 0, 2, 0, 2, 2],
    &[0, 0, 0, 2, 2, 2, 2],
    &[0, 0, 0, 2, 1, 0, 2],
    &[0, 0, 0, 1, 1, 2, 2],
    &[0, 0, 0, 1, 1, 1, 2],
    &[0, 0, 2, 2, 2, 0, 2],
    &[0, 0, 2, 2, 1, 2, 2],
    &[0, 0, 2, 1, 0, 0, 2],
    &[0, 0, 2, 1, 2, 2, 2],
    &[0, 0, 1, 0, 2, 1, 2],
    &[0, 0, 1, 0, 1, 1, 2],
    &[0, 0, 1, 1, 0, 1, 2],
    &[0, 0, 1, 1, 2, 0, 2],
    &[0, 2, 0, 0, 0, 2, 2],
    &[0, 2, 0, 0, 1, 0, 2],
    &[0, 2, 0, 0, 1, 1, 2],
    &[0, 2, 0, 2, 2, 0, 2],
    &[0, 2, 0, 2, 1, 2, 2],
    &[0, 2, 0, 1, 1, 0, 2],
    &[0, 2, 2, 0, 2, 0, 2],
    &[0, 2, 2, 0, 1, 2, 2],
    &[0, 2, 2, 2, 2, 1, 2],
    &[0, 2, 2, 2, 1, 0, 2],
    &[0, 2, 2, 1, 0, 1, 2],
    &[0, 2, 2, 1, 2, 2, 2],
];

/// Ternary rows for a register of `power` stages.
pub(super) fn ternary(power: u32) -> Option<&'static [&'static [u8]]> {
    let rows = match power {
        2 => TERNARY_2,
        3 => TERNARY_3,
        4 => TERNARY_4,
        5 => TERNARY_5,
        6 => TERNARY_6,
        7 => TERNARY_7,
        _ => return None,
    };
    Some(rows)
}

// ============================================================================
// Quinary (mod 5) stage weights
// ============================================================================

const QUINARY_2: &[&[u8]] = &[
    &[4, 3],
    &[3, 2],
    &[2, 2],
    &[1, 3],
];

const QUINARY_3: &[&[u8]] = &[
    &[0, 2, 3],
    &[4, 1, 2],
    &[3, 0, 2],
    &[3, 4, 2],
    &[3, 3, 3],
    &[3, 3, 2],
    &[3, 1, 3],
    &[2, 0, 3],
    &[2, 4, 3],
    &[2, 3, 3],
    &[2, 3, 2],
    &[2, 1, 2],
    &[1, 0, 2],
    &[1, 4, 3],
    &[1, 1, 3],
];

const QUINARY_4: &[&[u8]] = &[
    &[0, 4, 3, 3],
    &[0, 4, 3, 2],
    &[0, 4, 2, 3],
    &[0, 4, 2, 2],
    &[0, 1, 4, 3],
    &[0, 1, 4, 2],
    &[0, 1, 1, 3],
    &[0, 1, 1, 2],
    &[4, 0, 4, 2],
    &[4, 0, 3, 2],
    &[4, 0, 2, 3],
    &[4, 0, 1, 3],
    &[4, 4, 4, 2],
    &[4, 3, 0, 3],
    &[4, 3, 4, 3],
    &[4, 2, 0, 2],
    &[4, 2, 1, 3],
    &[4, 1, 1, 2],
    &[3, 0, 4, 2],
    &[3, 0, 3, 3],
    &[3, 0, 2, 2],
    &[3, 0, 1, 3],
    &[3, 4, 3, 2],
    &[3, 3, 0, 2],
    &[3, 3, 3, 3],
    &[3, 2, 0, 3],
    &[3, 2, 2, 3],
    &[3, 1, 2, 2],
    &[2, 0, 4, 3],
    &[2, 0, 3, 2],
    &[2, 0, 2, 3],
    &[2, 0, 1, 2],
    &[2, 4, 2, 2],
    &[2, 3, 0, 2],
    &[2, 3, 2, 3],
    &[2, 2, 0, 3],
    &[2, 2, 3, 3],
    &[2, 1, 3, 2],
    &[1, 0, 4, 3],
    &[1, 0, 3, 3],
    &[1, 0, 2, 2],
    &[1, 0, 1, 2],
    &[1, 4, 1, 2],
    &[1, 3, 0, 3],
    &[1, 3, 1, 3],
    &[1, 2, 0, 2],
    &[1, 2, 4, 3],
    &[1, 1, 4, 2],
];

/// Quinary rows for a register of `power` stages.
pub(super) fn quinary(power: u32) -> Option<&'static [&'static [u8]]> {
    let rows = match power {
        2 => QUINARY_2,
        3 => QUINARY_3,
        4 => QUINARY_4,
        _ => return None,
    };
    Some(rows)
}
