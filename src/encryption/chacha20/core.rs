//! ChaCha block function
//!
//! This module provides the ChaCha block transform over a [`BlockState`]
//! with a 64-bit block counter and a 64-bit nonce (the original
//! Bernstein layout).
//!
//! It exposes two pure functions over the permutation:
//! - [`block_round`]: the keystream block, with the feed-forward addition
//! - [`permute`]: the bare permutation, without feed-forward, used to
//!   derive extended-nonce subkeys
//!
//! Neither function keeps any state, so both are safe to call from any
//! number of threads at once.

use crate::primitives::{BlockState, STATE_BYTES, STATE_WORDS, bits};

/// ChaCha constant words.
///
/// These values correspond to the ASCII string `"expand 32-byte k"`
/// encoded as little-endian `u32` words.
pub const SIGMA: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Number of double-rounds used by the extended-nonce reduction.
pub const HCHACHA_DOUBLE_ROUNDS: u32 = 10;

/// Performs one ChaCha quarter round.
///
/// Mixes four words with addition modulo 2³², XOR and left rotations by
/// 16, 12, 8 and 7 bits.
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// One column pass followed by one diagonal pass.
#[cfg(not(feature = "speed"))]
#[inline(always)]
fn double_round(state: &mut [u32; 16]) {
    const COLUMNS: [[usize; 4]; 4] = [[0, 4, 8, 12], [1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15]];
    const DIAGONALS: [[usize; 4]; 4] = [[0, 5, 10, 15], [1, 6, 11, 12], [2, 7, 8, 13], [3, 4, 9, 14]];

    for [a, b, c, d] in COLUMNS {
        quarter_round(state, a, b, c, d);
    }

    for [a, b, c, d] in DIAGONALS {
        quarter_round(state, a, b, c, d);
    }
}

#[cfg(feature = "speed")]
#[inline(always)]
fn double_round(state: &mut [u32; 16]) {
    // Column rounds
    quarter_round(state, 0, 4, 8, 12);
    quarter_round(state, 1, 5, 9, 13);
    quarter_round(state, 2, 6, 10, 14);
    quarter_round(state, 3, 7, 11, 15);

    // Diagonal rounds
    quarter_round(state, 0, 5, 10, 15);
    quarter_round(state, 1, 6, 11, 12);
    quarter_round(state, 2, 7, 8, 13);
    quarter_round(state, 3, 4, 9, 14);
}

/// Applies `double_rounds` double-rounds to `state` with no feed-forward.
///
/// The raw permuted words are returned. This is the reduction used to derive
/// extended-nonce subkeys.
pub fn permute(state: &BlockState, double_rounds: u32) -> [u32; STATE_WORDS] {
    let mut working = *state.words();

    for _ in 0..double_rounds {
        double_round(&mut working);
    }

    working
}

/// Computes one keystream block.
///
/// The working register is `state` with words 12-13 replaced by `counter`
/// and words 14-15 replaced by `nonce` (low word first). `rounds` counts
/// single rounds: `rounds / 2` double-rounds are applied, so ChaCha20 uses
/// `rounds = 20`. The initial register is added back after the rounds
/// (feed-forward).
pub fn block_round(state: &BlockState, rounds: u32, counter: u64, nonce: u64) -> [u32; STATE_WORDS] {
    let mut initial = *state.words();
    (initial[12], initial[13]) = bits::split(counter);
    (initial[14], initial[15]) = bits::split(nonce);

    let mut working = initial;

    for _ in 0..(rounds >> 1) {
        double_round(&mut working);
    }

    working
        .iter_mut()
        .zip(&initial)
        .for_each(|(w, i)| *w = w.wrapping_add(*i));

    working
}

/// Computes one keystream block serialized as 64 little-endian bytes.
pub fn keystream(state: &BlockState, rounds: u32, counter: u64, nonce: u64) -> [u8; STATE_BYTES] {
    let words = block_round(state, rounds, counter, nonce);

    let mut out = [0u8; STATE_BYTES];
    out.chunks_exact_mut(4)
        .zip(&words)
        .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

    out
}

/// HChaCha20: derives a 256-bit subkey from a register holding the
/// constants, a key and a 128-bit nonce in words 12-15.
///
/// Returns words 0-3 and 12-15 of the permuted state, without feed-forward.
pub fn hchacha(state: &BlockState) -> [u32; 8] {
    let permuted = permute(state, HCHACHA_DOUBLE_ROUNDS);

    [
        permuted[0],
        permuted[1],
        permuted[2],
        permuted[3],
        permuted[12],
        permuted[13],
        permuted[14],
        permuted[15],
    ]
}
