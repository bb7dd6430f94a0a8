//! Blake2s (RFC 7693).
//!
//! `core` exposes the compression function over explicit chaining value,
//! message block, counter and finalization flag, plus a one-shot
//! Blake2s-256 digest built on it. `computations` holds the constants, the
//! message schedule and the G mixing function.
//!
//! Keyed hashing and incremental (streaming) hashing are not provided.

pub mod computations;
pub mod core;

pub use self::core::{
    BLAKE2S_BLOCK_SIZE, BLAKE2S_OUT_SIZE, BLAKE2S_ROUNDS, FINAL_BLOCK, blake2s, block_words,
    compress,
};
