//! Primitive types
//!
//! This module defines the fixed-size register shared by the ChaCha and
//! Blake2s cores, together with the small amount of bit math needed to
//! address its 64-bit fields.
//!
//! Current primitives include:
//! - `BlockState`: an immutable 512-bit register of sixteen 32-bit words
//! - `bits`: combine/split helpers for 64-bit values stored as word pairs

pub mod bits;
mod block_state;

/// Sixteen-word register with a little-endian byte layout.
pub use block_state::BlockState;

/// Number of 32-bit words in a [`BlockState`].
pub const STATE_WORDS: usize = 16;

/// Size of a serialized [`BlockState`] in bytes.
pub const STATE_BYTES: usize = STATE_WORDS * 4;
