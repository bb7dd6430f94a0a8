//! Conversions between `BlockState` and raw representations.

use crate::error::CryptoError;
use crate::primitives::{BlockState, STATE_BYTES, STATE_WORDS};

impl From<[u32; STATE_WORDS]> for BlockState {
    fn from(words: [u32; STATE_WORDS]) -> Self {
        BlockState::from_words(words)
    }
}

impl From<&BlockState> for [u32; STATE_WORDS] {
    fn from(state: &BlockState) -> Self {
        *state.words()
    }
}

/// Reads 64 bytes as sixteen little-endian words.
impl From<[u8; STATE_BYTES]> for BlockState {
    fn from(bytes: [u8; STATE_BYTES]) -> Self {
        let words = core::array::from_fn(|i| {
            let start = i * 4;
            u32::from_le_bytes([
                bytes[start],
                bytes[start + 1],
                bytes[start + 2],
                bytes[start + 3],
            ])
        });
        BlockState::from_words(words)
    }
}

/// Fails with `InvalidLength` unless the slice is exactly 64 bytes.
impl TryFrom<&[u8]> for BlockState {
    type Error = CryptoError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        BlockState::from_bytes(bytes)
    }
}

impl From<&BlockState> for [u8; STATE_BYTES] {
    fn from(state: &BlockState) -> Self {
        state.to_bytes()
    }
}

impl AsRef<[u32; STATE_WORDS]> for BlockState {
    fn as_ref(&self) -> &[u32; STATE_WORDS] {
        self.words()
    }
}
