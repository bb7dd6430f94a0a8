//! 512-bit register primitive
//!
//! This module defines `BlockState`, sixteen 32-bit words in fixed order.
//! For the ChaCha family the words are laid out as:
//!
//! ```text
//! Constant | Constant | Constant | Constant
//! Key      | Key      | Key      | Key
//! Key      | Key      | Key      | Key
//! Counter  | Counter  | Nonce    | Nonce
//! ```
//!
//! The type never changes after construction. Methods that "update" a
//! field return a new value.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CryptoError, Result};
use crate::primitives::bits;
use crate::primitives::{STATE_BYTES, STATE_WORDS};

/// Fixed-size register of sixteen 32-bit words.
///
/// The register usually holds key material, so it is wiped on drop and its
/// `Debug` output does not print any word.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct BlockState([u32; STATE_WORDS]);

impl BlockState {
    /// Builds a register from explicit words.
    pub const fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// Builds a register from exactly 64 bytes, read as little-endian words.
    ///
    /// # Errors
    /// `InvalidLength` if `bytes` is not 64 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != STATE_BYTES {
            return Err(CryptoError::InvalidLength {
                expected: STATE_BYTES,
                actual: bytes.len(),
            });
        }

        let mut words = [0u32; STATE_WORDS];
        words
            .iter_mut()
            .zip(bytes.chunks_exact(4))
            .for_each(|(w, c)| *w = u32::from_le_bytes([c[0], c[1], c[2], c[3]]));

        Ok(Self(words))
    }

    /// Returns the word at `index`.
    ///
    /// # Errors
    /// `WordIndexOutOfRange` for `index >= 16`.
    pub fn word(&self, index: usize) -> Result<u32> {
        self.0
            .get(index)
            .copied()
            .ok_or(CryptoError::WordIndexOutOfRange(index))
    }

    /// Borrows all sixteen words.
    pub const fn words(&self) -> &[u32; STATE_WORDS] {
        &self.0
    }

    /// The 64-bit block counter stored in words 12-13.
    pub const fn counter(&self) -> u64 {
        bits::combine(self.0[12], self.0[13])
    }

    /// The 64-bit nonce stored in words 14-15.
    pub const fn nonce(&self) -> u64 {
        bits::combine(self.0[14], self.0[15])
    }

    /// Returns a copy of this register with words 12-13 set to `counter`.
    pub fn with_counter(&self, counter: u64) -> Self {
        let mut words = self.0;
        (words[12], words[13]) = bits::split(counter);
        Self(words)
    }

    /// Returns a copy of this register with words 14-15 set to `nonce`.
    pub fn with_nonce(&self, nonce: u64) -> Self {
        let mut words = self.0;
        (words[14], words[15]) = bits::split(nonce);
        Self(words)
    }

    /// Serializes the register into `destination` starting at `offset`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if 64 bytes do not fit at `offset`. Nothing is
    /// written in that case.
    pub fn copy_to(&self, destination: &mut [u8], offset: usize) -> Result<()> {
        let end = offset
            .checked_add(STATE_BYTES)
            .filter(|&end| end <= destination.len())
            .ok_or(CryptoError::IndexOutOfRange {
                offset,
                count: STATE_BYTES,
                len: destination.len(),
            })?;

        destination[offset..end]
            .chunks_exact_mut(4)
            .zip(&self.0)
            .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

        Ok(())
    }

    /// Serializes the register as 64 little-endian bytes.
    pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
        let mut out = [0u8; STATE_BYTES];
        out.chunks_exact_mut(4)
            .zip(&self.0)
            .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));
        out
    }
}

impl Debug for BlockState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("BlockState([REDACTED])")
    }
}

impl Default for BlockState {
    fn default() -> Self {
        Self([0u32; STATE_WORDS])
    }
}
