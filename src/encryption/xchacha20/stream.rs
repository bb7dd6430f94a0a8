//! XChaCha20 stream cipher
//!
//! [`XChaCha20`] wraps a [`ChaCha20`] whose key is derived from a 256-bit
//! key and a 128-bit random nonce prefix. Callers must persist the full
//! 24-byte [`nonce`](XChaCha20::nonce) together with the IV to rebuild the
//! same keystream with [`XChaCha20::from_nonce`].

use std::io::{Read, Seek, Write};
use std::path::Path;

use log::debug;

use super::core::{PREFIX_SIZE, XNONCE_SIZE, derive_register, public_nonce};
use crate::encryption::chacha20::{ChaCha20, key_register};
use crate::error::{CryptoError, Result};
use crate::primitives::BlockState;
use crate::rng::Entropy;

/// ChaCha20 with a 192-bit extended nonce.
#[derive(Clone, Debug)]
pub struct XChaCha20 {
    inner: ChaCha20,
    nonce: [u8; XNONCE_SIZE],
}

impl XChaCha20 {
    /// Creates a cipher from a 32-byte key and a 64-bit IV.
    ///
    /// The 128-bit nonce prefix and the 64-bit padding are drawn from
    /// `entropy`.
    ///
    /// # Errors
    /// `InvalidLength` if `key` is not 32 bytes.
    pub fn new<E: Entropy + ?Sized>(key: &[u8], iv: u64, entropy: &mut E) -> Result<Self> {
        let mut words = key_register(key)?;

        let mut prefix = [0u8; PREFIX_SIZE];
        entropy.fill(&mut prefix);
        words[12..16]
            .iter_mut()
            .zip(prefix.chunks_exact(4))
            .for_each(|(w, c)| *w = u32::from_le_bytes([c[0], c[1], c[2], c[3]]));

        let state = BlockState::from_words(words);
        zeroize::Zeroize::zeroize(&mut words);

        Ok(Self::from_state(state, iv, entropy))
    }

    /// Creates a cipher from a pre-derivation register (constants, key and
    /// 128-bit nonce prefix) and a 64-bit IV. The padding is drawn from
    /// `entropy`.
    pub fn from_state<E: Entropy + ?Sized>(state: BlockState, iv: u64, entropy: &mut E) -> Self {
        let padding = entropy.u64();
        Self::assemble(&state, iv, padding)
    }

    /// Rebuilds a cipher from a persisted 24-byte public nonce.
    ///
    /// # Errors
    /// `InvalidLength` if `key` is not 32 bytes or `nonce` is not 24 bytes.
    pub fn from_nonce(key: &[u8], nonce: &[u8], iv: u64) -> Result<Self> {
        if nonce.len() != XNONCE_SIZE {
            return Err(CryptoError::InvalidLength {
                expected: XNONCE_SIZE,
                actual: nonce.len(),
            });
        }

        let mut words = key_register(key)?;
        words[12..16]
            .iter_mut()
            .zip(nonce[..PREFIX_SIZE].chunks_exact(4))
            .for_each(|(w, c)| *w = u32::from_le_bytes([c[0], c[1], c[2], c[3]]));

        let mut tail = [0u8; 8];
        tail.copy_from_slice(&nonce[PREFIX_SIZE..]);
        let padding = u64::from_le_bytes(tail);

        let state = BlockState::from_words(words);
        zeroize::Zeroize::zeroize(&mut words);

        Ok(Self::assemble(&state, iv, padding))
    }

    fn assemble(state: &BlockState, iv: u64, padding: u64) -> Self {
        let inner = ChaCha20::new(derive_register(state, iv, padding));
        let nonce = public_nonce(state, padding);

        debug!("xchacha20: subkey derived, starting at block {iv}");

        Self { inner, nonce }
    }

    /// The 24-byte public nonce needed to rebuild this cipher.
    pub fn nonce(&self) -> &[u8; XNONCE_SIZE] {
        &self.nonce
    }

    /// The inner ChaCha20 cipher running on the derived register.
    pub fn cipher(&self) -> &ChaCha20 {
        &self.inner
    }

    /// The block counter the next transform starts from (the IV).
    pub fn counter(&self) -> u64 {
        self.inner.counter()
    }

    /// Returns an independent cipher with the same subkey and nonce,
    /// positioned at block `counter`.
    pub fn with_counter(&self, counter: u64) -> Self {
        Self {
            inner: self.inner.with_counter(counter),
            nonce: self.nonce,
        }
    }

    /// See [`ChaCha20::transform`].
    pub fn transform(&self, data: &mut [u8]) -> Result<()> {
        self.inner.transform(data)
    }

    /// See [`ChaCha20::transform_to`].
    pub fn transform_to<R, W>(&self, source: &mut R, destination: &mut W) -> Result<u64>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        self.inner.transform_to(source, destination)
    }

    /// See [`ChaCha20::transform_stream`].
    pub fn transform_stream<S>(&self, stream: &mut S) -> Result<u64>
    where
        S: Read + Write + Seek + ?Sized,
    {
        self.inner.transform_stream(stream)
    }

    /// See [`ChaCha20::transform_file`].
    pub fn transform_file<P: AsRef<Path>>(&self, path: P) -> Result<u64> {
        self.inner.transform_file(path)
    }
}
