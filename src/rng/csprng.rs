//! ChaCha20-based CSPRNG
//!
//! This module implements a cryptographically secure pseudorandom number
//! generator built on the crate's own ChaCha20 block function.
//!
//! It:
//! - takes its initial seed from the operating system (or the caller)
//! - expands randomness with ChaCha20 as a deterministic generator
//! - rekeys after every request, for forward secrecy
//!
//! Seeding from a fixed value gives reproducible output, which is what the
//! extended-nonce tests use to pin the random padding.

use log::debug;
use rand_core::{CryptoRng, OsRng, RngCore};
use zeroize::Zeroize;

use crate::encryption::chacha20::core::keystream;
use crate::encryption::chacha20::{BLOCK_SIZE, CHACHA20_ROUNDS, register_words};
use crate::primitives::BlockState;

/// Cryptographically secure pseudorandom number generator.
///
/// Internally holds a ChaCha20 register (key, zero nonce) and a 64-bit
/// block counter. After each fill the first half of a fresh block becomes
/// the new key, so compromise of the current state does not reveal past
/// output.
pub struct Csprng {
    state: BlockState,
    counter: u64,
}

impl Csprng {
    /// Creates a generator seeded from the operating system.
    ///
    /// This is equivalent to calling [`Csprng::from_os`].
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a generator using entropy provided by the operating system.
    pub fn from_os() -> Self {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);

        debug!("csprng: seeded from the operating system");

        Self::from_seed(seed)
    }

    /// Creates a generator from a caller-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable for anything but
    /// tests. The local copy is wiped once consumed.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let state = Self::register(&seed);
        seed.zeroize();

        Self { state, counter: 0 }
    }

    fn register(key: &[u8; 32]) -> BlockState {
        let mut words = register_words(key);
        let state = BlockState::from_words(words);
        words.zeroize();
        state
    }

    fn next_block(&mut self) -> [u8; BLOCK_SIZE] {
        let block = keystream(&self.state, CHACHA20_ROUNDS, self.counter, 0);
        self.counter = self.counter.wrapping_add(1);
        block
    }

    /// Fills `out` with random bytes, then rekeys.
    fn generate(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(BLOCK_SIZE) {
            let mut block = self.next_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
            block.zeroize();
        }

        self.rekey();
    }

    /// A fresh block's first 32 bytes become the new key.
    fn rekey(&mut self) {
        let mut block = self.next_block();

        let mut key = [0u8; 32];
        key.copy_from_slice(&block[..32]);
        self.state = Self::register(&key);
        self.counter = 0;

        key.zeroize();
        block.zeroize();
    }
}

impl RngCore for Csprng {
    fn next_u32(&mut self) -> u32 {
        rand_core::impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.generate(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.generate(dest);
        Ok(())
    }
}

impl CryptoRng for Csprng {}

impl Default for Csprng {
    /// Creates a default generator seeded from the operating system.
    fn default() -> Self {
        Self::new()
    }
}
