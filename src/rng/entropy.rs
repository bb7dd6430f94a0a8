//! Injected randomness capability.
//!
//! Cipher constructors that need fresh random bits take an `&mut impl
//! Entropy` instead of reaching for a global generator. Any
//! `rand_core` generator marked `CryptoRng` qualifies, which includes the
//! operating system source and this crate's [`Csprng`](super::Csprng).

use rand_core::{CryptoRng, RngCore};

/// A source of cryptographically secure random bytes.
pub trait Entropy {
    /// Fills `dest` entirely with random bytes.
    fn fill(&mut self, dest: &mut [u8]);

    /// A random 32-bit value (four bytes, little-endian).
    fn u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    /// A random 64-bit value (eight bytes, little-endian).
    fn u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill(&mut bytes);
        u64::from_le_bytes(bytes)
    }
}

impl<R: RngCore + CryptoRng + ?Sized> Entropy for R {
    fn fill(&mut self, dest: &mut [u8]) {
        self.fill_bytes(dest);
    }
}
