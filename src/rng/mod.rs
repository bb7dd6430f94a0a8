//! Random number generation module
//!
//! Randomness enters the crate only through the [`Entropy`] trait, which
//! the extended-nonce cipher takes as an argument. Two sources are
//! provided:
//! - [`OsEntropy`]: the operating system generator
//! - [`Csprng`]: a ChaCha20-based deterministic generator, seedable for
//!   reproducible output

mod csprng;
mod entropy;

pub use csprng::Csprng;
pub use entropy::Entropy;

/// Operating system randomness.
pub use rand_core::OsRng as OsEntropy;
