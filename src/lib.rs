//! Stream-cipher and compression primitives
//!
//! This crate provides the ChaCha20 and XChaCha20 stream ciphers, the
//! Blake2s compression core, and the bulk memory routines both rely on to
//! combine keystream with data.
//!
//! The focus is on **bit-exact, auditable implementations** with explicit
//! semantics rather than on a large or high-level API.
//!
//! # Module overview
//!
//! - `primitives`  
//!   `BlockState`, the immutable sixteen-word register every cipher core
//!   starts from, with explicit little-endian serialization, and the bit
//!   math for 64-bit fields stored as word pairs.
//!
//! - `memory`  
//!   Copy, equality and XOR over byte ranges addressed by offset and
//!   length. Ranges are validated before any byte is touched. Operations
//!   inside a single buffer are overlap-safe (move semantics).
//!
//! - `encryption`  
//!   The ChaCha block function, the ChaCha20 stream cipher over slices,
//!   streams and files, and XChaCha20 with HChaCha20 subkey derivation.
//!
//! - `hash`  
//!   The Blake2s compression function and a one-shot Blake2s-256 digest.
//!
//! - `rng`  
//!   The `Entropy` capability injected into constructors that need random
//!   bits, the operating system source, and a seedable ChaCha20 CSPRNG.
//!
//! # Non-goals
//!
//! - No authenticated encryption: ciphertexts carry no integrity tag.
//! - No key management or storage.
//! - No keyed or incremental hashing.
//! - No constant-time guarantees beyond those the algorithms provide.
//!
//! # Example
//!
//! ```
//! use keystream::encryption::ChaCha20;
//!
//! let cipher = ChaCha20::from_key(&[7u8; 32], 42, 0).unwrap();
//!
//! let mut data = *b"attack at dawn";
//! cipher.transform(&mut data).unwrap();
//! assert_ne!(&data, b"attack at dawn");
//!
//! cipher.transform(&mut data).unwrap();
//! assert_eq!(&data, b"attack at dawn");
//! ```

pub mod encryption;
pub mod error;
pub mod hash;
pub mod memory;
pub mod primitives;
pub mod rng;

pub use error::{CryptoError, Result};
