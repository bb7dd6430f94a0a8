//! Stream ciphers.
//!
//! This module exposes ChaCha20 (64-bit counter, 64-bit nonce) and its
//! extended-nonce variant XChaCha20. Both are raw keystream ciphers:
//! output carries no tag, framing or length prefix.
//!
//! Encryption and decryption are the same operation. Applying a transform
//! twice with the same cipher restores the input.

pub mod chacha20;
pub mod xchacha20;

pub use chacha20::{BLOCK_SIZE, CHACHA20_ROUNDS, ChaCha20, KEY_SIZE};
pub use xchacha20::{XChaCha20, XNONCE_SIZE};
