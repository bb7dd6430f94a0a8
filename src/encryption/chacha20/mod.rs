//! ChaCha20 stream cipher.
//!
//! `core` holds the pure block function; `stream` builds the cipher that
//! XORs keystream into slices, streams and files.

pub mod core;
mod stream;

pub(crate) use stream::{key_register, register_words};
pub use stream::{BLOCK_SIZE, CHACHA20_ROUNDS, ChaCha20, KEY_SIZE};
