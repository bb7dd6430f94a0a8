//! XChaCha20: ChaCha20 with a 192-bit nonce.
//!
//! A 128-bit nonce prefix and the key are reduced by HChaCha20 to a subkey.
//! The inner ChaCha20 then runs on that subkey with the caller's IV as its
//! block counter and 64 random bits as its nonce.
//!
//! This layout differs from draft-irtf-cfrg-xchacha, which zeroes the
//! counter and takes the last 64 nonce bits from the caller. Keystreams are
//! therefore not interchangeable with other XChaCha20 implementations.

pub mod core;
mod stream;

pub use self::core::{XNONCE_SIZE, derive_register};
pub use stream::XChaCha20;
