//! Extended-nonce register derivation.
//!
//! The pre-derivation register holds the ChaCha constants, the 256-bit key
//! and the first 128 bits of the public nonce (words 12-15). HChaCha20
//! reduces it to a subkey, and the inner register is assembled as:
//!
//! ```text
//! Constant | Constant | Constant | Constant
//! Subkey   | Subkey   | Subkey   | Subkey
//! Subkey   | Subkey   | Subkey   | Subkey
//! IV       | IV       | Padding  | Padding
//! ```

use crate::encryption::chacha20::core::{SIGMA, hchacha};
use crate::primitives::{BlockState, bits};

/// Size of the public extended nonce in bytes.
pub const XNONCE_SIZE: usize = 24;

/// Size of the nonce prefix fed to HChaCha20.
pub(crate) const PREFIX_SIZE: usize = 16;

/// Builds the inner ChaCha20 register from a pre-derivation register.
///
/// Only words 0-15 of `state` feed the subkey; `iv` and `padding` are
/// placed verbatim in the counter and nonce positions.
pub fn derive_register(state: &BlockState, iv: u64, padding: u64) -> BlockState {
    let mut subkey = hchacha(state);

    let mut words = [0u32; 16];
    words[0..4].copy_from_slice(&SIGMA);
    words[4..12].copy_from_slice(&subkey);
    (words[12], words[13]) = bits::split(iv);
    (words[14], words[15]) = bits::split(padding);

    let derived = BlockState::from_words(words);

    zeroize::Zeroize::zeroize(&mut subkey);
    zeroize::Zeroize::zeroize(&mut words);

    derived
}

/// Serializes the public nonce: the 128-bit prefix (words 12-15 of the
/// pre-derivation register) followed by the 64-bit padding, all
/// little-endian.
pub(crate) fn public_nonce(state: &BlockState, padding: u64) -> [u8; XNONCE_SIZE] {
    let mut nonce = [0u8; XNONCE_SIZE];

    nonce[..PREFIX_SIZE]
        .chunks_exact_mut(4)
        .zip(&state.words()[12..16])
        .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));
    nonce[PREFIX_SIZE..].copy_from_slice(&padding.to_le_bytes());

    nonce
}
