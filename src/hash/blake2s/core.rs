use super::computations::{IV, SIGMA, round};
use crate::primitives::bits;

/// Standard Blake2s round count.
pub const BLAKE2S_ROUNDS: usize = 10;

/// Finalization flag for the last block: f0 all ones, f1 (last node) clear.
pub const FINAL_BLOCK: u64 = 0xFFFF_FFFF;

/// Message block size in bytes.
pub const BLAKE2S_BLOCK_SIZE: usize = 64;

/// Digest size of Blake2s-256 in bytes.
pub const BLAKE2S_OUT_SIZE: usize = 32;

/// Blake2s compression function.
///
/// Mixes one 16-word message block into the chaining value and returns the
/// updated chaining value. `counter` is the number of message bytes hashed
/// so far including this block, and `finalizer` carries f0 in its low half
/// and f1 in its high half. Rounds beyond ten reuse the schedule from its
/// first row.
///
/// The function is pure and holds no state.
pub fn compress(
    chaining: &[u32; 8],
    block: &[u32; 16],
    rounds: usize,
    counter: u64,
    finalizer: u64,
) -> [u32; 8] {
    let mut v = [0u32; 16];
    v[..8].copy_from_slice(chaining);
    v[8..12].copy_from_slice(&IV[..4]);
    v[12] = IV[4] ^ bits::low(counter);
    v[13] = IV[5] ^ bits::high(counter);
    v[14] = IV[6] ^ bits::low(finalizer);
    v[15] = IV[7] ^ bits::high(finalizer);

    for r in 0..rounds {
        round(&mut v, block, &SIGMA[r % SIGMA.len()]);
    }

    core::array::from_fn(|i| chaining[i] ^ v[i] ^ v[i + 8])
}

/// Reads a 64-byte block as sixteen little-endian words.
pub fn block_words(bytes: &[u8; BLAKE2S_BLOCK_SIZE]) -> [u32; 16] {
    core::array::from_fn(|i| {
        let start = i * 4;
        u32::from_le_bytes([
            bytes[start],
            bytes[start + 1],
            bytes[start + 2],
            bytes[start + 3],
        ])
    })
}

/// Computes the unkeyed Blake2s-256 digest of `input`.
///
/// The parameter block selects a 32-byte digest with no key, fanout 1 and
/// depth 1. Every block but the last is compressed as it arrives; the last
/// one (empty input still yields one zero block) is zero-padded and
/// compressed with [`FINAL_BLOCK`].
pub fn blake2s(input: &[u8]) -> [u8; BLAKE2S_OUT_SIZE] {
    let mut h = IV;
    h[0] ^= 0x0101_0000 ^ BLAKE2S_OUT_SIZE as u32;

    let mut counter = 0u64;
    let mut rest = input;

    while rest.len() > BLAKE2S_BLOCK_SIZE {
        let (head, tail) = rest.split_at(BLAKE2S_BLOCK_SIZE);

        let mut block = [0u8; BLAKE2S_BLOCK_SIZE];
        block.copy_from_slice(head);

        counter = counter.wrapping_add(BLAKE2S_BLOCK_SIZE as u64);
        h = compress(&h, &block_words(&block), BLAKE2S_ROUNDS, counter, 0);
        rest = tail;
    }

    let mut last = [0u8; BLAKE2S_BLOCK_SIZE];
    last[..rest.len()].copy_from_slice(rest);
    counter = counter.wrapping_add(rest.len() as u64);
    h = compress(&h, &block_words(&last), BLAKE2S_ROUNDS, counter, FINAL_BLOCK);

    let mut out = [0u8; BLAKE2S_OUT_SIZE];
    out.chunks_exact_mut(4)
        .zip(&h)
        .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

    out
}
