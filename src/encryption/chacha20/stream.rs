//! ChaCha20 stream cipher
//!
//! [`ChaCha20`] owns an initial 512-bit register and XORs successive
//! keystream blocks into caller data. The register is never modified: every
//! transform call starts at the register's counter and advances a local
//! copy by one per 64-byte block. Applying the same transform twice
//! therefore restores the original data.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::{debug, trace};
use zeroize::Zeroize;

use super::core::{SIGMA, keystream};
use crate::error::{CryptoError, Result};
use crate::memory;
use crate::primitives::{BlockState, bits};

/// Number of rounds (10 double-rounds).
pub const CHACHA20_ROUNDS: u32 = 20;

/// Size of one keystream block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Size of a ChaCha20 key in bytes.
pub const KEY_SIZE: usize = 32;

/// ChaCha20 with a 64-bit counter and a 64-bit nonce.
///
/// # Security Notes
/// - No authentication is performed.
/// - Reusing a `(key, nonce, counter)` triple for different data is
///   catastrophic and must be prevented by the caller.
#[derive(Clone, Debug)]
pub struct ChaCha20 {
    state: BlockState,
}

impl ChaCha20 {
    /// Creates a cipher from a fully populated register.
    pub fn new(state: BlockState) -> Self {
        debug!(
            "chacha20: cipher created at block {} nonce {:#018x}",
            state.counter(),
            state.nonce()
        );

        Self { state }
    }

    /// Lays out a register from a 32-byte key, a nonce and a starting
    /// counter.
    ///
    /// # Errors
    /// `InvalidLength` if `key` is not 32 bytes. Keys are never padded or
    /// truncated.
    pub fn from_key(key: &[u8], nonce: u64, counter: u64) -> Result<Self> {
        let mut words = key_register(key)?;
        (words[12], words[13]) = bits::split(counter);
        (words[14], words[15]) = bits::split(nonce);

        let state = BlockState::from_words(words);
        words.zeroize();

        Ok(Self::new(state))
    }

    /// The block counter the next transform starts from.
    pub fn counter(&self) -> u64 {
        self.state.counter()
    }

    /// The 64-bit nonce.
    pub fn nonce(&self) -> u64 {
        self.state.nonce()
    }

    /// The underlying register.
    pub fn state(&self) -> &BlockState {
        &self.state
    }

    /// Returns an independent cipher positioned at block `counter`.
    ///
    /// This is how disjoint ranges of one stream are processed in parallel:
    /// one cipher per range, each with its own starting block.
    pub fn with_counter(&self, counter: u64) -> Self {
        Self {
            state: self.state.with_counter(counter),
        }
    }

    /// Computes the keystream block at `counter`.
    pub fn keystream_block(&self, counter: u64) -> [u8; BLOCK_SIZE] {
        keystream(&self.state, CHACHA20_ROUNDS, counter, self.nonce())
    }

    /// Transforms `data` in place.
    ///
    /// # Errors
    /// `Overflow` if `data` needs a block past `u64::MAX`. The check happens
    /// before any byte is changed.
    pub fn transform(&self, data: &mut [u8]) -> Result<()> {
        let start = self.counter();
        let blocks = data.len().div_ceil(BLOCK_SIZE) as u64;

        if blocks > 0 {
            start.checked_add(blocks - 1).ok_or(CryptoError::Overflow)?;
        }

        for (i, chunk) in data.chunks_mut(BLOCK_SIZE).enumerate() {
            let len = chunk.len();
            let mut ks = self.keystream_block(start + i as u64);
            memory::xor(chunk, &ks, len, 0, 0)?;
            ks.zeroize();
        }

        trace!("chacha20: transformed {} bytes from block {}", data.len(), start);

        Ok(())
    }

    /// Reads `source` to its end and writes the transformed bytes to
    /// `destination`. Returns the number of bytes processed.
    ///
    /// # Errors
    /// `Io` for stream failures. `Overflow` before the first chunk that
    /// would need a block past `u64::MAX`; earlier chunks have already been
    /// written at that point.
    pub fn transform_to<R, W>(&self, source: &mut R, destination: &mut W) -> Result<u64>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let mut buf = [0u8; BLOCK_SIZE];
        let mut next = Some(self.counter());
        let mut total = 0u64;

        loop {
            let n = read_chunk(source, &mut buf)?;
            if n == 0 {
                break;
            }

            let counter = next.ok_or(CryptoError::Overflow)?;
            self.apply_block(&mut buf, n, counter)?;
            destination.write_all(&buf[..n])?;

            next = counter.checked_add(1);
            total += n as u64;

            if n < BLOCK_SIZE {
                break;
            }
        }

        destination.flush()?;
        buf.zeroize();

        trace!("chacha20: streamed {} bytes from block {}", total, self.counter());

        Ok(total)
    }

    /// Transforms a seekable stream in place, from its current position to
    /// its end. Returns the number of bytes processed.
    ///
    /// Each chunk is read, the stream is rewound over it, and the
    /// transformed chunk is written back.
    ///
    /// # Errors
    /// `Io` for stream failures. On `Overflow` the stream is left positioned
    /// at the start of the first chunk that was not rewritten.
    pub fn transform_stream<S>(&self, stream: &mut S) -> Result<u64>
    where
        S: Read + Write + Seek + ?Sized,
    {
        let mut buf = [0u8; BLOCK_SIZE];
        let mut next = Some(self.counter());
        let mut total = 0u64;

        loop {
            let n = read_chunk(stream, &mut buf)?;
            if n == 0 {
                break;
            }

            stream.seek(SeekFrom::Current(-(n as i64)))?;

            let Some(counter) = next else {
                buf.zeroize();
                return Err(CryptoError::Overflow);
            };
            self.apply_block(&mut buf, n, counter)?;
            stream.write_all(&buf[..n])?;

            next = counter.checked_add(1);
            total += n as u64;

            if n < BLOCK_SIZE {
                break;
            }
        }

        stream.flush()?;
        buf.zeroize();

        Ok(total)
    }

    /// Opens the file at `path` for reading and writing and transforms it
    /// in place. Returns the number of bytes processed.
    ///
    /// # Errors
    /// `ArgumentNull` for an empty path, `Io` if the file cannot be opened
    /// or rewritten.
    pub fn transform_file<P: AsRef<Path>>(&self, path: P) -> Result<u64> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(CryptoError::ArgumentNull("path"));
        }

        let mut file = OpenOptions::new().read(true).write(true).open(path)?;
        let total = self.transform_stream(&mut file)?;
        file.sync_all()?;

        debug!("chacha20: transformed {} bytes of {}", total, path.display());

        Ok(total)
    }

    fn apply_block(&self, buf: &mut [u8; BLOCK_SIZE], len: usize, counter: u64) -> Result<()> {
        let mut ks = self.keystream_block(counter);
        memory::xor(buf, &ks, len, 0, 0)?;
        ks.zeroize();
        Ok(())
    }
}

/// Builds the constant and key words of a register; words 12-15 are zero.
///
/// # Errors
/// `InvalidLength` if `key` is not 32 bytes.
pub(crate) fn key_register(key: &[u8]) -> Result<[u32; 16]> {
    let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| CryptoError::InvalidLength {
        expected: KEY_SIZE,
        actual: key.len(),
    })?;

    Ok(register_words(key))
}

pub(crate) fn register_words(key: &[u8; KEY_SIZE]) -> [u32; 16] {
    let mut words = [0u32; 16];
    words[0..4].copy_from_slice(&SIGMA);
    words[4..12]
        .iter_mut()
        .zip(key.chunks_exact(4))
        .for_each(|(w, k)| *w = u32::from_le_bytes([k[0], k[1], k[2], k[3]]));

    words
}

/// Fills `buf` from `reader`, stopping early only at end of stream.
fn read_chunk<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(filled)
}
