//! Error types for the crate.
//!
//! Every fallible operation validates its arguments before touching any
//! caller buffer, so an `Err` always means nothing was written.

/// Failures reported by the cipher, hash and memory routines.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// A key, nonce or state buffer does not have the required size.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A buffer range reaches past the end of its backing slice.
    #[error("range {offset}..{offset}+{count} out of bounds for length {len}")]
    IndexOutOfRange {
        offset: usize,
        count: usize,
        len: usize,
    },

    /// A word index addresses past the 16-word state.
    #[error("word index {0} out of range for a 16-word state")]
    WordIndexOutOfRange(usize),

    /// A required argument was empty.
    #[error("missing required argument: {0}")]
    ArgumentNull(&'static str),

    /// The 64-bit block counter would leave its range.
    #[error("block counter overflow")]
    Overflow,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, CryptoError>;
