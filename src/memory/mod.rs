//! Bulk memory operations over byte ranges.
//!
//! These routines combine keystream with data for both ciphers. Each one
//! addresses its buffers through an explicit `(offset, count)` pair and
//! validates every range before reading or writing a single byte, so a
//! failed call leaves all buffers untouched.
//!
//! Two shapes are provided for copy and XOR:
//! - `copy` / `xor` take two distinct slices. The borrow checker guarantees
//!   they cannot alias, so the wide-stride path is always taken.
//! - `copy_within` / `xor_within` operate inside one buffer. When the two
//!   ranges overlap the iteration direction is chosen so that every source
//!   byte is read before it is overwritten (move semantics, as `memmove`).
//!
//! The wide-stride path aligns the destination to a `u64` boundary one byte
//! at a time, then processes four words per step, then single words, then
//! the remaining bytes.

mod copy;
mod equals;
mod stride;
mod xor;

use core::ops::Range;

use crate::error::{CryptoError, Result};

pub use copy::{copy, copy_within};
pub use equals::equals;
pub use xor::{xor, xor_within};

/// Validates `offset + count <= len` and returns the addressed range.
///
/// Arithmetic overflow of `offset + count` is reported as out of range.
pub(crate) fn checked_range(len: usize, offset: usize, count: usize) -> Result<Range<usize>> {
    match offset.checked_add(count) {
        Some(end) if end <= len => Ok(offset..end),
        _ => Err(CryptoError::IndexOutOfRange { offset, count, len }),
    }
}

/// Whether two ranges of the same buffer share at least one byte.
#[inline]
pub(crate) fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Splits one buffer into a shared source range and an exclusive
/// destination range. The ranges must not overlap.
pub(crate) fn split_disjoint<'a>(
    buf: &'a mut [u8],
    src: Range<usize>,
    dst: Range<usize>,
) -> (&'a [u8], &'a mut [u8]) {
    debug_assert!(!overlaps(&src, &dst));

    if src.start < dst.start {
        let (head, tail) = buf.split_at_mut(dst.start);
        (&head[src], &mut tail[..dst.end - dst.start])
    } else {
        let (head, tail) = buf.split_at_mut(src.start);
        (&tail[..src.end - src.start], &mut head[dst])
    }
}

/// Applies `op(dst, src)` byte by byte inside one buffer with overlapping
/// ranges, walking backwards when the source precedes the destination.
pub(crate) fn move_bytes(
    buf: &mut [u8],
    src: Range<usize>,
    dst: Range<usize>,
    op: impl Fn(u8, u8) -> u8,
) {
    let count = src.end - src.start;

    if src.start < dst.start {
        for i in (0..count).rev() {
            buf[dst.start + i] = op(buf[dst.start + i], buf[src.start + i]);
        }
    } else {
        for i in 0..count {
            buf[dst.start + i] = op(buf[dst.start + i], buf[src.start + i]);
        }
    }
}
