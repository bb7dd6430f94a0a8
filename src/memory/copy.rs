use super::stride::copy_words;
use super::{checked_range, move_bytes, overlaps, split_disjoint};
use crate::error::Result;

/// Copies `count` bytes from `src[src_offset..]` to `dst[dst_offset..]`.
///
/// # Errors
/// `IndexOutOfRange` if either range exceeds its buffer. Nothing is written
/// in that case.
pub fn copy(
    src: &[u8],
    dst: &mut [u8],
    count: usize,
    src_offset: usize,
    dst_offset: usize,
) -> Result<()> {
    let src_range = checked_range(src.len(), src_offset, count)?;
    let dst_range = checked_range(dst.len(), dst_offset, count)?;

    copy_words(&mut dst[dst_range], &src[src_range]);

    Ok(())
}

/// Copies `count` bytes inside `buf` from `src_offset` to `dst_offset`.
///
/// Overlapping ranges are handled with move semantics: the result is the
/// same as if the source had first been copied to a temporary buffer.
/// Equal offsets are a no-op.
///
/// # Errors
/// `IndexOutOfRange` if either range exceeds the buffer.
pub fn copy_within(
    buf: &mut [u8],
    count: usize,
    src_offset: usize,
    dst_offset: usize,
) -> Result<()> {
    let src_range = checked_range(buf.len(), src_offset, count)?;
    let dst_range = checked_range(buf.len(), dst_offset, count)?;

    if src_offset == dst_offset {
        return Ok(());
    }

    if overlaps(&src_range, &dst_range) {
        move_bytes(buf, src_range, dst_range, |_, s| s);
    } else {
        let (src, dst) = split_disjoint(buf, src_range, dst_range);
        copy_words(dst, src);
    }

    Ok(())
}
