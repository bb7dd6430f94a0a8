use super::stride::apply;
use super::{checked_range, move_bytes, overlaps, split_disjoint};
use crate::error::Result;

/// XORs `count` bytes of `src[src_offset..]` into `dst[dst_offset..]`.
///
/// # Errors
/// `IndexOutOfRange` if either range exceeds its buffer. Nothing is written
/// in that case.
pub fn xor(
    dst: &mut [u8],
    src: &[u8],
    count: usize,
    dst_offset: usize,
    src_offset: usize,
) -> Result<()> {
    let dst_range = checked_range(dst.len(), dst_offset, count)?;
    let src_range = checked_range(src.len(), src_offset, count)?;

    apply(&mut dst[dst_range], &src[src_range], |d, s| d ^ s, |d, s| d ^ s);

    Ok(())
}

/// XORs `count` bytes of `buf[src_offset..]` into `buf[dst_offset..]`.
///
/// When both offsets are equal nothing happens: the range is its own
/// source, and the buffer is left as it was rather than cleared.
/// Overlapping ranges follow the same move rule as
/// [`copy_within`](super::copy_within), so each destination byte is
/// combined with the original source byte.
///
/// # Errors
/// `IndexOutOfRange` if either range exceeds the buffer.
pub fn xor_within(
    buf: &mut [u8],
    count: usize,
    dst_offset: usize,
    src_offset: usize,
) -> Result<()> {
    let dst_range = checked_range(buf.len(), dst_offset, count)?;
    let src_range = checked_range(buf.len(), src_offset, count)?;

    if src_offset == dst_offset {
        return Ok(());
    }

    if overlaps(&src_range, &dst_range) {
        move_bytes(buf, src_range, dst_range, |d, s| d ^ s);
    } else {
        let (src, dst) = split_disjoint(buf, src_range, dst_range);
        apply(dst, src, |d, s| d ^ s, |d, s| d ^ s);
    }

    Ok(())
}
