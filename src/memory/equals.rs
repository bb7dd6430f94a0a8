use super::checked_range;
use super::stride::{WIDE, WORD, head_len, load};
use crate::error::Result;

/// Compares `count` bytes of `a[a_offset..]` and `b[b_offset..]`.
///
/// Short circuits:
/// - when both ranges start at the same address the result is `true`;
/// - when either buffer is empty the result is whether both are empty.
///
/// # Errors
/// `IndexOutOfRange` if either range exceeds its buffer.
pub fn equals(
    a: &[u8],
    b: &[u8],
    count: usize,
    a_offset: usize,
    b_offset: usize,
) -> Result<bool> {
    let a_range = checked_range(a.len(), a_offset, count)?;
    let b_range = checked_range(b.len(), b_offset, count)?;

    if a.is_empty() || b.is_empty() {
        return Ok(a.len() == b.len());
    }

    let (a, b) = (&a[a_range], &b[b_range]);

    if core::ptr::eq(a.as_ptr(), b.as_ptr()) {
        return Ok(true);
    }

    Ok(equal_words(a, b))
}

fn equal_words(a: &[u8], b: &[u8]) -> bool {
    let len = b.len();
    let mut i = 0;

    let head = head_len(b);
    while i < head {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }

    while len - i >= WIDE {
        if load(a, i) != load(b, i)
            || load(a, i + WORD) != load(b, i + WORD)
            || load(a, i + 2 * WORD) != load(b, i + 2 * WORD)
            || load(a, i + 3 * WORD) != load(b, i + 3 * WORD)
        {
            return false;
        }
        i += WIDE;
    }

    while len - i >= WORD {
        if load(a, i) != load(b, i) {
            return false;
        }
        i += WORD;
    }

    a[i..] == b[i..]
}
