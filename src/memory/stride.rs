//! Alignment-aware stride kernels shared by copy, XOR and equality.

/// Machine word used for the wide path.
pub(crate) const WORD: usize = core::mem::size_of::<u64>();

/// Bytes processed per wide step (four words, 256 bits).
pub(crate) const WIDE: usize = WORD * 4;

/// Number of leading bytes before `bytes` reaches a word boundary.
#[inline]
pub(crate) fn head_len(bytes: &[u8]) -> usize {
    bytes.as_ptr().align_offset(WORD).min(bytes.len())
}

#[inline(always)]
pub(crate) fn load(bytes: &[u8], at: usize) -> u64 {
    let mut word = [0u8; WORD];
    word.copy_from_slice(&bytes[at..at + WORD]);
    u64::from_ne_bytes(word)
}

#[inline(always)]
fn store(bytes: &mut [u8], at: usize, value: u64) {
    bytes[at..at + WORD].copy_from_slice(&value.to_ne_bytes());
}

/// Applies `word_op(dst, src)` over two equal-length, non-aliasing slices.
///
/// `word_op` and `byte_op` must agree: applying `word_op` to a word must
/// equal applying `byte_op` to each of its bytes.
#[inline(always)]
pub(crate) fn apply(
    dst: &mut [u8],
    src: &[u8],
    word_op: impl Fn(u64, u64) -> u64,
    byte_op: impl Fn(u8, u8) -> u8,
) {
    debug_assert_eq!(dst.len(), src.len());

    let len = dst.len();
    let mut i = 0;

    // Align the destination
    let head = head_len(dst);
    while i < head {
        dst[i] = byte_op(dst[i], src[i]);
        i += 1;
    }

    // 256 bits per iteration
    while len - i >= WIDE {
        let w0 = word_op(load(dst, i), load(src, i));
        let w1 = word_op(load(dst, i + WORD), load(src, i + WORD));
        let w2 = word_op(load(dst, i + 2 * WORD), load(src, i + 2 * WORD));
        let w3 = word_op(load(dst, i + 3 * WORD), load(src, i + 3 * WORD));

        store(dst, i, w0);
        store(dst, i + WORD, w1);
        store(dst, i + 2 * WORD, w2);
        store(dst, i + 3 * WORD, w3);

        i += WIDE;
    }

    // 64 bits per iteration
    while len - i >= WORD {
        let w = word_op(load(dst, i), load(src, i));
        store(dst, i, w);
        i += WORD;
    }

    while i < len {
        dst[i] = byte_op(dst[i], src[i]);
        i += 1;
    }
}

/// Copies `src` into `dst` (equal lengths, non-aliasing) with the same
/// stride schedule as [`apply`], storing words without loading `dst`.
#[inline(always)]
pub(crate) fn copy_words(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());

    let len = dst.len();
    let head = head_len(dst);
    dst[..head].copy_from_slice(&src[..head]);

    let mut i = head;

    while len - i >= WIDE {
        store(dst, i, load(src, i));
        store(dst, i + WORD, load(src, i + WORD));
        store(dst, i + 2 * WORD, load(src, i + 2 * WORD));
        store(dst, i + 3 * WORD, load(src, i + 3 * WORD));
        i += WIDE;
    }

    while len - i >= WORD {
        store(dst, i, load(src, i));
        i += WORD;
    }

    dst[i..].copy_from_slice(&src[i..]);
}
