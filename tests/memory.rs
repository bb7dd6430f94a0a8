use keystream::CryptoError;
use keystream::memory::{copy, copy_within, equals, xor, xor_within};

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}

/// Reference copy through a scratch buffer.
fn copy_reference(buf: &[u8], count: usize, src: usize, dst: usize) -> Vec<u8> {
    let scratch = buf[src..src + count].to_vec();
    let mut out = buf.to_vec();
    out[dst..dst + count].copy_from_slice(&scratch);
    out
}

/// Reference xor through a scratch buffer.
fn xor_reference(buf: &[u8], count: usize, dst: usize, src: usize) -> Vec<u8> {
    let scratch = buf[src..src + count].to_vec();
    let mut out = buf.to_vec();
    out[dst..dst + count]
        .iter_mut()
        .zip(&scratch)
        .for_each(|(d, s)| *d ^= s);
    out
}

#[test]
fn test_copy_between_buffers() {
    for count in [0, 1, 7, 8, 9, 31, 32, 33, 100, 257] {
        let src = pattern(count + 5);
        let mut dst = vec![0u8; count + 11];

        copy(&src, &mut dst, count, 5, 3).unwrap();

        assert_eq!(&dst[3..3 + count], &src[5..5 + count]);
        assert!(dst[..3].iter().all(|&b| b == 0));
        assert!(dst[3 + count..].iter().all(|&b| b == 0));
    }
}

#[test]
fn test_copy_within_overlap_forward_and_backward() {
    let buf = pattern(300);

    for (src, dst, count) in [(0, 1, 200), (1, 0, 200), (10, 50, 120), (50, 10, 120), (0, 100, 100)] {
        let mut actual = buf.clone();
        copy_within(&mut actual, count, src, dst).unwrap();

        assert_eq!(
            actual,
            copy_reference(&buf, count, src, dst),
            "src {src} dst {dst} count {count}"
        );
    }
}

#[test]
fn test_copy_within_same_offset_is_noop() {
    let buf = pattern(64);
    let mut actual = buf.clone();

    copy_within(&mut actual, 64, 0, 0).unwrap();
    assert_eq!(actual, buf);
}

#[test]
fn test_xor_between_buffers() {
    for count in [0, 1, 8, 33, 64, 65, 200] {
        let src = pattern(count);
        let original: Vec<u8> = (0..count + 4).map(|i| (i * 5) as u8).collect();
        let mut dst = original.clone();

        xor(&mut dst, &src, count, 4, 0).unwrap();

        for i in 0..count {
            assert_eq!(dst[4 + i], original[4 + i] ^ src[i]);
        }
        assert_eq!(&dst[..4], &original[..4]);
    }
}

#[test]
fn test_xor_twice_restores() {
    let key = pattern(129);
    let original: Vec<u8> = (0..129).map(|i| (255 - i) as u8).collect();
    let mut data = original.clone();

    xor(&mut data, &key, 129, 0, 0).unwrap();
    assert_ne!(data, original);

    xor(&mut data, &key, 129, 0, 0).unwrap();
    assert_eq!(data, original);
}

#[test]
fn test_xor_within_overlap_forward_and_backward() {
    let buf = pattern(300);

    for (dst, src, count) in [(1, 0, 200), (0, 1, 200), (40, 8, 150), (8, 40, 150), (150, 0, 150)] {
        let mut actual = buf.clone();
        xor_within(&mut actual, count, dst, src).unwrap();

        assert_eq!(
            actual,
            xor_reference(&buf, count, dst, src),
            "dst {dst} src {src} count {count}"
        );
    }
}

#[test]
fn test_xor_within_same_offset_is_noop() {
    let buf = pattern(100);
    let mut actual = buf.clone();

    xor_within(&mut actual, 50, 10, 10).unwrap();
    assert_eq!(actual, buf);
}

#[test]
fn test_out_of_range_leaves_buffers_untouched() {
    let src = pattern(16);
    let original = pattern(16);
    let mut dst = original.clone();

    assert!(matches!(
        copy(&src, &mut dst, 10, 8, 0),
        Err(CryptoError::IndexOutOfRange { offset: 8, count: 10, len: 16 })
    ));
    assert!(matches!(
        xor(&mut dst, &src, 4, 13, 0),
        Err(CryptoError::IndexOutOfRange { offset: 13, count: 4, len: 16 })
    ));
    assert!(copy_within(&mut dst, 9, 0, 8).is_err());
    assert!(xor_within(&mut dst, 1, 0, 16).is_err());
    assert!(xor(&mut dst, &src, usize::MAX, 1, 0).is_err());

    assert_eq!(dst, original);
}

#[test]
fn test_equals_matching_and_differing() {
    let a = pattern(200);
    let mut b = vec![0u8; 3];
    b.extend_from_slice(&a);

    assert!(equals(&a, &b, 200, 0, 3).unwrap());

    for flip in [0, 7, 31, 32, 100, 199] {
        let mut c = b.clone();
        c[3 + flip] ^= 1;
        assert!(!equals(&a, &c, 200, 0, 3).unwrap(), "flip at {flip}");
    }
}

#[test]
fn test_equals_partial_range() {
    let a = [1u8, 2, 3, 4, 5];
    let b = [9u8, 2, 3, 4, 9];

    assert!(equals(&a, &b, 3, 1, 1).unwrap());
    assert!(!equals(&a, &b, 4, 1, 1).unwrap());
    assert!(equals(&a, &b, 0, 0, 0).unwrap());
}

#[test]
fn test_equals_empty_buffers() {
    let empty: [u8; 0] = [];
    let other = [1u8, 2, 3];

    assert!(equals(&empty, &empty, 0, 0, 0).unwrap());
    assert!(!equals(&empty, &other, 0, 0, 0).unwrap());
    assert!(!equals(&other, &empty, 0, 0, 0).unwrap());
}

#[test]
fn test_equals_same_range() {
    let a = pattern(64);

    assert!(equals(&a, &a, 64, 0, 0).unwrap());
    assert!(!equals(&a, &a, 32, 0, 1).unwrap());
}

#[test]
fn test_equals_validates_ranges() {
    let a = pattern(10);
    let empty: [u8; 0] = [];

    assert!(matches!(
        equals(&a, &a, 11, 0, 0),
        Err(CryptoError::IndexOutOfRange { .. })
    ));
    assert!(equals(&a, &empty, 1, 0, 0).is_err());
}
