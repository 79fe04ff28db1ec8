use std::fmt;
use std::ops::{Index, IndexMut};

use crate::seq::{Seq, seq_ref};

/// A fixed-capacity null-terminated byte string.
///
/// The capacity `N` counts every element including the terminator slot, so
/// `N` is always at least 1. Values built by [`concat`](crate::concat) and
/// [`slice`](crate::slice) (or the `cat!`/`cut!` macros) always hold a 0 in
/// the last slot; a buffer built with [`Ntbs::from_array`] holds whatever
/// the source array held.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Ntbs<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> Ntbs<N> {
    /// A zero-filled buffer (an empty string padded with terminators).
    pub const fn new() -> Self {
        const { assert!(N >= 1, "an ntbs needs a terminator slot") }
        Self { bytes: [0; N] }
    }

    /// Copy a raw fixed array of exactly matching size, unvalidated.
    pub const fn from_array(bytes: [u8; N]) -> Self {
        const { assert!(N >= 1, "an ntbs needs a terminator slot") }
        Self { bytes }
    }

    /// Copy a string's bytes and append the terminator.
    /// `N` must be `s.len() + 1`; the `ntbs!` macro deduces it.
    pub const fn from_str(s: &str) -> Self {
        assert!(s.len() + 1 == N, "string length does not match capacity");
        let src = s.as_bytes();
        let mut bytes = [0; N];
        let mut i = 0;
        while i < src.len() {
            bytes[i] = src[i];
            i += 1;
        }
        Self { bytes }
    }

    /// Buffer length, terminator slot included. Always `N`; embedded
    /// terminators do not shorten it.
    pub const fn len(&self) -> usize {
        N
    }

    /// True when the buffer holds nothing but the terminator.
    pub const fn is_empty(&self) -> bool {
        N == 1
    }

    pub const fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    /// The backing storage, terminator included.
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    pub const fn into_array(self) -> [u8; N] {
        self.bytes
    }

    pub const fn get(&self, i: usize) -> u8 {
        self.bytes[i]
    }

    /// The payload (everything before the terminator slot) as UTF-8.
    /// Panics if the payload is not valid UTF-8.
    pub const fn as_str(&self) -> &str {
        let (payload, _) = self.bytes.split_at(N - 1);
        match str::from_utf8(payload) {
            Ok(s) => s,
            Err(_) => panic!("ntbs payload is not valid utf-8"),
        }
    }

    /// Equality against any sequence value: reported lengths are equal and
    /// every byte in `[0, len)` matches, an implied terminator reading as 0.
    /// Usable in constant evaluation, unlike the `==` operators.
    pub const fn eq_seq<S: Seq>(&self, other: &S) -> bool {
        let r = seq_ref(other);
        if N != r.len() {
            return false;
        }
        let mut i = 0;
        while i < N {
            if self.bytes[i] != r.byte_at(i) {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl<const N: usize> Default for Ntbs<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<[u8; N]> for Ntbs<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self::from_array(bytes)
    }
}

impl<const N: usize> From<Ntbs<N>> for [u8; N] {
    fn from(ntbs: Ntbs<N>) -> Self {
        ntbs.bytes
    }
}

impl<const N: usize> AsRef<[u8]> for Ntbs<N> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize> Index<usize> for Ntbs<N> {
    type Output = u8;

    fn index(&self, i: usize) -> &u8 {
        &self.bytes[i]
    }
}

impl<const N: usize> IndexMut<usize> for Ntbs<N> {
    fn index_mut(&mut self, i: usize) -> &mut u8 {
        &mut self.bytes[i]
    }
}

// Defined with the buffer on the left-hand side only.
impl<const N: usize, const M: usize> PartialEq<Ntbs<M>> for Ntbs<N> {
    fn eq(&self, other: &Ntbs<M>) -> bool {
        self.eq_seq(other)
    }
}

impl<const N: usize, const M: usize> PartialEq<[u8; M]> for Ntbs<N> {
    fn eq(&self, other: &[u8; M]) -> bool {
        self.eq_seq(other)
    }
}

impl<const N: usize> PartialEq<u8> for Ntbs<N> {
    fn eq(&self, other: &u8) -> bool {
        self.eq_seq(other)
    }
}

impl<const N: usize> Eq for Ntbs<N> {}

impl<const N: usize> fmt::Debug for Ntbs<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ntbs(b\"{}\")", self.bytes.escape_ascii())
    }
}

#[test]
fn new_is_zero_filled() {
    let b = Ntbs::<4>::new();
    assert_eq!(b.as_bytes(), &[0, 0, 0, 0]);
    assert_eq!(b.len(), 4);
    assert!(!b.is_empty());
    assert!(Ntbs::<1>::default().is_empty());
}

#[test]
fn from_array_round_trips() {
    let b = Ntbs::from_array(*b"hi\0");
    assert_eq!(b.into_array(), *b"hi\0");
    assert_eq!(<[u8; 3]>::from(Ntbs::from(*b"hi\0")), *b"hi\0");
    assert_eq!(b.as_ref(), b"hi\0");
}

#[test]
fn from_str_appends_terminator() {
    const HI: Ntbs<3> = Ntbs::from_str("hi");
    assert_eq!(HI, *b"hi\0");
    assert_eq!(HI.as_str(), "hi");
}

#[test]
#[should_panic(expected = "string length does not match capacity")]
fn from_str_rejects_wrong_capacity() {
    let _ = Ntbs::<3>::from_str("toolong");
}

#[test]
fn eq_compares_length_then_bytes() {
    const HI: Ntbs<3> = Ntbs::from_str("hi");
    assert!(HI.eq_seq(b"hi\0"));
    assert!(!HI.eq_seq(b"hi"));
    assert!(!HI.eq_seq(b"ha\0"));
    assert_eq!(HI, Ntbs::from_array(*b"hi\0"));

    // single byte: length 2, implied terminator
    const C: Ntbs<2> = Ntbs::from_str("c");
    assert_eq!(C, b'c');
    assert!(C.eq_seq(&b'c'));
}

#[test]
fn embedded_terminator_counts_toward_buffer_length() {
    let a = Ntbs::from_array(*b"a\0\0");
    let b = Ntbs::from_array(*b"a\0");
    // same logical string, different buffer lengths
    assert!(a != b);
}

#[test]
fn index_mutates_through_mutable_binding() {
    let mut b = Ntbs::from_array(*b"cat\0");
    b[0] = b'b';
    assert_eq!(b[0], b'b');
    assert_eq!(b.get(1), b'a');
    assert_eq!(b, *b"bat\0");
}

#[test]
fn debug_escapes_bytes() {
    let b = Ntbs::from_array(*b"hi\0");
    assert_eq!(format!("{b:?}"), "Ntbs(b\"hi\\x00\")");
}
