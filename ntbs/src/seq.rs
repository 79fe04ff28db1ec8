use crate::Ntbs;

/// A fixed-size byte sequence with a statically known length.
///
/// `LEN` is the reported length of the sequence, terminator slot included.
/// `data` and `seq_ref` read the value's object representation directly, so
/// this trait is `unsafe` to implement.
///
/// # Safety
///
/// Every byte of the value's object representation must be an initialized
/// `u8` (no padding, no pointers). `LEN` must equal `size_of::<Self>()`,
/// except for representations whose terminator is implied rather than
/// stored, where `LEN` may exceed the size by exactly one (a lone `u8`
/// reports length 2).
pub unsafe trait Seq {
    const LEN: usize;
}

unsafe impl<const N: usize> Seq for [u8; N] {
    const LEN: usize = N;
}

// A single byte acts as a 2-element sequence: the byte plus an implied
// terminator that is never stored.
unsafe impl Seq for u8 {
    const LEN: usize = 2;
}

unsafe impl<const N: usize> Seq for Ntbs<N> {
    const LEN: usize = N;
}

/// Read-only address of the first byte of a sequence.
pub const fn data<S: Seq>(seq: &S) -> *const u8 {
    (seq as *const S).cast()
}

/// Reported length of a sequence, terminator slot included.
pub const fn size<S: Seq>(_seq: &S) -> usize {
    S::LEN
}

/// A type-erased view of a sequence: the bytes that physically exist plus
/// the reported length. Bytes past the physical end but inside the reported
/// length read as the implied terminator.
#[derive(Clone, Copy)]
pub struct SeqRef<'a> {
    bytes: &'a [u8],
    len: usize,
}

impl<'a> SeqRef<'a> {
    /// View a runtime byte slice as a sequence; the slice is its own
    /// physical storage, so its last byte is expected to be the terminator.
    pub const fn from_slice(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            len: bytes.len(),
        }
    }

    /// The physically present bytes.
    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Reported length, terminator slot included.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len <= 1
    }

    /// Byte at `i`, or the implied terminator when `i` is past the physical
    /// end. Keeps every read inside the declared storage.
    pub const fn byte_at(&self, i: usize) -> u8 {
        if i < self.bytes.len() { self.bytes[i] } else { 0 }
    }
}

/// Erase a typed sequence to a [`SeqRef`].
pub const fn seq_ref<S: Seq>(seq: &S) -> SeqRef<'_> {
    let size = size_of::<S>();
    let physical = if size < S::LEN { size } else { S::LEN };
    SeqRef {
        // SAFETY: the `Seq` contract guarantees the object representation
        // is initialized plain bytes, and `physical` never exceeds it.
        bytes: unsafe { core::slice::from_raw_parts(data(seq), physical) },
        len: S::LEN,
    }
}

#[test]
fn single_byte_is_a_two_element_sequence() {
    let c = b'c';
    assert_eq!(size(&c), 2);
    assert_eq!(unsafe { *data(&c) }, b'c');

    let r = seq_ref(&c);
    assert_eq!(r.len(), 2);
    assert_eq!(r.bytes().len(), 1);
    assert_eq!(r.byte_at(0), b'c');
    assert_eq!(r.byte_at(1), 0);
}

#[test]
fn raw_array_reports_its_extent() {
    let hello = *b"Hello\0";
    assert_eq!(size(&hello), 6);
    assert_eq!(unsafe { *data(&hello) }, b'H');

    let r = seq_ref(&hello);
    assert_eq!(r.len(), 6);
    assert_eq!(r.bytes(), b"Hello\0");
    assert_eq!(r.byte_at(5), 0);
}

#[test]
fn from_slice_takes_runtime_lengths() {
    let buf = vec![b'h', b'i', 0];
    let r = SeqRef::from_slice(&buf);
    assert_eq!(r.len(), 3);
    assert!(!r.is_empty());
    assert_eq!(r.byte_at(7), 0);
}
