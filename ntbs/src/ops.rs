use std::fmt;

use cfg_if::cfg_if;

use crate::Ntbs;
use crate::seq::{Seq, SeqRef, seq_ref};

macro_rules! tri {
    ($value:expr) => {
        match $value {
            Ok(x) => x,
            Err(x) => return Err(x),
        }
    };
}

/// Whether concatenate/slice verify that their inputs end in a terminator.
///
/// The mode is explicit at the validation layer; [`NulCheck::DEFAULT`] is
/// what the panicking wrappers and the `cat!`/`cut!` macros use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NulCheck {
    Enforce,
    Skip,
}

impl NulCheck {
    cfg_if! {
        if #[cfg(feature = "nul-check")] {
            /// Forced on by the `nul-check` feature.
            pub const DEFAULT: Self = Self::Enforce;
        } else if #[cfg(feature = "no-nul-check")] {
            /// Forced off by the `no-nul-check` feature.
            pub const DEFAULT: Self = Self::Skip;
        } else if #[cfg(debug_assertions)] {
            /// Follows the build profile: checked in debug builds.
            pub const DEFAULT: Self = Self::Enforce;
        } else {
            /// Follows the build profile: unchecked in optimized builds.
            pub const DEFAULT: Self = Self::Skip;
        }
    }

    pub const fn enabled(self) -> bool {
        matches!(self, Self::Enforce)
    }
}

/// Failure detected while validating inputs, before any output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input at `argument` does not end in a terminator byte.
    NotNulTerminated { argument: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotNulTerminated { argument } => {
                write!(f, "argument {argument} is not nul-terminated")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Check that every input ends in a terminator.
///
/// An input is checked only when its physical bytes cover its reported
/// length; a lone `u8` stores no terminator to inspect and is exempt.
/// With [`NulCheck::Skip`] this is a no-op.
pub const fn validate(parts: &[SeqRef<'_>], check: NulCheck) -> Result<(), Error> {
    if !check.enabled() {
        return Ok(());
    }
    let mut i = 0;
    while i < parts.len() {
        let p = parts[i];
        if p.bytes().len() == p.len() && p.len() >= 1 && p.bytes()[p.len() - 1] != 0 {
            return Err(Error::NotNulTerminated { argument: i });
        }
        i += 1;
    }
    Ok(())
}

/// Output capacity of a concatenation: each input minus its terminator,
/// the full separator in every gap, one terminator at the end.
pub const fn concat_len(sep_len: usize, lens: &[usize]) -> usize {
    let mut total = 1;
    let mut i = 0;
    while i < lens.len() {
        assert!(lens[i] >= 1, "zero-length sequence");
        total += lens[i] - 1;
        i += 1;
    }
    if lens.len() > 1 {
        total += sep_len * (lens.len() - 1);
    }
    total
}

/// Concatenate `parts`, inserting `sep` between every consecutive pair.
///
/// `M` must be exactly [`concat_len`] of the inputs; the `cat!` macro
/// always supplies that value. Validation happens before any byte of the
/// output is written.
pub const fn try_concat<const M: usize>(
    sep: &[u8],
    parts: &[SeqRef<'_>],
    check: NulCheck,
) -> Result<Ntbs<M>, Error> {
    tri!(validate(parts, check));

    let mut bytes = [0; M];
    let mut at = 0;
    let mut i = 0;
    while i < parts.len() {
        if i != 0 {
            let mut s = 0;
            while s < sep.len() {
                bytes[at] = sep[s];
                at += 1;
                s += 1;
            }
        }
        let p = parts[i];
        let mut j = 0;
        while j + 1 < p.len() {
            bytes[at] = p.byte_at(j);
            at += 1;
            j += 1;
        }
        i += 1;
    }
    assert!(at + 1 == M, "output capacity mismatch");

    Ok(Ntbs::from_array(bytes))
}

/// [`try_concat`] with the build-time default mode, panicking on malformed
/// input. In constant evaluation the panic is a compile error.
pub const fn concat<const M: usize>(sep: &[u8], parts: &[SeqRef<'_>]) -> Ntbs<M> {
    match try_concat(sep, parts, NulCheck::DEFAULT) {
        Ok(out) => out,
        Err(_) => panic!("ntbs::concat arg not nul-terminated"),
    }
}

/// Resolve a signed slice index against a sequence of length `len`:
/// a negative `i` counts back from the end (`len + i`). Out-of-range
/// indices panic, which the `cut!` macro turns into a compile error.
pub const fn resolve_index(i: isize, len: usize) -> usize {
    let r = if i < 0 { len as isize + i } else { i };
    assert!(0 <= r && r <= len as isize, "index out of bounds");
    r as usize
}

/// Copy the half-open range `[begin, end)` of `part` and append a
/// terminator. Bounds are absolute here (`cut!` resolves signed ones) and
/// `M` must be `end - begin + 1`.
pub const fn try_slice<const M: usize>(
    part: SeqRef<'_>,
    begin: usize,
    end: usize,
    check: NulCheck,
) -> Result<Ntbs<M>, Error> {
    tri!(validate(&[part], check));
    assert!(begin <= end && end <= part.len(), "index out of bounds");
    assert!((end - begin) + 1 == M, "output capacity mismatch");

    let mut bytes = [0; M];
    let mut i = 0;
    while i < end - begin {
        bytes[i] = part.byte_at(begin + i);
        i += 1;
    }
    Ok(Ntbs::from_array(bytes))
}

/// [`try_slice`] with the build-time default mode, panicking on malformed
/// input. In constant evaluation the panic is a compile error.
pub const fn slice<const M: usize>(part: SeqRef<'_>, begin: usize, end: usize) -> Ntbs<M> {
    match try_slice(part, begin, end, NulCheck::DEFAULT) {
        Ok(out) => out,
        Err(_) => panic!("ntbs::slice arg not nul-terminated"),
    }
}

/// Lexicographic equality that stops at the first terminator, the C string
/// notion of equality. Contrast with [`Ntbs::eq_seq`], which compares the
/// whole buffer, reported length first.
pub const fn eq_until_nul<A: Seq, B: Seq>(a: &A, b: &B) -> bool {
    let (a, b) = (seq_ref(a), seq_ref(b));
    let mut i = 0;
    loop {
        let (x, y) = (a.byte_at(i), b.byte_at(i));
        if x != y {
            return false;
        }
        if x == 0 {
            return true;
        }
        i += 1;
    }
}

#[test]
fn length_law() {
    let parts = [seq_ref(b"Hello\0"), seq_ref(b"world\0")];
    let lens = [6, 6];
    assert_eq!(concat_len(2, &lens), (6 - 1) + (6 - 1) + 2 + 1);

    let out: Ntbs<13> = concat(b", ", &parts);
    assert_eq!(out, *b"Hello, world\0");
    assert_eq!(out.len(), 13);
}

#[test]
fn empty_input_law() {
    assert_eq!(concat_len(0, &[]), 1);
    // separators need a gap to land in
    assert_eq!(concat_len(2, &[]), 1);
    assert_eq!(concat_len(2, &[4]), 4);

    let empty: Ntbs<1> = concat(b"", &[]);
    assert_eq!(empty, *b"\0");
    assert_eq!(empty, concat::<1>(b"", &[seq_ref(b"\0")]));
}

#[test]
fn separator_lands_in_every_gap() {
    let parts = [seq_ref(b"a\0"), seq_ref(b"b\0"), seq_ref(b"c\0")];
    let out: Ntbs<8> = concat(b"--", &parts);
    assert_eq!(out, *b"a--b--c\0");
}

#[test]
fn single_byte_inputs_are_exempt_from_the_check() {
    let bang = b'!';
    let out: Ntbs<2> = try_concat(b"", &[seq_ref(&bang)], NulCheck::Enforce).unwrap();
    assert_eq!(out, *b"!\0");
}

#[test]
fn unterminated_input_is_rejected() {
    let throw = *b"throw";
    let parts = [seq_ref(&throw)];
    assert_eq!(
        try_concat::<5>(b"", &parts, NulCheck::Enforce),
        Err(Error::NotNulTerminated { argument: 0 })
    );
    assert_eq!(
        try_slice::<6>(seq_ref(&throw), 0, 5, NulCheck::Enforce),
        Err(Error::NotNulTerminated { argument: 0 })
    );
    assert_eq!(
        Error::NotNulTerminated { argument: 0 }.to_string(),
        "argument 0 is not nul-terminated"
    );
}

#[test]
fn skipped_check_copies_unvalidated_bytes() {
    let throw = *b"throw";
    let out = try_concat::<5>(b"", &[seq_ref(&throw)], NulCheck::Skip).unwrap();
    // the last source byte is treated as the terminator it isn't
    assert_eq!(out, *b"thro\0");
}

#[test]
#[should_panic(expected = "not nul-terminated")]
fn panicking_wrapper_reports_the_check() {
    if !NulCheck::DEFAULT.enabled() {
        panic!("not nul-terminated (check disabled in this profile)");
    }
    let throw = *b"throw";
    let _ = concat::<5>(b"", &[seq_ref(&throw)]);
}

#[test]
fn full_slice_is_a_faithful_copy() {
    let hello = *b"Hello\0";
    let copied: Ntbs<6> = slice(seq_ref(&hello), 0, 5);
    assert_eq!(copied, concat::<6>(b"", &[seq_ref(&hello)]));
    assert_eq!(copied, hello);
}

#[test]
fn resolve_index_counts_back_from_the_end() {
    assert_eq!(resolve_index(0, 14), 0);
    assert_eq!(resolve_index(-1, 14), 13);
    assert_eq!(resolve_index(-7, 14), 7);
    assert_eq!(resolve_index(14, 14), 14);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn resolve_index_rejects_past_the_end() {
    let _ = resolve_index(20, 6);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn resolve_index_rejects_before_the_start() {
    let _ = resolve_index(-8, 7);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn slice_rejects_inverted_bounds() {
    let hello = *b"Hello\0";
    let _ = try_slice::<1>(seq_ref(&hello), 4, 2, NulCheck::Skip);
}

#[test]
fn slicing_a_single_byte_reads_the_implied_terminator() {
    let c = b'c';
    let out: Ntbs<3> = slice(seq_ref(&c), 0, 2);
    assert_eq!(out, *b"c\0\0");
}

#[test]
fn eq_until_nul_stops_at_the_first_terminator() {
    let long = *b"a\0tail\0";
    let short = *b"a\0";
    assert!(eq_until_nul(&long, &short));
    assert!(!Ntbs::from_array(short).eq_seq(&long));
    assert!(!eq_until_nul(b"ab\0", &short));
}

#[test]
fn default_mode_tracks_build_configuration() {
    let expect = if cfg!(feature = "nul-check") {
        NulCheck::Enforce
    } else if cfg!(feature = "no-nul-check") {
        NulCheck::Skip
    } else if cfg!(debug_assertions) {
        NulCheck::Enforce
    } else {
        NulCheck::Skip
    };
    assert_eq!(NulCheck::DEFAULT, expect);
}
