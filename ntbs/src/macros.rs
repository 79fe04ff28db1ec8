/// Build an [`Ntbs`](crate::Ntbs) from a string literal, deducing the
/// capacity (the literal's length plus the terminator).
///
/// ```
/// use ntbs::Ntbs;
///
/// const HELLO: Ntbs<6> = ntbs::ntbs!("Hello");
/// assert!(HELLO.eq_seq(b"Hello\0"));
/// assert!(ntbs::ntbs!().is_empty());
/// ```
#[macro_export]
macro_rules! ntbs {
    () => {
        $crate::Ntbs::<1>::new()
    };
    ($s:expr) => {{
        const __S: &str = $s;
        const __N: usize = __S.len() + 1;
        $crate::Ntbs::<__N>::from_str(__S)
    }};
}

/// Concatenate null-terminated byte sequences, deducing the output
/// capacity from the argument types.
///
/// Arguments are sequence values (raw arrays such as `*b"Hello\0"`, `Ntbs`
/// buffers, single `u8` bytes) and must be constant expressions; separator
/// bytes, inserted in every gap, go in front: `cat!(sep b", "; a, b)`.
/// For non-constant data use [`concat`](crate::concat) with an explicit
/// capacity.
///
/// ```
/// use ntbs::Ntbs;
///
/// const HELLO_WORLD: Ntbs<14> =
///     ntbs::cat!(ntbs::cat!(sep b", "; *b"Hello\0", *b"world\0"), b'!');
/// assert!(HELLO_WORLD.eq_seq(b"Hello, world!\0"));
///
/// const EMPTY: Ntbs<1> = ntbs::cat!();
/// assert!(EMPTY.eq_seq(b"\0"));
/// ```
///
/// An unterminated argument fails the check (a compile error in constant
/// evaluation) whenever the build profile enables it.
#[macro_export]
macro_rules! cat {
    (sep $sep:literal; $($arg:expr),* $(,)?) => {{
        const __SEP: &[u8] = $sep;
        const __M: usize = $crate::concat_len(__SEP.len(), &[$($crate::size(&$arg)),*]);
        $crate::concat::<__M>(__SEP, &[$($crate::seq_ref(&$arg)),*])
    }};
    (sep [$($s:expr),* $(,)?]; $($arg:expr),* $(,)?) => {{
        const __SEP: &[u8] = &[$($s),*];
        const __M: usize = $crate::concat_len(__SEP.len(), &[$($crate::size(&$arg)),*]);
        $crate::concat::<__M>(__SEP, &[$($crate::seq_ref(&$arg)),*])
    }};
    ($($arg:expr),* $(,)?) => {
        $crate::cat!(sep []; $($arg),*)
    };
}

/// Slice a null-terminated byte sequence, deducing the output capacity.
///
/// `cut!(a, begin, end)` copies the half-open range `[begin, end)` and
/// appends a terminator. Indices are signed, a negative one counting back
/// from the end; `begin` defaults to 0 and `end` to −1, so `cut!(a)` is a
/// full copy. The argument and indices must be constant expressions; for
/// non-constant data use [`slice`](crate::slice) with absolute bounds.
///
/// ```
/// use ntbs::Ntbs;
///
/// const HELLO_WORLD: Ntbs<14> = ntbs::ntbs!("Hello, world!");
/// const HELLO_COMMA: Ntbs<7> = ntbs::cut!(HELLO_WORLD, 0, 6);
/// const WORLD_EXCLAIM: Ntbs<7> = ntbs::cut!(HELLO_WORLD, -7);
/// assert!(HELLO_COMMA.eq_seq(b"Hello,\0"));
/// assert!(WORLD_EXCLAIM.eq_seq(b"world!\0"));
/// ```
///
/// Out-of-range bounds are rejected during constant evaluation:
///
/// ```compile_fail
/// const BAD: ntbs::Ntbs<21> = ntbs::cut!(*b"short\0", 0, 20);
/// let _ = BAD;
/// ```
///
/// ```compile_fail
/// const BAD: ntbs::Ntbs<1> = ntbs::cut!(*b"short\0", 4, 2);
/// let _ = BAD;
/// ```
#[macro_export]
macro_rules! cut {
    ($arg:expr $(,)?) => {
        $crate::cut!($arg, 0, -1)
    };
    ($arg:expr, $b:expr $(,)?) => {
        $crate::cut!($arg, $b, -1)
    };
    ($arg:expr, $b:expr, $e:expr $(,)?) => {{
        const __N: usize = $crate::size(&$arg);
        const __B: usize = $crate::resolve_index($b, __N);
        const __E: usize = $crate::resolve_index($e, __N);
        const __M: usize = {
            assert!(__B <= __E, "index out of bounds");
            (__E - __B) + 1
        };
        $crate::slice::<__M>($crate::seq_ref(&$arg), __B, __E)
    }};
}

#[cfg(test)]
mod tests {
    use crate::Ntbs;

    const HELLO_WORLD: Ntbs<14> = cat!(cat!(sep b", "; *b"Hello\0", *b"world\0"), b'!');
    const HELLO_COMMA: Ntbs<7> = cut!(HELLO_WORLD, 0, 6);
    const WORLD_EXCLAIM: Ntbs<7> = cut!(HELLO_WORLD, -7);

    // the whole flow holds during constant evaluation
    const _: () = {
        assert!(HELLO_WORLD.eq_seq(b"Hello, world!\0"));
        assert!(HELLO_COMMA.eq_seq(b"Hello,\0"));
        assert!(WORLD_EXCLAIM.eq_seq(b"world!\0"));
    };

    #[test]
    fn hello_world_round_trip() {
        assert_eq!(HELLO_WORLD, *b"Hello, world!\0");
        assert_eq!(HELLO_WORLD.as_str(), "Hello, world!");
        assert_eq!(HELLO_COMMA, *b"Hello,\0");
        assert_eq!(WORLD_EXCLAIM, *b"world!\0");

        // rejoining the complementary slices reconstructs the original
        const REJOINED: Ntbs<14> = cat!(sep [b' ']; HELLO_COMMA, WORLD_EXCLAIM);
        assert_eq!(REJOINED, HELLO_WORLD);
    }

    #[test]
    fn negative_index_law() {
        const BY_NEGATIVE: Ntbs<7> = cut!(HELLO_WORLD, -7);
        const BY_ABSOLUTE: Ntbs<7> = cut!(HELLO_WORLD, 7, 13);
        assert_eq!(BY_NEGATIVE, BY_ABSOLUTE);
    }

    #[test]
    fn full_cut_equals_cat_of_the_input() {
        const COPY: Ntbs<14> = cut!(HELLO_WORLD);
        assert_eq!(COPY, cat!(HELLO_WORLD));
        assert_eq!(COPY, HELLO_WORLD);
    }

    #[test]
    fn empty_laws() {
        const EMPTY: Ntbs<1> = cat!();
        assert_eq!(EMPTY, *b"\0");
        assert_eq!(EMPTY, cat!(*b"\0"));
        assert_eq!(EMPTY, cut!(*b"\0"));
        assert_eq!(EMPTY, ntbs!());
        // a separator with no gap to land in
        assert_eq!(cat!(sep b"--"; *b"a\0"), *b"a\0");
    }

    #[test]
    fn single_bytes_concatenate_as_length_two_sequences() {
        const C: Ntbs<2> = cat!(b'c');
        assert_eq!(C, ntbs!("c"));
        assert_eq!(C, b'c');
        assert_eq!(cat!(sep [b'-']; b'a', b'b'), *b"a-b\0");
    }

    #[test]
    fn cut_accepts_every_form_of_the_empty_range() {
        const NUL: Ntbs<1> = ntbs!();
        assert_eq!(cut!(NUL), NUL);
        assert_eq!(cut!(NUL, 0), NUL);
        assert_eq!(cut!(NUL, -1), NUL);
        assert_eq!(cut!(NUL, 0, 0), NUL);
        assert_eq!(cut!(NUL, -1, -1), NUL);
    }

    #[test]
    fn cut_of_a_single_char_buffer() {
        const C: Ntbs<2> = ntbs!("c");
        assert_eq!(cut!(C), C);
        assert_eq!(cut!(C, -2), C);
        assert_eq!(cut!(C, -2, -1), C);
        assert_eq!(cut!(C, 0, 0), *b"\0");
    }
}
