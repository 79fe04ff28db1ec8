//! Concatenation and slicing of fixed-size null-terminated byte strings.
//!
//! An NTBS is a byte buffer whose element count is part of its type and
//! whose last element is the terminator, 0. The [`cat!`] and [`cut!`]
//! macros build and slice such buffers entirely during constant
//! evaluation, deducing every output capacity from the input types; the
//! [`concat()`] and [`slice()`] functions are the same operations with an
//! explicit capacity, usable on runtime data.
//!
//! ```
//! use ntbs::Ntbs;
//!
//! const HELLO_WORLD: Ntbs<14> =
//!     ntbs::cat!(ntbs::cat!(sep b", "; *b"Hello\0", *b"world\0"), b'!');
//! const HELLO_COMMA: Ntbs<7> = ntbs::cut!(HELLO_WORLD, 0, 6);
//! const WORLD_EXCLAIM: Ntbs<7> = ntbs::cut!(HELLO_WORLD, -7);
//!
//! const _: () = assert!(HELLO_WORLD.eq_seq(b"Hello, world!\0"));
//!
//! let rejoined: Ntbs<14> = ntbs::cat!(sep [b' ']; HELLO_COMMA, WORLD_EXCLAIM);
//! assert_eq!(rejoined.as_str(), "Hello, world!");
//! ```
//!
//! Any type implementing [`Seq`] can be passed as an input; out of the box
//! that is raw `[u8; N]` arrays, single `u8` bytes (treated as length-2
//! sequences) and [`Ntbs`] itself.

mod buffer;
mod macros;
mod ops;
mod seq;

pub use buffer::Ntbs;
pub use ops::{
    Error, NulCheck, concat, concat_len, eq_until_nul, resolve_index, slice, try_concat,
    try_slice, validate,
};
pub use seq::{Seq, SeqRef, data, seq_ref, size};
