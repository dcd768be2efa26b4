//! Low-level building blocks for the upat scanner.
//!
//! This crate is deliberately standalone: it knows nothing about nodes,
//! diagnostics or templates. It provides three things:
//!
//! - [`alphabet`]: the constant byte classification table that decides, in a
//!   single lookup, whether a byte is itself a grammar token.
//! - [`Cursor`]: a copyable byte cursor with small fixed lookaheads.
//! - [`percent`]: a table-driven UTF-8 validating `%XX` decoder.

pub mod alphabet;
mod cursor;
pub mod percent;

pub use alphabet::{byte_class, is_grammar_byte, ByteClass};
pub use cursor::Cursor;
pub use percent::{decode_percent, decode_percent_utf16};
