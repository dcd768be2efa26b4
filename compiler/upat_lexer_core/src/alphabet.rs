//! Byte classification for the URL template grammar.
//!
//! Every byte the scanner looks at goes through [`byte_class`], so the
//! classification is a 256-entry table built at compile time rather than a
//! chain of comparisons.
//!
//! | Class       | Bytes                         |
//! |-------------|-------------------------------|
//! | `Delimiter` | `/ : ? & ; # * [ ]`           |
//! | `Equal`     | `=` (encoding symbol)         |
//! | `Content`   | everything else               |
//!
//! `=` is kept apart from the structural delimiters: it ends a token like
//! any delimiter, but it is allowed inside a dynamic segment.

/// Classification of a single input byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ByteClass {
    /// Ordinary token content.
    Content = 0,
    /// One of the structural delimiters `/ : ? & ; # * [ ]`.
    Delimiter = 1,
    /// The `=` encoding symbol.
    Equal = 2,
}

/// Structural delimiter bytes, in no particular order.
pub const DELIMITERS: [u8; 9] = [b'/', b':', b'?', b'&', b';', b'#', b'*', b'[', b']'];

const fn build_table() -> [ByteClass; 256] {
    let mut table = [ByteClass::Content; 256];
    let mut i = 0;
    while i < DELIMITERS.len() {
        table[DELIMITERS[i] as usize] = ByteClass::Delimiter;
        i += 1;
    }
    table[b'=' as usize] = ByteClass::Equal;
    table
}

static BYTE_CLASS: [ByteClass; 256] = build_table();

/// Look up the class of `byte`.
#[inline]
pub fn byte_class(byte: u8) -> ByteClass {
    BYTE_CLASS[byte as usize]
}

/// Returns `true` if `byte` is itself a grammar token (a delimiter or `=`).
#[inline]
pub fn is_grammar_byte(byte: u8) -> bool {
    !matches!(byte_class(byte), ByteClass::Content)
}
