//! Copyable byte cursor over the scanner input.
//!
//! Lookahead past the end of input yields `None` rather than a sentinel
//! byte: URL text may legitimately carry a `%00` escape, but never needs a
//! raw NUL to mean "end".

/// Byte cursor over a `&str`.
///
/// The cursor is [`Copy`], so the scanner can snapshot it for lookahead
/// without borrowing trouble.
///
/// Positions are `u32` byte offsets. Inputs longer than `u32::MAX` bytes are
/// scanned up to that limit.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            source_len: u32::try_from(src.len()).unwrap_or(u32::MAX),
        }
    }

    /// Returns the byte at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(1)
    }

    /// Returns the byte `offset` positions ahead of current.
    #[inline]
    pub fn peek_at(&self, offset: u32) -> Option<u8> {
        self.byte_at(self.pos.saturating_add(offset))
    }

    /// Returns `true` if the bytes starting `offset` positions ahead of
    /// current are exactly `pattern`.
    pub fn lookahead_is(&self, offset: u32, pattern: &[u8]) -> bool {
        let start = self.pos.saturating_add(offset) as usize;
        let end = start.saturating_add(pattern.len());
        end <= self.source_len as usize && &self.src.as_bytes()[start..end] == pattern
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the scanned source.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring.
    ///
    /// Returns `""` when `start..end` is out of range or does not fall on
    /// character boundaries. Delimiters are ASCII, so ranges produced from
    /// token boundaries always do.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.src.get(start as usize..end as usize).unwrap_or("")
    }

    /// Advance until `byte` is found or EOF is reached.
    ///
    /// Returns the number of bytes consumed. The cursor is left on the found
    /// byte, or at EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < source_len which fits in u32"
    )]
    pub fn eat_until(&mut self, byte: u8) -> u32 {
        let start = self.pos;
        let remaining = &self.src.as_bytes()[self.pos as usize..self.source_len as usize];
        match memchr::memchr(byte, remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
        self.pos - start
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> Option<u8> {
        if pos < self.source_len {
            Some(self.src.as_bytes()[pos as usize])
        } else {
            None
        }
    }
}
