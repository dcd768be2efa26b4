//! The scanner state machine.
//!
//! # Model
//!
//! Every delimiter byte becomes a one-byte node and selects the state used
//! for the content that follows it:
//!
//! | byte            | next state  |
//! |-----------------|-------------|
//! | `#`             | `Fragment`  |
//! | `/`             | `Path`      |
//! | `?` `&` `;`     | `Parameter` |
//! | `:`             | `Variable`  |
//! | `*`             | `Void`      |
//! | `[`             | `Ellipsis`  |
//! | `]`             | `Null`      |
//! | `=`             | `Value`     |
//!
//! Content bytes accumulate until the next byte is a delimiter or the end of
//! input. The content is then committed as one node whose kind depends on
//! the state. Content in `Null` state is an origin component or a bare
//! parameter, decided by what follows it.
//!
//! Lookahead is at most three bytes (`://` and `...`).

use upat_diagnostic::ErrorLogEntry;
use upat_ir::{ContentType, Delimiter, NodeKind, NodeList, Span};
use upat_lexer_core::{is_grammar_byte, Cursor};

/// Nodes and diagnostics produced by one scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOutput {
    pub nodes: NodeList,
    pub errors: Vec<ErrorLogEntry>,
}

/// What the next content byte belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    /// After `]`, or at the start of input.
    Null,
    Path,
    Variable,
    Parameter,
    Value,
    Fragment,
    /// Inside `[` before the first content byte.
    Ellipsis,
    /// Name of a `[name]` or `[...name]` segment.
    Slug,
    /// After `*`; only `[` may follow.
    Void,
    Hostname,
    Port,
    /// After a malformed catch-all; skip up to the closing `]`.
    Recovery,
}

/// Progress through a `[...name]` segment.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum CatchAll {
    None,
    /// `...` seen; holds the offset of the opening `[`.
    Open(u32),
    /// The closing `]` has been seen.
    Closed,
}

/// Scan `input` into nodes.
///
/// Scanning never fails. Problems are reported in [`ScanOutput::errors`];
/// all but one are recoverable. A second dynamic segment after a closed
/// catch-all stops the scan, leaving the nodes produced so far.
#[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
pub fn scan(input: &str) -> ScanOutput {
    let mut scanner = Scanner::new(input);
    scanner.run();
    tracing::debug!(
        nodes = scanner.nodes.len(),
        errors = scanner.errors.len(),
        "scan finished"
    );
    ScanOutput {
        nodes: scanner.nodes,
        errors: scanner.errors,
    }
}

struct Scanner<'a> {
    cursor: Cursor<'a>,
    nodes: NodeList,
    errors: Vec<ErrorLogEntry>,
    state: State,
    token_start: u32,
    catch_all: CatchAll,
    /// Set once a query separator or `#` is seen; the path is over.
    past_path: bool,
    /// A fatal error was recorded.
    halted: bool,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(input),
            // A delimiter per four bytes is typical of real templates.
            nodes: NodeList::with_capacity(input.len() / 4 + 1),
            errors: Vec::new(),
            state: State::Null,
            token_start: 0,
            catch_all: CatchAll::None,
            past_path: false,
            halted: false,
        }
    }

    fn run(&mut self) {
        while let Some(byte) = self.cursor.current() {
            if self.state == State::Recovery && byte != b']' {
                self.cursor.eat_until(b']');
                continue;
            }
            if self.state == State::Recovery {
                self.recover();
            } else if is_grammar_byte(byte) {
                self.delimiter(byte);
            } else {
                self.content(byte);
            }
            if self.halted {
                return;
            }
            self.cursor.advance();
        }
    }

    // ─── Delimiters ─────────────────────────────────────────────────────

    fn delimiter(&mut self, byte: u8) {
        let i = self.cursor.pos();
        let Some(delimiter) = Delimiter::from_byte(byte) else {
            return;
        };

        if self.catch_all == CatchAll::Closed
            && !self.past_path
            && matches!(delimiter, Delimiter::OpenBracket | Delimiter::Colon)
        {
            self.error(ErrorLogEntry::unexpected_after_catch_all(Span::new(
                i,
                self.cursor.source_len(),
            )));
            return;
        }

        if matches!(self.state, State::Slug | State::Ellipsis)
            && !matches!(delimiter, Delimiter::CloseBracket | Delimiter::Equal)
        {
            self.error(ErrorLogEntry::delimiter_in_segment(
                char::from(byte),
                Span::new(i, i + 1),
            ));
        }

        if self.state == State::Path && delimiter == Delimiter::Slash {
            self.error(ErrorLogEntry::consecutive_slashes(Span::new(i, i + 1)));
        }

        if delimiter == Delimiter::CloseBracket {
            self.close_bracket(i);
        }

        self.state = match delimiter {
            Delimiter::Hash => State::Fragment,
            Delimiter::Slash => State::Path,
            Delimiter::Ampersand | Delimiter::Semicolon | Delimiter::Question => State::Parameter,
            Delimiter::Colon => State::Variable,
            Delimiter::Asterisk => State::Void,
            Delimiter::OpenBracket => State::Ellipsis,
            Delimiter::CloseBracket => State::Null,
            Delimiter::Equal => State::Value,
        };
        if delimiter.ends_path() {
            self.past_path = true;
        }

        self.push(NodeKind::Delimiter(delimiter), Span::new(i, i + 1), ContentType::None);
        self.token_start = i + 1;
    }

    fn close_bracket(&mut self, i: u32) {
        if let CatchAll::Open(open) = self.catch_all {
            if self.state == State::Slug {
                // `[...]`: the slug never committed.
                self.error(ErrorLogEntry::unnamed_catch_all(Span::new(open, i + 1)));
                self.catch_all = CatchAll::None;
            } else {
                self.catch_all = CatchAll::Closed;
            }
        }
    }

    // ─── Content ────────────────────────────────────────────────────────

    fn content(&mut self, byte: u8) {
        let i = self.cursor.pos();
        let next = self.cursor.peek();

        if self.state == State::Ellipsis {
            if byte == b'.' {
                self.ellipsis(i);
                return;
            }
            self.state = State::Slug;
        }

        self.check_follower(i, next);

        let at_boundary = next.map_or(true, is_grammar_byte);
        if at_boundary {
            self.commit(i, next);
        }
    }

    /// A `.` right after `[`: either a well-formed `...` or a broken
    /// catch-all.
    fn ellipsis(&mut self, i: u32) {
        if self.cursor.lookahead_is(0, b"...") {
            self.push(NodeKind::ELLIPSIS, Span::new(i, i + 3), ContentType::None);
            self.catch_all = CatchAll::Open(self.token_start.saturating_sub(1));
            self.cursor.advance_n(2);
            self.token_start = i + 3;
            self.state = State::Slug;
            return;
        }

        let end = (i + 3).min(self.cursor.source_len());
        let found = self.cursor.slice(i, end);
        self.error(ErrorLogEntry::invalid_catch_all(found, Span::new(i, end)));
        self.state = State::Recovery;
    }

    /// Content that is directly followed by a delimiter it may not precede.
    fn check_follower(&mut self, i: u32, next: Option<u8>) {
        let Some(next) = next else {
            return;
        };
        let span = Span::new(i + 1, i + 2);
        match self.state {
            State::Path | State::Variable
                if next == b'&' || next == b':' || (self.state == State::Path && next == b'=') =>
            {
                self.error(ErrorLogEntry::invalid_path_follower(char::from(next), span));
            }
            State::Parameter if matches!(next, b':' | b'/' | b'?') => {
                self.error(ErrorLogEntry::invalid_parameter_follower(char::from(next), span));
            }
            _ => {}
        }
    }

    /// Commit `[token_start, i + 1)` according to the current state.
    fn commit(&mut self, i: u32, next: Option<u8>) {
        let span = Span::new(self.token_start, i + 1);
        match self.state {
            State::Path => self.push_token(NodeKind::PATH, span),
            State::Variable => self.push_token(NodeKind::VARIABLE, span),
            State::Slug => self.push_token(NodeKind::SLUG, span),
            State::Fragment => self.push_token(NodeKind::FRAGMENT, span),
            State::Port => self.push_token(NodeKind::PORT, span),
            State::Parameter | State::Value => {
                let kind = if self.state == State::Value {
                    NodeKind::VALUE
                } else {
                    NodeKind::PARAMETER
                };
                let ty = ContentType::from_literal(self.cursor.slice(span.start, span.end))
                    .unwrap_or_default();
                self.push(kind, span, ty);
                self.state = State::Null;
            }
            State::Null => self.bare_token(i, span, next),
            State::Hostname => {
                self.push(NodeKind::HOSTNAME, span, ContentType::None);
                self.after_host(i, next);
            }
            State::Void => {
                self.error(ErrorLogEntry::content_after_asterisk(span));
                self.state = State::Null;
            }
            // Both are resolved before a commit can happen.
            State::Ellipsis | State::Recovery => {}
        }
    }

    /// Content outside any delimiter context: a protocol, a host, or a bare
    /// parameter.
    fn bare_token(&mut self, i: u32, span: Span, next: Option<u8>) {
        let text = self.cursor.slice(span.start, span.end);
        if matches!(text, "http" | "https") && self.cursor.lookahead_is(1, b"://") {
            self.push(NodeKind::PROTOCOL, span, ContentType::None);
            // Resume at the first byte of the host.
            self.cursor.advance_n(3);
            self.token_start = i + 4;
            self.state = State::Hostname;
            return;
        }
        match next {
            Some(b':' | b'/') => {
                self.push(NodeKind::HOSTNAME, span, ContentType::None);
                self.after_host(i, next);
            }
            _ => {
                self.push(NodeKind::PARAMETER, span, ContentType::None);
            }
        }
    }

    /// After a host: `:` introduces a port and is not emitted as a node.
    fn after_host(&mut self, i: u32, next: Option<u8>) {
        if next == Some(b':') {
            self.cursor.advance();
            self.token_start = i + 2;
            self.state = State::Port;
        } else {
            self.state = State::Null;
        }
    }

    // ─── Recovery ───────────────────────────────────────────────────────

    /// At the `]` that ends a malformed catch-all. Anything after it cannot
    /// be trusted and stops the scan.
    fn recover(&mut self) {
        let i = self.cursor.pos();
        let len = self.cursor.source_len();
        self.state = State::Null;
        self.token_start = i + 1;
        if i + 1 < len {
            self.error(ErrorLogEntry::unexpected_after_catch_all(Span::new(i + 1, len)));
        }
    }

    // ─── Output ─────────────────────────────────────────────────────────

    fn push_token(&mut self, kind: NodeKind, span: Span) {
        self.push(kind, span, ContentType::None);
        self.state = State::Null;
    }

    fn push(&mut self, kind: NodeKind, span: Span, ty: ContentType) {
        let id = self.nodes.push(kind, span, ty);
        tracing::trace!(id = id.raw(), ?kind, %span, %ty, "node");
    }

    fn error(&mut self, entry: ErrorLogEntry) {
        tracing::debug!(code = %entry.code, span = %entry.span, "syntax error");
        self.halted |= entry.code.is_fatal();
        self.errors.push(entry);
    }
}
