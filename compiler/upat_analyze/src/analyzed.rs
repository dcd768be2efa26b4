//! Read-only accessors shared by templates and instances.

use upat_diagnostic::{ErrorLog, ErrorLogEntry};
use upat_ir::{codec, CodecError, Delimiter, NodeKind, NodeList};

/// A scanned input together with its nodes and error log.
pub trait Analyzed {
    fn input(&self) -> &str;

    fn nodes(&self) -> &NodeList;

    fn log(&self) -> &ErrorLog;

    /// Text of the first node of `kind`.
    fn first_text(&self, kind: NodeKind) -> Option<&str> {
        self.nodes()
            .first_of_kind(kind)
            .map(|node| node.text(self.input()))
    }

    fn protocol(&self) -> Option<&str> {
        self.first_text(NodeKind::PROTOCOL)
    }

    fn hostname(&self) -> Option<&str> {
        self.first_text(NodeKind::HOSTNAME)
    }

    fn port(&self) -> Option<&str> {
        self.first_text(NodeKind::PORT)
    }

    /// The path portion, templates left in place.
    ///
    /// Starts at the first `/` and stops at the query or fragment. Inputs
    /// without a `/` have the root path.
    fn pathname(&self) -> String {
        let nodes = self.nodes();
        let input = self.input();
        let Some(first) = nodes.first_of_kind(NodeKind::SLASH) else {
            return String::from("/");
        };

        let mut path = String::new();
        for node in &nodes.as_slice()[first.id.index()..] {
            match node.kind {
                NodeKind::Delimiter(d) if d.ends_path() => break,
                NodeKind::Delimiter(
                    Delimiter::Slash
                    | Delimiter::Colon
                    | Delimiter::OpenBracket
                    | Delimiter::CloseBracket
                    | Delimiter::Asterisk,
                )
                | NodeKind::PATH
                | NodeKind::VARIABLE
                | NodeKind::SLUG
                | NodeKind::ELLIPSIS => path.push_str(node.text(input)),
                _ => {}
            }
        }
        path
    }

    #[inline]
    fn has_errors(&self) -> bool {
        self.log().has_errors()
    }

    #[inline]
    fn errors(&self) -> &[ErrorLogEntry] {
        self.log().entries()
    }

    /// Every entry rendered against the input, or `"No errors found."`.
    fn error_report(&self) -> String {
        self.log().report(self.input())
    }

    /// The binary record of the node sequence.
    fn encode(&self) -> Result<Vec<u8>, CodecError> {
        codec::encode(self.nodes().as_slice())
    }
}

/// Percent-decode `text` into an owned string.
pub(crate) fn decode(text: &str) -> Option<String> {
    upat_lexer_core::decode_percent(text).map(std::borrow::Cow::into_owned)
}

pub(crate) fn record(log: &mut ErrorLog, entry: ErrorLogEntry) {
    tracing::debug!(code = %entry.code, span = %entry.span, "analysis error");
    log.record(entry);
}
