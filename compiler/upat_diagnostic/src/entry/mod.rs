//! A single recorded error.

use upat_ir::Span;

use crate::ErrorCode;

/// One diagnostic: what went wrong, and where in the input.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ErrorLogEntry {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
}

impl ErrorLogEntry {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ErrorLogEntry {
            code,
            message: message.into(),
            span,
        }
    }

    /// Character column of the span start in `input`.
    ///
    /// Falls back to the byte offset when the span does not land on a
    /// character boundary.
    pub fn column(&self, input: &str) -> usize {
        let start = self.span.start as usize;
        input.get(..start).map_or(start, |prefix| prefix.chars().count())
    }

    /// Width of the caret underline: the span length in characters, at
    /// least 1.
    pub fn underline_width(&self, input: &str) -> usize {
        let width = input
            .get(self.span.to_range())
            .map_or(self.span.len() as usize, |text| text.chars().count());
        width.max(1)
    }

    /// Three-line rendering: header, the input, and a caret underline.
    ///
    /// ```text
    /// Error [E_CONSECUTIVE_SLASHES] at col 1: Consecutive slashes are not allowed in the path.
    /// //users
    ///  ^
    /// ```
    pub fn display(&self, input: &str) -> String {
        let column = self.column(input);
        format!(
            "Error [{}] at col {column}: {}\n{input}\n{}{}",
            self.code,
            self.message,
            " ".repeat(column),
            "^".repeat(self.underline_width(input)),
        )
    }

    // Scanner diagnostics

    pub fn unexpected_after_catch_all(span: Span) -> Self {
        Self::new(
            ErrorCode::UnexpectedToken,
            "Unexpected token after catch-all '[]'. A catch-all must be the final dynamic element.",
            span,
        )
    }

    pub fn delimiter_in_segment(delimiter: char, span: Span) -> Self {
        Self::new(
            ErrorCode::InvalidSyntax,
            format!("Unexpected delimiter '{delimiter}' inside a dynamic segment '[]'."),
            span,
        )
    }

    pub fn consecutive_slashes(span: Span) -> Self {
        Self::new(
            ErrorCode::ConsecutiveSlashes,
            "Consecutive slashes are not allowed in the path.",
            span,
        )
    }

    pub fn invalid_path_follower(next: char, span: Span) -> Self {
        Self::new(
            ErrorCode::InvalidSyntax,
            format!(
                "Unexpected token '{next}'. A path segment or variable cannot be followed by '{next}'."
            ),
            span,
        )
    }

    pub fn invalid_parameter_follower(next: char, span: Span) -> Self {
        Self::new(
            ErrorCode::InvalidSyntax,
            format!("Unexpected token '{next}'. A search parameter cannot be followed by '{next}'."),
            span,
        )
    }

    pub fn invalid_catch_all(found: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::InvalidCatchAll,
            format!(
                "Invalid catch-all syntax. Expected '[...]' but found an incomplete sequence near '{found}'."
            ),
            span,
        )
    }

    pub fn unnamed_catch_all(span: Span) -> Self {
        Self::new(
            ErrorCode::InvalidCatchAll,
            "Invalid catch-all syntax. A catch-all '[...]' needs a name.",
            span,
        )
    }

    pub fn content_after_asterisk(span: Span) -> Self {
        Self::new(
            ErrorCode::InvalidSyntax,
            "Unexpected content after '*'. Expected a catch-all '[...]'.",
            span,
        )
    }

    // Analyzer diagnostics

    /// `what` names the component, e.g. `"a variable"`.
    pub fn decode_failure(what: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::DecodeUri,
            format!("Failed to decode URI component for {what}."),
            span,
        )
    }

    pub fn duplicate_param(name: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::DuplicateParam,
            format!("Duplicate parameter name found: \"{name}\"."),
            span,
        )
    }

    pub fn cast_boolean(raw: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::CastBoolean,
            format!("Invalid boolean value: \"{raw}\". Expected 'true', 'false', '1', or '0'."),
            span,
        )
    }

    pub fn cast_number(raw: &str, span: Span) -> Self {
        Self::new(
            ErrorCode::CastNumber,
            format!("Invalid numeric value: \"{raw}\"."),
            span,
        )
    }
}
