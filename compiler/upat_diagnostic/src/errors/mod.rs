//! Embedded error documentation for `upat explain`.
//!
//! Each error code has a markdown file in this directory that explains the
//! error with examples and a fix. They are embedded at compile time.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Syntax
    (ErrorCode::InvalidSyntax, include_str!("E_INVALID_SYNTAX.md")),
    (ErrorCode::ConsecutiveSlashes, include_str!("E_CONSECUTIVE_SLASHES.md")),
    (ErrorCode::UnexpectedToken, include_str!("E_UNEXPECTED_TOKEN.md")),
    (ErrorCode::InvalidCatchAll, include_str!("E_INVALID_CATCH_ALL.md")),
    // Analysis
    (ErrorCode::DuplicateParam, include_str!("E_DUPLICATE_PARAM.md")),
    (ErrorCode::DecodeUri, include_str!("E_DECODE_URI.md")),
    // Cast
    (ErrorCode::CastBoolean, include_str!("E_CAST_BOOLEAN.md")),
    (ErrorCode::CastNumber, include_str!("E_CAST_NUMBER.md")),
];
