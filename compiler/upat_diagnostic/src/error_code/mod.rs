use std::fmt;

/// Error codes for all scanner and analyzer diagnostics.
///
/// Codes are displayed symbolically (`E_INVALID_SYNTAX`), which is also the
/// form accepted by [`ErrorCode::from_code`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Syntax errors (recorded while scanning)
    /// Misplaced delimiter or malformed token
    InvalidSyntax,
    /// `//` inside a path
    ConsecutiveSlashes,
    /// Content after a catch-all where none may follow (fatal)
    UnexpectedToken,
    /// Malformed `[...name]`
    InvalidCatchAll,

    // Analysis errors (recorded by accessors)
    /// Variable name declared twice
    DuplicateParam,
    /// Percent escape that is not valid UTF-8
    DecodeUri,

    // Cast errors (returned from accessors)
    /// Raw text is not a boolean
    CastBoolean,
    /// Raw text is not a number
    CastNumber,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::InvalidSyntax,
        ErrorCode::ConsecutiveSlashes,
        ErrorCode::UnexpectedToken,
        ErrorCode::InvalidCatchAll,
        ErrorCode::DuplicateParam,
        ErrorCode::DecodeUri,
        ErrorCode::CastBoolean,
        ErrorCode::CastNumber,
    ];

    /// Get the symbolic code (e.g., `"E_INVALID_SYNTAX"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSyntax => "E_INVALID_SYNTAX",
            ErrorCode::ConsecutiveSlashes => "E_CONSECUTIVE_SLASHES",
            ErrorCode::UnexpectedToken => "E_UNEXPECTED_TOKEN",
            ErrorCode::InvalidCatchAll => "E_INVALID_CATCH_ALL",
            ErrorCode::DuplicateParam => "E_DUPLICATE_PARAM",
            ErrorCode::DecodeUri => "E_DECODE_URI",
            ErrorCode::CastBoolean => "E_CAST_BOOLEAN",
            ErrorCode::CastNumber => "E_CAST_NUMBER",
        }
    }

    /// Parse a symbolic code. The `E_` prefix is optional and case is ignored.
    pub fn from_code(text: &str) -> Option<Self> {
        let text = text.trim();
        ErrorCode::ALL.into_iter().find(|code| {
            let full = code.as_str();
            full.eq_ignore_ascii_case(text) || full[2..].eq_ignore_ascii_case(text)
        })
    }

    /// Check if this code is produced by the scanner.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::InvalidSyntax
                | ErrorCode::ConsecutiveSlashes
                | ErrorCode::UnexpectedToken
                | ErrorCode::InvalidCatchAll
        )
    }

    /// Check if this code is a failed value cast.
    pub fn is_cast_error(&self) -> bool {
        matches!(self, ErrorCode::CastBoolean | ErrorCode::CastNumber)
    }

    /// Check if this code stops the scanner.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorCode::UnexpectedToken)
    }

    /// Long-form documentation, as shown by `upat explain`.
    pub fn explain(self) -> Option<&'static str> {
        crate::ErrorDocs::get(self)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
