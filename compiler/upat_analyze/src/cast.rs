//! Conversion of raw text to a declared type.

use upat_diagnostic::ErrorLogEntry;
use upat_ir::{ContentType, Span};

use crate::Value;

/// A value that did not match its declared type.
///
/// Displays as the full diagnostic, input line and underline included.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{report}")]
pub struct CastError {
    pub entry: ErrorLogEntry,
    report: String,
}

impl CastError {
    /// Wrap `entry`, rendering it against the analyzed `input`.
    pub fn new(entry: ErrorLogEntry, input: &str) -> Self {
        let report = entry.display(input);
        CastError { entry, report }
    }
}

/// Cast `raw` to `ty`.
///
/// `span` locates the raw text for the diagnostic on failure.
///
/// - `Boolean`: `true`/`1` and `false`/`0`, case-insensitive
/// - `Number`: decimal float, finite only
/// - `Array`: split on `,`, items untrimmed
/// - `String` and `None`: unchanged
pub fn cast_value(raw: &str, ty: ContentType, span: Span) -> Result<Value, ErrorLogEntry> {
    match ty {
        ContentType::Boolean => {
            if raw.eq_ignore_ascii_case("true") || raw == "1" {
                Ok(Value::Boolean(true))
            } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
                Ok(Value::Boolean(false))
            } else {
                Err(ErrorLogEntry::cast_boolean(raw, span))
            }
        }
        ContentType::Number => match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Value::Number(n)),
            _ => Err(ErrorLogEntry::cast_number(raw, span)),
        },
        ContentType::Array => Ok(Value::Array(raw.split(',').map(str::to_owned).collect())),
        ContentType::String | ContentType::None => Ok(Value::String(raw.to_owned())),
    }
}

#[cfg(test)]
mod tests;
