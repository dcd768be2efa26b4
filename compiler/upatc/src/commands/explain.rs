//! `upat explain`: long-form documentation for an error code.

use upat_diagnostic::ErrorCode;

/// Documentation for `code`, written as `E_CAST_NUMBER` or `cast_number`.
pub fn explain_error(code: &str) -> Option<&'static str> {
    ErrorCode::from_code(code)?.explain()
}
