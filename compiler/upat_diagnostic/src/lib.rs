//! Diagnostics for URL templates and instances.
//!
//! Diagnostics are plain data. The scanner and the analyzers append
//! [`ErrorLogEntry`] values to an [`ErrorLog`] and keep going; callers decide
//! what to do with them by checking [`ErrorLog::has_errors`].
//!
//! - [`ErrorCode`]: symbolic codes such as `E_INVALID_SYNTAX`
//! - [`ErrorLogEntry`]: code, message and span, with a caret-underline display
//! - [`ErrorLog`]: append-only, deduplicating list of entries
//! - [`emitter`]: terminal output with optional ANSI colors
//! - [`ErrorDocs`]: long-form explanation for each code

pub mod emitter;
mod entry;
mod error_code;
pub mod errors;
mod log;

pub use emitter::{ColorMode, TerminalEmitter};
pub use entry::ErrorLogEntry;
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use log::{ErrorLog, NO_ERRORS};
