//! Append-only error log.

use rustc_hash::FxHashSet;
use upat_ir::Span;

use crate::{ErrorCode, ErrorLogEntry};

/// Report text when the log is empty.
pub const NO_ERRORS: &str = "No errors found.";

/// Entries in the order they were recorded.
///
/// Recording the same `(code, span)` pair twice is a no-op, so an accessor
/// that is called repeatedly does not flood the log with copies of one
/// problem.
#[derive(Clone, Debug, Default)]
pub struct ErrorLog {
    entries: Vec<ErrorLogEntry>,
    seen: FxHashSet<(ErrorCode, Span)>,
}

impl ErrorLog {
    pub fn new() -> Self {
        ErrorLog::default()
    }

    /// Build a log from entries, dropping repeats.
    pub fn from_entries(entries: impl IntoIterator<Item = ErrorLogEntry>) -> Self {
        let mut log = ErrorLog::new();
        for entry in entries {
            log.record(entry);
        }
        log
    }

    /// Append `entry` unless an entry with the same code and span exists.
    ///
    /// Returns `true` if the entry was added.
    pub fn record(&mut self, entry: ErrorLogEntry) -> bool {
        if !self.seen.insert((entry.code, entry.span)) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[ErrorLogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ErrorLogEntry> {
        self.entries.iter()
    }

    /// Count of entries with `code`.
    pub fn count(&self, code: ErrorCode) -> usize {
        self.entries.iter().filter(|e| e.code == code).count()
    }

    /// Every entry rendered against `input`, separated by a blank line, or
    /// [`NO_ERRORS`].
    pub fn report(&self, input: &str) -> String {
        if self.entries.is_empty() {
            return NO_ERRORS.to_string();
        }
        self.entries
            .iter()
            .map(|entry| entry.display(input))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl PartialEq for ErrorLog {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ErrorLog {}

impl<'a> IntoIterator for &'a ErrorLog {
    type Item = &'a ErrorLogEntry;
    type IntoIter = std::slice::Iter<'a, ErrorLogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
