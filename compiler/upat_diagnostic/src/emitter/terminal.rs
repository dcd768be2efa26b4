//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! Without colors the output of [`TerminalEmitter::emit`] is exactly
//! [`ErrorLogEntry::display`].

use std::io::{self, Write};

use crate::{ErrorLog, ErrorLogEntry, NO_ERRORS};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const OK: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is consulted for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// Emit one entry rendered against `input`, without a trailing newline.
    pub fn emit(&mut self, entry: &ErrorLogEntry, input: &str) {
        let column = entry.column(input);
        self.write_colored("Error", colors::ERROR);
        let _ = write!(self.writer, " ");
        self.write_code(entry.code.as_str());
        let _ = writeln!(self.writer, " at col {column}: {}", entry.message);
        let _ = writeln!(self.writer, "{input}");
        let _ = write!(self.writer, "{}", " ".repeat(column));
        self.write_colored(&"^".repeat(entry.underline_width(input)), colors::ERROR);
    }

    /// Emit every entry of `log`, separated by a blank line, followed by a
    /// newline. An empty log prints [`NO_ERRORS`].
    pub fn emit_log(&mut self, log: &ErrorLog, input: &str) {
        if log.is_empty() {
            self.write_colored(NO_ERRORS, colors::OK);
            let _ = writeln!(self.writer);
            return;
        }
        for (i, entry) in log.iter().enumerate() {
            if i > 0 {
                let _ = write!(self.writer, "\n\n");
            }
            self.emit(entry, input);
        }
        let _ = writeln!(self.writer);
    }

    /// Emit a one-line count of errors. Nothing is written for zero.
    pub fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        let _ = writeln!(self.writer);
        self.write_colored("error", colors::ERROR);
        let _ = writeln!(
            self.writer,
            ": {error_count} problem{} found",
            plural_s(error_count)
        );
    }

    /// Flush any buffered output.
    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl TerminalEmitter<io::Stdout> {
    /// Create a terminal emitter for stdout with explicit color mode.
    pub fn stdout(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stdout(), mode, is_tty)
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}
