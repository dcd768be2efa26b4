//! Diagnostic emitters.
//!
//! Only human-readable terminal output is provided.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};
