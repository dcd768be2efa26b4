//! Command handlers for the `upat` CLI.
//!
//! Each handler renders its output to a `String` (or an emitter) and
//! reports failure through its return value; `main.rs` prints and picks
//! the exit code.

mod check;
mod encode;
mod explain;
mod lex;
mod matching;

pub use check::check_input;
pub use encode::{encode_input, hex_dump};
pub use explain::explain_error;
pub use lex::node_table;
pub use matching::match_report;

use upat_diagnostic::ColorMode;

/// Pull `--color=<mode>` out of `args`, leaving the positional arguments.
///
/// Returns `Err` with the offending value for an unknown mode.
pub fn split_color_flag(args: &[String]) -> Result<(ColorMode, Vec<&str>), String> {
    let mut mode = ColorMode::Auto;
    let mut rest = Vec::new();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            mode = ColorMode::from_flag(value).ok_or_else(|| value.to_owned())?;
        } else {
            rest.push(arg.as_str());
        }
    }
    Ok((mode, rest))
}

#[cfg(test)]
mod tests;
