//! upat command-line front end.
//!
//! ```text
//! input ──► upat_lexer::scan ──► NodeList + diagnostics
//!                                    │
//!                                    ▼
//!                        TemplateAnalyzer / InstanceAnalyzer
//! ```
//!
//! The binary in `main.rs` only parses arguments; each command lives in
//! [`commands`] and renders to strings so it can be tested without a
//! terminal.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Nothing is installed unless `RUST_LOG` is
/// set, e.g. `RUST_LOG=upat_lexer=trace upat lex '/users/:id'`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}
