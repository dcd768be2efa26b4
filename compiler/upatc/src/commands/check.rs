//! `upat check`: every diagnostic a template produces.

use std::io::Write;

use upat_analyze::{Analyzed, TemplateAnalyzer};
use upat_diagnostic::TerminalEmitter;

/// Scan and analyze `input`, emitting its error log.
///
/// Returns `true` when errors were found.
pub fn check_input<W: Write>(input: &str, emitter: &mut TerminalEmitter<W>) -> bool {
    let mut template = TemplateAnalyzer::new(input);
    // Analysis-time diagnostics are only recorded by the accessors.
    template.params();
    template.search_params();
    template.fragment();

    emitter.emit_log(template.log(), input);
    emitter.emit_summary(template.errors().len());
    emitter.flush();
    template.has_errors()
}
