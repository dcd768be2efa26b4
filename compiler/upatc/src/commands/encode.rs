//! `upat encode`: the binary node record.

use std::fmt::Write;

use upat_analyze::{Analyzed, TemplateAnalyzer};
use upat_ir::{CodecError, RECORD_SIZE};

/// Encode the nodes of `input` and dump them.
pub fn encode_input(input: &str) -> Result<String, CodecError> {
    let bytes = TemplateAnalyzer::new(input).encode()?;
    Ok(hex_dump(&bytes))
}

/// Lowercase hex, one record per line, prefixed with the record index.
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (index, record) in bytes.chunks(RECORD_SIZE).enumerate() {
        let _ = write!(out, "{index:03}:");
        for byte in record {
            let _ = write!(out, " {byte:02x}");
        }
        out.push('\n');
    }
    out
}
