//! `upat lex`: the scanned node sequence as a table.

use std::fmt::Write;

use upat_ir::{ContentType, NodeList};

/// One row per node: id, symbol, kind, declared type, start, end.
pub fn node_table(nodes: &NodeList, input: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<16} {:<10} {:<8} {:>5} {:>5}",
        "id", "symbol", "kind", "type", "start", "end"
    );
    for node in nodes {
        let ty = if node.ty == ContentType::None {
            "-"
        } else {
            node.ty.as_str()
        };
        let _ = writeln!(
            out,
            "{:>4}  {:<16} {:<10} {:<8} {:>5} {:>5}",
            node.id.raw(),
            node.text(input),
            node.kind.name(),
            ty,
            node.span.start,
            node.span.end,
        );
    }
    out
}
