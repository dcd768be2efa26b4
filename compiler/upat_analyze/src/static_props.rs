//! Bracket-style static props.
//!
//! A template path such as `/docs/[section]/[...rest]/view` is matched
//! against the decoded segments of an instance path:
//!
//! - a static segment must equal the instance segment
//! - `[name]` binds exactly one segment
//! - `:name` consumes one segment without binding it
//! - `[...name]` binds every remaining segment except those needed by the
//!   static segments after it, which must then match as usual
//!
//! Without a catch-all, the instance must have no segments left over.

use upat_ir::{Delimiter, Node, NodeKind, NodeList};

use crate::analyzed::decode;
use crate::{Bindings, StaticValue};

const CLOSE_BRACKET: NodeKind = NodeKind::Delimiter(Delimiter::CloseBracket);

/// Nodes before the first query separator or `#`.
pub(crate) fn path_nodes(nodes: &NodeList) -> &[Node] {
    let nodes = nodes.as_slice();
    let end = nodes
        .iter()
        .position(|node| matches!(node.kind, NodeKind::Delimiter(d) if d.ends_path()))
        .unwrap_or(nodes.len());
    &nodes[..end]
}

/// Match `segments` against the template path. `None` means no match.
pub(crate) fn match_static(
    template: &NodeList,
    input: &str,
    segments: &[String],
) -> Option<Bindings<StaticValue>> {
    let path = path_nodes(template);
    let kind_at = |i: usize| path.get(i).map(|node| node.kind);

    let mut props = Bindings::new();
    let mut next = 0;
    let mut i = 0;
    while let Some(node) = path.get(i) {
        match node.kind {
            NodeKind::PATH => {
                let literal = decode(node.text(input))?;
                if *segments.get(next)? != literal {
                    return None;
                }
                next += 1;
            }
            NodeKind::VARIABLE => {
                segments.get(next)?;
                next += 1;
            }
            NodeKind::Delimiter(Delimiter::OpenBracket) => {
                if kind_at(i + 1) == Some(NodeKind::SLUG) && kind_at(i + 2) == Some(CLOSE_BRACKET) {
                    let segment = segments.get(next)?;
                    props.insert(path[i + 1].text(input), StaticValue::Segment(segment.clone()));
                    next += 1;
                    i += 3;
                    continue;
                }
                if kind_at(i + 1) == Some(NodeKind::ELLIPSIS)
                    && kind_at(i + 2) == Some(NodeKind::SLUG)
                    && kind_at(i + 3) == Some(CLOSE_BRACKET)
                {
                    let trailing = path[i + 4..]
                        .iter()
                        .filter(|node| node.kind == NodeKind::PATH)
                        .count();
                    let end = segments.len().checked_sub(trailing)?;
                    let rest = segments.get(next..end)?;
                    props.insert(path[i + 2].text(input), StaticValue::CatchAll(rest.to_vec()));
                    next = end;
                    i += 4;
                    continue;
                }
            }
            _ => {}
        }
        i += 1;
    }

    tracing::trace!(consumed = next, total = segments.len(), "static match");
    (next == segments.len()).then_some(props)
}
