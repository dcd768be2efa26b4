//! Fixed-width binary record for node sequences.
//!
//! Each node is stored as [`RECORD_SIZE`] bytes:
//!
//! | offset | size | field                  |
//! |--------|------|------------------------|
//! | 0      | 1    | id                     |
//! | 1      | 1    | kind (see [`NodeKind::to_byte`]) |
//! | 2      | 2    | span start, little endian |
//! | 4      | 2    | span end, little endian |
//! | 6      | 1    | type (see [`ContentType::to_byte`]) |
//!
//! Encoding fails fast on the first node that does not fit the format
//! instead of silently truncating.

use thiserror::Error;

use crate::{ContentType, Node, NodeId, NodeKind, Span};

/// Bytes per encoded node.
pub const RECORD_SIZE: usize = 7;

/// Largest node count a record can hold (ids are one byte).
pub const MAX_NODES: usize = u8::MAX as usize;

/// Largest span offset a record can hold.
pub const MAX_OFFSET: u32 = u16::MAX as u32;

/// Errors produced while encoding, decoding or validating a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("cannot encode {count} nodes, the record holds at most {}", MAX_NODES)]
    TooManyNodes { count: usize },

    #[error("node id {id} does not fit in one byte")]
    IdOverflow { id: u32 },

    #[error("node {id} has offset {offset}, the record holds at most {}", MAX_OFFSET)]
    OffsetOverflow { id: u32, offset: u32 },

    #[error("record length {len} is not a multiple of {}", RECORD_SIZE)]
    TruncatedRecord { len: usize },

    #[error("record {index} has unknown kind byte {byte}")]
    UnknownKind { index: usize, byte: u8 },

    #[error("record {index} has unknown type byte {byte}")]
    UnknownContentType { index: usize, byte: u8 },

    #[error("node {id} spans {span:?}, past the end of a {len}-byte input")]
    SpanOutOfBounds { id: u32, span: Span, len: usize },

    #[error("record {index} carries id {id}")]
    IdMismatch { index: usize, id: u32 },
}

/// Encode `nodes` into a byte record.
pub fn encode(nodes: &[Node]) -> Result<Vec<u8>, CodecError> {
    if nodes.len() > MAX_NODES {
        return Err(CodecError::TooManyNodes { count: nodes.len() });
    }
    let mut out = Vec::with_capacity(nodes.len() * RECORD_SIZE);
    for node in nodes {
        let id = node.id.raw();
        let id_byte = u8::try_from(id).map_err(|_| CodecError::IdOverflow { id })?;
        let start = offset(id, node.span.start)?;
        let end = offset(id, node.span.end)?;

        out.push(id_byte);
        out.push(node.kind.to_byte());
        out.extend_from_slice(&start.to_le_bytes());
        out.extend_from_slice(&end.to_le_bytes());
        out.push(node.ty.to_byte());
    }
    Ok(out)
}

fn offset(id: u32, value: u32) -> Result<u16, CodecError> {
    u16::try_from(value).map_err(|_| CodecError::OffsetOverflow { id, offset: value })
}

/// Decode a byte record produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<Vec<Node>, CodecError> {
    if bytes.len() % RECORD_SIZE != 0 {
        return Err(CodecError::TruncatedRecord { len: bytes.len() });
    }
    bytes
        .chunks_exact(RECORD_SIZE)
        .enumerate()
        .map(|(index, record)| {
            let kind = NodeKind::from_byte(record[1]).ok_or(CodecError::UnknownKind {
                index,
                byte: record[1],
            })?;
            let ty = ContentType::from_byte(record[6]).ok_or(CodecError::UnknownContentType {
                index,
                byte: record[6],
            })?;
            let start = u16::from_le_bytes([record[2], record[3]]);
            let end = u16::from_le_bytes([record[4], record[5]]);
            Ok(Node::new(
                NodeId::new(u32::from(record[0])),
                kind,
                Span::new(u32::from(start), u32::from(end)),
                ty,
            ))
        })
        .collect()
}

/// Check that every decoded span fits inside `input`.
///
/// Ids are checked by [`NodeList::from_nodes`](crate::NodeList::from_nodes).
pub fn check_spans(nodes: &[Node], input: &str) -> Result<(), CodecError> {
    for node in nodes {
        let span = node.span;
        if span.start > span.end || span.end as usize > input.len() {
            return Err(CodecError::SpanOutOfBounds {
                id: node.id.raw(),
                span,
                len: input.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
