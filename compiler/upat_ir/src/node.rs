//! Scanned nodes.

use std::fmt;

use crate::{ContentType, NodeKind, Span};

/// Position of a node in its sequence.
///
/// Ids are assigned in emission order and double as arena indices.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// One token of a scanned template or instance.
///
/// Layout: 16 bytes (id 4, span 8, kind 2, type 1, padding 1).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub span: Span,
    pub ty: ContentType,
}

impl Node {
    #[inline]
    pub const fn new(id: NodeId, kind: NodeKind, span: Span, ty: ContentType) -> Self {
        Node { id, kind, span, ty }
    }

    /// The text this node covers in `input`.
    #[inline]
    pub fn text<'s>(&self, input: &'s str) -> &'s str {
        self.span.text(input)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {:?}", self.id, self.kind, self.span)?;
        if self.ty != ContentType::None {
            write!(f, " : {}", self.ty)?;
        }
        Ok(())
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Node;
    crate::static_assert_size!(Node, 16);
}
