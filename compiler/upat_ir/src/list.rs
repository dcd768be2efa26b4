//! Node arena.

use std::ops::Index;

use crate::{CodecError, ContentType, KindSet, Node, NodeId, NodeKind, Span};

/// Flat, append-only node sequence.
///
/// Node `i` always has id `i`. A [`KindSet`] of the content kinds pushed so
/// far is maintained alongside.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct NodeList {
    nodes: Vec<Node>,
    kinds: KindSet,
}

impl NodeList {
    /// Create a new empty node list.
    #[inline]
    pub fn new() -> Self {
        NodeList::default()
    }

    /// Create a new node list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        NodeList {
            nodes: Vec::with_capacity(capacity),
            kinds: KindSet::empty(),
        }
    }

    /// Rebuild a list from nodes whose ids already equal their positions.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self, CodecError> {
        let mut kinds = KindSet::empty();
        for (index, node) in nodes.iter().enumerate() {
            if node.id.index() != index {
                return Err(CodecError::IdMismatch {
                    index,
                    id: node.id.raw(),
                });
            }
            kinds |= node.kind.flag();
        }
        Ok(NodeList { nodes, kinds })
    }

    /// Append a node, assigning the next id.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "node count is bounded by input length, which the cursor caps at u32::MAX"
    )]
    pub fn push(&mut self, kind: NodeKind, span: Span, ty: ContentType) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.kinds |= kind.flag();
        self.nodes.push(Node::new(id, kind, span, ty));
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// The node `offset` positions after `id`, if any.
    #[inline]
    pub fn after(&self, id: NodeId, offset: usize) -> Option<&Node> {
        self.nodes.get(id.index() + offset)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Content kinds present in the list.
    #[inline]
    pub fn kinds(&self) -> KindSet {
        self.kinds
    }

    /// Returns `true` if at least one node of `kind` was pushed.
    ///
    /// Always `true` for delimiters, which are not tracked.
    #[inline]
    pub fn may_contain(&self, kind: NodeKind) -> bool {
        kind.is_delimiter() || self.kinds.contains(kind.flag())
    }

    /// First node of `kind`.
    pub fn first_of_kind(&self, kind: NodeKind) -> Option<&Node> {
        if !self.may_contain(kind) {
            return None;
        }
        self.nodes.iter().find(|n| n.kind == kind)
    }

    /// Nodes of `kind`, in order.
    pub fn of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> + '_ {
        let present = self.may_contain(kind);
        self.nodes
            .iter()
            .filter(move |n| present && n.kind == kind)
    }

    /// The `n`th (zero-based) node of `kind`.
    pub fn nth_of_kind(&self, kind: NodeKind, n: usize) -> Option<&Node> {
        self.of_kind(kind).nth(n)
    }
}

impl Index<NodeId> for NodeList {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
