//! Flat node storage.
//!
//! Struct-of-arrays layout: parallel `kinds` and `spans` vectors indexed by
//! [`NodeId`], so a pass that only needs locations never touches payloads.
//! Nodes are owned by the arena; dropping it releases the whole tree at
//! once.

use ecma_lexical::Span;
use smallvec::SmallVec;

use crate::{ast::NodeKind, ast::NodeType, NodeId};

/// Arena of AST nodes for one parse.
///
/// Built by a single parsing thread; immutable afterwards and safe to read
/// from any number of analysis passes concurrently. The `'s` lifetime ties
/// every node to the source buffer, which must outlive the arena.
#[derive(Debug, Clone, Default)]
pub struct AstArena<'s> {
    /// Node payloads (parallel with `spans`).
    kinds: Vec<NodeKind<'s>>,
    /// Source spans (parallel with `kinds`).
    spans: Vec<Span<'s>>,
}

impl<'s> AstArena<'s> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena pre-allocated from the source length.
    ///
    /// Heuristic: ~1 node per 20 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 20;
        AstArena {
            kinds: Vec::with_capacity(estimated),
            spans: Vec::with_capacity(estimated),
        }
    }

    /// Allocate a node, returning its id.
    pub fn push(&mut self, kind: NodeKind<'s>, span: Span<'s>) -> NodeId {
        let id = NodeId::new(to_u32(self.kinds.len()));
        self.kinds.push(kind);
        self.spans.push(span);
        id
    }

    /// The node's payload.
    ///
    /// # Panics
    /// Panics on an id that was not produced by this arena.
    pub fn kind(&self, id: NodeId) -> &NodeKind<'s> {
        &self.kinds[id.index()]
    }

    /// The node's source span.
    ///
    /// # Panics
    /// Panics on an id that was not produced by this arena.
    pub fn span(&self, id: NodeId) -> Span<'s> {
        self.spans[id.index()]
    }

    /// The node's closed kind tag.
    pub fn node_type(&self, id: NodeId) -> NodeType {
        self.kind(id).node_type()
    }

    /// Direct children of the node, in source order. Deterministic and
    /// restartable; empty for leaves.
    pub fn children(&self, id: NodeId) -> SmallVec<[NodeId; 4]> {
        self.kind(id).children()
    }

    /// Number of nodes allocated.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns `true` when no nodes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// All ids in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..to_u32(self.kinds.len())).map(NodeId::new)
    }
}

/// Node count must fit the u32 id space; `NodeId::INVALID` is reserved.
fn to_u32(n: usize) -> u32 {
    match u32::try_from(n) {
        Ok(v) if v != u32::MAX => v,
        _ => panic!("AST arena overflowed the u32 node-id space"),
    }
}
