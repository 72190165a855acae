//! Node identity for the flat AST.
//!
//! Nodes live in the [`AstArena`](crate::AstArena) and reference each other
//! by `NodeId(u32)` instead of `Box` pointers — 4 bytes, O(1) equality, and
//! a stable identity that side tables and hoisting scopes can key on.

use std::fmt;

/// Index of a node in the [`AstArena`](crate::AstArena).
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Invalid node ID (sentinel value).
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a valid ID.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "NodeId({})", self.0)
        } else {
            write!(f, "NodeId::INVALID")
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::INVALID
    }
}

// Ids ride in every composite node; keep them at exactly one u32.
const _: () = assert!(std::mem::size_of::<NodeId>() == 4);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn id_round_trips_index() {
        let id = NodeId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id.raw(), 7);
        assert!(id.is_valid());
    }

    #[test]
    fn invalid_sentinel() {
        assert!(!NodeId::INVALID.is_valid());
        assert_eq!(NodeId::default(), NodeId::INVALID);
        assert_eq!(format!("{:?}", NodeId::INVALID), "NodeId::INVALID");
        assert_eq!(format!("{:?}", NodeId::new(3)), "NodeId(3)");
    }
}
