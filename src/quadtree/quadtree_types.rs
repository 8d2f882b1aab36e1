//! Core types for the quadtree node model.
//!
//! This module defines the node kinds, their arena identifiers, and the
//! allocation-channel statistics the tree exposes for instrumentation.

use super::quadtree_constants::NODE_FANOUT;

// ============================================================================
// Node Identifiers
// ============================================================================

/// Arena index of a branch node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BranchId(pub(crate) u32);

/// Arena index of a leaf node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LeafId(pub(crate) u32);

/// A child slot entry: either another level of subdivision or a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChildRef {
    Branch(BranchId),
    Leaf(LeafId),
}

// ============================================================================
// Node Types
// ============================================================================

/// An internal node: one level of quadrant subdivision.
///
/// The parent index is used only for upward traversal, never for ownership.
/// A branch survives in the tree only while at least one slot is occupied;
/// erase prunes emptied branches immediately.
#[derive(Debug)]
pub(crate) struct BranchNode {
    pub children: [Option<ChildRef>; NODE_FANOUT],
    pub parent: Option<BranchId>,
}

impl BranchNode {
    pub fn new(parent: Option<BranchId>) -> BranchNode {
        BranchNode {
            children: [None; NODE_FANOUT],
            parent,
        }
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }
}

/// A leaf node: one stored value. Its coordinate is implicit in the path
/// from the root and is not stored redundantly.
#[derive(Debug)]
pub(crate) struct LeafNode<V> {
    pub parent: BranchId,
    pub value: V,
}

// ============================================================================
// Statistics
// ============================================================================

/// Outstanding node counts per allocation channel.
///
/// This is allocator instrumentation, not an element count: it reports how
/// many nodes each channel currently holds, which is what the memory
/// discipline tests verify.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Branch nodes currently allocated.
    pub live_branches: usize,
    /// Leaf nodes currently allocated.
    pub live_leaves: usize,
}
