//! Constants for the quadtree node model.

/// Child slots per branch node - one per quadrant.
pub const NODE_FANOUT: usize = 4;

/// Inline capacity of the path stacks used by erase and iteration.
/// Regions deeper than this spill the path to the heap.
pub const INLINE_PATH_DEPTH: usize = 16;
