//! Point-indexed quadtree: node model, core algorithms, and iteration.
//!
//! The tree quarters its region iteratively while routing, so insert, find
//! and erase are all loops over the same quadrant math with no recursion.
//! Nodes live in two arena channels (branches and leaves) and are addressed
//! by index; parent links are plain indices used only for upward traversal.

pub mod quadtree_constants;
mod quadtree_impl;
mod quadtree_iter;
pub mod quadtree_types;

pub use quadtree_constants::{INLINE_PATH_DEPTH, NODE_FANOUT};
pub use quadtree_impl::QuadTree;
pub use quadtree_iter::Iter;
pub use quadtree_types::TreeStats;
