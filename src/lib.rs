//! # Quadpoint - Point-Indexed Quadtree Container
//!
//! This crate provides a quadtree that maps integer 2D coordinates within a
//! fixed rectangular region to values, with point-exact insert, lookup,
//! deletion, and full traversal.
//!
//! ## Features
//!
//! - **Point-Exact Addressing**: every coordinate resolves to its own slot,
//!   down to a minimal 2x2 base quad
//! - **Lazy Allocation**: nodes are created on first insert into a path and
//!   pruned as soon as an erase empties them
//! - **Arena Storage**: branches and leaves live in two index-addressed
//!   allocation channels, no pointer bookkeeping or reference cycles
//! - **Deterministic Traversal**: depth-first iteration in quadrant-slot
//!   order, independent of insertion order
//! - **Generic Coordinates**: any primitive integer type via [`Position`]
//!
//! ## Quick Start
//!
//! ```rust
//! use quadpoint::QuadTree;
//!
//! // A tree addressing x and y in 0..8.
//! let mut tree: QuadTree<&str> = QuadTree::new(0, 0, 8, 8);
//!
//! tree.insert(1, 1, "A");
//! tree.insert(7, 7, "B");
//! tree.insert(1, 7, "C");
//!
//! assert_eq!(tree.find(1, 1), Some(&"A"));
//! assert_eq!(tree.find(5, 5), None);
//!
//! assert_eq!(tree.erase(1, 1), Some("A"));
//! let rest: Vec<&str> = tree.iter().copied().collect();
//! assert_eq!(rest, vec!["C", "B"]);
//! ```
//!
//! Out-of-range coordinates are silently ignored: `insert` becomes a no-op
//! and `find`/`erase` report absence, indistinguishable from a vacant
//! in-range coordinate. Region bounds are half-open per axis.

pub mod arena;
pub mod position;
pub mod quadtree;
pub mod region;

// Re-export container types
pub use quadtree::{Iter, QuadTree, TreeStats};

// Re-export the coordinate domain types
pub use region::{Region, RegionError};

// Re-export the extension axes
pub use arena::Arena;
pub use position::Position;
