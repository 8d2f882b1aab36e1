//! QuadTree implementation.

use log::{debug, trace};
use smallvec::SmallVec;

use crate::arena::Arena;
use crate::position::Position;
use crate::region::{Region, RegionError};

use super::quadtree_constants::INLINE_PATH_DEPTH;
use super::quadtree_iter::Iter;
use super::quadtree_types::{BranchId, BranchNode, ChildRef, LeafId, LeafNode, TreeStats};

/// Record of taken child-slot indices from the root down.
type PathStack = SmallVec<[u8; INLINE_PATH_DEPTH]>;

/// A point-indexed quadtree mapping integer 2D coordinates to values.
///
/// The tree covers a fixed rectangular [`Region`] set at construction and
/// recursively quarters it until a minimal 2x2 cell, where up to four
/// coordinates are addressed directly by one branch node. Nodes are created
/// lazily on insert and pruned eagerly on erase, so memory is bounded by the
/// occupied paths only.
///
/// Coordinates outside the region are a silent no-op for every operation;
/// callers cannot distinguish "out of region" from "in region but vacant".
///
/// # Example
///
/// ```rust
/// use quadpoint::QuadTree;
///
/// let mut tree: QuadTree<&str> = QuadTree::new(0, 0, 8, 8);
/// tree.insert(1, 1, "A");
/// tree.insert(7, 7, "B");
///
/// assert_eq!(tree.find(1, 1), Some(&"A"));
/// assert_eq!(tree.find(5, 5), None);
///
/// assert_eq!(tree.erase(1, 1), Some("A"));
/// assert_eq!(tree.find(1, 1), None);
/// assert_eq!(tree.iter().count(), 1);
/// ```
pub struct QuadTree<V, P: Position = i32> {
    region: Region<P>,
    /// Deepest descent the region allows, fixed at construction.
    depth_bound: usize,
    root: Option<BranchId>,
    branches: Arena<BranchNode>,
    leaves: Arena<LeafNode<V>>,
}

/// Tracked bounds of the quadrant currently descended into.
struct Quad<P: Position> {
    x: P,
    y: P,
    w: P,
    h: P,
}

impl<P: Position> Quad<P> {
    fn of(region: &Region<P>) -> Quad<P> {
        Quad {
            x: region.min_x,
            y: region.min_y,
            w: region.width(),
            h: region.height(),
        }
    }

    /// A base quad spans at most 2x2 coordinates and holds leaves directly.
    fn is_base(&self) -> bool {
        self.w <= P::TWO && self.h <= P::TWO
    }

    /// Routes toward `(x, y)`, narrowing the tracked bounds to the chosen
    /// quadrant and returning its slot index.
    ///
    /// The midpoint is ceiling-biased (`origin + ceil(extent / 2)`), so the
    /// low side of a split keeps the larger half.
    fn descend(&mut self, x: P, y: P) -> usize {
        let mut slot = 0;

        let center_x = self.x.add(self.w.half_up());
        if x >= center_x {
            self.w = self.w.half_down();
            self.x = center_x;
            slot += 1;
        } else {
            self.w = center_x.sub(self.x);
        }

        let center_y = self.y.add(self.h.half_up());
        if y >= center_y {
            self.h = self.h.half_down();
            self.y = center_y;
            slot += 2;
        } else {
            self.h = center_y.sub(self.y);
        }

        slot
    }

    /// Selects among the at most four coordinates of a base quad.
    fn leaf_slot(&self, x: P, y: P) -> usize {
        let mut slot = 0;
        if x > self.x {
            slot += 1;
        }
        if y > self.y {
            slot += 2;
        }
        slot
    }
}

impl<V, P: Position> QuadTree<V, P> {
    /// Creates an empty tree over the region spanned by the two corners.
    ///
    /// Corners are normalized to min/max per axis; both extents must be
    /// strictly positive (a debug-only precondition, see
    /// [`QuadTree::try_new`] for the checked variant).
    pub fn new(ax: P, ay: P, bx: P, by: P) -> QuadTree<V, P> {
        Self::from_region(Region::new(ax, ay, bx, by))
    }

    /// Checked variant of [`QuadTree::new`]: rejects degenerate regions and
    /// spans too wide for the coordinate type instead of asserting.
    pub fn try_new(ax: P, ay: P, bx: P, by: P) -> Result<QuadTree<V, P>, RegionError> {
        Ok(Self::from_region(Region::try_new(ax, ay, bx, by)?))
    }

    /// Like [`QuadTree::new`], pre-sizing both node channels for roughly
    /// `capacity` stored values.
    pub fn with_capacity(ax: P, ay: P, bx: P, by: P, capacity: usize) -> QuadTree<V, P> {
        let mut tree = Self::from_region(Region::new(ax, ay, bx, by));
        tree.branches = Arena::with_capacity(capacity);
        tree.leaves = Arena::with_capacity(capacity);
        tree
    }

    fn from_region(region: Region<P>) -> QuadTree<V, P> {
        QuadTree {
            depth_bound: region.depth_bound(),
            region,
            root: None,
            branches: Arena::new(),
            leaves: Arena::new(),
        }
    }

    /// The coordinate domain this tree addresses.
    pub fn region(&self) -> &Region<P> {
        &self.region
    }

    /// True iff the tree holds no values (no root node exists).
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Outstanding node counts per allocation channel.
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            live_branches: self.branches.live(),
            live_leaves: self.leaves.live(),
        }
    }

    /// Inserts `value` at `(x, y)`, overwriting any previous value there.
    ///
    /// Out-of-range coordinates are silently ignored. The root and every
    /// branch along the descent are allocated lazily on first use.
    pub fn insert(&mut self, x: P, y: P, value: V) {
        if !self.region.contains(x, y) {
            return;
        }

        let root = match self.root {
            Some(id) => id,
            None => {
                let id = BranchId(self.branches.alloc(BranchNode::new(None)));
                trace!("allocated root branch for {}", self.region);
                self.root = Some(id);
                id
            }
        };

        let mut quad = Quad::of(&self.region);
        let mut branch = root;
        loop {
            if quad.is_base() {
                let slot = quad.leaf_slot(x, y);
                match self.branches.get(branch.0).and_then(|b| b.children[slot]) {
                    Some(ChildRef::Leaf(leaf)) => {
                        // upsert: overwrite in place
                        if let Some(node) = self.leaves.get_mut(leaf.0) {
                            node.value = value;
                        }
                    }
                    Some(ChildRef::Branch(_)) => {
                        debug_assert!(false, "branch node stored in a base quad slot");
                    }
                    None => {
                        let leaf = LeafId(self.leaves.alloc(LeafNode {
                            parent: branch,
                            value,
                        }));
                        if let Some(node) = self.branches.get_mut(branch.0) {
                            node.children[slot] = Some(ChildRef::Leaf(leaf));
                        }
                    }
                }
                return;
            }

            let slot = quad.descend(x, y);
            branch = match self.branches.get(branch.0).and_then(|b| b.children[slot]) {
                Some(ChildRef::Branch(child)) => child,
                Some(ChildRef::Leaf(_)) => {
                    debug_assert!(false, "leaf node stored above the base quad");
                    return;
                }
                None => {
                    let child = BranchId(self.branches.alloc(BranchNode::new(Some(branch))));
                    if let Some(node) = self.branches.get_mut(branch.0) {
                        node.children[slot] = Some(ChildRef::Branch(child));
                    }
                    child
                }
            };
        }
    }

    /// Quadrant descent shared by `find` and `find_mut`. Allocates nothing.
    fn locate(&self, x: P, y: P) -> Option<LeafId> {
        if !self.region.contains(x, y) {
            return None;
        }
        let mut branch = self.root?;
        let mut quad = Quad::of(&self.region);
        loop {
            let node = self.branches.get(branch.0)?;
            if quad.is_base() {
                return match node.children[quad.leaf_slot(x, y)] {
                    Some(ChildRef::Leaf(leaf)) => Some(leaf),
                    _ => None,
                };
            }
            match node.children[quad.descend(x, y)] {
                Some(ChildRef::Branch(child)) => branch = child,
                _ => return None,
            }
        }
    }

    /// Returns the value stored at `(x, y)`, if any.
    ///
    /// Returns `None` both for vacant coordinates and for coordinates
    /// outside the region.
    pub fn find(&self, x: P, y: P) -> Option<&V> {
        let leaf = self.locate(x, y)?;
        self.leaves.get(leaf.0).map(|node| &node.value)
    }

    /// Mutable variant of [`QuadTree::find`].
    pub fn find_mut(&mut self, x: P, y: P) -> Option<&mut V> {
        let leaf = self.locate(x, y)?;
        self.leaves.get_mut(leaf.0).map(|node| &mut node.value)
    }

    /// Removes and returns the value stored at `(x, y)`.
    ///
    /// Branches left with no children by the removal are pruned on the way
    /// back up; pruning the last one empties the tree. Vacant or
    /// out-of-range coordinates are a no-op returning `None`.
    pub fn erase(&mut self, x: P, y: P) -> Option<V> {
        if !self.region.contains(x, y) {
            return None;
        }
        let mut branch = self.root?;
        let mut quad = Quad::of(&self.region);
        let mut path: PathStack = SmallVec::new();

        let leaf = loop {
            if quad.is_base() {
                let slot = quad.leaf_slot(x, y);
                path.push(slot as u8);
                match self.branches.get(branch.0)?.children[slot] {
                    Some(ChildRef::Leaf(leaf)) => break leaf,
                    _ => return None,
                }
            }
            let slot = quad.descend(x, y);
            path.push(slot as u8);
            match self.branches.get(branch.0)?.children[slot] {
                Some(ChildRef::Branch(child)) => branch = child,
                _ => return None,
            }
            if path.len() > self.depth_bound {
                // cannot happen on a well-formed tree; stop rather than
                // descend a corrupted structure forever
                log::warn!(
                    "erase({:?}, {:?}) exceeded depth bound {}, aborting",
                    x,
                    y,
                    self.depth_bound
                );
                return None;
            }
        };

        let removed = self.leaves.release(leaf.0)?.value;

        // Walk the recorded path upward: clear the vacated slot, and keep
        // releasing branches as long as they end up with no children.
        let mut cursor = Some(branch);
        while let Some(id) = cursor {
            let slot = match path.pop() {
                Some(taken) => taken as usize,
                None => break,
            };
            let (parent, emptied) = match self.branches.get_mut(id.0) {
                Some(node) => {
                    node.children[slot] = None;
                    (node.parent, !node.has_children())
                }
                None => break,
            };
            if !emptied {
                break;
            }
            let _ = self.branches.release(id.0);
            if parent.is_none() {
                debug!("erase pruned the root branch, tree is now empty");
                self.root = None;
            }
            cursor = parent;
        }

        Some(removed)
    }

    /// Drops every stored value and node, resetting the tree to empty.
    pub fn clear(&mut self) {
        if self.root.is_some() {
            debug!(
                "clearing tree: {} branches, {} leaves",
                self.branches.live(),
                self.leaves.live()
            );
        }
        self.branches.clear();
        self.leaves.clear();
        self.root = None;
    }

    /// Iterates over stored values in depth-first order by ascending child
    /// slot at each level. The order depends only on coordinates, never on
    /// insertion order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.branches, &self.leaves, self.root)
    }
}

impl<'a, V, P: Position> IntoIterator for &'a QuadTree<V, P> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}
