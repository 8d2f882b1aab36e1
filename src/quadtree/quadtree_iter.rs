//! External depth-first iterator over stored values.

use smallvec::SmallVec;

use crate::arena::Arena;

use super::quadtree_constants::{INLINE_PATH_DEPTH, NODE_FANOUT};
use super::quadtree_types::{BranchId, BranchNode, ChildRef, LeafNode};

/// Forward iterator over the values of a [`QuadTree`](crate::QuadTree).
///
/// Visits leaves in a deterministic depth-first order, scanning child slots
/// in ascending order (0..4) at every level. The traversal is an explicit
/// state machine: the branch currently being scanned, the next slot to
/// examine there, and a path stack recording which slot was taken at each
/// ancestor, so ascending can resume the parent's scan where it left off.
///
/// The borrow of the tree prevents structural mutation while an iterator is
/// alive.
pub struct Iter<'a, V> {
    branches: &'a Arena<BranchNode>,
    leaves: &'a Arena<LeafNode<V>>,
    /// Branch being scanned; `None` once the traversal is exhausted.
    node: Option<BranchId>,
    /// Next slot to examine at `node`.
    slot: usize,
    /// Slot taken at each ancestor of `node`.
    path: SmallVec<[u8; INLINE_PATH_DEPTH]>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(
        branches: &'a Arena<BranchNode>,
        leaves: &'a Arena<LeafNode<V>>,
        root: Option<BranchId>,
    ) -> Iter<'a, V> {
        Iter {
            branches,
            leaves,
            node: root,
            slot: 0,
            path: SmallVec::new(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        loop {
            let branch = self.node?;

            if self.slot == NODE_FANOUT {
                // This level is exhausted; pop up and resume the parent's
                // scan one past the slot that led here.
                self.node = self.branches.get(branch.0).and_then(|node| node.parent);
                self.slot = match self.path.pop() {
                    Some(taken) => taken as usize + 1,
                    // leaving the root: node is already None
                    None => NODE_FANOUT,
                };
                continue;
            }

            match self.branches.get(branch.0).and_then(|node| node.children[self.slot]) {
                Some(ChildRef::Leaf(leaf)) => {
                    self.slot += 1;
                    if let Some(node) = self.leaves.get(leaf.0) {
                        return Some(&node.value);
                    }
                }
                Some(ChildRef::Branch(child)) => {
                    self.path.push(self.slot as u8);
                    self.node = Some(child);
                    self.slot = 0;
                }
                None => self.slot += 1,
            }
        }
    }
}

impl<V> std::iter::FusedIterator for Iter<'_, V> {}

#[cfg(test)]
mod tests {
    use crate::QuadTree;

    #[test]
    fn test_empty_tree_yields_nothing() {
        let tree: QuadTree<u32> = QuadTree::new(0, 0, 8, 8);
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.iter().count(), 0);
    }

    #[test]
    fn test_visits_every_inserted_value_once() {
        let mut tree = QuadTree::new(0, 0, 16, 16);
        let coords = [(0, 0), (3, 12), (7, 7), (9, 1), (15, 15)];
        for (i, &(x, y)) in coords.iter().enumerate() {
            tree.insert(x, y, i);
        }
        let mut seen: Vec<usize> = tree.iter().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_order_is_independent_of_insertion_order() {
        let coords = [(1, 1), (7, 7), (1, 7), (4, 2), (6, 0)];

        let mut forward = QuadTree::new(0, 0, 8, 8);
        for &(x, y) in coords.iter() {
            forward.insert(x, y, (x, y));
        }
        let mut backward = QuadTree::new(0, 0, 8, 8);
        for &(x, y) in coords.iter().rev() {
            backward.insert(x, y, (x, y));
        }

        let a: Vec<_> = forward.iter().copied().collect();
        let b: Vec<_> = backward.iter().copied().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_slot_order_within_base_quad() {
        // Slot index is x-bit + 2*y-bit, so a full base quad comes out as
        // (0,0), (1,0), (0,1), (1,1).
        let mut tree = QuadTree::new(0, 0, 2, 2);
        tree.insert(1, 1, 'd');
        tree.insert(0, 1, 'c');
        tree.insert(1, 0, 'b');
        tree.insert(0, 0, 'a');
        let values: Vec<char> = tree.iter().copied().collect();
        assert_eq!(values, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_quadrant_order_across_levels() {
        let mut tree = QuadTree::new(0, 0, 8, 8);
        // One value per top-level quadrant, inserted shuffled.
        tree.insert(6, 6, 3); // high-x, high-y quadrant
        tree.insert(1, 5, 2); // low-x, high-y
        tree.insert(1, 1, 0); // low-x, low-y
        tree.insert(6, 1, 1); // high-x, low-y
        let values: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(values, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut tree = QuadTree::new(0, 0, 8, 8);
        tree.insert(2, 2, 1);
        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let mut tree = QuadTree::new(0, 0, 8, 8);
        tree.insert(1, 2, 10);
        tree.insert(5, 6, 20);
        let total: i32 = (&tree).into_iter().sum();
        assert_eq!(total, 30);

        let mut by_loop = 0;
        for value in &tree {
            by_loop += value;
        }
        assert_eq!(by_loop, 30);
    }

    #[test]
    fn test_iteration_after_erase() {
        let mut tree = QuadTree::new(0, 0, 8, 8);
        tree.insert(1, 1, "A");
        tree.insert(7, 7, "B");
        tree.insert(1, 7, "C");
        assert_eq!(tree.erase(1, 1), Some("A"));

        let rest: Vec<&str> = tree.iter().copied().collect();
        assert_eq!(rest, vec!["C", "B"]);
    }
}
