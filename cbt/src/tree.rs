//! Tree storage and the split/merge primitives.

use crate::{Error, Node, Result};

/// A binary tree over a packed bit field.
///
/// The tree has a fixed maximum depth `D`. One bit is kept per slot at depth
/// `D`; a set bit marks the leftmost deepest descendant of a current leaf.
/// For nodes whose slot range spans more than one storage word, subtree leaf
/// counts are cached in an explicit heap and maintained incrementally; for
/// deeper nodes a single masked popcount answers the query directly.
///
/// A minimum active depth can be recorded at construction time: the tree is
/// initialized with all leaves at that depth and [`merge_node`](Tree::merge_node)
/// never coarsens past it. Callers that pad a non-power-of-two root count up
/// to a full level rely on this to keep padding leaves untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    max_depth: u32,
    min_depth: u32,
    /// Depth at which subtree slot ranges fit into one storage word.
    packed_depth: u32,
    bitfield: Vec<u64>,
    sums: Vec<u32>,
}

impl Tree {
    /// Deepest supported tree; bounded so node identifiers at the maximum
    /// depth stay within 32 significant bits.
    pub const DEPTH_LIMIT: u32 = 31;

    /// Creates a tree of the given maximum depth with a single leaf at the
    /// root.
    pub fn with_depth(max_depth: u32) -> Result<Self> {
        Self::with_initial_depth(max_depth, 0)
    }

    /// Creates a tree of the given maximum depth with all leaves at
    /// `initial_depth`, which is recorded as the minimum active depth.
    pub fn with_initial_depth(max_depth: u32, initial_depth: u32) -> Result<Self> {
        if max_depth == 0 || max_depth > Self::DEPTH_LIMIT {
            return Err(Error::DepthOutOfRange {
                depth: max_depth,
                limit: Self::DEPTH_LIMIT,
            });
        }
        if initial_depth > max_depth {
            return Err(Error::InitialDepthTooDeep {
                initial: initial_depth,
                maximum: max_depth,
            });
        }

        let words = (1usize << max_depth).div_ceil(64);
        let packed_depth = max_depth.saturating_sub(6);
        let mut tree = Self {
            max_depth,
            min_depth: initial_depth,
            packed_depth,
            bitfield: vec![0; words],
            sums: vec![0; 1 << packed_depth],
        };
        for index in 0..1u64 << initial_depth {
            tree.set_leaf_bit(index << (max_depth - initial_depth));
        }
        Ok(tree)
    }

    /// The configured maximum depth.
    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// The minimum active depth; merges never coarsen past this level.
    #[inline]
    pub fn min_depth(&self) -> u32 {
        self.min_depth
    }

    /// The number of slots at the maximum depth, i.e. the most leaves the
    /// tree can hold.
    #[inline]
    pub fn capacity(&self) -> u64 {
        1u64 << self.max_depth
    }

    /// The current number of leaves.
    #[inline]
    pub fn node_count(&self) -> u32 {
        self.subtree_leaf_count(Node::ROOT)
    }

    /// Returns `true` if `node` is a current leaf of the tree.
    pub fn is_leaf_node(&self, node: Node) -> bool {
        self.subtree_leaf_count(node) == 1
            && (node.is_root() || self.subtree_leaf_count(node.parent()) > 1)
    }

    /// Splits `node`, making its two children distinct leaves.
    ///
    /// This is a single bit write: the slot of the right child's leftmost
    /// deepest descendant is set. Splitting an already-split node is a no-op,
    /// and nodes at the maximum depth are silently ignored.
    pub fn split_node(&mut self, node: Node) {
        if node.depth >= self.max_depth {
            return;
        }
        self.set_leaf_bit(self.leftmost_slot(node.right_child()));
    }

    /// Merges the two children of `node` back into a single leaf.
    ///
    /// The inverse of [`split_node`](Tree::split_node). Refused (no-op) when
    /// the children are not both leaves or when `node` lies above the minimum
    /// active depth, so external callers cannot corrupt the leaf encoding.
    pub fn merge_node(&mut self, node: Node) {
        if node.depth >= self.max_depth || node.depth < self.min_depth {
            return;
        }
        if !self.is_leaf_node(node.left_child()) || !self.is_leaf_node(node.right_child()) {
            return;
        }
        self.clear_leaf_bit(self.leftmost_slot(node.right_child()));
    }

    /// Decodes the `leaf_index`-th leaf in left-to-right order, or `None`
    /// when the index is out of range.
    pub fn decode_node(&self, leaf_index: u32) -> Option<Node> {
        if leaf_index < self.node_count() {
            Some(self.decode_leaf(leaf_index))
        } else {
            None
        }
    }

    /// Iterates over all current leaves in left-to-right order.
    pub fn leaves(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.node_count()).map(move |index| self.decode_leaf(index))
    }

    fn decode_leaf(&self, leaf_index: u32) -> Node {
        let mut node = Node::ROOT;
        let mut index = leaf_index;
        while self.subtree_leaf_count(node) > 1 {
            let left = node.left_child();
            let left_count = self.subtree_leaf_count(left);
            if index < left_count {
                node = left;
            } else {
                index -= left_count;
                node = node.right_child();
            }
        }
        node
    }

    /// Number of leaves in the subtree rooted at `node`.
    fn subtree_leaf_count(&self, node: Node) -> u32 {
        debug_assert!(node.depth <= self.max_depth);
        if node.depth < self.packed_depth {
            self.sums[node.id as usize]
        } else {
            let span = 1u64 << (self.max_depth - node.depth);
            let first = self.leftmost_slot(node);
            let word = self.bitfield[(first >> 6) as usize];
            let bits = if span == 64 {
                word
            } else {
                (word >> (first & 63)) & ((1u64 << span) - 1)
            };
            bits.count_ones()
        }
    }

    /// Slot index of the leftmost deepest descendant of `node`.
    #[inline]
    fn leftmost_slot(&self, node: Node) -> u64 {
        (node.id << (self.max_depth - node.depth)) ^ (1u64 << self.max_depth)
    }

    fn set_leaf_bit(&mut self, slot: u64) {
        let word = &mut self.bitfield[(slot >> 6) as usize];
        let mask = 1u64 << (slot & 63);
        if *word & mask == 0 {
            *word |= mask;
            self.adjust_sums(slot, 1);
        }
    }

    fn clear_leaf_bit(&mut self, slot: u64) {
        let word = &mut self.bitfield[(slot >> 6) as usize];
        let mask = 1u64 << (slot & 63);
        if *word & mask != 0 {
            *word &= !mask;
            self.adjust_sums(slot, -1);
        }
    }

    fn adjust_sums(&mut self, slot: u64, delta: i32) {
        let packed = 1u64 << self.packed_depth;
        let mut id = (slot | (1u64 << self.max_depth)) >> 1;
        while id > 0 {
            if id < packed {
                let sum = &mut self.sums[id as usize];
                *sum = sum.wrapping_add_signed(delta);
            }
            id >>= 1;
        }
    }
}
