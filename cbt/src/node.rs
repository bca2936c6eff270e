//! Heap coordinates for tree nodes.

/// A node of the binary tree in heap coordinates.
///
/// `id` carries an implicit leading one bit at position `depth`: the root is
/// `{1, 0}`, and the children of `{id, depth}` are `{2 * id, depth + 1}` and
/// `{2 * id + 1, depth + 1}`. Stripping the leading bit yields the node's
/// left-to-right index within its depth level.
///
/// # Examples
///
/// ```
/// use cbt::Node;
///
/// let node = Node::new(0b110, 2);
/// assert_eq!(node.parent(), Node::new(0b11, 1));
/// assert_eq!(node.left_child(), Node::new(0b1100, 3));
/// assert_eq!(node.right_child(), Node::new(0b1101, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    pub id: u64,
    pub depth: u32,
}

impl Node {
    /// The root node `{1, 0}`.
    pub const ROOT: Node = Node { id: 1, depth: 0 };

    /// Creates a node from heap coordinates.
    ///
    /// `id` must have its leading one bit at position `depth`.
    #[inline]
    pub fn new(id: u64, depth: u32) -> Self {
        debug_assert_eq!(id >> depth, 1, "node id {id:#b} does not sit at depth {depth}");
        Self { id, depth }
    }

    /// Returns `true` for the root node.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.id == 1
    }

    /// The parent node. Must not be called on the root.
    #[inline]
    pub fn parent(&self) -> Node {
        debug_assert!(!self.is_root());
        Node {
            id: self.id >> 1,
            depth: self.depth - 1,
        }
    }

    /// The left child node.
    #[inline]
    pub fn left_child(&self) -> Node {
        Node {
            id: self.id << 1,
            depth: self.depth + 1,
        }
    }

    /// The right child node.
    #[inline]
    pub fn right_child(&self) -> Node {
        Node {
            id: (self.id << 1) | 1,
            depth: self.depth + 1,
        }
    }
}
