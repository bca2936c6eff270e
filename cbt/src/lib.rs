//! # Binary-Tree Bit Field
//!
//! A perfect binary tree of fixed maximum depth that encodes an arbitrary
//! *full* binary topology (every interior node has exactly two children) as a
//! packed bit field over its deepest slots, with subtree-leaf-count
//! bookkeeping on top. This is the storage layer behind adaptive longest-edge
//! bisection: splitting a node is a single idempotent bit write, counting and
//! enumerating leaves is `O(depth)` per query.
//!
//! The encoding assigns one bit per slot at the maximum depth. A bit is set
//! exactly when its slot is the leftmost deepest descendant of a current
//! leaf. Summing bits over a node's slot range therefore yields the number of
//! leaves in that node's subtree; interior nodes sum to two or more, leaves
//! to one.
//!
//! This crate is a sequential reference. The contract is shaped so that a
//! concurrent drop-in stays possible: [`Tree::split_node`] is an idempotent
//! bit set and every derived quantity can be rebuilt from the bit field alone
//! by a sum reduction.
//!
//! ```
//! use cbt::{Node, Tree};
//!
//! // All leaves start at depth 2.
//! let mut tree = Tree::with_initial_depth(4, 2).unwrap();
//! assert_eq!(tree.node_count(), 4);
//!
//! // Split the first leaf; its two children become leaves.
//! let leaf = tree.decode_node(0).unwrap();
//! tree.split_node(leaf);
//! assert_eq!(tree.node_count(), 5);
//! assert!(!tree.is_leaf_node(leaf));
//! ```

mod error;
mod node;
mod tree;

pub use error::{Error, Result};
pub use node::Node;
pub use tree::Tree;
