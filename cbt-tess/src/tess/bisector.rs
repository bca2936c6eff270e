//! The bisector coordinate system.
//!
//! Every triangulation state of the cage maps onto the nodes of a perfect
//! binary tree: one root triangle per cage half-edge, one binary split per
//! longest-edge bisection. A [`Bisector`] is a re-based view of a tree node
//! that strips the tree's implicit leading bit and subtracts the padding
//! depth introduced by rounding the root-triangle count up to a power of two.
//! The conversion is a pure, invertible bit operation parameterized only by
//! that minimum tree depth.

use bytemuck::{Pod, Zeroable};

use crate::Cage;

/// A sub-triangle of the tessellation in depth-normalized coordinates.
///
/// `depth` counts bisections below the root-triangle level; the high bits of
/// `id` beyond `depth` select the root triangle (cage half-edge) and the low
/// `depth` bits record the even/odd bisection history, most significant bit
/// first.
///
/// Negative `id` or `depth` is a sentinel meaning "no such neighbor / off
/// mesh". Sentinels are ordinary values, not errors: decoders and the split
/// propagator accept them and simply stop there.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Bisector {
    pub id: i32,
    pub depth: i32,
}

impl Bisector {
    /// Creates a bisector from raw coordinates.
    #[inline]
    pub const fn new(id: i32, depth: i32) -> Self {
        Self { id, depth }
    }

    /// `false` for sentinel values terminating neighbor-propagation walks.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.id >= 0 && self.depth >= 0
    }

    /// The cage half-edge seeding the root triangle this bisector descends
    /// from.
    #[inline]
    pub fn root_halfedge(&self) -> i32 {
        debug_assert!(self.is_valid());
        self.id >> self.depth
    }

    /// Re-bases a tree node into bisector coordinates.
    ///
    /// Strips the implicit leading bit from the node identifier and rebases
    /// the depth below the minimum tree depth. Exact inverse of
    /// [`node`](Bisector::node) for nodes at or below the minimum depth.
    #[inline]
    pub fn from_node(node: cbt::Node, minimum_depth: u32) -> Self {
        Self {
            id: (node.id ^ (1u64 << node.depth)) as i32,
            depth: node.depth as i32 - minimum_depth as i32,
        }
    }

    /// Converts back to tree-node coordinates. Only defined for valid
    /// (non-sentinel) bisectors.
    #[inline]
    pub fn node(&self, minimum_depth: u32) -> cbt::Node {
        debug_assert!(self.is_valid());
        let depth = (self.depth + minimum_depth as i32) as u32;
        cbt::Node::new(self.id as u64 | (1u64 << depth), depth)
    }
}

/// The number of distinct triangles at the coarsest subdivision level: one
/// per cage half-edge.
#[inline]
pub fn root_bisector_count(cage: &Cage) -> u32 {
    cage.halfedge_count() as u32
}

/// The smallest tree depth at which every root triangle has a distinct node,
/// i.e. the smallest `k` with `2^k >= root_bisector_count(cage)`.
#[inline]
pub fn minimum_tree_depth(cage: &Cage) -> u32 {
    root_bisector_count(cage).next_power_of_two().trailing_zeros()
}

/// The deepest a bisector may recurse for a surface refined at most
/// `max_surface_depth` times: two binary splits per quad-subdivision level.
#[inline]
pub fn maximum_bisector_depth(max_surface_depth: u32) -> u32 {
    debug_assert!(max_surface_depth >= 1, "surface depth must be at least 1");
    2 * max_surface_depth - 1
}
