//! Adaptive crack-free tessellation over the binary-tree bit field.
//!
//! [`Tessellation`] owns the tree and the cage-derived constants; the
//! decoders ([`decode_halfedges`], [`decode_neighbors`]) are pure functions
//! of a bisector and the cage. The renderer drives refinement by calling
//! [`Tessellation::split`] once per bisector it marks for subdivision; the
//! conforming companion splits happen inside.

mod bisector;
mod halfedge;
mod neighbor;

pub use bisector::{maximum_bisector_depth, minimum_tree_depth, root_bisector_count, Bisector};
pub use halfedge::{decode_halfedges, HalfedgeIds};
pub use neighbor::{decode_neighbors, NeighborIds};

use crate::{Cage, Result, SubdivisionSurface};

/// Tessellation state for one subdivision surface.
///
/// The tree is allocated at depth `minimum_tree_depth + maximum_bisector_depth`
/// with all leaves starting at the minimum depth, one per root triangle plus
/// the padding introduced by rounding the root count up to a power of two.
/// Padding leaves are never split and never enumerated.
#[derive(Debug, Clone)]
pub struct Tessellation {
    tree: cbt::Tree,
    minimum_depth: u32,
    root_count: u32,
}

impl Tessellation {
    /// Allocates tessellation state sized for `surface`.
    pub fn new(surface: &SubdivisionSurface) -> Result<Self> {
        let cage = surface.cage();
        let minimum_depth = minimum_tree_depth(cage);
        let total_depth = minimum_depth + maximum_bisector_depth(surface.max_depth());
        let tree = cbt::Tree::with_initial_depth(total_depth, minimum_depth)?;

        Ok(Self {
            tree,
            minimum_depth,
            root_count: root_bisector_count(cage),
        })
    }

    /// The underlying tree.
    #[inline]
    pub fn tree(&self) -> &cbt::Tree {
        &self.tree
    }

    /// Mutable access to the underlying tree, for external merge policies.
    #[inline]
    pub fn tree_mut(&mut self) -> &mut cbt::Tree {
        &mut self.tree
    }

    /// The depth offset separating tree coordinates from bisector
    /// coordinates.
    #[inline]
    pub fn minimum_depth(&self) -> u32 {
        self.minimum_depth
    }

    /// The deepest level a bisector may reach.
    #[inline]
    pub fn maximum_depth(&self) -> u32 {
        self.tree.max_depth() - self.minimum_depth
    }

    /// The number of live bisectors: tree leaves minus the power-of-two
    /// padding leaves.
    #[inline]
    pub fn bisector_count(&self) -> u32 {
        self.tree.node_count() - ((1 << self.minimum_depth) - self.root_count)
    }

    /// Iterates over the live bisectors in tree order, skipping padding.
    pub fn bisectors(&self) -> impl Iterator<Item = Bisector> + '_ {
        let root_count = self.root_count as i32;
        let minimum_depth = self.minimum_depth;
        self.tree
            .leaves()
            .map(move |node| Bisector::from_node(node, minimum_depth))
            .filter(move |bisector| bisector.root_halfedge() < root_count)
    }

    /// Returns `true` if `bisector` is a current leaf of the tessellation.
    pub fn is_leaf(&self, bisector: Bisector) -> bool {
        bisector.is_valid() && self.tree.is_leaf_node(bisector.node(self.minimum_depth))
    }

    /// Splits `bisector` and performs the companion splits that keep the
    /// triangulation crack-free.
    ///
    /// The walk is iterative: split the node, cross to the neighbor sharing
    /// the split edge, then repeatedly split that neighbor, its parent (the
    /// diamond cannot stay a leaf once its child exists), and continue from
    /// the parent's own splitting-edge neighbor. It terminates when the
    /// chain runs off a mesh boundary or above the root level, after at most
    /// `bisector.depth + 1` iterations, since the depth strictly decreases.
    ///
    /// Splitting an already-split bisector is a no-op at the tree layer;
    /// there is no failure path.
    pub fn split(&mut self, cage: &Cage, bisector: Bisector) {
        #[cfg(feature = "tracing")]
        tracing::trace!(id = bisector.id, depth = bisector.depth, "split bisector");

        self.tree.split_node(bisector.node(self.minimum_depth));

        let mut iterator = Bisector::new(decode_neighbors(bisector, cage).n0(), bisector.depth);
        while iterator.is_valid() {
            self.tree.split_node(iterator.node(self.minimum_depth));
            iterator = Bisector::new(iterator.id >> 1, iterator.depth - 1);
            if iterator.depth < 0 {
                // The companion above the root level sits in the padding
                // depths, interior since creation.
                break;
            }
            self.tree.split_node(iterator.node(self.minimum_depth));
            iterator.id = decode_neighbors(iterator, cage).n0();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cage::cube_triangles;

    fn cube_surface(max_depth: u32) -> SubdivisionSurface {
        let cage = Cage::from_triangles(8, &cube_triangles()).expect("valid cage");
        SubdivisionSurface::new(cage, max_depth).expect("valid depth")
    }

    #[test]
    fn tree_is_sized_from_cage_and_surface_depth() {
        let surface = cube_surface(3);
        let tessellation = Tessellation::new(&surface).expect("tree fits");

        // 36 half-edges round up to 64 leaves: minimum depth 6; surface
        // depth 3 allows 5 more bisector levels.
        assert_eq!(tessellation.minimum_depth(), 6);
        assert_eq!(tessellation.maximum_depth(), 5);
        assert_eq!(tessellation.tree().max_depth(), 11);
        assert_eq!(tessellation.tree().min_depth(), 6);
    }

    #[test]
    fn fresh_tessellation_enumerates_exactly_the_roots() {
        let surface = cube_surface(2);
        let tessellation = Tessellation::new(&surface).expect("tree fits");

        assert_eq!(tessellation.bisector_count(), 36);
        let bisectors: Vec<Bisector> = tessellation.bisectors().collect();
        assert_eq!(bisectors.len(), 36);
        for (halfedge, bisector) in bisectors.into_iter().enumerate() {
            assert_eq!(bisector, Bisector::new(halfedge as i32, 0));
            assert!(tessellation.is_leaf(bisector));
        }
    }

    #[test]
    fn split_accounts_for_companions() {
        let surface = cube_surface(2);
        let cage = surface.cage().clone();
        let mut tessellation = Tessellation::new(&surface).expect("tree fits");

        // Splitting a root bisector also splits its edge partner: two new
        // leaves appear.
        tessellation.split(&cage, Bisector::new(0, 0));
        assert_eq!(tessellation.bisector_count(), 38);
        assert!(!tessellation.is_leaf(Bisector::new(0, 0)));
        assert!(tessellation.is_leaf(Bisector::new(0, 1)));
        assert!(tessellation.is_leaf(Bisector::new(1, 1)));

        let partner = decode_neighbors(Bisector::new(0, 0), &cage).n0();
        assert!(!tessellation.is_leaf(Bisector::new(partner, 0)));

        // Re-splitting is a no-op.
        tessellation.split(&cage, Bisector::new(0, 0));
        assert_eq!(tessellation.bisector_count(), 38);
    }

    #[test]
    fn uniform_refinement_doubles_bisectors_per_level() {
        let surface = cube_surface(2);
        let cage = surface.cage().clone();
        let mut tessellation = Tessellation::new(&surface).expect("tree fits");

        for level in 0..3u32 {
            let frontier: Vec<Bisector> = tessellation.bisectors().collect();
            for bisector in frontier {
                tessellation.split(&cage, bisector);
            }
            assert_eq!(tessellation.bisector_count(), 36 << (level + 1));
            for bisector in tessellation.bisectors() {
                assert_eq!(bisector.depth, level as i32 + 1);
            }
        }
    }

    #[test]
    fn split_terminates_within_the_depth_bound() {
        let surface = cube_surface(3);
        let cage = surface.cage().clone();
        let mut tessellation = Tessellation::new(&surface).expect("tree fits");

        // Refine uniformly to the maximum bisector depth, then split there.
        for _ in 0..tessellation.maximum_depth() {
            let frontier: Vec<Bisector> = tessellation.bisectors().collect();
            for bisector in frontier {
                tessellation.split(&cage, bisector);
            }
        }

        let deepest = tessellation
            .bisectors()
            .next()
            .expect("tessellation is never empty");
        assert_eq!(deepest.depth as u32, tessellation.maximum_depth());

        // Retrace the propagation chain read-only: it must exit within
        // depth + 1 hops, and every node it touched must now be interior
        // (except at the maximum depth, where splits are capped).
        let mut iterator =
            Bisector::new(decode_neighbors(deepest, &cage).n0(), deepest.depth);
        let mut hops = 0;
        while iterator.is_valid() {
            hops += 1;
            assert!(hops <= deepest.depth + 1, "chain did not shrink");
            iterator = Bisector::new(iterator.id >> 1, iterator.depth - 1);
            if iterator.depth < 0 {
                break;
            }
            assert!(!tessellation.is_leaf(iterator));
            iterator.id = decode_neighbors(iterator, &cage).n0();
        }

        // At maximum depth the tree refuses further subdivision.
        let count = tessellation.bisector_count();
        tessellation.split(&cage, deepest);
        assert_eq!(tessellation.bisector_count(), count);
    }
}
