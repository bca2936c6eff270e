//! Decoding across-edge neighbors of a bisector.

use std::ops::Index;

use bytemuck::{Pod, Zeroable};

use crate::Cage;

use super::Bisector;

/// The three same-depth neighbor bisector identifiers of a triangle.
///
/// `n0` is the neighbor across the splitting edge, the one the split
/// propagator chases outward; `n1`/`n2` are the neighbors across the other
/// two edges. Negative values are sentinels ("no neighbor there") and
/// propagate through the recurrence unchanged in sign.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct NeighborIds([i32; 3]);

impl NeighborIds {
    #[inline]
    pub const fn new(n0: i32, n1: i32, n2: i32) -> Self {
        Self([n0, n1, n2])
    }

    #[inline]
    pub const fn n0(&self) -> i32 {
        self.0[0]
    }

    #[inline]
    pub const fn n1(&self) -> i32 {
        self.0[1]
    }

    #[inline]
    pub const fn n2(&self) -> i32 {
        self.0[2]
    }
}

impl Index<usize> for NeighborIds {
    type Output = i32;

    #[inline]
    fn index(&self, index: usize) -> &i32 {
        &self.0[index]
    }
}

/// Reconstructs the three neighbor bisector identifiers of `bisector` at its
/// own depth.
///
/// Seeded from the cage adjacency of the root half-edge,
/// `(twin, next, prev)`, and refined by replaying the bisector's bit pattern
/// through the longest-edge-bisection neighbor recurrence: at each level the
/// parent identifier and the child bit decide which neighbor lands across
/// which edge of the two halves.
///
/// Sentinel inputs and boundary twins yield negative outputs; callers treat
/// those as "stop here", never as errors.
pub fn decode_neighbors(bisector: Bisector, cage: &Cage) -> NeighborIds {
    debug_assert!(bisector.is_valid());
    let halfedge = bisector.root_halfedge();
    let mut ids = NeighborIds::new(cage.twin(halfedge), cage.next(halfedge), cage.prev(halfedge));

    for bit_id in (0..bisector.depth).rev() {
        let level_id = bisector.id >> bit_id;
        let parent_id = level_id >> 1;
        let child_bit = level_id & 1;

        ids = if child_bit == 0 {
            NeighborIds::new(2 * ids.n2() + 1, 2 * parent_id + 1, 2 * ids.n0() + 1)
        } else {
            NeighborIds::new(2 * ids.n1(), 2 * ids.n0(), 2 * parent_id)
        };
    }
    ids
}
