//! Decoding the half-edges bounding a bisector's sub-triangle.

use std::ops::Index;

use bytemuck::{Pod, Zeroable};

use crate::Cage;

use super::Bisector;

/// The three half-edge identifiers bounding a bisector's triangle, in the
/// half-edge index space of the once-refined cage (each cage half-edge maps
/// to four sub-half-edges per quad-subdivision step).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct HalfedgeIds([i32; 3]);

impl HalfedgeIds {
    #[inline]
    pub const fn new(h0: i32, h1: i32, h2: i32) -> Self {
        Self([h0, h1, h2])
    }

    #[inline]
    pub const fn h0(&self) -> i32 {
        self.0[0]
    }

    #[inline]
    pub const fn h1(&self) -> i32 {
        self.0[1]
    }

    #[inline]
    pub const fn h2(&self) -> i32 {
        self.0[2]
    }
}

impl Index<usize> for HalfedgeIds {
    type Output = i32;

    #[inline]
    fn index(&self, index: usize) -> &i32 {
        &self.0[index]
    }
}

/// Reconstructs the three half-edges of the sub-triangle `bisector` denotes.
///
/// The root triangle of half-edge `h` is seeded with
/// `(4h, 4h + 2, 4 * next(h))`; the bisector's bit pattern is then replayed
/// from the most significant subdivision bit down to bit 0, alternating two
/// update rules:
///
/// * **even levels** stay within the current quad-subdivision level and
///   select among a half-edge's four children by OR-ing low bits;
/// * **odd levels** descend one quad level, multiplying identifiers by four.
///
/// The triangle's orientation flips on odd-parity branches, so a final swap
/// of `h0`/`h2` restores winding when the replay ends on odd parity. The
/// replay exactly inverts the encoding performed by the sequence of
/// bisections, independent of evaluation order.
pub fn decode_halfedges(bisector: Bisector, cage: &Cage) -> HalfedgeIds {
    debug_assert!(bisector.is_valid());
    let halfedge = bisector.root_halfedge();
    let mut ids = HalfedgeIds::new(4 * halfedge, 4 * halfedge + 2, 4 * cage.next(halfedge));
    let mut parity = 0;

    for bit_id in (0..bisector.depth).rev() {
        let bit = (bisector.id >> bit_id) & 1;

        ids = match (parity, bit) {
            (0, 0) => HalfedgeIds::new(ids.h0(), ids.h0() | 1, ids.h0() | 2),
            (0, _) => HalfedgeIds::new(ids.h2() | 2, ids.h2() | 3, ids.h2()),
            (_, 0) => HalfedgeIds::new(ids.h0() << 2, (ids.h0() << 2) | 2, ids.h1() << 2),
            (_, _) => HalfedgeIds::new((ids.h1() << 2) | 2, ids.h2() << 2, (ids.h2() << 2) | 2),
        };
        parity ^= 1;
    }

    if parity == 1 {
        ids = HalfedgeIds::new(ids.h2(), ids.h1(), ids.h0());
    }
    ids
}
