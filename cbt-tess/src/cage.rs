//! The half-edge cage: the triangulated control mesh driving tessellation.
//!
//! ## Example
//! ```
//! # use cbt_tess::Cage;
//! // Two triangles sharing the edge (1, 2).
//! let cage = Cage::from_triangles(4, &[[0, 1, 2], [2, 1, 3]]).unwrap();
//!
//! assert_eq!(cage.halfedge_count(), 6);
//! // Half-edge 1 runs (1, 2); its twin runs (2, 1) in the second face.
//! assert_eq!(cage.twin(1), 3);
//! assert_eq!(cage.twin(3), 1);
//! ```

use std::collections::HashMap;

use itertools::Itertools;

use crate::{Error, Result};

/// A read-only triangulated half-edge mesh.
///
/// Each face contributes three half-edges with consecutive identifiers; the
/// half-edge `3 * face + slot` runs from the face's `slot`-th corner to the
/// next one. `next`/`prev` cycle within the face and `twin` crosses to the
/// oppositely-directed half-edge of the adjacent face, or is `-1` on a
/// boundary.
///
/// All lookups are total and allocation-free; callers pass in-range
/// identifiers.
#[derive(Debug, Clone)]
pub struct Cage {
    next: Vec<i32>,
    prev: Vec<i32>,
    twin: Vec<i32>,
    vertex: Vec<u32>,
}

impl Cage {
    /// Builds a cage from a triangle index buffer.
    ///
    /// # Arguments
    ///
    /// * `vertices_len` - The number of vertices in the mesh.
    /// * `triangles` - Vertex indices for each triangle, counter-clockwise.
    pub fn from_triangles(vertices_len: usize, triangles: &[[u32; 3]]) -> Result<Self> {
        if triangles.is_empty() {
            return Err(Error::EmptyCage);
        }
        let halfedges = triangles.len() * 3;
        // Decoding multiplies identifiers by four per refinement step; keep
        // the root range well inside i32.
        if halfedges > (i32::MAX / 4) as usize {
            return Err(Error::CageTooLarge { halfedges });
        }

        #[cfg(not(feature = "topology_validation"))]
        let _ = vertices_len;

        let mut next = Vec::with_capacity(halfedges);
        let mut prev = Vec::with_capacity(halfedges);
        let mut vertex = Vec::with_capacity(halfedges);
        let mut edge_to_halfedge: HashMap<(u32, u32), i32> = HashMap::with_capacity(halfedges);

        for (face, corners) in triangles.iter().enumerate() {
            #[cfg(feature = "topology_validation")]
            {
                for &index in corners {
                    if vertices_len <= index as usize {
                        return Err(Error::VertexIndexOutOfRange { face, index });
                    }
                }
                if corners[0] == corners[1] || corners[1] == corners[2] || corners[0] == corners[2]
                {
                    return Err(Error::DegenerateFace(face));
                }
            }
            let base = (3 * face) as i32;
            for (slot, (&from, &to)) in corners.iter().circular_tuple_windows::<(_, _)>().enumerate() {
                let slot = slot as i32;
                next.push(base + (slot + 1) % 3);
                prev.push(base + (slot + 2) % 3);
                vertex.push(from);

                let clash = edge_to_halfedge.insert((from, to), base + slot).is_some();
                #[cfg(feature = "topology_validation")]
                if clash {
                    return Err(Error::NonManifoldEdge(from, to));
                }
                #[cfg(not(feature = "topology_validation"))]
                let _ = clash;
            }
        }

        let twin = (0..halfedges as i32)
            .map(|halfedge| {
                let from = vertex[halfedge as usize];
                let to = vertex[next[halfedge as usize] as usize];
                edge_to_halfedge.get(&(to, from)).copied().unwrap_or(-1)
            })
            .collect();

        Ok(Self {
            next,
            prev,
            twin,
            vertex,
        })
    }

    /// The number of half-edges in the cage.
    #[inline]
    pub fn halfedge_count(&self) -> usize {
        self.next.len()
    }

    /// The next half-edge within the same face.
    #[inline]
    pub fn next(&self, halfedge: i32) -> i32 {
        self.next[halfedge as usize]
    }

    /// The previous half-edge within the same face.
    #[inline]
    pub fn prev(&self, halfedge: i32) -> i32 {
        self.prev[halfedge as usize]
    }

    /// The oppositely-directed half-edge of the adjacent face, or `-1` on a
    /// boundary.
    #[inline]
    pub fn twin(&self, halfedge: i32) -> i32 {
        self.twin[halfedge as usize]
    }

    /// The vertex the half-edge points away from.
    #[inline]
    pub fn vertex(&self, halfedge: i32) -> u32 {
        self.vertex[halfedge as usize]
    }
}

/// The twelve triangles of a unit cube, two per face; 36 half-edges.
///
/// Handy as a closed two-manifold fixture.
pub fn cube_triangles() -> Vec<[u32; 3]> {
    vec![
        [0, 1, 3],
        [0, 3, 2],
        [2, 3, 5],
        [2, 5, 4],
        [4, 5, 7],
        [4, 7, 6],
        [6, 7, 1],
        [6, 1, 0],
        [1, 7, 5],
        [1, 5, 3],
        [6, 0, 2],
        [6, 2, 4],
    ]
}
