//! # Adaptive Catmull-Clark Tessellation over a Binary-Tree Bit Field
//!
//! Crack-free adaptive tessellation of a triangulated control mesh (the
//! "cage"). Every possible triangulation state of the cage maps to the nodes
//! of a perfect binary tree stored in the [`cbt`] crate; this crate owns the
//! bisector-encoding layer on top:
//!
//! * the [`tess::Bisector`] coordinate system, a depth-normalized alias of a
//!   tree node, with lossless conversions that account for a
//!   non-power-of-two root-triangle count through padding leaves;
//! * the half-edge decoder ([`tess::decode_halfedges`]), which replays a
//!   bisector's bit pattern to recover the three half-edges of its
//!   sub-triangle in the cage's half-edge index space;
//! * the neighbor decoder ([`tess::decode_neighbors`]), which replays the
//!   same bits through the longest-edge-bisection adjacency recurrence;
//! * the split propagator ([`tess::Tessellation::split`]), which performs the
//!   companion splits that keep shared edges consistently subdivided across
//!   triangle boundaries, so the output never contains T-junctions.
//!
//! Everything is integer arithmetic on small value types: no floating point,
//! no allocation on the per-bisector paths, bounded `O(depth)` loops instead
//! of recursion. Deciding *what* to split (the screen-space refinement
//! metric) is the renderer's job and lives outside this crate; so does all
//! GPU work. The decoders here are the CPU mirror of what evaluation
//! shaders run per leaf.
//!
//! ```
//! use cbt_tess::{tess::{Bisector, Tessellation}, Cage, SubdivisionSurface};
//!
//! let cage = Cage::from_triangles(4, &[[0, 1, 2], [2, 1, 3]]).unwrap();
//! let surface = SubdivisionSurface::new(cage, 2).unwrap();
//! let mut tessellation = Tessellation::new(&surface).unwrap();
//!
//! // One root triangle per cage half-edge.
//! assert_eq!(tessellation.bisector_count(), 6);
//!
//! // Splitting across a shared edge subdivides the partner triangle too.
//! tessellation.split(surface.cage(), Bisector::new(1, 0));
//! assert_eq!(tessellation.bisector_count(), 8);
//! ```
//!
//! ## Features
#![doc = document_features::document_features!()]

pub mod cage;
pub mod error;
pub mod subd;
pub mod tess;

pub use cage::Cage;
pub use error::{Error, Result};
pub use subd::SubdivisionSurface;
