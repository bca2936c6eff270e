//! Subdivision-surface configuration.

use crate::{Cage, Error, Result};

/// A Catmull-Clark subdivision surface configuration: a cage together with
/// the maximum refinement depth the renderer is allowed to reach.
///
/// The tessellation core reads exactly one datum from this wrapper, the
/// configured maximum depth, and sizes its tree from it: each surface
/// refinement level corresponds to two binary bisector splits.
#[derive(Debug, Clone)]
pub struct SubdivisionSurface {
    cage: Cage,
    max_depth: u32,
}

impl SubdivisionSurface {
    /// Pairs a cage with a maximum refinement depth (at least 1).
    pub fn new(cage: Cage, max_depth: u32) -> Result<Self> {
        if max_depth == 0 {
            return Err(Error::InvalidMaxDepth);
        }
        Ok(Self { cage, max_depth })
    }

    /// The control cage.
    #[inline]
    pub fn cage(&self) -> &Cage {
        &self.cage
    }

    /// The configured maximum refinement depth.
    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}
