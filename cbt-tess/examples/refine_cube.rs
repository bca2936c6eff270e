//! Drives adaptive refinement of a cube cage from a toy refinement metric:
//! every bisector descending from a half-edge that touches one chosen corner
//! is split as deep as the surface allows, everything else stays coarse. The
//! conforming splits fan out on their own; the final census shows the depth
//! gradient the crack-free guarantee enforces.

use cbt_tess::cage::cube_triangles;
use cbt_tess::tess::{Bisector, Tessellation};
use cbt_tess::{Cage, SubdivisionSurface};

const CORNER: u32 = 0;

fn main() -> cbt_tess::Result<()> {
    let cage = Cage::from_triangles(8, &cube_triangles())?;
    let surface = SubdivisionSurface::new(cage, 3)?;
    let mut tessellation = Tessellation::new(&surface)?;

    println!(
        "cube cage: {} half-edges, tree depth {} ({} roots + {} bisector levels)",
        surface.cage().halfedge_count(),
        tessellation.tree().max_depth(),
        tessellation.minimum_depth(),
        tessellation.maximum_depth(),
    );

    for _ in 0..tessellation.maximum_depth() {
        let cage = surface.cage();
        let frontier: Vec<Bisector> = tessellation
            .bisectors()
            .filter(|bisector| {
                let halfedge = bisector.root_halfedge();
                cage.vertex(halfedge) == CORNER || cage.vertex(cage.next(halfedge)) == CORNER
            })
            .collect();
        for bisector in frontier {
            tessellation.split(cage, bisector);
        }
    }

    let mut census = vec![0u32; tessellation.maximum_depth() as usize + 1];
    for bisector in tessellation.bisectors() {
        census[bisector.depth as usize] += 1;
    }

    println!("{} leaf bisectors:", tessellation.bisector_count());
    for (depth, count) in census.iter().enumerate() {
        println!("  depth {depth}: {count}");
    }

    Ok(())
}
