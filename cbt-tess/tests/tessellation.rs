//! End-to-end tests for the tessellation core.

use cbt_tess::tess::{
    decode_halfedges, decode_neighbors, maximum_bisector_depth, minimum_tree_depth, Bisector,
    Tessellation,
};
use cbt_tess::{Cage, SubdivisionSurface};

/// The four triangles of a tetrahedron; 12 half-edges, closed.
fn tetrahedron() -> Cage {
    Cage::from_triangles(4, &[[2, 1, 0], [3, 2, 0], [1, 3, 0], [2, 3, 1]]).expect("valid cage")
}

#[test]
fn padding_and_active_count() {
    // Two triangles: 6 half-edges round up to 8 tree leaves.
    let cage = Cage::from_triangles(4, &[[0, 1, 2], [2, 1, 3]]).expect("valid cage");
    assert_eq!(minimum_tree_depth(&cage), 3);

    let surface = SubdivisionSurface::new(cage, 1).expect("valid depth");
    let tessellation = Tessellation::new(&surface).expect("tree fits");

    // 8 tree leaves, 2 of which are padding.
    assert_eq!(tessellation.tree().node_count(), 8);
    assert_eq!(tessellation.bisector_count(), 6);
    assert_eq!(tessellation.bisectors().count(), 6);
}

#[test]
fn depth_law_sizes_the_tree() {
    for max_depth in 1..6 {
        assert_eq!(maximum_bisector_depth(max_depth), 2 * max_depth - 1);

        let surface = SubdivisionSurface::new(tetrahedron(), max_depth).expect("valid depth");
        let tessellation = Tessellation::new(&surface).expect("tree fits");
        // 12 half-edges round up to 16: minimum depth 4.
        assert_eq!(tessellation.tree().max_depth(), 4 + 2 * max_depth - 1);
    }
}

#[test]
fn bisector_node_round_trip() {
    let surface = SubdivisionSurface::new(tetrahedron(), 2).expect("valid depth");
    let cage = surface.cage().clone();
    let mut tessellation = Tessellation::new(&surface).expect("tree fits");

    tessellation.split(&cage, Bisector::new(3, 0));
    tessellation.split(&cage, Bisector::new(6, 1));

    let minimum_depth = tessellation.minimum_depth();
    for node in tessellation.tree().leaves() {
        let bisector = Bisector::from_node(node, minimum_depth);
        assert_eq!(bisector.node(minimum_depth), node);
    }
}

#[test]
fn root_neighbors_are_the_cage_adjacency() {
    let cage = tetrahedron();
    for halfedge in 0..cage.halfedge_count() as i32 {
        let ids = decode_neighbors(Bisector::new(halfedge, 0), &cage);
        assert_eq!(ids.n0(), cage.twin(halfedge));
        assert_eq!(ids.n1(), cage.next(halfedge));
        assert_eq!(ids.n2(), cage.prev(halfedge));
    }
}

#[test]
fn decoded_halfedges_track_refinement_levels() {
    let surface = SubdivisionSurface::new(tetrahedron(), 2).expect("valid depth");
    let cage = surface.cage().clone();
    let mut tessellation = Tessellation::new(&surface).expect("tree fits");

    for _ in 0..2 {
        let frontier: Vec<Bisector> = tessellation.bisectors().collect();
        for bisector in frontier {
            tessellation.split(&cage, bisector);
        }
    }

    // After two uniform splits every leaf sits one full quad level below the
    // roots: identifiers are quad-slot aligned (low bit clear) and the root
    // half-edge is recoverable from the high bits.
    for bisector in tessellation.bisectors() {
        assert_eq!(bisector.depth, 2);
        let ids = decode_halfedges(bisector, &cage);
        for slot in 0..3 {
            assert_eq!(ids[slot] & 1, 0);
        }
        assert!(bisector.root_halfedge() < cage.halfedge_count() as i32);
    }
}

#[test]
fn conservative_split_reaches_every_root_once() {
    // Splitting one root bisector of a closed cage splits exactly one
    // partner: the two triangles sharing the cage edge.
    let surface = SubdivisionSurface::new(tetrahedron(), 1).expect("valid depth");
    let cage = surface.cage().clone();
    let mut tessellation = Tessellation::new(&surface).expect("tree fits");

    tessellation.split(&cage, Bisector::new(0, 0));

    let twin = cage.twin(0);
    let split_roots: Vec<i32> = (0..cage.halfedge_count() as i32)
        .filter(|&halfedge| !tessellation.is_leaf(Bisector::new(halfedge, 0)))
        .collect();
    assert_eq!(split_roots, {
        let mut expected = vec![0, twin];
        expected.sort_unstable();
        expected
    });
}
