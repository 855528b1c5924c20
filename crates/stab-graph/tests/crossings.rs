use std::collections::BTreeMap;

use proptest::prelude::*;
use stab_graph::{edges, intersecting_edges, Edge, EdgePair, Point};
use stab_pcm::BinaryMatrix;

fn adjacency(n: usize, edge_list: &[(usize, usize)]) -> BinaryMatrix {
    let mut m = BinaryMatrix::zeros(n, n);
    for &(u, v) in edge_list {
        m.set(u, v, 1);
        m.set(v, u, 1);
    }
    m
}

fn square() -> BTreeMap<usize, Point> {
    BTreeMap::from([
        (0, Point::new(0.0, 0.0)),
        (1, Point::new(1.0, 0.0)),
        (2, Point::new(1.0, 1.0)),
        (3, Point::new(0.0, 1.0)),
    ])
}

#[test]
fn four_cycle_with_both_diagonals_has_one_crossing() {
    let adj = adjacency(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (1, 3)]);
    let crossings = intersecting_edges(&adj, &square()).unwrap();
    assert_eq!(crossings.len(), 1);
    let expected = EdgePair::new(Edge::new(0, 2), Edge::new(1, 3));
    assert!(crossings.contains(&expected));
}

#[test]
fn plain_four_cycle_has_no_crossings() {
    let adj = adjacency(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    assert!(intersecting_edges(&adj, &square()).unwrap().is_empty());
}

#[test]
fn edges_are_listed_upper_triangle() {
    let adj = adjacency(3, &[(2, 0), (1, 2)]);
    assert_eq!(edges(&adj).unwrap(), vec![Edge::new(0, 2), Edge::new(1, 2)]);
}

#[test]
fn invalid_inputs_are_rejected() {
    let mut asym = BinaryMatrix::zeros(2, 2);
    asym.set(0, 1, 1);
    assert_eq!(edges(&asym).unwrap_err().code(), "adjacency-not-symmetric");

    let adj = adjacency(4, &[(0, 1)]);
    let positions = BTreeMap::from([(0, Point::new(0.0, 0.0))]);
    assert_eq!(
        intersecting_edges(&adj, &positions).unwrap_err().code(),
        "missing-position"
    );
}

proptest! {
    #[test]
    fn star_layouts_never_cross(leaves in 1usize..12, radius in 0.5f64..10.0) {
        let n = leaves + 1;
        let edge_list: Vec<_> = (1..n).map(|leaf| (0, leaf)).collect();
        let adj = adjacency(n, &edge_list);
        let mut positions = BTreeMap::from([(0, Point::new(0.0, 0.0))]);
        for leaf in 1..n {
            let angle = std::f64::consts::TAU * leaf as f64 / leaves as f64;
            positions.insert(leaf, Point::new(radius * angle.cos(), radius * angle.sin()));
        }
        prop_assert!(intersecting_edges(&adj, &positions).unwrap().is_empty());
    }
}
