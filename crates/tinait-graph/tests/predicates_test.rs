use tinait_graph::Graph;
use tinait_graph::alg::{
    is_chordal, is_clawfree, is_cograph, is_cone, is_connected, is_euler,
    is_perfect_elimination_ordering, lexicographic_ordering,
};
use tinait_graph::codec::list;

fn graph(order: usize, edges: &[(usize, usize)]) -> Graph {
    Graph::from_edges(order, edges).unwrap()
}

/// `[chordal, cograph, claw-free, euler]`
fn profile(g: &Graph) -> [bool; 4] {
    [is_chordal(g), is_cograph(g), is_clawfree(g), is_euler(g)]
}

#[test]
fn connectivity() {
    assert!(is_connected(&Graph::new()));
    assert!(is_connected(&graph(1, &[])));
    assert!(!is_connected(&graph(2, &[])));
    assert!(is_connected(&graph(4, &[(1, 4), (4, 2), (2, 3)])));
    assert!(!is_connected(&graph(4, &[(1, 2), (3, 4)])));
}

#[test]
fn cographs_have_no_induced_p4() {
    assert!(!is_cograph(&graph(4, &[(1, 2), (2, 3), (3, 4)])));
    assert!(is_cograph(&graph(4, &[(1, 2), (2, 3), (3, 4), (1, 4)])));
    // P4 hidden inside a 5-vertex graph.
    assert!(!is_cograph(&graph(5, &[(1, 5), (5, 3), (3, 2)])));
    assert!(is_cograph(&graph(3, &[(1, 2), (2, 3)])));
}

#[test]
fn euler_means_all_degrees_even() {
    assert!(is_euler(&graph(3, &[(1, 2), (2, 3), (1, 3)])));
    assert!(!is_euler(&graph(3, &[(1, 2), (2, 3)])));
    assert!(is_euler(&graph(2, &[])));
}

#[test]
fn claw_detection() {
    assert!(!is_clawfree(&graph(4, &[(1, 2), (1, 3), (1, 4)])));
    assert!(is_clawfree(&graph(3, &[(1, 2), (1, 3), (2, 3)])));
    // Adding an edge between two leaves breaks the claw.
    assert!(is_clawfree(&graph(4, &[(1, 2), (1, 3), (1, 4), (2, 3)])));
}

#[test]
fn cones_have_a_universal_vertex() {
    assert!(is_cone(&graph(4, &[(1, 3), (2, 3), (3, 4)])));
    assert!(!is_cone(&graph(4, &[(1, 2), (2, 3), (3, 4)])));
    assert!(is_cone(&graph(1, &[])));
    assert!(!is_cone(&Graph::new()));
}

#[test]
fn chordality() {
    let c4 = graph(4, &[(1, 2), (2, 3), (3, 4), (1, 4)]);
    assert!(!is_chordal(&c4));

    let tree = graph(7, &[(1, 2), (1, 3), (2, 4), (2, 5), (3, 6), (6, 7)]);
    assert!(is_chordal(&tree));

    // C4 plus a chord.
    let chorded_c4 = graph(4, &[(1, 2), (2, 3), (3, 4), (1, 4), (1, 3)]);
    assert!(is_chordal(&chorded_c4));
    // C5 with one chord still has an induced C4.
    let chorded_c5 = graph(5, &[(1, 2), (2, 3), (3, 4), (4, 5), (1, 5), (1, 3)]);
    assert!(!is_chordal(&chorded_c5));
}

#[test]
fn lexicographic_ordering_certifies_chordal_graphs() {
    let g = list::decode("6 {1,2},{1,3},{2,3},{3,4},{2,4},{4,5},{5,6},{4,6}").unwrap();
    let ordering = lexicographic_ordering(&g);
    assert_eq!(ordering.len(), 6);
    assert_eq!(ordering.sequence()[0], 1);
    assert!(is_perfect_elimination_ordering(&g, &ordering));
}

#[test]
fn predicates_are_repeatable() {
    let g = graph(5, &[(1, 2), (2, 3), (3, 4), (4, 5), (1, 5)]);
    let first = profile(&g);
    for _ in 0..3 {
        assert_eq!(first, profile(&g));
    }
    assert_eq!(first, [false, false, true, true]);
}
