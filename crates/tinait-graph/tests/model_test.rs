use tinait_graph::{Error, Graph, MAX_ORDER};

fn k4() -> Graph {
    Graph::from_edges(4, &[(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]).unwrap()
}

#[test]
fn adjacency_is_symmetric_for_every_construction_path() {
    let from_edges = Graph::from_edges(4, &[(3, 1), (2, 4)]).unwrap();
    let mut matrix = vec![false; 16];
    matrix[2] = true; // (1,3)
    matrix[8] = true; // (3,1)
    matrix[7] = true; // (2,4)
    matrix[13] = true; // (4,2)
    let from_matrix = Graph::from_matrix(4, matrix).unwrap();

    for g in [&from_edges, &from_matrix] {
        for v in 1..=4 {
            for w in 1..=4 {
                assert_eq!(g.adjacent(v, w), g.adjacent(w, v));
            }
        }
    }
    assert_eq!(from_edges, from_matrix);
}

#[test]
fn size_counts_each_edge_once() {
    let g = Graph::from_edges(5, &[(1, 2), (2, 1), (2, 3), (1, 2)]).unwrap();
    assert_eq!(g.size(), 2);
    assert_eq!(g.size(), g.edges().count());
    assert_eq!(k4().size(), 6);
}

#[test]
fn order_above_the_limit_is_rejected() {
    assert!(Graph::with_order(MAX_ORDER).is_ok());
    let err = Graph::with_order(MAX_ORDER + 1).unwrap_err();
    assert!(matches!(err, Error::TooManyVertices { order: 63 }));
    assert!(Graph::from_matrix(100, vec![false; 10_000]).is_err());
}

#[test]
fn out_of_range_edges_and_loops_are_rejected() {
    for edge in [(0, 1), (1, 4), (2, 2)] {
        let err = Graph::from_edges(3, &[edge]).unwrap_err();
        assert!(matches!(err, Error::IllegalEdge { .. }), "{edge:?}: {err}");
    }
}

#[test]
fn matrix_must_be_square_and_symmetric() {
    assert!(matches!(
        Graph::from_matrix(3, vec![false; 8]),
        Err(Error::MatrixShape { order: 3, len: 8 })
    ));
    let mut asymmetric = vec![false; 9];
    asymmetric[1] = true;
    assert!(matches!(
        Graph::from_matrix(3, asymmetric),
        Err(Error::IllegalEdge { v: 1, w: 2, .. })
    ));
}

#[test]
fn diagonal_of_a_matrix_is_ignored() {
    let g = Graph::from_matrix(2, vec![true, false, false, true]).unwrap();
    assert_eq!(g.size(), 0);
    assert!(!g.adjacent(1, 1));
}

#[test]
fn edges_are_listed_by_first_then_second_vertex() {
    let g = Graph::from_edges(4, &[(3, 4), (2, 1), (1, 4)]).unwrap();
    assert_eq!(g.edges().collect::<Vec<_>>(), vec![(1, 2), (1, 4), (3, 4)]);
    assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![2, 4]);
    assert_eq!(g.degree(4), 2);
    assert_eq!(g.to_string(), "{{1,2},{1,4},{3,4}}");
}

#[test]
fn complement_of_complete_graph_is_edgeless() {
    let c = k4().complement();
    assert_eq!(c.order(), 4);
    assert_eq!(c.size(), 0);
    assert_eq!(c.complement(), k4());
}

#[test]
fn cone_base_drops_the_first_universal_vertex() {
    // 2 is adjacent to everything; the rest is the path 1-3-4.
    let g = Graph::from_edges(4, &[(1, 2), (2, 3), (2, 4), (1, 3), (3, 4)]).unwrap();
    let base = g.cone_base().unwrap();
    assert_eq!(base.order(), 3);
    assert_eq!(base.to_string(), "{{1,2},{2,3}}");

    let path = Graph::from_edges(3, &[(1, 2), (2, 3)]).unwrap();
    assert_eq!(path.cone_base().unwrap().to_string(), "{}");
    let matching = Graph::from_edges(4, &[(1, 2), (3, 4)]).unwrap();
    assert!(matching.cone_base().is_none());
}
