use matrix_sssp::graph::matrix::to_adjacency_matrix;
use matrix_sssp::graph::{DirectedGraph, Graph};
use matrix_sssp::{load_graph, parse_adjacency_matrix, Error};

fn fixture(name: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn load_fixture(name: &str) -> matrix_sssp::Result<DirectedGraph> {
    load_graph(fixture(name))
}

#[test]
fn test_graph_dump_lists_every_node() {
    let graph = load_fixture("graph_a_h.csv").unwrap();

    assert_eq!(
        graph.to_string(),
        "A [totalDistance: 0] B:1, C:3, D:1\n\
         B [totalDistance: 0] A:1, E:3, F:3\n\
         C [totalDistance: 0] A:3, D:1, G:1\n\
         D [totalDistance: 0] A:1, C:1, E:1, G:2\n\
         E [totalDistance: 0] B:3, D:1, F:1, H:5\n\
         F [totalDistance: 0] B:3, E:1, H:1\n\
         G [totalDistance: 0] C:1, D:2, H:1\n\
         H [totalDistance: 0] E:5, F:1, G:1\n"
    );
    assert_eq!(graph.node_count(), 8);
    assert_eq!(graph.edge_count(), 26);
}

#[test]
fn test_neighbours_are_ordered_case_insensitively() {
    let graph = load_fixture("graph_with_names.csv").unwrap();

    let lines: Vec<String> = graph.to_string().lines().map(str::to_string).collect();
    assert_eq!(lines[0], "Barthhal [totalDistance: 0] aldbury:4, Cedarfield:4");
    assert_eq!(lines[4], "Eastmoor [totalDistance: 0] Cedarfield:3, dornwick:1");
}

#[test]
fn test_node_order_follows_header() {
    let graph = load_fixture("graph_with_names.csv").unwrap();
    let ids: Vec<&str> = graph.node_ids().collect();
    assert_eq!(ids, vec!["Barthhal", "aldbury", "Cedarfield", "dornwick", "Eastmoor"]);
}

#[test]
fn test_broken_matrices_are_malformed() {
    for name in [
        "broken_row_width.csv",
        "broken_unknown_row.csv",
        "broken_missing_row.csv",
        "broken_weight.csv",
        "broken_negative_weight.csv",
    ] {
        match load_fixture(name) {
            Err(Error::MalformedInput(_)) => {}
            other => panic!("{} should be malformed, got {:?}", name, other),
        }
    }
}

#[test]
fn test_error_messages_point_at_the_problem() {
    let err = load_fixture("broken_row_width.csv").unwrap_err();
    assert!(err.to_string().contains("line 3"), "{}", err);

    let err = load_fixture("broken_unknown_row.csv").unwrap_err();
    assert!(err.to_string().contains("cannot find node X"), "{}", err);

    let err = load_fixture("broken_missing_row.csv").unwrap_err();
    assert!(err.to_string().contains("No edges for node H"), "{}", err);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = load_fixture("does/not/exist.csv");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_writer_keeps_topology() {
    let graph = load_fixture("graph_a_h.csv").unwrap();
    let reparsed: DirectedGraph = parse_adjacency_matrix(&to_adjacency_matrix(&graph)).unwrap();
    assert_eq!(reparsed.to_string(), graph.to_string());
}

#[test]
fn test_smaller_weight_types() {
    let graph: DirectedGraph<u8> = load_graph(fixture("graph_a_h.csv")).unwrap();
    assert_eq!(graph.edge_weight(4, 7), Some(5));

    let err = parse_adjacency_matrix::<u8>(";A;B\nA;;300\nB;1;\n").unwrap_err();
    assert!(matches!(err, Error::MalformedInput(msg) if msg.contains("invalid edge weight 300")));
}
