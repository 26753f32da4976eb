//! Matrix SSSP - Dijkstra shortest paths over adjacency-matrix graphs
//!
//! Graphs are loaded from a semicolon-delimited adjacency matrix, where the header
//! row names the nodes and every data row lists the outgoing edge weights of one node.
//! Shortest paths are computed with a priority-queue driven Dijkstra and returned as a
//! side table, leaving the graph topology untouched.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{dijkstra::Dijkstra, path::PathDescription, ShortestPaths};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::matrix::{load_graph, parse_adjacency_matrix};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unable to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Node {0} is already registered")]
    DuplicateNode(String),

    #[error("Edge references unknown node {0}")]
    UnknownNode(String),

    #[error("Node {0} not found in graph")]
    NotFound(String),

    #[error("No connection from {start} to: {}", .unreached.join(", "))]
    Unreachable { start: String, unreached: Vec<String> },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Computes shortest paths from `start` with the default `u64` weights
pub fn compute_shortest_paths<'g>(
    graph: &'g DirectedGraph,
    start: &str,
) -> Result<ShortestPaths<'g, u64>> {
    Dijkstra::new().compute(graph, start)
}
