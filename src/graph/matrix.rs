//! Reader and writer for the semicolon-delimited adjacency-matrix format.
//!
//! ```text
//! ;A;B;C
//! A;;1;3
//! B;1;;
//! C;3;;
//! ```
//!
//! The header row starts with `;` and names the nodes, which also fixes the column
//! order. Every data row starts with a node id followed by one cell per header node;
//! a non-empty cell is the weight of the edge from the row node to the column node.

use crate::graph::directed::DirectedGraph;
use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Loads a graph from an adjacency-matrix file
pub fn load_graph<W: Weight>(path: impl AsRef<Path>) -> Result<DirectedGraph<W>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    log::debug!("Reading adjacency matrix from {}", path.display());
    read_adjacency_matrix(BufReader::new(file))
}

/// Parses a graph from adjacency-matrix text held in memory
pub fn parse_adjacency_matrix<W: Weight>(input: &str) -> Result<DirectedGraph<W>> {
    read_adjacency_matrix(input.as_bytes())
}

/// Parses a graph from any buffered reader.
///
/// Blank lines are skipped and a trailing `\r` is stripped from every line. The
/// resulting graph is only returned once every node has at least one outgoing edge.
pub fn read_adjacency_matrix<W: Weight, R: BufRead>(reader: R) -> Result<DirectedGraph<W>> {
    let mut graph: Option<DirectedGraph<W>> = None;

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        let number = number + 1;

        if line.trim().is_empty() {
            continue;
        }

        if line.starts_with(';') {
            if graph.is_some() {
                return Err(malformed(number, "unexpected second header line".to_string()));
            }
            graph = Some(parse_header(number, line)?);
            continue;
        }

        let current = graph
            .as_mut()
            .ok_or_else(|| malformed(number, "data row before the header line".to_string()))?;
        parse_row(current, number, line)?;
    }

    let graph = graph.ok_or_else(|| Error::MalformedInput("missing header line".to_string()))?;
    graph.validate_out_degree()?;

    log::info!(
        "Loaded adjacency matrix with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn parse_header<W: Weight>(number: usize, line: &str) -> Result<DirectedGraph<W>> {
    let ids: Vec<&str> = line.split(';').filter(|id| !id.is_empty()).collect();
    if ids.is_empty() {
        return Err(malformed(number, "header names no nodes".to_string()));
    }

    let mut graph = DirectedGraph::with_capacity(ids.len());
    for id in ids {
        graph
            .add_node(id)
            .map_err(|_| malformed(number, format!("duplicate node id {id} in header")))?;
    }
    Ok(graph)
}

fn parse_row<W: Weight>(graph: &mut DirectedGraph<W>, number: usize, line: &str) -> Result<()> {
    let fields: Vec<&str> = line.split(';').collect();
    let expected = graph.node_count() + 1;
    if fields.len() != expected {
        return Err(malformed(
            number,
            format!("expected {} fields, found {}: {line}", expected, fields.len()),
        ));
    }

    let row_id = fields[0];
    let row = graph
        .index_of(row_id)
        .ok_or_else(|| malformed(number, format!("cannot find node {row_id} for row: {line}")))?;

    for (column, cell) in fields[1..].iter().enumerate() {
        let cell = cell.trim();
        if cell.is_empty() {
            continue;
        }
        let weight = parse_weight::<W>(cell).map_err(|reason| malformed(number, reason))?;
        graph.add_edge_by_index(row, column, weight);
    }
    Ok(())
}

fn parse_weight<W: Weight>(cell: &str) -> std::result::Result<W, String> {
    W::from_str(cell).map_err(|_| {
        if cell.starts_with('-') {
            format!("negative edge weight {cell}")
        } else {
            format!("invalid edge weight {cell}")
        }
    })
}

fn malformed(line: usize, reason: String) -> Error {
    Error::MalformedInput(format!("line {line}: {reason}"))
}

/// Serializes a graph back into the adjacency-matrix format.
///
/// A cell can only hold one weight, so parallel edges collapse to the lightest one.
pub fn to_adjacency_matrix<W: Weight>(graph: &DirectedGraph<W>) -> String {
    let mut out = String::new();
    for id in graph.node_ids() {
        out.push(';');
        out.push_str(id);
    }
    out.push('\n');

    for (row, id) in graph.node_ids().enumerate() {
        out.push_str(id);
        for column in 0..graph.node_count() {
            out.push(';');
            if let Some(weight) = graph.edge_weight(row, column) {
                out.push_str(&weight.to_string());
            }
        }
        out.push('\n');
    }
    out
}

impl<W: Weight> FromStr for DirectedGraph<W> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_adjacency_matrix(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_width_must_match_header() {
        let err = parse_adjacency_matrix::<u64>(";A;B\nA;;1\nB;1\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput(msg) if msg.starts_with("line 3")));
    }

    #[test]
    fn test_negative_weight_is_named() {
        let err = parse_adjacency_matrix::<u64>(";A;B\nA;;-1\nB;1;\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput(msg) if msg.contains("negative edge weight -1")));
    }

    #[test]
    fn test_blank_lines_and_crlf_are_tolerated() {
        let graph: DirectedGraph = parse_adjacency_matrix(";A;B\r\n\r\nA;;2\r\nB;3;\r\n\n").unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_weight(0, 1), Some(2));
        assert_eq!(graph.edge_weight(1, 0), Some(3));
    }

    #[test]
    fn test_header_problems() {
        assert!(matches!(
            parse_adjacency_matrix::<u64>(""),
            Err(Error::MalformedInput(msg)) if msg == "missing header line"
        ));
        assert!(parse_adjacency_matrix::<u64>(";\n").is_err());
        assert!(parse_adjacency_matrix::<u64>(";A;A\nA;1;\n").is_err());
        assert!(parse_adjacency_matrix::<u64>("A;;1\n;A;B\n").is_err());
        assert!(parse_adjacency_matrix::<u64>(";A;B\nA;;1\n;A;B\nB;1;\n").is_err());
    }

    #[test]
    fn test_writer_output_parses_back() {
        let input = ";A;B;C\nA;;1;3\nB;1;;\nC;3;;\n";
        let graph: DirectedGraph = input.parse().unwrap();
        assert_eq!(to_adjacency_matrix(&graph), input);
    }
}
