use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Orders node ids case-insensitively, falling back to the exact id so that the
/// order stays total for ids differing only in case.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// A weighted edge to a neighbour, identified by its arena index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub neighbour: usize,
    pub weight: W,
}

#[derive(Debug, Clone)]
struct Node<W> {
    id: String,
    /// Kept sorted by neighbour id (see [`compare_ids`]); parallel edges keep insertion order
    edges: Vec<Edge<W>>,
}

/// A directed graph stored as an arena of nodes with per-node edge lists.
///
/// Node indices are assigned in insertion order and never change. Edges refer to
/// their neighbour by index, so the topology holds no ownership cycles.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W = u64>
where
    W: Weight,
{
    nodes: Vec<Node<W>>,
    index: HashMap<String, usize>,
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
        }
    }

    /// Registers a new node and returns its index
    pub fn add_node(&mut self, id: impl Into<String>) -> Result<usize> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(Error::DuplicateNode(id));
        }

        Ok(self.push_node(id))
    }

    /// Registers a node whose id the caller knows to be unused
    pub(crate) fn push_node(&mut self, id: String) -> usize {
        debug_assert!(!self.index.contains_key(&id), "node {id:?} already exists");
        let new_index = self.nodes.len();
        self.index.insert(id.clone(), new_index);
        self.nodes.push(Node {
            id,
            edges: Vec::new(),
        });
        new_index
    }

    /// Adds a directed edge between two registered nodes
    pub fn add_edge(&mut self, from: &str, to: &str, weight: W) -> Result<()> {
        let from = self
            .index_of(from)
            .ok_or_else(|| Error::UnknownNode(from.to_string()))?;
        let to = self
            .index_of(to)
            .ok_or_else(|| Error::UnknownNode(to.to_string()))?;
        self.add_edge_by_index(from, to, weight);
        Ok(())
    }

    /// Adds a directed edge between two node indices that are known to exist
    pub(crate) fn add_edge_by_index(&mut self, from: usize, to: usize, weight: W) {
        let target_id = self.nodes[to].id.as_str();
        let nodes = &self.nodes;
        let edges = &nodes[from].edges;
        let position = edges.partition_point(|edge| {
            compare_ids(&nodes[edge.neighbour].id, target_id) != Ordering::Greater
        });

        self.nodes[from].edges.insert(
            position,
            Edge {
                neighbour: to,
                weight,
            },
        );
    }

    /// Returns the outgoing edges of a node in neighbour order
    pub fn edges(&self, node: usize) -> &[Edge<W>] {
        self.nodes
            .get(node)
            .map(|n| n.edges.as_slice())
            .unwrap_or(&[])
    }

    /// Iterates over node ids in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|node| node.id.as_str())
    }

    /// Returns true if there's at least one edge between the two nodes
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edges(from).iter().any(|edge| edge.neighbour == to)
    }

    /// Gets the lightest weight among the edges from `from` to `to`
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.edges(from)
            .iter()
            .filter(|edge| edge.neighbour == to)
            .map(|edge| edge.weight)
            .min()
    }

    /// Fails with the first node (in insertion order) that has no outgoing edge
    pub fn validate_out_degree(&self) -> Result<()> {
        match self.nodes.iter().find(|node| node.edges.is_empty()) {
            Some(node) => Err(Error::MalformedInput(format!(
                "No edges for node {}",
                node.id
            ))),
            None => Ok(()),
        }
    }

    /// Writes the diagnostic line of one node, using `distance` as its total distance
    pub(crate) fn fmt_node(
        &self,
        f: &mut impl fmt::Write,
        node: usize,
        distance: &dyn fmt::Display,
    ) -> fmt::Result {
        let node = &self.nodes[node];
        write!(f, "{} [totalDistance: {}]", node.id, distance)?;
        for (i, edge) in node.edges.iter().enumerate() {
            let separator = if i == 0 { " " } else { ", " };
            write!(
                f,
                "{}{}:{}",
                separator, self.nodes[edge.neighbour].id, edge.weight
            )?;
        }
        Ok(())
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    fn node_id(&self, index: usize) -> Option<&str> {
        self.nodes.get(index).map(|node| node.id.as_str())
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.edges(node).iter().map(|edge| (edge.neighbour, edge.weight)))
    }
}

/// Diagnostic dump before any computation: every node reports a total distance of 0
impl<W> fmt::Display for DirectedGraph<W>
where
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in 0..self.nodes.len() {
            self.fmt_node(f, node, &0)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
