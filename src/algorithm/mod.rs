pub mod dijkstra;
pub mod path;

use crate::graph::{DirectedGraph, Graph, Weight};
use crate::{Error, Result};
use path::{Hop, PathDescription};

/// Final distance and predecessor of one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled<W> {
    pub distance: W,
    pub previous: Option<usize>,
}

/// Result of a shortest path computation.
///
/// Holds the per-node algorithm state as a side table next to the graph it was
/// computed on; the graph itself is never mutated. Every node of the graph is
/// settled, since a computation that leaves a node unreached fails instead.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g, W = u64>
where
    W: Weight,
{
    graph: &'g DirectedGraph<W>,
    source: usize,
    settled: Vec<Settled<W>>,
    /// Node indices in the order they were finalized
    order: Vec<usize>,
}

impl<'g, W> ShortestPaths<'g, W>
where
    W: Weight,
{
    pub(crate) fn new(
        graph: &'g DirectedGraph<W>,
        source: usize,
        settled: Vec<Settled<W>>,
        order: Vec<usize>,
    ) -> Self {
        ShortestPaths {
            graph,
            source,
            settled,
            order,
        }
    }

    /// The graph these paths were computed on
    pub fn graph(&self) -> &'g DirectedGraph<W> {
        self.graph
    }

    /// Id of the start node
    pub fn source(&self) -> &'g str {
        self.id(self.source)
    }

    /// Total distance from the start node to `id`
    pub fn distance(&self, id: &str) -> Result<W> {
        Ok(self.settled[self.lookup(id)?].distance)
    }

    /// Predecessor of `id` on its shortest path, `None` for the start node
    pub fn previous(&self, id: &str) -> Result<Option<&'g str>> {
        Ok(self.settled[self.lookup(id)?]
            .previous
            .map(|previous| self.id(previous)))
    }

    /// Whether the engine finalized `id` during the run
    pub fn is_visited(&self, id: &str) -> Result<bool> {
        let node = self.lookup(id)?;
        Ok(self.order.contains(&node))
    }

    /// Iterates over `(id, distance)` pairs in graph order
    pub fn distances(&self) -> impl Iterator<Item = (&'g str, W)> + '_ {
        self.graph
            .node_ids()
            .zip(self.settled.iter().map(|settled| settled.distance))
    }

    /// Node ids in the order the engine finalized them
    pub fn finalization_order(&self) -> impl Iterator<Item = &'g str> + '_ {
        self.order.iter().map(move |&node| self.id(node))
    }

    /// Reconstructs the shortest path from the start node to `id`
    pub fn path(&self, id: &str) -> Result<PathDescription<W>> {
        Ok(self.path_at(self.lookup(id)?))
    }

    /// Reconstructs the paths to every node, in graph order
    pub fn paths(&self) -> Vec<PathDescription<W>> {
        (0..self.settled.len()).map(|node| self.path_at(node)).collect()
    }

    /// One line per node: `<id>: is start node` for the start, the path otherwise
    pub fn render_paths(&self) -> Vec<String> {
        self.paths().iter().map(ToString::to_string).collect()
    }

    /// Diagnostic dump of the graph, with each node's computed total distance
    pub fn render_graph(&self) -> String {
        let mut out = String::new();
        for (node, settled) in self.settled.iter().enumerate() {
            // writing to a String cannot fail
            let _ = self.graph.fmt_node(&mut out, node, &settled.distance);
            out.push('\n');
        }
        out
    }

    fn path_at(&self, target: usize) -> PathDescription<W> {
        let mut hops = Vec::new();
        let mut current = target;

        // predecessor chains are acyclic and end at the start node, the only node without one
        while let Some(previous) = self.settled[current].previous {
            hops.push(Hop {
                from: self.id(previous).to_string(),
                weight: self.settled[current].distance - self.settled[previous].distance,
            });
            current = previous;
        }

        let target = self.id(target).to_string();
        if hops.is_empty() {
            return PathDescription::StartNode { id: target };
        }
        hops.reverse();
        PathDescription::Route { hops, target }
    }

    fn lookup(&self, id: &str) -> Result<usize> {
        self.graph
            .index_of(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn id(&self, node: usize) -> &'g str {
        self.graph.node_id(node).unwrap_or_default()
    }
}
