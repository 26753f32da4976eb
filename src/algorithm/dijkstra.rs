use std::cmp::Ordering;

use crate::algorithm::{Settled, ShortestPaths};
use crate::data_structures::NodeQueue;
use crate::graph::directed::compare_ids;
use crate::graph::{DirectedGraph, Graph, Weight};
use crate::{Error, Result};

/// Per-node state during one computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeState<W> {
    Unvisited,
    Discovered { distance: W, previous: Option<usize> },
    Finalized { distance: W, previous: Option<usize> },
}

/// Classic Dijkstra's algorithm over non-negative integer weights
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes the shortest paths from the node `start` to every node of `graph`.
    ///
    /// Fails with [`Error::NotFound`] if `start` is not a node of the graph and
    /// with [`Error::Unreachable`], listing the offending ids, if some node cannot
    /// be reached from it. All state lives in this call, so repeated computations
    /// on the same graph are independent of each other.
    pub fn compute<'g, W: Weight>(
        &self,
        graph: &'g DirectedGraph<W>,
        start: &str,
    ) -> Result<ShortestPaths<'g, W>> {
        let source = graph
            .index_of(start)
            .ok_or_else(|| Error::NotFound(start.to_string()))?;

        let n = graph.node_count();
        log::debug!("Running Dijkstra from {} over {} nodes", start, n);

        let mut states = vec![NodeState::Unvisited; n];
        let mut order = Vec::with_capacity(n);
        let mut stale_entries = 0usize;

        states[source] = NodeState::Discovered {
            distance: W::zero(),
            previous: None,
        };
        let mut queue = NodeQueue::new(tie_break_ranks(graph));
        queue.push(source, W::zero());

        while let Some(entry) = queue.pop() {
            let node = entry.node;

            // An entry is only live while it carries the node's current tentative
            // distance. Finalized nodes and nodes improved after this entry was
            // queued have a fresher entry that already surfaced or will surface first.
            let (distance, previous) = match states[node] {
                NodeState::Discovered { distance, previous } if distance == entry.priority => {
                    (distance, previous)
                }
                _ => {
                    stale_entries += 1;
                    log::trace!("Skipping stale queue entry for {:?}", graph.node_id(node));
                    continue;
                }
            };

            states[node] = NodeState::Finalized { distance, previous };
            order.push(node);

            for edge in graph.edges(node) {
                let current = match states[edge.neighbour] {
                    NodeState::Finalized { .. } => continue,
                    NodeState::Discovered { distance, .. } => Some(distance),
                    NodeState::Unvisited => None,
                };

                let candidate = distance.checked_add(&edge.weight).ok_or_else(|| {
                    Error::MalformedInput(format!(
                        "distance overflow on edge {:?} -> {:?}",
                        graph.node_id(node),
                        graph.node_id(edge.neighbour)
                    ))
                })?;

                if current.map_or(false, |current| candidate >= current) {
                    continue;
                }
                states[edge.neighbour] = NodeState::Discovered {
                    distance: candidate,
                    previous: Some(node),
                };
                queue.push(edge.neighbour, candidate);
            }
        }

        let mut settled = Vec::with_capacity(n);
        let mut unreached = Vec::new();
        for (node, state) in states.into_iter().enumerate() {
            match state {
                NodeState::Finalized { distance, previous } => {
                    settled.push(Settled { distance, previous })
                }
                _ => unreached.push(graph.node_id(node).unwrap_or_default().to_string()),
            }
        }

        if !unreached.is_empty() {
            log::warn!(
                "{} of {} nodes unreachable from {}",
                unreached.len(),
                n,
                start
            );
            return Err(Error::Unreachable {
                start: start.to_string(),
                unreached,
            });
        }

        log::debug!(
            "Dijkstra from {} finalized {} nodes, skipped {} stale entries",
            start,
            order.len(),
            stale_entries
        );
        Ok(ShortestPaths::new(graph, source, settled, order))
    }
}

/// Ranks every node by the case-insensitive order of its id
fn tie_break_ranks<W: Weight>(graph: &DirectedGraph<W>) -> Vec<usize> {
    let ids: Vec<&str> = graph.node_ids().collect();
    let mut by_id: Vec<usize> = (0..ids.len()).collect();
    by_id.sort_by(|&a, &b| match compare_ids(ids[a], ids[b]) {
        Ordering::Equal => a.cmp(&b),
        other => other,
    });

    let mut ranks = vec![0; ids.len()];
    for (rank, node) in by_id.into_iter().enumerate() {
        ranks[node] = rank;
    }
    ranks
}
