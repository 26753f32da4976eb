use crate::graph::{DirectedGraph, Weight};
use rand::prelude::*;

/// Id given to the `index`-th generated node
pub fn node_name(index: usize) -> String {
    format!("n{}", index)
}

/// Generates a strongly connected random graph with `n` nodes.
///
/// A directed ring `n0 -> n1 -> ... -> n0` guarantees that every node is reachable
/// from every other node and that no node ends up without an outgoing edge; on top
/// of that `extra_edges` random chords are added. Weights are drawn from
/// `1..=max_weight`.
pub fn generate_random_connected<R: Rng + ?Sized>(
    n: usize,
    extra_edges: usize,
    max_weight: u64,
    rng: &mut R,
) -> DirectedGraph<u64> {
    assert!(n > 0, "n must be positive");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = DirectedGraph::with_capacity(n);
    for i in 0..n {
        graph.push_node(node_name(i));
    }

    for i in 0..n {
        let weight = rng.gen_range(1..=max_weight);
        graph.add_edge_by_index(i, (i + 1) % n, weight);
    }

    for _ in 0..extra_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = rng.gen_range(1..=max_weight);
            graph.add_edge_by_index(u, v, weight);
        }
    }

    graph
}

/// Generates an undirected grid of `width * height` nodes with unit weights,
/// stored as pairs of opposite directed edges
pub fn generate_grid<W: Weight>(width: usize, height: usize) -> DirectedGraph<W> {
    assert!(width * height > 1, "grid needs at least two nodes");

    let mut graph = DirectedGraph::with_capacity(width * height);
    for i in 0..width * height {
        graph.push_node(node_name(i));
    }

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                graph.add_edge_by_index(current, current + 1, W::one());
                graph.add_edge_by_index(current + 1, current, W::one());
            }
            if y + 1 < height {
                graph.add_edge_by_index(current, current + width, W::one());
                graph.add_edge_by_index(current + width, current, W::one());
            }
        }
    }

    graph
}

/// Splits the nodes into two disjoint rings, `a*` and `b*`, with no edge between them
pub fn generate_two_components(size: usize) -> DirectedGraph<u64> {
    assert!(size > 1, "each component needs at least two nodes");

    let mut graph = DirectedGraph::with_capacity(size * 2);
    for prefix in ["a", "b"] {
        let base = graph.push_node(format!("{prefix}0"));
        for i in 1..size {
            graph.push_node(format!("{prefix}{i}"));
        }
        for i in 0..size {
            graph.add_edge_by_index(base + i, base + (i + 1) % size, 1);
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_random_graph_names_every_node() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = generate_random_connected(5, 10, 9, &mut rng);

        let ids: Vec<&str> = graph.node_ids().collect();
        assert_eq!(ids, vec!["n0", "n1", "n2", "n3", "n4"]);
        assert_eq!(graph.index_of("n4"), Some(4));
        assert!(graph.validate_out_degree().is_ok());
    }

    #[test]
    fn test_grid_and_components_layout() {
        let grid: DirectedGraph<u32> = generate_grid(3, 2);
        assert_eq!(grid.node_count(), 6);
        assert_eq!(grid.edge_count(), 14);
        assert_eq!(grid.edge_weight(0, 3), Some(1));

        let graph = generate_two_components(3);
        let ids: Vec<&str> = graph.node_ids().collect();
        assert_eq!(ids, vec!["a0", "a1", "a2", "b0", "b1", "b2"]);
        assert!(graph.has_edge(5, 3));
        assert!(!graph.has_edge(2, 3));
    }
}
