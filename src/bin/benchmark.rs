use matrix_sssp::graph::generators::{generate_random_connected, node_name};
use matrix_sssp::graph::matrix::{parse_adjacency_matrix, to_adjacency_matrix};
use matrix_sssp::graph::{DirectedGraph, Graph};
use matrix_sssp::Dijkstra;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

// Edge factor: average number of random chords per node, on top of the ring
const EDGE_FACTOR: usize = 3;
const MAX_WEIGHT: u64 = 100;
const SEED: u64 = 42;

fn main() {
    env_logger::init();

    let graph_sizes = [100, 1_000, 10_000, 50_000, 100_000];

    println!("=====================================================");
    println!("Benchmark: matrix parsing and Dijkstra");
    println!("Edge factor: {} extra edges per node", EDGE_FACTOR);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(SEED);
    let dijkstra = Dijkstra::new();
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let graph = generate_random_connected(size, size * EDGE_FACTOR, MAX_WEIGHT, &mut rng);
        println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

        // The dense text form grows quadratically, so only small graphs go through it
        let parse_time = if size <= 1_000 {
            let text = to_adjacency_matrix(&graph);
            let start = Instant::now();
            match parse_adjacency_matrix::<u64>(&text) {
                Ok(_) => Some(start.elapsed()),
                Err(err) => {
                    println!("  - Parsing failed: {}", err);
                    None
                }
            }
        } else {
            None
        };

        let dijkstra_time = match time_dijkstra(&dijkstra, &graph) {
            Some(duration) => duration,
            None => continue,
        };

        results.push((size, graph.edge_count(), parse_time, dijkstra_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<12} | {:<14}", "Nodes", "Edges", "Parse (ms)", "Dijkstra (ms)");
    println!("-----------------------------------------------------");

    for (size, edges, parse_time, dijkstra_time) in &results {
        let parse = parse_time.map_or("-".to_string(), |d| format!("{:.2}", d.as_secs_f64() * 1000.0));
        println!(
            "{:<10} | {:<10} | {:<12} | {:<14.2}",
            size,
            edges,
            parse,
            dijkstra_time.as_secs_f64() * 1000.0
        );
    }
}

fn time_dijkstra(dijkstra: &Dijkstra, graph: &DirectedGraph<u64>) -> Option<Duration> {
    let start = Instant::now();
    match dijkstra.compute(graph, &node_name(0)) {
        Ok(paths) => {
            let duration = start.elapsed();
            let farthest = paths.distances().map(|(_, d)| d).max().unwrap_or(0);
            println!("  - Dijkstra finished in {:?}, farthest node at {}", duration, farthest);
            Some(duration)
        }
        Err(err) => {
            println!("  - Dijkstra failed: {}", err);
            None
        }
    }
}
