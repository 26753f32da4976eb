use matrix_sssp::{compute_shortest_paths, load_graph, DirectedGraph};
use std::env;
use std::process::ExitCode;

const USAGE: &str = "usage: shortest_paths <matrix-file> <start-node> [--graph]";

fn run(file: &str, start: &str, show_graph: bool) -> matrix_sssp::Result<()> {
    let graph: DirectedGraph = load_graph(file)?;
    let paths = compute_shortest_paths(&graph, start)?;

    if show_graph {
        print!("{}", paths.render_graph());
        println!();
    }

    for line in paths.render_paths() {
        println!("{}", line);
    }
    Ok(())
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let show_graph = args.iter().any(|arg| arg == "--graph");
    let positional: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|arg| *arg != "--graph")
        .collect();

    let [file, start] = positional.as_slice() else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    match run(file, start, show_graph) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
