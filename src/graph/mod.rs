pub mod traits;
pub mod directed;
pub mod matrix;
pub mod generators;

pub use traits::{Graph, Weight};
pub use directed::{DirectedGraph, Edge};
