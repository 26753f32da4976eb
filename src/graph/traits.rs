use std::fmt::{Debug, Display};
use std::str::FromStr;
use num_traits::{PrimInt, Unsigned};

/// Numeric type usable as an edge weight.
///
/// Weights are unsigned integers, so a negative weight can never reach the engine
/// through the typed API.
pub trait Weight: PrimInt + Unsigned + Debug + Display + FromStr + Send + Sync + 'static {}

impl<T> Weight for T where T: PrimInt + Unsigned + Debug + Display + FromStr + Send + Sync + 'static {}

/// Trait representing a weighted directed graph with string-identified nodes
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the id of the node stored at `index`
    fn node_id(&self, index: usize) -> Option<&str>;

    /// Looks up the arena index of a node by its (case-sensitive) id
    fn index_of(&self, id: &str) -> Option<usize>;

    /// Returns an iterator over the outgoing edges from a node, in edge order
    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;
}
