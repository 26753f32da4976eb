use std::fmt;

/// One step of a reconstructed path: the node left and the weight of the edge taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop<W> {
    pub from: String,
    pub weight: W,
}

/// Shortest path to a node, as reconstructed from the predecessor chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathDescription<W> {
    /// The node is the start node of the computation
    StartNode { id: String },
    /// The node is reached through `hops`, in order from the start node
    Route { hops: Vec<Hop<W>>, target: String },
}

impl<W> PathDescription<W> {
    /// Id of the node this path leads to
    pub fn target(&self) -> &str {
        match self {
            PathDescription::StartNode { id } => id,
            PathDescription::Route { target, .. } => target,
        }
    }

    pub fn is_start_node(&self) -> bool {
        matches!(self, PathDescription::StartNode { .. })
    }

    /// Every node on the path, start node first and target last
    pub fn node_ids(&self) -> Vec<&str> {
        match self {
            PathDescription::StartNode { id } => vec![id.as_str()],
            PathDescription::Route { hops, target } => hops
                .iter()
                .map(|hop| hop.from.as_str())
                .chain(std::iter::once(target.as_str()))
                .collect(),
        }
    }
}

/// Renders `A --(1)-> D --(1)-> C`, or `A: is start node` for the start node
impl<W: fmt::Display> fmt::Display for PathDescription<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathDescription::StartNode { id } => write!(f, "{}: is start node", id),
            PathDescription::Route { hops, target } => {
                for hop in hops {
                    write!(f, "{} --({})-> ", hop.from, hop.weight)?;
                }
                write!(f, "{}", target)
            }
        }
    }
}
