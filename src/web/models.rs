use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::graph::{DirectedGraph, Graph};
use crate::ShortestPaths;

/// Represents a node of an uploaded graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: String,
    pub out_degree: usize,
}

/// Represents a directed edge of an uploaded graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    pub weight: u64,
}

/// Represents a complete graph for API clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

impl From<&DirectedGraph> for WebGraph {
    fn from(graph: &DirectedGraph) -> Self {
        let ids: Vec<&str> = graph.node_ids().collect();

        let nodes = ids
            .iter()
            .enumerate()
            .map(|(index, id)| WebNode {
                id: id.to_string(),
                out_degree: graph.edges(index).len(),
            })
            .collect();

        let mut links = Vec::new();
        for (index, source) in ids.iter().enumerate() {
            for edge in graph.edges(index) {
                links.push(WebEdge {
                    source: source.to_string(),
                    target: ids[edge.neighbour].to_string(),
                    weight: edge.weight,
                });
            }
        }

        WebGraph { nodes, links }
    }
}

/// Upload of an adjacency matrix
#[derive(Debug, Deserialize)]
pub struct CreateGraphRequest {
    pub matrix: String,
}

/// Parameters for a computation on a stored graph
#[derive(Debug, Deserialize)]
pub struct PathsRequest {
    pub start: String,
}

/// Parameters for a one-shot load and computation
#[derive(Debug, Deserialize)]
pub struct MatrixPathsRequest {
    pub matrix: String,
    pub start: String,
}

/// Shortest path result for a single node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodePath {
    pub id: String,
    pub distance: u64,
    pub previous: Option<String>,
    /// Rendered path, e.g. `A --(1)-> D --(1)-> C`
    pub path: String,
    /// Node ids along the path, start node first
    pub route: Vec<String>,
}

/// Response containing the results of one computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsResponse {
    pub execution_id: Uuid,
    pub start: String,
    pub execution_time_ms: f64,
    pub finalization_order: Vec<String>,
    pub nodes: Vec<NodePath>,
}

impl PathsResponse {
    pub fn new(paths: &ShortestPaths<'_, u64>, elapsed: Duration) -> Self {
        let nodes = paths
            .paths()
            .into_iter()
            .zip(paths.distances())
            .map(|(path, (id, distance))| NodePath {
                id: id.to_string(),
                distance,
                previous: paths.previous(id).ok().flatten().map(str::to_string),
                route: path.node_ids().into_iter().map(str::to_string).collect(),
                path: path.to_string(),
            })
            .collect();

        Self {
            execution_id: Uuid::new_v4(),
            start: paths.source().to_string(),
            execution_time_ms: elapsed.as_secs_f64() * 1000.0,
            finalization_order: paths.finalization_order().map(str::to_string).collect(),
            nodes,
        }
    }
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session holding an uploaded graph and its latest computation
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    #[serde(skip)]
    pub graph: DirectedGraph,
    pub node_ids: Vec<String>,
    pub edge_count: usize,
    /// Diagnostic dump of the graph, one line per node
    pub rendered: String,
    pub last_result: Option<PathsResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: DirectedGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            node_ids: graph.node_ids().map(str::to_string).collect(),
            edge_count: graph.edge_count(),
            rendered: graph.to_string(),
            graph,
            last_result: None,
            created_at: Utc::now(),
        }
    }
}
