//! Summary counts for a graph.

use serde::Serialize;

/// Shape of a graph at a point in time, from [`Graph::stats`](super::Graph::stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Current vertices.
    pub vertices: usize,
    /// Stored nodes, including ones never added or already removed.
    pub stored: usize,
    /// Undirected edges among stored nodes. A self-loop counts once.
    pub edges: usize,
    /// Stored nodes linked to themselves.
    pub self_loops: usize,
    /// Vertices with no neighbors.
    pub isolated: usize,
    /// Largest vertex degree, 0 for an empty graph.
    pub max_degree: usize,
}
