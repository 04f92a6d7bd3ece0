//! adjgraph — in-memory undirected graph.
//!
//! Nodes hold a caller-defined value and an adjacency set; the graph stores
//! them, tracks which are vertices, keeps every edge mirrored on both ends and
//! answers depth-first, breadth-first and shortest-path queries.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    bfs_order, dfs_order, shortest_distance, shortest_path, Graph, GraphBuilder, GraphStats,
    TraversalOrder,
};
pub use types::{GraphError, GraphResult, Node, NodeId, DEFAULT_CAPACITY, MAX_NODES};
