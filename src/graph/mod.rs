//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod stats;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use stats::GraphStats;
pub use traversal::{bfs_order, dfs_order, shortest_distance, shortest_path, TraversalOrder};
pub use undirected::Graph;
