//! All data types for the adjgraph library.

pub mod error;
pub mod node;

pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};

/// Node slots reserved by `Graph::new` and `GraphBuilder::new`.
pub const DEFAULT_CAPACITY: usize = 16;

/// Largest number of nodes a single graph can store.
pub const MAX_NODES: usize = u32::MAX as usize;
