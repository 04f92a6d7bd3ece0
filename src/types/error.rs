//! Error types for the adjgraph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the adjgraph library.
///
/// Membership in a graph is never checked: operations on nodes that were
/// created but not added (or already removed) succeed. Errors are reserved for
/// ids the graph's storage never issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The id does not refer to a node stored in this graph.
    #[error("Node {0} not found in graph storage")]
    UnknownNode(NodeId),

    /// Node storage cannot issue any more ids.
    #[error("Node storage exhausted after {0} nodes")]
    CapacityExceeded(usize),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
