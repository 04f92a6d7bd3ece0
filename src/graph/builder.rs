//! Fluent API for building Graph instances.

use crate::types::{GraphError, GraphResult, NodeId, DEFAULT_CAPACITY, MAX_NODES};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Every value added becomes a vertex. Ids returned by [`GraphBuilder::add`]
/// are the ids the built graph uses.
pub struct GraphBuilder<T> {
    values: Vec<T>,
    edges: Vec<(NodeId, NodeId)>,
    /// Most nodes the built graph may hold.
    max_nodes: usize,
    /// Set once `add` is called past `max_nodes`.
    overflowed: bool,
}

impl<T> GraphBuilder<T> {
    /// Create a new builder with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new builder with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            edges: Vec::new(),
            max_nodes: MAX_NODES,
            overflowed: false,
        }
    }

    /// Add a vertex.
    ///
    /// Past the node limit the value is dropped and `build` fails with
    /// `CapacityExceeded`; the returned id must not be used.
    pub fn add(&mut self, value: T) -> NodeId {
        let len = self.values.len();
        match u32::try_from(len) {
            Ok(index) if len < self.max_nodes => {
                self.values.push(value);
                NodeId::from_index(index)
            }
            _ => {
                self.overflowed = true;
                NodeId::from_index(u32::MAX)
            }
        }
    }

    /// Add an edge between two vertices.
    pub fn link(&mut self, a: NodeId, b: NodeId) -> &mut Self {
        self.edges.push((a, b));
        self
    }

    /// Join consecutive ids with edges: `a-b`, `b-c`, ...
    pub fn path(&mut self, ids: &[NodeId]) -> &mut Self {
        for pair in ids.windows(2) {
            if let [a, b] = pair {
                self.edges.push((*a, *b));
            }
        }
        self
    }

    /// Build the final Graph. Fails on an edge naming an id this builder did
    /// not hand out.
    pub fn build(self) -> GraphResult<Graph<T>> {
        if self.overflowed {
            return Err(GraphError::CapacityExceeded(self.max_nodes));
        }
        Graph::from_parts(self.values, self.edges)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
