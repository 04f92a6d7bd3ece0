//! Node handles and the node struct.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// Handle to a node stored in a [`Graph`](crate::graph::Graph).
///
/// Ids are scoped to the graph that issued them. Two nodes are the same node
/// exactly when their ids are equal; node values are never compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Slot index of this node in graph storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A graph vertex: a caller-defined value and the set of adjacent nodes.
///
/// Adjacency keeps insertion order and holds each neighbor at most once.
/// Only graph operations mutate it, which keeps the mirrored links of an
/// undirected edge in sync.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    /// Neighbors in link order.
    adjacent: Vec<NodeId>,
    /// Same ids as `adjacent`, for constant-time lookups.
    lookup: HashSet<NodeId>,
}

impl<T> Node<T> {
    /// Create a node with no neighbors.
    pub fn new(value: T) -> Self {
        Self {
            value,
            adjacent: Vec::new(),
            lookup: HashSet::new(),
        }
    }

    /// Create a node with an initial adjacency set.
    ///
    /// Duplicates collapse to their first occurrence. The mirrored links are
    /// not created; pair this with `Graph::add_edge` if symmetry matters.
    pub fn with_adjacent(value: T, adjacent: impl IntoIterator<Item = NodeId>) -> Self {
        let mut node = Self::new(value);
        for id in adjacent {
            node.link(id);
        }
        node
    }

    /// Get the value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Get the value mutably.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consume the node, returning its value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Neighbors in the order they were linked.
    pub fn adjacent(&self) -> &[NodeId] {
        &self.adjacent
    }

    /// Number of neighbors. A self-loop counts once.
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Whether `id` is a neighbor.
    pub fn is_adjacent(&self, id: NodeId) -> bool {
        self.lookup.contains(&id)
    }

    /// Add a neighbor. Returns false if it was already present.
    pub(crate) fn link(&mut self, id: NodeId) -> bool {
        if !self.lookup.insert(id) {
            return false;
        }
        self.adjacent.push(id);
        true
    }

    /// Remove a neighbor, keeping the order of the rest.
    /// Returns false if it was not present.
    pub(crate) fn unlink(&mut self, id: NodeId) -> bool {
        if !self.lookup.remove(&id) {
            return false;
        }
        if let Some(pos) = self.adjacent.iter().position(|&n| n == id) {
            self.adjacent.remove(pos);
        }
        true
    }

    /// Drop every neighbor at once, returning them in link order.
    pub(crate) fn unlink_all(&mut self) -> Vec<NodeId> {
        self.lookup.clear();
        std::mem::take(&mut self.adjacent)
    }
}
