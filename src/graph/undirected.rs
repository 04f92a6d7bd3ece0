//! Core graph structure — node storage, membership and mirrored adjacency.

use crate::types::{GraphError, GraphResult, Node, NodeId, DEFAULT_CAPACITY, MAX_NODES};

use super::stats::GraphStats;
use super::traversal::{self, TraversalOrder};

/// A stored node and whether it is currently a vertex of the graph.
#[derive(Debug, Clone)]
struct Slot<T> {
    node: Node<T>,
    member: bool,
}

/// An undirected graph over caller-defined values.
///
/// The graph stores every node handed to it and tracks membership separately:
/// a node can be stored without being a vertex (created but not yet added, or
/// removed with [`Graph::remove_vertex`]). Stored nodes are never freed while
/// the graph lives.
///
/// Membership is not validated by edge or traversal operations. The only
/// errors are for ids this graph did not issue.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    slots: Vec<Slot<T>>,
    member_count: usize,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            member_count: 0,
        }
    }

    /// Create from values and edges. Every value becomes a vertex; value `i`
    /// gets `NodeId` index `i` (used by the builder).
    pub fn from_parts(
        values: Vec<T>,
        edges: impl IntoIterator<Item = (NodeId, NodeId)>,
    ) -> GraphResult<Self> {
        if values.len() > MAX_NODES {
            return Err(GraphError::CapacityExceeded(MAX_NODES));
        }

        let mut graph = Self::with_capacity(values.len());
        for value in values {
            graph.add_node(value)?;
        }
        for (a, b) in edges {
            graph.add_edge(a, b)?;
        }

        Ok(graph)
    }

    // ==================== Storage ====================

    /// Hand a constructed node to the graph's storage. The node is not a
    /// vertex until [`Graph::add_vertex`] is called.
    pub fn insert_node(&mut self, node: Node<T>) -> GraphResult<NodeId> {
        let index = self.slots.len();
        if index >= MAX_NODES {
            return Err(GraphError::CapacityExceeded(index));
        }
        let index = u32::try_from(index).map_err(|_| GraphError::CapacityExceeded(index))?;

        self.slots.push(Slot {
            node,
            member: false,
        });
        Ok(NodeId::from_index(index))
    }

    /// Store a new node with no neighbors. Not yet a vertex.
    pub fn create_node(&mut self, value: T) -> GraphResult<NodeId> {
        self.insert_node(Node::new(value))
    }

    /// Store a new node and add it as a vertex.
    pub fn add_node(&mut self, value: T) -> GraphResult<NodeId> {
        let id = self.create_node(value)?;
        self.add_vertex(id)?;
        Ok(id)
    }

    fn slot(&self, id: NodeId) -> GraphResult<&Slot<T>> {
        self.slots
            .get(id.index())
            .ok_or(GraphError::UnknownNode(id))
    }

    fn slot_mut(&mut self, id: NodeId) -> GraphResult<&mut Slot<T>> {
        self.slots
            .get_mut(id.index())
            .ok_or(GraphError::UnknownNode(id))
    }

    // ==================== Mutation ====================

    /// Add a stored node to the vertex set. Returns false if it already was
    /// a vertex.
    pub fn add_vertex(&mut self, id: NodeId) -> GraphResult<bool> {
        let slot = self.slot_mut(id)?;
        if slot.member {
            return Ok(false);
        }
        slot.member = true;
        self.member_count += 1;
        Ok(true)
    }

    /// Add several stored nodes to the vertex set.
    ///
    /// All ids are checked before any is added, so an unknown id leaves the
    /// graph untouched.
    pub fn add_vertices(&mut self, ids: impl IntoIterator<Item = NodeId>) -> GraphResult<()> {
        let ids: Vec<NodeId> = ids.into_iter().collect();
        for &id in &ids {
            self.slot(id)?;
        }
        for id in ids {
            self.add_vertex(id)?;
        }
        Ok(())
    }

    /// Add an undirected edge between `v1` and `v2`.
    ///
    /// Neither node has to be a vertex. Adding an existing edge is a no-op; a
    /// self-loop puts the node in its own adjacency once.
    pub fn add_edge(&mut self, v1: NodeId, v2: NodeId) -> GraphResult<()> {
        // Check both ends first so a bad id never leaves a half-linked edge.
        let member1 = self.slot(v1)?.member;
        let member2 = self.slot(v2)?.member;
        if !(member1 && member2) {
            log::debug!("Edge {}-{} touches a node that is not a vertex", v1, v2);
        }

        self.slot_mut(v1)?.node.link(v2);
        self.slot_mut(v2)?.node.link(v1);
        Ok(())
    }

    /// Remove the undirected edge between `v1` and `v2`. No-op if absent.
    pub fn remove_edge(&mut self, v1: NodeId, v2: NodeId) -> GraphResult<()> {
        self.slot(v1)?;
        self.slot(v2)?;

        self.slot_mut(v1)?.node.unlink(v2);
        self.slot_mut(v2)?.node.unlink(v1);
        Ok(())
    }

    /// Detach every edge of `id`, then drop it from the vertex set.
    ///
    /// Edges are detached even when `id` is stored but not a vertex; only the
    /// membership change is skipped. Returns the number of edges removed. The
    /// node stays in storage, so its value remains readable through its id.
    pub fn remove_vertex(&mut self, id: NodeId) -> GraphResult<usize> {
        // Check every neighbor first so a bad id never leaves half-removed links.
        for &neighbor in self.slot(id)?.node.adjacent() {
            self.slot(neighbor)?;
        }

        // Clear the node's own list in one step, then its mirrored links.
        let neighbors = self.slot_mut(id)?.node.unlink_all();
        for &neighbor in &neighbors {
            if neighbor != id {
                self.slot_mut(neighbor)?.node.unlink(id);
            }
        }

        let slot = self.slot_mut(id)?;
        if slot.member {
            slot.member = false;
            self.member_count -= 1;
        }

        log::debug!("Removed vertex {} ({} edges detached)", id, neighbors.len());
        Ok(neighbors.len())
    }

    // ==================== Accessors ====================

    /// Whether `id` is currently a vertex. False for ids this graph never issued.
    pub fn contains_vertex(&self, id: NodeId) -> bool {
        self.slot(id).map(|slot| slot.member).unwrap_or(false)
    }

    /// Whether `v1` and `v2` are joined by an edge.
    pub fn has_edge(&self, v1: NodeId, v2: NodeId) -> bool {
        self.slot(v1)
            .map(|slot| slot.node.is_adjacent(v2))
            .unwrap_or(false)
    }

    /// Get a stored node.
    pub fn node(&self, id: NodeId) -> GraphResult<&Node<T>> {
        self.slot(id).map(|slot| &slot.node)
    }

    /// Get a stored node mutably. Adjacency stays read-only.
    pub fn node_mut(&mut self, id: NodeId) -> GraphResult<&mut Node<T>> {
        self.slot_mut(id).map(|slot| &mut slot.node)
    }

    /// Get the value of a stored node.
    pub fn value(&self, id: NodeId) -> GraphResult<&T> {
        self.node(id).map(Node::value)
    }

    /// Get the value of a stored node mutably.
    pub fn value_mut(&mut self, id: NodeId) -> GraphResult<&mut T> {
        self.node_mut(id).map(Node::value_mut)
    }

    /// Neighbors of `id` in the order they were linked.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<&[NodeId]> {
        self.node(id).map(Node::adjacent)
    }

    /// Number of neighbors of `id`. A self-loop counts once.
    pub fn degree(&self, id: NodeId) -> GraphResult<usize> {
        self.node(id).map(Node::degree)
    }

    /// Iterate over the current vertices.
    pub fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.member)
            .filter_map(|(index, _)| u32::try_from(index).ok().map(NodeId::from_index))
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.member_count
    }

    /// Number of stored nodes, vertices or not.
    pub fn stored_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of undirected edges among stored nodes. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let mut links = 0;
        let mut self_loops = 0;
        for (index, slot) in self.slots.iter().enumerate() {
            links += slot.node.degree();
            if slot.node.adjacent().iter().any(|n| n.index() == index) {
                self_loops += 1;
            }
        }
        (links - self_loops) / 2 + self_loops
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.member_count == 0
    }

    /// Summary counts. `edges` and `self_loops` cover every stored node;
    /// `isolated` and `max_degree` cover current vertices only.
    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            vertices: self.member_count,
            stored: self.slots.len(),
            edges: self.edge_count(),
            ..GraphStats::default()
        };
        for (index, slot) in self.slots.iter().enumerate() {
            if slot.node.adjacent().iter().any(|n| n.index() == index) {
                stats.self_loops += 1;
            }
            if !slot.member {
                continue;
            }
            let degree = slot.node.degree();
            if degree == 0 {
                stats.isolated += 1;
            }
            stats.max_degree = stats.max_degree.max(degree);
        }
        stats
    }

    // ==================== Traversal ====================

    /// Depth-first pre-order from `start`: values in first-discovery order.
    ///
    /// `start` does not have to be a vertex.
    pub fn depth_first_search(&self, start: NodeId) -> GraphResult<Vec<&T>> {
        self.values_of(traversal::dfs_order(self, start)?)
    }

    /// Breadth-first order from `start`: values in dequeue order.
    pub fn breadth_first_search(&self, start: NodeId) -> GraphResult<Vec<&T>> {
        self.values_of(traversal::bfs_order(self, start)?)
    }

    /// Number of edges on a shortest path from `start` to `end`, or `None`
    /// when `end` is unreachable.
    pub fn distance_of_shortest_path(
        &self,
        start: NodeId,
        end: NodeId,
    ) -> GraphResult<Option<usize>> {
        traversal::shortest_distance(self, start, end)
    }

    /// Nodes of one shortest path from `start` to `end`, both ends included.
    pub fn shortest_path(&self, start: NodeId, end: NodeId) -> GraphResult<Option<Vec<NodeId>>> {
        traversal::shortest_path(self, start, end)
    }

    /// Depth-first pre-order from `start` as ids.
    pub fn depth_first_order(&self, start: NodeId) -> GraphResult<Vec<NodeId>> {
        traversal::dfs_order(self, start)
    }

    /// Breadth-first order from `start` as ids.
    pub fn breadth_first_order(&self, start: NodeId) -> GraphResult<Vec<NodeId>> {
        traversal::bfs_order(self, start)
    }

    /// Visit everything reachable from `start` in the given order.
    pub fn traverse(&self, start: NodeId, order: TraversalOrder) -> GraphResult<Vec<NodeId>> {
        traversal::traverse(self, start, order)
    }

    fn values_of(&self, ids: Vec<NodeId>) -> GraphResult<Vec<&T>> {
        ids.into_iter().map(|id| self.value(id)).collect()
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
