//! Graph traversal algorithms (DFS, BFS, shortest unweighted path).
//!
//! All traversals follow adjacency in insertion order and share one policy: a
//! node is marked seen when it is discovered, never when it is visited, so
//! each reachable node is reported exactly once and cycles terminate.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{GraphResult, NodeId};

use super::Graph;

/// Order in which [`traverse`] reports reachable nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Pre-order depth-first: descend into each newly seen neighbor at once.
    DepthFirst,
    /// Layer by layer from the start node.
    BreadthFirst,
}

/// Visit everything reachable from `start` in the given order.
pub fn traverse<T>(
    graph: &Graph<T>,
    start: NodeId,
    order: TraversalOrder,
) -> GraphResult<Vec<NodeId>> {
    match order {
        TraversalOrder::DepthFirst => dfs_order(graph, start),
        TraversalOrder::BreadthFirst => bfs_order(graph, start),
    }
}

/// Depth-first pre-order from `start`.
///
/// Produces the same order as the recursive algorithm (visit a node, then
/// recurse into each unseen neighbor in turn) but keeps its frames on an
/// explicit stack, so deep graphs cannot exhaust the call stack.
pub fn dfs_order<T>(graph: &Graph<T>, start: NodeId) -> GraphResult<Vec<NodeId>> {
    let mut order: Vec<NodeId> = vec![start];
    let mut seen: HashSet<NodeId> = HashSet::from([start]);
    // Each frame is a node's neighbor list and the next position to look at.
    let mut stack: Vec<(&[NodeId], usize)> = vec![(graph.neighbors(start)?, 0)];

    while let Some((neighbors, cursor)) = stack.last_mut() {
        match neighbors.get(*cursor).copied() {
            Some(next) => {
                *cursor += 1;
                if seen.insert(next) {
                    order.push(next);
                    stack.push((graph.neighbors(next)?, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    log::trace!("DFS from {} visited {} nodes", start, order.len());
    Ok(order)
}

/// Breadth-first order from `start`, in dequeue order.
pub fn bfs_order<T>(graph: &Graph<T>, start: NodeId) -> GraphResult<Vec<NodeId>> {
    let mut visited: Vec<NodeId> = Vec::new();
    let mut seen: HashSet<NodeId> = HashSet::from([start]);
    let mut queue: VecDeque<NodeId> = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        visited.push(current);

        for &adj in graph.neighbors(current)? {
            if seen.insert(adj) {
                queue.push_back(adj);
            }
        }
    }

    log::trace!("BFS from {} visited {} nodes", start, visited.len());
    Ok(visited)
}

/// Edge count of a shortest path from `start` to `end`.
///
/// Returns `Some(0)` when `start == end` and `None` when `end` is not
/// reachable. The distance is reported the first time `end` is dequeued,
/// which is its shortest distance because the queue is processed layer by
/// layer.
pub fn shortest_distance<T>(
    graph: &Graph<T>,
    start: NodeId,
    end: NodeId,
) -> GraphResult<Option<usize>> {
    graph.node(end)?;

    let mut seen: HashSet<NodeId> = HashSet::from([start]);
    let mut queue: VecDeque<(NodeId, usize)> = VecDeque::from([(start, 0)]);

    while let Some((current, distance)) = queue.pop_front() {
        if current == end {
            return Ok(Some(distance));
        }

        for &adj in graph.neighbors(current)? {
            if seen.insert(adj) {
                queue.push_back((adj, distance + 1));
            }
        }
    }

    Ok(None)
}

/// One shortest path from `start` to `end`, both ends included.
///
/// Ties between equally short paths go to the one found first in adjacency
/// order. Returns `None` when `end` is not reachable.
pub fn shortest_path<T>(
    graph: &Graph<T>,
    start: NodeId,
    end: NodeId,
) -> GraphResult<Option<Vec<NodeId>>> {
    graph.node(end)?;

    // child -> parent on the BFS tree
    let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
    let mut seen: HashSet<NodeId> = HashSet::from([start]);
    let mut queue: VecDeque<NodeId> = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == end {
            let mut path = vec![end];
            let mut cursor = end;
            while let Some(&parent) = parents.get(&cursor) {
                path.push(parent);
                cursor = parent;
            }
            path.reverse();
            return Ok(Some(path));
        }

        for &adj in graph.neighbors(current)? {
            if seen.insert(adj) {
                parents.insert(adj, current);
                queue.push_back(adj);
            }
        }
    }

    Ok(None)
}
