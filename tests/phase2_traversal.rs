//! Phase 2 tests: DFS, BFS and shortest-path queries.

use std::collections::HashSet;

use adjgraph::graph::traversal::{self, TraversalOrder};
use adjgraph::graph::{Graph, GraphBuilder};
use adjgraph::types::error::GraphError;
use adjgraph::types::node::{Node, NodeId};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ==================== Helper ====================

/// A-B-C-D as a straight line.
fn line() -> (Graph<&'static str>, Vec<NodeId>) {
    let mut builder = GraphBuilder::new();
    let ids: Vec<NodeId> = ["A", "B", "C", "D"].iter().map(|v| builder.add(*v)).collect();
    builder.path(&ids);
    (builder.build().unwrap(), ids)
}

/// Random graph with `n` vertices and up to `edges` edges.
fn random_graph(seed: u64, n: u32, edges: usize) -> (Graph<u32>, Vec<NodeId>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_capacity(n as usize);
    let ids: Vec<NodeId> = (0..n).map(|i| graph.add_node(i).unwrap()).collect();
    for _ in 0..edges {
        let a = ids[rng.gen_range(0..ids.len())];
        let b = ids[rng.gen_range(0..ids.len())];
        graph.add_edge(a, b).unwrap();
    }
    (graph, ids)
}

/// Reachable set computed independently of the traversals under test.
fn reachable(graph: &Graph<u32>, start: NodeId) -> HashSet<NodeId> {
    let mut seen = HashSet::from([start]);
    let mut frontier = vec![start];
    while let Some(id) = frontier.pop() {
        for &n in graph.neighbors(id).unwrap() {
            if seen.insert(n) {
                frontier.push(n);
            }
        }
    }
    seen
}

// ==================== Depth-First Tests ====================

#[test]
fn test_dfs_line() {
    let (graph, ids) = line();
    assert_eq!(
        graph.depth_first_search(ids[0]).unwrap(),
        vec![&"A", &"B", &"C", &"D"]
    );
}

#[test]
fn test_dfs_cycle_terminates() {
    let mut graph = Graph::new();
    let a = graph.add_node("A").unwrap();
    let b = graph.add_node("B").unwrap();
    let c = graph.add_node("C").unwrap();
    graph.add_edge(a, b).unwrap();
    graph.add_edge(b, c).unwrap();
    graph.add_edge(c, a).unwrap();

    let values = graph.depth_first_search(a).unwrap();
    assert_eq!(values.len(), 3);
    let distinct: HashSet<&str> = values.into_iter().copied().collect();
    assert_eq!(distinct, HashSet::from(["A", "B", "C"]));
}

#[test]
fn test_dfs_descends_before_siblings() {
    //     R
    //    / \
    //   X   Y
    //   |
    //   Z
    let mut graph = Graph::new();
    let r = graph.add_node("R").unwrap();
    let x = graph.add_node("X").unwrap();
    let y = graph.add_node("Y").unwrap();
    let z = graph.add_node("Z").unwrap();
    graph.add_edge(r, x).unwrap();
    graph.add_edge(r, y).unwrap();
    graph.add_edge(x, z).unwrap();

    assert_eq!(graph.depth_first_order(r).unwrap(), vec![r, x, z, y]);
    assert_eq!(graph.breadth_first_order(r).unwrap(), vec![r, x, y, z]);
}

#[test]
fn test_dfs_marks_seen_on_discovery() {
    // R-A, R-B, A-B: B is reached through A before R's own turn for B.
    let mut graph = Graph::new();
    let r = graph.add_node("R").unwrap();
    let a = graph.add_node("A").unwrap();
    let b = graph.add_node("B").unwrap();
    graph.add_edge(r, a).unwrap();
    graph.add_edge(r, b).unwrap();
    graph.add_edge(a, b).unwrap();

    assert_eq!(graph.depth_first_order(r).unwrap(), vec![r, a, b]);
}

#[test]
fn test_dfs_deep_line_does_not_overflow() {
    let mut builder = GraphBuilder::with_capacity(200_000);
    let ids: Vec<NodeId> = (0..200_000u32).map(|i| builder.add(i)).collect();
    builder.path(&ids);
    let graph = builder.build().unwrap();

    let order = graph.depth_first_order(ids[0]).unwrap();
    assert_eq!(order.len(), ids.len());
    assert_eq!(order.last(), ids.last());
}

#[test]
fn test_dfs_single_node() {
    let mut graph = Graph::new();
    let a = graph.add_node(7).unwrap();
    assert_eq!(graph.depth_first_search(a).unwrap(), vec![&7]);
}

#[test]
fn test_dfs_from_non_vertex_start() {
    let mut graph = Graph::new();
    let a = graph.create_node("a").unwrap();
    let b = graph.add_node("b").unwrap();
    graph.add_edge(a, b).unwrap();

    assert_eq!(graph.depth_first_search(a).unwrap(), vec![&"a", &"b"]);
}

// ==================== Breadth-First Tests ====================

#[test]
fn test_bfs_order_simple() {
    let mut graph = Graph::new();
    let a = graph.add_node("A").unwrap();
    let b = graph.add_node("B").unwrap();
    let c = graph.add_node("C").unwrap();
    graph.add_edge(a, b).unwrap();
    graph.add_edge(b, c).unwrap();

    assert_eq!(
        graph.breadth_first_search(a).unwrap(),
        vec![&"A", &"B", &"C"]
    );
}

#[test]
fn test_bfs_skips_unreachable() {
    let (mut graph, ids) = line();
    let island = graph.add_node("island").unwrap();

    let values = graph.breadth_first_search(ids[1]).unwrap();
    assert_eq!(values, vec![&"B", &"A", &"C", &"D"]);
    assert!(!graph.breadth_first_order(ids[1]).unwrap().contains(&island));
    assert_eq!(graph.breadth_first_search(island).unwrap(), vec![&"island"]);
}

#[test]
fn test_bfs_after_remove_vertex() {
    let (mut graph, ids) = line();
    graph.remove_vertex(ids[2]).unwrap();

    assert_eq!(graph.breadth_first_search(ids[0]).unwrap(), vec![&"A", &"B"]);
    assert_eq!(graph.breadth_first_search(ids[3]).unwrap(), vec![&"D"]);
}

#[test]
fn test_bfs_self_loop() {
    let mut graph = Graph::new();
    let a = graph.add_node(1).unwrap();
    let b = graph.add_node(2).unwrap();
    graph.add_edge(a, a).unwrap();
    graph.add_edge(a, b).unwrap();

    assert_eq!(graph.breadth_first_order(a).unwrap(), vec![a, b]);
    assert_eq!(graph.depth_first_order(a).unwrap(), vec![a, b]);
}

// ==================== Shortest Path Tests ====================

#[test]
fn test_distance_line() {
    let (graph, ids) = line();
    assert_eq!(graph.distance_of_shortest_path(ids[0], ids[3]).unwrap(), Some(3));
    assert_eq!(graph.distance_of_shortest_path(ids[3], ids[1]).unwrap(), Some(2));
    assert_eq!(graph.distance_of_shortest_path(ids[0], ids[0]).unwrap(), Some(0));
}

#[test]
fn test_distance_disconnected_is_none() {
    let (mut graph, ids) = line();
    let island = graph.add_node("island").unwrap();

    assert_eq!(graph.distance_of_shortest_path(ids[0], island).unwrap(), None);
    assert_eq!(graph.shortest_path(ids[0], island).unwrap(), None);
}

#[test]
fn test_distance_prefers_shortcut() {
    let (mut graph, ids) = line();
    graph.add_edge(ids[0], ids[2]).unwrap();

    assert_eq!(graph.distance_of_shortest_path(ids[0], ids[3]).unwrap(), Some(2));
    assert_eq!(
        graph.shortest_path(ids[0], ids[3]).unwrap(),
        Some(vec![ids[0], ids[2], ids[3]])
    );
}

#[test]
fn test_shortest_path_line() {
    let (graph, ids) = line();
    assert_eq!(graph.shortest_path(ids[0], ids[3]).unwrap(), Some(ids.clone()));
    assert_eq!(graph.shortest_path(ids[2], ids[2]).unwrap(), Some(vec![ids[2]]));
}

#[test]
fn test_shortest_path_unknown_end() {
    let (graph, ids) = line();
    let mut other: Graph<u8> = Graph::new();
    for i in 0..10 {
        other.create_node(i).unwrap();
    }
    let bad = other.create_node(10).unwrap();

    assert_eq!(
        graph.distance_of_shortest_path(ids[0], bad),
        Err(GraphError::UnknownNode(bad))
    );
    assert_eq!(
        graph.shortest_path(bad, ids[0]),
        Err(GraphError::UnknownNode(bad))
    );
    assert!(graph.depth_first_search(bad).is_err());
    assert!(graph.breadth_first_search(bad).is_err());
}

#[test]
fn test_traversal_reports_dangling_adjacency() {
    // A node built with an initial adjacency naming an id that was never stored.
    let mut graph: Graph<u8> = Graph::new();
    let ghost = {
        let mut other: Graph<u8> = Graph::new();
        other.create_node(0).unwrap();
        other.create_node(1).unwrap()
    };
    let a = graph.insert_node(Node::with_adjacent(0, [ghost])).unwrap();
    graph.add_vertex(a).unwrap();

    assert_eq!(
        graph.breadth_first_order(a),
        Err(GraphError::UnknownNode(ghost))
    );
}

// ==================== Dispatch Tests ====================

#[test]
fn test_traverse_dispatch() {
    let (graph, ids) = line();
    assert_eq!(
        graph.traverse(ids[1], TraversalOrder::DepthFirst).unwrap(),
        traversal::dfs_order(&graph, ids[1]).unwrap()
    );
    assert_eq!(
        graph.traverse(ids[1], TraversalOrder::BreadthFirst).unwrap(),
        traversal::bfs_order(&graph, ids[1]).unwrap()
    );
}

// ==================== Randomized Invariant Tests ====================

#[test]
fn test_traversals_visit_reachable_exactly_once() {
    for seed in 0..20 {
        let (graph, ids) = random_graph(seed, 60, 70);
        for &start in ids.iter().step_by(7) {
            let expected = reachable(&graph, start);

            for order in [
                graph.depth_first_order(start).unwrap(),
                graph.breadth_first_order(start).unwrap(),
            ] {
                assert_eq!(order[0], start);
                let distinct: HashSet<NodeId> = order.iter().copied().collect();
                assert_eq!(distinct.len(), order.len(), "node visited twice");
                assert_eq!(distinct, expected);
            }
        }
    }
}

#[test]
fn test_shortest_path_matches_distance() {
    for seed in 0..20 {
        let (graph, ids) = random_graph(seed, 40, 50);
        let start = ids[0];
        for &end in &ids {
            let distance = graph.distance_of_shortest_path(start, end).unwrap();
            let path = graph.shortest_path(start, end).unwrap();
            match (distance, path) {
                (Some(d), Some(p)) => {
                    assert_eq!(p.len(), d + 1);
                    assert_eq!(p.first(), Some(&start));
                    assert_eq!(p.last(), Some(&end));
                    for pair in p.windows(2) {
                        assert!(graph.has_edge(pair[0], pair[1]));
                    }
                }
                (None, None) => assert!(!reachable(&graph, start).contains(&end)),
                other => panic!("distance and path disagree: {:?}", other),
            }
        }
    }
}

#[test]
fn test_remove_vertex_leaves_no_dangling_links() {
    let (mut graph, ids) = random_graph(99, 50, 120);
    for &id in ids.iter().step_by(3) {
        graph.remove_vertex(id).unwrap();
    }

    for id in graph.vertices() {
        for &n in graph.neighbors(id).unwrap() {
            assert!(graph.contains_vertex(n));
            assert!(graph.has_edge(n, id), "adjacency not mirrored");
        }
    }
}
