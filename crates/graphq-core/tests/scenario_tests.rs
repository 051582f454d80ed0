//! End-to-end scenarios through the public API.

use anyhow::{ensure, Result};
use graphq_core::{Edge, Graph, GraphqConfig, NodeIndex, TraversalConfig};
use std::collections::HashSet;

/// Five nodes valued 1..=5 wired as
///
/// ```text
/// 0 ---> 1
/// ^ \     \
/// |  v     v
/// 2 <-> 3 -> 4
/// ```
#[test]
fn test_scenario_a_neighbors_and_edges() -> Result<()> {
    let graph = Graph::new();
    let n: Vec<NodeIndex> = (1..=5).map(|v| graph.add_node(v)).collect();
    ensure!(n == (0..5).map(NodeIndex::new).collect::<Vec<_>>());

    graph.add_edge(n[0], n[1], 1);
    graph.add_edge(n[0], n[2], 1);
    graph.add_edge(n[2], n[0], 3);
    graph.add_edge(n[2], n[3], 1);
    graph.add_edge(n[3], n[2], 1);
    graph.add_edge(n[3], n[4], 1);
    graph.add_edge(n[1], n[4], 1);

    let neighbors: HashSet<_> = graph.neighbors(n[2]).into_iter().collect();
    assert_eq!(neighbors, HashSet::from([n[0], n[3]]));

    let edges = graph.edges();
    assert!(edges.contains(&Edge::new(n[2], n[0], 3)));
    assert_eq!(edges.len(), 7);
    Ok(())
}

#[test]
fn test_scenario_b_bfs_with_self_loop() -> Result<()> {
    let graph = Graph::new();
    let n: Vec<NodeIndex> = (0..4).map(|v| graph.add_node(v)).collect();
    for (s, e) in [(0, 1), (0, 2), (1, 2), (2, 0), (2, 3), (3, 3)] {
        graph.try_add_edge(n[s], n[e], 1)?;
    }

    let mut order = Vec::new();
    let visited = graph.try_bfs(n[2], |idx| order.push(idx))?;

    assert_eq!(visited, 4);
    assert_eq!(order.first(), Some(&n[2]));
    assert_eq!(order.last(), Some(&n[1]));
    let set: HashSet<_> = order.iter().copied().collect();
    assert_eq!(set, HashSet::from([n[0], n[1], n[2], n[3]]));
    Ok(())
}

#[test]
fn test_graph_built_from_toml_config() -> Result<()> {
    let config = GraphqConfig::from_toml(
        r#"
[graph]
initial_node_capacity = 128
edge_map_capacity = 4

[traversal]
max_depth = 1
"#,
    )?;
    let graph = Graph::from_config(&config)?;
    let hub = graph.add_node("hub");
    for i in 0..4 {
        let leaf = graph.add_node("leaf");
        graph.add_edge(hub, leaf, i);
        graph.add_edge(leaf, hub, -i);
    }
    let far = graph.add_node("far");
    graph.add_edge(NodeIndex::new(1), far, 9);

    let reached: Vec<_> = graph.bfs_iter_with_config(hub, config.traversal).collect();

    assert_eq!(reached.len(), 5);
    assert!(reached.iter().all(|v| v.depth <= 1));
    assert!(!reached.iter().any(|v| v.index == far));
    Ok(())
}

#[test]
fn test_configured_traversal_bounds_apply_to_bfs() -> Result<()> {
    let config = GraphqConfig::from_toml("[traversal]\nmax_depth = 1")?;
    let graph = Graph::from_config(&config)?;
    let chain: Vec<_> = (0..5).map(|i| graph.add_node(i)).collect();
    for pair in chain.windows(2) {
        graph.add_edge(pair[0], pair[1], 1);
    }

    let mut visited = Vec::new();
    graph.bfs(chain[0], |idx| visited.push(idx));
    ensure!(visited == chain[..2], "bfs ignored max_depth: {visited:?}");

    assert_eq!(graph.try_bfs(chain[0], |_| {})?, 2);
    assert_eq!(graph.bfs_iter(chain[0]).count(), 2);
    assert_eq!(graph.layers(chain[0]).len(), 2);

    let mut unbounded = 0;
    graph.bfs_with_config(chain[0], &TraversalConfig::unbounded(), |_| unbounded += 1);
    assert_eq!(unbounded, 5);
    Ok(())
}

#[test]
fn test_configured_traversal_limit_applies_to_bfs() -> Result<()> {
    let config = GraphqConfig::from_toml("[traversal]\nlimit = 3")?;
    let graph = Graph::from_config(&config)?;
    let hub = graph.add_node(0);
    for i in 1..10 {
        let leaf = graph.add_node(i);
        graph.add_edge(hub, leaf, 1);
    }

    let mut count = 0;
    graph.bfs(hub, |_| count += 1);

    assert_eq!(count, 3);
    assert_eq!(graph.bfs_iter(hub).count(), 3);
    Ok(())
}

#[test]
fn test_edges_serialize_for_reporting() -> Result<()> {
    let graph = Graph::new();
    let a = graph.add_node(());
    let b = graph.add_node(());
    graph.add_edge(a, b, 12);

    let json = serde_json::to_string(&graph.edges())?;

    assert_eq!(json, r#"[{"start":0,"end":1,"weight":12}]"#);
    Ok(())
}

#[test]
fn test_lenient_api_absorbs_invalid_input() {
    let graph: Graph<&str> = Graph::new();

    assert_eq!(graph.add_node_opt(None), NodeIndex::new(0));
    graph.add_edge(NodeIndex::new(0), NodeIndex::new(1), 1);
    graph.add_edge_raw(-1, -1, 1);
    let mut visits = 0;
    graph.bfs_with_config(NodeIndex::new(0), &TraversalConfig::default(), |_| visits += 1);

    assert!(graph.is_empty());
    assert!(graph.neighbors(NodeIndex::new(0)).is_empty());
    assert!(graph.edges().is_empty());
    assert_eq!(visits, 0);
}
