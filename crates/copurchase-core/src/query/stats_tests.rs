//! Tests for Stats aggregation.

use super::stats::Stats;
use crate::graph::{Metadata, Node};

fn metadata(total_nodes: u64) -> Metadata {
    Metadata {
        total_nodes,
        total_edges: 0,
        cleaned_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

fn node(id: i64, group: &str, degree: u32) -> Node {
    Node {
        id,
        asin: None,
        title: None,
        group: group.to_string(),
        degree,
    }
}

#[test]
fn test_empty_nodes_yield_zeroes() {
    let stats = Stats::compute(&metadata(0), &[]);
    assert!(stats.group_distribution.is_empty());
    assert_eq!(stats.average_degree, 0.0);
    assert_eq!(stats.max_degree, 0);
    assert_eq!(stats.min_degree, 0);
}

#[test]
fn test_average_rounds_half_up() {
    // 3 / 8 = 0.375 is exact in binary, so this hits the .5 boundary.
    let nodes: Vec<Node> = (0..8)
        .map(|i| node(i, "Book", u32::from(i < 3)))
        .collect();
    let stats = Stats::compute(&metadata(8), &nodes);
    assert_eq!(stats.average_degree, 0.38);
}

#[test]
fn test_average_two_decimals() {
    let nodes = vec![node(1, "A", 2), node(2, "A", 1), node(3, "B", 1)];
    let stats = Stats::compute(&metadata(3), &nodes);
    assert_eq!(stats.average_degree, 1.33);
    assert_eq!(stats.max_degree, 2);
    assert_eq!(stats.min_degree, 1);
}

#[test]
fn test_metadata_copied_unchanged() {
    let nodes = vec![node(1, "Music", 5)];
    let stats = Stats::compute(&metadata(42), &nodes);
    assert_eq!(stats.total_nodes, 42);
    assert_eq!(stats.cleaned_at, "2024-01-01T00:00:00Z");
    assert_eq!(stats.group_distribution.values().sum::<u64>(), 1);
}

#[test]
fn test_stats_json_is_camel_case() {
    let stats = Stats::compute(&metadata(1), &[node(1, "DVD", 3)]);
    let value = serde_json::to_value(&stats).unwrap();
    for key in [
        "totalNodes",
        "totalEdges",
        "cleanedAt",
        "groupDistribution",
        "averageDegree",
        "maxDegree",
        "minDegree",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(value["groupDistribution"]["DVD"], 1);
}
