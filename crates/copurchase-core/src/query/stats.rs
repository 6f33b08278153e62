//! Aggregate statistics over the node sequence.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::graph::{Metadata, Node};

/// Network overview: declared metadata plus aggregates computed from the
/// loaded nodes. The two halves may disagree if the dataset is inconsistent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Declared node count, from metadata.
    pub total_nodes: u64,
    /// Declared edge count, from metadata.
    pub total_edges: u64,
    /// Dataset cleaning timestamp, from metadata.
    pub cleaned_at: String,
    /// Number of nodes per group label.
    pub group_distribution: BTreeMap<String, u64>,
    /// Mean node degree, rounded to two decimals.
    pub average_degree: f64,
    /// Largest node degree (0 when there are no nodes).
    pub max_degree: u32,
    /// Smallest node degree (0 when there are no nodes).
    pub min_degree: u32,
}

impl Stats {
    /// Computes statistics for `nodes`, copying the declared counts from
    /// `metadata` unchanged.
    #[must_use]
    pub fn compute(metadata: &Metadata, nodes: &[Node]) -> Self {
        let mut group_distribution: BTreeMap<String, u64> = BTreeMap::new();
        let mut degree_sum: u64 = 0;
        let mut max_degree: Option<u32> = None;
        let mut min_degree: Option<u32> = None;

        for node in nodes {
            *group_distribution.entry(node.group.clone()).or_default() += 1;
            degree_sum += u64::from(node.degree);
            max_degree = Some(max_degree.map_or(node.degree, |m| m.max(node.degree)));
            min_degree = Some(min_degree.map_or(node.degree, |m| m.min(node.degree)));
        }

        Self {
            total_nodes: metadata.total_nodes,
            total_edges: metadata.total_edges,
            cleaned_at: metadata.cleaned_at.clone(),
            group_distribution,
            average_degree: average_rounded(degree_sum, nodes.len()),
            max_degree: max_degree.unwrap_or(0),
            min_degree: min_degree.unwrap_or(0),
        }
    }
}

/// Mean of `count` values summing to `sum`, rounded half-up to 2 decimals.
#[allow(clippy::cast_precision_loss)]
fn average_rounded(sum: u64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    // Reason: degree sums stay far below 2^52, so the f64 conversion is exact.
    let mean = sum as f64 / count as f64;
    (mean * 100.0).round() / 100.0
}
