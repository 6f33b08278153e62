//! Query engine over the immutable co-purchase graph.

use indexmap::IndexSet;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::Result;
use crate::graph::{Graph, GraphStore, Link, Node, NodeId};

use super::stats::Stats;

/// Stateless, read-only queries over a shared [`GraphStore`].
///
/// Cloning is cheap: clones share the same store.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    store: Arc<GraphStore>,
}

impl QueryEngine {
    /// Creates an engine over `store`.
    #[must_use]
    pub fn new(store: Arc<GraphStore>) -> Self {
        Self { store }
    }

    /// Returns the whole graph verbatim.
    #[must_use]
    pub fn full_graph(&self) -> &Graph {
        tracing::debug!("full graph requested");
        self.store.graph()
    }

    /// Computes network statistics.
    #[must_use]
    pub fn statistics(&self) -> Stats {
        let stats = Stats::compute(self.store.metadata(), self.store.nodes());
        tracing::debug!(
            average_degree = stats.average_degree,
            max_degree = stats.max_degree,
            "statistics computed"
        );
        stats
    }

    /// Returns the distinct group labels, sorted ascending (case-sensitive).
    #[must_use]
    pub fn all_groups(&self) -> Vec<&str> {
        tracing::debug!("listing groups");
        let groups: BTreeSet<&str> = self
            .store
            .nodes()
            .iter()
            .map(|n| n.group.as_str())
            .collect();
        groups.into_iter().collect()
    }

    /// Returns the nodes whose group equals `group` exactly.
    #[must_use]
    pub fn nodes_by_group(&self, group: &str) -> Vec<&Node> {
        tracing::debug!(group, "filtering nodes by group");
        self.store
            .nodes()
            .iter()
            .filter(|n| n.group == group)
            .collect()
    }

    /// Looks up a single node.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` if no node carries `id`.
    pub fn node_by_id(&self, id: NodeId) -> Result<&Node> {
        tracing::debug!(id, "looking up node");
        self.store.get_by_id(id)
    }

    /// Returns up to `limit` nodes ordered by degree, highest first.
    ///
    /// Ties keep document order. `limit == 0` yields nothing.
    #[must_use]
    pub fn top_by_degree(&self, limit: usize) -> Vec<&Node> {
        tracing::debug!(limit, "ranking nodes by degree");
        if limit == 0 {
            return Vec::new();
        }
        let mut ranked: Vec<&Node> = self.store.nodes().iter().collect();
        // Stable sort: equal degrees stay in document order.
        ranked.sort_by(|a, b| b.degree.cmp(&a.degree));
        ranked.truncate(limit);
        ranked
    }

    /// Returns the distinct nodes sharing a link with `id`.
    ///
    /// Neighbors are listed in the order their first link appears. Self-loops
    /// and ids that do not resolve to a node are skipped; an unknown `id`
    /// yields an empty list.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> Vec<&Node> {
        tracing::debug!(id, "collecting neighbors");
        let neighbor_ids: IndexSet<NodeId> = self
            .store
            .links()
            .iter()
            .filter_map(|link| link.other(id))
            .filter(|&other| other != id)
            .collect();

        neighbor_ids
            .into_iter()
            .filter_map(|nid| self.store.get_by_id(nid).ok())
            .collect()
    }

    /// Returns every link touching `id`, in document order.
    #[must_use]
    pub fn links_of(&self, id: NodeId) -> Vec<&Link> {
        tracing::debug!(id, "collecting links");
        self.store
            .links()
            .iter()
            .filter(|link| link.touches(id))
            .collect()
    }

    /// Case-insensitive substring search over title, group and ASIN.
    ///
    /// A missing, empty or whitespace-only keyword yields an empty list.
    #[must_use]
    pub fn search(&self, keyword: Option<&str>) -> Vec<&Node> {
        tracing::debug!(keyword, "searching nodes");
        let Some(keyword) = keyword.filter(|k| !k.trim().is_empty()) else {
            return Vec::new();
        };
        let needle = keyword.to_lowercase();
        self.store
            .nodes()
            .iter()
            .filter(|n| n.matches_keyword(&needle))
            .collect()
    }
}
