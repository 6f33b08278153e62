//! Immutable, id-indexed storage for the co-purchase graph.
//!
//! The store is built once from a JSON document and never mutated, so it can
//! be shared behind an `Arc` by any number of concurrent readers.

use std::collections::HashMap;

use crate::error::{Error, Result};

use super::types::{Graph, Link, Metadata, Node, NodeId};

/// Owns the loaded [`Graph`] and an O(1) id -> node index.
#[derive(Debug)]
pub struct GraphStore {
    graph: Graph,
    /// Node id -> position in `graph.nodes`.
    by_id: HashMap<NodeId, usize>,
}

impl GraphStore {
    /// Parses a graph document and builds the id index.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` if the bytes are empty, not JSON, or do not
    /// contain the `nodes`, `links` and `metadata` sections.
    pub fn load(bytes: &[u8]) -> Result<Self> {
        let graph: Graph = serde_json::from_slice(bytes).map_err(|e| {
            tracing::error!(error = %e, "Graph document is not loadable");
            Error::from(e)
        })?;
        Ok(Self::from_graph(graph))
    }

    /// Wraps an already-parsed graph and builds the id index.
    #[must_use]
    pub fn from_graph(graph: Graph) -> Self {
        let by_id = build_index(&graph.nodes);
        let store = Self { graph, by_id };
        store.report_load();
        store
    }

    /// Looks up a node by id.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` if no node carries `id`.
    pub fn get_by_id(&self, id: NodeId) -> Result<&Node> {
        self.by_id
            .get(&id)
            .map(|&pos| &self.graph.nodes[pos])
            .ok_or(Error::NodeNotFound(id))
    }

    /// Returns the whole graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns all nodes in document order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.graph.nodes
    }

    /// Returns all links in document order.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.graph.links
    }

    /// Returns the dataset metadata.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.graph.metadata
    }

    /// Returns the number of loaded nodes (not the declared count).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.nodes.len()
    }

    /// Returns the number of loaded links (not the declared count).
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.graph.links.len()
    }

    fn report_load(&self) {
        let metadata = &self.graph.metadata;
        let nodes = self.node_count();
        let links = self.link_count();

        tracing::info!(
            nodes,
            links,
            cleaned_at = %metadata.cleaned_at,
            "Co-purchase graph loaded"
        );

        let duplicates = nodes - self.by_id.len();
        if duplicates > 0 {
            tracing::warn!(
                duplicates,
                "Duplicate node ids in dataset; the last occurrence wins"
            );
        }
        if metadata.total_nodes != nodes as u64 || metadata.total_edges != links as u64 {
            tracing::warn!(
                declared_nodes = metadata.total_nodes,
                declared_edges = metadata.total_edges,
                nodes,
                links,
                "Dataset metadata disagrees with loaded counts"
            );
        }
    }
}

/// Builds the id -> position index. Later duplicates overwrite earlier ones.
fn build_index(nodes: &[Node]) -> HashMap<NodeId, usize> {
    let mut by_id = HashMap::with_capacity(nodes.len());
    for (pos, node) in nodes.iter().enumerate() {
        by_id.insert(node.id, pos);
    }
    by_id
}
