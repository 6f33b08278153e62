//! Wire types for the co-purchase graph document.
//!
//! The same types are used to parse the bundled dataset and to serialize
//! query results, so field names here are the JSON contract.

use serde::{Deserialize, Serialize};

/// Identifier of a product node.
pub type NodeId = i64;

/// A product in the co-purchase graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Node {
    /// Unique node id.
    pub id: NodeId,
    /// Amazon Standard Identification Number.
    #[serde(default)]
    pub asin: Option<String>,
    /// Product title.
    #[serde(default)]
    pub title: Option<String>,
    /// Category label (e.g. `Book`, `Music`, `DVD`).
    pub group: String,
    /// Precomputed number of co-purchase links touching this node.
    pub degree: u32,
}

impl Node {
    /// Returns true if `needle` (already lowercased) occurs in the title,
    /// group or ASIN, ignoring case. Missing fields never match.
    pub(crate) fn matches_keyword(&self, needle: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(needle);
        self.title.as_deref().is_some_and(contains)
            || contains(self.group.as_str())
            || self.asin.as_deref().is_some_and(contains)
    }
}

/// An undirected co-purchase relation between two products.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Link {
    /// One endpoint.
    pub source: NodeId,
    /// The other endpoint.
    pub target: NodeId,
}

impl Link {
    /// Returns true if either endpoint is `id`.
    #[must_use]
    pub fn touches(&self, id: NodeId) -> bool {
        self.source == id || self.target == id
    }

    /// Returns the endpoint opposite to `id`, or `None` if the link does not
    /// touch `id`. A self-loop on `id` returns `id`.
    #[must_use]
    pub fn other(&self, id: NodeId) -> Option<NodeId> {
        if self.source == id {
            Some(self.target)
        } else if self.target == id {
            Some(self.source)
        } else {
            None
        }
    }
}

/// Descriptive counts recorded when the dataset was produced.
///
/// These are trusted as-is and never checked against the loaded node and
/// link sequences.
///
/// Every field is required: a missing or `null` value fails the load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Metadata {
    /// Declared number of nodes.
    pub total_nodes: u64,
    /// Declared number of links.
    pub total_edges: u64,
    /// Timestamp of the cleaning run that produced the dataset.
    pub cleaned_at: String,
}

/// The full co-purchase dataset: nodes, links and metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Graph {
    /// Products, in document order.
    pub nodes: Vec<Node>,
    /// Co-purchase relations, in document order. Duplicates are kept.
    pub links: Vec<Link>,
    /// Dataset metadata.
    pub metadata: Metadata,
}
