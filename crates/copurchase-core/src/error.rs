//! Error types for copurchase-core.

use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised while loading or querying the co-purchase graph.
#[derive(Error, Debug)]
pub enum Error {
    /// The graph document is malformed or does not match the expected shape.
    #[error("Failed to parse graph document: {0}")]
    Parse(#[from] serde_json::Error),

    /// No node carries the requested id.
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
