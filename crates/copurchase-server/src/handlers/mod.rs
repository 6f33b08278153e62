//! HTTP handlers for the co-purchase REST API.
//!
//! - `health`: liveness check
//! - `network`: graph queries
//! - `helpers`: core error -> HTTP response mapping

pub mod health;
pub mod helpers;
pub mod network;

pub use health::health_check;
pub use network::{
    all_groups, full_graph, highly_connected, neighbors, node_by_id, node_links, nodes_by_group,
    search, statistics,
};
