//! Co-purchase graph data model and id-indexed store.
//!
//! # Example
//!
//! ```rust
//! use copurchase_core::graph::GraphStore;
//!
//! let store = GraphStore::load(br#"{
//!     "nodes": [{"id": 7, "asin": "0827229534", "title": "Patterns of Preaching", "group": "Book", "degree": 0}],
//!     "links": [],
//!     "metadata": {"total_nodes": 1, "total_edges": 0, "cleaned_at": "2024-01-01T00:00:00Z"}
//! }"#).unwrap();
//!
//! assert_eq!(store.get_by_id(7).unwrap().group, "Book");
//! assert!(store.get_by_id(8).is_err());
//! ```

mod store;
mod types;


pub use store::GraphStore;
pub use types::{Graph, Link, Metadata, Node, NodeId};
