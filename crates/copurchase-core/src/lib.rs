//! # `copurchase-core`
//!
//! In-memory product co-purchase graph with a read-only query engine.
//!
//! The graph is parsed once from a JSON document, indexed by node id, and
//! then shared immutably. Every query is a bounded scan over that snapshot.
//!
//! ## Quick Start
//!
//! ```rust
//! use copurchase_core::{GraphStore, QueryEngine};
//! use std::sync::Arc;
//!
//! let doc = br#"{
//!     "nodes": [
//!         {"id": 1, "asin": "A1", "title": "Widget", "group": "Toys", "degree": 1},
//!         {"id": 2, "asin": "A2", "title": "Gadget", "group": "Toys", "degree": 1}
//!     ],
//!     "links": [{"source": 1, "target": 2}],
//!     "metadata": {"total_nodes": 2, "total_edges": 1, "cleaned_at": "2024-01-01T00:00:00Z"}
//! }"#;
//!
//! let store = GraphStore::load(doc).expect("valid document");
//! let engine = QueryEngine::new(Arc::new(store));
//!
//! assert_eq!(engine.all_groups(), vec!["Toys"]);
//! assert_eq!(engine.neighbors(1)[0].id, 2);
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::float_cmp, clippy::cast_possible_wrap))]

pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;
pub mod query;

pub use error::{Error, Result};
pub use graph::{Graph, GraphStore, Link, Metadata, Node, NodeId};
pub use query::{QueryEngine, Stats};
