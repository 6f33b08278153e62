//! Read-only queries over the loaded co-purchase graph.
//!
//! Every operation is a single pass over the immutable [`GraphStore`]
//! snapshot; none of them mutate state or fail on "empty" inputs.
//!
//! [`GraphStore`]: crate::graph::GraphStore

mod engine;
mod stats;

#[cfg(test)]
mod stats_tests;

pub use engine::QueryEngine;
pub use stats::Stats;
