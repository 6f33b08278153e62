//! Co-purchase network handlers.
//!
//! Every handler delegates to `QueryEngine` from `copurchase-core`; the
//! server is a thin HTTP layer with no graph logic of its own. Results borrow
//! from the shared store, so they are serialized before the state is released.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use copurchase_core::{Graph, Link, Node, NodeId, Stats};
use std::sync::Arc;

use crate::types::{ErrorResponse, HighlyConnectedParams, SearchParams};
use crate::AppState;

use super::helpers::{api_error, ApiError};

/// Get the complete network (nodes, links, metadata).
#[utoipa::path(
    get,
    path = "/full",
    responses(
        (status = 200, description = "Complete co-purchase network", body = Graph)
    ),
    tag = "network"
)]
pub async fn full_graph(State(state): State<Arc<AppState>>) -> Response {
    let graph = state.engine.full_graph();
    tracing::info!(
        nodes = graph.nodes.len(),
        links = graph.links.len(),
        "Returning full network"
    );
    Json(graph).into_response()
}

/// Get network statistics.
#[utoipa::path(
    get,
    path = "/statistics",
    responses(
        (status = 200, description = "Network statistics", body = Stats)
    ),
    tag = "network"
)]
pub async fn statistics(State(state): State<Arc<AppState>>) -> Json<Stats> {
    let stats = state.engine.statistics();
    tracing::info!(
        groups = stats.group_distribution.len(),
        "Returning network statistics"
    );
    Json(stats)
}

/// List all product groups, sorted.
#[utoipa::path(
    get,
    path = "/groups",
    responses(
        (status = 200, description = "Sorted distinct group labels", body = Vec<String>)
    ),
    tag = "network"
)]
pub async fn all_groups(State(state): State<Arc<AppState>>) -> Response {
    let groups = state.engine.all_groups();
    tracing::info!(count = groups.len(), "Returning product groups");
    Json(groups).into_response()
}

/// List the nodes in a product group (exact, case-sensitive match).
#[utoipa::path(
    get,
    path = "/nodes/group/{group}",
    params(
        ("group" = String, Path, description = "Group label, e.g. Book")
    ),
    responses(
        (status = 200, description = "Nodes in the group", body = Vec<Node>)
    ),
    tag = "network"
)]
pub async fn nodes_by_group(
    State(state): State<Arc<AppState>>,
    Path(group): Path<String>,
) -> Response {
    let nodes = state.engine.nodes_by_group(&group);
    tracing::info!(%group, count = nodes.len(), "Returning nodes by group");
    Json(nodes).into_response()
}

/// Get a single node.
///
/// # Errors
///
/// Returns 404 if no node carries `id`.
#[utoipa::path(
    get,
    path = "/nodes/{id}",
    params(
        ("id" = i64, Path, description = "Node ID")
    ),
    responses(
        (status = 200, description = "Node found", body = Node),
        (status = 400, description = "Malformed node ID"),
        (status = 404, description = "Node not found", body = ErrorResponse)
    ),
    tag = "network"
)]
pub async fn node_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<NodeId>,
) -> Result<Response, ApiError> {
    let node = state.engine.node_by_id(id).map_err(|e| api_error(&e))?;
    tracing::info!(id, title = ?node.title, "Returning node");
    Ok(Json(node).into_response())
}

/// Get the highest-degree nodes.
#[utoipa::path(
    get,
    path = "/nodes/highly-connected",
    params(HighlyConnectedParams),
    responses(
        (status = 200, description = "Nodes ordered by degree, highest first", body = Vec<Node>),
        (status = 400, description = "Malformed limit")
    ),
    tag = "network"
)]
pub async fn highly_connected(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HighlyConnectedParams>,
) -> Response {
    let nodes = state.engine.top_by_degree(params.effective_limit());
    tracing::info!(
        limit = params.limit,
        count = nodes.len(),
        "Returning highly connected nodes"
    );
    Json(nodes).into_response()
}

/// Get the distinct neighbors of a node.
///
/// An unknown node yields an empty list, not 404.
#[utoipa::path(
    get,
    path = "/nodes/{id}/neighbors",
    params(
        ("id" = i64, Path, description = "Node ID")
    ),
    responses(
        (status = 200, description = "Neighbor nodes", body = Vec<Node>),
        (status = 400, description = "Malformed node ID")
    ),
    tag = "network"
)]
pub async fn neighbors(State(state): State<Arc<AppState>>, Path(id): Path<NodeId>) -> Response {
    let nodes = state.engine.neighbors(id);
    tracing::info!(id, count = nodes.len(), "Returning neighbors");
    Json(nodes).into_response()
}

/// Get every link touching a node.
#[utoipa::path(
    get,
    path = "/nodes/{id}/links",
    params(
        ("id" = i64, Path, description = "Node ID")
    ),
    responses(
        (status = 200, description = "Links touching the node", body = Vec<Link>),
        (status = 400, description = "Malformed node ID")
    ),
    tag = "network"
)]
pub async fn node_links(State(state): State<Arc<AppState>>, Path(id): Path<NodeId>) -> Response {
    let links = state.engine.links_of(id);
    tracing::info!(id, count = links.len(), "Returning node links");
    Json(links).into_response()
}

/// Search nodes by keyword.
#[utoipa::path(
    get,
    path = "/nodes/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching nodes in document order", body = Vec<Node>)
    ),
    tag = "network"
)]
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let keyword = params.keyword.as_deref();
    let nodes = state.engine.search(keyword);
    tracing::info!(?keyword, count = nodes.len(), "Returning search results");
    Json(nodes).into_response()
}
