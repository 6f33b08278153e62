//! Co-purchase network REST server.
//!
//! Serves the bundled product co-purchase graph to a visualization front-end.
//! All data is loaded once at startup; every endpoint is a read-only query.

pub mod config;
pub mod handlers;
pub mod types;

use anyhow::Context;
use axum::{http::HeaderValue, http::Method, routing::get, Router};
use copurchase_core::{GraphStore, QueryEngine};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub use config::ServerConfig;
pub use handlers::{
    all_groups, full_graph, health_check, highly_connected, neighbors, node_by_id, node_links,
    nodes_by_group, search, statistics,
};
pub use types::{ErrorResponse, HighlyConnectedParams, SearchParams};

/// Co-purchase dataset compiled into the binary.
pub const BUNDLED_DATASET: &[u8] = include_bytes!("../data/amazon_co_purchase_network.json");

/// CORS preflight cache duration.
const CORS_MAX_AGE_SECS: u64 = 3600;

/// Application state shared across handlers.
pub struct AppState {
    /// Query engine over the immutable graph.
    pub engine: QueryEngine,
}

impl AppState {
    /// Wraps a loaded store.
    #[must_use]
    pub fn new(store: GraphStore) -> Self {
        Self {
            engine: QueryEngine::new(Arc::new(store)),
        }
    }
}

/// Loads the dataset compiled into the binary.
///
/// # Errors
///
/// Fails if the bundled document is malformed; the server must not start.
pub fn load_bundled_graph() -> anyhow::Result<GraphStore> {
    GraphStore::load(BUNDLED_DATASET).context("bundled co-purchase dataset is not loadable")
}

/// OpenAPI documentation for the network API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Co-purchase Network API",
        description = "Read-only queries over a product co-purchase graph"
    ),
    paths(
        handlers::network::full_graph,
        handlers::network::statistics,
        handlers::network::all_groups,
        handlers::network::nodes_by_group,
        handlers::network::node_by_id,
        handlers::network::highly_connected,
        handlers::network::neighbors,
        handlers::network::node_links,
        handlers::network::search,
        handlers::health::health_check,
    ),
    components(schemas(
        copurchase_core::Graph,
        copurchase_core::Node,
        copurchase_core::Link,
        copurchase_core::Metadata,
        copurchase_core::Stats,
        ErrorResponse,
    )),
    tags(
        (name = "network", description = "Co-purchase graph queries"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Build the network routes (mounted under the configured prefix).
pub fn build_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/full", get(full_graph))
        .route("/statistics", get(statistics))
        .route("/groups", get(all_groups))
        .route("/nodes/group/{group}", get(nodes_by_group))
        .route("/nodes/highly-connected", get(highly_connected))
        .route("/nodes/search", get(search))
        .route("/nodes/{id}", get(node_by_id))
        .route("/nodes/{id}/neighbors", get(neighbors))
        .route("/nodes/{id}/links", get(node_links))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Build the CORS layer from the configured origin allow-list.
///
/// Credentials are allowed, so request headers are mirrored rather than
/// answered with `*`.
pub fn build_cors_layer(config: &ServerConfig) -> anyhow::Result<CorsLayer> {
    let origins = config
        .cors_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o.trim()).with_context(|| format!("invalid CORS origin {o:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    tracing::info!("CORS: restricted to {} origin(s)", origins.len());

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(CORS_MAX_AGE_SECS)))
}

/// Build the complete application: prefixed API, OpenAPI document, CORS and
/// request tracing.
pub fn build_app(state: Arc<AppState>, config: &ServerConfig) -> anyhow::Result<Router> {
    let app = Router::new().nest(&config.api_prefix, build_api_router(state));

    // SwaggerUi serves the OpenAPI document itself when enabled.
    #[cfg(feature = "swagger-ui")]
    let app = app.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
    #[cfg(not(feature = "swagger-ui"))]
    let app = app.route(
        "/api-docs/openapi.json",
        get(|| async { axum::Json(ApiDoc::openapi()) }),
    );

    Ok(app
        .layer(build_cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}
