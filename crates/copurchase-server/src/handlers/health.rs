//! Health check endpoint.

/// Static liveness response.
pub const HEALTH_MESSAGE: &str = "OK: co-purchase network service is running";

/// Health check.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn health_check() -> &'static str {
    tracing::debug!("Health check");
    HEALTH_MESSAGE
}
