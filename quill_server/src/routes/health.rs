use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router() -> OpenApiRouter {
    OpenApiRouter::new().routes(routes!(health))
}

/// Check that the server is up.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up", body = String)
    )
)]
#[axum::debug_handler]
pub async fn health() -> &'static str {
    "ok"
}
