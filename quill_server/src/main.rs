use ctrlc::set_handler;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Quill Generation Server",
    description = "Endpoints for generating blog introductions and summaries from markdown"
))]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    quill_server::init_tracing();

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    let (server_config, state) = quill_server::init()?;
    let cors = quill_server::cors_layer(&server_config)?;

    let openapi_router =
        OpenApiRouter::with_openapi(ApiDoc::openapi()).merge(quill_server::router(state));
    let (router, api) = openapi_router.split_for_parts();
    let router = router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        );

    let listener = TcpListener::bind(&server_config.bind_addr).await?;
    info!("server is running on {}", server_config.bind_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
