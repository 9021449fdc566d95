use axum::{body::Bytes, extract::State, http::HeaderMap, response::Json};
use quill::{ErrorResponse, GenerateContentRequest, IntroResponse, SummaryResponse};
use tracing::{info, warn};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    generation,
    models::{
        generate::{GenerateError, GenerationKind, parse_request, require_content},
        state::QuillState,
    },
};

pub fn router(state: QuillState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(generate_intro))
        .routes(routes!(generate_summary))
        .with_state(state)
}

/// Generate an engaging introduction for a blog post.
///
/// The generated text is meant to be prepended to the post by the caller.
#[utoipa::path(
    post,
    path = "/generate-intro",
    request_body = GenerateContentRequest,
    responses(
        (status = 200, description = "Successfully generated an introduction", body = IntroResponse),
        (status = 400, description = "No content was provided or the body isn't valid JSON", body = ErrorResponse),
        (status = 500, description = "The completion backend produced no text", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn generate_intro(
    State(state): State<QuillState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<IntroResponse>, GenerateError> {
    let body = parse_request(&headers, &body)?;
    let content =
        require_content(body).inspect_err(|_| warn!("intro requested without content"))?;
    info!("generating intro for {} characters", content.chars().count());
    let intro = generation::generate_introduction(state.backend.as_ref(), &content)
        .await
        .ok_or(GenerateError::Failed(GenerationKind::Intro))?;
    Ok(Json(IntroResponse { intro }))
}

/// Generate a summary of a blog post.
#[utoipa::path(
    post,
    path = "/generate-summary",
    request_body = GenerateContentRequest,
    responses(
        (status = 200, description = "Successfully generated a summary", body = SummaryResponse),
        (status = 400, description = "No content was provided or the body isn't valid JSON", body = ErrorResponse),
        (status = 500, description = "The completion backend produced no text", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn generate_summary(
    State(state): State<QuillState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SummaryResponse>, GenerateError> {
    let body = parse_request(&headers, &body)?;
    let content =
        require_content(body).inspect_err(|_| warn!("summary requested without content"))?;
    info!("generating summary for {} characters", content.chars().count());
    let summary = generation::generate_summary(state.backend.as_ref(), &content)
        .await
        .ok_or(GenerateError::Failed(GenerationKind::Summary))?;
    Ok(Json(SummaryResponse { summary }))
}
