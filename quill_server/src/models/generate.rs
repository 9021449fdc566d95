use axum::{
    Json,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use quill::{ErrorResponse, GenerateContentRequest};
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GenerationKind {
    Intro,
    Summary,
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Intro => "intro",
            Self::Summary => "summary",
        };
        write!(f, "{repr}")
    }
}

/// Errors surfaced by the generation endpoints. Their display strings are
/// sent to clients verbatim.
#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error("No content Provided")]
    NoContent,
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),
    #[error("Failed to generate {0}")]
    Failed(GenerationKind),
}

impl GenerateError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoContent | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GenerateError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Parse a generation request body. An empty body, or one that isn't typed
/// as JSON, is read as an empty request so it falls through to the missing
/// content check.
pub fn parse_request(
    headers: &HeaderMap,
    body: &[u8],
) -> Result<GenerateContentRequest, GenerateError> {
    if body.trim_ascii().is_empty() || !is_json_content_type(headers) {
        return Ok(GenerateContentRequest::default());
    }
    serde_json::from_slice(body).map_err(|err| GenerateError::InvalidBody(err.to_string()))
}

/// Pull non-empty content out of a request body.
pub fn require_content(request: GenerateContentRequest) -> Result<String, GenerateError> {
    request
        .content
        .filter(|content| !content.is_empty())
        .ok_or(GenerateError::NoContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_must_be_present_and_non_empty() {
        let missing = GenerateContentRequest::default();
        assert_eq!(require_content(missing), Err(GenerateError::NoContent));

        let empty = GenerateContentRequest::builder()
            .content(String::new())
            .build();
        assert_eq!(require_content(empty), Err(GenerateError::NoContent));

        let whitespace = GenerateContentRequest::builder()
            .content("  ".to_string())
            .build();
        assert_eq!(require_content(whitespace), Ok("  ".to_string()));
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            "application/json; charset=utf-8".parse().unwrap(),
        );
        headers
    }

    #[test]
    fn empty_or_untyped_bodies_have_no_content() {
        for (headers, body) in [
            (HeaderMap::new(), &b""[..]),
            (json_headers(), &b""[..]),
            (json_headers(), &b"  \n"[..]),
            (HeaderMap::new(), &br#"{"content": "untyped"}"#[..]),
        ] {
            let request = parse_request(&headers, body).unwrap();
            assert_eq!(require_content(request), Err(GenerateError::NoContent));
        }
    }

    #[test]
    fn typed_bodies_are_parsed_strictly() {
        let request = parse_request(&json_headers(), br#"{"content": "a post"}"#).unwrap();
        assert_eq!(require_content(request), Ok("a post".to_string()));

        let err = parse_request(&json_headers(), b"{").unwrap_err();
        assert!(matches!(err, GenerateError::InvalidBody(_)));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().starts_with("Invalid JSON body"));
    }

    #[test]
    fn errors_map_to_client_messages() {
        assert_eq!(GenerateError::NoContent.to_string(), "No content Provided");
        assert_eq!(GenerateError::NoContent.status(), StatusCode::BAD_REQUEST);

        let failed = GenerateError::Failed(GenerationKind::Summary);
        assert_eq!(failed.to_string(), "Failed to generate summary");
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
