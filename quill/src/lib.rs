use bon::Builder;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Path of the introduction generation endpoint, relative to the server root.
pub const GENERATE_INTRO_PATH: &str = "/api/generate/generate-intro";
/// Path of the summary generation endpoint, relative to the server root.
pub const GENERATE_SUMMARY_PATH: &str = "/api/generate/generate-summary";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    Assistant,
    User,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

/// Chat completion request forwarded to the completion backend.
#[derive(Builder, Debug, Deserialize, Serialize)]
pub struct GenerationRequest {
    pub messages: Vec<Message>,
}

impl GenerationRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

/// Body accepted by both generation endpoints.
#[derive(Builder, Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct GenerateContentRequest {
    /// Markdown text to generate from. Missing or empty content is rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct IntroResponse {
    /// Generated introduction.
    pub intro: String,
}

#[derive(Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct SummaryResponse {
    /// Generated summary.
    pub summary: String,
}

#[derive(Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
