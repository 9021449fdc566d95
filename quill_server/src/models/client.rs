use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

/// The subset of an OpenAI-compatible chat completion response that's
/// actually read.
#[derive(Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl GenerationResponse {
    /// Text of the first choice, if there is any non-empty text.
    pub fn into_first_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
    }
}

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    pub base_url: String,
    pub headers: HashMap<String, String>,
    pub params: HashMap<String, String>,
    /// Extra fields merged into every request body, e.g. the model name.
    pub json: HashMap<String, Value>,
}

#[derive(Debug, Error)]
pub enum ModelClientError {
    #[error("couldn't serialize request for {url}: {reason}")]
    RequestJson { url: String, reason: String },
    #[error("couldn't connect to {url}: {reason}")]
    ApiConnection { url: String, reason: String },
    #[error("{url} responded with {status}")]
    ResponseStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("couldn't parse response from {url}: {reason}")]
    ResponseJson { url: String, reason: String },
    #[error("{url} returned no usable text")]
    EmptyChoice { url: String },
}
