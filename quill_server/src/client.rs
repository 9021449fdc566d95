use async_trait::async_trait;
use quill::GenerationRequest;
use serde_json::Value;
use tracing::debug;

use crate::models::client::{GenerationResponse, HttpClientConfig, ModelClientError};

/// Anything that can turn a chat request into generated text. The server
/// only ever talks to the completion provider through this trait so tests
/// can swap in their own backend.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: GenerationRequest) -> Result<String, ModelClientError>;
}

/// Client for an OpenAI-compatible chat completions API.
#[derive(Clone)]
pub struct ModelClient {
    generation_api_config: HttpClientConfig,
    generation_client: reqwest::Client,
}

impl ModelClient {
    pub fn new(generation_api_config: HttpClientConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let generation_header_map =
            reqwest::header::HeaderMap::try_from(&generation_api_config.headers)?;
        let generation_client = reqwest::Client::builder()
            .default_headers(generation_header_map)
            .build()?;
        Ok(Self {
            generation_api_config,
            generation_client,
        })
    }

    async fn post(
        &self,
        endpoint: &str,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, ModelClientError> {
        let config = &self.generation_api_config;
        let base_url = config.base_url.trim_end_matches("/");
        let url = format!("{base_url}{endpoint}");

        // Configured JSON fields (model name, temperature, ...) are merged
        // on top of the request body.
        let mut body = match serde_json::to_value(request) {
            Ok(Value::Object(body)) => body,
            Ok(other) => {
                return Err(ModelClientError::RequestJson {
                    url,
                    reason: format!("expected a JSON object, got {other}"),
                });
            }
            Err(err) => {
                return Err(ModelClientError::RequestJson {
                    url,
                    reason: err.to_string(),
                });
            }
        };
        body.extend(config.json.clone());

        debug!("sending generation request to {url}");
        let response = self
            .generation_client
            .post(&url)
            .query(&config.params)
            .json(&body)
            .send()
            .await
            .map_err(|err| ModelClientError::ApiConnection {
                url: url.clone(),
                reason: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ModelClientError::ResponseStatus { url, status });
        }

        response
            .json::<GenerationResponse>()
            .await
            .map_err(|err| ModelClientError::ResponseJson {
                url,
                reason: err.to_string(),
            })
    }
}

#[async_trait]
impl CompletionBackend for ModelClient {
    async fn complete(&self, request: GenerationRequest) -> Result<String, ModelClientError> {
        let endpoint = "/chat/completions";
        self.post(endpoint, request)
            .await?
            .into_first_text()
            .ok_or_else(|| ModelClientError::EmptyChoice {
                url: format!(
                    "{}{endpoint}",
                    self.generation_api_config.base_url.trim_end_matches("/")
                ),
            })
    }
}
