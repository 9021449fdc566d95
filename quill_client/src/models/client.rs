use quill::{
    GENERATE_INTRO_PATH, GENERATE_SUMMARY_PATH, GenerateContentRequest, IntroResponse,
    SummaryResponse,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::repl::GenerationKind;

/// Any way a generation call can go wrong. The editor treats them all the
/// same.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("couldn't reach server: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Clone)]
pub struct GenerateClient {
    base_url: String,
    client: reqwest::Client,
}

impl GenerateClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn generate(&self, kind: GenerationKind, content: &str) -> Result<String, ClientError> {
        match kind {
            GenerationKind::Intro => self.intro(content).await,
            GenerationKind::Summary => self.summary(content).await,
        }
    }

    pub async fn intro(&self, content: &str) -> Result<String, ClientError> {
        let response: IntroResponse = self.post(GENERATE_INTRO_PATH, content).await?;
        Ok(response.intro)
    }

    pub async fn summary(&self, content: &str) -> Result<String, ClientError> {
        let response: SummaryResponse = self.post(GENERATE_SUMMARY_PATH, content).await?;
        Ok(response.summary)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, content: &str) -> Result<T, ClientError> {
        let body = GenerateContentRequest::builder()
            .content(content.to_string())
            .build();
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }
        Ok(response.json::<T>().await?)
    }
}
