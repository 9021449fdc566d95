#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use quill::GenerationRequest;
use quill_server::{client::CompletionBackend, models::client::ModelClientError};
use reqwest::Response;
use tokio::net::TcpListener;

pub async fn assert_ok_response(response: Response) -> Result<Response, String> {
    if response.status().is_success() {
        Ok(response)
    } else {
        let body = response.text().await.map_err(|err| format!("{err:?}"))?;
        Err(body)
    }
}

/// Serve a router on an ephemeral local port and return its address.
pub async fn spawn_router(router: Router) -> Result<SocketAddr, std::io::Error> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, router).await });
    Ok(addr)
}

/// Backend double that counts calls and answers with a fixed reply.
pub struct MockBackend {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl MockBackend {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    async fn complete(&self, _: GenerationRequest) -> Result<String, ModelClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .clone()
            .ok_or_else(|| ModelClientError::ResponseStatus {
                url: "http://mock/chat/completions".to_string(),
                status: reqwest::StatusCode::UNAUTHORIZED,
            })
    }
}
