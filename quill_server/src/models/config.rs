use serde::Deserialize;
use serde_json::json;
use std::{collections::HashMap, fs, path::Path};
use thiserror::Error;

use crate::{models::client::HttpClientConfig, utils};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GROQ_API_KEY must be set when no config file is given")]
    MissingApiKey,
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
    #[error("couldn't read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("couldn't substitute environment variables in config file: {0}")]
    Substitution(String),
    #[error("couldn't parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "utils::default_server_binding_addr")]
    pub bind_addr: String,
    /// Browser origin allowed to make cross-origin requests.
    #[serde(default = "utils::default_allowed_origin")]
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: utils::default_server_binding_addr(),
            allowed_origin: utils::default_allowed_origin(),
        }
    }
}

#[derive(Deserialize)]
pub struct QuillConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub generation: HttpClientConfig,
}

impl QuillConfig {
    /// Build a config purely from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = dotenvy::var("GROQ_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;
        let port = match dotenvy::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            Err(_) => utils::DEFAULT_PORT,
        };
        let allowed_origin =
            dotenvy::var("CLIENT_URL").unwrap_or_else(|_| utils::default_allowed_origin());
        let base_url = dotenvy::var("QUILL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = dotenvy::var("QUILL_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let headers = HashMap::from([(
            "Authorization".to_string(),
            format!("Bearer {api_key}"),
        )]);
        let json = HashMap::from([("model".to_string(), json!(model))]);
        Ok(Self {
            server: ServerConfig {
                bind_addr: format!("0.0.0.0:{port}"),
                allowed_origin,
            },
            generation: HttpClientConfig {
                base_url,
                headers,
                params: HashMap::new(),
                json,
            },
        })
    }

    /// Read a JSON config file, expanding `${VAR}` references from the
    /// environment before parsing.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_template(&raw)
    }

    pub fn from_template(raw: &str) -> Result<Self, ConfigError> {
        let expanded = utils::substitute_env(raw)?;
        Ok(serde_json::from_str(&expanded)?)
    }
}
