//! Chat-completion client for OpenAI-compatible endpoints

use crate::config::Config;
use crate::error::{CvExtractorError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One completion request: a system instruction plus a single user message
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Remote text-completion service
pub trait CompletionClient {
    /// Return the raw completion text. Missing content is returned as an empty string.
    fn complete(&self, request: &CompletionRequest) -> impl std::future::Future<Output = Result<String>> + Send;
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct ChatCompletionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ChatCompletionClient {
    pub fn new(endpoint: String, api_key: String, model: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            CvExtractorError::Configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self::with_http_client(http, endpoint, api_key, model))
    }

    pub fn with_http_client(http: reqwest::Client, endpoint: String, api_key: String, model: String) -> Self {
        Self { http, endpoint, api_key, model }
    }

    /// Build a client from configuration; a missing API key is fatal.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?;
        Self::new(
            config.completions_endpoint(),
            api_key,
            config.api.model.clone(),
            config.api.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl CompletionClient for ChatCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: &request.system },
                ChatMessage { role: "user", content: &request.user },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!("POST {} (model {})", self.endpoint, self.model);
        let response = self.http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CvExtractorError::Api { status: status.as_u16(), body });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}
