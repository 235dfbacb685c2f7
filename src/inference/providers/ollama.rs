//! Ollama provider using the non-streaming generate endpoint.
//!
//! `POST {base_url}/api/generate` with `stream: false` returns a single
//! JSON object whose `response` field holds the whole completion.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::inference::{CompletionProvider, CompletionRequest, ProviderError};

pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

// ============================================================================
// Ollama API Types
// ============================================================================

/// The request body for `/api/generate`
#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// The (non-streaming) response body. Everything but `response` is ignored.
#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Ollama API provider (local inference server, no auth)
pub struct OllamaProvider {
    base_url: String,
    client: reqwest::Client,
}

impl OllamaProvider {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_OLLAMA_BASE_URL.to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CompletionProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError> {
        let body = GenerateRequest {
            model: request.model,
            prompt: request.prompt,
            stream: false,
        };

        info!(
            "Ollama generate request: model={}, prompt_len={}",
            request.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!("Ollama response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Ollama API error: {} - {}", status, err_body);
            return Err(ProviderError::Api {
                status,
                message: err_body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        let parsed: GenerateResponse =
            serde_json::from_str(&text).map_err(|e| ProviderError::Parse(e.to_string()))?;

        info!("Ollama reply received: {} bytes", parsed.response.len());
        Ok(parsed.response)
    }
}
