use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::error::GenerateError;
use crate::params::{GenerateRequest, GenerateResponse, SamplingParams};

/// Anything that can continue a compiled prompt with generated text.
///
/// Returns an empty string when the service answered without any text;
/// deciding whether that is acceptable is left to the caller.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// HTTP client for a generation endpoint that accepts
/// `{"prompt", "max_new_tokens", "do_sample", "temperature", "top_p"}`
/// and answers `{"generated_text"}`.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: Client,
    endpoint: String,
    params: SamplingParams,
}

impl GenerationClient {
    pub fn new(http: Client, endpoint: impl Into<String>, params: SamplingParams) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            params,
        }
    }

    /// Build a client with its own connection pool and a per-request timeout.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        params: SamplingParams,
        timeout: Duration,
    ) -> Result<Self, GenerateError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerateError::Config(e.to_string()))?;
        Ok(Self::new(http, endpoint, params))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn params(&self) -> SamplingParams {
        self.params
    }
}

#[async_trait]
impl TextGenerator for GenerationClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let request = GenerateRequest {
            prompt,
            params: self.params,
        };

        debug!(endpoint = %self.endpoint, prompt_chars = prompt.len(), "sending prompt");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerateError::Invocation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerateError::Invocation(e.to_string()))?;
        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| GenerateError::ResponseParse(format!("{e}. Response: {body}")))?;

        let text = parsed.generated_text.unwrap_or_default();
        info!(reply_chars = text.len(), "generation complete");

        Ok(text)
    }
}
