use log::{debug, error, trace};
use reqwest::Client;
use serde_json::Value;

use super::CompletionProvider;
use crate::config::GROQ_BASE_URL;
use crate::error::ProviderError;
use crate::models::completion::CompletionRequest;

/// HTTP client for Groq's OpenAI-compatible API.
#[derive(Debug, Clone)]
pub struct GroqClient {
    http_client: Client,
    base_url: String,
}

impl GroqClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        GroqClient {
            http_client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn responses_url(&self) -> String {
        format!("{}/responses", self.base_url.trim_end_matches('/'))
    }
}

impl Default for GroqClient {
    fn default() -> Self {
        Self::new(GROQ_BASE_URL)
    }
}

impl CompletionProvider for GroqClient {
    async fn create_response(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<Value, ProviderError> {
        let url = self.responses_url();
        debug!("POST {} model={}", url, request.model);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        trace!("Groq response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Groq API returned {}", status);
            return Err(ProviderError::Api { status, body });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}
