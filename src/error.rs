//! Error taxonomy for the relay.
//!
//! Client-request errors map to 4xx, configuration and upstream
//! failures map to 500. Nothing here is retried.

use http::StatusCode;
use thiserror::Error;

use crate::models::envelope::ErrorEnvelope;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("Missing field 'prompt'")]
    MissingPrompt,
    #[error("Missing GROQ_API_KEY environment variable")]
    MissingApiKey,
    #[error("Error calling the API")]
    Upstream(String),
}

impl RelayError {
    /// HTTP status returned to the caller for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::InvalidJson | RelayError::MissingPrompt => StatusCode::BAD_REQUEST,
            RelayError::MissingApiKey | RelayError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// JSON body returned to the caller for this failure.
    pub fn envelope(&self) -> ErrorEnvelope {
        let detail = match self {
            RelayError::Upstream(detail) => Some(detail.clone()),
            _ => None,
        };
        ErrorEnvelope {
            error: self.to_string(),
            detail,
        }
    }
}

impl From<ProviderError> for RelayError {
    fn from(err: ProviderError) -> Self {
        RelayError::Upstream(err.to_string())
    }
}

/// Failures raised by the outbound completion call.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{} {}", .status.as_u16(), api_message(.body))]
    Api { status: StatusCode, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// `error.message` from an OpenAI-style error body, else the raw body.
fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

pub type Result<T> = std::result::Result<T, RelayError>;
