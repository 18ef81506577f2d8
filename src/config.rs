//! Per-invocation configuration.
//!
//! Resolved once at request entry from the process environment and
//! passed down to the pipeline. Nothing is cached between invocations.

use crate::error::{RelayError, Result};

/// Environment variable holding the provider secret.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";
/// Environment variable overriding the system prompt.
pub const SYSTEM_PROMPT_VAR: &str = "SYSTEM_PROMPT";

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful, clear and concise assistant.";
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const GROQ_MODEL: &str = "openai/gpt-oss-20b";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Provider secret. Absence is only an error once a valid request needs it.
    pub api_key: Option<String>,
    /// System message sent ahead of the user prompt.
    pub system_prompt: String,
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
}

impl RelayConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve from an arbitrary variable lookup.
    ///
    /// A set-but-empty `SYSTEM_PROMPT` is used as-is; only an unset
    /// variable falls back to [`DEFAULT_SYSTEM_PROMPT`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        RelayConfig {
            api_key: lookup(API_KEY_VAR).filter(|key| !key.is_empty()),
            system_prompt: lookup(SYSTEM_PROMPT_VAR)
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            base_url: GROQ_BASE_URL.to_string(),
            model: GROQ_MODEL.to_string(),
        }
    }

    /// The API key, or [`RelayError::MissingApiKey`] when unset.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(RelayError::MissingApiKey)
    }
}
