use serde::{Deserialize, Serialize};

/// Body of a 200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEnvelope {
    /// Text extracted from the provider response.
    pub output: String,
    /// System prompt that was sent with the request.
    pub used_system_prompt: String,
}

/// Body of every non-200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
