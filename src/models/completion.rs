use serde::{Deserialize, Serialize};

/// A role-tagged message in the provider `input` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMessage {
    pub role: String,
    pub content: String,
}

/// Body of a "create response" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub input: Vec<InputMessage>,
}

impl CompletionRequest {
    /// System message first, then the user prompt.
    pub fn new(model: &str, system: &str, user: &str) -> Self {
        CompletionRequest {
            model: model.to_string(),
            input: vec![
                InputMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                InputMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
        }
    }
}
