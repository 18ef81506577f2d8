use http::Method;
use serde_json::Value;

use crate::error::{RelayError, Result};

/// The inbound request as seen by the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct IncomingRequest<'a> {
    pub method: &'a Method,
    pub body: &'a [u8],
}

impl<'a> IncomingRequest<'a> {
    pub fn new(method: &'a Method, body: &'a [u8]) -> Self {
        IncomingRequest { method, body }
    }

    pub fn is_post(&self) -> bool {
        *self.method == Method::POST
    }
}

/// A validated request payload. The prompt is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPayload {
    prompt: String,
}

impl PromptPayload {
    /// Parse and validate a raw request body.
    ///
    /// An empty body is read as `{}`. Valid JSON that is not an object,
    /// or a `prompt` that is not a string, counts as a missing prompt.
    pub fn parse(body: &[u8]) -> Result<Self> {
        let body: &[u8] = if body.is_empty() { b"{}" } else { body };
        let value: Value = serde_json::from_slice(body).map_err(|_| RelayError::InvalidJson)?;

        let prompt = value
            .get("prompt")
            .and_then(Value::as_str)
            .map(|p| p.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}'))
            .filter(|p| !p.is_empty())
            .ok_or(RelayError::MissingPrompt)?;

        Ok(PromptPayload {
            prompt: prompt.to_string(),
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_trimmed() {
        let payload = PromptPayload::parse(br#"{"prompt": "  hello world \n"}"#).unwrap();
        assert_eq!(payload.prompt(), "hello world");
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let payload = PromptPayload::parse("{\"prompt\": \"\u{feff} hi \u{feff}\"}".as_bytes()).unwrap();
        assert_eq!(payload.prompt(), "hi");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let payload = PromptPayload::parse(br#"{"prompt": "hi", "temperature": 2}"#).unwrap();
        assert_eq!(payload.prompt(), "hi");
    }

    #[test]
    fn test_malformed_bodies_are_invalid_json() {
        let bodies: [&[u8]; 5] = [b"{", b"not json", b"   ", b"{\"prompt\": }", b"\xff\xfe"];
        for body in bodies {
            assert!(
                matches!(PromptPayload::parse(body), Err(RelayError::InvalidJson)),
                "{:?} should be invalid JSON",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_missing_or_blank_prompt_is_rejected() {
        let bodies: [&[u8]; 9] = [
            b"",
            b"{}",
            br#"{"prompt": ""}"#,
            br#"{"prompt": "   \t\n"}"#,
            br#"{"prompt": "\ufeff"}"#,
            br#"{"prompt": null}"#,
            br#"{"prompt": 42}"#,
            br#""just a string""#,
            b"[1, 2, 3]",
        ];
        for body in bodies {
            assert!(
                matches!(PromptPayload::parse(body), Err(RelayError::MissingPrompt)),
                "{:?} should be a missing prompt",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_only_post_is_accepted() {
        let body = b"{}";
        assert!(IncomingRequest::new(&Method::POST, body).is_post());
        assert!(!IncomingRequest::new(&Method::GET, body).is_post());
        assert!(!IncomingRequest::new(&Method::OPTIONS, body).is_post());
    }
}
