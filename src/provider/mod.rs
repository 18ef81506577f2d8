//! Completion provider — the one outbound call the relay makes.
//!
//! The handler only depends on [`CompletionProvider`]; [`GroqClient`]
//! is the production implementation over the OpenAI-compatible
//! Responses endpoint hosted by Groq.

pub mod extract;
pub mod groq;

use std::future::Future;

use serde_json::Value;

use crate::error::ProviderError;
use crate::models::completion::CompletionRequest;

pub use groq::GroqClient;

/// A hosted completion API reachable with a bearer key.
pub trait CompletionProvider {
    /// Issue one "create response" call and return the raw JSON reply.
    ///
    /// The reply shape is provider-defined; see [`extract`] for how it
    /// is reduced to text.
    fn create_response(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<Value, ProviderError>> + Send;
}
