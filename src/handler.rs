//! The request pipeline behind `POST /api/prompt`.
//!
//! Linear: method check, body parse, field validation, configuration
//! check, one outbound call, response shaping. Each step either fails
//! terminally or falls through to the next.

use http::StatusCode;
use log::{debug, error, info, warn};
use serde_json::Value;

use crate::config::RelayConfig;
use crate::error::{RelayError, Result};
use crate::models::completion::CompletionRequest;
use crate::models::envelope::SuccessEnvelope;
use crate::models::prompt::{IncomingRequest, PromptPayload};
use crate::provider::extract::extract_output_text;
use crate::provider::CompletionProvider;

/// Status, JSON body and optional `Allow` header for one response.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub body: Value,
    pub allow: Option<&'static str>,
}

impl RelayResponse {
    fn from_error(err: &RelayError) -> Self {
        let allow = matches!(err, RelayError::MethodNotAllowed).then_some("POST");
        RelayResponse {
            status: err.status(),
            body: serde_json::to_value(err.envelope()).unwrap_or_default(),
            allow,
        }
    }
}

/// Run the full pipeline and always produce a response.
pub async fn handle_prompt<P>(
    request: &IncomingRequest<'_>,
    config: &RelayConfig,
    provider: &P,
) -> RelayResponse
where
    P: CompletionProvider,
{
    match process_prompt(request, config, provider).await {
        Ok(envelope) => RelayResponse {
            status: StatusCode::OK,
            body: serde_json::to_value(envelope).unwrap_or_default(),
            allow: None,
        },
        Err(err) => RelayResponse::from_error(&err),
    }
}

/// The pipeline proper; the first failing step short-circuits.
pub async fn process_prompt<P>(
    request: &IncomingRequest<'_>,
    config: &RelayConfig,
    provider: &P,
) -> Result<SuccessEnvelope>
where
    P: CompletionProvider,
{
    if !request.is_post() {
        warn!("Rejected {} request", request.method);
        return Err(RelayError::MethodNotAllowed);
    }

    let payload = PromptPayload::parse(request.body).inspect_err(|e| warn!("Rejected body: {}", e))?;
    debug!("Prompt accepted ({} chars)", payload.prompt().chars().count());

    let api_key = config.require_api_key().inspect_err(|e| warn!("{}", e))?;

    let completion = CompletionRequest::new(&config.model, &config.system_prompt, payload.prompt());
    let response = provider
        .create_response(api_key, &completion)
        .await
        .map_err(|e| {
            error!("Error calling the API: {}", e);
            RelayError::from(e)
        })?;

    let output = extract_output_text(&response);
    info!("Completion returned {} chars", output.chars().count());

    Ok(SuccessEnvelope {
        output,
        used_system_prompt: config.system_prompt.clone(),
    })
}
