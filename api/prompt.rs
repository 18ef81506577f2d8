use groq_relay::config::RelayConfig;
use groq_relay::handler::handle_prompt;
use groq_relay::http::response::{internal_error, render};
use groq_relay::models::prompt::IncomingRequest;
use groq_relay::provider::GroqClient;
use log::error;
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = env_logger::try_init();
    run(handler).await
}

/// POST /api/prompt — Forward a prompt to Groq and relay the answer.
///
/// Body: `{"prompt": "..."}`. Responds with
/// `{"output": "...", "usedSystemPrompt": "..."}` or an error envelope.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let request = IncomingRequest::new(req.method(), req.body());

    let config = RelayConfig::from_env();
    let client = GroqClient::new(config.base_url.clone());

    let relay = handle_prompt(&request, &config, &client).await;
    render(relay).or_else(|e| {
        error!("Failed to render response: {}", e);
        internal_error()
    })
}
