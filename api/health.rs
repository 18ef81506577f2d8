use groq_relay::config::RelayConfig;
use groq_relay::http::response::json_response;
use groq_relay::version;
use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = env_logger::try_init();
    run(handler).await
}

/// GET /api/health — Liveness plus whether the provider key is configured.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    let config = RelayConfig::from_env();
    let payload = json!({
        "status": "ok",
        "version": version(),
        "configured": config.api_key.is_some(),
    });

    json_response(200, &payload)
}
