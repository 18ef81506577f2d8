use serde_json::json;
use vercel_runtime::{Body, Error, Response};

use crate::handler::RelayResponse;

/// Serialize `value` as a JSON response with the given status.
pub fn json_response<T: serde::Serialize>(status: u16, value: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(value)?))?)
}

/// Turn a pipeline result into the platform response, adding `Allow` on 405.
pub fn render(relay: RelayResponse) -> Result<Response<Body>, Error> {
    let mut response = json_response(relay.status.as_u16(), &relay.body)?;
    if let Some(allow) = relay.allow {
        response.headers_mut().insert("Allow", allow.parse()?);
    }
    Ok(response)
}

/// Last-resort body when rendering itself fails.
pub fn internal_error() -> Result<Response<Body>, Error> {
    json_response(500, &json!({"error": "Internal error"}))
}
