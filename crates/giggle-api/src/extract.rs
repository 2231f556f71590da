use axum::extract::{FromRequest, Request};
use bytes::Bytes;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::ApiError;

/// Request body as untyped JSON, so handlers can report which field is wrong
/// instead of failing deserialization wholesale.
///
/// The content type is not checked. An empty body reads as `{}`. Anything
/// else must be a JSON object or array; invalid JSON and bare primitives
/// such as `"abc"` or `null` are [`ApiError::MalformedBody`].
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            warn!("Failed to read request body: {}", e);
            ApiError::Unexpected(e.to_string())
        })?;

        parse_body(&bytes).map(Self)
    }
}

fn parse_body(bytes: &[u8]) -> Result<Value, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    let value: Value = serde_json::from_slice(bytes).map_err(|e| {
        warn!("Rejecting malformed JSON body: {}", e);
        ApiError::MalformedBody
    })?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        _ => {
            warn!("Rejecting JSON body that is not an object or array");
            Err(ApiError::MalformedBody)
        }
    }
}
