//! JSON object body extractor.
//!
//! Reads the request body and insists on a JSON object, the only shape the
//! write endpoints accept.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
};
use serde_json::{Map, Value};

use crate::error::RestError;
use crate::payload::json_type_name;

/// Axum extractor for a JSON object request body.
///
/// - A missing `Content-Type` is treated as JSON.
/// - Any other non-JSON content type is rejected with `415`.
/// - An empty body is an empty object.
/// - Invalid JSON and non-object documents are rejected with `400`.
///
/// # Example
///
/// ```rust,ignore
/// use campus_rest::extractors::JsonBody;
///
/// async fn create_handler(JsonBody(body): JsonBody) {
///     println!("name: {:?}", body.get("name"));
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Map<String, Value>);

impl JsonBody {
    /// Consumes the extractor and returns the inner object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Must own the string before moving req
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        if let Some(ct) = &content_type {
            if !ct.contains("json") {
                return Err(RestError::UnsupportedMediaType {
                    content_type: ct.clone(),
                });
            }
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                RestError::PayloadTooLarge
            } else {
                RestError::BadRequest {
                    message: e.body_text(),
                }
            }
        })?;

        parse_object(&bytes).map(JsonBody)
    }
}

fn parse_object(bytes: &[u8]) -> Result<Map<String, Value>, RestError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    let value: Value = serde_json::from_slice(bytes).map_err(|e| RestError::BadRequest {
        message: format!("JSON parse error - {}", e),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(RestError::field(
            "non_field_errors",
            format!(
                "Invalid data. Expected a dictionary, but got {}.",
                json_type_name(&other)
            ),
        )),
    }
}
