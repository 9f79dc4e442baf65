//! JSON request/response helpers
//!
//! The reader buffers the body under a size cap and triages decode failures
//! into user-facing messages; the writer emits tab-indented JSON with a
//! trailing newline.

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::{FromRequest, Request},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::Response,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::error::Category;
use thiserror::Error;

use crate::api::error::ApiError;

/// Largest request body the decoder will buffer
pub const MAX_BODY_BYTES: usize = 1_048_576;

/// Failures classified by [`decode_json`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JsonDecodeError {
    /// Nothing to decode
    #[error("body must not be empty")]
    Empty,

    /// Malformed JSON with a known position
    #[error("body contains badly-formed JSON (at line {line} column {column})")]
    Syntax { line: usize, column: usize },

    /// Body ended in the middle of a value
    #[error("body contains badly-formed JSON")]
    UnexpectedEof,

    /// A field held a value of the wrong JSON type
    #[error("body contains incorrect JSON type (at line {line} column {column})")]
    IncorrectType { line: usize, column: usize },

    /// A key the target type does not declare
    #[error("body contains unknown key {0:?}")]
    UnknownKey(String),

    /// Body exceeded [`MAX_BODY_BYTES`]
    #[error("body must not be larger than {0} bytes")]
    TooLarge(usize),

    /// More than one top-level JSON value
    #[error("body must only contain a single JSON value")]
    MultipleValues,

    /// Any other decode failure, reported with its own message
    #[error("{0}")]
    Other(String),
}

/// Extractor decoding a JSON request body through [`decode_json`]
///
/// Decode failures become 400 replies carrying the classified message.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = buffer_body(req.into_body())
            .await
            .map_err(|err| ApiError::bad_request(err.to_string()))?;
        let value = decode_json(&bytes).map_err(|err| ApiError::bad_request(err.to_string()))?;
        Ok(Self(value))
    }
}

/// Read the whole request body, capped at [`MAX_BODY_BYTES`]
async fn buffer_body(body: Body) -> Result<Bytes, JsonDecodeError> {
    to_bytes(body, MAX_BODY_BYTES).await.map_err(|err| {
        let mut source: Option<&(dyn std::error::Error + 'static)> = Some(&err);
        while let Some(current) = source {
            if current.is::<http_body_util::LengthLimitError>() {
                return JsonDecodeError::TooLarge(MAX_BODY_BYTES);
            }
            source = current.source();
        }
        JsonDecodeError::Other(err.to_string())
    })
}

/// Decode a single JSON value from `body`, classifying failures
///
/// # Errors
/// Returns a [`JsonDecodeError`] describing what was wrong with the body
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, JsonDecodeError> {
    if body.is_empty() {
        return Err(JsonDecodeError::Empty);
    }

    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let value = T::deserialize(&mut deserializer).map_err(classify)?;

    // Anything after the first value is a client error, not noise to ignore.
    if deserializer.end().is_err() {
        return Err(JsonDecodeError::MultipleValues);
    }

    Ok(value)
}

fn classify(err: serde_json::Error) -> JsonDecodeError {
    let line = err.line();
    let column = err.column();
    match err.classify() {
        Category::Eof => JsonDecodeError::UnexpectedEof,
        Category::Syntax | Category::Io => JsonDecodeError::Syntax { line, column },
        Category::Data => {
            let message = err.to_string();
            if let Some(key) = unknown_key(&message) {
                JsonDecodeError::UnknownKey(key)
            } else if message.starts_with("invalid type") || message.starts_with("invalid value") {
                JsonDecodeError::IncorrectType { line, column }
            } else {
                // Field-level formats report their own message, e.g. the
                // runtime wire format.
                JsonDecodeError::Other(message)
            }
        }
    }
}

// serde spells the offending key between backticks:
// unknown field `rating`, expected one of `title`, `year`, ...
fn unknown_key(message: &str) -> Option<String> {
    let rest = message.strip_prefix("unknown field `")?;
    let (key, _) = rest.split_once('`')?;
    Some(key.to_string())
}

/// Serialize `data` as tab-indented JSON with a trailing newline
///
/// Extra headers are merged into the response before the JSON content type is
/// applied.
///
/// # Errors
/// Returns the serialization error so callers can map it to a server error
pub fn write_json<T: Serialize>(
    status: StatusCode,
    data: &T,
    headers: HeaderMap,
) -> Result<Response, serde_json::Error> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut buf = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)?;
    buf.push(b'\n');

    let mut response = Response::new(Body::from(buf));
    *response.status_mut() = status;
    response.headers_mut().extend(headers);
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Ok(response)
}
