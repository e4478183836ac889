//! Purpose: Orchestrate parse, navigation, and decoding against raw HTTP responses.
//! Exports: `RawResponse`, `Response`, `ResponseError`, `TransportError`, `decode_response`, `decode_array_response`.
//! Role: Sole translation point from decode results to the caller-facing shape.
//! Invariants: Request/response metadata is retained on success and failure alike.
//! Invariants: Transport errors pass through untouched; they never become decode errors.
//! Invariants: A response with no body and no error still yields an explicit failure.

use std::error::Error as StdError;
use std::fmt;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use tracing::{debug, trace};
use url::Url;

use crate::core::decoder::Decodable;
use crate::core::error::{DecodeError, ERROR_DOMAIN};
use crate::core::keypath;
use crate::core::value;

/// An opaque failure from the network layer. The pipeline never inspects
/// it; it is carried through to the caller as-is.
#[derive(Debug)]
pub struct TransportError(Box<dyn StdError + Send + Sync>);

impl TransportError {
    pub fn new(source: impl StdError + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }

    pub fn from_message(message: impl Into<String>) -> Self {
        Self(Box::new(TransportMessage(message.into())))
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.0.as_ref() as &(dyn StdError + 'static))
    }
}

#[derive(Debug)]
struct TransportMessage(String);

impl fmt::Display for TransportMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for TransportMessage {}

/// Caller-facing failure channel: either the transport error handed in
/// with the raw response, or a structured decode error rendered under the
/// fixed [`ERROR_DOMAIN`] namespace.
#[derive(Debug)]
pub enum ResponseError {
    Transport(TransportError),
    Decode(DecodeError),
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(error) => write!(f, "{error}"),
            Self::Decode(error) => write!(f, "{ERROR_DOMAIN}: {error}"),
        }
    }
}

impl StdError for ResponseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Transport(error) => Some(error),
            Self::Decode(error) => Some(error),
        }
    }
}

/// Everything the HTTP collaborator hands over for one completed exchange:
/// metadata, the raw body bytes if any arrived, and any transport failure.
#[derive(Debug, Default)]
pub struct RawResponse {
    pub url: Option<Url>,
    pub status: Option<StatusCode>,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    pub error: Option<TransportError>,
}

impl RawResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_error(mut self, error: TransportError) -> Self {
        self.error = Some(error);
        self
    }
}

/// The public result shape: original metadata on both branches, plus the
/// decode outcome.
#[derive(Debug)]
pub struct Response<T> {
    pub url: Option<Url>,
    pub status: Option<StatusCode>,
    pub headers: HeaderMap,
    pub result: Result<T, ResponseError>,
}

impl<T> Response<T> {
    pub fn value(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ResponseError> {
        self.result.as_ref().err()
    }
}

/// Decodes one completed response into a single `T`, optionally selecting
/// a sub-document first via `key_path`.
///
/// A pre-existing transport error short-circuits everything: the body is
/// ignored unparsed and the error passes through unchanged.
pub fn decode_response<T: Decodable>(raw: RawResponse, key_path: Option<&str>) -> Response<T> {
    let RawResponse {
        url,
        status,
        headers,
        body,
        error,
    } = raw;

    let result = match error {
        Some(transport) => {
            trace!(url = ?url, "transport error passed through without decoding");
            Err(ResponseError::Transport(transport))
        }
        None => run_pipeline::<T>(body.as_deref(), key_path).map_err(ResponseError::Decode),
    };

    match &result {
        Ok(_) => trace!(url = ?url, status = ?status, "response decoded"),
        Err(error) => debug!(url = ?url, status = ?status, %error, "response decode failed"),
    }

    Response {
        url,
        status,
        headers,
        result,
    }
}

/// Array-flavored entry point: decodes the selected document as a
/// homogeneous array of `T`.
pub fn decode_array_response<T: Decodable>(
    raw: RawResponse,
    key_path: Option<&str>,
) -> Response<Vec<T>> {
    decode_response::<Vec<T>>(raw, key_path)
}

fn run_pipeline<T: Decodable>(
    body: Option<&[u8]>,
    key_path: Option<&str>,
) -> Result<T, DecodeError> {
    let document = value::parse_body(body).into_result()?;
    let target = match key_path {
        Some(path) => keypath::navigate(&document, path).into_result()?,
        None => &document,
    };
    T::decode(target).into_result()
}
