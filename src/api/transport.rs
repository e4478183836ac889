//! Purpose: Adapt `ureq` call outcomes into the pipeline's raw-response input.
//! Exports: `from_ureq`.
//! Role: Transport glue only; performs no decoding and owns no policy.
//! Invariants: HTTP-status errors still surface their body so decoding can proceed.
//! Invariants: Transport-class failures map to an opaque `TransportError`, untouched.

use std::io::Read;

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};
use url::Url;

use super::response::{RawResponse, TransportError};

/// Ceiling on how much of a response body is read into memory.
const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Converts the outcome of a `ureq` call into a [`RawResponse`].
///
/// A `ureq::Error::Status` still carries a readable response and is
/// treated as a normal exchange; only transport-class failures populate
/// the error channel.
pub fn from_ureq(url: Url, outcome: Result<ureq::Response, ureq::Error>) -> RawResponse {
    match outcome {
        Ok(response) => from_response(url, response),
        Err(ureq::Error::Status(_status, response)) => from_response(url, response),
        Err(ureq::Error::Transport(transport)) => RawResponse::new()
            .with_url(url)
            .with_error(TransportError::new(transport)),
    }
}

fn from_response(url: Url, response: ureq::Response) -> RawResponse {
    let status = StatusCode::from_u16(response.status()).ok();

    let mut headers = HeaderMap::new();
    for name in response.headers_names() {
        let Ok(header) = HeaderName::from_bytes(name.as_bytes()) else {
            continue;
        };
        let Some(raw_value) = response.header(&name) else {
            continue;
        };
        if let Ok(header_value) = HeaderValue::from_str(raw_value) {
            headers.append(header, header_value);
        }
    }

    let mut body = Vec::new();
    let read = response
        .into_reader()
        .take(MAX_BODY_BYTES)
        .read_to_end(&mut body);

    let mut raw = RawResponse::new().with_url(url).with_headers(headers);
    if let Some(status) = status {
        raw = raw.with_status(status);
    }
    match read {
        Ok(_) => raw.with_body(Bytes::from(body)),
        Err(error) => raw.with_error(TransportError::new(error)),
    }
}
