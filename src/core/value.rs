//! Purpose: Internal JSON parsing boundary for the decode pipeline.
//! Exports: `parse`, `parse_body`, `kind`, `debug_description`, re-exported `Value`.
//! Role: Single seam for parser usage so callsites avoid ad hoc parse logic.
//! Invariants: All runtime JSON parsing goes through this module.
//! Invariants: Parser limits are serde_json defaults (128-level recursion); no config knob.

use crate::core::decoded::Decoded;
use crate::core::error::DecodeError;

pub use serde_json::Value;

/// Ceiling on rendered-value length in diagnostics, so a mismatch on a
/// large subtree does not dump the whole payload into the error.
const DESCRIPTION_LIMIT: usize = 80;

/// Parses raw bytes into a JSON value. Malformed input (truncated bodies,
/// invalid UTF-8, trailing garbage, recursion past the parser limit) fails
/// with `ParseFailure` carrying the parser's own message.
pub fn parse(bytes: &[u8]) -> Decoded<Value> {
    match serde_json::from_slice(bytes) {
        Ok(value) => Decoded::Success(value),
        Err(error) => Decoded::Failure(DecodeError::parse_failure(error.to_string())),
    }
}

/// Parses an optional response body. An absent body is a `ParseFailure`
/// with a descriptive reason, never a panic.
pub fn parse_body(body: Option<&[u8]>) -> Decoded<Value> {
    match body {
        Some(bytes) => parse(bytes),
        None => Decoded::Failure(DecodeError::parse_failure(
            "response body was empty; nothing to decode",
        )),
    }
}

/// Stable name for a value's JSON variant, used in mismatch diagnostics.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Compact human-readable rendering of a value for diagnostics, truncated
/// to a fixed width.
pub fn debug_description(value: &Value) -> String {
    let rendered = value.to_string();
    let compact = if rendered.chars().count() > DESCRIPTION_LIMIT {
        let mut truncated: String = rendered.chars().take(DESCRIPTION_LIMIT).collect();
        truncated.push_str("...");
        truncated
    } else {
        rendered
    };
    format!("{} `{compact}`", kind(value))
}
