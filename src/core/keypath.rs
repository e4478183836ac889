//! Purpose: Resolve dot-delimited key paths against parsed JSON values.
//! Exports: `navigate`, `DELIMITER`.
//! Role: Sub-document selection step that runs before a decoder is invoked.
//! Invariants: Navigation failures carry the full original path, not the failing segment.
//! Invariants: Segments resolve object members only; numeric segments are member names, never array indices.

use crate::core::decoded::Decoded;
use crate::core::error::DecodeError;
use crate::core::value::Value;

pub const DELIMITER: char = '.';

/// Walks `path` through nested objects and returns the selected sub-value.
///
/// The empty path is an identity navigation and returns the input value
/// unchanged. A missing segment, or a non-object value encountered while
/// segments remain, fails with `PathNotFound` carrying the whole path.
pub fn navigate<'a>(value: &'a Value, path: &str) -> Decoded<&'a Value> {
    if path.is_empty() {
        return Decoded::Success(value);
    }

    let mut current = value;
    for segment in path.split(DELIMITER) {
        let Value::Object(members) = current else {
            return Decoded::Failure(DecodeError::path_not_found(path));
        };
        match members.get(segment) {
            Some(next) => current = next,
            None => return Decoded::Failure(DecodeError::path_not_found(path)),
        }
    }
    Decoded::Success(current)
}

#[cfg(test)]
mod tests {
    use super::navigate;
    use crate::core::decoded::Decoded;
    use crate::core::error::DecodeError;
    use serde_json::json;

    #[test]
    fn empty_path_is_identity() {
        let value = json!({"user": {"id": 1}});
        assert_eq!(navigate(&value, ""), Decoded::Success(&value));

        let scalar = json!(42);
        assert_eq!(navigate(&scalar, ""), Decoded::Success(&scalar));
    }

    #[test]
    fn nested_paths_select_sub_documents() {
        let value = json!({"user": {"company": {"name": "Acme"}}});
        assert_eq!(
            navigate(&value, "user.company.name"),
            Decoded::Success(&json!("Acme"))
        );
    }

    #[test]
    fn missing_first_segment_reports_the_full_path() {
        let value = json!({"user": {"id": 1}});
        assert_eq!(
            navigate(&value, "account.id"),
            Decoded::Failure(DecodeError::path_not_found("account.id"))
        );
    }

    #[test]
    fn missing_later_segment_reports_the_full_path() {
        let value = json!({"user": {"id": 1}});
        assert_eq!(
            navigate(&value, "user.nonexistent"),
            Decoded::Failure(DecodeError::path_not_found("user.nonexistent"))
        );
    }

    #[test]
    fn non_object_mid_path_reports_the_full_path() {
        let value = json!({"user": {"id": 1}});
        assert_eq!(
            navigate(&value, "user.id.digits"),
            Decoded::Failure(DecodeError::path_not_found("user.id.digits"))
        );
    }

    #[test]
    fn numeric_segments_do_not_index_arrays() {
        let value = json!({"items": [10, 20, 30]});
        assert_eq!(
            navigate(&value, "items.0"),
            Decoded::Failure(DecodeError::path_not_found("items.0"))
        );
    }

    #[test]
    fn navigating_to_an_explicit_null_succeeds() {
        let value = json!({"user": {"email": null}});
        assert_eq!(
            navigate(&value, "user.email"),
            Decoded::Success(&json!(null))
        );
    }
}
