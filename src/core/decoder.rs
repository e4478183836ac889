//! Purpose: Decoder protocol and built-in decoders for primitives and containers.
//! Exports: `Decodable`, `required`, `optional`, `member`, `decode_variant`.
//! Role: The capability seam domain types implement to opt into the pipeline.
//! Invariants: Decoders are pure and stateless; safe to call from any thread.
//! Invariants: Integer decoders reject non-integral and out-of-range JSON numbers.
//! Invariants: Array decoding reports every failing index, not just the first.

use crate::core::decoded::Decoded;
use crate::core::error::DecodeError;
use crate::core::keypath;
use crate::core::value::{self, Value};

/// A type that can be synthesized from a JSON value, potentially failing
/// with a structured decode error.
pub trait Decodable: Sized {
    fn decode(value: &Value) -> Decoded<Self>;
}

fn mismatch(expected: &str, value: &Value) -> DecodeError {
    DecodeError::type_mismatch(expected, value::debug_description(value))
}

impl Decodable for bool {
    fn decode(value: &Value) -> Decoded<Self> {
        match value {
            Value::Bool(flag) => Decoded::Success(*flag),
            other => Decoded::Failure(mismatch("boolean", other)),
        }
    }
}

impl Decodable for String {
    fn decode(value: &Value) -> Decoded<Self> {
        match value {
            Value::String(text) => Decoded::Success(text.clone()),
            other => Decoded::Failure(mismatch("string", other)),
        }
    }
}

impl Decodable for f64 {
    fn decode(value: &Value) -> Decoded<Self> {
        match value {
            Value::Number(number) => {
                Decoded::from_optional(number.as_f64(), mismatch("number", value))
            }
            other => Decoded::Failure(mismatch("number", other)),
        }
    }
}

impl Decodable for i64 {
    fn decode(value: &Value) -> Decoded<Self> {
        match value {
            Value::Number(number) => {
                Decoded::from_optional(number.as_i64(), mismatch("integer", value))
            }
            other => Decoded::Failure(mismatch("integer", other)),
        }
    }
}

impl Decodable for u64 {
    fn decode(value: &Value) -> Decoded<Self> {
        match value {
            Value::Number(number) => {
                Decoded::from_optional(number.as_u64(), mismatch("unsigned integer", value))
            }
            other => Decoded::Failure(mismatch("unsigned integer", other)),
        }
    }
}

impl Decodable for i32 {
    fn decode(value: &Value) -> Decoded<Self> {
        match value {
            Value::Number(number) => {
                let narrowed = number.as_i64().and_then(|wide| i32::try_from(wide).ok());
                Decoded::from_optional(narrowed, mismatch("32-bit integer", value))
            }
            other => Decoded::Failure(mismatch("32-bit integer", other)),
        }
    }
}

impl Decodable for u32 {
    fn decode(value: &Value) -> Decoded<Self> {
        match value {
            Value::Number(number) => {
                let narrowed = number.as_u64().and_then(|wide| u32::try_from(wide).ok());
                Decoded::from_optional(narrowed, mismatch("32-bit unsigned integer", value))
            }
            other => Decoded::Failure(mismatch("32-bit unsigned integer", other)),
        }
    }
}

impl<T: Decodable> Decodable for Option<T> {
    fn decode(value: &Value) -> Decoded<Self> {
        match value {
            Value::Null => Decoded::Success(None),
            other => T::decode(other).map(Some),
        }
    }
}

impl<T: Decodable> Decodable for Vec<T> {
    fn decode(value: &Value) -> Decoded<Self> {
        let Value::Array(items) = value else {
            return Decoded::Failure(mismatch("array", value));
        };

        let mut decoded = Vec::with_capacity(items.len());
        let mut errors = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match T::decode(item) {
                Decoded::Success(element) => decoded.push(element),
                Decoded::Failure(error) => errors.push(DecodeError::at_index(index, error)),
            }
        }

        if errors.is_empty() {
            Decoded::Success(decoded)
        } else {
            Decoded::Failure(DecodeError::Multiple(errors))
        }
    }
}

/// Navigates to `path` and decodes the selected value. Absence of the path
/// is a failure; use [`optional`] for fields that may be missing.
pub fn required<T: Decodable>(value: &Value, path: &str) -> Decoded<T> {
    match keypath::navigate(value, path) {
        Decoded::Success(found) => T::decode(found),
        Decoded::Failure(error) => Decoded::Failure(error),
    }
}

/// Navigates to `path` and decodes the selected value, treating an absent
/// path or an explicit `null` as `Success(None)`. Any other value must
/// decode cleanly; a wrong-typed present value is still a failure.
pub fn optional<T: Decodable>(value: &Value, path: &str) -> Decoded<Option<T>> {
    match keypath::navigate(value, path) {
        Decoded::Success(Value::Null) => Decoded::Success(None),
        Decoded::Success(found) => T::decode(found).map(Some),
        Decoded::Failure(
            DecodeError::PathNotFound { .. } | DecodeError::MissingKey { .. },
        ) => Decoded::Success(None),
        Decoded::Failure(error) => Decoded::Failure(error),
    }
}

/// Direct single-member lookup, for decoders that address one key at a
/// time rather than a dotted path. A missing key fails with `MissingKey`.
pub fn member<'a>(value: &'a Value, key: &str) -> Decoded<&'a Value> {
    match value {
        Value::Object(members) => match members.get(key) {
            Some(found) => Decoded::Success(found),
            None => Decoded::Failure(DecodeError::missing_key(key)),
        },
        other => Decoded::Failure(mismatch("object", other)),
    }
}

/// Decodes a closed set of string variants by exact raw-value match.
/// `from_raw` returns the variant for a recognized raw string; anything
/// else (including non-string values) fails with `TypeMismatch` naming the
/// enum.
pub fn decode_variant<T>(
    value: &Value,
    enum_name: &str,
    from_raw: impl FnOnce(&str) -> Option<T>,
) -> Decoded<T> {
    match value {
        Value::String(raw) => Decoded::from_optional(
            from_raw(raw),
            DecodeError::type_mismatch(enum_name, format!("string `\"{raw}\"`")),
        ),
        other => Decoded::Failure(mismatch(enum_name, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::{Decodable, decode_variant, member, optional, required};
    use crate::core::decoded::Decoded;
    use crate::core::error::DecodeError;
    use serde_json::json;

    #[test]
    fn primitive_mismatches_name_expected_and_actual() {
        let result = String::decode(&json!(42));
        assert_eq!(
            result,
            Decoded::Failure(DecodeError::type_mismatch("string", "number `42`"))
        );
    }

    #[test]
    fn integer_decoding_rejects_fractional_numbers() {
        assert!(!i64::decode(&json!(1.5)).is_success());
        assert_eq!(i64::decode(&json!(7)), Decoded::Success(7));
    }

    #[test]
    fn unsigned_decoding_rejects_negative_numbers() {
        assert!(!u64::decode(&json!(-1)).is_success());
        assert_eq!(u64::decode(&json!(7)), Decoded::Success(7u64));
    }

    #[test]
    fn narrow_integers_reject_out_of_range_values() {
        assert!(!i32::decode(&json!(i64::from(i32::MAX) + 1)).is_success());
        assert_eq!(i32::decode(&json!(-5)), Decoded::Success(-5));
        assert!(!u32::decode(&json!(u64::from(u32::MAX) + 1)).is_success());
    }

    #[test]
    fn option_decodes_null_to_none_and_delegates_otherwise() {
        assert_eq!(Option::<String>::decode(&json!(null)), Decoded::Success(None));
        assert_eq!(
            Option::<String>::decode(&json!("hi")),
            Decoded::Success(Some("hi".to_owned()))
        );
        assert!(!Option::<String>::decode(&json!(42)).is_success());
    }

    #[test]
    fn array_decoding_aggregates_every_failing_index() {
        let value = json!([1, 2, "x", 4, true]);
        let result = Vec::<i64>::decode(&value);

        let Decoded::Failure(DecodeError::Multiple(errors)) = result else {
            panic!("mixed array must aggregate failures");
        };
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], DecodeError::AtIndex { index: 2, .. }));
        assert!(matches!(errors[1], DecodeError::AtIndex { index: 4, .. }));
    }

    #[test]
    fn array_decoding_requires_an_array() {
        assert_eq!(
            Vec::<i64>::decode(&json!({"not": "array"})),
            Decoded::Failure(DecodeError::type_mismatch(
                "array",
                "object `{\"not\":\"array\"}`"
            ))
        );
    }

    #[test]
    fn required_field_surfaces_navigation_failures() {
        let value = json!({"user": {"id": 1}});
        assert_eq!(required::<u64>(&value, "user.id"), Decoded::Success(1u64));
        assert_eq!(
            required::<u64>(&value, "user.missing"),
            Decoded::Failure(DecodeError::path_not_found("user.missing"))
        );
    }

    #[test]
    fn optional_field_treats_absence_and_null_as_none() {
        let value = json!({"email": null});
        assert_eq!(optional::<String>(&value, "email"), Decoded::Success(None));
        assert_eq!(optional::<String>(&value, "phone"), Decoded::Success(None));
    }

    #[test]
    fn optional_field_still_rejects_wrong_types() {
        let value = json!({"email": 42});
        assert_eq!(
            optional::<String>(&value, "email"),
            Decoded::Failure(DecodeError::type_mismatch("string", "number `42`"))
        );
    }

    #[test]
    fn member_lookup_distinguishes_missing_key_from_wrong_shape() {
        let value = json!({"id": 1});
        assert_eq!(member(&value, "id"), Decoded::Success(&json!(1)));
        assert_eq!(
            member(&value, "name"),
            Decoded::Failure(DecodeError::missing_key("name"))
        );
        assert!(!member(&json!([1]), "id").is_success());
    }

    #[test]
    fn variant_decoding_matches_raw_strings_exactly() {
        #[derive(Debug, Eq, PartialEq)]
        enum Role {
            Admin,
            User,
        }
        let from_raw = |raw: &str| match raw {
            "Admin" => Some(Role::Admin),
            "User" => Some(Role::User),
            _ => None,
        };

        assert_eq!(
            decode_variant(&json!("Admin"), "Role", from_raw),
            Decoded::Success(Role::Admin)
        );
        assert_eq!(
            decode_variant(&json!("admin"), "Role", from_raw),
            Decoded::Failure(DecodeError::type_mismatch("Role", "string `\"admin\"`"))
        );
        assert!(!decode_variant(&json!(1), "Role", from_raw).is_success());
    }
}
