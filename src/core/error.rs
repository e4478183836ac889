//! Purpose: Structured error modeling for the decode pipeline.
//! Exports: `DecodeError`, `ERROR_DOMAIN`.
//! Role: Single error vocabulary shared by parsing, navigation, and decoders.
//! Invariants: Combining failures preserves left-to-right order and never drops errors.
//! Invariants: Each variant carries enough context to render a diagnostic without re-reading the payload.

use std::error::Error as StdError;
use std::fmt;

/// Fixed namespace identifying decode failures in caller-facing output,
/// distinct from generic application errors.
pub const ERROR_DOMAIN: &str = "decant.decode";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// The JSON variant did not match what the decoder expected.
    TypeMismatch { expected: String, actual: String },
    /// A direct object-member lookup found no such key.
    MissingKey { key: String },
    /// The raw bytes could not be parsed as JSON, or there were no bytes at all.
    ParseFailure { message: String },
    /// Key-path navigation failed; carries the full original path, not the failing segment.
    PathNotFound { path: String },
    /// Positional context for a failure inside an array element.
    AtIndex {
        index: usize,
        source: Box<DecodeError>,
    },
    /// Ordered aggregate of independent failures, e.g. several bad fields.
    Multiple(Vec<DecodeError>),
}

impl DecodeError {
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    pub fn parse_failure(message: impl Into<String>) -> Self {
        Self::ParseFailure {
            message: message.into(),
        }
    }

    pub fn path_not_found(path: impl Into<String>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    pub fn at_index(index: usize, source: DecodeError) -> Self {
        Self::AtIndex {
            index,
            source: Box::new(source),
        }
    }

    /// Merges two failures into a `Multiple`, flattening nested aggregates so
    /// long applicative chains stay a single flat, ordered list.
    pub fn combine(self, other: DecodeError) -> Self {
        let mut errors = match self {
            Self::Multiple(errors) => errors,
            single => vec![single],
        };
        match other {
            Self::Multiple(mut more) => errors.append(&mut more),
            single => errors.push(single),
        }
        Self::Multiple(errors)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, actual } => {
                write!(f, "type mismatch: expected {expected}, got {actual}")
            }
            Self::MissingKey { key } => write!(f, "missing key: {key}"),
            Self::ParseFailure { message } => write!(f, "parse failure: {message}"),
            Self::PathNotFound { path } => write!(f, "path not found: {path}"),
            Self::AtIndex { index, source } => write!(f, "[{index}]: {source}"),
            Self::Multiple(errors) => {
                write!(f, "multiple errors:")?;
                for (position, error) in errors.iter().enumerate() {
                    if position > 0 {
                        write!(f, ";")?;
                    }
                    write!(f, " {error}")?;
                }
                Ok(())
            }
        }
    }
}

impl StdError for DecodeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::AtIndex { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
