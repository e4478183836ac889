//! Purpose: Success/failure algebra for decode attempts.
//! Exports: `Decoded`, `DecodedTuple`, `all`.
//! Role: Pure result type; applicative combination accumulates independent field errors.
//! Invariants: Exactly one branch holds a value; operations are total and do no I/O.
//! Invariants: Combining two failures yields a flat `Multiple` in left-to-right order.

use crate::core::error::DecodeError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Decoded<T> {
    Success(T),
    Failure(DecodeError),
}

impl<T> Decoded<T> {
    /// Converts an optional value into a decode result, failing with
    /// `when_none` when the value is absent. Required-field decoding is
    /// built on this.
    pub fn from_optional(value: Option<T>, when_none: DecodeError) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Failure(when_none),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        match self {
            Self::Success(value) => Decoded::Success(f(value)),
            Self::Failure(error) => Decoded::Failure(error),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Decoded<U>) -> Decoded<U> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Decoded::Failure(error),
        }
    }

    /// Pairs two decode results. Both failing combines the errors in
    /// left-to-right order; the second error is never dropped.
    pub fn zip<U>(self, other: Decoded<U>) -> Decoded<(T, U)> {
        match (self, other) {
            (Self::Success(a), Decoded::Success(b)) => Decoded::Success((a, b)),
            (Self::Failure(a), Decoded::Failure(b)) => Decoded::Failure(a.combine(b)),
            (Self::Failure(a), _) => Decoded::Failure(a),
            (_, Decoded::Failure(b)) => Decoded::Failure(b),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn into_result(self) -> Result<T, DecodeError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    pub fn value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn error(self) -> Option<DecodeError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }
}

impl<F> Decoded<F> {
    /// Applies a decoded function to a decoded argument. Succeeds only when
    /// both sides succeed; when both fail the result is
    /// `Multiple([fn_failure, arg_failure])` in that order.
    pub fn apply<A, B>(self, arg: Decoded<A>) -> Decoded<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, arg) {
            (Self::Success(f), Decoded::Success(a)) => Decoded::Success(f(a)),
            (Self::Failure(fe), Decoded::Failure(ae)) => Decoded::Failure(fe.combine(ae)),
            (Self::Failure(fe), _) => Decoded::Failure(fe),
            (_, Decoded::Failure(ae)) => Decoded::Failure(ae),
        }
    }
}

/// Tuples of decode results that can be collapsed into one result of a tuple.
pub trait DecodedTuple {
    type Output;

    fn all(self) -> Decoded<Self::Output>;
}

/// Collapses a tuple of independent field decodes into a single result,
/// surfacing every failing field in declaration order. A single failure
/// passes through unchanged; two or more aggregate into `Multiple`.
pub fn all<T: DecodedTuple>(fields: T) -> Decoded<T::Output> {
    fields.all()
}

macro_rules! impl_decoded_tuple {
    ($($ty:ident),+) => {
        impl<$($ty),+> DecodedTuple for ($(Decoded<$ty>,)+) {
            type Output = ($($ty,)+);

            #[allow(non_snake_case)]
            fn all(self) -> Decoded<Self::Output> {
                match self {
                    ($(Decoded::Success($ty),)+) => Decoded::Success(($($ty,)+)),
                    ($($ty,)+) => {
                        let mut combined: Option<DecodeError> = None;
                        $(
                            if let Decoded::Failure(error) = $ty {
                                combined = Some(match combined.take() {
                                    Some(acc) => acc.combine(error),
                                    None => error,
                                });
                            }
                        )+
                        match combined {
                            Some(error) => Decoded::Failure(error),
                            // This arm only matches when at least one field failed.
                            None => Decoded::Failure(DecodeError::Multiple(Vec::new())),
                        }
                    }
                }
            }
        }
    };
}

impl_decoded_tuple!(A, B);
impl_decoded_tuple!(A, B, C);
impl_decoded_tuple!(A, B, C, D);
impl_decoded_tuple!(A, B, C, D, E);
impl_decoded_tuple!(A, B, C, D, E, F);
impl_decoded_tuple!(A, B, C, D, E, F, G);
impl_decoded_tuple!(A, B, C, D, E, F, G, H);
