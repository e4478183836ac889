//! Purpose: Define the stable public decoding API surface.
//! Exports: Response pipeline entry points plus the decode core types they rest on.
//! Role: Public, additive-only boundary; internal modules stay behind re-exports.
//! Invariants: Request/response metadata survives both success and failure outcomes.

mod response;
mod transport;

pub use crate::core::decoded::{Decoded, DecodedTuple, all};
pub use crate::core::decoder::{Decodable, decode_variant, member, optional, required};
pub use crate::core::error::{DecodeError, ERROR_DOMAIN};
pub use crate::core::keypath::navigate;
pub use crate::core::value::{Value, debug_description, kind, parse, parse_body};
pub use response::{
    RawResponse, Response, ResponseError, TransportError, decode_array_response, decode_response,
};
pub use transport::from_ureq;
