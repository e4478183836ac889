//! Purpose: Typed key-path decoding from raw JSON HTTP responses into domain objects.
//! Exports: `core` (value parsing, key paths, decode algebra, decoders) and `api` (pipeline).
//! Role: Pure decode library; the HTTP round trip itself belongs to the caller.
//! Invariants: The decode core performs no I/O and holds no shared mutable state.
//! Invariants: Transport failures pass through the pipeline untouched.

pub mod api;
pub mod core;
