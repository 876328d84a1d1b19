//! Canonical request payloads for the hostsign signing shim.
//!
//! A payload is canonicalized before it is signed or verified: every object's
//! keys are emitted in ascending code-point order at every depth, array order is
//! preserved, and a top-level object gains a millisecond `timestamp` when it
//! does not already carry a truthy one. The bytes that get signed are the
//! RFC 8785 (JSON Canonicalization Scheme) encoding of that tree, which is
//! what `JSON.stringify` produces for the same key-sorted object.
//!
#![deny(missing_docs)]

/// Canonicalization of JSON values into signable bytes.
pub mod canonicalizer;
/// Timestamp injection rules and the wall clock.
pub mod timestamp;

pub use canonicalizer::{
    canonicalize, sort_keys, to_canonical_bytes, CanonicalizationError, CanonicalizationResult,
    Canonicalizer,
};
pub use timestamp::{is_truthy, now_millis, Clock, TIMESTAMP_FIELD};
