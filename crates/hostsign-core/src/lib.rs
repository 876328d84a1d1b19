//! Request signing and verification for the hostsign plugin shim.
//!
//! This crate provides:
//! - Key import from raw base64 or PEM text, with ECDSA P-256 tried before
//!   RSA PKCS#1 v1.5 (see [`IMPORT_ORDER`])
//! - [`RequestSigner`], which canonicalizes a JSON payload and signs its bytes
//! - [`RequestVerifier`], a verify-only variant built from a public key
//! - [`generate_key_pair`] for fresh development keys
//!
//! Invariants:
//! - An instance's algorithm is fixed at import and never changes
//! - Imported private keys cannot be exported again
//! - Verification is a predicate: malformed input yields `false`, never an error
//!
#![deny(missing_docs)]

/// Supported algorithms and their import order.
pub mod algorithm;
/// Error types for import, signing and generation.
pub mod errors;
/// Key-pair generation.
pub mod keygen;
/// Imported key handles.
mod keys;
/// PEM normalization of key text.
pub mod pem;
/// Signed request envelope.
pub mod signature;
/// Canonicalize-then-sign entry point.
pub mod signer;
/// Verify-only entry point.
pub mod verifier;

pub use algorithm::{Algorithm, IMPORT_ORDER};
pub use errors::{GenerationError, ImportError, SigningError, SUPPORTED_KEYS};
pub use keygen::{generate_key_pair, GeneratedKeyPair};
pub use pem::{decode_pem, normalize_pem, KeyRole};
pub use signature::SignatureResult;
pub use signer::RequestSigner;
pub use verifier::RequestVerifier;
