use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hostsign_canonical::Canonicalizer;
use serde_json::Value;
use tracing::{debug, warn};

use crate::algorithm::Algorithm;
use crate::errors::{ImportError, SigningError};
use crate::keys::KeyMaterial;
use crate::signature::SignatureResult;
use crate::verifier::verify_with;

/// Signs and verifies request payloads with one imported key pair.
///
/// The algorithm is fixed at [`RequestSigner::initialize`]. Handles are
/// read-only, so a shared reference can be used from many threads at once.
#[derive(Debug)]
pub struct RequestSigner {
    keys: KeyMaterial,
    canonicalizer: Canonicalizer,
}

impl RequestSigner {
    /// Imports the key pair, detecting its encoding and algorithm.
    pub fn initialize(private_key: &str, public_key: &str) -> Result<Self, ImportError> {
        let keys = KeyMaterial::import(private_key, public_key).inspect_err(|e| {
            warn!(error = %e, "key pair import failed");
        })?;
        Ok(Self {
            keys,
            canonicalizer: Canonicalizer::new(),
        })
    }

    /// Replaces the canonicalizer, e.g. to pin the injected timestamp.
    pub fn with_canonicalizer(mut self, canonicalizer: Canonicalizer) -> Self {
        self.canonicalizer = canonicalizer;
        self
    }

    /// Algorithm detected during import.
    pub fn algorithm(&self) -> Algorithm {
        self.keys.algorithm()
    }

    /// Canonicalizes `data` and signs its bytes.
    pub fn sign_request(&self, data: &Value) -> Result<SignatureResult, SigningError> {
        let canonical = self.canonicalizer.canonicalize(data)?;
        let algorithm = self.algorithm();
        let raw = self
            .keys
            .signing
            .sign(&canonical.bytes)
            .map_err(|reason| SigningError::Crypto { algorithm, reason })?;
        debug!(%algorithm, bytes = canonical.bytes.len(), "signed request");
        Ok(SignatureResult {
            request: canonical.payload,
            signature: BASE64.encode(raw),
        })
    }

    /// Checks `signature` against the canonical form of `data`.
    ///
    /// Every failure, including undecodable base64, resolves to `false`.
    pub fn verify_signature(&self, data: &Value, signature: &str) -> bool {
        verify_with(&self.keys.verifying, &self.canonicalizer, data, signature)
    }
}
