use base64::Engine as _;
use hostsign_canonical::Canonicalizer;
use serde_json::Value;
use tracing::{debug, warn};

use crate::algorithm::Algorithm;
use crate::errors::ImportError;
use crate::keys::{import_public_key, VerifyingHandle};
use crate::pem::BASE64_LENIENT;

/// Verify-only counterpart of [`crate::RequestSigner`], built from a public key alone.
pub struct RequestVerifier {
    handle: VerifyingHandle,
    canonicalizer: Canonicalizer,
}

impl RequestVerifier {
    /// Imports an SPKI public key given as raw base64 or PEM.
    pub fn from_public_key(public_key: &str) -> Result<Self, ImportError> {
        let handle = import_public_key(public_key).inspect_err(|e| {
            warn!(error = %e, "public key import failed");
        })?;
        Ok(Self {
            handle,
            canonicalizer: Canonicalizer::new(),
        })
    }

    /// Replaces the canonicalizer, e.g. to pin the injected timestamp.
    pub fn with_canonicalizer(mut self, canonicalizer: Canonicalizer) -> Self {
        self.canonicalizer = canonicalizer;
        self
    }

    /// Algorithm the public key was imported under.
    pub fn algorithm(&self) -> Algorithm {
        self.handle.algorithm()
    }

    /// Checks `signature` against the canonical form of `data`.
    ///
    /// Every failure, including undecodable base64, resolves to `false`.
    pub fn verify_signature(&self, data: &Value, signature: &str) -> bool {
        verify_with(&self.handle, &self.canonicalizer, data, signature)
    }
}

pub(crate) fn verify_with(
    handle: &VerifyingHandle,
    canonicalizer: &Canonicalizer,
    data: &Value,
    signature: &str,
) -> bool {
    let canonical = match canonicalizer.canonicalize(data) {
        Ok(canonical) => canonical,
        Err(e) => {
            debug!(error = %e, "verification failed: payload not canonicalizable");
            return false;
        }
    };
    let signature = match BASE64_LENIENT.decode(signature.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(error = %e, "verification failed: signature is not base64");
            return false;
        }
    };
    match handle.verify(&canonical.bytes, &signature) {
        Ok(()) => true,
        Err(reason) => {
            debug!(algorithm = %handle.algorithm(), %reason, "verification failed");
            false
        }
    }
}
