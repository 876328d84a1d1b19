//! Development key-pair generation.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use p256::SecretKey;
use pkcs8::{EncodePrivateKey, EncodePublicKey};
use rand_core::OsRng;
use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;
use crate::pem::{normalize_pem, KeyRole};

/// Freshly generated, exportable key pair as base64 DER.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedKeyPair {
    /// Base64 PKCS#8 private key.
    pub private_key: String,
    /// Base64 SPKI public key.
    pub public_key: String,
}

impl GeneratedKeyPair {
    /// Private key wrapped as `PRIVATE KEY` PEM.
    pub fn private_key_pem(&self) -> String {
        normalize_pem(&self.private_key, KeyRole::Private)
    }

    /// Public key wrapped as `PUBLIC KEY` PEM.
    pub fn public_key_pem(&self) -> String {
        normalize_pem(&self.public_key, KeyRole::Public)
    }
}

/// Generates an ECDSA P-256 key pair. RSA is never generated.
pub fn generate_key_pair() -> Result<GeneratedKeyPair, GenerationError> {
    let secret = SecretKey::random(&mut OsRng);
    let private_der = secret.to_pkcs8_der()?;
    let public_der = secret.public_key().to_public_key_der()?;
    Ok(GeneratedKeyPair {
        private_key: BASE64.encode(private_der.as_bytes()),
        public_key: BASE64.encode(public_der.as_bytes()),
    })
}
