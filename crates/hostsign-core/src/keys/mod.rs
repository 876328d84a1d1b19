//! Imported key handles.
//!
//! Handles are created once from DER and are read-only afterwards. Nothing in
//! this module hands private key bytes back out.

mod ecdsa;
mod rsa_pkcs1;

use sha2::Sha256;
use std::fmt;
use tracing::debug;

use crate::algorithm::{Algorithm, IMPORT_ORDER};
use crate::errors::ImportError;
use crate::pem::{key_der, KeyRole};

/// Private half of an imported key pair.
pub(crate) enum SigningHandle {
    EcdsaP256(p256::ecdsa::SigningKey),
    RsaPkcs1v15(rsa::pkcs1v15::SigningKey<Sha256>),
}

/// Public half of an imported key pair.
pub(crate) enum VerifyingHandle {
    EcdsaP256(p256::ecdsa::VerifyingKey),
    RsaPkcs1v15(rsa::pkcs1v15::VerifyingKey<Sha256>),
}

impl SigningHandle {
    fn import(algorithm: Algorithm, der: &[u8]) -> Result<Self, String> {
        match algorithm {
            Algorithm::EcdsaP256Sha256 => ecdsa::import_signing_key(der).map(Self::EcdsaP256),
            Algorithm::RsaPkcs1v15Sha256 => {
                rsa_pkcs1::import_signing_key(der).map(Self::RsaPkcs1v15)
            }
        }
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        match self {
            Self::EcdsaP256(_) => Algorithm::EcdsaP256Sha256,
            Self::RsaPkcs1v15(_) => Algorithm::RsaPkcs1v15Sha256,
        }
    }

    pub(crate) fn sign(&self, message: &[u8]) -> Result<Vec<u8>, String> {
        match self {
            Self::EcdsaP256(key) => ecdsa::sign(key, message),
            Self::RsaPkcs1v15(key) => rsa_pkcs1::sign(key, message),
        }
    }
}

impl VerifyingHandle {
    fn import(algorithm: Algorithm, der: &[u8]) -> Result<Self, String> {
        match algorithm {
            Algorithm::EcdsaP256Sha256 => ecdsa::import_verifying_key(der).map(Self::EcdsaP256),
            Algorithm::RsaPkcs1v15Sha256 => {
                rsa_pkcs1::import_verifying_key(der).map(Self::RsaPkcs1v15)
            }
        }
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        match self {
            Self::EcdsaP256(_) => Algorithm::EcdsaP256Sha256,
            Self::RsaPkcs1v15(_) => Algorithm::RsaPkcs1v15Sha256,
        }
    }

    pub(crate) fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), String> {
        match self {
            Self::EcdsaP256(key) => ecdsa::verify(key, message, signature),
            Self::RsaPkcs1v15(key) => rsa_pkcs1::verify(key, message, signature),
        }
    }
}

/// Signing and verification handles imported under one algorithm.
pub(crate) struct KeyMaterial {
    pub(crate) signing: SigningHandle,
    pub(crate) verifying: VerifyingHandle,
}

impl KeyMaterial {
    /// Imports a private/public key pair, trying each algorithm in
    /// [`IMPORT_ORDER`] until one accepts both keys.
    pub(crate) fn import(private_key: &str, public_key: &str) -> Result<Self, ImportError> {
        let private_der = key_der(private_key, KeyRole::Private)?;
        let public_der = key_der(public_key, KeyRole::Public)?;

        let mut attempts = Vec::with_capacity(IMPORT_ORDER.len());
        for &algorithm in IMPORT_ORDER {
            let imported = SigningHandle::import(algorithm, &private_der)
                .map_err(|e| format!("private key: {e}"))
                .and_then(|signing| {
                    VerifyingHandle::import(algorithm, &public_der)
                        .map(|verifying| Self { signing, verifying })
                        .map_err(|e| format!("public key: {e}"))
                });
            match imported {
                Ok(material) => {
                    debug!(%algorithm, "imported key pair");
                    return Ok(material);
                }
                Err(reason) => {
                    debug!(%algorithm, %reason, "key pair import attempt failed");
                    attempts.push(format!("{algorithm}: {reason}"));
                }
            }
        }
        Err(ImportError::Unsupported { attempts })
    }

    /// Algorithm both handles were imported under.
    pub(crate) fn algorithm(&self) -> Algorithm {
        self.signing.algorithm()
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("algorithm", &self.algorithm())
            .field("signing", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Imports a lone public key under the first algorithm that accepts it.
pub(crate) fn import_public_key(public_key: &str) -> Result<VerifyingHandle, ImportError> {
    let public_der = key_der(public_key, KeyRole::Public)?;

    let mut attempts = Vec::with_capacity(IMPORT_ORDER.len());
    for &algorithm in IMPORT_ORDER {
        match VerifyingHandle::import(algorithm, &public_der) {
            Ok(handle) => {
                debug!(%algorithm, "imported public key");
                return Ok(handle);
            }
            Err(reason) => {
                debug!(%algorithm, %reason, "public key import attempt failed");
                attempts.push(format!("{algorithm}: public key: {reason}"));
            }
        }
    }
    Err(ImportError::Unsupported { attempts })
}
