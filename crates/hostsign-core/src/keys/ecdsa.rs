//! ECDSA P-256 / SHA-256.
//!
//! Signatures use the fixed 64-byte `r || s` layout rather than ASN.1 DER.

use p256::{
    ecdsa::{
        signature::{Signer, Verifier},
        Signature, SigningKey, VerifyingKey,
    },
    PublicKey, SecretKey,
};
use pkcs8::{DecodePrivateKey, DecodePublicKey};

pub(crate) fn import_signing_key(der: &[u8]) -> Result<SigningKey, String> {
    let secret = SecretKey::from_pkcs8_der(der).map_err(|e| e.to_string())?;
    Ok(SigningKey::from(&secret))
}

pub(crate) fn import_verifying_key(der: &[u8]) -> Result<VerifyingKey, String> {
    let public = PublicKey::from_public_key_der(der).map_err(|e| e.to_string())?;
    Ok(VerifyingKey::from(&public))
}

pub(crate) fn sign(key: &SigningKey, message: &[u8]) -> Result<Vec<u8>, String> {
    let signature: Signature = key.try_sign(message).map_err(|e| e.to_string())?;
    Ok(signature.to_bytes().to_vec())
}

pub(crate) fn verify(key: &VerifyingKey, message: &[u8], signature: &[u8]) -> Result<(), String> {
    let signature = Signature::from_slice(signature).map_err(|e| e.to_string())?;
    key.verify(message, &signature).map_err(|e| e.to_string())
}
