//! RSASSA-PKCS1-v1_5 / SHA-256, for pre-existing RSA key pairs.

use pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{
    pkcs1v15::{Signature, SigningKey, VerifyingKey},
    signature::{SignatureEncoding, Signer, Verifier},
    RsaPrivateKey, RsaPublicKey,
};
use sha2::Sha256;

pub(crate) fn import_signing_key(der: &[u8]) -> Result<SigningKey<Sha256>, String> {
    let private_key = RsaPrivateKey::from_pkcs8_der(der).map_err(|e| e.to_string())?;
    Ok(SigningKey::<Sha256>::new(private_key))
}

pub(crate) fn import_verifying_key(der: &[u8]) -> Result<VerifyingKey<Sha256>, String> {
    let public_key = RsaPublicKey::from_public_key_der(der).map_err(|e| e.to_string())?;
    Ok(VerifyingKey::<Sha256>::new(public_key))
}

pub(crate) fn sign(key: &SigningKey<Sha256>, message: &[u8]) -> Result<Vec<u8>, String> {
    let signature: Signature = key.try_sign(message).map_err(|e| e.to_string())?;
    Ok(signature.to_vec())
}

pub(crate) fn verify(
    key: &VerifyingKey<Sha256>,
    message: &[u8],
    signature: &[u8],
) -> Result<(), String> {
    let signature = Signature::try_from(signature).map_err(|e| e.to_string())?;
    key.verify(message, &signature).map_err(|e| e.to_string())
}
