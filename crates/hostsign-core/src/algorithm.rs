use serde::{Deserialize, Serialize};
use std::fmt;

/// Signature algorithms a key pair can be imported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// ECDSA over NIST P-256 with SHA-256; the default and the only generated kind.
    #[serde(rename = "ECDSA-P256-SHA256")]
    EcdsaP256Sha256,
    /// RSASSA-PKCS1-v1_5 with SHA-256, accepted for pre-existing keys.
    #[serde(rename = "RSA-PKCS1v15-SHA256")]
    RsaPkcs1v15Sha256,
}

/// Order in which key import is attempted. The first algorithm that accepts
/// both keys wins.
pub const IMPORT_ORDER: &[Algorithm] = &[Algorithm::EcdsaP256Sha256, Algorithm::RsaPkcs1v15Sha256];

impl Algorithm {
    /// Stable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::EcdsaP256Sha256 => "ECDSA-P256-SHA256",
            Algorithm::RsaPkcs1v15Sha256 => "RSA-PKCS1v15-SHA256",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
