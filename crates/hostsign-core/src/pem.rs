//! Key text normalization.
//!
//! Callers hand over keys either as PEM or as bare base64 of the DER bytes,
//! usually straight from an environment variable. Bare base64 is wrapped into
//! PEM first so that both shapes go through one decoder.

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use std::fmt;

use crate::errors::ImportError;

/// Marker whose presence means the text is already PEM.
pub const PEM_BEGIN: &str = "-----BEGIN";
const PEM_END: &str = "-----END";
const PEM_LINE_WIDTH: usize = 64;

/// Standard-alphabet base64 that accepts input with or without padding.
pub(crate) const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Which half of a key pair a piece of text holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// PKCS#8 private key.
    Private,
    /// SPKI public key.
    Public,
}

impl KeyRole {
    /// PEM label used when wrapping bare base64.
    pub fn pem_label(&self) -> &'static str {
        match self {
            KeyRole::Private => "PRIVATE KEY",
            KeyRole::Public => "PUBLIC KEY",
        }
    }
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Private => f.write_str("private"),
            KeyRole::Public => f.write_str("public"),
        }
    }
}

/// Returns `text` as PEM.
///
/// Whitespace is stripped first. If the stripped text contains `-----BEGIN`
/// anywhere it is taken to be PEM already and returned untouched; otherwise
/// it is wrapped with the role's label in 64-character lines.
pub fn normalize_pem(text: &str, role: KeyRole) -> String {
    let stripped: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    let stripped_text: String = stripped.iter().collect();
    if stripped_text.contains(PEM_BEGIN) {
        return text.to_string();
    }

    let label = role.pem_label();
    let mut pem = format!("{PEM_BEGIN} {label}-----\n");
    for line in stripped.chunks(PEM_LINE_WIDTH) {
        pem.extend(line.iter());
        pem.push('\n');
    }
    pem.push_str(&format!("{PEM_END} {label}-----\n"));
    pem
}

/// Extracts and decodes the DER body of a PEM block.
///
/// The label is not checked; whatever DER is inside is handed to the
/// algorithm importers, which reject anything that is not PKCS#8 or SPKI.
pub fn decode_pem(pem: &str, role: KeyRole) -> Result<Vec<u8>, ImportError> {
    let encoding_error = |reason: &str| ImportError::Encoding {
        role,
        reason: reason.to_string(),
    };

    let begin = pem
        .find(PEM_BEGIN)
        .ok_or_else(|| encoding_error("missing PEM header"))?;
    let after_marker = begin + PEM_BEGIN.len();
    let header_close = pem[after_marker..]
        .find("-----")
        .ok_or_else(|| encoding_error("unterminated PEM header"))?;
    let body_start = after_marker + header_close + "-----".len();
    let body_len = pem[body_start..]
        .find(PEM_END)
        .ok_or_else(|| encoding_error("missing PEM footer"))?;

    let body: String = pem[body_start..body_start + body_len]
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if body.is_empty() {
        return Err(encoding_error("empty PEM body"));
    }

    BASE64_LENIENT.decode(body.as_bytes()).map_err(|e| ImportError::Encoding {
        role,
        reason: format!("invalid base64: {e}"),
    })
}

/// Normalizes then decodes key text into DER bytes.
pub fn key_der(text: &str, role: KeyRole) -> Result<Vec<u8>, ImportError> {
    decode_pem(&normalize_pem(text, role), role)
}
