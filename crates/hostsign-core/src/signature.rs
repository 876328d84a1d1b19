//! Signed request envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A canonical request together with the base64 signature over its bytes.
///
/// Both fields travel together; verification re-derives the bytes from
/// `request`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureResult {
    /// Canonical payload that was signed.
    pub request: Value,
    /// Standard base64 of the raw signature bytes.
    pub signature: String,
}
