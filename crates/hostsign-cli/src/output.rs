//! Output formatting utilities.

use hostsign_core::GeneratedKeyPair;
use serde::Serialize;

use crate::config::{PRIVATE_KEY_ENV, PUBLIC_KEY_ENV};

/// Formats a value as pretty JSON.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a key pair as `NAME=value` lines for an env file.
pub fn format_env_lines(pair: &GeneratedKeyPair) -> String {
    format!(
        "{}={}\n{}={}",
        PRIVATE_KEY_ENV, pair.private_key, PUBLIC_KEY_ENV, pair.public_key
    )
}

/// Formats a verification verdict.
pub fn format_verdict(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "invalid"
    }
}
