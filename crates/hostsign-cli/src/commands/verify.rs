//! Verify command implementation.

use hostsign_core::{RequestVerifier, SignatureResult};
use tracing::info;

use crate::config::PublicKeyArgs;
use crate::input::read_json;
use crate::output::format_verdict;

pub fn run(
    input: Option<String>,
    signature: Option<String>,
    key: PublicKeyArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let verifier = RequestVerifier::from_public_key(&key.public_key)?;
    info!(algorithm = %verifier.algorithm(), "public key loaded");

    let value = read_json(input)?;
    let (data, signature) = match signature {
        Some(signature) => (value, signature),
        None => {
            let envelope: SignatureResult = serde_json::from_value(value)
                .map_err(|e| format!("Input is not a {{request, signature}} envelope: {}", e))?;
            (envelope.request, envelope.signature)
        }
    };

    let valid = verifier.verify_signature(&data, &signature);
    println!("{}", format_verdict(valid));

    if !valid {
        return Err("signature verification failed".into());
    }
    Ok(())
}
