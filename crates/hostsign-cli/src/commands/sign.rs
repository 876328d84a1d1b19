//! Sign command implementation.

use hostsign_core::RequestSigner;
use tracing::info;

use crate::config::KeyArgs;
use crate::input::read_json;
use crate::output::format_json;

pub fn run(input: Option<String>, keys: KeyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let signer = RequestSigner::initialize(&keys.private_key, &keys.public_key)?;
    info!(algorithm = %signer.algorithm(), "key pair loaded");

    let value = read_json(input)?;
    let signed = signer.sign_request(&value)?;

    println!("{}", format_json(&signed));
    Ok(())
}
