//! Keygen command implementation.

use hostsign_core::generate_key_pair;

use crate::output::{format_env_lines, format_json};

pub fn run(pem: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let pair = generate_key_pair().map_err(|e| format!("Key generation failed: {}", e))?;

    if json {
        println!("{}", format_json(&pair));
    } else if pem {
        print!("{}{}", pair.private_key_pem(), pair.public_key_pem());
    } else {
        println!("{}", format_env_lines(&pair));
    }
    Ok(())
}
