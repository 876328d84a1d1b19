//! Key configuration, read from flags or the process environment.

use clap::Args;

/// Environment variable holding the private key.
pub const PRIVATE_KEY_ENV: &str = "HOSTSIGN_PRIVATE_KEY";
/// Environment variable holding the public key.
pub const PUBLIC_KEY_ENV: &str = "HOSTSIGN_PUBLIC_KEY";

/// Key pair used for signing.
#[derive(Args)]
pub struct KeyArgs {
    /// PKCS#8 private key as raw base64 or PEM
    #[arg(long, env = PRIVATE_KEY_ENV, hide_env_values = true, allow_hyphen_values = true)]
    pub private_key: String,
    /// SPKI public key as raw base64 or PEM
    #[arg(long, env = PUBLIC_KEY_ENV, hide_env_values = true, allow_hyphen_values = true)]
    pub public_key: String,
}

/// Public key used for verification.
#[derive(Args)]
pub struct PublicKeyArgs {
    /// SPKI public key as raw base64 or PEM
    #[arg(long, env = PUBLIC_KEY_ENV, hide_env_values = true, allow_hyphen_values = true)]
    pub public_key: String,
}
