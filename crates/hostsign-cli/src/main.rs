//! Hostsign CLI - sign and verify plugin-host request payloads.

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod input;
mod logging;
mod output;

use commands::{canonicalize, keygen, sign, verify};
use config::{KeyArgs, PublicKeyArgs};

#[derive(Parser)]
#[command(name = "hostsign")]
#[command(about = "Canonicalize, sign and verify plugin-host request payloads")]
struct Cli {
    /// Log import and verification details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show canonical bytes for input JSON
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Generate a development ECDSA P-256 key pair
    Keygen {
        /// Print PEM blocks instead of base64 environment lines
        #[arg(long, conflicts_with = "json")]
        pem: bool,
        /// Print the pair as a JSON object
        #[arg(long)]
        json: bool,
    },
    /// Sign a JSON payload and print the signed envelope
    Sign {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        #[command(flatten)]
        keys: KeyArgs,
    },
    /// Verify a signed envelope, or raw data with --signature
    Verify {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Base64 signature; when absent the input must be a {request, signature} envelope
        #[arg(long)]
        signature: Option<String>,
        #[command(flatten)]
        key: PublicKeyArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Canonicalize { input } => canonicalize::run(input),
        Commands::Keygen { pem, json } => keygen::run(pem, json),
        Commands::Sign { input, keys } => sign::run(input, keys),
        Commands::Verify {
            input,
            signature,
            key,
        } => verify::run(input, signature, key),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
