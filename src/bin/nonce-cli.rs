use std::path::PathBuf;
use std::process::ExitCode;

use account_nonce::config::{load_config, AppConfig};
use account_nonce::observability::logging;
use account_nonce::{Nonce, NonceCodec, NonceInfo};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "nonce-cli")]
#[command(about = "Encode and decode account signing nonces", long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack an account number and sequence into a nonce
    Encode {
        account_number: String,
        sequence: String,
    },
    /// Pack an account query payload, e.g. '{"account_number":"5","sequence":"42"}'
    EncodeInfo { json: String },
    /// Split a nonce into account number and sequence
    Decode { nonce: u64 },
    /// Show the active bit layout
    Layout,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    logging::init(&config.observability.log_level);

    let codec = NonceCodec::from_config(&config.nonce)?;
    tracing::debug!(
        account_bits = codec.layout().account_bits(),
        sequence_bits = codec.layout().sequence_bits(),
        boundary = ?codec.boundary(),
        parsing = ?codec.parsing(),
        "Codec ready"
    );

    let output = match cli.command {
        Commands::Encode {
            account_number,
            sequence,
        } => encode(&codec, &NonceInfo::new(account_number, sequence))?,
        Commands::EncodeInfo { json } => {
            let info: NonceInfo = serde_json::from_str(&json)?;
            encode(&codec, &info)?
        }
        Commands::Decode { nonce } => {
            let nonce = Nonce::new(nonce)?;
            let info = codec.decode(nonce).inspect_err(|e| {
                tracing::warn!(nonce = %nonce, error = %e, "Nonce rejected");
            })?;
            serde_json::to_value(info)?
        }
        Commands::Layout => {
            let layout = codec.layout();
            json!({
                "account_bits": layout.account_bits(),
                "sequence_bits": layout.sequence_bits(),
                "account_limit": layout.account_limit(),
                "sequence_limit": layout.sequence_limit(),
                "max_nonce": layout.max_nonce(),
                "boundary": codec.boundary(),
                "parsing": codec.parsing(),
            })
        }
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

fn encode(codec: &NonceCodec, info: &NonceInfo) -> Result<Value, Box<dyn std::error::Error>> {
    let nonce = codec.encode_info(info).inspect_err(|e| {
        tracing::warn!(
            account_number = %info.account_number,
            sequence = %info.sequence,
            error = %e,
            "Account info rejected"
        );
    })?;
    tracing::info!(nonce = %nonce, "Nonce encoded");
    Ok(json!({ "nonce": nonce }))
}
