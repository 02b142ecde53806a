//! Shared helpers for integration tests.

use account_nonce::{BoundaryPolicy, Nonce, NonceCodec, NonceLayout, ParsePolicy};
use std::path::PathBuf;

/// Largest account number accepted under the strict boundary.
#[allow(dead_code)]
pub const MAX_ACCOUNT: u64 = (1 << 23) - 1;

/// Largest sequence accepted under the strict boundary.
#[allow(dead_code)]
pub const MAX_SEQUENCE: u64 = (1 << 20) - 1;

/// Codec matching the legacy `>`-only bounds check.
#[allow(dead_code)]
pub fn permissive_codec() -> NonceCodec {
    NonceCodec::new(
        NonceLayout::STANDARD,
        BoundaryPolicy::Permissive,
        ParsePolicy::Strict,
    )
}

/// Encode numeric fields through the decimal-string API.
#[allow(dead_code)]
pub fn encode_u64(codec: &NonceCodec, account_number: u64, sequence: u64) -> Nonce {
    codec
        .encode(&account_number.to_string(), &sequence.to_string())
        .unwrap()
}

/// Write `content` to a unique file in the system temp directory.
#[allow(dead_code)]
pub fn write_temp_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "account-nonce-{}-{}.toml",
        std::process::id(),
        name
    ));
    std::fs::write(&path, content).unwrap();
    path
}
